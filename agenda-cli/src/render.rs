//! Colored rendering for menu output.

use owo_colors::OwoColorize;

use crate::message::{Message, Tone};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Message {
    fn render(&self) -> String {
        let text = self.to_string();
        match self.tone() {
            Tone::Success => text.green().to_string(),
            Tone::Failure => text.red().to_string(),
            Tone::Reminder => format!("🔔 {}", text.yellow()),
            Tone::Plain => text,
        }
    }
}

/// Render with color, or fall back to the plain text.
pub fn render_line(message: &Message, color: bool) -> String {
    if color {
        message.render()
    } else {
        message.to_string()
    }
}

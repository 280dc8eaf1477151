//! Colored terminal rendering for boulder-core types.

use boulder_core::Appointment;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let count = self.participants.len();
        let label = format!("({} {})", count, pluralize("participant", count));

        format!("📅 {} {} {}", self.date.bold(), self.title, label.dimmed())
    }
}

/// One participant per line, indented under the appointment.
pub fn render_participants(participants: &[String]) -> String {
    if participants.is_empty() {
        return format!("   {}", "No participants yet".dimmed());
    }

    participants
        .iter()
        .map(|name| format!("   • {}", name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

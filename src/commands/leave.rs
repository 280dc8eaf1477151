use anyhow::Result;
use boulder_core::AppointmentStore;
use owo_colors::OwoColorize;
use tracing::debug;

pub fn run(store: &AppointmentStore, date: &str, name: &str) -> Result<()> {
    if store.remove_participant(date, name)? {
        println!("{}", format!("  {} removed from {}", name, date).green());
    } else {
        debug!(date, name, "participant not removed");
        println!("{}", format!("  {} not found on {}", name, date).yellow());
    }

    Ok(())
}

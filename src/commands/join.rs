use anyhow::Result;
use boulder_core::AppointmentStore;
use boulder_core::participants::normalize_name;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

pub fn run(store: &AppointmentStore, date: &str, name: &str) -> Result<()> {
    let Some(name) = normalize_name(name) else {
        warn!(date, "rejected blank participant name");
        anyhow::bail!("Please enter a name for the new participant");
    };

    if store.add_participant(date, name)? {
        println!("{}", format!("  {} joined {}", name, date).green());
    } else {
        debug!(date, name, "participant not added");
        println!(
            "{}",
            format!("  {} not added (no appointment on {} or already listed)", name, date).yellow()
        );
    }

    Ok(())
}

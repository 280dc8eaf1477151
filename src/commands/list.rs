use anyhow::Result;
use boulder_core::AppointmentStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &AppointmentStore) -> Result<()> {
    let appointments = store.list_appointments()?;

    if appointments.is_empty() {
        println!("{}", "No appointments yet".dimmed());
        return Ok(());
    }

    for appt in &appointments {
        println!("{}", appt.render());
    }

    Ok(())
}

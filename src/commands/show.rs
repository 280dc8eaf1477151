use anyhow::Result;
use boulder_core::AppointmentStore;

use crate::render::{Render, render_participants};

pub fn run(store: &AppointmentStore, date: &str) -> Result<()> {
    let Some(appt) = store.get_appointment(date)? else {
        anyhow::bail!("No appointment on {}", date);
    };

    println!("{}", appt.render());
    println!("{}", render_participants(&appt.participants));

    Ok(())
}

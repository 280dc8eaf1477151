use anyhow::Result;
use boulder_core::participants::parse_participant_list;
use boulder_core::{AppointmentStore, UpsertOutcome};
use owo_colors::OwoColorize;

pub fn run(store: &AppointmentStore, date: &str, title: &str, participants: &str) -> Result<()> {
    let names = parse_participant_list(participants);
    let outcome = store.upsert_appointment(date, title, names)?;

    let message = match outcome {
        UpsertOutcome::Created => format!("  Added appointment on {}", date),
        UpsertOutcome::Updated => format!("  Updated appointment on {}", date),
    };
    println!("{}", message.green());

    Ok(())
}

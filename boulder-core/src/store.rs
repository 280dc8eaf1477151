//! Appointment store backed by a single CSV file.
//!
//! Every operation is a full read-modify-write cycle against the file; the
//! store keeps no state between calls besides the path.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::appointment::Appointment;
use crate::csv_format::{read_appointments, write_appointments};
use crate::date::parse_date;
use crate::error::{BoulderError, BoulderResult};

/// Whether an upsert created a new appointment or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone)]
pub struct AppointmentStore {
    path: PathBuf,
}

impl AppointmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppointmentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All appointments in file order. A missing file is an empty store.
    pub fn list_appointments(&self) -> BoulderResult<Vec<Appointment>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let appointments = read_appointments(BufReader::new(file))?;
        debug!(path = %self.path.display(), count = appointments.len(), "loaded appointments");
        Ok(appointments)
    }

    pub fn get_appointment(&self, date: &str) -> BoulderResult<Option<Appointment>> {
        let date = parse_date(date)?;
        Ok(self
            .list_appointments()?
            .into_iter()
            .find(|appt| appt.date == date))
    }

    /// Replace the appointment for `date`, or add one if none exists.
    ///
    /// The date is validated before the file is touched.
    pub fn upsert_appointment<I, S>(
        &self,
        date: &str,
        title: &str,
        participants: I,
    ) -> BoulderResult<UpsertOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let date = parse_date(date).inspect_err(|_| warn!(date, "rejected appointment date"))?;
        let participants: Vec<String> = participants.into_iter().map(Into::into).collect();

        let mut appointments = self.list_appointments()?;

        let outcome = match appointments.iter_mut().find(|appt| appt.date == date) {
            Some(existing) => {
                existing.title = title.to_string();
                existing.participants = participants;
                UpsertOutcome::Updated
            }
            None => {
                appointments.push(Appointment::new(date, title, participants));
                UpsertOutcome::Created
            }
        };

        self.save(&appointments)?;
        info!(%date, ?outcome, "saved appointment");
        Ok(outcome)
    }

    /// Add `name` to the appointment on `date`.
    ///
    /// Returns false without writing if there is no such appointment or the
    /// name is already listed.
    pub fn add_participant(&self, date: &str, name: &str) -> BoulderResult<bool> {
        self.modify_participants(date, |appt| appt.add_participant(name))
    }

    /// Remove `name` from the appointment on `date`.
    ///
    /// Returns false without writing if there is no such appointment or the
    /// name is not listed.
    pub fn remove_participant(&self, date: &str, name: &str) -> BoulderResult<bool> {
        self.modify_participants(date, |appt| appt.remove_participant(name))
    }

    fn modify_participants<F>(&self, date: &str, change: F) -> BoulderResult<bool>
    where
        F: FnOnce(&mut Appointment) -> bool,
    {
        let date = parse_date(date)?;
        let mut appointments = self.list_appointments()?;

        let Some(appt) = appointments.iter_mut().find(|appt| appt.date == date) else {
            debug!(%date, "no appointment for date");
            return Ok(false);
        };

        if !change(appt) {
            return Ok(false);
        }

        let count = appt.participants.len();
        self.save(&appointments)?;
        info!(%date, participants = count, "updated participants");
        Ok(true)
    }

    /// Write all appointments to a temp file next to the store, then rename
    /// it over the store file.
    fn save(&self, appointments: &[Appointment]) -> BoulderResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        write_appointments(&mut tmp, appointments)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| BoulderError::Io(e.error))?;

        Ok(())
    }
}

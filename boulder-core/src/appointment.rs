use chrono::NaiveDate;

/// One scheduled session on a calendar date.
///
/// The date is the key: a store holds at most one appointment per date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub date: NaiveDate,
    pub title: String,
    pub participants: Vec<String>,
}

impl Appointment {
    pub fn new(date: NaiveDate, title: impl Into<String>, participants: Vec<String>) -> Self {
        Appointment {
            date,
            title: title.into(),
            participants,
        }
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Append a participant unless already present.
    /// Returns true if the list changed.
    pub fn add_participant(&mut self, name: &str) -> bool {
        if self.has_participant(name) {
            return false;
        }
        self.participants.push(name.to_string());
        true
    }

    /// Remove the first occurrence of a participant.
    /// Returns true if the list changed.
    pub fn remove_participant(&mut self, name: &str) -> bool {
        match self.participants.iter().position(|p| p == name) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

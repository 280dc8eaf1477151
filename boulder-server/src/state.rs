use std::sync::{Arc, Mutex, MutexGuard};

use boulder_core::{AppointmentStore, BoulderConfig, CalendarOptions};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The store re-reads the file on every call; the mutex only keeps two
    // requests from interleaving their read-modify-write cycles.
    store: Arc<Mutex<AppointmentStore>>,
    pub default_title: String,
    pub calendar_options: CalendarOptions,
}

impl AppState {
    pub fn new(config: &BoulderConfig, store: AppointmentStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
            default_title: config.default_title.clone(),
            calendar_options: config.calendar_options(),
        }
    }

    pub fn store(&self) -> MutexGuard<'_, AppointmentStore> {
        // A panicking handler cannot leave the store handle inconsistent.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

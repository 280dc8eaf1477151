//! Calendar view configuration for web widgets

use axum::{Json, Router, extract::State, routing::get};

use boulder_core::CalendarOptions;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar/options", get(options))
}

/// GET /calendar/options - View options for the calendar widget
async fn options(State(state): State<AppState>) -> Json<CalendarOptions> {
    Json(state.calendar_options.clone())
}

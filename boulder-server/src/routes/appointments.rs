//! Appointment and participant endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use boulder_core::calendar_event::ExtendedProps;
use boulder_core::participants::normalize_name;
use boulder_core::{CalendarEvent, UpsertOutcome};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments).post(upsert_appointment))
        .route("/appointments/{date}", get(get_appointment))
        .route("/appointments/{date}/participants", post(add_participant))
        .route("/appointments/{date}/participants/{name}", delete(remove_participant))
}

/// GET /appointments - All appointments as calendar events
async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let appointments = state.store().list_appointments()?;
    Ok(Json(appointments.into_iter().map(CalendarEvent::from).collect()))
}

/// GET /appointments/:date - One appointment, e.g. after a calendar click
async fn get_appointment(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<CalendarEvent>, AppError> {
    let appointment = state
        .store()
        .get_appointment(&date)?
        .ok_or_else(|| AppError::NotFound(format!("No appointment on {}", date)))?;

    Ok(Json(appointment.into()))
}

/// Request body for adding or replacing an appointment
#[derive(Deserialize)]
pub struct UpsertRequest {
    pub date: String,
    pub title: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Serialize)]
pub struct UpsertResponse {
    pub outcome: UpsertOutcome,
    pub event: CalendarEvent,
}

/// POST /appointments - Add an appointment, or replace the one on that date
async fn upsert_appointment(
    State(state): State<AppState>,
    Json(req): Json<UpsertRequest>,
) -> Result<Json<UpsertResponse>, AppError> {
    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| state.default_title.clone());
    let participants: Vec<String> = req
        .participants
        .iter()
        .filter_map(|p| normalize_name(p))
        .map(str::to_string)
        .collect();

    let outcome = state
        .store()
        .upsert_appointment(&req.date, &title, participants.iter().cloned())?;

    Ok(Json(UpsertResponse {
        outcome,
        event: CalendarEvent {
            title,
            start: req.date,
            extended_props: ExtendedProps { participants },
        },
    }))
}

#[derive(Deserialize)]
pub struct ParticipantRequest {
    pub name: String,
}

/// Whether a participant mutation changed anything
#[derive(Serialize)]
pub struct ParticipantResponse {
    pub changed: bool,
}

/// POST /appointments/:date/participants - Add a participant
async fn add_participant(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(req): Json<ParticipantRequest>,
) -> Result<Json<ParticipantResponse>, AppError> {
    let name = normalize_name(&req.name)
        .ok_or_else(|| AppError::BadRequest("Participant name must not be empty".to_string()))?;

    let changed = state.store().add_participant(&date, name)?;
    Ok(Json(ParticipantResponse { changed }))
}

/// DELETE /appointments/:date/participants/:name - Remove a participant
async fn remove_participant(
    State(state): State<AppState>,
    Path((date, name)): Path<(String, String)>,
) -> Result<Json<ParticipantResponse>, AppError> {
    let changed = state.store().remove_participant(&date, &name)?;
    Ok(Json(ParticipantResponse { changed }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use boulder_core::{AppointmentStore, BoulderConfig};
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (TempDir, AppointmentStore, Router) {
        let dir = TempDir::new().unwrap();
        let store = AppointmentStore::new(dir.path().join("appointments.csv"));
        let state = AppState::new(&BoulderConfig::default(), store.clone());
        (dir, store, router().with_state(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (_dir, _store, app) = test_app();
        let (status, body) = send(&app, Method::GET, "/appointments", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn upsert_creates_then_updates() {
        let (_dir, store, app) = test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/appointments",
            Some(json!({ "date": "2024-06-01", "participants": ["Alice", " Bob ", ""] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "created");
        assert_eq!(body["event"]["title"], "Bouldern");
        assert_eq!(body["event"]["extendedProps"]["participants"], json!(["Alice", "Bob"]));

        let (_, body) = send(
            &app,
            Method::POST,
            "/appointments",
            Some(json!({ "date": "2024-06-01", "title": "Outdoor", "participants": ["Carol"] })),
        )
        .await;
        assert_eq!(body["outcome"], "updated");

        let appointments = store.list_appointments().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].title, "Outdoor");
        assert_eq!(appointments[0].participants, vec!["Carol"]);
    }

    #[tokio::test]
    async fn invalid_date_is_bad_request() {
        let (_dir, store, app) = test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/appointments",
            Some(json!({ "date": "2024/06/01", "participants": ["Alice"] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn get_unknown_appointment_is_not_found() {
        let (_dir, _store, app) = test_app();
        let (status, _) = send(&app, Method::GET, "/appointments/2024-06-01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn participants_can_join_and_leave() {
        let (_dir, store, app) = test_app();
        store
            .upsert_appointment("2024-06-01", "Bouldern", ["Alice", "Bob"])
            .unwrap();

        let join = json!({ "name": "Carol" });
        let (_, body) = send(&app, Method::POST, "/appointments/2024-06-01/participants", Some(join.clone())).await;
        assert_eq!(body["changed"], true);
        let (_, body) = send(&app, Method::POST, "/appointments/2024-06-01/participants", Some(join)).await;
        assert_eq!(body["changed"], false);

        let (_, body) = send(&app, Method::DELETE, "/appointments/2024-06-01/participants/Alice", None).await;
        assert_eq!(body["changed"], true);

        let (status, body) = send(&app, Method::GET, "/appointments/2024-06-01", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extendedProps"]["participants"], json!(["Bob", "Carol"]));
    }

    #[tokio::test]
    async fn participant_on_missing_appointment_is_unchanged() {
        let (_dir, _store, app) = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/appointments/2024-06-01/participants",
            Some(json!({ "name": "Alice" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
    }

    #[tokio::test]
    async fn blank_participant_name_is_rejected() {
        let (_dir, store, app) = test_app();
        store.upsert_appointment("2024-06-01", "Bouldern", ["Alice"]).unwrap();

        let (status, _) = send(
            &app,
            Method::POST,
            "/appointments/2024-06-01/participants",
            Some(json!({ "name": "   " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn percent_encoded_names_are_removed() {
        let (_dir, store, app) = test_app();
        store
            .upsert_appointment("2024-06-01", "Bouldern", ["Doe, Jane", "Bob"])
            .unwrap();

        let (_, body) = send(
            &app,
            Method::DELETE,
            "/appointments/2024-06-01/participants/Doe%2C%20Jane",
            None,
        )
        .await;
        assert_eq!(body["changed"], true);

        let appt = store.get_appointment("2024-06-01").unwrap().unwrap();
        assert_eq!(appt.participants, vec!["Bob"]);
    }

    #[tokio::test]
    async fn malformed_store_is_internal_error() {
        let (_dir, store, app) = test_app();
        std::fs::write(store.path(), "not,a\n").unwrap();

        let (status, body) = send(&app, Method::GET, "/appointments", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("line 1"));
    }
}

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, Timelike};
use tower_http::services::ServeDir;

use crate::domain::{Filter, LeadTime, Location, Preferences, TimeOfDay};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/board", get(upcoming_board))
        .route("/timetable", get(full_timetable))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Read the user's preferences from the query, as one snapshot.
///
/// Absent parameters get the page defaults; present-but-invalid parameters
/// are an error rather than a silent fallback.
fn parse_preferences(query: &BoardQuery) -> Result<Preferences, AppError> {
    let location = match query.location.as_deref() {
        Some(s) => Location::parse(s).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => Location::Neluwa,
    };

    let filter = match query.filter.as_deref() {
        Some(s) => Filter::parse(s).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => Filter::All,
    };

    let lead_time = match query.lead {
        Some(mins) => LeadTime::from_minutes(mins).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => LeadTime::default(),
    };

    Ok(Preferences {
        location,
        filter,
        notifications_enabled: query.notify.unwrap_or(false),
        lead_time,
    })
}

/// The clock reading to render for: an explicit `time` parameter, or the
/// local wall clock.
fn parse_now(query: &BoardQuery) -> Result<TimeOfDay, AppError> {
    match query.time.as_deref() {
        Some(s) => TimeOfDay::parse_hhmm(s).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        }),
        None => {
            let now = Local::now().time();
            TimeOfDay::from_hm(now.hour(), now.minute()).ok_or(AppError::Internal {
                message: "wall clock out of range".to_string(),
            })
        }
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The single-screen board page.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    let prefs = parse_preferences(&query)?;
    let now = parse_now(&query)?;
    let date_line = Local::now().format("%A, %B %-d, %Y").to_string();

    let template = IndexTemplate::build(&state.board, now, date_line, &prefs);
    Ok(template.into_response())
}

/// Upcoming buses under the active preferences.
async fn upcoming_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    let prefs = parse_preferences(&query)?;
    let now = parse_now(&query)?;

    let buses = state.board.next_buses(now, prefs.location, prefs.filter);

    if accepts_html(&headers) {
        let template = BoardTemplate {
            location_name: prefs.location.display_name().to_string(),
            buses: buses
                .iter()
                .map(|bus| ArrivalView::from_arrival(bus, now))
                .collect(),
        };

        Ok(template.into_response())
    } else {
        let response = BoardResponse {
            time: now.to_string(),
            location: prefs.location.as_str().to_string(),
            filter: prefs.filter.as_str().to_string(),
            buses: buses
                .iter()
                .map(|bus| ArrivalResult::from_arrival(bus, now))
                .collect(),
        };

        Ok(Json(response).into_response())
    }
}

/// The complete timetable, unfiltered, in posted per-route order.
async fn full_timetable(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let timetable = state.board.timetable();

    if accepts_html(&headers) {
        let template = TimetableTemplate {
            columns: RouteColumnView::all(),
            rows: timetable_rows(timetable),
        };

        Ok(template.into_response())
    } else {
        let rows = timetable_rows(timetable)
            .into_iter()
            .map(|row| TimetableRowResult {
                cells: row
                    .cells
                    .into_iter()
                    .map(|cell| {
                        cell.map(|c| TimetableCell {
                            time: c.time,
                            operator: c.operator_name,
                        })
                    })
                    .collect(),
            })
            .collect();

        let response = TimetableResponse {
            routes: crate::domain::Route::ALL
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            rows,
        };

        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

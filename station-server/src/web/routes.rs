//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::{Coordinate, InvalidCoordinate};
use crate::geocode::{GeocodeError, resolve_address};
use crate::geolocation::{Position, PositionError, require_secure_origin};
use crate::locator::{LocateOutcome, Session};
use crate::stations::CatalogSource;

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
        .route("/api/stations", get(list_stations))
        .route("/api/stations/nearest", get(nearest_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/map", get(map_view))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with locate button and address form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        station_count: state.catalog.len().await,
        degraded: state.catalog.source().await == CatalogSource::Fallback,
        geo_timeout_ms: state.geolocation.timeout_ms(),
        geo_max_age_ms: state.geolocation.max_age_ms(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Every station in the catalog.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state.catalog.stations().await;

    Json(StationListResponse {
        source: state.catalog.source().await,
        count: stations.len(),
        stations: stations.iter().map(StationInfo::from_station).collect(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Scheme and host as the client saw them, honouring a reverse proxy.
fn request_origin(headers: &HeaderMap) -> (Option<&str>, Option<&str>) {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok());
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    (scheme, host)
}

/// Stations near the device position reported by the browser.
async fn nearest_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NearestRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query?;
    let (scheme, host) = request_origin(&headers);
    require_secure_origin(scheme, host)?;

    let position = match (req.error, req.lat, req.lng) {
        (Some(code), _, _) => return Err(PositionError::from_code(&code).into()),
        (None, Some(lat), Some(lng)) => Position::new(Coordinate::new(lat, lng)?, req.accuracy),
        _ => {
            return Err(AppError::BadRequest {
                message: "lat and lng are required".to_string(),
            });
        }
    };

    let origin = position.coordinate;
    info!(%origin, accuracy_m = ?position.accuracy_m, expanded = req.expanded, "nearest lookup");

    let outcome = locate(&state, origin, req.expanded).await;
    let response = LookupResponse::from_outcome(&outcome, state.locator.radius_miles);
    let more_url = format!(
        "/api/stations/nearest?lat={}&lng={}&expanded=true",
        origin.lat(),
        origin.lng()
    );

    respond(&headers, response, more_url)
}

/// Stations near a geocoded address.
async fn search_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<AddressSearchRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query?;
    let found =
        resolve_address(state.geocoder.as_ref(), &req.address, &state.region_qualifier).await?;

    let response = match found {
        Some(found) => {
            info!(origin = %found.coordinate, address = %found.display_address, "address lookup");
            let outcome = locate(&state, found.coordinate, req.expanded).await;
            LookupResponse::from_outcome(&outcome, state.locator.radius_miles)
                .with_display_address(found.display_address)
        }
        None => {
            info!(address = %req.address.trim(), "address not found");
            LookupResponse::unknown_address()
        }
    };

    let more_url = format!(
        "/api/stations/search?address={}&expanded=true",
        urlencoding::encode(req.address.trim())
    );

    respond(&headers, response, more_url)
}

/// Map center and markers for the stations that would be listed.
async fn map_view(
    State(state): State<AppState>,
    query: Result<Query<MapRequest>, QueryRejection>,
) -> Result<Json<MapResponse>, AppError> {
    let Query(req) = query?;
    let origin = Coordinate::new(req.lat, req.lng)?;
    let outcome = locate(&state, origin, req.expanded).await;

    let markers = outcome
        .stations()
        .iter()
        .map(MapMarker::from_ranked)
        .collect();
    let response = LookupResponse::from_outcome(&outcome, state.locator.radius_miles);

    Ok(Json(MapResponse {
        status: response.status,
        message: response.message,
        center: MapPoint {
            lat: origin.lat(),
            lng: origin.lng(),
        },
        markers,
        has_more: response.has_more,
    }))
}

/// Run the region check and nearest-station search for one request.
async fn locate(state: &AppState, origin: Coordinate, expanded: bool) -> LocateOutcome {
    let mut session = Session::new(state.catalog.stations().await, state.locator.clone());
    let outcome = session.locate(origin);

    if expanded && let Some(more) = session.show_more() {
        return more;
    }
    outcome
}

/// Return HTML or JSON based on Accept header.
fn respond(
    headers: &HeaderMap,
    response: LookupResponse,
    more_url: String,
) -> Result<Response, AppError> {
    if accepts_html(headers) {
        let template = StationListTemplate::from_response(&response, more_url);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Forbidden { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<PositionError> for AppError {
    fn from(e: PositionError) -> Self {
        match e {
            PositionError::InsecureContext => AppError::Forbidden {
                message: e.to_string(),
            },
            _ => AppError::Unprocessable {
                message: e.to_string(),
            },
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        warn!(error = %e, "address lookup failed");
        match e {
            GeocodeError::EmptyQuery => AppError::BadRequest {
                message: e.user_message().to_string(),
            },
            _ => AppError::Unprocessable {
                message: e.user_message().to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

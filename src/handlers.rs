//! Request handlers for the ride endpoints.
//!
//! Handlers are stateless: they validate, call the injected [`RideStore`] and
//! shape the JSON body. The status code of error bodies follows the configured
//! [`StatusPolicy`].

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::StatusPolicy;
use crate::error::{ApiError, ErrorCode};
use crate::models::{NewRide, Ride, RideRequest};
use crate::routes::AppState;
use crate::store::{Page, StoreError};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Body of every ride endpoint response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RidesResponse {
    Rides(Vec<Ride>),
    Errors(Vec<ApiError>),
    Error(ApiError),
}

impl RidesResponse {
    fn error_code(&self) -> Option<ErrorCode> {
        match self {
            RidesResponse::Rides(_) => None,
            RidesResponse::Errors(errors) => errors.first().map(|e| e.error_code),
            RidesResponse::Error(error) => Some(error.error_code),
        }
    }

    pub fn with_policy(self, policy: StatusPolicy) -> Response {
        let status = self
            .error_code()
            .map_or(StatusCode::OK, |code| code.status(policy));
        (status, Json(self)).into_response()
    }
}

/// Raw `page`/`limit` query parameters. Kept as strings so that garbage input
/// falls back to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<i64>().ok());

        let page = parse(page).filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = parse(limit).filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn to_page(self) -> Page {
        Page::new(self.limit, self.offset())
    }
}

impl From<&ListParams> for Pagination {
    fn from(params: &ListParams) -> Self {
        Self::from_query(params.page.as_deref(), params.limit.as_deref())
    }
}

fn store_failure(operation: &str, err: &StoreError) -> RidesResponse {
    error!(operation, code = err.code(), error = %err, "ride store failure");
    RidesResponse::Error(ApiError::server())
}

/// `GET /health`
pub async fn health() -> &'static str {
    "Healthy"
}

/// `POST /rides`
pub async fn create_ride(State(state): State<AppState>, body: Bytes) -> Response {
    let policy = state.status_policy;

    let value = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "ride request body is not valid JSON");
            return RidesResponse::Errors(vec![ApiError::validation(
                "Request body must be valid JSON",
            )])
            .with_policy(policy);
        }
    };
    let Some(request) = RideRequest::from_value(value) else {
        warn!("ride request body is not a JSON object");
        return RidesResponse::Errors(vec![ApiError::validation(
            "Request body must be a JSON object",
        )])
        .with_policy(policy);
    };

    let ride = match NewRide::try_from(&request) {
        Ok(ride) => ride,
        Err(errors) => {
            info!(errors = errors.len(), "ride request failed validation");
            return RidesResponse::Errors(errors).with_policy(policy);
        }
    };

    match state.store.insert(ride).await {
        Ok(ride) => {
            info!(ride_id = ride.ride_id, "created ride");
            RidesResponse::Rides(vec![ride]).with_policy(policy)
        }
        Err(e) => store_failure("insert", &e).with_policy(policy),
    }
}

/// `GET /rides?page=&limit=`
pub async fn list_rides(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Response {
    // An undecodable query string pages with the defaults.
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            info!(error = %e, "ignoring undecodable query string");
            ListParams::default()
        }
    };
    let pagination = Pagination::from(&params);

    let response = match state.store.list_page(pagination.to_page()).await {
        Ok(rides) if rides.is_empty() => RidesResponse::Error(ApiError::not_found()),
        Ok(rides) => RidesResponse::Rides(rides),
        Err(e) => store_failure("list_page", &e),
    };
    response.with_policy(state.status_policy)
}

/// `GET /rides/{id}`
pub async fn get_ride(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let id = match path {
        Ok(Path(id)) => id,
        Err(e) => {
            info!(error = %e, "ride id could not be decoded");
            return RidesResponse::Error(ApiError::not_found()).with_policy(state.status_policy);
        }
    };

    // A non-integer id cannot match any row.
    let Ok(ride_id) = id.trim().parse::<i64>() else {
        info!(id = %id, "ride id is not an integer");
        return RidesResponse::Error(ApiError::not_found()).with_policy(state.status_policy);
    };

    let response = match state.store.get_by_id(ride_id).await {
        Ok(rides) if rides.is_empty() => RidesResponse::Error(ApiError::not_found()),
        Ok(rides) => RidesResponse::Rides(rides),
        Err(e) => store_failure("get_by_id", &e),
    };
    response.with_policy(state.status_policy)
}

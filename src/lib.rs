//! Ride booking records over HTTP.
//!
//! `POST /rides` validates and stores a ride, `GET /rides` pages through
//! stored rides and `GET /rides/{id}` fetches one. Rides live in a single
//! SQLite table behind the [`store::RideStore`] trait.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validation;

pub use config::{AppConfig, StatusPolicy};
pub use error::{ApiError, ErrorCode};
pub use models::{NewRide, Ride, RideRequest};
pub use routes::{router, AppState};
pub use store::{Page, RideStore, SqlRideStore, StoreError};

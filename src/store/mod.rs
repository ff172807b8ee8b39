//! Persistence for rides.
//!
//! Handlers only see [`RideStore`]; the engine behind it is chosen at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewRide, Ride};

pub mod sql;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use sql::SqlRideStore;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryRideStore;

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        STORAGE_ERROR
    }
}

/// A window over the rides ordered by `rideID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(0),
            offset: offset.max(0),
        }
    }
}

#[async_trait]
pub trait RideStore: Send + Sync + 'static {
    /// Persists a validated ride and returns it with its id and creation time.
    async fn insert(&self, ride: NewRide) -> Result<Ride, StoreError>;

    /// Rides in insertion order, restricted to `page`.
    async fn list_page(&self, page: Page) -> Result<Vec<Ride>, StoreError>;

    /// Zero or one ride with the given id.
    async fn get_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, StoreError>;
}

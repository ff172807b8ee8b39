use async_trait::async_trait;
use tracing::debug;

use super::{Page, RideStore, StoreError};
use crate::db::{queries, DbPool};
use crate::models::{NewRide, Ride};

/// [`RideStore`] backed by the `Rides` table.
#[derive(Debug, Clone)]
pub struct SqlRideStore {
    pool: DbPool,
}

impl SqlRideStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl RideStore for SqlRideStore {
    async fn insert(&self, ride: NewRide) -> Result<Ride, StoreError> {
        let stored: Ride = sqlx::query_as(queries::INSERT_RIDE)
            .bind(ride.start_lat)
            .bind(ride.start_long)
            .bind(ride.end_lat)
            .bind(ride.end_long)
            .bind(&ride.rider_name)
            .bind(&ride.driver_name)
            .bind(&ride.driver_vehicle)
            .fetch_one(&self.pool)
            .await?;

        debug!(ride_id = stored.ride_id, "inserted ride");
        Ok(stored)
    }

    async fn list_page(&self, page: Page) -> Result<Vec<Ride>, StoreError> {
        let rides = sqlx::query_as(queries::SELECT_RIDES_PAGE)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rides)
    }

    async fn get_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, StoreError> {
        let rides = sqlx::query_as(queries::SELECT_RIDE_BY_ID)
            .bind(ride_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rides)
    }
}

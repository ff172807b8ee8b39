use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{Page, RideStore, StoreError};
use crate::models::{NewRide, Ride};

/// In-process [`RideStore`] with the same ordering and paging as the SQL store.
#[derive(Debug, Default)]
pub struct MemoryRideStore {
    rides: Mutex<Vec<Ride>>,
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Ride>>, StoreError> {
        self.rides
            .lock()
            .map_err(|_| StoreError::Unavailable("ride store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RideStore for MemoryRideStore {
    async fn insert(&self, ride: NewRide) -> Result<Ride, StoreError> {
        let mut rides = self.lock()?;
        let ride_id = rides.last().map_or(1, |r| r.ride_id + 1);
        let stored = ride.into_ride(ride_id, Utc::now().naive_utc());
        rides.push(stored.clone());
        Ok(stored)
    }

    async fn list_page(&self, page: Page) -> Result<Vec<Ride>, StoreError> {
        let rides = self.lock()?;
        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(rides.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn get_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, StoreError> {
        let rides = self.lock()?;
        Ok(rides.iter().filter(|r| r.ride_id == ride_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_ride(rider: &str) -> NewRide {
        NewRide {
            start_lat: 1.0,
            start_long: 2.0,
            end_lat: 3.0,
            end_long: 4.0,
            rider_name: rider.to_string(),
            driver_name: "driver".to_string(),
            driver_vehicle: "van".to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = MemoryRideStore::new();
        assert_eq!(store.insert(new_ride("a")).await.unwrap().ride_id, 1);
        assert_eq!(store.insert(new_ride("b")).await.unwrap().ride_id, 2);
        assert_eq!(store.get_by_id(2).await.unwrap()[0].rider_name, "b");
    }

    #[tokio::test]
    async fn pages_like_limit_offset() {
        let store = MemoryRideStore::new();
        for i in 0..5 {
            store.insert(new_ride(&i.to_string())).await.unwrap();
        }
        let page = store.list_page(Page::new(2, 2)).await.unwrap();
        let ids: Vec<_> = page.iter().map(|r| r.ride_id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(store.list_page(Page::new(10, 5)).await.unwrap().is_empty());
    }
}

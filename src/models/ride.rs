use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted ride, shaped like a row of the `Rides` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(rename = "rideID")]
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    #[sqlx(rename = "startLat")]
    pub start_lat: f64,
    #[sqlx(rename = "startLong")]
    pub start_long: f64,
    #[sqlx(rename = "endLat")]
    pub end_lat: f64,
    #[sqlx(rename = "endLong")]
    pub end_long: f64,
    #[sqlx(rename = "riderName")]
    pub rider_name: String,
    #[sqlx(rename = "driverName")]
    pub driver_name: String,
    #[sqlx(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: NaiveDateTime,
}

/// Ride fields that passed validation and are ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

impl NewRide {
    pub fn into_ride(self, ride_id: i64, created: NaiveDateTime) -> Ride {
        Ride {
            ride_id,
            start_lat: self.start_lat,
            start_long: self.start_long,
            end_lat: self.end_lat,
            end_long: self.end_long,
            rider_name: self.rider_name,
            driver_name: self.driver_name,
            driver_vehicle: self.driver_vehicle,
            created,
        }
    }
}

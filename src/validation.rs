//! Field checks for ride creation requests.
//!
//! All checks run on every request and each one contributes at most one
//! error, so a caller sees every problem with a payload at once.

use crate::error::ApiError;
use crate::models::{Loose, NewRide, RideRequest};

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Which end of the trip a coordinate pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Start => "Start",
            Side::End => "End",
        }
    }
}

fn coordinate_in(
    value: Option<&Loose<f64>>,
    range: &std::ops::RangeInclusive<f64>,
) -> Option<f64> {
    value
        .and_then(Loose::<f64>::as_coordinate)
        .filter(|v| range.contains(v))
}

/// Pushes one error when either coordinate of the pair is missing, not a
/// number, or out of range.
pub fn validate_coordinates(
    latitude: Option<&Loose<f64>>,
    longitude: Option<&Loose<f64>>,
    side: Side,
    errors: &mut Vec<ApiError>,
) {
    let lat_ok = coordinate_in(latitude, &LATITUDE_RANGE).is_some();
    let long_ok = coordinate_in(longitude, &LONGITUDE_RANGE).is_some();
    if !(lat_ok && long_ok) {
        errors.push(ApiError::validation(format!(
            "{} latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively",
            side.label()
        )));
    }
}

pub fn validate_non_empty_string(
    value: Option<&Loose<String>>,
    field: &str,
    errors: &mut Vec<ApiError>,
) {
    if value.and_then(Loose::<String>::as_non_empty).is_none() {
        errors.push(ApiError::validation(format!(
            "{field} must be a non-empty string"
        )));
    }
}

/// Runs every check against the request and returns the collected errors.
pub fn validate(request: &RideRequest) -> Vec<ApiError> {
    let mut errors = Vec::new();

    validate_coordinates(
        request.start_lat.as_ref(),
        request.start_long.as_ref(),
        Side::Start,
        &mut errors,
    );
    validate_coordinates(
        request.end_lat.as_ref(),
        request.end_long.as_ref(),
        Side::End,
        &mut errors,
    );
    validate_non_empty_string(request.rider_name.as_ref(), "Rider name", &mut errors);
    validate_non_empty_string(request.driver_name.as_ref(), "Driver name", &mut errors);
    validate_non_empty_string(
        request.driver_vehicle.as_ref(),
        "Driver vehicle",
        &mut errors,
    );

    errors
}

impl TryFrom<&RideRequest> for NewRide {
    type Error = Vec<ApiError>;

    fn try_from(request: &RideRequest) -> Result<Self, Self::Error> {
        let errors = validate(request);
        if !errors.is_empty() {
            return Err(errors);
        }

        let coordinate =
            |v: &Option<Loose<f64>>| v.as_ref().and_then(Loose::<f64>::as_coordinate);
        let text = |v: &Option<Loose<String>>| {
            v.as_ref()
                .and_then(Loose::<String>::as_non_empty)
                .map(str::to_string)
        };

        match (
            coordinate(&request.start_lat),
            coordinate(&request.start_long),
            coordinate(&request.end_lat),
            coordinate(&request.end_long),
            text(&request.rider_name),
            text(&request.driver_name),
            text(&request.driver_vehicle),
        ) {
            (
                Some(start_lat),
                Some(start_long),
                Some(end_lat),
                Some(end_long),
                Some(rider_name),
                Some(driver_name),
                Some(driver_vehicle),
            ) => Ok(NewRide {
                start_lat,
                start_long,
                end_lat,
                end_long,
                rider_name,
                driver_name,
                driver_vehicle,
            }),
            // validate() already rejects every case that lands here
            _ => Err(vec![ApiError::validation("Ride request is incomplete")]),
        }
    }
}

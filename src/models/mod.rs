pub mod request;
pub mod ride;

pub use request::{Loose, RideRequest};
pub use ride::{NewRide, Ride};

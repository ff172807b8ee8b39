use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A field that either has the expected type or is kept as the raw JSON value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose<T> {
    Typed(T),
    Untyped(Value),
}

impl Loose<f64> {
    /// Numeric value of a coordinate. Numeric strings are accepted, anything
    /// else (including non-finite numbers) is not a coordinate.
    pub fn as_coordinate(&self) -> Option<f64> {
        let value = match self {
            Loose::Typed(f) => Some(*f),
            Loose::Untyped(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    s.parse::<f64>().ok()
                }
            }
            Loose::Untyped(_) => None,
        };
        value.filter(|v| v.is_finite())
    }
}

impl Loose<String> {
    /// The text when it is a JSON string with at least one character.
    pub fn as_non_empty(&self) -> Option<&str> {
        match self {
            Loose::Typed(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Body of `POST /rides`. Every field is optional so that a missing field and a
/// field of the wrong type can both reach the validator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RideRequest {
    #[serde(default, deserialize_with = "present")]
    pub start_lat: Option<Loose<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub start_long: Option<Loose<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub end_lat: Option<Loose<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub end_long: Option<Loose<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub rider_name: Option<Loose<String>>,
    #[serde(default, deserialize_with = "present")]
    pub driver_name: Option<Loose<String>>,
    #[serde(default, deserialize_with = "present")]
    pub driver_vehicle: Option<Loose<String>>,
}

// `null` is treated the same as a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Loose<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let v: Option<Loose<T>> = Option::deserialize(deserializer)?;
    Ok(v.filter(|loose| !matches!(loose, Loose::Untyped(Value::Null))))
}

impl RideRequest {
    /// Reads a request from an arbitrary JSON document. Returns `None` when the
    /// document is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_typed_payload() {
        let request: RideRequest = serde_json::from_value(json!({
            "start_lat": 10,
            "start_long": -122.4194,
            "end_lat": 20.5,
            "end_long": 20,
            "rider_name": "test",
            "driver_name": "test",
            "driver_vehicle": "test"
        }))
        .unwrap();

        assert_eq!(request.start_lat, Some(Loose::Typed(10.0)));
        assert_eq!(request.start_long, Some(Loose::Typed(-122.4194)));
        assert_eq!(
            request.rider_name,
            Some(Loose::Typed("test".to_string()))
        );
    }

    #[test]
    fn keeps_wrong_types_instead_of_failing() {
        let request: RideRequest = serde_json::from_value(json!({
            "start_lat": "north",
            "start_long": [1, 2],
            "rider_name": 42,
            "driver_name": {"first": "Jane"}
        }))
        .unwrap();

        assert_eq!(request.start_lat, Some(Loose::Untyped(json!("north"))));
        assert_eq!(request.start_long, Some(Loose::Untyped(json!([1, 2]))));
        assert_eq!(request.rider_name, Some(Loose::Untyped(json!(42))));
        assert!(request.driver_name.is_some());
        assert!(request.end_lat.is_none());
        assert!(request.driver_vehicle.is_none());
    }

    #[test]
    fn null_is_absent() {
        let request: RideRequest =
            serde_json::from_value(json!({"start_lat": null, "rider_name": null})).unwrap();
        assert!(request.start_lat.is_none());
        assert!(request.rider_name.is_none());
    }

    #[test]
    fn coordinate_accepts_numeric_strings() {
        assert_eq!(
            Loose::<f64>::Untyped(json!("+20.652494")).as_coordinate(),
            Some(20.652494)
        );
        assert_eq!(
            Loose::<f64>::Untyped(json!(" -100.5 ")).as_coordinate(),
            Some(-100.5)
        );
        assert_eq!(Loose::<f64>::Untyped(json!("")).as_coordinate(), None);
        assert_eq!(Loose::<f64>::Untyped(json!("abc")).as_coordinate(), None);
        assert_eq!(Loose::<f64>::Untyped(json!(true)).as_coordinate(), None);
    }

    #[test]
    fn coordinate_rejects_non_finite_strings() {
        assert_eq!(Loose::<f64>::Untyped(json!("NaN")).as_coordinate(), None);
        assert_eq!(Loose::<f64>::Untyped(json!("inf")).as_coordinate(), None);
    }

    #[test]
    fn text_must_be_a_non_empty_string() {
        assert_eq!(
            Loose::Typed("a".to_string()).as_non_empty(),
            Some("a")
        );
        assert_eq!(Loose::Typed(String::new()).as_non_empty(), None);
        assert_eq!(Loose::<String>::Untyped(json!(12)).as_non_empty(), None);
    }

    #[test]
    fn from_value_requires_an_object() {
        assert!(RideRequest::from_value(json!([1, 2, 3])).is_none());
        assert!(RideRequest::from_value(json!("ride")).is_none());
        assert_eq!(
            RideRequest::from_value(json!({})),
            Some(RideRequest::default())
        );
    }
}

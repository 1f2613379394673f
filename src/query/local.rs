//! Distance-based geo restriction.

use crate::error::{Error, Result};
use crate::params::{Params, ToParams};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Validates the pair: both components finite, latitude within
    /// [-90, 90], longitude within [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::configuration("coordinates must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::configuration(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(Error::configuration(format!(
                "longitude {} out of range [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Center-point-and-radius filter.
///
/// Radius is in miles by contract. Always composes with other
/// restrictions as a logical AND; it never relaxes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    coordinates: Coordinates,
    miles: f64,
}

impl Local {
    pub fn new(coordinates: Coordinates, miles: f64) -> Result<Self> {
        if !miles.is_finite() || miles <= 0.0 {
            return Err(Error::configuration("radius must be a positive number of miles"));
        }
        Ok(Self { coordinates, miles })
    }
}

impl ToParams for Local {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.set("qt", "geo");
        params.set("lat", self.coordinates.lat.to_string());
        params.set("long", self.coordinates.lng.to_string());
        params.set("radius", self.miles.to_string());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_geo_params() {
        let local = Local::new(Coordinates::new(40.7, -73.5).unwrap(), 5.0).unwrap();
        let params = local.to_params();
        assert_eq!(params.get("qt"), Some(&ParamValue::Scalar("geo".into())));
        assert_eq!(params.get("lat"), Some(&ParamValue::Scalar("40.7".into())));
        assert_eq!(params.get("long"), Some(&ParamValue::Scalar("-73.5".into())));
        assert_eq!(params.get("radius"), Some(&ParamValue::Scalar("5".into())));
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(matches!(
            Coordinates::new(91.0, 0.0),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(matches!(
            Coordinates::new(0.0, -181.0),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_positive_radius() {
        let coords = Coordinates::new(40.7, -73.5).unwrap();
        assert!(Local::new(coords, 0.0).is_err());
        assert!(Local::new(coords, -1.0).is_err());
        assert!(Local::new(coords, f64::NAN).is_err());
    }
}

/// Geographical coordinates: latitude and longitude, in radians.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
}

/// Projected coordinates: easting and northing, in grid units.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Grid {
    pub easting: f64,
    pub northing: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl Geodetic {
    /// A `Geodetic` from latitude/longitude, with the angular input in radians
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Geodetic {
        Geodetic {
            latitude,
            longitude,
        }
    }

    /// A `Geodetic` from latitude/longitude, with the angular input in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> Geodetic {
        Geodetic::new(latitude.to_radians(), longitude.to_radians())
    }

    /// Latitude and longitude, in degrees
    #[must_use]
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude.to_degrees(), self.longitude.to_degrees())
    }
}

impl Grid {
    #[must_use]
    pub fn new(easting: f64, northing: f64) -> Grid {
        Grid { easting, northing }
    }

    /// Euclidean distance between two grid points, in grid units
    #[must_use]
    pub fn distance(&self, other: &Grid) -> f64 {
        (self.easting - other.easting).hypot(self.northing - other.northing)
    }
}

// ----- Tests ---------------------------------------------------------------------

//! The New Zealand Transverse Mercator 2000 grid
use crate::tmerc::TransverseMercator;
use crate::{Ellipsoid, Error, Geodetic, Grid};
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::f64::consts::FRAC_PI_2;

// ----- C O N S T A N T S -------------------------------------------------------------

/// Semimajor axis of the GRS80 ellipsoid (m)
pub const NZTM_A: f64 = 6_378_137.0;
/// Inverse flattening of the GRS80 ellipsoid
pub const NZTM_RF: f64 = 298.257_222_101;
/// Central meridian (degrees)
pub const NZTM_CM: f64 = 173.0;
/// Scale factor on the central meridian
pub const NZTM_SF: f64 = 0.9996;
/// Latitude of origin (degrees)
pub const NZTM_OLAT: f64 = 0.0;
/// False easting (m)
pub const NZTM_FE: f64 = 1_600_000.0;
/// False northing (m)
pub const NZTM_FN: f64 = 10_000_000.0;
/// Grid unit to metre conversion
pub const NZTM_UTOM: f64 = 1.0;

// Initialized on first use, with happens-before guarantees for all threads
static NZTM: Lazy<TransverseMercator> = Lazy::new(|| {
    let ellps = Ellipsoid::new(NZTM_A, NZTM_RF);
    let tm = TransverseMercator::new(
        ellps,
        NZTM_CM.to_radians(),
        NZTM_SF,
        NZTM_OLAT.to_radians(),
        NZTM_FE,
        NZTM_FN,
        NZTM_UTOM,
    );
    debug!("NZTM2000: om = {}", tm.origin_meridian_arc());
    tm
});

/// The NZTM2000 projection definition
pub fn projection() -> &'static TransverseMercator {
    &NZTM
}

// ----- E N T R Y   P O I N T S -------------------------------------------------------

/// NZTM2000 northing and easting (m) to latitude and longitude (radians).
///
/// Note the north-first argument order. Never fails: input far outside
/// the grid's design area gives degraded, possibly NaN, output.
pub fn nztm_to_geodetic(northing: f64, easting: f64) -> (f64, f64) {
    let geo = NZTM.inv(Grid::new(easting, northing));
    (geo.latitude, geo.longitude)
}

/// Latitude and longitude (radians) to NZTM2000 northing and easting (m).
///
/// The longitude may be given in any revolution. Never fails: latitudes
/// at or near the poles give degraded, possibly NaN, output.
pub fn geodetic_to_nztm(latitude: f64, longitude: f64) -> (f64, f64) {
    let grid = NZTM.fwd(Geodetic::new(latitude, longitude));
    (grid.northing, grid.easting)
}

/// [`nztm_to_geodetic`] for the coordinate value types
pub fn grid_to_geodetic(grid: Grid) -> Geodetic {
    NZTM.inv(grid)
}

/// [`geodetic_to_nztm`] for the coordinate value types
pub fn geodetic_to_grid(geo: Geodetic) -> Grid {
    NZTM.fwd(geo)
}

// ----- V A L I D A T I N G   E N T R Y   P O I N T S ---------------------------------

/// As [`nztm_to_geodetic`], but rejecting non-finite input
pub fn checked_nztm_to_geodetic(northing: f64, easting: f64) -> Result<(f64, f64), Error> {
    finite("northing", northing)?;
    finite("easting", easting)?;
    Ok(nztm_to_geodetic(northing, easting))
}

/// As [`geodetic_to_nztm`], but rejecting non-finite input, and latitudes
/// outside the open interval (-π/2, π/2)
pub fn checked_geodetic_to_nztm(latitude: f64, longitude: f64) -> Result<(f64, f64), Error> {
    finite("latitude", latitude)?;
    finite("longitude", longitude)?;
    if latitude.abs() >= FRAC_PI_2 {
        warn!("NZTM2000: latitude {latitude} out of range");
        return Err(Error::LatitudeOutOfRange(latitude));
    }
    Ok(geodetic_to_nztm(latitude, longitude))
}

fn finite(name: &'static str, value: f64) -> Result<(), Error> {
    if !value.is_finite() {
        warn!("NZTM2000: non-finite {name}");
        return Err(Error::NonFinite(name, value));
    }
    Ok(())
}

// ----- T E S T S ---------------------------------------------------------------------

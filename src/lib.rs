//! *New Zealand Transverse Mercator 2000 (NZTM2000)*
//!
//! Conversion between geographical coordinates on the GRS80 ellipsoid
//! and NZTM2000 grid coordinates, using Redfearn's series as expressed
//! in the GDA technical manual.
//!
//! Usage
//! -----
//!
//! ```
//! use nztm::prelude::*;
//!
//! // Wellington, in NZTM2000 (northing first, as is customary for NZ grids)
//! let (lat, lon) = nztm_to_geodetic(5_427_916.479, 1_748_735.553);
//! assert!((lat.to_degrees() + 41.2865).abs() < 1e-7);
//! assert!((lon.to_degrees() - 174.7762).abs() < 1e-7);
//!
//! let (northing, easting) = geodetic_to_nztm(lat, lon);
//! assert!((northing - 5_427_916.479).abs() < 1e-3);
//! assert!((easting - 1_748_735.553).abs() < 1e-3);
//! ```
//!
//! The unchecked entry points are total: degenerate input (e.g. a latitude
//! at one of the poles) yields degraded or NaN output rather than an error.
//! The `checked_` variants reject such input with an [`Error`].

mod coordinate;
mod ellipsoid;
mod error;
mod math;
mod nztm;
mod tmerc;

pub use coordinate::Geodetic;
pub use coordinate::Grid;
pub use ellipsoid::Ellipsoid;
pub use error::Error;
pub use math::angular;
pub use tmerc::TransverseMercator;

pub use nztm::checked_geodetic_to_nztm;
pub use nztm::checked_nztm_to_geodetic;
pub use nztm::geodetic_to_grid;
pub use nztm::geodetic_to_nztm;
pub use nztm::grid_to_geodetic;
pub use nztm::nztm_to_geodetic;
pub use nztm::projection;

/// The NZTM2000 projection constants
pub mod constants {
    pub use crate::nztm::{
        NZTM_A, NZTM_CM, NZTM_FE, NZTM_FN, NZTM_OLAT, NZTM_RF, NZTM_SF, NZTM_UTOM,
    };
}

/// Everything needed for the typical use case
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Geodetic;
    pub use crate::Grid;
    pub use crate::TransverseMercator;
    pub use crate::{checked_geodetic_to_nztm, checked_nztm_to_geodetic};
    pub use crate::{geodetic_to_grid, grid_to_geodetic};
    pub use crate::{geodetic_to_nztm, nztm_to_geodetic, projection};
}

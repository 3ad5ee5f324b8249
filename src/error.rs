use thiserror::Error;

/// The errors reported by the validating entry points,
/// [`checked_nztm_to_geodetic`](crate::checked_nztm_to_geodetic) and
/// [`checked_geodetic_to_nztm`](crate::checked_geodetic_to_nztm).
///
/// The plain entry points never fail: they propagate NaN instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("non-finite {0}: {1}")]
    NonFinite(&'static str, f64),

    #[error("latitude {0} rad is outside the open interval (-π/2, π/2)")]
    LatitudeOutOfRange(f64),
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::NonFinite("easting", f64::NAN);
        assert_eq!(e.to_string(), "non-finite easting: NaN");
        let e = Error::LatitudeOutOfRange(2.0);
        assert!(e.to_string().starts_with("latitude 2 rad"));
    }
}

//! Transverse Mercator, following Redfearn's formulation as expressed in the
//! GDA technical manual
use crate::math::angular;
use crate::{Ellipsoid, Geodetic, Grid};
use log::trace;

/// A Transverse Mercator projection: an ellipsoid, the projection constants,
/// and the meridian arc length at the latitude of origin.
///
/// Immutable after construction, so `om` never goes stale. Only constructed
/// inside the crate: the public face of this is the NZTM2000 instance, see
/// [`projection`](crate::projection).
#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    ellps: Ellipsoid,
    /// Central meridian (radians)
    lon_0: f64,
    /// Scale factor on the central meridian
    k_0: f64,
    /// Latitude of origin (radians)
    lat_0: f64,
    /// False easting (grid units)
    x_0: f64,
    /// False northing (grid units)
    y_0: f64,
    /// Grid unit to metre conversion factor
    utom: f64,
    /// Meridian arc length at the latitude of origin (metres)
    om: f64,
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

impl TransverseMercator {
    /// All angles in radians, false origin in grid units
    pub(crate) fn new(
        ellps: Ellipsoid,
        lon_0: f64,
        k_0: f64,
        lat_0: f64,
        x_0: f64,
        y_0: f64,
        utom: f64,
    ) -> TransverseMercator {
        let om = ellps.meridian_arc(lat_0);
        trace!(
            "tmerc: lon_0={lon_0} k_0={k_0} lat_0={lat_0} x_0={x_0} y_0={y_0} utom={utom} om={om}"
        );
        TransverseMercator {
            ellps,
            lon_0,
            k_0,
            lat_0,
            x_0,
            y_0,
            utom,
            om,
        }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }

    pub fn central_meridian(&self) -> f64 {
        self.lon_0
    }

    pub fn scale_factor(&self) -> f64 {
        self.k_0
    }

    pub fn origin_latitude(&self) -> f64 {
        self.lat_0
    }

    pub fn false_easting(&self) -> f64 {
        self.x_0
    }

    pub fn false_northing(&self) -> f64 {
        self.y_0
    }

    pub fn unit_to_metre(&self) -> f64 {
        self.utom
    }

    /// The meridian arc length at the latitude of origin
    pub fn origin_meridian_arc(&self) -> f64 {
        self.om
    }
}

// ----- F O R W A R D -----------------------------------------------------------------

impl TransverseMercator {
    /// Geographical to projected coordinates.
    ///
    /// Total, but the series break down toward the poles, where `cos(lat)`
    /// vanishes: TM is no projection for polar regions anyway.
    pub fn fwd(&self, coord: Geodetic) -> Grid {
        let ellps = &self.ellps;
        let k_0 = self.k_0;
        let utom = self.utom;
        let lat = coord.latitude;

        // The longitude as reckoned from the central meridian
        let dlon = angular::normalize_symmetric(coord.longitude - self.lon_0);

        let m = ellps.meridian_arc(lat);

        let (eta, rho) = ellps.curvatures(lat);
        let psi = eta / rho;

        let slt = lat.sin();
        let clt = lat.cos();

        let wc = clt * dlon;
        let wc2 = wc * wc;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t2 * t4;

        // Easting
        let trm1 = (psi - t2) / 6.0;

        let trm2 = (((4.0 * (1.0 - 6.0 * t2) * psi + (1.0 + 8.0 * t2)) * psi - 2.0 * t2) * psi
            + t4)
            / 120.0;

        let trm3 = (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;

        let gce = (k_0 * eta * dlon * clt) * (((trm3 * wc2 + trm2) * wc2 + trm1) * wc2 + 1.0);
        let easting = gce / utom + self.x_0;

        // Northing
        let trm1 = 1.0 / 2.0;

        let trm2 = ((4.0 * psi + 1.0) * psi - t2) / 24.0;

        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 28.0 * (1.0 - 6.0 * t2)) * psi
            + (1.0 - 32.0 * t2))
            * psi
            - 2.0 * t2)
            * psi
            + t4)
            / 720.0;

        let trm4 = (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;

        let gcn = (eta * t) * ((((trm4 * wc2 + trm3) * wc2 + trm2) * wc2 + trm1) * wc2);
        let northing = (gcn + m - self.om) * k_0 / utom + self.y_0;

        Grid { easting, northing }
    }
}

// ----- I N V E R S E -----------------------------------------------------------------

impl TransverseMercator {
    /// Projected to geographical coordinates, by linearization around the
    /// foot point latitude.
    ///
    /// The longitude is returned as `lon_0` minus a correction, i.e. it is not
    /// normalized: east of the antimeridian it exceeds π.
    pub fn inv(&self, coord: Grid) -> Geodetic {
        let ellps = &self.ellps;
        let k_0 = self.k_0;
        let utom = self.utom;

        let cn1 = (coord.northing - self.y_0) * utom / k_0 + self.om;
        let fphi = ellps.foot_point_latitude(cn1);
        let slt = fphi.sin();
        let clt = fphi.cos();

        let (eta, rho) = ellps.curvatures(fphi);
        let psi = eta / rho;

        let e = (coord.easting - self.x_0) * utom;
        let x = e / (eta * k_0);
        let x2 = x * x;

        let t = slt / clt;
        let t2 = t * t;
        let t4 = t2 * t2;

        // Latitude
        let trm1 = 1.0 / 2.0;

        let trm2 = ((-4.0 * psi + 9.0 * (1.0 - t2)) * psi + 12.0 * t2) / 24.0;

        let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 12.0 * (21.0 - 71.0 * t2)) * psi
            + 15.0 * ((15.0 * t2 - 98.0) * t2 + 15.0))
            * psi
            + 180.0 * ((-3.0 * t2 + 5.0) * t2))
            * psi
            + 360.0 * t4)
            / 720.0;

        let trm4 = (((1575.0 * t2 + 4095.0) * t2 + 3633.0) * t2 + 1385.0) / 40320.0;

        let latitude =
            fphi + (t * x * e / (k_0 * rho)) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        // Longitude
        let trm1 = 1.0;

        let trm2 = (psi + 2.0 * t2) / 6.0;

        let trm3 = (((-4.0 * (1.0 - 6.0 * t2) * psi + (9.0 - 68.0 * t2)) * psi + 72.0 * t2) * psi
            + 24.0 * t4)
            / 120.0;

        let trm4 = (((720.0 * t2 + 1320.0) * t2 + 662.0) * t2 + 61.0) / 5040.0;

        let longitude = self.lon_0 - (x / clt) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

        Geodetic {
            latitude,
            longitude,
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::TAU;

    fn utm32() -> TransverseMercator {
        let grs80 = Ellipsoid::new(6_378_137.0, 298.257_222_100_882_7);
        TransverseMercator::new(grs80, 9_f64.to_radians(), 0.9996, 0., 500_000., 0., 1.)
    }

    #[test]
    fn tmerc() {
        // Validation values from PROJ (Poder/Engsager, i.e. nanometer accuracy):
        // echo 12 55 0 0 | cct -d18 +proj=utm +zone=32 | clip
        // Close to the central meridian, Redfearn agrees to the millimetre
        #[rustfmt::skip]
        let geo = [
            Geodetic::geo( 55.,  12.),
            Geodetic::geo(-55.,  12.),
        ];

        #[rustfmt::skip]
        let projected = [
            Grid::new( 691_875.632_139_661, 6_098_907.825_005_012),
            Grid::new( 691_875.632_139_661,-6_098_907.825_005_012),
        ];

        let op = utm32();
        for i in 0..geo.len() {
            let grid = op.fwd(geo[i]);
            assert!(grid.distance(&projected[i]) < 1e-3);

            let back = op.inv(grid);
            assert_float_eq!(back.latitude, geo[i].latitude, abs <= 2e-10);
            assert_float_eq!(back.longitude, geo[i].longitude, abs <= 2e-10);
        }

        // ... and values pinned from an independent evaluation of the same series
        let grid = op.fwd(geo[0]);
        assert_float_eq!(grid.easting, 691_875.632_139_590_7, abs <= 1e-6);
        assert_float_eq!(grid.northing, 6_098_907.825_589_27, abs <= 1e-6);

        // 15 degrees off the central meridian, the truncated series lose it
        let grid = op.fwd(Geodetic::geo(55., -6.));
        let proj = Grid::new(-455_673.814_189_040, 6_198_246.671_090_279);
        assert!(grid.distance(&proj) > 1e-2);
    }

    #[test]
    fn scale_and_offsets() {
        // Test involving scale and all offsets. PROJ:
        // echo 1 52 0 0 | cct -d 15 proj=tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000 ellps=airy  --
        let airy = Ellipsoid::new(6_377_563.396, 299.324_964_6);
        let op = TransverseMercator::new(
            airy,
            (-2_f64).to_radians(),
            0.999_601_271_7,
            49_f64.to_radians(),
            400_000.,
            -100_000.,
            1.,
        );
        assert!((op.origin_meridian_arc() - 5_429_228.602_287_758).abs() < 1e-6);

        let grid = op.fwd(Geodetic::geo(52., 1.));
        let proj = Grid::new(605_909.130_344_302_4, 237_803.365_171_569_4);
        assert!(grid.distance(&proj) < 1e-3);

        // The false origin maps to the origin
        let origin = op.inv(Grid::new(op.false_easting(), op.false_northing()));
        assert_float_eq!(origin.latitude, op.origin_latitude(), abs <= 1e-9);
        assert_eq!(origin.longitude, op.central_meridian());
    }

    #[test]
    fn sphere_symmetry() {
        let op = TransverseMercator::new(Ellipsoid::sphere(6_371_000.), 0., 1., 0., 0., 0., 1.);
        for lat in [-60., -41., 0., 20., 75.] {
            let east = op.fwd(Geodetic::geo(lat, 2.5));
            let west = op.fwd(Geodetic::geo(lat, -2.5));
            assert_eq!(east.easting, -west.easting);
            assert_eq!(east.northing, west.northing);
        }

        // ... and the equator is a straight line
        let grid = op.fwd(Geodetic::geo(0., 2.5));
        assert_eq!(grid.northing, 0.);
    }

    #[test]
    fn wraparound() {
        let op = utm32();
        let geo = Geodetic::geo(-41., 12.5);
        let expected = op.fwd(geo);
        for k in [-10., -3., -1., 1., 2., 10.] {
            let wrapped = Geodetic::new(geo.latitude, geo.longitude + k * TAU);
            assert!(op.fwd(wrapped).distance(&expected) < 1e-6);
        }

        // Wrapping across the antimeridian
        let op = TransverseMercator::new(
            Ellipsoid::default(),
            179_f64.to_radians(),
            1.,
            0.,
            0.,
            0.,
            1.,
        );
        let east = op.fwd(Geodetic::geo(-40., -179.));
        let west = op.fwd(Geodetic::geo(-40., 177.));
        assert!((east.easting + west.easting).abs() < 1e-6);
        assert!((east.northing - west.northing).abs() < 1e-6);
    }

    #[test]
    fn units() {
        // A grid unit of two metres halves the projected values
        let ellps = Ellipsoid::default();
        let metres = TransverseMercator::new(ellps, 3_f64.to_radians(), 0.9996, 0., 0., 0., 1.);
        let double = TransverseMercator::new(ellps, 3_f64.to_radians(), 0.9996, 0., 0., 0., 2.);
        assert_eq!(double.unit_to_metre(), 2.);
        let geo = Geodetic::geo(-45., 4.);
        let a = metres.fwd(geo);
        let b = double.fwd(geo);
        assert_eq!(b.easting, a.easting / 2.);
        assert_eq!(b.northing, a.northing / 2.);

        let back = double.inv(b);
        assert_float_eq!(back.latitude, geo.latitude, abs <= 1e-10);
        assert_float_eq!(back.longitude, geo.longitude, abs <= 1e-10);
    }

    #[test]
    fn nan_propagates() {
        // Not detected, not reported: just passed on
        let op = utm32();
        let grid = op.fwd(Geodetic::new(f64::NAN, 0.2));
        assert!(grid.easting.is_nan() && grid.northing.is_nan());
        let geo = op.inv(Grid::new(500_000., f64::NAN));
        assert!(geo.latitude.is_nan() && geo.longitude.is_nan());
    }
}

use super::*;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The meridional arc length (metres) from the equator to `latitude`
    /// (radians), by the Helmert formula.
    ///
    /// A fixed Fourier series in multiples of the latitude, with coefficients
    /// through *e⁶*: Redfearn's formulation as expressed in the GDA technical
    /// manual. Signed, and defined for any real argument, although only
    /// meaningful in [-π/2, π/2].
    #[must_use]
    pub fn meridian_arc(&self, latitude: f64) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let a0 = 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0);
        let a2 = (3.0 / 8.0) * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
        let a4 = (15.0 / 256.0) * (e4 + 3.0 * e6 / 4.0);
        let a6 = 35.0 * e6 / 3072.0;

        let lt = latitude;
        self.a * (a0 * lt - a2 * (2.0 * lt).sin() + a4 * (4.0 * lt).sin() - a6 * (6.0 * lt).sin())
    }

    /// The foot point latitude (radians), i.e. the latitude at which the
    /// meridional arc length equals `arc` (metres).
    ///
    /// A truncated series in the third flattening, *n*, with sine terms at 2, 4,
    /// 6 and 8 times the rectified latitude. Not iterated: the result is only
    /// as good as the truncation, i.e. at the millimetre level or better for
    /// geodetic ellipsoids, and is refined further by the TM inverse series.
    #[must_use]
    pub fn foot_point_latitude(&self, arc: f64) -> f64 {
        let f = self.f;
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;

        let g = self.a * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
        let sig = arc / g;

        sig + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sig).sin()
            + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sig).sin()
            + (151.0 * n3 / 96.0) * (6.0 * sig).sin()
            + (1097.0 * n4 / 512.0) * (8.0 * sig).sin()
    }
}

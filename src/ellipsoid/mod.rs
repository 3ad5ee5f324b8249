mod meridians;

use log::warn;

/// Representation of a biaxial ellipsoid, given by its semimajor axis and
/// inverse flattening, with the eccentricities precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    rf: f64,
    f: f64,
    e2: f64,
    ep2: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 298.257_222_101)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid. An inverse flattening of 0 indicates a sphere.
    ///
    /// No validation: absurd parameters propagate silently into the
    /// numerical results (an eccentricity outside [0, 1) is merely logged).
    #[must_use]
    pub fn new(semimajor_axis: f64, inverse_flattening: f64) -> Ellipsoid {
        let f = if inverse_flattening != 0.0 {
            1.0 / inverse_flattening
        } else {
            0.0
        };
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        if !(0.0..1.0).contains(&e2) {
            warn!("Ellipsoid: e² = {e2} outside [0, 1) for rf = {inverse_flattening}");
        }
        Ellipsoid {
            a: semimajor_axis,
            rf: inverse_flattening,
            f,
            e2,
            ep2,
        }
    }

    /// A sphere of radius *r*
    #[must_use]
    pub fn sphere(radius: f64) -> Ellipsoid {
        Ellipsoid::new(radius, 0.0)
    }

    // ----- Size ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Shape -----------------------------------------------------------------

    /// The inverse flattening, *1/f*. Zero for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        self.rf
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    /// The squared eccentricity *e² = 2f - f²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.e2
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.ep2
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.curvatures(latitude).0
    }

    /// The meridian radius of curvature, *M*
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.curvatures(latitude).1
    }

    /// Both radii of curvature, *(N, M)*, evaluated in the order the TM series
    /// expect them, so the last bit of the projected result stays put.
    pub(crate) fn curvatures(&self, latitude: f64) -> (f64, f64) {
        let s = latitude.sin();
        let eslt = 1.0 - self.e2 * s * s;
        let eta = self.a / eslt.sqrt();
        let rho = eta * (1.0 - self.e2) / eslt;
        (eta, rho)
    }
}

// ----- Tests ---------------------------------------------------------------------

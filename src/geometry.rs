//! Piecewise-cubic wall geometry of the periodic hill channel
//!
//! The lower wall consists of two mirrored hills connected by a flat
//! section. Each hill is described by six cubic polynomials over
//! disjoint x-intervals, defined in a physical scale where the hill
//! height is 28 units and the channel is 252 units long. The second
//! hill reuses the coefficients of the first via the substitution
//! `x -> 252 - x`.
use crate::Real;
use num_traits::Float;

/// Hill height in physical units; scale factor between the
/// non-dimensional coordinate x/h and the coordinate the polynomial
/// coefficients are defined in
pub const HILL_HEIGHT: Real = 28.0;

/// Streamwise extent of the channel in physical units
const DOMAIN_LENGTH: Real = 252.0;

/// Polynomial coefficients, constant term first
const CREST: [Real; 4] = [
    2.800000000000E+01,
    0.000000000000E+00,
    6.775070969851E-03,
    -2.124527775800E-03,
];
const UPPER_FLANK: [Real; 4] = [
    2.507355893131E+01,
    9.754803562315E-01,
    -1.016116352781E-01,
    1.889794677828E-03,
];
const MID_FLANK: [Real; 4] = [
    2.579601052357E+01,
    8.206693007457E-01,
    -9.055370274339E-02,
    1.626510569859E-03,
];
const LOWER_FLANK: [Real; 4] = [
    4.046435022819E+01,
    -1.379581654948E+00,
    1.945884504128E-02,
    -2.070318932190E-04,
];
const TAIL: [Real; 4] = [
    1.792461334664E+01,
    8.743920332081E-01,
    -5.567361123058E-02,
    6.277731764683E-04,
];
const FOOT: [Real; 4] = [
    5.639011190988E+01,
    -2.010520359035E+00,
    1.644919857549E-02,
    2.674976141766E-05,
];

/// Clamp applied after polynomial evaluation
#[derive(Debug, Clone, Copy)]
enum Clamp {
    /// No clamping
    None,
    /// Cap at the plateau height (min with 28)
    Plateau,
    /// Floor at the channel bottom (max with 0)
    Floor,
}

/// One cubic segment of the wall contour
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Interval [lo, hi) the segment is valid on
    lo: Real,
    hi: Real,
    coeffs: [Real; 4],
    clamp: Clamp,
    /// Evaluate at 252 - x (second hill)
    mirrored: bool,
}

impl Segment {
    fn eval(&self, x: Real) -> Real {
        let xi = if self.mirrored { DOMAIN_LENGTH - x } else { x };
        let y = polyval(&self.coeffs, xi);
        match self.clamp {
            Clamp::None => y,
            Clamp::Plateau => y.min(HILL_HEIGHT),
            Clamp::Floor => y.max(0.0),
        }
    }
}

/// Segment table, ordered in x. The gap [54, 198) between the hills is
/// not listed; it is the flat section with zero height. The first and
/// last intervals are unbounded so that slightly out-of-domain queries
/// still hit the clamped crest polynomial.
const SEGMENTS: [Segment; 12] = [
    Segment {
        lo: f64::NEG_INFINITY,
        hi: 9.0,
        coeffs: CREST,
        clamp: Clamp::Plateau,
        mirrored: false,
    },
    Segment {
        lo: 9.0,
        hi: 14.0,
        coeffs: UPPER_FLANK,
        clamp: Clamp::None,
        mirrored: false,
    },
    Segment {
        lo: 14.0,
        hi: 20.0,
        coeffs: MID_FLANK,
        clamp: Clamp::None,
        mirrored: false,
    },
    Segment {
        lo: 20.0,
        hi: 30.0,
        coeffs: LOWER_FLANK,
        clamp: Clamp::None,
        mirrored: false,
    },
    Segment {
        lo: 30.0,
        hi: 40.0,
        coeffs: TAIL,
        clamp: Clamp::None,
        mirrored: false,
    },
    Segment {
        lo: 40.0,
        hi: 54.0,
        coeffs: FOOT,
        clamp: Clamp::Floor,
        mirrored: false,
    },
    Segment {
        lo: 198.0,
        hi: 212.0,
        coeffs: FOOT,
        clamp: Clamp::Floor,
        mirrored: true,
    },
    Segment {
        lo: 212.0,
        hi: 222.0,
        coeffs: TAIL,
        clamp: Clamp::None,
        mirrored: true,
    },
    Segment {
        lo: 222.0,
        hi: 232.0,
        coeffs: LOWER_FLANK,
        clamp: Clamp::None,
        mirrored: true,
    },
    Segment {
        lo: 232.0,
        hi: 238.0,
        coeffs: MID_FLANK,
        clamp: Clamp::None,
        mirrored: true,
    },
    Segment {
        lo: 238.0,
        hi: 243.0,
        coeffs: UPPER_FLANK,
        clamp: Clamp::None,
        mirrored: true,
    },
    Segment {
        lo: 243.0,
        hi: f64::INFINITY,
        coeffs: CREST,
        clamp: Clamp::Plateau,
        mirrored: true,
    },
];

/// Evaluate a cubic polynomial, constant term first
fn polyval<T: Float>(c: &[T; 4], x: T) -> T {
    ((c[3] * x + c[2]) * x + c[1]) * x + c[0]
}

/// Wall height model of the periodic hill contour
///
/// Heights are returned in the physical scale of the coefficients
/// (hill height 28); use [`WallGeometry::height_nondim`] to work in
/// the non-dimensional x/h coordinate of the flow data.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallGeometry;

impl WallGeometry {
    /// New wall geometry model
    pub fn new() -> Self {
        Self
    }

    /// Wall height y0 at physical position x
    ///
    /// Callers are expected to stay within the simulation domain
    /// [0, 252]; queries beyond the hill crests (x < 0 or x >= 243)
    /// fall into the clamped crest segments and return the plateau
    /// height.
    pub fn height(&self, x: Real) -> Real {
        for seg in &SEGMENTS {
            if x >= seg.lo && x < seg.hi {
                return seg.eval(x);
            }
        }
        // flat section between the hills
        0.0
    }

    /// Wall height at non-dimensional position x/h, in units of h
    pub fn height_nondim(&self, x: Real) -> Real {
        self.height(HILL_HEIGHT * x) / HILL_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluate both segments adjacent to each interval boundary at the
    /// boundary itself; the literal coefficients must agree there.
    #[test]
    fn test_wall_height_continuity() {
        let wall = WallGeometry::new();
        let boundaries = [
            9.0, 14.0, 20.0, 30.0, 40.0, 54.0, 198.0, 212.0, 222.0, 232.0, 238.0, 243.0,
        ];
        for &b in &boundaries {
            // Left branch: the segment ending at b, or the flat section
            let left = SEGMENTS
                .iter()
                .find(|s| s.hi == b)
                .map_or(0.0, |s| s.eval(b));
            // Right branch: regular lookup, intervals are half-open
            let right = wall.height(b);
            if (left - right).abs() > 1e-6 {
                panic!(
                    "wall height jumps at x = {}: {} (left) vs {} (right)",
                    b, left, right
                );
            }
        }
    }

    #[test]
    fn test_plateau_clamp() {
        let wall = WallGeometry::new();
        // Crest polynomial overshoots the plateau near x = 0
        assert_eq!(wall.height(0.0), 28.0);
        assert_eq!(wall.height(2.0), 28.0);
        // Mirrored crest, clamped for all x >= 243
        assert_eq!(wall.height(250.0), 28.0);
        assert_eq!(wall.height(260.0), 28.0);
    }

    #[test]
    fn test_flat_section() {
        let wall = WallGeometry::new();
        assert_eq!(wall.height(54.0), 0.0);
        assert_eq!(wall.height(126.0), 0.0);
        assert_eq!(wall.height(197.9), 0.0);
    }

    #[test]
    fn test_mirror_symmetry() {
        let wall = WallGeometry::new();
        for &x in &[0.5, 5.0, 12.0, 17.0, 25.0, 37.0, 48.0] {
            let diff = (wall.height(x) - wall.height(DOMAIN_LENGTH - x)).abs();
            assert!(diff < 1e-12, "asymmetric at x = {}: {}", x, diff);
        }
    }

    #[test]
    fn test_height_nondim() {
        let wall = WallGeometry::new();
        // Crest height equals one hill height
        assert_eq!(wall.height_nondim(0.0), 1.0);
        // Flat section
        assert_eq!(wall.height_nondim(3.0), 0.0);
        // Consistent rescaling
        let x = 0.6;
        let expected = wall.height(HILL_HEIGHT * x) / HILL_HEIGHT;
        assert_eq!(wall.height_nondim(x), expected);
    }
}

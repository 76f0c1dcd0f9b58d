//! CORDIC sine and cosine
//!
//! Shift-add trigonometry: a vector starting at (K, 0) is rotated by a
//! fixed sequence of micro-rotations whose angles come from a
//! precomputed arctangent table. Only integer adds, shifts and table
//! lookups are involved, so this runs on cores without an FPU.

use crate::fixed::Q30;

/// 2*pi in Q30 radians
const TWO_PI: i64 = 6_746_518_852;

/// pi in Q30 radians
const PI: i64 = 3_373_259_426;

/// pi/2 in Q30 radians; fits i32, so reduced angles can enter the kernel
const HALF_PI: i64 = 1_686_629_713;

/// CORDIC gain compensation constant K in Q30 (product of all
/// `cos(atan(2^-k))`)
const GAIN: i32 = 0x26DD_3B6A;

/// Micro-rotation steps: `atan(2^-k)` in Q30 for k = 0..32
const ATAN_STEPS: [i32; 32] = [
    0x3243_F6A8,
    0x1DAC_6705,
    0x0FAD_BAFC,
    0x07F5_6EA6,
    0x03FE_AB76,
    0x01FF_D55B,
    0x00FF_FAAA,
    0x007F_FF55,
    0x003F_FFEA,
    0x001F_FFFD,
    0x000F_FFFF,
    0x0007_FFFF,
    0x0003_FFFF,
    0x0001_FFFF,
    0x0000_FFFF,
    0x0000_7FFF,
    0x0000_3FFF,
    0x0000_1FFF,
    0x0000_0FFF,
    0x0000_07FF,
    0x0000_03FF,
    0x0000_01FF,
    0x0000_00FF,
    0x0000_007F,
    0x0000_003F,
    0x0000_001F,
    0x0000_000F,
    0x0000_0008,
    0x0000_0004,
    0x0000_0002,
    0x0000_0001,
    0x0000_0000,
];

/// Micro-rotation count; capped by the table length
const ITERATIONS: usize = 32;

/// An angle in Q30 radians
///
/// Wide enough to hold unreduced inputs (many turns); `sin`/`cos`
/// range-reduce before entering the CORDIC kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(i64);

impl Angle {
    /// Zero angle
    pub const ZERO: Self = Self(0);

    /// Create from whole degrees
    pub const fn from_degrees(degrees: i32) -> Self {
        Self(degrees as i64 * TWO_PI / 360)
    }

    /// Create from raw Q30 radians
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw Q30 radian representation
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

/// Reduce a non-negative angle into [0, pi], counting half turns
///
/// Each half turn flips the sign of both sine and cosine.
fn reduce(mut a: i64) -> (i64, u32) {
    while a > TWO_PI {
        a -= TWO_PI;
    }

    let mut half_turns = 0;
    while a > PI {
        a -= PI;
        half_turns += 1;
    }

    (a, half_turns)
}

/// Rotate (K, 0) by `theta` and return the raw (cos, sin) pair
///
/// `theta` must already be reduced into [0, pi/2].
fn rotate(theta: i32) -> (i32, i32) {
    let mut x = GAIN;
    let mut y = 0i32;
    let mut z = theta;

    for (k, &step) in ATAN_STEPS.iter().enumerate().take(ITERATIONS) {
        // d is 0 or -1; XOR/subtract applies the sign of the residual
        // without a branch
        let d = z >> 31;
        let tx = x - (((y >> k) ^ d) - d);
        let ty = y + (((x >> k) ^ d) - d);
        let tz = z - ((step ^ d) - d);
        x = tx;
        y = ty;
        z = tz;
    }

    (x, y)
}

/// Fixed-point sine
///
/// Agrees with the exact value to within 1e-3 over the full domain;
/// in practice the 32 CORDIC iterations leave far less error than
/// that bound.
pub fn sin(angle: Angle) -> Q30 {
    let mut a = angle.raw();
    let mut negate = false;

    if a < 0 {
        a = -a;
        negate = true;
    }

    let (a, half_turns) = reduce(a);

    // Above pi/2, sin(a) = cos(a - pi/2)
    let raw = if a > HALF_PI {
        rotate((a - HALF_PI) as i32).0
    } else {
        rotate(a as i32).1
    };

    if ((half_turns & 1) == 1) != negate {
        Q30::from_raw(-raw)
    } else {
        Q30::from_raw(raw)
    }
}

/// Fixed-point cosine
///
/// Same 1e-3 accuracy contract as [`sin`].
pub fn cos(angle: Angle) -> Q30 {
    let mut a = angle.raw();

    if a < 0 {
        a = -a;
    }

    let (a, half_turns) = reduce(a);

    // Above pi/2, cos(a) = -sin(a - pi/2)
    let raw = if a > HALF_PI {
        -rotate((a - HALF_PI) as i32).1
    } else {
        rotate(a as i32).0
    };

    if (half_turns & 1) == 1 {
        Q30::from_raw(-raw)
    } else {
        Q30::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Error bound for the fixed-point approximation
    const EPSILON: f64 = 1e-3;

    fn to_f64(q: Q30) -> f64 {
        q.raw() as f64 / (1u64 << Q30::FRAC_BITS) as f64
    }

    fn angle_as_f64(a: Angle) -> f64 {
        a.raw() as f64 / (1u64 << Q30::FRAC_BITS) as f64
    }

    #[test]
    fn test_cardinal_points() {
        assert!(to_f64(sin(Angle::from_degrees(0))).abs() < EPSILON);
        assert!((to_f64(sin(Angle::from_degrees(90))) - 1.0).abs() < EPSILON);
        assert!(to_f64(sin(Angle::from_degrees(180))).abs() < EPSILON);
        assert!((to_f64(sin(Angle::from_degrees(270))) + 1.0).abs() < EPSILON);

        assert!((to_f64(cos(Angle::from_degrees(0))) - 1.0).abs() < EPSILON);
        assert!(to_f64(cos(Angle::from_degrees(90))).abs() < EPSILON);
        assert!((to_f64(cos(Angle::from_degrees(180))) + 1.0).abs() < EPSILON);
        assert!(to_f64(cos(Angle::from_degrees(270))).abs() < EPSILON);
    }

    #[test]
    fn test_sweep_against_reference() {
        for k in 0..1000i64 {
            let angle = Angle::from_raw(k * TWO_PI / 1000);
            let reference = libm::sin(angle_as_f64(angle));
            let error = (to_f64(sin(angle)) - reference).abs();
            assert!(error < EPSILON, "sin off by {error} at sample {k}");

            let reference = libm::cos(angle_as_f64(angle));
            let error = (to_f64(cos(angle)) - reference).abs();
            assert!(error < EPSILON, "cos off by {error} at sample {k}");
        }
    }

    #[test]
    fn test_odd_and_even_symmetry() {
        for degrees in [5, 30, 60, 123, 240, 359] {
            let pos = Angle::from_degrees(degrees);
            let neg = Angle::from_degrees(-degrees);
            assert_eq!(sin(neg).raw(), -sin(pos).raw());
            assert_eq!(cos(neg).raw(), cos(pos).raw());
        }
    }

    #[test]
    fn test_full_turn_wraps_exactly() {
        // 370 degrees reduces to the same Q30 angle as 10 degrees, so
        // the results match bit for bit
        assert_eq!(
            sin(Angle::from_degrees(370)).raw(),
            sin(Angle::from_degrees(10)).raw()
        );
        assert_eq!(
            cos(Angle::from_degrees(725)).raw(),
            cos(Angle::from_degrees(5)).raw()
        );
    }

    #[test]
    fn test_quadrant_signs() {
        assert!(!sin(Angle::from_degrees(45)).is_negative());
        assert!(!cos(Angle::from_degrees(45)).is_negative());
        assert!(!sin(Angle::from_degrees(135)).is_negative());
        assert!(cos(Angle::from_degrees(135)).is_negative());
        assert!(sin(Angle::from_degrees(225)).is_negative());
        assert!(cos(Angle::from_degrees(225)).is_negative());
        assert!(sin(Angle::from_degrees(315)).is_negative());
        assert!(!cos(Angle::from_degrees(315)).is_negative());
    }

    proptest! {
        #[test]
        fn prop_pythagorean_identity(raw in -4 * TWO_PI..4 * TWO_PI) {
            let angle = Angle::from_raw(raw);
            let s = to_f64(sin(angle));
            let c = to_f64(cos(angle));
            prop_assert!((s * s + c * c - 1.0).abs() < EPSILON);
        }

        #[test]
        fn prop_matches_reference(raw in 0i64..TWO_PI) {
            let angle = Angle::from_raw(raw);
            let reference = libm::sin(angle_as_f64(angle));
            prop_assert!((to_f64(sin(angle)) - reference).abs() < EPSILON);
        }
    }
}

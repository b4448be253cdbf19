//! Exact rational cell values
//!
//! A [`Rational`] stores a numerator/denominator pair and keeps arithmetic
//! exact. Operations do **not** reduce their results: `1/2 + 1/3` stores
//! `5/6` as computed from `3/6 + 2/6`, and a caller who wants the lowest
//! terms asks for them explicitly via [`Rational::reduce`] or
//! [`Rational::reduced`].

use crate::error::{Result, RevecError};
use crate::traits::{CellKind, CellValue};

/// An exact rational number with i64 numerator and denominator
///
/// The denominator is never zero (validated at construction); the sign
/// may live in either component until [`Rational::reduce`] normalizes it
/// into the numerator.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    num: i64,
    den: i64,
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        // a/b == c/d iff ad == cb; holds for either sign convention.
        self.num as i128 * other.den as i128 == other.num as i128 * self.den as i128
    }
}

impl Eq for Rational {}

/// Greatest common divisor of two non-negative integers
const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Clamp a wide intermediate back into i64
const fn clamp_i64(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

impl Rational {
    /// Create a rational, rejecting a zero denominator
    pub const fn new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(RevecError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// Create a rational from a whole number
    pub const fn from_integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// The numerator as stored (possibly unreduced)
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// The denominator as stored (possibly unreduced)
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Normalize in place to lowest terms with a positive denominator
    pub fn reduce(&mut self) {
        let divisor = gcd(self.num.abs(), self.den.abs());
        if divisor > 1 {
            self.num /= divisor;
            self.den /= divisor;
        }
        if self.den < 0 {
            self.num = -self.num;
            self.den = -self.den;
        }
    }

    /// A normalized copy in lowest terms
    pub fn reduced(&self) -> Self {
        let mut out = *self;
        out.reduce();
        out
    }
}

impl core::fmt::Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        // Cross-multiply in i128; flip when the denominator product is negative.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        if (self.den as i128 * other.den as i128) < 0 {
            rhs.partial_cmp(&lhs)
        } else {
            lhs.partial_cmp(&rhs)
        }
    }
}

impl CellValue for Rational {
    fn kind() -> CellKind {
        CellKind::Rational
    }

    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn one() -> Self {
        Self::from_integer(1)
    }

    fn from_f64(value: f64) -> Self {
        // Continued-fraction approximation with a bounded denominator.
        const MAX_DEN: i64 = 1_000_000;
        if !value.is_finite() {
            return Self {
                num: if value < 0.0 { i64::MIN } else { i64::MAX },
                den: 1,
            };
        }
        let negative = value < 0.0;
        let mut x = if negative { -value } else { value };
        let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
        loop {
            let whole = x as i64;
            let p2 = clamp_i64(whole as i128 * p1 as i128 + p0 as i128);
            let q2 = clamp_i64(whole as i128 * q1 as i128 + q0 as i128);
            if q2 > MAX_DEN {
                break;
            }
            p0 = p1;
            q0 = q1;
            p1 = p2;
            q1 = q2;
            let fract = x - whole as f64;
            if fract < 1.0 / (MAX_DEN as f64) {
                break;
            }
            x = 1.0 / fract;
        }
        let num = if negative { -p1 } else { p1 };
        let den = if q1 == 0 { 1 } else { q1 };
        Self { num, den }
    }

    fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn add(&self, other: &Self) -> Self {
        let num = self.num as i128 * other.den as i128 + other.num as i128 * self.den as i128;
        let den = self.den as i128 * other.den as i128;
        Self {
            num: clamp_i64(num),
            den: clamp_i64(den),
        }
    }

    fn sub(&self, other: &Self) -> Self {
        self.add(&CellValue::neg(other))
    }

    fn mul(&self, other: &Self) -> Self {
        Self {
            num: clamp_i64(self.num as i128 * other.num as i128),
            den: clamp_i64(self.den as i128 * other.den as i128),
        }
    }

    fn neg(&self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    fn reciprocal(&self) -> Self {
        if self.num == 0 {
            // Saturate rather than produce a zero denominator.
            return Self { num: i64::MAX, den: 1 };
        }
        Self {
            num: self.den,
            den: self.num,
        }
    }

    fn pow(&self, exponent: i32) -> Self {
        if exponent < 0 {
            return CellValue::pow(&self.reciprocal(), -exponent);
        }
        let mut out = Self::from_integer(1);
        for _ in 0..exponent {
            out = out.mul(self);
        }
        out
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(RevecError::ZeroDenominator));
        assert!(Rational::new(1, 2).is_ok());
    }

    #[test]
    fn test_half_plus_third_is_five_sixths() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        let sum = half.add(&third);
        assert_eq!(sum.numerator(), 5);
        assert_eq!(sum.denominator(), 6);
    }

    #[test]
    fn test_operations_do_not_reduce() {
        let a = Rational::new(1, 2).unwrap();
        let b = Rational::new(1, 2).unwrap();
        let sum = a.add(&b);
        // 1/2 + 1/2 computes as 4/4; lowest terms only on request.
        assert_eq!((sum.numerator(), sum.denominator()), (4, 4));
        let reduced = sum.reduced();
        assert_eq!((reduced.numerator(), reduced.denominator()), (1, 1));
    }

    #[test]
    fn test_reduce_normalizes_sign() {
        let mut r = Rational::new(2, -4).unwrap();
        r.reduce();
        assert_eq!((r.numerator(), r.denominator()), (-1, 2));
    }

    #[test]
    fn test_exact_division_via_reciprocal() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        let quotient = CellValue::div(&half, &third).reduced();
        assert_eq!((quotient.numerator(), quotient.denominator()), (3, 2));
    }

    #[test]
    fn test_ordering_crosses_denominators() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        assert!(half > third);
        let neg = Rational::new(1, -2).unwrap();
        assert!(neg < third);
    }

    #[test]
    fn test_from_f64_round_trip() {
        let r = <Rational as CellValue>::from_f64(0.25);
        assert_eq!(r.reduced(), Rational::new(1, 4).unwrap());
        assert_eq!(CellValue::pow(&Rational::new(2, 3).unwrap(), 2).reduced(),
            Rational::new(4, 9).unwrap());
    }
}

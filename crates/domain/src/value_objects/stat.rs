//! Level and mana newtypes
//!
//! Both are valid by construction: a `Level` is always >= 1 and a `Mana`
//! pool is never negative. The mana arithmetic here is the single place
//! that decides how each operator treats overflow and the lower bound.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lowest level a caster can have
pub const MIN_LEVEL: i64 = 1;

// ============================================================================
// Level
// ============================================================================

/// A caster level (>= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(i64);

impl Level {
    /// Create a validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value < 1`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < MIN_LEVEL {
            return Err(DomainError::validation(format!(
                "Caster level must be >= {}, got {}",
                MIN_LEVEL, value
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Level {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> i64 {
        level.0
    }
}

// ============================================================================
// Mana
// ============================================================================

/// A non-negative mana pool
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Mana(i64);

impl Mana {
    /// An empty pool.
    pub const ZERO: Mana = Mana(0);

    /// Create a validated mana value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value < 0`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::validation(format!(
                "Mana cannot be negative, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `self + n`, rejecting a negative or overflowing result.
    pub fn checked_add(self, n: i64) -> Result<Self, DomainError> {
        let total = self.0.checked_add(n).ok_or_else(|| out_of_range("add", n))?;
        Self::new(total)
    }

    /// `max(0, self - n)`, saturating at `i64::MAX` for a hugely negative `n`.
    pub fn clamped_sub(self, n: i64) -> Self {
        Self(self.0.saturating_sub(n).max(0))
    }

    /// `self * n`, rejecting a negative or overflowing product.
    pub fn checked_mul(self, n: i64) -> Result<Self, DomainError> {
        let product = self
            .0
            .checked_mul(n)
            .ok_or_else(|| out_of_range("multiply", n))?;
        Self::new(product)
    }

    /// `floor(self / n)`, rounding toward negative infinity.
    ///
    /// A negative divisor yields a negative quotient (unless mana is zero),
    /// which is rejected like any other negative mana.
    pub fn floor_div(self, n: i64) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::DivisionByZero);
        }
        let quotient = self.0 / n;
        let floored = if self.0 % n != 0 && (self.0 < 0) != (n < 0) {
            quotient - 1
        } else {
            quotient
        };
        Self::new(floored)
    }

    /// Deduct a spell cost. The caller has already checked `self >= cost`,
    /// so only a negative cost can push the pool upward (saturating).
    pub(crate) fn spend(self, cost: i64) -> Self {
        Self(self.0.saturating_sub(cost).max(0))
    }
}

fn out_of_range(op: &str, n: i64) -> DomainError {
    DomainError::validation(format!("Mana {} by {} is out of range", op, n))
}

impl fmt::Display for Mana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Mana {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mana> for i64 {
    fn from(mana: Mana) -> i64 {
        mana.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod level {
        use super::*;

        #[test]
        fn rejects_below_one() {
            assert!(matches!(Level::new(0), Err(DomainError::Validation(_))));
            assert!(Level::new(-3).is_err());
            assert_eq!(Level::new(1).unwrap().get(), 1);
        }

        #[test]
        fn serde_validates() {
            assert!(serde_json::from_str::<Level>("0").is_err());
            let level: Level = serde_json::from_str("7").unwrap();
            assert_eq!(level.get(), 7);
        }
    }

    mod mana {
        use super::*;

        fn mana(v: i64) -> Mana {
            Mana::new(v).unwrap()
        }

        #[test]
        fn rejects_negative() {
            assert!(matches!(Mana::new(-1), Err(DomainError::Validation(_))));
            assert!(Mana::new(0).unwrap().is_empty());
        }

        #[test]
        fn add_rejects_negative_result() {
            assert_eq!(mana(20).checked_add(10).unwrap().get(), 30);
            assert_eq!(mana(20).checked_add(-20).unwrap().get(), 0);
            assert!(matches!(
                mana(20).checked_add(-21),
                Err(DomainError::Validation(_))
            ));
        }

        #[test]
        fn add_rejects_overflow() {
            assert!(mana(1).checked_add(i64::MAX).is_err());
        }

        #[test]
        fn sub_clamps_to_zero() {
            assert_eq!(mana(3).clamped_sub(10).get(), 0);
            assert_eq!(mana(30).clamped_sub(5).get(), 25);
            assert_eq!(mana(3).clamped_sub(-2).get(), 5);
            assert_eq!(mana(3).clamped_sub(i64::MAX), Mana::ZERO);
        }

        #[test]
        fn sub_saturates_instead_of_failing() {
            assert_eq!(mana(3).clamped_sub(i64::MIN).get(), i64::MAX);
            assert_eq!(Mana::ZERO.clamped_sub(i64::MIN).get(), i64::MAX);
        }

        #[test]
        fn mul_rejects_negative_product() {
            assert_eq!(mana(20).checked_mul(2).unwrap().get(), 40);
            assert_eq!(mana(0).checked_mul(-4).unwrap().get(), 0);
            assert!(matches!(
                mana(20).checked_mul(-1),
                Err(DomainError::Validation(_))
            ));
        }

        #[test]
        fn floor_division() {
            assert_eq!(mana(7).floor_div(2).unwrap().get(), 3);
            assert_eq!(mana(30).floor_div(2).unwrap().get(), 15);
            assert_eq!(mana(0).floor_div(-2).unwrap().get(), 0);
            assert_eq!(mana(7).floor_div(0), Err(DomainError::DivisionByZero));
            // 7 // -2 == -4, which is not a valid pool
            assert!(matches!(
                mana(7).floor_div(-2),
                Err(DomainError::Validation(_))
            ));
        }

        #[test]
        fn spend_never_goes_negative() {
            assert_eq!(mana(20).spend(3).get(), 17);
            assert_eq!(mana(5).spend(-2).get(), 7);
            assert_eq!(mana(1).spend(1).get(), 0);
        }
    }
}

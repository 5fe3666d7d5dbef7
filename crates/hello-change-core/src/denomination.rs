//! # Denominations
//!
//! The closed set of bill face values the register accepts.
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┐
//! │   One    │   Two    │   Five   │   Ten    │  Twenty  │
//! │    $1    │    $2    │    $5    │   $10    │   $20    │
//! └──────────┴──────────┴──────────┴──────────┴──────────┘
//!   ASCENDING ───────────────────────────────────────────►
//!   ◄─────────────────────────────────────────── DESCENDING
//! ```
//!
//! The set is fixed at compile time. Declaration order is ascending face
//! value, so the derived `Ord` and [`Denomination::index`] both follow it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A supported bill face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Denomination {
    One,
    Two,
    Five,
    Ten,
    Twenty,
}

impl Denomination {
    /// Number of supported denominations.
    pub const COUNT: usize = 5;

    /// All denominations, smallest face value first.
    pub const ASCENDING: [Denomination; Self::COUNT] = [
        Denomination::One,
        Denomination::Two,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
    ];

    /// All denominations, largest face value first (display order).
    pub const DESCENDING: [Denomination; Self::COUNT] = [
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::Two,
        Denomination::One,
    ];

    /// Face value in whole dollars.
    #[inline]
    pub const fn face_value(self) -> u32 {
        match self {
            Denomination::One => 1,
            Denomination::Two => 2,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
        }
    }

    /// Position in [`Denomination::ASCENDING`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Looks up the denomination with the given face value.
    ///
    /// ## Example
    /// ```rust
    /// use hello_change_core::Denomination;
    ///
    /// assert_eq!(Denomination::from_face_value(10).unwrap(), Denomination::Ten);
    /// assert!(Denomination::from_face_value(50).is_err());
    /// ```
    pub fn from_face_value(face_value: u32) -> CoreResult<Self> {
        Self::ASCENDING
            .into_iter()
            .find(|d| d.face_value() == face_value)
            .ok_or_else(|| {
                CoreError::invalid_argument(format!("unsupported bill denomination: {face_value}"))
            })
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.face_value())
    }
}

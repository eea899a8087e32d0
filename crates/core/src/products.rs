//! Product catalogue types.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gold sourcing category. Each category is priced independently on the
/// daily board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoldType {
    /// Government mint bars (Logam Mulia / ANTAM).
    #[serde(rename = "LM")]
    Lm,

    /// UBS refinery bars.
    #[serde(rename = "UBS")]
    Ubs,

    /// Locally sourced, unbranded gold.
    Lokal,
}

impl GoldType {
    /// Customer-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lm => "Logam Mulia (ANTAM)",
            Self::Ubs => "UBS",
            Self::Lokal => "Emas Lokal",
        }
    }

    /// Short code used on the price board and in payloads.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Lm => "LM",
            Self::Ubs => "UBS",
            Self::Lokal => "Lokal",
        }
    }
}

impl fmt::Display for GoldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string names no known gold type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown gold type: {0}")]
pub struct ParseGoldTypeError(String);

impl FromStr for GoldType {
    type Err = ParseGoldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lm" => Ok(Self::Lm),
            "ubs" => Ok(Self::Ubs),
            "lokal" => Ok(Self::Lokal),
            _ => Err(ParseGoldTypeError(s.to_string())),
        }
    }
}

/// Gold fineness in parts per thousand (750 = 75% pure).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Purity(u16);

impl Purity {
    /// Wraps a per-mille fineness value.
    #[must_use]
    pub const fn new(per_mille: u16) -> Self {
        Self(per_mille)
    }

    /// The raw per-mille value.
    #[must_use]
    pub const fn per_mille(self) -> u16 {
        self.0
    }

    /// Karat name for the standard fineness ladder, when there is one.
    #[must_use]
    pub fn karat(self) -> Option<&'static str> {
        match self.0 {
            375 => Some("9K"),
            417 => Some("10K"),
            585 => Some("14K"),
            750 => Some("18K"),
            875 => Some("21K"),
            916 => Some("22K"),
            958 => Some("23K"),
            999 => Some("24K"),
            _ => None,
        }
    }

    /// Display label, e.g. `18K (750)`, or the bare per-mille value for
    /// off-ladder fineness.
    #[must_use]
    pub fn label(self) -> String {
        match self.karat() {
            Some(karat) => format!("{karat} ({})", self.0),
            None => self.0.to_string(),
        }
    }
}

impl From<u16> for Purity {
    fn from(per_mille: u16) -> Self {
        Self(per_mille)
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A finished jewellery product as displayed at the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, e.g. "Cincin Polos".
    pub name: String,

    /// Gold sourcing category.
    pub gold_type: GoldType,

    /// Fineness in parts per thousand.
    pub purity: Purity,

    /// Weight in grams.
    pub weight_grams: Decimal,

    /// Fixed making/fabrication charge, whole rupiah. Charged when
    /// selling a finished item, never on the buyback side.
    pub labor_cost: u64,
}

//! Closed format tags from the HIBC 2.5 supplier labeling standard.
//!
//! The secondary data structure carries a handful of single-character flags whose meaning is
//! fixed by the standard (Appendix E). Each flag is modelled here as an enum variant carrying its
//! metadata (digit count, numeric prefix) so an out-of-range tag cannot be constructed.
//!
//! Tags parse from and serialise to the names used on HIBC layout tables (`"QQ"`, `"YYMMDD"`,
//! ...), which is also the form accepted by configuration files and the CLI.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a format tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The quantity format name is not one of `QQ` or `QQQQQ`.
    #[error("unknown quantity format '{0}' (expected QQ or QQQQQ)")]
    UnknownQuantityFormat(String),

    /// The date format name is not one of the seven HIBC expiration date layouts.
    #[error(
        "unknown date format '{0}' (expected MMYY, MMDDYY, YYMMDD, YYMMDDHH, YYJJJ, YYJJJHH or YYYYMMDD)"
    )]
    UnknownDateFormat(String),
}

/// Quantity layouts allowed in a secondary data structure.
///
/// The variant's [`tag`](QuantityFormat::tag) is the "Qty Format Char" written immediately
/// before the quantity digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityFormat {
    /// Two digit quantity, prefixed with `8`.
    TwoDigit,
    /// Five digit quantity, prefixed with `9`.
    FiveDigit,
}

impl QuantityFormat {
    /// Number of digits the quantity value must have.
    pub fn digits(self) -> usize {
        match self {
            Self::TwoDigit => 2,
            Self::FiveDigit => 5,
        }
    }

    /// Numeric prefix written before the quantity value.
    pub fn tag(self) -> char {
        match self {
            Self::TwoDigit => '8',
            Self::FiveDigit => '9',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoDigit => "QQ",
            Self::FiveDigit => "QQQQQ",
        }
    }
}

/// Expiration date layouts allowed in a secondary data structure.
///
/// All layouts except [`DateFormat::Mmyy`] and [`DateFormat::Yyyymmdd`] are written as a single
/// digit flag followed by the date. `MMYY` needs no flag because the first digit of a month is
/// always `0` or `1`, which cannot be confused with the flags `2`..`9`. `YYYYMMDD` does not fit
/// the short date slot at all and is carried in a trailing supplemental block instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    Mmyy,
    Mmddyy,
    Yymmdd,
    /// Hour is G.M.T.
    Yymmddhh,
    /// Julian day of year.
    Yyjjj,
    Yyjjjhh,
    /// Full year, supplemental long date.
    Yyyymmdd,
}

impl DateFormat {
    /// All layouts, in the order of their flag digits.
    pub const ALL: [DateFormat; 7] = [
        Self::Mmyy,
        Self::Mmddyy,
        Self::Yymmdd,
        Self::Yymmddhh,
        Self::Yyjjj,
        Self::Yyjjjhh,
        Self::Yyyymmdd,
    ];

    /// Number of digits a date in this layout has.
    pub fn digits(self) -> usize {
        match self {
            Self::Mmyy => 4,
            Self::Mmddyy | Self::Yymmdd => 6,
            Self::Yymmddhh | Self::Yyyymmdd => 8,
            Self::Yyjjj => 5,
            Self::Yyjjjhh => 7,
        }
    }

    /// The single digit flag written before the date, if this layout has one.
    ///
    /// Returns `None` for `MMYY` (unflagged) and `YYYYMMDD` (supplemental block).
    pub fn tag(self) -> Option<char> {
        match self {
            Self::Mmyy | Self::Yyyymmdd => None,
            Self::Mmddyy => Some('2'),
            Self::Yymmdd => Some('3'),
            Self::Yymmddhh => Some('4'),
            Self::Yyjjj => Some('5'),
            Self::Yyjjjhh => Some('6'),
        }
    }

    /// Returns true if the date is carried in the supplemental block rather than the date slot.
    pub fn is_supplemental(self) -> bool {
        matches!(self, Self::Yyyymmdd)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mmyy => "MMYY",
            Self::Mmddyy => "MMDDYY",
            Self::Yymmdd => "YYMMDD",
            Self::Yymmddhh => "YYMMDDHH",
            Self::Yyjjj => "YYJJJ",
            Self::Yyjjjhh => "YYJJJHH",
            Self::Yyyymmdd => "YYYYMMDD",
        }
    }
}

/// Which field the lot/serial slot of a secondary structure refers to.
///
/// When a lot is present it is the reference, even if a serial number follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceField {
    Lot,
    Serial,
}

impl ReferenceField {
    /// Decide the reference field from which of lot and serial number are present.
    ///
    /// Only a serial number on its own makes the serial number the reference.
    pub fn from_presence(has_lot: bool, has_serial: bool) -> Self {
        if has_serial && !has_lot {
            Self::Serial
        } else {
            Self::Lot
        }
    }
}

impl fmt::Display for QuantityFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityFormat {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QQ" => Ok(Self::TwoDigit),
            "QQQQQ" => Ok(Self::FiveDigit),
            _ => Err(TagError::UnknownQuantityFormat(s.to_owned())),
        }
    }
}

impl FromStr for DateFormat {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| TagError::UnknownDateFormat(s.to_owned()))
    }
}

impl serde::Serialize for QuantityFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for QuantityFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Encoder inputs.
//!
//! Every data structure is built from one of the config types below. They are plain values: the
//! encoder reads them and never mutates them, so a config can be reused for any number of
//! encodings.
//!
//! The identity fields shared by the primary, linked secondary and combined structures live in
//! [`ProductIdentity`]. The secondary-only fields live in [`SecondaryFields`]. The configs compose
//! the two instead of extending one another.
//!
//! All types deserialise with `serde`, so a label job can be described in a YAML or JSON file and
//! loaded with [`load_config`]:
//!
//! ```yaml
//! lic: A123
//! pcn: BJC5D6E71G
//! unit_of_measure: 1
//! lot: 3C001
//! exp_date:
//!   format: YYYYMMDD
//!   value: "20200101"
//! ```

use crate::{UdiError, UdiResult};
use hibc_types::{DateFormat, QuantityFormat};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How strictly the Labeler Identification Code is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicPolicy {
    /// Four alphanumeric characters, the first one alphabetic.
    #[default]
    Strict,
    /// Four alphanumeric characters. Exists for label sets produced before the leading letter
    /// rule was enforced.
    Compatible,
}

/// Labeler and product identity, the payload of the primary data structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentity {
    /// Labeler Identification Code.
    #[serde(deserialize_with = "string_or_number")]
    pub lic: String,
    /// Product or Catalog Number.
    #[serde(deserialize_with = "string_or_number")]
    pub pcn: String,
    /// Unit of measure ID. 0 is the unit of use, 1 to 8 are packaging levels above it and 9
    /// marks a variable quantity container.
    pub unit_of_measure: u32,
    #[serde(default)]
    pub lic_policy: LicPolicy,
}

impl ProductIdentity {
    pub fn new(lic: impl Into<String>, pcn: impl Into<String>, unit_of_measure: u32) -> Self {
        Self {
            lic: lic.into(),
            pcn: pcn.into(),
            unit_of_measure,
            lic_policy: LicPolicy::Strict,
        }
    }

    /// Switches LIC validation to [`LicPolicy::Compatible`].
    pub fn compatible(mut self) -> Self {
        self.lic_policy = LicPolicy::Compatible;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub format: QuantityFormat,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

impl Quantity {
    pub fn new(format: QuantityFormat, value: impl Into<String>) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationDate {
    pub format: DateFormat,
    /// Digits of the date. Quote values with a leading zero in YAML (`"092805"`), otherwise they
    /// are read as integers and lose it.
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

impl ExpirationDate {
    pub fn new(format: DateFormat, value: impl Into<String>) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }
}

/// Identity fields of a standalone secondary structure, as written in its config.
///
/// `lic`, `pcn` and `unit_of_measure` sit next to the secondary fields, the same as in a combined
/// config. Either all three are set (linked structure) or none (unlinked); [`LinkIdentity::resolve`]
/// enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIdentity {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_string_or_number"
    )]
    pub lic: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_string_or_number"
    )]
    pub pcn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<u32>,
    #[serde(default)]
    pub lic_policy: LicPolicy,
}

impl LinkIdentity {
    /// Returns the product identity, or `None` if no identity field is set.
    ///
    /// # Errors
    ///
    /// Returns [`UdiError::Validation`] naming the first missing field if only some of `lic`,
    /// `pcn` and `unit_of_measure` are set.
    pub fn resolve(&self) -> UdiResult<Option<ProductIdentity>> {
        match (&self.lic, &self.pcn, self.unit_of_measure) {
            (None, None, None) => Ok(None),
            (Some(lic), Some(pcn), Some(unit_of_measure)) => Ok(Some(ProductIdentity {
                lic: lic.clone(),
                pcn: pcn.clone(),
                unit_of_measure,
                lic_policy: self.lic_policy,
            })),
            _ => {
                let missing = if self.lic.is_none() {
                    "lic"
                } else if self.pcn.is_none() {
                    "pcn"
                } else {
                    "unit_of_measure"
                };
                Err(UdiError::validation(
                    missing,
                    "",
                    "set together with the other identity fields (lic, pcn, unit_of_measure)",
                ))
            }
        }
    }
}

impl From<ProductIdentity> for LinkIdentity {
    fn from(identity: ProductIdentity) -> Self {
        Self {
            lic: Some(identity.lic),
            pcn: Some(identity.pcn),
            unit_of_measure: Some(identity.unit_of_measure),
            lic_policy: identity.lic_policy,
        }
    }
}

/// Lot, serial number, quantity and date fields of the secondary data structure.
///
/// A serial number and a quantity cannot be combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryFields {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub lot: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub sn: Option<String>,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    #[serde(default)]
    pub exp_date: Option<ExpirationDate>,
    /// `YYYYMMDD`.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub manufacture_date: Option<String>,
}

impl SecondaryFields {
    pub fn with_lot(mut self, lot: impl Into<String>) -> Self {
        self.lot = Some(lot.into());
        self
    }

    pub fn with_serial(mut self, sn: impl Into<String>) -> Self {
        self.sn = Some(sn.into());
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_exp_date(mut self, exp_date: ExpirationDate) -> Self {
        self.exp_date = Some(exp_date);
        self
    }

    pub fn with_manufacture_date(mut self, date: impl Into<String>) -> Self {
        self.manufacture_date = Some(date.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryConfig {
    #[serde(flatten)]
    pub identity: ProductIdentity,
    /// Omit the trailing check character.
    #[serde(default)]
    pub no_check_char: bool,
}

impl PrimaryConfig {
    pub fn new(identity: ProductIdentity) -> Self {
        Self {
            identity,
            no_check_char: false,
        }
    }
}

/// Input for a standalone secondary data structure.
///
/// With identity fields the structure is linked: the primary structure's check character is
/// embedded before the final check character. Without them the structure stands alone (lot-only
/// mode) and carries no link character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryConfig {
    #[serde(flatten)]
    pub identity: LinkIdentity,
    #[serde(flatten)]
    pub fields: SecondaryFields,
    #[serde(default)]
    pub no_check_char: bool,
}

impl SecondaryConfig {
    pub fn linked(identity: ProductIdentity, fields: SecondaryFields) -> Self {
        Self {
            identity: identity.into(),
            fields,
            no_check_char: false,
        }
    }

    pub fn unlinked(fields: SecondaryFields) -> Self {
        Self {
            identity: LinkIdentity::default(),
            fields,
            no_check_char: false,
        }
    }
}

/// Input for a combined (primary + secondary) data structure.
///
/// A combined structure always ends with exactly one check character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedConfig {
    #[serde(flatten)]
    pub identity: ProductIdentity,
    #[serde(flatten)]
    pub fields: SecondaryFields,
}

impl CombinedConfig {
    pub fn new(identity: ProductIdentity, fields: SecondaryFields) -> Self {
        Self { identity, fields }
    }
}

/// Parse a config from YAML text.
pub fn from_yaml_str<T: DeserializeOwned>(input: &str) -> UdiResult<T> {
    serde_yaml::from_str(input).map_err(UdiError::InvalidYaml)
}

/// Parse a config from JSON text.
pub fn from_json_str<T: DeserializeOwned>(input: &str) -> UdiResult<T> {
    serde_json::from_str(input).map_err(UdiError::InvalidJson)
}

/// Load a config file, choosing the parser from the file extension.
///
/// `.yaml` and `.yml` are read as YAML, `.json` as JSON.
///
/// # Errors
///
/// Returns [`UdiError::UnsupportedConfigFormat`] for any other extension,
/// [`UdiError::ConfigRead`] if the file cannot be read, and a parse error if its contents do not
/// describe a `T`. Field contracts (lengths, alphabets) are not checked here; the encoder does
/// that.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> UdiResult<T> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("yaml" | "yml") => {
            let contents = std::fs::read_to_string(path).map_err(UdiError::ConfigRead)?;
            from_yaml_str(&contents)
        }
        Some("json") => {
            let contents = std::fs::read_to_string(path).map_err(UdiError::ConfigRead)?;
            from_json_str(&contents)
        }
        _ => Err(UdiError::UnsupportedConfigFormat(
            path.display().to_string(),
        )),
    }
}

/// Product numbers, lots and serials are often written as bare integers in config files.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(u64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}

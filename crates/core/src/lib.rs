//! # UDI Core
//!
//! Encoder for Unique Device Identification strings in the HIBC 2.5 supplier labeling format.
//!
//! This crate turns product, lot, date and quantity data into the text carried by a HIBC
//! barcode:
//! - primary data structure (labeler and product identity)
//! - secondary data structure (lot, serial number, expiration/manufacture date, quantity)
//! - combined data structure (both in one symbol)
//! - the Modulo-43 check character all three end with
//!
//! Every operation is a pure function of its input. Nothing is cached or shared between calls.
//!
//! **No rendering or decoding**: drawing the symbol and parsing scanned data are out of scope.
//!
//! ```
//! use udi_core::{create_primary_data_structure, PrimaryConfig, ProductIdentity};
//!
//! let config = PrimaryConfig::new(ProductIdentity::new("SNOW", "MAKER", 0));
//! assert_eq!(create_primary_data_structure(&config).unwrap(), "+SNOWMAKER0Q");
//! ```

pub mod check_char;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod mod43;
pub mod udi;
pub mod validation;

pub use check_char::generate_check_char;
pub use config::{
    load_config, CombinedConfig, ExpirationDate, LicPolicy, LinkIdentity, PrimaryConfig,
    ProductIdentity, Quantity, SecondaryConfig, SecondaryFields,
};
pub use error::{UdiError, UdiResult};
pub use format::barcodify;
pub use udi::{
    create_combined_data_structure, create_primary_data_structure,
    create_secondary_data_structure,
};

// Format tags are part of the config types, so callers should not need a second dependency.
pub use hibc_types::{DateFormat, QuantityFormat, ReferenceField, TagError};

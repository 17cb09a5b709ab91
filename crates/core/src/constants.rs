//! Literal characters and prefixes from the HIBC 2.5 layout tables.
//!
//! Kept in one place so the encoder and formatters never spell a flag differently.

/// Supplier Labeling Data Identifier Flag Character, first character of every structure.
pub const HIBC_FLAG: char = '+';

/// Delimiter between the primary and secondary parts of a combined structure, and between
/// fields inside the secondary structure.
pub const DATA_DELIMITER: char = '/';

/// Quantity/date flag introducing a secondary structure.
pub const QUANTITY_FLAG: &str = "$$";

/// Delimiter placed between lot and serial number when both are present.
pub const SERIAL_DELIMITER: &str = "/S";

/// Date slot value meaning "no short date, lot field follows".
pub const NULL_DATE_FLAG: char = '7';

/// Data identifier for the manufacture date block.
pub const MANUFACTURE_DATE_PREFIX: &str = "16D";

/// Data identifier for the supplemental (long form) expiration date block.
pub const LONG_EXPIRATION_DATE_PREFIX: &str = "14D";

/// Delimiter around the human-readable interpretation printed under a barcode.
pub const BARCODE_DELIMITER: char = '*';

/// Exact LIC length.
pub const LIC_LEN: i64 = 4;

/// Permitted PCN length range.
pub const PCN_MIN_LEN: i64 = 1;
pub const PCN_MAX_LEN: i64 = 18;

/// Maximum length of the lot and serial number fields.
pub const LOT_SERIAL_MAX_LEN: i64 = 18;

/// Largest unit of measure ID.
pub const MAX_UNIT_OF_MEASURE: u32 = 9;

/// Manufacture dates are always `YYYYMMDD`.
pub const MANUFACTURE_DATE_LEN: i64 = 8;

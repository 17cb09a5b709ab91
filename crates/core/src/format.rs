//! Field formatters for the secondary data structure (ANSI/HIBC 2.5, Appendix E).
//!
//! Each function turns an already validated value into the exact substring the layout tables
//! prescribe. None of them validate.

use crate::config::ExpirationDate;
use crate::constants::{
    BARCODE_DELIMITER, DATA_DELIMITER, HIBC_FLAG, LONG_EXPIRATION_DATE_PREFIX,
    MANUFACTURE_DATE_PREFIX, NULL_DATE_FLAG, QUANTITY_FLAG, SERIAL_DELIMITER,
};
use hibc_types::{QuantityFormat, ReferenceField};

/// Formats the lot/serial field.
///
/// Lot and serial number are joined with `/S` when both are given. Otherwise whichever is given
/// is returned as is, or an empty string if neither is.
pub fn format_lot_serial(lot: Option<&str>, sn: Option<&str>) -> String {
    match (lot, sn) {
        (Some(lot), Some(sn)) => format!("{lot}{SERIAL_DELIMITER}{sn}"),
        (Some(value), None) | (None, Some(value)) => value.to_owned(),
        (None, None) => String::new(),
    }
}

/// Returns the quantity/date flag, `$$` for a lot reference and `$$+` for a serial number.
pub fn quantity_flag(reference: ReferenceField) -> String {
    match reference {
        ReferenceField::Lot => QUANTITY_FLAG.to_owned(),
        ReferenceField::Serial => format!("{QUANTITY_FLAG}{HIBC_FLAG}"),
    }
}

/// Prefixes the quantity with its format tag (`8` or `9`).
pub fn format_quantity(value: &str, format: QuantityFormat) -> String {
    format!("{}{value}", format.tag())
}

/// Formats the expiration date.
///
/// - no date: the null date flag `7`
/// - `MMYY`: the date unprefixed
/// - `YYYYMMDD`: the supplemental block `/14D<date>`; the caller puts the null date flag in the
///   short date slot
/// - any other layout: its flag digit followed by the date
pub fn format_expiration_date(date: Option<&ExpirationDate>) -> String {
    let Some(date) = date else {
        return NULL_DATE_FLAG.to_string();
    };

    if date.format.is_supplemental() {
        return format!(
            "{DATA_DELIMITER}{LONG_EXPIRATION_DATE_PREFIX}{}",
            date.value
        );
    }

    match date.format.tag() {
        Some(tag) => format!("{tag}{}", date.value),
        None => date.value.clone(),
    }
}

/// Formats the manufacture date block `/16D<date>`, or an empty string if there is none.
pub fn format_manufacture_date(date: Option<&str>) -> String {
    match date {
        Some(date) => format!("{DATA_DELIMITER}{MANUFACTURE_DATE_PREFIX}{date}"),
        None => String::new(),
    }
}

/// Formats an encoded structure as the human-readable interpretation printed under its barcode
/// (ANSI/HIBC 2.5, 4.1).
///
/// The data is wrapped in `*` and whitespace is replaced with `_`, so a space check character
/// stays visible.
pub fn barcodify(data: &str) -> String {
    let body: String = data
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{BARCODE_DELIMITER}{body}{BARCODE_DELIMITER}")
}

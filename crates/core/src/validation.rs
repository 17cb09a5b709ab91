//! Input validation utilities.
//!
//! The predicates at the top of this module are pure checks on a single value. The `validate_*`
//! functions below them apply the HIBC field contracts and turn a failed check into a
//! [`UdiError::Validation`] naming the field, the received value and the expected shape.

use crate::config::{ExpirationDate, LicPolicy, Quantity};
use crate::constants::{
    LIC_LEN, LOT_SERIAL_MAX_LEN, MANUFACTURE_DATE_LEN, MAX_UNIT_OF_MEASURE, PCN_MAX_LEN,
    PCN_MIN_LEN,
};
use crate::{UdiError, UdiResult};
use hibc_types::DateFormat;

/// Returns true if a value was supplied.
///
/// An empty string is still a value.
pub fn is_present<T>(value: Option<T>) -> bool {
    value.is_some()
}

/// Returns true if `value` contains only ASCII letters and digits. The empty string qualifies.
pub fn is_alphanumeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `value` contains only decimal digits. The empty string qualifies.
pub fn is_numeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

/// Checks whether `value` is between `min` and `max` characters long (inclusive).
///
/// When `max` is omitted the length must be exactly `min`.
///
/// # Errors
///
/// Returns [`UdiError::InvalidRange`] if either bound is negative or `min > max`. This is a
/// misuse of the check itself and is reported regardless of `value`.
pub fn has_length(value: &str, min: i64, max: Option<i64>) -> UdiResult<bool> {
    let max = max.unwrap_or(min);
    if min < 0 || max < 0 || min > max {
        return Err(UdiError::InvalidRange { min, max });
    }
    let len = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    Ok(min <= len && len <= max)
}

/// Returns true if `value` is all digits and has exactly as many digits as `format` requires.
///
/// Calendar validity (month 13, day 32, ...) is not checked; HIBC only defines the layout.
pub fn is_valid_date(value: &str, format: DateFormat) -> bool {
    is_numeric(value) && value.len() == format.digits()
}

/// Validates a Labeler Identification Code.
///
/// Under [`LicPolicy::Strict`] the LIC must be 4 alphanumeric characters starting with a
/// letter. [`LicPolicy::Compatible`] also accepts a leading digit.
pub fn validate_lic(lic: &str, policy: LicPolicy) -> UdiResult<()> {
    let shape_ok = is_alphanumeric(lic) && has_length(lic, LIC_LEN, None)?;
    let leading_alpha = lic.chars().next().is_some_and(|c| c.is_ascii_alphabetic());

    match policy {
        LicPolicy::Strict if !(shape_ok && leading_alpha) => Err(UdiError::validation(
            "lic",
            lic,
            "an alphanumeric value with a length of 4, starting with a letter",
        )),
        LicPolicy::Compatible if !shape_ok => Err(UdiError::validation(
            "lic",
            lic,
            "an alphanumeric value with a length of 4",
        )),
        LicPolicy::Compatible if !leading_alpha => {
            tracing::warn!(lic, "accepting LIC without a leading letter in compatibility mode");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Validates a Product or Catalog Number: 1-18 alphanumeric characters.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] for field `pcn` otherwise.
pub fn validate_pcn(pcn: &str) -> UdiResult<()> {
    if !(is_alphanumeric(pcn) && has_length(pcn, PCN_MIN_LEN, Some(PCN_MAX_LEN))?) {
        return Err(UdiError::validation(
            "pcn",
            pcn,
            format!("an alphanumeric value with a length of {PCN_MIN_LEN}-{PCN_MAX_LEN}"),
        ));
    }
    Ok(())
}

/// Validates a unit of measure ID, a single digit.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] for field `unit_of_measure` if it is above 9.
pub fn validate_unit_of_measure(unit_of_measure: u32) -> UdiResult<()> {
    if unit_of_measure > MAX_UNIT_OF_MEASURE {
        return Err(UdiError::validation(
            "unit_of_measure",
            unit_of_measure.to_string(),
            format!("an integer between 0-{MAX_UNIT_OF_MEASURE}"),
        ));
    }
    Ok(())
}

/// Validates the optional lot or serial number field named `field`.
pub fn validate_lot_serial(field: &'static str, value: Option<&str>) -> UdiResult<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(is_alphanumeric(value) && has_length(value, 0, Some(LOT_SERIAL_MAX_LEN))?) {
        return Err(UdiError::validation(
            field,
            value,
            format!("an alphanumeric value with a length of 0-{LOT_SERIAL_MAX_LEN}"),
        ));
    }
    Ok(())
}

/// Validates a quantity: exactly as many digits as its format requires.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] for field `quantity` otherwise.
pub fn validate_quantity(quantity: &Quantity) -> UdiResult<()> {
    let digits = quantity.format.digits();
    // `digits` is 2 or 5, the cast cannot truncate.
    if !(is_numeric(&quantity.value) && has_length(&quantity.value, digits as i64, None)?) {
        return Err(UdiError::validation(
            "quantity",
            quantity.value.as_str(),
            format!(
                "a numeric value with a length of {digits} ({} format)",
                quantity.format
            ),
        ));
    }
    Ok(())
}

/// Validates an expiration date against the digit layout of its format.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] for field `exp_date` if the value is not all digits or has
/// the wrong length.
pub fn validate_expiration_date(date: &ExpirationDate) -> UdiResult<()> {
    if !is_valid_date(&date.value, date.format) {
        return Err(UdiError::validation(
            "exp_date",
            date.value.as_str(),
            format!(
                "a numeric date with a length of {} ({} format)",
                date.format.digits(),
                date.format
            ),
        ));
    }
    Ok(())
}

/// Validates the optional manufacture date, which is always `YYYYMMDD`.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] for field `manufacture_date` if it is given and is not 8
/// digits.
pub fn validate_manufacture_date(date: Option<&str>) -> UdiResult<()> {
    let Some(date) = date else {
        return Ok(());
    };
    if !(is_numeric(date) && has_length(date, MANUFACTURE_DATE_LEN, None)?) {
        return Err(UdiError::validation(
            "manufacture_date",
            date,
            "a numeric date with a length of 8 (YYYYMMDD format)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibc_types::QuantityFormat;

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("asfasd")));
        assert!(is_present(Some("")));
        assert!(is_present(Some(5)));
        assert!(!is_present::<&str>(None));
    }

    #[test]
    fn test_is_alphanumeric_accepts_letters_digits_and_empty() {
        assert!(is_alphanumeric("a"));
        assert!(is_alphanumeric("a1Bc"));
        assert!(is_alphanumeric("1253"));
        assert!(is_alphanumeric("0"));
        assert!(is_alphanumeric(""));
    }

    #[test]
    fn test_is_alphanumeric_rejects_other_characters() {
        assert!(!is_alphanumeric("!\"§$%&/()"));
        assert!(!is_alphanumeric("1.5"));
        assert!(!is_alphanumeric("fUz#w"));
        assert!(!is_alphanumeric("QWERTFG€678"));
        assert!(!is_alphanumeric("two words"));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("1253"));
        assert!(is_numeric("0"));
        assert!(is_numeric(""));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("!\"§$%&/()"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric("-1"));
    }

    #[test]
    fn test_has_length_within_range() {
        assert!(has_length("", 0, Some(0)).unwrap());
        assert!(has_length("6", 1, None).unwrap());
        assert!(has_length("f", 1, None).unwrap());
        for value in ["f", "fo", "foo", "foob", "fooba", "foobar"] {
            assert!(has_length(value, 1, Some(6)).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_has_length_outside_range() {
        assert!(!has_length("55", 5, Some(10)).unwrap());
        assert!(!has_length("0", 5, Some(10)).unwrap());
        assert!(!has_length("nope", 0, None).unwrap());
        assert!(!has_length("foobarx", 1, Some(6)).unwrap());
    }

    #[test]
    fn test_has_length_counts_characters_not_bytes() {
        assert!(has_length("€€", 2, None).unwrap());
    }

    #[test]
    fn test_has_length_rejects_min_greater_than_max() {
        let err = has_length("0", 1000, Some(100)).expect_err("should reject");
        assert!(matches!(err, UdiError::InvalidRange { min: 1000, max: 100 }));
    }

    #[test]
    fn test_has_length_rejects_negative_bounds() {
        assert!(matches!(
            has_length("150", 100, Some(-100)),
            Err(UdiError::InvalidRange { .. })
        ));
        assert!(matches!(
            has_length("0", -100, Some(100)),
            Err(UdiError::InvalidRange { .. })
        ));
        assert!(matches!(
            has_length("", -1, None),
            Err(UdiError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("1253", DateFormat::Mmyy));
        assert!(is_valid_date("20160101", DateFormat::Yyyymmdd));
        assert!(is_valid_date("05271", DateFormat::Yyjjj));
        assert!(is_valid_date("0527114", DateFormat::Yyjjjhh));
        assert!(!is_valid_date("12", DateFormat::Mmyy));
        assert!(!is_valid_date("12.12.2015", DateFormat::Yymmddhh));
        assert!(!is_valid_date("160101", DateFormat::Yyyymmdd));
    }

    #[test]
    fn test_validate_lic_strict() {
        assert!(validate_lic("SNOW", LicPolicy::Strict).is_ok());
        assert!(validate_lic("A123", LicPolicy::Strict).is_ok());

        for lic in ["TooLong", "foo", "$OOD", "1234", ""] {
            let err = validate_lic(lic, LicPolicy::Strict).expect_err("should reject");
            assert!(
                matches!(&err, UdiError::Validation { field: "lic", value, .. } if value == lic),
                "{lic}: {err}"
            );
        }
    }

    #[test]
    fn test_validate_lic_compatible_allows_leading_digit() {
        assert!(validate_lic("1234", LicPolicy::Compatible).is_ok());
        assert!(validate_lic("$OOD", LicPolicy::Compatible).is_err());
        assert!(validate_lic("foo", LicPolicy::Compatible).is_err());
    }

    #[test]
    fn test_validate_pcn() {
        assert!(validate_pcn("MAKER").is_ok());
        assert!(validate_pcn("123123").is_ok());
        assert!(validate_pcn("").is_err());
        assert!(validate_pcn("qwertzu123asdfghjkl").is_err());
        assert!(validate_pcn("qwertzu%opa#fghj").is_err());
    }

    #[test]
    fn test_validate_unit_of_measure() {
        for uom in 0..=9 {
            assert!(validate_unit_of_measure(uom).is_ok());
        }
        let err = validate_unit_of_measure(152134).expect_err("should reject");
        assert!(
            matches!(err, UdiError::Validation { field: "unit_of_measure", value, .. } if value == "152134")
        );
    }

    #[test]
    fn test_validate_lot_serial() {
        assert!(validate_lot_serial("lot", None).is_ok());
        assert!(validate_lot_serial("lot", Some("")).is_ok());
        assert!(validate_lot_serial("lot", Some("3C001")).is_ok());
        assert!(validate_lot_serial("sn", Some("235LKJ6HJK687HKJNBK7866578AS")).is_err());

        let err = validate_lot_serial("sn", Some("QWERTFG€678")).expect_err("should reject");
        assert!(matches!(err, UdiError::Validation { field: "sn", .. }));
    }

    #[test]
    fn test_validate_quantity_requires_exact_digit_count() {
        let ok = Quantity::new(QuantityFormat::TwoDigit, "66");
        assert!(validate_quantity(&ok).is_ok());

        for (format, value) in [
            (QuantityFormat::TwoDigit, "1"),
            (QuantityFormat::FiveDigit, "125"),
            (QuantityFormat::FiveDigit, "10000000000000"),
            (QuantityFormat::TwoDigit, "6a"),
        ] {
            let err = validate_quantity(&Quantity::new(format, value)).expect_err("should reject");
            assert!(matches!(err, UdiError::Validation { field: "quantity", .. }));
        }
    }

    #[test]
    fn test_validate_expiration_date() {
        assert!(validate_expiration_date(&ExpirationDate::new(DateFormat::Mmyy, "0905")).is_ok());
        assert!(validate_expiration_date(&ExpirationDate::new(DateFormat::Yymmdd, "01")).is_err());

        let err = validate_expiration_date(&ExpirationDate::new(DateFormat::Yyyymmdd, "160101"))
            .expect_err("should reject");
        assert!(err.to_string().contains("YYYYMMDD"));
    }

    #[test]
    fn test_validate_manufacture_date() {
        assert!(validate_manufacture_date(None).is_ok());
        assert!(validate_manufacture_date(Some("20160101")).is_ok());
        assert!(validate_manufacture_date(Some("01")).is_err());
        assert!(validate_manufacture_date(Some("150101")).is_err());
    }
}

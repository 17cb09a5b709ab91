//! HIBC primary, secondary and combined data structures.
//!
//! Layouts (ANSI/HIBC 2.5, section 2):
//!
//! - primary: `+ LIC PCN U C`
//! - secondary: `+ $$[+] [Q] D LOT[/S SN] [/16D MFG] [/14D EXP] L C`
//! - combined: `+ LIC PCN U / $$[+] [Q] D LOT[/S SN] [/16D MFG] [/14D EXP] C`
//!
//! where `U` is the unit of measure, `Q` the tagged quantity, `D` the short expiration date or the
//! null date flag `7`, `L` the link character (the primary check character, only in a linked
//! standalone secondary) and `C` the Modulo-43 check character.

use crate::check_char::generate_check_char;
use crate::config::{CombinedConfig, PrimaryConfig, ProductIdentity, SecondaryConfig, SecondaryFields};
use crate::constants::{DATA_DELIMITER, HIBC_FLAG, NULL_DATE_FLAG};
use crate::format::{
    format_expiration_date, format_lot_serial, format_manufacture_date, format_quantity,
    quantity_flag,
};
use crate::validation::{
    validate_expiration_date, validate_lic, validate_lot_serial, validate_manufacture_date,
    validate_pcn, validate_quantity, validate_unit_of_measure,
};
use crate::{UdiError, UdiResult};
use hibc_types::ReferenceField;

/// Whether an encode step finishes its structure with a check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckChar {
    Append,
    Omit,
}

impl CheckChar {
    fn unless(no_check_char: bool) -> Self {
        if no_check_char {
            Self::Omit
        } else {
            Self::Append
        }
    }

    fn apply(self, mut data: String) -> UdiResult<String> {
        if self == Self::Append {
            let check = generate_check_char(&data)?;
            data.push(check);
        }
        Ok(data)
    }
}

/// Creates the primary data structure for a product.
///
/// # Errors
///
/// Returns [`UdiError::Validation`] if the LIC, PCN or unit of measure break their contract.
pub fn create_primary_data_structure(config: &PrimaryConfig) -> UdiResult<String> {
    let pds = encode_primary(&config.identity, CheckChar::unless(config.no_check_char))?;
    tracing::debug!(udi = %pds, "encoded primary data structure");
    Ok(pds)
}

/// Creates a standalone secondary data structure.
///
/// When the config carries a product identity, the primary check character is embedded as the
/// link character so a scanner can pair the two labels.
///
/// # Errors
///
/// - [`UdiError::MutualExclusion`] if both a serial number and a quantity are given. This is
///   checked before anything else.
/// - [`UdiError::Validation`] if any identity or secondary field breaks its contract, or if only
///   some of the identity fields are set.
pub fn create_secondary_data_structure(config: &SecondaryConfig) -> UdiResult<String> {
    check_exclusions(&config.fields)?;

    let link = match config.identity.resolve()? {
        Some(identity) => Some(generate_check_char(&encode_primary(
            &identity,
            CheckChar::Omit,
        )?)?),
        None => None,
    };

    let mut sds = format!("{HIBC_FLAG}{}", secondary_body(&config.fields)?);
    if let Some(link) = link {
        sds.push(link);
    }

    let sds = CheckChar::unless(config.no_check_char).apply(sds)?;
    tracing::debug!(udi = %sds, linked = link.is_some(), "encoded secondary data structure");
    Ok(sds)
}

/// Creates a combined data structure: the primary structure, the `/` delimiter and the secondary
/// structure, closed by a single check character over the whole string.
///
/// Neither part carries its own check character, and the secondary part has no flag character
/// or link character.
///
/// # Errors
///
/// Same as [`create_secondary_data_structure`].
pub fn create_combined_data_structure(config: &CombinedConfig) -> UdiResult<String> {
    check_exclusions(&config.fields)?;

    let primary = encode_primary(&config.identity, CheckChar::Omit)?;
    let secondary = secondary_body(&config.fields)?;
    let cds = CheckChar::Append.apply(format!("{primary}{DATA_DELIMITER}{secondary}"))?;
    tracing::debug!(udi = %cds, "encoded combined data structure");
    Ok(cds)
}

fn encode_primary(identity: &ProductIdentity, check: CheckChar) -> UdiResult<String> {
    validate_lic(&identity.lic, identity.lic_policy)?;
    validate_pcn(&identity.pcn)?;
    validate_unit_of_measure(identity.unit_of_measure)?;

    check.apply(format!(
        "{HIBC_FLAG}{}{}{}",
        identity.lic, identity.pcn, identity.unit_of_measure
    ))
}

fn check_exclusions(fields: &SecondaryFields) -> UdiResult<()> {
    if fields.sn.is_some() && fields.quantity.is_some() {
        return Err(UdiError::MutualExclusion {
            first: "sn",
            second: "quantity",
        });
    }
    Ok(())
}

/// Validates the secondary fields and lays them out, starting at the quantity/date flag.
fn secondary_body(fields: &SecondaryFields) -> UdiResult<String> {
    let lot = fields.lot.as_deref();
    let sn = fields.sn.as_deref();

    validate_lot_serial("lot", lot)?;
    validate_lot_serial("sn", sn)?;
    if let Some(quantity) = &fields.quantity {
        validate_quantity(quantity)?;
    }
    if let Some(exp_date) = &fields.exp_date {
        validate_expiration_date(exp_date)?;
    }
    validate_manufacture_date(fields.manufacture_date.as_deref())?;

    let reference = ReferenceField::from_presence(lot.is_some(), sn.is_some());
    let mut body = quantity_flag(reference);

    if let Some(quantity) = &fields.quantity {
        body.push_str(&format_quantity(&quantity.value, quantity.format));
    }

    // A long form date does not fit the date slot; it moves to the end and the slot reads "null".
    let (date_slot, supplemental) = match &fields.exp_date {
        Some(exp_date) if exp_date.format.is_supplemental() => (
            NULL_DATE_FLAG.to_string(),
            format_expiration_date(Some(exp_date)),
        ),
        exp_date => (format_expiration_date(exp_date.as_ref()), String::new()),
    };

    body.push_str(&date_slot);
    body.push_str(&format_lot_serial(lot, sn));
    body.push_str(&format_manufacture_date(fields.manufacture_date.as_deref()));
    body.push_str(&supplemental);

    tracing::debug!(?reference, body = %body, "laid out secondary fields");
    Ok(body)
}

use std::sync::LazyLock;

use log::{trace, warn};
use phonenumber::{
    Mode, NationalNumber, PhoneNumber,
    metadata::{DATABASE, Metadata},
};
use regex::Regex;

use super::{
    errors::{InvalidNumberError, UnknownRegionError},
    helper_constants::{NANPA_COUNTRY_CODE, PLUS_SIGN, SINGLE_INTERNATIONAL_PREFIX},
};

static SINGLE_INTERNATIONAL_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SINGLE_INTERNATIONAL_PREFIX).expect("single international prefix pattern is valid")
});

/// Returns numbering plan metadata for the given region code. Codes are
/// matched case-insensitively and surrounding whitespace is ignored.
pub(super) fn get_metadata_for_region(
    region_code: &str,
) -> Result<&'static Metadata, UnknownRegionError> {
    let region_code = region_code.trim().to_ascii_uppercase();
    match DATABASE.by_id(&region_code) {
        Some(metadata) => Ok(metadata),
        None => {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            Err(UnknownRegionError(region_code))
        }
    }
}

fn has_valid_country_calling_code(country_calling_code: u16) -> bool {
    DATABASE.by_code(&country_calling_code).is_some()
}

/// Gets the national significant number of a phone number, including any
/// leading zeros it carries.
pub(super) fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
    let national = phone_number.national();
    let zeros = "0".repeat(national.zeros() as usize);
    let mut buf = itoa::Buffer::new();
    let value = buf.format(national.value());
    fast_cat::concat_str!(&zeros, value)
}

/// Returns a copy of `phone_number` attributed to `country_calling_code` and
/// carrying `leading_zeros` Italian leading zeros. The subscriber digits,
/// extension and carrier are kept as they are; nothing is parsed again.
///
/// The library keeps the fields of [`PhoneNumber`] private, so the copy is
/// made by rewriting them in its serialized form.
pub(super) fn override_number(
    phone_number: &PhoneNumber,
    country_calling_code: u16,
    leading_zeros: u8,
) -> Result<PhoneNumber, InvalidNumberError> {
    let national = NationalNumber::new(phone_number.national().value(), leading_zeros)?;

    let mut fields = serde_json::to_value(phone_number)?;
    fields["code"]["value"] = country_calling_code.into();
    fields["national"] = serde_json::to_value(national)?;
    trace!("Overriding number fields as {fields}");

    Ok(serde_json::from_value(fields)?)
}

/// Picks the prefix a caller in the region described by `metadata` dials to
/// reach another country. A preferred prefix wins; otherwise the prefix is
/// only usable when it is a single literal rather than a pattern.
fn international_prefix_for_formatting(metadata: &Metadata) -> Option<&str> {
    if let Some(preferred) = metadata.preferred_international_prefix() {
        return Some(preferred);
    }
    metadata
        .international_prefix()
        .map(|prefix| prefix.as_str())
        .filter(|prefix| SINGLE_INTERNATIONAL_PREFIX_REGEX.is_match(prefix))
}

/// Drops the leading `+<code>` (and the following separator) from an
/// international rendering, leaving the formatted national part.
fn strip_country_calling_code<'a>(international: &'a str, country_calling_code: &str) -> &'a str {
    international
        .strip_prefix(PLUS_SIGN)
        .and_then(|rest| rest.strip_prefix(country_calling_code))
        .map(str::trim_start)
        .unwrap_or(international)
}

/// Formats a phone number for out-of-country dialing purposes.
///
/// If the country calling code is the same as that of `region_calling_from`,
/// then NATIONAL formatting will be applied. An unknown `region_calling_from`
/// is an error.
///
/// If the number itself has a country calling code of zero or an otherwise
/// invalid country calling code, then we return the number with no formatting
/// applied.
///
/// Note this function takes care of the case for calling inside of NANPA and
/// between Russia and Kazakhstan (who share the same country calling code). In
/// those cases, no international prefix is used. For regions which have
/// multiple international prefixes, the number in its INTERNATIONAL format
/// will be returned instead.
pub(super) fn format_out_of_country_calling_number(
    phone_number: &PhoneNumber,
    region_calling_from: &str,
) -> Result<String, UnknownRegionError> {
    let metadata_calling_from = get_metadata_for_region(region_calling_from)?;
    let country_calling_code = phone_number.code().value();
    if !has_valid_country_calling_code(country_calling_code) {
        return Ok(get_national_significant_number(phone_number));
    }

    let national_format = || phone_number.format().mode(Mode::National).to_string();
    let calling_from_code = metadata_calling_from.country_code();
    if country_calling_code == NANPA_COUNTRY_CODE {
        if calling_from_code == NANPA_COUNTRY_CODE {
            // For NANPA regions, return the national format for these regions
            // but prefix it with the country calling code.
            let national = national_format();
            let mut buf = itoa::Buffer::new();
            let code = buf.format(country_calling_code);
            return Ok(fast_cat::concat_str!(code, " ", &national));
        }
    } else if country_calling_code == calling_from_code {
        // If regions share a country calling code, the country calling code
        // need not be dialled. This also applies when dialling within a region.
        return Ok(national_format());
    }

    let mut buf = itoa::Buffer::new();
    let code = buf.format(country_calling_code);
    let international = phone_number.format().mode(Mode::International).to_string();
    let formatted_number = strip_country_calling_code(&international, code);

    Ok(match international_prefix_for_formatting(metadata_calling_from) {
        Some(prefix) => fast_cat::concat_str!(prefix, " ", code, " ", formatted_number),
        None => fast_cat::concat_str!(PLUS_SIGN, code, " ", formatted_number),
    })
}

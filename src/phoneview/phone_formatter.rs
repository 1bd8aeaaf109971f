use std::borrow::Cow;

use log::trace;
use phonenumber::{PhoneNumber, country};

use super::{
    PhoneNumberFormat,
    errors::{InvalidNumberError, PhoneViewError, UnknownRegionError},
    helper_functions,
};
use crate::config::PhoneViewConfig;

/// A parsed phone number plus the preferences used to display it.
///
/// The number is parsed once, on construction. Configuration methods return
/// `&mut Self` so they can be chained, and [`render`](Self::render) produces
/// the string:
///
/// ```no_run
/// use phone_view::PhoneFormatter;
///
/// let rendered = PhoneFormatter::new("021 234 567")?
///     .international()
///     .render()?;
/// assert!(rendered.starts_with("+64 "));
/// # Ok::<(), phone_view::PhoneViewError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhoneFormatter {
    number: PhoneNumber,
    phone_number_format: PhoneNumberFormat,
    /// The country the user is dialing from.
    from_country: Option<String>,
    /// Calling code of the country the number is attributed to by `to`.
    country_code: Option<u16>,
    leading_zero: Option<bool>,
}

impl PhoneFormatter {
    /// Parses `phone` against the default country of the process-wide
    /// configuration.
    pub fn new(phone: &str) -> Result<Self, PhoneViewError> {
        Self::with_config(phone, PhoneViewConfig::global())
    }

    /// Parses `phone` against `config.default_country`. Numbers starting with
    /// `+` keep their own country calling code.
    pub fn with_config(phone: &str, config: &PhoneViewConfig) -> Result<Self, PhoneViewError> {
        let region = config.default_country.trim().to_ascii_uppercase();
        let country = region
            .parse::<country::Id>()
            .map_err(|_| InvalidNumberError::UnsupportedDefaultRegion(region.clone()))?;
        let number = phonenumber::parse(Some(country), phone).map_err(InvalidNumberError::from)?;
        trace!("Parsed '{phone}' against {region} as {number:?}");

        Ok(Self {
            number,
            phone_number_format: PhoneNumberFormat::default(),
            from_country: None,
            country_code: None,
            leading_zero: None,
        })
    }

    /// Format the phone number in international format.
    pub fn international(&mut self) -> &mut Self {
        self.format(PhoneNumberFormat::International)
    }

    /// Format the phone number in national format.
    pub fn national(&mut self) -> &mut Self {
        self.format(PhoneNumberFormat::National)
    }

    /// Format the phone number in E164 format.
    pub fn e164(&mut self) -> &mut Self {
        self.format(PhoneNumberFormat::E164)
    }

    /// Format the phone number in RFC3966 format.
    pub fn rfc3966(&mut self) -> &mut Self {
        self.format(PhoneNumberFormat::RFC3966)
    }

    pub fn format(&mut self, phone_number_format: PhoneNumberFormat) -> &mut Self {
        self.phone_number_format = phone_number_format;
        self
    }

    /// Set the country to which the phone number belongs.
    ///
    /// Only the country calling code changes; the subscriber digits are kept
    /// as parsed and are not re-validated. An unknown region leaves the
    /// formatter untouched.
    pub fn to(&mut self, region_code: &str) -> Result<&mut Self, UnknownRegionError> {
        let metadata = helper_functions::get_metadata_for_region(region_code)?;
        self.country_code = Some(metadata.country_code());
        Ok(self)
    }

    /// Set the country the user is dialing from.
    ///
    /// The region code is stored as given and checked by [`render`](Self::render).
    pub fn from(&mut self, region_code: &str) -> &mut Self {
        self.from_country = Some(region_code.to_owned());
        self
    }

    /// Sets whether this phone number uses an Italian leading zero.
    ///
    /// `true` keeps at least one zero in front of the national number, in
    /// every format, whatever the numbering plan. `false` drops them all.
    pub fn leading_zero(&mut self, value: bool) -> &mut Self {
        self.leading_zero = Some(value);
        self
    }

    pub fn phone_number_format(&self) -> PhoneNumberFormat {
        self.phone_number_format
    }

    pub fn from_country(&self) -> Option<&str> {
        self.from_country.as_deref()
    }

    /// The number as parsed on construction, without `to` or
    /// `leading_zero` applied.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Renders the number.
    ///
    /// With an origin country set by [`from`](Self::from) the number is
    /// formatted as dialled from that country, otherwise in the selected
    /// [`PhoneNumberFormat`].
    pub fn render(&self) -> Result<String, PhoneViewError> {
        let number = self.effective_number()?;
        match &self.from_country {
            Some(from_country) => {
                trace!("Rendering out-of-country number dialled from {from_country}");
                Ok(helper_functions::format_out_of_country_calling_number(
                    &number,
                    from_country,
                )?)
            }
            None => {
                trace!("Rendering number in {} format", self.phone_number_format);
                Ok(number.format().mode(self.phone_number_format.into()).to_string())
            }
        }
    }

    /// Alias of [`render`](Self::render) for template layers that look up a
    /// `for_template` method.
    pub fn for_template(&self) -> Result<String, PhoneViewError> {
        self.render()
    }

    /// The parsed number with the `to` and `leading_zero` overrides applied.
    fn effective_number(&self) -> Result<Cow<'_, PhoneNumber>, InvalidNumberError> {
        if self.country_code.is_none() && self.leading_zero.is_none() {
            return Ok(Cow::Borrowed(&self.number));
        }

        let country_calling_code = self
            .country_code
            .unwrap_or_else(|| self.number.code().value());
        let zeros = self.number.national().zeros();
        let leading_zeros = match self.leading_zero {
            Some(true) => zeros.max(1),
            Some(false) => 0,
            None => zeros,
        };
        helper_functions::override_number(&self.number, country_calling_code, leading_zeros)
            .map(Cow::Owned)
    }
}

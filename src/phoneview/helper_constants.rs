pub const PLUS_SIGN: &'static str = "+";

pub const NANPA_COUNTRY_CODE: u16 = 1;

// An international prefix that is a single literal (e.g. "011" or "8~10"),
// as opposed to a pattern matching several prefixes. Only such a prefix can be
// printed in front of a number dialled from abroad.
pub const SINGLE_INTERNATIONAL_PREFIX: &'static str =
    "^[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?$";

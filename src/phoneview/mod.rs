mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phone_formatter;

pub use enums::PhoneNumberFormat;
pub use phone_formatter::PhoneFormatter;

pub mod config;
mod phoneview;

pub use config::{PHONE_VIEW_CONFIG, PhoneViewConfig};
pub use phoneview::{
    PhoneFormatter, PhoneNumberFormat,
    errors::{InvalidNumberError, PhoneViewError, UnknownRegionError},
};

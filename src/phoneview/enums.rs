// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use phonenumber::Mode;
use strum::{Display, EnumIter};

/// Selects how [`PhoneFormatter`](super::PhoneFormatter) renders its number
/// when no origin country is set.
///
/// The New Zealand mobile number `021 234 567` renders as:
/// - E164: `+6421234567`
/// - International: `+64 21 234 567`
/// - National: `021 234 567`
/// - RFC3966: `tel:+64-21-234-567`
#[derive(Debug, Default, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` and the country code followed by the subscriber digits, no
    /// separators. This is the default selection.
    #[default]
    E164,
    /// Country code followed by the number grouped with spaces.
    International,
    /// The number as dialled inside its own country, national prefix included.
    National,
    /// `tel:` URI form, hyphen separated.
    RFC3966,
}

impl From<PhoneNumberFormat> for Mode {
    fn from(value: PhoneNumberFormat) -> Self {
        match value {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
        }
    }
}

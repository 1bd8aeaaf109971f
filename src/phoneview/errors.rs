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

use thiserror::Error;

/// Any failure a [`PhoneFormatter`](super::PhoneFormatter) can report.
#[derive(Debug, Error)]
pub enum PhoneViewError {
    #[error("{0}")]
    InvalidNumber(#[from] InvalidNumberError),
    #[error("{0}")]
    UnknownRegion(#[from] UnknownRegionError),
}

/// The raw input could not be turned into a phone number.
#[derive(Debug, Error)]
pub enum InvalidNumberError {
    #[error("Invalid number given: {0}")]
    FailedToParse(#[from] phonenumber::ParseError),
    /// The configured default country is not a region the metadata knows,
    /// so numbers without a `+` can't be read against it.
    #[error("Default region {0} is not supported")]
    UnsupportedDefaultRegion(String),
    /// Applying a country code or leading zero override produced a number
    /// the library refuses to hold.
    #[error("Failed to apply number override: {0}")]
    FailedToOverride(#[from] serde_json::Error),
}

/// A region code that has no numbering plan metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid or unknown region code provided: {0}")]
pub struct UnknownRegionError(pub String);

impl PhoneViewError {
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, PhoneViewError::InvalidNumber(_))
    }

    pub fn is_unknown_region(&self) -> bool {
        matches!(self, PhoneViewError::UnknownRegion(_))
    }
}

// Copyright 2026 the fitdist authors

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error taxonomy for loading, fitting and classification.
//!
//! There is no logging subsystem; every failure surfaces synchronously
//! through the [`Result`] channel and nothing is retried internally.

use std::error;
use std::fmt;

use crate::family::Family;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading a sample, fitting a family or
/// classifying.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sample is unusable: empty, unreadable, unparsable or containing
    /// non-finite values.
    Input(String),
    /// Parameter estimation failed for one family: the data violates the
    /// family's support, has no spread where spread is required, or the
    /// numerical estimator did not converge.
    Fitting {
        /// The family whose fit failed.
        family: Family,
        /// What went wrong.
        message: String,
    },
    /// The classifier was configured without any candidate family.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(message) => write!(f, "invalid input: {message}"),
            Error::Fitting { family, message } => {
                write!(f, "fitting {family} failed: {message}")
            }
            Error::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl error::Error for Error {}

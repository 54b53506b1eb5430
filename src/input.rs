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

//! Reading samples from plain numeric text.
//!
//! The format is a flat sequence of floating-point values separated by
//! whitespace or newlines. `#` starts a comment that runs to the end of the
//! line and blank lines are ignored; there is no column structure. Errors
//! carry the one-based line number of the offending token.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole sample from the numeric text file at `path`.
///
/// # Errors
///
/// [`Error::Input`] when the file cannot be opened or read, a token does not
/// parse as a number, a value is non-finite, or no values are present.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::Input(format!("cannot open '{}': {e}", path.display())))?;
    parse_samples(BufReader::new(file))
}

/// Parses a sample from any buffered reader; see the module docs for the
/// format.
///
/// # Errors
///
/// Same conditions as [`read_samples`], minus the file handling.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| Error::Input(format!("read failed at line {}: {e}", index + 1)))?;
        let data = line.split('#').next().unwrap_or("");
        for token in data.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                Error::Input(format!("line {}: '{token}' is not a number", index + 1))
            })?;
            if !value.is_finite() {
                return Err(Error::Input(format!(
                    "line {}: non-finite value '{token}'",
                    index + 1
                )));
            }
            values.push(value);
        }
    }
    if values.is_empty() {
        return Err(Error::Input("no numeric values found".to_string()));
    }
    Ok(values)
}

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

//! Quantile-quantile diagnostic data.
//!
//! A QQ plot puts the fitted distribution's quantiles on one axis and the
//! sorted sample on the other; points near the diagonal mean the family
//! explains the data well. The plotting positions are Filliben's estimates
//! of the uniform order-statistic medians, the classic choice for
//! probability plots.

use crate::error::Result;
use crate::family::Family;

/// Fits `family` to `samples` and returns `(theoretical, empirical)` quantile
/// pairs, one per observation, ordered by ascending empirical value.
///
/// # Errors
///
/// Propagates [`Error::Input`](crate::Error::Input) and
/// [`Error::Fitting`](crate::Error::Fitting) from the fit.
pub fn qq_pairs(samples: &[f64], family: Family) -> Result<Vec<(f64, f64)>> {
    let fitted = family.fit(samples)?;
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    Ok(sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| (fitted.quantile(filliben_position(i, n)), x))
        .collect())
}

/// Filliben's estimate of the median of the `i`-th of `n` uniform order
/// statistics, `i` counted from zero. Always strictly inside `(0, 1)`.
#[allow(clippy::cast_precision_loss)]
fn filliben_position(i: usize, n: usize) -> f64 {
    let count = n as f64;
    if i == 0 {
        1.0 - 0.5_f64.powf(1.0 / count)
    } else if i == n - 1 {
        0.5_f64.powf(1.0 / count)
    } else {
        ((i + 1) as f64 - 0.3175) / (count + 0.365)
    }
}

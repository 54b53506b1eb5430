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

//! Goodness-of-fit scores for fitted families.
//!
//! Both criteria are lower-is-better. They live on different scales, so a
//! likelihood score must never be compared with a distance score; the
//! classifier ranks every candidate under one [`Criterion`] at a time.

use crate::error::Result;
use crate::family::{Family, Fitted};

/// The criterion used to rank candidate families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Negative log-likelihood of the sample under the fitted parameters.
    ///
    /// This is the raw likelihood term that AIC-style model selection is
    /// built on, kept without the `2k` parameter-count penalty, so families
    /// with more parameters are not handicapped. It is unbounded in both
    /// directions and can be negative when densities exceed one.
    NegLogLikelihood,
    /// One-sample Kolmogorov-Smirnov statistic: the largest absolute gap
    /// between the empirical CDF and the fitted CDF. Always in `[0, 1]`.
    KolmogorovSmirnov,
}

impl Criterion {
    /// Scores `fitted` against `samples`.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty under
    /// [`KolmogorovSmirnov`](Self::KolmogorovSmirnov).
    #[must_use]
    pub fn score(self, fitted: &Fitted, samples: &[f64]) -> f64 {
        match self {
            Criterion::NegLogLikelihood => nll(fitted, samples),
            Criterion::KolmogorovSmirnov => ks_statistic(fitted, samples),
        }
    }

    /// Same as [`score`](Self::score) for samples already sorted ascending.
    pub(crate) fn score_sorted(self, fitted: &Fitted, sorted: &[f64]) -> f64 {
        match self {
            Criterion::NegLogLikelihood => nll(fitted, sorted),
            Criterion::KolmogorovSmirnov => ks_sorted(fitted, sorted),
        }
    }
}

/// Fits `family` to `samples` and scores the result under `criterion`.
///
/// # Errors
///
/// Propagates [`Error::Input`](crate::Error::Input) and
/// [`Error::Fitting`](crate::Error::Fitting) from the fit.
pub fn score_family(family: Family, samples: &[f64], criterion: Criterion) -> Result<f64> {
    let fitted = family.fit(samples)?;
    Ok(criterion.score(&fitted, samples))
}

/// Negative log-likelihood of `samples` under `fitted`. Lower is better;
/// infinite when any observation has zero density.
#[must_use]
pub fn nll(fitted: &Fitted, samples: &[f64]) -> f64 {
    -samples.iter().map(|&x| fitted.ln_pdf(x)).sum::<f64>()
}

/// One-sample Kolmogorov-Smirnov statistic of `samples` against `fitted`.
///
/// # Panics
///
/// Panics if `samples` is empty.
#[must_use]
pub fn ks_statistic(fitted: &Fitted, samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    ks_sorted(fitted, &sorted)
}

/// KS statistic over an ascending-sorted, non-empty sample.
///
/// The empirical CDF jumps by `1/n` at each observation, so the supremum is
/// attained next to a jump. Each plateau level `(i + 1) / n` is compared
/// against the fitted CDF at both of its ends, and the plateaus before the
/// first jump and after the last one contribute the two tail terms.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ks_sorted(fitted: &Fitted, sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let middle = sorted
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let level = (i + 1) as f64 / n as f64;
            let left = (fitted.cdf(pair[0]) - level).abs();
            let right = (fitted.cdf(pair[1]) - level).abs();
            left.max(right)
        })
        .max_by(f64::total_cmp)
        .unwrap_or(0.0);
    let first = fitted.cdf(sorted[0]);
    let last = 1.0 - fitted.cdf(sorted[n - 1]);
    first.max(middle.max(last))
}

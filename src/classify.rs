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

//! Registry-driven selection of the best-fitting family.
//!
//! A [`Classifier`] carries an explicit list of candidate families, fits each
//! one to the sample, scores every successful fit under one criterion and
//! keeps the candidate with the smallest score. Families whose estimation
//! fails are set aside with the reason instead of aborting the whole
//! classification, so a sample with negative values can still be matched
//! against the families whose support admits it.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::family::{self, Family, Fitted};
use crate::score::Criterion;

/// Classifies samples against a configurable list of candidate families.
///
/// The default registry is [`Family::ALL`]; a custom list narrows the search
/// and fixes the tie-break order, since the earliest candidate wins when
/// scores are equal.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct Classifier {
    families: Vec<Family>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            families: Family::ALL.to_vec(),
        }
    }
}

impl Classifier {
    /// A classifier over a custom candidate list.
    #[must_use]
    pub fn new(families: impl Into<Vec<Family>>) -> Classifier {
        Classifier {
            families: families.into(),
        }
    }

    /// The candidate families, in registry order.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Fits and scores every candidate family, returning the full report.
    ///
    /// The sample is sorted once up front; fitting and scoring are
    /// order-independent, so every candidate sees identical data and repeated
    /// calls give identical results.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the registry is empty (checked before the
    /// sample). [`Error::Input`] when the sample is empty or contains a
    /// non-finite value. [`Error::Fitting`] when every candidate family fails
    /// to fit; the first failure in registry order is reported.
    pub fn evaluate(&self, samples: &[f64], criterion: Criterion) -> Result<Selection> {
        if self.families.is_empty() {
            return Err(Error::Config("candidate family list is empty".to_string()));
        }
        family::validate(samples)?;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut scored = Vec::new();
        let mut skipped = Vec::new();
        for &family in &self.families {
            match family.fit(&sorted) {
                Ok(fitted) => {
                    let score = criterion.score_sorted(&fitted, &sorted);
                    scored.push(ScoredFit { fitted, score });
                }
                Err(err @ Error::Fitting { .. }) => skipped.push((family, err)),
                Err(err) => return Err(err),
            }
        }

        let Some(best) = best_of(&scored).cloned() else {
            let (_, err) = skipped
                .into_iter()
                .next()
                .ok_or_else(|| Error::Config("candidate family list is empty".to_string()))?;
            return Err(err);
        };
        Ok(Selection {
            best,
            scored,
            skipped,
        })
    }

    /// Returns the family whose fit scores best under `criterion`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`evaluate`](Self::evaluate).
    pub fn classify(&self, samples: &[f64], criterion: Criterion) -> Result<Family> {
        Ok(self.evaluate(samples, criterion)?.best.fitted.family())
    }
}

/// One fitted candidate with its score.
#[derive(Debug, Clone)]
pub struct ScoredFit {
    /// The fitted model.
    pub fitted: Fitted,
    /// The criterion value; lower is better.
    pub score: f64,
}

/// The outcome of evaluating every candidate family against one sample.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The best-scoring fit.
    pub best: ScoredFit,
    /// Every candidate that fitted, in registry order.
    pub scored: Vec<ScoredFit>,
    /// Candidates that could not be fitted, with the reason.
    pub skipped: Vec<(Family, Error)>,
}

/// The smallest score wins and the first occurrence wins exact ties. Under
/// `total_cmp` a `NaN` score sorts above every real one, so it never
/// displaces a comparable candidate.
fn best_of(scored: &[ScoredFit]) -> Option<&ScoredFit> {
    let mut best: Option<&ScoredFit> = None;
    for candidate in scored {
        let better = match best {
            None => true,
            Some(b) => candidate.score.total_cmp(&b.score) == Ordering::Less,
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

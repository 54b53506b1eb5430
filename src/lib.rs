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

//! Which distribution does a sample come from? This crate fits a fixed set of
//! candidate families to the data by maximum likelihood and names the one
//! that explains it best.
//!
//! The candidates are the six families of [`Family`]: normal, exponential,
//! uniform, log-normal, Student's t and chi-squared. Fitting consults nothing
//! but the sample itself, and the candidates are ranked under one of two
//! [`Criterion`]s: the raw negative log-likelihood of the sample, or the
//! one-sample Kolmogorov-Smirnov statistic. Families the data cannot support,
//! for example the log-normal when the sample has negative values, are set
//! aside with the reason while the remaining candidates compete.
//!
//! Samples load from plain numeric text with [`read_samples`], and
//! [`qq_pairs`] produces quantile-quantile points for a visual check of the
//! winner.
//!
//! # Examples
//!
//! Evenly spaced values have the flat profile of a uniform distribution, and
//! both criteria recognise it:
//! ```
//! use fitdist::{Classifier, Criterion, Family};
//!
//! let data: Vec<f64> = (0..100).map(|i| 0.005 + f64::from(i) * 0.01).collect();
//!
//! let classifier = Classifier::default();
//! let family = classifier
//!     .classify(&data, Criterion::NegLogLikelihood)
//!     .unwrap();
//! assert_eq!(family, Family::Uniform);
//!
//! let selection = classifier
//!     .evaluate(&data, Criterion::KolmogorovSmirnov)
//!     .unwrap();
//! assert_eq!(selection.best.fitted.family(), Family::Uniform);
//! println!("best fit: {}", selection.best.fitted.family());
//! ```
//!
//! A single family can also be fitted directly. The estimates are maximum
//! likelihood, so the normal fit reports the population standard deviation:
//! ```
//! use fitdist::{qq_pairs, Family};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let fitted = Family::Normal.fit(&data).unwrap();
//! assert!((fitted.params()[0] - 5.0).abs() < 1e-12);
//! assert!((fitted.params()[1] - 2.0).abs() < 1e-12);
//!
//! // One (theoretical, empirical) quantile pair per observation.
//! let pairs = qq_pairs(&data, Family::Normal).unwrap();
//! assert_eq!(pairs.len(), data.len());
//! ```
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod classify;
pub mod error;
pub mod family;
pub mod input;
mod mle;
pub mod qq;
pub mod score;

pub use classify::{Classifier, ScoredFit, Selection};
pub use error::{Error, Result};
pub use family::{Family, Fitted};
pub use input::{parse_samples, read_samples};
pub use qq::qq_pairs;
pub use score::{ks_statistic, nll, score_family, Criterion};

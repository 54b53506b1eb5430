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

//! Candidate distribution families and maximum-likelihood fitting.
//!
//! [`Family`] enumerates every distribution the crate knows how to fit. The
//! closed-form estimators live here; the iterative ones (Student's t and the
//! chi-squared degrees of freedom) are in the `mle` module. A successful fit
//! yields a [`Fitted`], which bundles the estimated parameter vector with a
//! ready-to-query `statrs` distribution.

use std::fmt;

use rand::Rng;
use statrs::distribution::{
    ChiSquared, Continuous, ContinuousCDF, Exp, LogNormal, Normal, StudentsT, Uniform,
};
use statrs::statistics::Statistics;

use crate::error::{Error, Result};
use crate::mle;

/// A candidate distribution family.
///
/// Each variant documents the layout of the parameter vector reported by
/// [`Fitted::params`] and the support its fit requires of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Normal (Gaussian); parameters `[mean, std_dev]`.
    Normal,
    /// Exponential; parameter `[rate]`. Requires `x >= 0`.
    Exponential,
    /// Continuous uniform; parameters `[min, max]`.
    Uniform,
    /// Log-normal; parameters `[location, scale]` of `ln x`. Requires `x > 0`.
    LogNormal,
    /// Student's t with location and scale; parameters
    /// `[location, scale, freedom]`.
    StudentsT,
    /// Chi-squared; parameter `[freedom]`. Requires `x > 0`.
    ChiSquared,
}

impl Family {
    /// Every supported family, in the default registry order.
    pub const ALL: [Family; 6] = [
        Family::Normal,
        Family::Exponential,
        Family::Uniform,
        Family::LogNormal,
        Family::StudentsT,
        Family::ChiSquared,
    ];

    /// Stable string identifier, usable in reports and lookups.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Family::Normal => "norm",
            Family::Exponential => "expon",
            Family::Uniform => "uniform",
            Family::LogNormal => "lognorm",
            Family::StudentsT => "t",
            Family::ChiSquared => "chi2",
        }
    }

    /// Looks a family up by the identifier returned from [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Family> {
        Family::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Fits this family to `samples` by maximum likelihood.
    ///
    /// # Errors
    ///
    /// [`Error::Input`] if `samples` is empty or contains a non-finite value.
    /// [`Error::Fitting`] if the data violates the family's support, has no
    /// spread where spread is required, or the numerical estimator fails to
    /// converge.
    pub fn fit(self, samples: &[f64]) -> Result<Fitted> {
        validate(samples)?;
        match self {
            Family::Normal => fit_normal(samples),
            Family::Exponential => fit_exponential(samples),
            Family::Uniform => fit_uniform(samples),
            Family::LogNormal => fit_log_normal(samples),
            Family::StudentsT => fit_students_t(samples),
            Family::ChiSquared => fit_chi_squared(samples),
        }
    }

    fn failure(self, message: impl Into<String>) -> Error {
        Error::Fitting {
            family: self,
            message: message.into(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejects samples no family can work with.
pub(crate) fn validate(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::Input("sample is empty".to_string()));
    }
    if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
        return Err(Error::Input(format!(
            "sample contains a non-finite value at index {index}"
        )));
    }
    Ok(())
}

/// A distribution fitted to one sample.
#[derive(Debug, Clone)]
pub struct Fitted {
    family: Family,
    params: Vec<f64>,
    distr: Distr,
}

#[derive(Debug, Clone)]
enum Distr {
    Normal(Normal),
    Exponential(Exp),
    Uniform(Uniform),
    LogNormal(LogNormal),
    StudentsT(StudentsT),
    ChiSquared(ChiSquared),
}

impl Fitted {
    /// The family this model belongs to.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// The estimated parameter vector; the layout is documented on the
    /// corresponding [`Family`] variant.
    #[must_use]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Probability density at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match &self.distr {
            Distr::Normal(d) => d.pdf(x),
            Distr::Exponential(d) => d.pdf(x),
            Distr::Uniform(d) => d.pdf(x),
            Distr::LogNormal(d) => d.pdf(x),
            Distr::StudentsT(d) => d.pdf(x),
            Distr::ChiSquared(d) => d.pdf(x),
        }
    }

    /// Natural logarithm of the density at `x`.
    #[must_use]
    pub fn ln_pdf(&self, x: f64) -> f64 {
        match &self.distr {
            Distr::Normal(d) => d.ln_pdf(x),
            Distr::Exponential(d) => d.ln_pdf(x),
            Distr::Uniform(d) => d.ln_pdf(x),
            Distr::LogNormal(d) => d.ln_pdf(x),
            Distr::StudentsT(d) => d.ln_pdf(x),
            Distr::ChiSquared(d) => d.ln_pdf(x),
        }
    }

    /// Cumulative distribution function at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match &self.distr {
            Distr::Normal(d) => d.cdf(x),
            Distr::Exponential(d) => d.cdf(x),
            Distr::Uniform(d) => d.cdf(x),
            Distr::LogNormal(d) => d.cdf(x),
            Distr::StudentsT(d) => d.cdf(x),
            Distr::ChiSquared(d) => d.cdf(x),
        }
    }

    /// Quantile function (inverse CDF) at probability `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside `[0, 1]`; this is the `statrs` contract for
    /// `inverse_cdf`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        match &self.distr {
            Distr::Normal(d) => d.inverse_cdf(p),
            Distr::Exponential(d) => d.inverse_cdf(p),
            Distr::Uniform(d) => d.inverse_cdf(p),
            Distr::LogNormal(d) => d.inverse_cdf(p),
            Distr::StudentsT(d) => d.inverse_cdf(p),
            Distr::ChiSquared(d) => d.inverse_cdf(p),
        }
    }

    /// Draws one value from the fitted distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        use rand::distributions::Distribution as _;
        match &self.distr {
            Distr::Normal(d) => d.sample(rng),
            Distr::Exponential(d) => d.sample(rng),
            Distr::Uniform(d) => d.sample(rng),
            Distr::LogNormal(d) => d.sample(rng),
            Distr::StudentsT(d) => d.sample(rng),
            Distr::ChiSquared(d) => d.sample(rng),
        }
    }
}

fn fit_normal(samples: &[f64]) -> Result<Fitted> {
    let mean = Statistics::mean(samples);
    let std_dev = Statistics::population_std_dev(samples);
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(Family::Normal.failure("sample has no spread"));
    }
    let distr = Normal::new(mean, std_dev).map_err(|e| Family::Normal.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::Normal,
        params: vec![mean, std_dev],
        distr: Distr::Normal(distr),
    })
}

fn fit_exponential(samples: &[f64]) -> Result<Fitted> {
    if samples.iter().any(|&x| x < 0.0) {
        return Err(Family::Exponential.failure("negative values lie outside the support"));
    }
    let mean = Statistics::mean(samples);
    if !mean.is_finite() || mean <= 0.0 {
        return Err(Family::Exponential.failure("sample mean must be positive"));
    }
    let rate = 1.0 / mean;
    let distr = Exp::new(rate).map_err(|e| Family::Exponential.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::Exponential,
        params: vec![rate],
        distr: Distr::Exponential(distr),
    })
}

fn fit_uniform(samples: &[f64]) -> Result<Fitted> {
    let min = Statistics::min(samples);
    let max = Statistics::max(samples);
    if max <= min {
        return Err(Family::Uniform.failure("sample has no spread"));
    }
    let distr = Uniform::new(min, max).map_err(|e| Family::Uniform.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::Uniform,
        params: vec![min, max],
        distr: Distr::Uniform(distr),
    })
}

fn fit_log_normal(samples: &[f64]) -> Result<Fitted> {
    if samples.iter().any(|&x| x <= 0.0) {
        return Err(Family::LogNormal.failure("non-positive values lie outside the support"));
    }
    let logs: Vec<f64> = samples.iter().copied().map(f64::ln).collect();
    let location = Statistics::mean(&logs);
    let scale = Statistics::population_std_dev(&logs);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Family::LogNormal.failure("sample has no spread on the log scale"));
    }
    let distr =
        LogNormal::new(location, scale).map_err(|e| Family::LogNormal.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::LogNormal,
        params: vec![location, scale],
        distr: Distr::LogNormal(distr),
    })
}

fn fit_students_t(samples: &[f64]) -> Result<Fitted> {
    let est = mle::students_t(samples).map_err(|m| Family::StudentsT.failure(m))?;
    let distr = StudentsT::new(est.location, est.scale, est.freedom)
        .map_err(|e| Family::StudentsT.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::StudentsT,
        params: vec![est.location, est.scale, est.freedom],
        distr: Distr::StudentsT(distr),
    })
}

fn fit_chi_squared(samples: &[f64]) -> Result<Fitted> {
    if samples.iter().any(|&x| x <= 0.0) {
        return Err(Family::ChiSquared.failure("non-positive values lie outside the support"));
    }
    let freedom =
        mle::chi_squared_freedom(samples).map_err(|m| Family::ChiSquared.failure(m))?;
    let distr =
        ChiSquared::new(freedom).map_err(|e| Family::ChiSquared.failure(e.to_string()))?;
    Ok(Fitted {
        family: Family::ChiSquared,
        params: vec![freedom],
        distr: Distr::ChiSquared(distr),
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::Distribution;

    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} is not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn names_round_trip() {
        for family in Family::ALL {
            assert_eq!(Family::from_name(family.name()), Some(family));
        }
        assert_eq!(Family::from_name("weibull"), None);
    }

    #[test]
    fn normal_fit_recovers_mean_and_mle_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let fitted = Family::Normal.fit(&data).unwrap();
        assert_close(fitted.params()[0], 5.0, 1e-12);
        assert_close(fitted.params()[1], 2.0, 1e-12);
    }

    #[test]
    fn exponential_fit_is_the_reciprocal_mean() {
        let data = [1.0, 3.0];
        let fitted = Family::Exponential.fit(&data).unwrap();
        assert_close(fitted.params()[0], 0.5, 1e-12);
    }

    #[test]
    fn uniform_fit_spans_the_sample() {
        let data = [0.2, 0.9, 0.4];
        let fitted = Family::Uniform.fit(&data).unwrap();
        assert_close(fitted.params()[0], 0.2, 1e-12);
        assert_close(fitted.params()[1], 0.9, 1e-12);
    }

    #[test]
    fn log_normal_fit_estimates_on_the_log_scale() {
        let e = std::f64::consts::E;
        let data = [1.0, e, e * e];
        let fitted = Family::LogNormal.fit(&data).unwrap();
        assert_close(fitted.params()[0], 1.0, 1e-12);
        assert_close(fitted.params()[1], (2.0_f64 / 3.0).sqrt(), 1e-12);
    }

    #[test]
    fn exponential_rejects_negative_values() {
        let err = Family::Exponential.fit(&[1.0, -0.5, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Fitting {
                family: Family::Exponential,
                ..
            }
        ));
    }

    #[test]
    fn exponential_rejects_an_all_zero_sample() {
        let err = Family::Exponential.fit(&[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Fitting {
                family: Family::Exponential,
                ..
            }
        ));
    }

    #[test]
    fn log_normal_rejects_non_positive_values() {
        let err = Family::LogNormal.fit(&[0.5, 0.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Fitting {
                family: Family::LogNormal,
                ..
            }
        ));
    }

    #[test]
    fn chi_squared_rejects_non_positive_values() {
        let err = Family::ChiSquared.fit(&[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Fitting {
                family: Family::ChiSquared,
                ..
            }
        ));
    }

    #[test]
    fn empty_sample_is_an_input_error() {
        let err = Family::Normal.fit(&[]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn non_finite_sample_is_an_input_error() {
        let err = Family::Normal.fit(&[1.0, f64::NAN, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        let err = Family::Normal.fit(&[1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn constant_sample_has_no_spread() {
        let data = [3.0; 5];
        for family in [Family::Normal, Family::Uniform, Family::LogNormal, Family::StudentsT] {
            let err = family.fit(&data).unwrap_err();
            assert!(matches!(err, Error::Fitting { .. }), "{family} accepted a constant sample");
        }
    }

    #[test]
    fn cdf_and_quantile_are_inverse() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let fitted = Family::Normal.fit(&data).unwrap();
        assert_close(fitted.cdf(5.0), 0.5, 1e-12);
        assert_close(fitted.quantile(0.5), 5.0, 1e-9);
    }

    #[test]
    fn pdf_is_the_exponential_of_ln_pdf() {
        let data = [0.4, 1.3, 2.2, 0.8];
        let fitted = Family::Exponential.fit(&data).unwrap();
        assert_close(fitted.pdf(1.0), fitted.ln_pdf(1.0).exp(), 1e-12);
    }

    #[test]
    fn students_t_fit_recovers_seeded_parameters() {
        let mut rng = StdRng::seed_from_u64(7);
        let source = rand_distr::StudentT::new(5.0).unwrap();
        let data: Vec<f64> = (0..800).map(|_| source.sample(&mut rng)).collect();
        let fitted = Family::StudentsT.fit(&data).unwrap();
        let params = fitted.params();
        assert!(params[0].abs() < 0.2, "location {} drifted", params[0]);
        assert!(params[1] > 0.7 && params[1] < 1.3, "scale {} drifted", params[1]);
        assert!(params[2] > 2.0 && params[2] < 30.0, "freedom {} drifted", params[2]);
    }

    #[test]
    fn chi_squared_fit_recovers_seeded_freedom() {
        let mut rng = StdRng::seed_from_u64(19);
        let source = rand_distr::ChiSquared::new(4.0).unwrap();
        let data: Vec<f64> = (0..800).map(|_| source.sample(&mut rng)).collect();
        let fitted = Family::ChiSquared.fit(&data).unwrap();
        let freedom = fitted.params()[0];
        assert!(freedom > 3.0 && freedom < 5.0, "freedom {freedom} drifted");
    }

    #[test]
    fn drawn_samples_respect_the_support() {
        let mut rng = StdRng::seed_from_u64(23);
        let fitted = Family::Exponential.fit(&[0.2, 1.1, 0.7, 2.9]).unwrap();
        for _ in 0..100 {
            assert!(fitted.sample(&mut rng) >= 0.0);
        }
    }
}

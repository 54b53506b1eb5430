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

//! Iterative maximum-likelihood estimators.
//!
//! The closed-form fits live next to their families; this module covers the
//! two that need numerics. Student's t is estimated by profiling the
//! likelihood over a log-spaced degrees-of-freedom grid, with an EM loop
//! solving for location and scale at each grid point. The chi-squared degrees
//! of freedom solve `digamma(k / 2) = mean(ln x) - ln 2` by bisection, which
//! is well posed because `digamma` is strictly increasing on the positive
//! axis. Both estimators are deterministic.

use std::cmp::Ordering;

use statrs::distribution::{Continuous, StudentsT};
use statrs::function::gamma::digamma;
use statrs::statistics::Statistics;

const FREEDOM_MIN: f64 = 0.5;
const FREEDOM_MAX: f64 = 128.0;
const FREEDOM_GRID: usize = 17;
const FREEDOM_REFINE: usize = 9;
const EM_MAX_ITERATIONS: usize = 500;
const EM_TOLERANCE: f64 = 1e-10;
const BISECTION_ITERATIONS: usize = 200;

/// Location-scale-freedom estimate for Student's t.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TEstimate {
    pub location: f64,
    pub scale: f64,
    pub freedom: f64,
}

struct Candidate {
    nll: f64,
    estimate: TEstimate,
}

/// Profile-likelihood fit of a location-scale Student's t.
///
/// The degrees of freedom are searched on a coarse grid over
/// `[FREEDOM_MIN, FREEDOM_MAX]` and then refined once between the winning
/// point's neighbours.
pub(crate) fn students_t(samples: &[f64]) -> Result<TEstimate, String> {
    let mean = Statistics::mean(samples);
    let variance = Statistics::population_variance(samples);
    if !variance.is_finite() || variance <= 0.0 {
        return Err("sample has no spread".to_string());
    }

    let grid = log_space(FREEDOM_MIN, FREEDOM_MAX, FREEDOM_GRID);
    let mut best: Option<(usize, Candidate)> = None;
    for (index, &freedom) in grid.iter().enumerate() {
        if let Some(candidate) = profile_at(samples, freedom, mean, variance) {
            let better = match &best {
                None => true,
                Some((_, b)) => candidate.nll.total_cmp(&b.nll) == Ordering::Less,
            };
            if better {
                best = Some((index, candidate));
            }
        }
    }
    let Some((index, mut best)) = best else {
        return Err("location-scale estimation did not converge".to_string());
    };

    let low = grid[index.saturating_sub(1)];
    let high = grid[(index + 1).min(grid.len() - 1)];
    for &freedom in &log_space(low, high, FREEDOM_REFINE) {
        if let Some(candidate) = profile_at(samples, freedom, mean, variance) {
            if candidate.nll.total_cmp(&best.nll) == Ordering::Less {
                best = candidate;
            }
        }
    }
    Ok(best.estimate)
}

/// EM for location and scale at a fixed `freedom`, then the profile NLL.
fn profile_at(samples: &[f64], freedom: f64, mean: f64, variance: f64) -> Option<Candidate> {
    let (location, scale) = em_location_scale(samples, freedom, mean, variance)?;
    let distr = StudentsT::new(location, scale, freedom).ok()?;
    let nll = -samples.iter().map(|&x| distr.ln_pdf(x)).sum::<f64>();
    if nll.is_finite() {
        Some(Candidate {
            nll,
            estimate: TEstimate {
                location,
                scale,
                freedom,
            },
        })
    } else {
        None
    }
}

/// The classic EM iteration for a t location-scale model: each observation
/// gets the weight `(freedom + 1) / (freedom + z^2)` under the current
/// iterate, and the weighted mean and weighted spread become the next one.
#[allow(clippy::cast_precision_loss)]
fn em_location_scale(
    samples: &[f64],
    freedom: f64,
    mean: f64,
    variance: f64,
) -> Option<(f64, f64)> {
    let n = samples.len() as f64;
    let mut location = mean;
    let mut scale_sq = variance;
    for _ in 0..EM_MAX_ITERATIONS {
        let mut weight_sum = 0.0;
        let mut weighted_sum = 0.0;
        for &x in samples {
            let z_sq = (x - location).powi(2) / scale_sq;
            let weight = (freedom + 1.0) / (freedom + z_sq);
            weight_sum += weight;
            weighted_sum += weight * x;
        }
        let new_location = weighted_sum / weight_sum;

        let mut spread = 0.0;
        for &x in samples {
            let z_sq = (x - location).powi(2) / scale_sq;
            let weight = (freedom + 1.0) / (freedom + z_sq);
            spread += weight * (x - new_location).powi(2);
        }
        let new_scale_sq = spread / n;
        if !new_scale_sq.is_finite() || new_scale_sq <= 0.0 {
            return None;
        }

        let moved = (new_location - location)
            .abs()
            .max((new_scale_sq.sqrt() - scale_sq.sqrt()).abs());
        location = new_location;
        scale_sq = new_scale_sq;
        if moved <= EM_TOLERANCE * (1.0 + location.abs() + scale_sq.sqrt()) {
            return Some((location, scale_sq.sqrt()));
        }
    }
    None
}

/// Solves `digamma(k / 2) = mean(ln x) - ln 2` for the degrees of freedom.
///
/// Requires strictly positive samples; the caller checks the support.
pub(crate) fn chi_squared_freedom(samples: &[f64]) -> Result<f64, String> {
    #[allow(clippy::cast_precision_loss)]
    let n = samples.len() as f64;
    let mean_log = samples.iter().copied().map(f64::ln).sum::<f64>() / n;
    let target = mean_log - std::f64::consts::LN_2;
    if !target.is_finite() {
        return Err("log-moment of the sample is not finite".to_string());
    }

    let mut low = 2.0;
    while digamma(low / 2.0) > target {
        low /= 2.0;
        if low < 1e-290 {
            return Err("degrees of freedom underflowed".to_string());
        }
    }
    let mut high = 2.0;
    while digamma(high / 2.0) < target {
        high *= 2.0;
        if high > 1e290 {
            return Err("degrees of freedom overflowed".to_string());
        }
    }
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (low + high);
        if digamma(mid / 2.0) < target {
            low = mid;
        } else {
            high = mid;
        }
        if high - low <= f64::EPSILON * high {
            break;
        }
    }
    Ok(0.5 * (low + high))
}

/// `steps` log-spaced points from `min` to `max`, both ends included.
#[allow(clippy::cast_precision_loss)]
fn log_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    debug_assert!(min > 0.0 && max > min && steps >= 2);
    let ln_min = min.ln();
    let ln_step = (max.ln() - ln_min) / (steps - 1) as f64;
    (0..steps)
        .map(|i| (ln_min + ln_step * i as f64).exp())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} is not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn log_space_hits_both_endpoints() {
        let grid = log_space(1.0, 100.0, 5);
        assert_eq!(grid.len(), 5);
        assert_close(grid[0], 1.0, 1e-12);
        assert_close(grid[2], 10.0, 1e-9);
        assert_close(grid[4], 100.0, 1e-9);
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn chi_squared_freedom_inverts_the_digamma_equation() {
        // Two points whose log-mean lands exactly on the k = 7 moment.
        let target = digamma(3.5) + std::f64::consts::LN_2;
        let data = [(target + 0.4).exp(), (target - 0.4).exp()];
        let freedom = chi_squared_freedom(&data).unwrap();
        assert_close(freedom, 7.0, 1e-6);
    }

    #[test]
    fn students_t_location_is_centred_on_symmetric_data() {
        let data = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let estimate = students_t(&data).unwrap();
        assert!(estimate.location.abs() < 1e-8, "location {}", estimate.location);
        assert!(estimate.scale > 0.0);
        assert!(estimate.freedom >= FREEDOM_MIN && estimate.freedom <= FREEDOM_MAX);
    }

    #[test]
    fn students_t_requires_spread() {
        assert!(students_t(&[1.0; 4]).is_err());
    }
}

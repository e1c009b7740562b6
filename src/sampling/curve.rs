//! Curve sampling
//!
//! Evaluates a scalar function of time over an interval to produce a
//! plottable, ordered `(time, value)` point set:
//!
//! - **Uniform sampling** at fixed steps across `[xmin, xmax]` for
//!   deterministic line curves
//! - **Random sampling** at independently drawn uniform abscissas for
//!   uncertainty clouds
//!
//! Both are pure functions of their inputs. Any non-finite sample value is
//! a loud error naming the offending abscissa — a non-finite concentration
//! means a solver path is broken and must not be silently zeroed or
//! plotted.

use nalgebra::DVector;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::ModelStore;
use crate::sampling::parallel_threshold;
use crate::schedule::{superposition, Schedule};

// =================================================================================================
// Curve Series
// =================================================================================================

/// Ordered `(time, value)` point set
///
/// Times and values are stored as `nalgebra` vectors. Series support
/// superposition (`+`, requiring matching abscissas) and linear unit
/// scaling (`* f64`).
///
/// # Example
///
/// ```rust
/// use pk_rs::sampling::CurveSeries;
///
/// let series = CurveSeries::new(vec![0.0, 1.0], vec![10.0, 20.0]);
/// let scaled = series * 2.0;
/// assert_eq!(scaled.values()[1], 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    times: DVector<f64>,
    values: DVector<f64>,
}

impl CurveSeries {
    /// Create a series from parallel time/value vectors
    ///
    /// # Panics
    ///
    /// Panics when the vectors differ in length.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(
            times.len(),
            values.len(),
            "Time and value vectors must have the same length"
        );
        Self {
            times: DVector::from_vec(times),
            values: DVector::from_vec(values),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series holds no points
    pub fn is_empty(&self) -> bool {
        self.times.len() == 0
    }

    /// Time abscissas
    pub fn times(&self) -> &DVector<f64> {
        &self.times
    }

    /// Sampled values
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Iterate over `(time, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

impl std::ops::Add for CurveSeries {
    type Output = CurveSeries;

    /// Superpose two series sampled at the same abscissas
    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.times, rhs.times,
            "Superposed series must share their time abscissas"
        );
        CurveSeries {
            times: self.times,
            values: self.values + rhs.values,
        }
    }
}

impl std::ops::Mul<f64> for CurveSeries {
    type Output = CurveSeries;

    /// Scale every value (linear unit conversion)
    fn mul(self, scalar: f64) -> Self::Output {
        CurveSeries {
            times: self.times,
            values: self.values * scalar,
        }
    }
}

impl std::ops::Mul<CurveSeries> for f64 {
    type Output = CurveSeries;

    fn mul(self, rhs: CurveSeries) -> Self::Output {
        rhs * self
    }
}

// =================================================================================================
// Sampling Functions
// =================================================================================================

/// Evaluate `f` at every abscissa, rejecting non-finite results
///
/// Switches to parallel iteration above the runtime threshold when the
/// crate is compiled with the `parallel` feature.
fn evaluate_at<F>(times: &[f64], f: F) -> Result<Vec<f64>, String>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
{
    let evaluate_one = |&t: &f64| -> Result<f64, String> {
        let value = f(t)?;
        if !value.is_finite() {
            return Err(format!(
                "Non-finite concentration {} at t = {}. This indicates a broken \
                 solver path and must not be plotted.",
                value, t
            ));
        }
        Ok(value)
    };

    if times.len() >= parallel_threshold() {
        #[cfg(feature = "parallel")]
        return times.par_iter().map(evaluate_one).collect();
    }

    times.iter().map(evaluate_one).collect()
}

/// Sample `f` at fixed uniform steps across `[xmin, xmax]`
///
/// Produces `points` abscissas including both interval ends.
///
/// # Errors
///
/// Returns `Err` when `points < 2`, when the interval is empty or
/// non-finite, or when any sample is non-finite.
pub fn sample_uniform<F>(f: F, xmin: f64, xmax: f64, points: usize) -> Result<CurveSeries, String>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
{
    validate_interval(xmin, xmax)?;
    if points < 2 {
        return Err(format!(
            "Uniform sampling needs at least 2 points, got {}",
            points
        ));
    }

    let step = (xmax - xmin) / (points - 1) as f64;
    let times: Vec<f64> = (0..points).map(|i| xmin + i as f64 * step).collect();
    let values = evaluate_at(&times, f)?;

    Ok(CurveSeries::new(times, values))
}

/// Sample `f` at independently drawn uniform-random abscissas
///
/// The returned series is sorted by time. The random source is the
/// caller's; a seeded generator reproduces the same abscissas.
///
/// # Errors
///
/// Returns `Err` when `points == 0`, when the interval is empty or
/// non-finite, or when any sample is non-finite.
pub fn sample_random<F, R>(
    f: F,
    xmin: f64,
    xmax: f64,
    points: usize,
    rng: &mut R,
) -> Result<CurveSeries, String>
where
    F: Fn(f64) -> Result<f64, String> + Sync,
    R: Rng + ?Sized,
{
    validate_interval(xmin, xmax)?;
    if points == 0 {
        return Err("Random sampling needs at least 1 point".to_string());
    }

    let mut times: Vec<f64> = (0..points).map(|_| rng.random_range(xmin..xmax)).collect();
    times.sort_by(f64::total_cmp);
    let values = evaluate_at(&times, f)?;

    Ok(CurveSeries::new(times, values))
}

fn validate_interval(xmin: f64, xmax: f64) -> Result<(), String> {
    if !xmin.is_finite() || !xmax.is_finite() || xmax <= xmin {
        return Err(format!(
            "Sampling interval must be finite and non-empty, got [{}, {}]",
            xmin, xmax
        ));
    }
    Ok(())
}

// =================================================================================================
// Schedule Helpers
// =================================================================================================

/// Line curve of a schedule's summed concentration
///
/// Uses the curve-visible events with canonical parameters, sampled at
/// uniform steps.
pub fn schedule_curve(
    schedule: &Schedule,
    store: &ModelStore,
    xmin: f64,
    xmax: f64,
    points: usize,
    unit_factor: f64,
) -> Result<CurveSeries, String> {
    // Convert to absolute first: under interval encoding the hidden events
    // still occupy their time slots, so filtering must not reshift the rest.
    let visible = schedule.absolute().curve_visible();
    sample_uniform(
        |t| superposition::concentration_at(&visible, t, store, unit_factor),
        xmin,
        xmax,
        points,
    )
}

/// Uncertainty cloud of a schedule's summed concentration
///
/// Uses the uncertainty-visible events. Every point draws a fresh abscissa
/// and a fresh posterior parameter tuple per event, so the scatter of many
/// points approximates the predictive interval. Evaluation is sequential —
/// the draws consume the caller's single RNG stream.
///
/// The returned series is sorted by time.
pub fn uncertainty_cloud<R>(
    schedule: &Schedule,
    store: &ModelStore,
    xmin: f64,
    xmax: f64,
    points: usize,
    unit_factor: f64,
    rng: &mut R,
) -> Result<CurveSeries, String>
where
    R: Rng + ?Sized,
{
    validate_interval(xmin, xmax)?;
    if points == 0 {
        return Err("An uncertainty cloud needs at least 1 point".to_string());
    }

    // Absolute first, for the same reason as in `schedule_curve`
    let visible = schedule.absolute().uncertainty_visible();

    let mut samples: Vec<(f64, f64)> = Vec::with_capacity(points);
    for _ in 0..points {
        let t = rng.random_range(xmin..xmax);
        let value = superposition::concentration_at_sampled(&visible, t, store, unit_factor, rng)?;
        if !value.is_finite() {
            return Err(format!(
                "Non-finite concentration {} at t = {}. This indicates a broken \
                 solver path and must not be plotted.",
                value, t
            ));
        }
        samples.push((t, value));
    }

    samples.sort_by(|a, b| a.0.total_cmp(&b.0));
    let (times, values) = samples.into_iter().unzip();
    Ok(CurveSeries::new(times, values))
}

// =================================================================================================
// Tests
// =================================================================================================

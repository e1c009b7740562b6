//! Single-event three-compartment closed forms
//!
//! Observed-compartment concentration of the k1 → k2 → k3 chain after one
//! administration at time zero. The solution is a linear combination of
//! `e^{-k1·t}`, `e^{-k2·t}`, `e^{-k3·t}` with partial-fraction coefficients
//! whose denominators are the pairwise rate differences; coincident rates
//! take analytic limit branches (polynomial-times-exponential forms), never
//! the ill-conditioned general formula.
//!
//! Writing the branches against the [`ExpTerms`] kernel means the same
//! formula set serves the single-dose case and the periodic steady-state
//! case (see [`crate::solver::steady_state`]).
//!
//! # Branches
//!
//! ```text
//! all three coincident    dose·d·k1²·t²·e^{-k1·t}/2
//! one coincident pair     pref·(e^{-q·t} - e^{-p·t}(1+(p-q)·t))/(p-q)²
//! all distinct            dose·d·k1·k2·Σᵢ e^{-kᵢ·t}/Πⱼ≠ᵢ(kⱼ-kᵢ)
//! ```
//!
//! where `p` is the repeated rate, `q` the remaining one, and `pref` is
//! `dose·d·k1²` when k1 = k2 and `dose·d·k1·k2` otherwise.

use crate::kinetics::KineticParameters;
use crate::solver::kernel::{ExpTerms, SingleDose};
use crate::solver::math::rates_close;

// =================================================================================================
// Residual Masses
// =================================================================================================

/// Nonzero initial compartment content for a chain evaluation
///
/// Used by the patch solver to resume decay after removal: the absorption
/// compartment and the observed compartment keep the mass they held at the
/// removal instant while the depot input drops to zero.
///
/// Both fields are in observed-concentration units (the scale factor d is
/// already applied when the masses are captured).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResidualMasses {
    /// Content of the absorption (second) compartment at resume time
    pub absorption: f64,

    /// Concentration in the observed (third) compartment at resume time
    pub circulating: f64,
}

impl ResidualMasses {
    /// No residual content (the plain single-administration case)
    pub const NONE: Self = Self {
        absorption: 0.0,
        circulating: 0.0,
    };
}

// =================================================================================================
// Chain Response (kernel-generic)
// =================================================================================================

/// Observed-compartment response for an arbitrary exponential kernel
///
/// Shared by the single-dose entry points below and the periodic
/// steady-state solver. The dose term, the residual-absorption term and the
/// residual-circulating term each carry their own degeneracy branches.
pub(crate) fn chain_response<K: ExpTerms>(
    dose: f64,
    params: &KineticParameters,
    kernel: &K,
    residual: &ResidualMasses,
) -> f64 {
    let (k1, k2, k3) = (params.k1, params.k2, params.k3);
    let mut total = 0.0;

    if dose != 0.0 {
        total += dose * params.scale * dose_term(k1, k2, k3, kernel);
    }

    if residual.absorption != 0.0 {
        let transfer = if rates_close(k2, k3) {
            k2 * kernel.e1(k2)
        } else {
            k2 * (kernel.e0(k2) - kernel.e0(k3)) / (k3 - k2)
        };
        total += residual.absorption * transfer;
    }

    if residual.circulating != 0.0 {
        total += residual.circulating * kernel.e0(k3);
    }

    total
}

/// Dose contribution per unit `dose · d`
fn dose_term<K: ExpTerms>(k1: f64, k2: f64, k3: f64, kernel: &K) -> f64 {
    let close_12 = rates_close(k1, k2);
    let close_13 = rates_close(k1, k3);
    let close_23 = rates_close(k2, k3);

    if close_12 && close_23 {
        // All three coincide: t²-weighted single exponential
        k1 * k1 * kernel.e2(k1) / 2.0
    } else if close_12 {
        pair_limit(k1, k3, k1 * k1, kernel)
    } else if close_13 {
        pair_limit(k1, k2, k1 * k2, kernel)
    } else if close_23 {
        pair_limit(k2, k1, k1 * k2, kernel)
    } else {
        k1 * k2
            * (kernel.e0(k1) / ((k2 - k1) * (k3 - k1))
                + kernel.e0(k2) / ((k1 - k2) * (k3 - k2))
                + kernel.e0(k3) / ((k1 - k3) * (k2 - k3)))
    }
}

/// Limit of the partial-fraction sum for a repeated rate `p` and a distinct
/// rate `q`:
///
/// ```text
/// (e^{-q·t} - e^{-p·t}·(1 + (p-q)·t)) / (p-q)²
/// ```
fn pair_limit<K: ExpTerms>(p: f64, q: f64, prefactor: f64, kernel: &K) -> f64 {
    let diff = p - q;
    prefactor * (kernel.e0(q) - kernel.e0(p) - diff * kernel.e1(p)) / (diff * diff)
}

// =================================================================================================
// Single-Dose Entry Points
// =================================================================================================

/// Observed concentration `t` after a single administration
///
/// # Arguments
///
/// * `t` - Elapsed time since the administration \[days\]
/// * `dose` - Administered amount \[mg\]
/// * `params` - Kinetic parameters of the model
///
/// # Causality
///
/// `t <= 0` returns exactly 0: nothing is in circulation before the
/// administration, and nothing has been absorbed at the administration
/// instant itself. (The partial-fraction sum is only analytically zero at
/// `t = 0`; the explicit gate keeps it exact.)
pub fn concentration(t: f64, dose: f64, params: &KineticParameters) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    chain_response(dose, params, &SingleDose::new(t), &ResidualMasses::NONE)
}

/// Observed concentration with nonzero initial compartment content
///
/// The residual terms decay independently of the dose term: the absorption
/// content transfers through k2 → k3 (with its own k2 = k3 limit branch)
/// and the circulating content decays at k3.
pub fn concentration_with_residual(
    t: f64,
    dose: f64,
    params: &KineticParameters,
    residual: &ResidualMasses,
) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    chain_response(dose, params, &SingleDose::new(t), residual)
}

/// Absorption-compartment (second compartment) content `t` after a single
/// administration, in observed-concentration units
///
/// Used only to hand off mass at a patch's removal time: the value at
/// `t = W` becomes [`ResidualMasses::absorption`] for the post-removal
/// evaluation.
pub fn absorption_content(t: f64, dose: f64, params: &KineticParameters) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    let (k1, k2) = (params.k1, params.k2);
    let amount = dose * params.scale * k1;
    if rates_close(k1, k2) {
        amount * t * (-k1 * t).exp()
    } else {
        amount * ((-k1 * t).exp() - (-k2 * t).exp()) / (k2 - k1)
    }
}

// =================================================================================================
// Area Under the Curve
// =================================================================================================

/// Area under the concentration curve from 0 to `t`
///
/// Implemented for fully distinct rates and for the k1 = k2 pair. The
/// remaining coincident cases (k1 = k3, k2 = k3, all equal) are explicitly
/// unsupported: no closed form is carried for them and the function reports
/// that rather than returning a wrong number.
///
/// For distinct rates, `auc(t) → dose·d/k3` as `t → ∞` (mass balance).
///
/// # Errors
///
/// Returns `Err` for the unsupported coincident-rate cases.
pub fn auc(t: f64, dose: f64, params: &KineticParameters) -> Result<f64, String> {
    if t <= 0.0 {
        return Ok(0.0);
    }

    let (k1, k2, k3) = (params.k1, params.k2, params.k3);
    let close_12 = rates_close(k1, k2);
    let close_13 = rates_close(k1, k3);
    let close_23 = rates_close(k2, k3);

    if close_13 || close_23 {
        return Err(format!(
            "AUC is not implemented for coincident rates other than k1 = k2 \
             (got k1 = {}, k2 = {}, k3 = {})",
            k1, k2, k3
        ));
    }

    if close_12 {
        // k1 = k2 = p, k3 = q
        let (p, q) = (k1, k3);
        let diff = p - q;
        let value = dose * params.scale * p * p / (diff * diff)
            * ((-(-q * t).exp_m1()) / q
                - (-(-p * t).exp_m1()) / p
                - diff * (1.0 - (-p * t).exp() * (1.0 + p * t)) / (p * p));
        return Ok(value);
    }

    // Fully distinct: integrate each exponential term
    let integral = |ki: f64, denom: f64| (-(-ki * t).exp_m1()) / (ki * denom);
    let value = dose * params.scale * k1 * k2
        * (integral(k1, (k2 - k1) * (k3 - k1))
            + integral(k2, (k1 - k2) * (k3 - k2))
            + integral(k3, (k1 - k3) * (k2 - k3)));
    Ok(value)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Canonical "EV im" parameters
    fn ev_im() -> KineticParameters {
        KineticParameters::new(95.0, 1.55, 17.2, 0.21)
    }

    #[test]
    fn test_causality() {
        let params = ev_im();
        assert_eq!(concentration(-0.001, 4.0, &params), 0.0);
        assert_eq!(concentration(-100.0, 4.0, &params), 0.0);
        assert_eq!(absorption_content(-1.0, 4.0, &params), 0.0);
    }

    #[test]
    fn test_zero_at_zero_positive_after() {
        let params = ev_im();
        assert_eq!(concentration(0.0, 4.0, &params), 0.0);

        for t in [0.1, 0.5, 1.0, 3.0, 7.0, 30.0] {
            let value = concentration(t, 4.0, &params);
            assert!(value > 0.0, "expected positive response at t = {}", t);
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_decays_to_zero() {
        let params = ev_im();
        assert!(concentration(1000.0, 4.0, &params) < 1e-9);
    }

    #[test]
    fn test_scales_linearly_with_dose() {
        let params = ev_im();
        let single = concentration(2.0, 4.0, &params);
        let double = concentration(2.0, 8.0, &params);
        assert!((double - 2.0 * single).abs() < 1e-9 * double);
    }

    #[test]
    fn test_all_equal_branch_matches_general_limit() {
        // General formula at k1 = k + eps, k2 = k + 2·eps must converge to
        // the triple-coincidence branch as eps shrinks.
        let k = 0.8;
        let exact = concentration(3.0, 4.0, &KineticParameters::new(95.0, k, k, k));

        let mut previous_error = f64::INFINITY;
        for eps in [1e-3, 1e-4, 1e-5] {
            let perturbed = KineticParameters::new(95.0, k + eps, k + 2.0 * eps, k);
            let general = concentration(3.0, 4.0, &perturbed);
            let error = (general - exact).abs();
            assert!(error < previous_error, "not converging at eps = {}", eps);
            previous_error = error;
        }
        assert!(previous_error < 1e-3 * exact);
    }

    #[test]
    fn test_pair_branch_matches_general_limit() {
        // k1 = k2 + eps through the general branch vs the pair limit branch
        let base = KineticParameters::new(95.0, 1.55, 1.55, 0.21);
        let exact = concentration(2.0, 4.0, &base);

        for (eps, tolerance) in [(1e-4, 5e-3), (1e-6, 1e-4)] {
            let perturbed = KineticParameters::new(95.0, 1.55 + eps, 1.55, 0.21);
            let general = concentration(2.0, 4.0, &perturbed);
            let relative = (general - exact).abs() / exact;
            assert!(
                relative < tolerance,
                "eps = {}: relative error {} (general {}, limit {})",
                eps,
                relative,
                general,
                exact
            );
        }
    }

    #[test]
    fn test_k2_k3_pair_branch_finite() {
        let params = KineticParameters::new(95.0, 1.55, 0.21, 0.21);
        let value = concentration(2.0, 4.0, &params);
        assert!(value.is_finite());
        assert!(value > 0.0);
    }

    #[test]
    fn test_residual_masses_decay() {
        let params = ev_im();
        let residual = ResidualMasses {
            absorption: 10.0,
            circulating: 50.0,
        };

        // At t = 0 only the circulating term contributes
        let at_zero = concentration_with_residual(0.0, 0.0, &params, &residual);
        assert!((at_zero - 50.0).abs() < 1e-12);

        // Long after, everything is gone
        let late = concentration_with_residual(500.0, 0.0, &params, &residual);
        assert!(late < 1e-9);
    }

    #[test]
    fn test_absorption_content_peaks_then_decays() {
        let params = ev_im();
        let early = absorption_content(0.05, 4.0, &params);
        let later = absorption_content(5.0, 4.0, &params);
        assert!(early > 0.0);
        assert!(later < early);
        assert_eq!(absorption_content(0.0, 4.0, &params), 0.0);
    }

    #[test]
    fn test_auc_mass_balance() {
        let params = ev_im();
        let dose = 4.0;
        let auc_inf = auc(5000.0, dose, &params).unwrap();
        let expected = dose * params.scale / params.k3;
        assert!(
            (auc_inf - expected).abs() < 1e-6 * expected,
            "{} vs {}",
            auc_inf,
            expected
        );
    }

    #[test]
    fn test_auc_monotone_in_time() {
        let params = ev_im();
        let a = auc(1.0, 4.0, &params).unwrap();
        let b = auc(2.0, 4.0, &params).unwrap();
        assert!(b > a);
        assert_eq!(auc(0.0, 4.0, &params).unwrap(), 0.0);
    }

    #[test]
    fn test_auc_repeated_first_pair() {
        // k1 = k2 case is implemented; check against a numeric integral
        let params = KineticParameters::new(95.0, 1.55, 1.55, 0.21);
        let dose = 4.0;
        let t_end = 10.0;

        let steps = 200_000;
        let dt = t_end / steps as f64;
        let numeric: f64 = (0..steps)
            .map(|i| concentration((i as f64 + 0.5) * dt, dose, &params) * dt)
            .sum();

        let closed = auc(t_end, dose, &params).unwrap();
        assert!(
            (closed - numeric).abs() < 1e-4 * numeric,
            "{} vs {}",
            closed,
            numeric
        );
    }

    #[test]
    fn test_auc_unsupported_cases_report() {
        let k1_k3 = KineticParameters::new(95.0, 0.21, 17.2, 0.21);
        let err = auc(1.0, 4.0, &k1_k3).unwrap_err();
        assert!(err.contains("not implemented"));

        let k2_k3 = KineticParameters::new(95.0, 1.55, 0.21, 0.21);
        assert!(auc(1.0, 4.0, &k2_k3).is_err());

        let all = KineticParameters::new(95.0, 0.21, 0.21, 0.21);
        assert!(auc(1.0, 4.0, &all).is_err());
    }
}

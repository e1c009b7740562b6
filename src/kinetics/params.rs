//! Kinetic parameter tuples
//!
//! A delivery model is characterized by a dose-to-concentration scale factor
//! and three first-order rate constants describing the k1 → k2 → k3
//! compartment chain (depot → absorption → circulation). Patch models carry
//! an additional wear duration.
//!
//! Parameter tuples are immutable after construction: the parameter store
//! hands out shared references and nothing in the engine mutates them.

// =================================================================================================
// Kinetic Parameters
// =================================================================================================

/// Kinetic parameters of one delivery model
///
/// # Fields
///
/// - `scale` : dose-to-concentration scale factor d \[pg/mL per mg\]
/// - `k1` : depot release rate \[1/day\]
/// - `k2` : absorption rate \[1/day\]
/// - `k3` : elimination rate of the observed compartment \[1/day\]
/// - `wear` : wear duration W \[days\], patch models only
///
/// # Invariants
///
/// All rate constants are strictly positive; `wear`, when present, is
/// strictly positive. `validate()` checks both.
///
/// # Example
///
/// ```rust
/// use pk_rs::kinetics::KineticParameters;
///
/// let params = KineticParameters::new(95.0, 1.55, 17.2, 0.21);
/// assert!(params.validate().is_ok());
/// assert!(!params.is_patch());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticParameters {
    /// Dose-to-concentration scale factor d \[pg/mL per mg\]
    pub scale: f64,

    /// Depot release rate k1 \[1/day\]
    pub k1: f64,

    /// Absorption rate k2 \[1/day\]
    pub k2: f64,

    /// Elimination rate k3 \[1/day\]
    pub k3: f64,

    /// Wear duration W \[days\] (patch models only)
    pub wear: Option<f64>,
}

impl KineticParameters {
    /// Create bolus (injection) parameters
    pub const fn new(scale: f64, k1: f64, k2: f64, k3: f64) -> Self {
        Self {
            scale,
            k1,
            k2,
            k3,
            wear: None,
        }
    }

    /// Create patch parameters with a wear duration \[days\]
    pub const fn with_wear(scale: f64, k1: f64, k2: f64, k3: f64, wear: f64) -> Self {
        Self {
            scale,
            k1,
            k2,
            k3,
            wear: Some(wear),
        }
    }

    /// Whether these parameters describe a patch model
    pub fn is_patch(&self) -> bool {
        self.wear.is_some()
    }

    /// Validate that the parameters are physically meaningful
    ///
    /// Rate constants and the scale factor must be strictly positive and
    /// finite; the wear duration, when present, must be strictly positive.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("scale", self.scale),
            ("k1", self.k1),
            ("k2", self.k2),
            ("k3", self.k3),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "Kinetic parameter {} must be positive and finite, got {}",
                    name, value
                ));
            }
        }

        if let Some(wear) = self.wear {
            if !wear.is_finite() || wear <= 0.0 {
                return Err(format!(
                    "Patch wear duration must be positive and finite, got {}",
                    wear
                ));
            }
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bolus_parameters() {
        let params = KineticParameters::new(95.0, 1.55, 17.2, 0.21);
        assert!(params.validate().is_ok());
        assert!(!params.is_patch());
        assert_eq!(params.wear, None);
    }

    #[test]
    fn test_patch_parameters() {
        let params = KineticParameters::with_wear(59.48, 0.38, 4.85, 1.23, 3.5);
        assert!(params.validate().is_ok());
        assert!(params.is_patch());
        assert_eq!(params.wear, Some(3.5));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let params = KineticParameters::new(95.0, -1.55, 17.2, 0.21);
        let err = params.validate().unwrap_err();
        assert!(err.contains("k1"));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let params = KineticParameters::new(95.0, 1.55, 0.0, 0.21);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let params = KineticParameters::new(f64::NAN, 1.55, 17.2, 0.21);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_zero_wear_rejected() {
        let params = KineticParameters::with_wear(59.48, 0.38, 4.85, 1.23, 0.0);
        let err = params.validate().unwrap_err();
        assert!(err.contains("wear"));
    }
}

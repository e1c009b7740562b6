//! Delivery model registry
//!
//! # Design Philosophy
//!
//! The set of delivery models is a fixed closed set, so the identifier is a
//! central enum rather than a free-form string:
//! - `ModelId` defines WHICH model (type-safe, exhaustive matching)
//! - `ModelKind` defines the evaluation mechanism (bolus vs patch)
//! - `ModelStore` holds the parameters (canonical + posterior ensemble)
//!
//! String identifiers remain the external currency — schedules arrive from
//! collaborators as strings — and `ModelId::parse` is the single gate where
//! an unknown identifier becomes a caller error.
//!
//! # Read-Only After Load
//!
//! The store is built once from the static tables in [`super::data`] and
//! never mutated; [`standard_store`] exposes a process-wide read-only
//! instance behind a `OnceLock`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::kinetics::{DeliveryRoute, KineticParameters};
use crate::models::bolus::BolusRoute;
use crate::models::data;
use crate::models::patch::PatchRoute;

// =================================================================================================
// Model Identifiers
// =================================================================================================

/// Identifier of a delivery model (fixed closed set)
///
/// # String Forms
///
/// Each variant corresponds to one canonical string identifier:
///
/// | Variant | String |
/// |---|---|
/// | `EstradiolValerateIm` | `"EV im"` |
/// | `EstradiolEnanthateIm` | `"EEn im"` |
/// | `EstradiolCypionateIm` | `"EC im"` |
/// | `EstradiolBenzoateIm` | `"EB im"` |
/// | `EstradiolUndecylateIm` | `"EUn im"` |
/// | `EstradiolUndecylateCaSubq` | `"EUn casubq"` |
/// | `PatchTwiceWeekly` | `"patch tw"` |
/// | `PatchOnceWeekly` | `"patch ow"` |
///
/// Any other string is a caller error and `parse` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Estradiol valerate, intramuscular
    EstradiolValerateIm,

    /// Estradiol enanthate, intramuscular
    EstradiolEnanthateIm,

    /// Estradiol cypionate, intramuscular
    EstradiolCypionateIm,

    /// Estradiol benzoate, intramuscular
    EstradiolBenzoateIm,

    /// Estradiol undecylate, intramuscular
    EstradiolUndecylateIm,

    /// Estradiol undecylate in castor oil, subcutaneous
    EstradiolUndecylateCaSubq,

    /// Transdermal patch, twice-weekly wear
    PatchTwiceWeekly,

    /// Transdermal patch, once-weekly wear
    PatchOnceWeekly,
}

/// Evaluation mechanism of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Injection-like: single-phase chain response
    Bolus,

    /// Transdermal patch: two-phase wear/post-removal response
    Patch,
}

static BOLUS_ROUTE: BolusRoute = BolusRoute;
static PATCH_ROUTE: PatchRoute = PatchRoute;

impl ModelId {
    /// Every model identifier, in registry order
    pub const ALL: [ModelId; 8] = [
        ModelId::EstradiolValerateIm,
        ModelId::EstradiolEnanthateIm,
        ModelId::EstradiolCypionateIm,
        ModelId::EstradiolBenzoateIm,
        ModelId::EstradiolUndecylateIm,
        ModelId::EstradiolUndecylateCaSubq,
        ModelId::PatchTwiceWeekly,
        ModelId::PatchOnceWeekly,
    ];

    /// Canonical string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::EstradiolValerateIm => "EV im",
            ModelId::EstradiolEnanthateIm => "EEn im",
            ModelId::EstradiolCypionateIm => "EC im",
            ModelId::EstradiolBenzoateIm => "EB im",
            ModelId::EstradiolUndecylateIm => "EUn im",
            ModelId::EstradiolUndecylateCaSubq => "EUn casubq",
            ModelId::PatchTwiceWeekly => "patch tw",
            ModelId::PatchOnceWeekly => "patch ow",
        }
    }

    /// Parse a string identifier
    ///
    /// # Errors
    ///
    /// Any string outside the closed set is rejected with a message listing
    /// nothing but the offending input — the caller picked the identifier,
    /// the caller gets the error.
    pub fn parse(identifier: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == identifier)
            .ok_or_else(|| format!("Unknown delivery model identifier: {:?}", identifier))
    }

    /// Evaluation mechanism of this model
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelId::PatchTwiceWeekly | ModelId::PatchOnceWeekly => ModelKind::Patch,
            _ => ModelKind::Bolus,
        }
    }

    /// Delivery route implementing this model's mechanism
    pub fn route(&self) -> &'static dyn DeliveryRoute {
        match self.kind() {
            ModelKind::Bolus => &BOLUS_ROUTE,
            ModelKind::Patch => &PATCH_ROUTE,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =================================================================================================
// Model Store
// =================================================================================================

/// Read-only store of kinetic parameters per delivery model
///
/// One canonical tuple and one posterior ensemble per model, loaded once at
/// construction. The engine never mutates a store; callers share it freely
/// across evaluations.
#[derive(Debug)]
pub struct ModelStore {
    canonical: HashMap<ModelId, KineticParameters>,
    ensembles: HashMap<ModelId, Vec<KineticParameters>>,
}

impl ModelStore {
    /// Build the standard store from the built-in parameter tables
    pub fn standard() -> Self {
        let entries: [(ModelId, KineticParameters, &[KineticParameters]); 8] = [
            (
                ModelId::EstradiolValerateIm,
                data::EV_IM,
                &data::EV_IM_ENSEMBLE,
            ),
            (
                ModelId::EstradiolEnanthateIm,
                data::EEN_IM,
                &data::EEN_IM_ENSEMBLE,
            ),
            (
                ModelId::EstradiolCypionateIm,
                data::EC_IM,
                &data::EC_IM_ENSEMBLE,
            ),
            (
                ModelId::EstradiolBenzoateIm,
                data::EB_IM,
                &data::EB_IM_ENSEMBLE,
            ),
            (
                ModelId::EstradiolUndecylateIm,
                data::EUN_IM,
                &data::EUN_IM_ENSEMBLE,
            ),
            (
                ModelId::EstradiolUndecylateCaSubq,
                data::EUN_CASUBQ,
                &data::EUN_CASUBQ_ENSEMBLE,
            ),
            (
                ModelId::PatchTwiceWeekly,
                data::PATCH_TW,
                &data::PATCH_TW_ENSEMBLE,
            ),
            (
                ModelId::PatchOnceWeekly,
                data::PATCH_OW,
                &data::PATCH_OW_ENSEMBLE,
            ),
        ];

        let mut canonical = HashMap::new();
        let mut ensembles = HashMap::new();

        for (id, params, ensemble) in entries {
            debug_assert!(params.validate().is_ok(), "invalid table entry for {}", id);
            canonical.insert(id, params);
            ensembles.insert(id, ensemble.to_vec());
        }

        Self {
            canonical,
            ensembles,
        }
    }

    /// Canonical parameters of a model
    pub fn parameters(&self, id: ModelId) -> &KineticParameters {
        // Every ModelId variant is present: the store is built exhaustively.
        &self.canonical[&id]
    }

    /// Posterior ensemble of a model
    pub fn ensemble(&self, id: ModelId) -> &[KineticParameters] {
        &self.ensembles[&id]
    }
}

/// Process-wide read-only standard store
///
/// Built on first use; subsequent calls return the same instance.
pub fn standard_store() -> &'static ModelStore {
    static STORE: OnceLock<ModelStore> = OnceLock::new();
    STORE.get_or_init(ModelStore::standard)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        for id in ModelId::ALL {
            assert_eq!(ModelId::parse(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = ModelId::parse("EV oral").unwrap_err();
        assert!(err.contains("EV oral"));
        assert!(ModelId::parse("").is_err());
        assert!("ev im".parse::<ModelId>().is_err()); // case sensitive
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ModelId::EstradiolValerateIm.kind(), ModelKind::Bolus);
        assert_eq!(ModelId::EstradiolUndecylateCaSubq.kind(), ModelKind::Bolus);
        assert_eq!(ModelId::PatchTwiceWeekly.kind(), ModelKind::Patch);
        assert_eq!(ModelId::PatchOnceWeekly.kind(), ModelKind::Patch);
    }

    #[test]
    fn test_route_names_follow_kind() {
        assert_eq!(ModelId::EstradiolValerateIm.route().name(), "Bolus");
        assert_eq!(ModelId::PatchOnceWeekly.route().name(), "Patch");
    }

    #[test]
    fn test_store_covers_every_model() {
        let store = ModelStore::standard();
        for id in ModelId::ALL {
            assert!(store.parameters(id).validate().is_ok());
            assert!(!store.ensemble(id).is_empty());
        }
    }

    #[test]
    fn test_standard_store_is_shared() {
        let a = standard_store() as *const ModelStore;
        let b = standard_store() as *const ModelStore;
        assert_eq!(a, b);
    }

    #[test]
    fn test_patch_models_carry_wear() {
        let store = ModelStore::standard();
        assert!(store.parameters(ModelId::PatchTwiceWeekly).is_patch());
        assert!(store.parameters(ModelId::PatchOnceWeekly).is_patch());
        assert!(!store.parameters(ModelId::EstradiolValerateIm).is_patch());
    }
}

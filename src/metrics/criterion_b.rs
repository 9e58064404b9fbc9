//! IUCN Criterion B classification
//!
//! B1 classifies the Extent of Occurrence, B2 the Area of Occupancy. Each
//! sub-criterion is a step function of a single area; a value at a
//! threshold falls into the less severe category.

use std::fmt;

use super::constants::criterion_b;

/// Threatened categories, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatCategory {
    CriticallyEndangered,
    Endangered,
    Vulnerable,
}

impl ThreatCategory {
    /// IUCN two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            ThreatCategory::CriticallyEndangered => "CR",
            ThreatCategory::Endangered => "EN",
            ThreatCategory::Vulnerable => "VU",
        }
    }

    /// Full category name
    pub fn name(&self) -> &'static str {
        match self {
            ThreatCategory::CriticallyEndangered => "Critically Endangered",
            ThreatCategory::Endangered => "Endangered",
            ThreatCategory::Vulnerable => "Vulnerable",
        }
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of one sub-criterion
///
/// `NotAssessed` means the area was unavailable and must stay distinct from
/// `NotMet`, which means the area was measured and is above every threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCriterionStatus {
    Met(ThreatCategory),
    NotMet,
    NotAssessed,
}

impl SubCriterionStatus {
    pub fn is_met(&self) -> bool {
        matches!(self, SubCriterionStatus::Met(_))
    }

    pub fn category(&self) -> Option<ThreatCategory> {
        match self {
            SubCriterionStatus::Met(category) => Some(*category),
            _ => None,
        }
    }

    /// Machine-readable label written to reports
    pub fn label(&self) -> &'static str {
        match self {
            SubCriterionStatus::Met(_) => "met",
            SubCriterionStatus::NotMet => "not_met",
            SubCriterionStatus::NotAssessed => "not_assessed",
        }
    }
}

/// Exclusive upper bounds (km²) of the three threatened categories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub critically_endangered: f64,
    pub endangered: f64,
    pub vulnerable: f64,
}

/// B1 bounds on Extent of Occurrence
pub const B1_THRESHOLDS: Thresholds = Thresholds {
    critically_endangered: criterion_b::B1_CRITICALLY_ENDANGERED_KM2,
    endangered: criterion_b::B1_ENDANGERED_KM2,
    vulnerable: criterion_b::B1_VULNERABLE_KM2,
};

/// B2 bounds on Area of Occupancy
pub const B2_THRESHOLDS: Thresholds = Thresholds {
    critically_endangered: criterion_b::B2_CRITICALLY_ENDANGERED_KM2,
    endangered: criterion_b::B2_ENDANGERED_KM2,
    vulnerable: criterion_b::B2_VULNERABLE_KM2,
};

impl Thresholds {
    /// Classify a measured area
    pub fn classify(&self, area_km2: f64) -> SubCriterionStatus {
        if !area_km2.is_finite() {
            SubCriterionStatus::NotAssessed
        } else if area_km2 < self.critically_endangered {
            SubCriterionStatus::Met(ThreatCategory::CriticallyEndangered)
        } else if area_km2 < self.endangered {
            SubCriterionStatus::Met(ThreatCategory::Endangered)
        } else if area_km2 < self.vulnerable {
            SubCriterionStatus::Met(ThreatCategory::Vulnerable)
        } else {
            SubCriterionStatus::NotMet
        }
    }
}

/// B1 and B2 outcomes for one species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionBResult {
    pub b1: SubCriterionStatus,
    pub b2: SubCriterionStatus,
}

impl CriterionBResult {
    /// Result used when either area could not be computed
    pub fn not_assessed() -> Self {
        CriterionBResult {
            b1: SubCriterionStatus::NotAssessed,
            b2: SubCriterionStatus::NotAssessed,
        }
    }

    /// Most severe category across B1 and B2
    pub fn most_severe(&self) -> Option<ThreatCategory> {
        match (self.b1.category(), self.b2.category()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Classify EOO and AOO against Criterion B
///
/// If either area is missing or not finite, both sub-criteria are
/// reported as not assessed.
pub fn assess_criterion_b(eoo_km2: Option<f64>, aoo_km2: Option<f64>) -> CriterionBResult {
    match (eoo_km2, aoo_km2) {
        (Some(eoo), Some(aoo)) if eoo.is_finite() && aoo.is_finite() => CriterionBResult {
            b1: B1_THRESHOLDS.classify(eoo),
            b2: B2_THRESHOLDS.classify(aoo),
        },
        _ => CriterionBResult::not_assessed(),
    }
}

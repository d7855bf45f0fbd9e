//! Verdict and check-result types.

use serde::Serialize;
use serde_json::Value;

/// Which kind of display a request is about. Selects the size slot the
/// product's rating is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenType {
    Tv,
    Monitor,
}

/// Outcome of a single dimension check.
///
/// Three-way on purpose: a product with no data for a dimension must read
/// as "not applicable", never as a pass or a fail. Encodes as `true`,
/// `false`, or `null` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Passed,
    Failed,
    NotApplicable,
}

impl CheckResult {
    /// Build an applicable result from a pass/fail decision.
    pub fn from_outcome(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// The boolean outcome, or `None` when the check did not apply.
    pub fn outcome(self) -> Option<bool> {
        match self {
            Self::Passed => Some(true),
            Self::Failed => Some(false),
            Self::NotApplicable => None,
        }
    }
}

impl Serialize for CheckResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.outcome() {
            Some(passed) => serializer.serialize_bool(passed),
            None => serializer.serialize_unit(),
        }
    }
}

/// The three per-dimension outcomes of one evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckSet {
    pub size: CheckResult,
    pub weight: CheckResult,
    pub vesa: CheckResult,
}

/// Product fields mapped onto type-specific slots for evaluation.
///
/// At most one of the two max-size slots is populated, selected solely by
/// the request's `type`. All four keys are always serialized; absent
/// numbers encode as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSpecs {
    pub max_tv_size_inches: Option<f64>,
    pub max_monitor_size_inches: Option<f64>,
    pub weight_capacity_lb: Option<f64>,
    /// Supported hole patterns, lowercased and trimmed for comparison.
    pub vesa_supported: Vec<String>,
}

/// The full response payload for one compatibility request.
///
/// Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityVerdict {
    pub compatible: bool,
    pub reasons: Vec<String>,
    pub checks: CheckSet,
    /// The canonical user object, echoed back.
    pub user: Value,
    /// The canonical product object, echoed back.
    pub product: Value,
    pub resolved_specs: ResolvedSpecs,
    pub recommended_series: Vec<String>,
    pub suggested_collections: Vec<String>,
    pub safety_notes: Vec<String>,
    pub matched_rules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_result_serializes_as_tristate() {
        assert_eq!(serde_json::to_value(CheckResult::Passed).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(CheckResult::Failed).unwrap(), json!(false));
        assert_eq!(
            serde_json::to_value(CheckResult::NotApplicable).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn resolved_specs_always_serializes_all_slots() {
        let specs = ResolvedSpecs::default();
        assert_eq!(
            serde_json::to_value(&specs).unwrap(),
            json!({
                "max_tv_size_inches": null,
                "max_monitor_size_inches": null,
                "weight_capacity_lb": null,
                "vesa_supported": [],
            })
        );
    }
}

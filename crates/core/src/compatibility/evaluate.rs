//! Compatibility evaluator -- pure logic, no I/O.

use serde_json::Value;

use super::policy::CompatibilityPolicy;
use super::validate::ValidRequest;
use super::verdict::{CheckResult, CheckSet, CompatibilityVerdict, ResolvedSpecs, ScreenType};

// ---------------------------------------------------------------------------
// Merchandising catalog
// ---------------------------------------------------------------------------

/// Collection suggested for TV requests.
pub const TV_MOUNTS_COLLECTION: &str = "https://www.mount-it.com/collections/tv-mounts";
/// Collection suggested for monitor requests.
pub const MONITOR_MOUNTS_COLLECTION: &str = "https://www.mount-it.com/collections/monitor-mounts";

/// Heavy-duty TV mount series.
pub const SERIES_THE_BEAST: &str = "The Beast";
/// Compact monitor mount series.
pub const SERIES_CLIX: &str = "CLiX";
/// Full-size monitor mount series.
pub const SERIES_PROFLEX: &str = "ProFLEX";

// ---------------------------------------------------------------------------
// Reason strings and rule tags
// ---------------------------------------------------------------------------

pub const REASON_SIZE_EXCEEDED: &str = "Screen size exceeds the product size rating.";
pub const REASON_WEIGHT_EXCEEDED: &str =
    "Screen weight exceeds capacity with fifteen percent safety margin.";
pub const REASON_VESA_UNSUPPORTED: &str = "VESA pattern is not listed as supported.";
pub const REASON_ALL_CHECKS_PASS: &str = "All available checks pass within safety guidelines.";

pub const NOTE_REDUCE_LOAD: &str = "Consider a heavier duty mount or reduce load.";

pub const RULE_SIZE_OK: &str = "size_ok";
pub const RULE_WEIGHT_OK: &str = "weight_ok_with_margin";
pub const RULE_VESA_MATCH: &str = "vesa_match";

/// Compute the verdict for a validated request.
///
/// Total and deterministic: every input that passed [`validate`] produces a
/// fully-formed verdict, and equal inputs produce equal verdicts.
///
/// [`validate`]: super::validate::validate
pub fn evaluate(request: &ValidRequest<'_>, policy: &CompatibilityPolicy) -> CompatibilityVerdict {
    let user_vesa = request.vesa.trim().to_lowercase();
    let resolved = resolve_specs(request);

    // Size check against the slot matching the request's type.
    let max_size = match request.screen_type {
        ScreenType::Tv => resolved.max_tv_size_inches,
        ScreenType::Monitor => resolved.max_monitor_size_inches,
    };
    let size = match max_size {
        Some(max) => CheckResult::from_outcome(request.size_inches <= max),
        None => CheckResult::NotApplicable,
    };

    // Weight check against the derated capacity.
    let weight = match resolved.weight_capacity_lb {
        Some(capacity) => {
            let allowed = capacity * policy.weight_safety_factor;
            CheckResult::from_outcome(request.weight_lb <= allowed)
        }
        None => CheckResult::NotApplicable,
    };

    // VESA check needs both a supported list and a pattern to look for.
    let vesa = if resolved.vesa_supported.is_empty() || user_vesa.is_empty() {
        CheckResult::NotApplicable
    } else {
        CheckResult::from_outcome(resolved.vesa_supported.contains(&user_vesa))
    };

    let checks = CheckSet { size, weight, vesa };

    // Overall verdict: AND over the applicable checks. No applicable
    // checks means nothing could be verified, which is not a pass.
    let outcomes: Vec<bool> = [size, weight, vesa]
        .iter()
        .filter_map(|check| check.outcome())
        .collect();
    let compatible = !outcomes.is_empty() && outcomes.iter().all(|&passed| passed);

    let mut reasons = Vec::new();
    let mut safety_notes = Vec::new();
    let mut matched_rules = Vec::new();

    match size.outcome() {
        Some(false) => reasons.push(REASON_SIZE_EXCEEDED.to_string()),
        Some(true) => matched_rules.push(RULE_SIZE_OK.to_string()),
        None => {}
    }

    match weight.outcome() {
        Some(false) => {
            reasons.push(REASON_WEIGHT_EXCEEDED.to_string());
            safety_notes.push(NOTE_REDUCE_LOAD.to_string());
        }
        Some(true) => matched_rules.push(RULE_WEIGHT_OK.to_string()),
        None => {}
    }

    match vesa.outcome() {
        Some(false) => reasons.push(REASON_VESA_UNSUPPORTED.to_string()),
        Some(true) => matched_rules.push(RULE_VESA_MATCH.to_string()),
        None => {}
    }

    if compatible {
        reasons.push(REASON_ALL_CHECKS_PASS.to_string());
    }

    // Merchandising suggestions are keyed on the screen type and the raw
    // user inputs only, independent of the check outcomes.
    let mut recommended_series = Vec::new();
    let mut suggested_collections = Vec::new();
    match request.screen_type {
        ScreenType::Tv => {
            suggested_collections.push(TV_MOUNTS_COLLECTION.to_string());
            if request.weight_lb >= policy.beast_min_weight_lb {
                recommended_series.push(SERIES_THE_BEAST.to_string());
            }
        }
        ScreenType::Monitor => {
            suggested_collections.push(MONITOR_MOUNTS_COLLECTION.to_string());
            if request.size_inches <= policy.compact_max_size_inches {
                recommended_series.push(SERIES_CLIX.to_string());
            } else {
                recommended_series.push(SERIES_PROFLEX.to_string());
            }
        }
    }

    CompatibilityVerdict {
        compatible,
        reasons,
        checks,
        user: Value::Object(request.user.clone()),
        product: Value::Object(request.product.clone()),
        resolved_specs: resolved,
        recommended_series,
        suggested_collections,
        safety_notes,
        matched_rules,
    }
}

/// Map the product's canonical fields onto type-specific slots.
///
/// `max_size_inches` lands in the slot selected by the request's type; the
/// other slot stays empty.
fn resolve_specs(request: &ValidRequest<'_>) -> ResolvedSpecs {
    let max_size = request.product.get("max_size_inches").and_then(Value::as_f64);
    let (max_tv_size_inches, max_monitor_size_inches) = match request.screen_type {
        ScreenType::Tv => (max_size, None),
        ScreenType::Monitor => (None, max_size),
    };

    let vesa_supported = request
        .product
        .get("vesa_supported")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(vesa_key).collect())
        .unwrap_or_default();

    ResolvedSpecs {
        max_tv_size_inches,
        max_monitor_size_inches,
        weight_capacity_lb: request
            .product
            .get("weight_capacity_lb")
            .and_then(Value::as_f64),
        vesa_supported,
    }
}

/// Lowercased, trimmed comparison key for a VESA entry. Non-string entries
/// compare by their JSON rendering, so `400` in a supported list matches a
/// user pattern of `"400"`.
fn vesa_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_lowercase(),
        other => other.to_string().trim().to_lowercase(),
    }
}

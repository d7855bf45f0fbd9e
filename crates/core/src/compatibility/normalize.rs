//! Request normalizer for legacy-shaped bodies.
//!
//! Two generations of the public schema exist: the canonical one
//! (`user.size_inches`, `product.weight_capacity_lb`, ...) and an older one
//! with screen-specific names (`user.monitor_size_inches`,
//! `product.weight_limit_lb`, ...). Each canonical field is resolved from
//! an ordered list of candidate keys, first well-typed value wins, and the
//! result is shallow-merged over the original object so unknown fields pass
//! through untouched.
//!
//! Normalization never rejects anything. Malformed sections are left as-is
//! for the validator to report, and an already-canonical request comes back
//! unchanged.

use serde_json::{Map, Value};

/// Candidate keys for one canonical field, in priority order, with the
/// type guard a candidate value must satisfy to be picked.
struct FieldAliases {
    canonical: &'static str,
    candidates: &'static [&'static str],
    accepts: fn(&Value) -> bool,
}

const USER_FIELDS: &[FieldAliases] = &[
    FieldAliases {
        canonical: "size_inches",
        candidates: &["size_inches", "monitor_size_inches", "tv_size_inches"],
        accepts: Value::is_number,
    },
    FieldAliases {
        canonical: "weight_lb",
        candidates: &["weight_lb", "monitor_weight_lb", "tv_weight_lb"],
        accepts: Value::is_number,
    },
    FieldAliases {
        canonical: "vesa",
        candidates: &["vesa", "vesa_pattern", "vesaPattern"],
        accepts: Value::is_string,
    },
];

const PRODUCT_FIELDS: &[FieldAliases] = &[
    FieldAliases {
        canonical: "max_size_inches",
        candidates: &[
            "max_size_inches",
            "max_tv_size_inches",
            "max_monitor_size_inches",
        ],
        accepts: Value::is_number,
    },
    FieldAliases {
        canonical: "weight_capacity_lb",
        candidates: &["weight_capacity_lb", "weight_limit_lb", "weight_limit"],
        accepts: Value::is_number,
    },
];

/// Map a possibly legacy-shaped request body onto the canonical schema.
///
/// Non-object bodies, and non-object `user`/`product` sections, pass
/// through unchanged; rejection belongs to the validator.
pub fn normalize(body: &Value) -> Value {
    let Some(obj) = body.as_object() else {
        return body.clone();
    };

    let mut out = obj.clone();

    // Anything but the two known type values falls back to "tv".
    let screen_type = match obj.get("type").and_then(Value::as_str) {
        Some(t @ ("tv" | "monitor")) => t,
        _ => "tv",
    };
    out.insert("type".to_string(), Value::String(screen_type.to_string()));

    if let Some(user) = obj.get("user").and_then(Value::as_object) {
        out.insert(
            "user".to_string(),
            Value::Object(resolve_fields(user, USER_FIELDS)),
        );
    }

    if let Some(product) = obj.get("product").and_then(Value::as_object) {
        let mut resolved = resolve_fields(product, PRODUCT_FIELDS);
        // `vesaSupported` overrides only when it actually is an array; the
        // original `vesa_supported` value is otherwise kept un-checked.
        if let Some(list @ Value::Array(_)) = product.get("vesaSupported") {
            resolved.insert("vesa_supported".to_string(), list.clone());
        }
        out.insert("product".to_string(), Value::Object(resolved));
    }

    Value::Object(out)
}

/// Shallow-merge the resolved canonical fields over one section.
///
/// A canonical field that resolves to nothing is removed outright so an
/// ill-typed value under the canonical name cannot survive normalization.
fn resolve_fields(section: &Map<String, Value>, fields: &[FieldAliases]) -> Map<String, Value> {
    let mut out = section.clone();
    for field in fields {
        let resolved = field
            .candidates
            .iter()
            .filter_map(|key| section.get(*key))
            .find(|value| (field.accepts)(value));
        match resolved {
            Some(value) => out.insert(field.canonical.to_string(), value.clone()),
            None => out.remove(field.canonical),
        };
    }
    out
}

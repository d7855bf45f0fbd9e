//! Ordered validation of the canonical request body.
//!
//! Rules run in a fixed order and only the first violation is reported;
//! the messages are part of the public error contract. On success the
//! caller gets a typed view of the fields the evaluator needs, while the
//! raw sections stay available for echoing back.

use serde_json::{Map, Value};

use crate::error::CoreError;

use super::verdict::ScreenType;

/// A validated canonical request: typed handles on the fields the
/// evaluator reads, plus the raw sections for passthrough.
#[derive(Debug, Clone, Copy)]
pub struct ValidRequest<'a> {
    pub screen_type: ScreenType,
    pub user: &'a Map<String, Value>,
    pub product: &'a Map<String, Value>,
    pub size_inches: f64,
    pub weight_lb: f64,
    pub vesa: &'a str,
}

/// Check the canonical body against the ordered rule list.
///
/// Returns the typed view on success, or the first violated rule's
/// message. A request that passes here cannot fail evaluation.
pub fn validate(body: &Value) -> Result<ValidRequest<'_>, CoreError> {
    let Some(body) = body.as_object() else {
        return Err(CoreError::Validation("Body must be an object"));
    };

    let screen_type = match body.get("type").and_then(Value::as_str) {
        Some("tv") => ScreenType::Tv,
        Some("monitor") => ScreenType::Monitor,
        _ => return Err(CoreError::Validation("type must be \"tv\" or \"monitor\"")),
    };

    let Some(user) = body.get("user").and_then(Value::as_object) else {
        return Err(CoreError::Validation("user object is required"));
    };

    let Some(size_inches) = user.get("size_inches").and_then(Value::as_f64) else {
        return Err(CoreError::Validation("user.size_inches must be a number"));
    };

    let Some(weight_lb) = user.get("weight_lb").and_then(Value::as_f64) else {
        return Err(CoreError::Validation("user.weight_lb must be a number"));
    };

    let Some(vesa) = user.get("vesa").and_then(Value::as_str) else {
        return Err(CoreError::Validation("user.vesa must be a string"));
    };

    let Some(product) = body.get("product").and_then(Value::as_object) else {
        return Err(CoreError::Validation("product object is required"));
    };

    // A product with no usable spec and no identifying URL cannot be
    // evaluated at all.
    let has_spec = product.get("url").is_some_and(is_truthy)
        || product.get("max_size_inches").is_some_and(Value::is_number)
        || product.get("weight_capacity_lb").is_some_and(Value::is_number)
        || product.get("vesa_supported").is_some_and(Value::is_array);
    if !has_spec {
        return Err(CoreError::Validation(
            "product must include url or at least one spec field",
        ));
    }

    if let Some(vesa_supported) = product.get("vesa_supported") {
        if !vesa_supported.is_null() && !vesa_supported.is_array() {
            return Err(CoreError::Validation(
                "product.vesa_supported must be an array of strings",
            ));
        }
    }

    Ok(ValidRequest {
        screen_type,
        user,
        product,
        size_inches,
        weight_lb,
        vesa,
    })
}

/// Whether a `url` value actually identifies a product. `null`, `false`,
/// `0`, and the empty string do not count, matching the historical
/// contract of the endpoint.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

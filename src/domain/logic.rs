// src/domain/logic.rs

use crate::domain::property::{FieldName, PropertyFeatures};

/// True when every field holds something other than whitespace.
///
/// Values are not interpreted: "abc" is an acceptable bedroom count here.
pub fn is_complete(features: &PropertyFeatures) -> bool {
    FieldName::ALL
        .into_iter()
        .all(|field| !features.get(field).trim().is_empty())
}

/// Fields that would make `is_complete` fail, in declaration order.
pub fn missing_fields(features: &PropertyFeatures) -> Vec<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| features.get(*field).trim().is_empty())
        .collect()
}

/// Whole-dollar en-US currency, e.g. `$1,234,567` or `-$950`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if price < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Confidence as a plain number: `92` for 92.0, `92.5` otherwise.
pub fn format_confidence(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{confidence:.0}")
    } else {
        format!("{confidence:.1}")
    }
}

use crate::product::ProductDraft;

enum AmountCheck {
    Ok(f64),
    Missing,
    Invalid,
    Negative,
}

fn check_amount(raw: &str) -> AmountCheck {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AmountCheck::Missing;
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return AmountCheck::Invalid;
    };
    if !value.is_finite() {
        return AmountCheck::Invalid;
    }
    if value < 0.0 {
        return AmountCheck::Negative;
    }
    AmountCheck::Ok(value)
}

fn checked_price(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<f64> {
    match check_amount(raw) {
        AmountCheck::Ok(value) => Some(value),
        AmountCheck::Missing => {
            errors.push(format!("{label} is required"));
            None
        }
        AmountCheck::Invalid => {
            errors.push(format!("{label} must be a number"));
            None
        }
        AmountCheck::Negative => {
            errors.push(format!("{label} must not be negative"));
            None
        }
    }
}

/// Submit-time validation. Collects every violation as an operator-facing
/// message; an empty result means the draft may be submitted.
pub fn validate_draft(draft: &ProductDraft) -> Vec<String> {
    let mut errors = Vec::new();
    if draft.category.trim().is_empty() {
        errors.push("Category is required".to_string());
    }
    if draft.name.trim().is_empty() {
        errors.push("Product name is required".to_string());
    }
    let actual = checked_price(&draft.actual_price, "Actual price", &mut errors);
    let sale = checked_price(&draft.sale_price, "Sale price", &mut errors);
    if let (Some(actual), Some(sale)) = (actual, sale) {
        if sale <= actual {
            errors.push("Sale price must be greater than actual price".to_string());
        }
    }
    let quantity = draft.quantity.trim();
    if !quantity.is_empty() && quantity.parse::<u32>().is_err() {
        errors.push("Quantity must be a whole number".to_string());
    }
    errors
}

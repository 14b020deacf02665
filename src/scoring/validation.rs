use super::weights::{WeightVector, WEIGHT_SUM_TOLERANCE};

/// Validate a weight vector at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &WeightVector) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let named = [
        ("size", weights.size),
        ("energy", weights.energy),
        ("social", weights.social),
        ("noise", weights.noise),
        ("age", weights.age),
    ];

    for (name, value) in named {
        if !value.is_finite() {
            errors.push(format!("weights.{}: must be a finite number", name));
        } else if value < 0.0 {
            errors.push(format!("weights.{}: must be non-negative (got {})", name, value));
        }
    }

    let sum = weights.sum();
    if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!("weights: must sum to 1.0 (got {})", sum));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

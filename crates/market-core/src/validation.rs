//! # Validation Module
//!
//! Input validation for products entering the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  └── Renders catalog data as received                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: market-core (THIS MODULE)                                    │
//! │  ├── id present and bounded                                            │
//! │  └── price finite and non-negative                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants (cart.rs)                                    │
//! │  ├── one entry per id                                                  │
//! │  └── quantity ≥ 1                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use market_core::validation::{validate_id, validate_price};
//!
//! validate_id("p1").unwrap();
//! validate_price(10.0).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::ProductDescriptor;
use crate::MAX_ID_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_ID_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_id;
///
/// assert!(validate_id("p1").is_ok());
/// assert!(validate_id("  ").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity; neither survives JSON)
/// - Zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole descriptor before it is added to a cart.
pub fn validate_descriptor(product: &ProductDescriptor) -> ValidationResult<()> {
    validate_id(&product.id)?;
    validate_price(product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("p1").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("   ").is_err());
        assert!(validate_id(&"x".repeat(MAX_ID_LENGTH)).is_ok());
        assert!(validate_id(&"x".repeat(MAX_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(10.0).is_ok());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_descriptor() {
        let ok = ProductDescriptor::new("p1", "Mug", "u", 3.5);
        assert!(validate_descriptor(&ok).is_ok());

        let no_id = ProductDescriptor::new("", "Mug", "u", 3.5);
        assert!(matches!(
            validate_descriptor(&no_id),
            Err(ValidationError::Required { .. })
        ));
    }
}

//! Presence and range checks applied before a product is dispatched.

use thiserror::Error;

use crate::catalog::product::{Category, ProductDraft};

/// Raw form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductInput {
    pub name: String,
    pub price: String,
    pub category: Option<Category>,
    pub stock: String,
    pub description: String,
    pub image_url: String,
}

/// Smallest price the form accepts. The store itself takes any price.
pub const MIN_FORM_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in the required field: {field}")]
    MissingField { field: &'static str },

    #[error("Price '{input}' is not a number")]
    InvalidPrice { input: String },

    #[error("Price must be greater than 0")]
    NonPositivePrice,

    #[error("Price must be at least {min}")]
    PriceBelowMinimum { min: f64 },

    #[error("Stock '{input}' is not a whole number")]
    InvalidStock { input: String },

    #[error("Stock must not be negative")]
    NegativeStock,
}

/// Validate raw input and build a draft.
///
/// Required text fields are checked first (name, description, category),
/// then price and stock.
pub fn validate(input: &ProductInput) -> Result<ProductDraft, ValidationError> {
    let name = required(&input.name, "name")?;
    let description = required(&input.description, "description")?;
    let category = match &input.category {
        Some(category) if !category.as_str().trim().is_empty() => category.clone(),
        _ => return Err(ValidationError::MissingField { field: "category" }),
    };
    let price = parse_price(&input.price)?;
    let stock = parse_stock(&input.stock)?;
    let image_url = match input.image_url.trim() {
        "" => None,
        url => Some(url.to_string()),
    };

    Ok(ProductDraft {
        name,
        price,
        description,
        category,
        stock,
        image_url,
    })
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field: "price" });
    }
    let price: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidPrice {
        input: trimmed.to_string(),
    })?;
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice {
            input: trimmed.to_string(),
        });
    }
    if price <= 0.0 {
        return Err(ValidationError::NonPositivePrice);
    }
    if price < MIN_FORM_PRICE {
        return Err(ValidationError::PriceBelowMinimum {
            min: MIN_FORM_PRICE,
        });
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let stock: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidStock {
        input: trimmed.to_string(),
    })?;
    if stock < 0 {
        return Err(ValidationError::NegativeStock);
    }
    u32::try_from(stock).map_err(|_| ValidationError::InvalidStock {
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "Pen".into(),
            price: "1000".into(),
            category: Some(Category::Other),
            stock: "5".into(),
            description: "x".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn valid_input_builds_draft() {
        let draft = validate(&valid_input()).unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.price, 1000.0);
        assert_eq!(draft.stock, 5);
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn blank_stock_defaults_to_zero() {
        let input = ProductInput {
            stock: "  ".into(),
            ..valid_input()
        };
        assert_eq!(validate(&input).unwrap().stock, 0);
    }

    #[test]
    fn text_fields_are_checked_before_numbers() {
        let input = ProductInput {
            name: " ".into(),
            price: "0".into(),
            ..valid_input()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::MissingField { field: "name" })
        );
    }

    #[test]
    fn missing_description_and_category_are_reported() {
        let input = ProductInput {
            description: String::new(),
            ..valid_input()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::MissingField { field: "description" })
        );
        let input = ProductInput {
            category: None,
            ..valid_input()
        };
        assert_eq!(
            validate(&input),
            Err(ValidationError::MissingField { field: "category" })
        );
    }

    #[test]
    fn zero_or_negative_price_is_rejected() {
        for price in ["0", "-3", "0.0"] {
            let input = ProductInput {
                price: price.into(),
                ..valid_input()
            };
            assert_eq!(validate(&input), Err(ValidationError::NonPositivePrice));
        }
    }

    #[test]
    fn fractional_price_below_one_is_rejected() {
        let input = ProductInput {
            price: "0.5".into(),
            ..valid_input()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err, ValidationError::PriceBelowMinimum { min: 1.0 });
        assert_eq!(err.to_string(), "Price must be at least 1");

        let input = ProductInput {
            price: "1".into(),
            ..valid_input()
        };
        assert_eq!(validate(&input).unwrap().price, 1.0);
    }

    #[test]
    fn garbage_price_is_rejected() {
        let input = ProductInput {
            price: "abc".into(),
            ..valid_input()
        };
        assert!(matches!(
            validate(&input),
            Err(ValidationError::InvalidPrice { .. })
        ));
        let input = ProductInput {
            price: "inf".into(),
            ..valid_input()
        };
        assert!(matches!(
            validate(&input),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let input = ProductInput {
            stock: "-1".into(),
            ..valid_input()
        };
        assert_eq!(validate(&input), Err(ValidationError::NegativeStock));
    }

    #[test]
    fn image_url_is_trimmed_and_optional() {
        let input = ProductInput {
            image_url: " https://example.com/pen.jpg ".into(),
            ..valid_input()
        };
        assert_eq!(
            validate(&input).unwrap().image_url.as_deref(),
            Some("https://example.com/pen.jpg")
        );
    }
}

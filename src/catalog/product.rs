//! Product records and their building blocks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of a product record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product category.
///
/// The form offers the fixed set; `Custom` keeps free text coming from
/// other producers (seed data, hand-built updates).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Food,
    Books,
    Sports,
    Other,
    #[serde(untagged)]
    Custom(String),
}

impl Category {
    /// Options offered by the form, in display order.
    pub const OPTIONS: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::Food,
        Category::Books,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Food => "food",
            Category::Books => "books",
            Category::Sports => "sports",
            Category::Other => "other",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCategory;

impl fmt::Display for EmptyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("category must not be empty")
    }
}

impl std::error::Error for EmptyCategory {}

impl FromStr for Category {
    type Err = EmptyCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptyCategory);
        }
        Ok(Category::OPTIONS
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Category::Custom(trimmed.to_string())))
    }
}

/// Product data as submitted by a producer, before the store stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Turn the draft into a record with the given identity.
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            stock: self.stock,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// One product entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    pub stock: u32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Stock value of this record (price × stock).
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

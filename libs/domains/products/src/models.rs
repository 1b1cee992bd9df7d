use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Product entity
///
/// Instances are only obtainable through [`Product::new`], which either
/// returns a fully valid product or a validation error. The id and
/// creation timestamp are assigned at construction and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name (non-empty)
    pub name: String,
    /// Unit price (strictly positive)
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new validated product.
    ///
    /// Fails with `NameRequired` for an empty name, `PriceRequired` for a
    /// zero price, and `InvalidPrice` for anything else that is not
    /// strictly positive (negative values, NaN).
    pub fn new(name: String, price: f64) -> ProductResult<Self> {
        let product = Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Re-check the construction invariants on an existing instance,
    /// returning the first violation.
    pub fn validate(&self) -> ProductResult<()> {
        if self.name.is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ProductError::PriceRequired);
        }
        // Negation so NaN lands here too
        if !(self.price > 0.0) {
            return Err(ProductError::InvalidPrice);
        }
        Ok(())
    }
}

/// DTO for creating a new product
///
/// Field invariants (non-empty name, positive price) are enforced by
/// [`Product::new`] so the error taxonomy stays in the domain.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// DTO for updating an existing product
///
/// A body-supplied id is accepted but always overridden by the path id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub price: f64,
}

/// Sort direction for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Normalize a raw query parameter: anything other than exactly
    /// `"desc"` sorts ascending.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Query parameters for listing products
///
/// `page` and `limit` arrive as raw strings so that non-numeric values
/// degrade to 0 (meaning "no pagination") instead of rejecting the
/// request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl ProductQuery {
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(0)
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort.as_deref())
    }
}

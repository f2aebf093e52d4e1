//! User Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SoftDelete;

/// Storefront customer. Read-only in the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Discount percentage
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount: Option<Decimal>,
    /// Lifetime spend
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    /// Current cart value
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub cart_sum: Option<Decimal>,
}

impl SoftDelete for User {
    fn is_deleted(&self) -> bool {
        false
    }
}

//! Order Model
//!
//! One canonical order contract. The status workflow is
//! pending -> paid -> confirmed -> delivery -> delivered, with `canceled`
//! reachable from any non-terminal state. `expired` is assigned by the
//! server only and never offered for selection; no transition graph is
//! enforced client-side, the server stays authoritative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, SoftDelete, User};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Pending,
    Paid,
    Confirmed,
    Delivery,
    Delivered,
    Canceled,
    Expired,
}

impl OrderState {
    /// States the admin may assign, in workflow order.
    pub fn selectable() -> [OrderState; 6] {
        [
            OrderState::Pending,
            OrderState::Paid,
            OrderState::Confirmed,
            OrderState::Delivery,
            OrderState::Delivered,
            OrderState::Canceled,
        ]
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderState::Delivered | OrderState::Canceled | OrderState::Expired
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Pending => "pending",
            OrderState::Paid => "paid",
            OrderState::Confirmed => "confirmed",
            OrderState::Delivery => "delivery",
            OrderState::Delivered => "delivered",
            OrderState::Canceled => "canceled",
            OrderState::Expired => "expired",
        }
    }

    /// Display label for the status select.
    pub fn label(&self) -> &'static str {
        match self {
            OrderState::Pending => "В обработке",
            OrderState::Paid => "Оплачен",
            OrderState::Confirmed => "Принят",
            OrderState::Delivery => "Передан в доставку",
            OrderState::Delivered => "Доставлен",
            OrderState::Canceled => "Отменён",
            OrderState::Expired => "Истёк",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One order line: product reference plus quantity and variant selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub selector_value: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub state: OrderState,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub sum: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,

    // -- Customer contact --
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,

    // -- Shipping address --
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub flat: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<String>,
    #[serde(default)]
    pub intercom: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,

    // -- Delivery --
    #[serde(default)]
    pub delivery_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub delivery_price: Option<Decimal>,

    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub order_products: Vec<OrderProduct>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl SoftDelete for Order {
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Full-edit payload (`PUT /order?id=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub state: OrderState,
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,
}

/// Status-only payload (`PUT /order/state?id=`). Deliberately carries
/// nothing but the state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStateUpdate {
    pub state: OrderState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderState::Delivery).unwrap(),
            serde_json::json!("delivery")
        );
        let state: OrderState = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(state, OrderState::Canceled);
    }

    #[test]
    fn test_expired_parses_but_is_not_selectable() {
        let state: OrderState = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(state, OrderState::Expired);
        assert!(!OrderState::selectable().contains(&OrderState::Expired));
        assert_eq!(OrderState::selectable().len(), 6);
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderState::Delivered.is_terminal());
        assert!(OrderState::Canceled.is_terminal());
        assert!(OrderState::Expired.is_terminal());
        assert!(!OrderState::Delivery.is_terminal());
    }

    #[test]
    fn test_state_update_carries_only_state() {
        let encoded = serde_json::to_value(OrderStateUpdate {
            state: OrderState::Paid,
        })
        .unwrap();
        assert_eq!(encoded, serde_json::json!({"state": "paid"}));
    }
}

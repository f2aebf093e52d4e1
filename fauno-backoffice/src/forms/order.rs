//! Order form.

use fauno_client::HttpClient;
use rust_decimal::Decimal;
use shared::models::{Order, OrderState, OrderUpdate};
use validator::Validate;

use super::SubmitOutcome;

/// Full order edit: status plus sum, PUT as one JSON body. Orders are
/// never created from the back office, so there is no create mode. The
/// inline status select on the order row goes through
/// [`OrdersTab::set_state`](crate::OrdersTab::set_state) instead.
#[derive(Debug, Clone, Validate)]
pub struct OrderForm {
    id: i64,
    pub state: OrderState,
    #[validate(custom(function = crate::forms::validate_required_decimal))]
    pub sum: String,
}

impl OrderForm {
    pub fn edit(order: &Order) -> Self {
        Self {
            id: order.id,
            state: order.state,
            sum: order.sum.to_string(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Validate and submit. Invalid input sends nothing.
    pub async fn submit(&self, api: &HttpClient) -> SubmitOutcome {
        if self.validate().is_err() {
            return SubmitOutcome::Invalid;
        }
        let Ok(sum) = self.sum.trim().parse::<Decimal>() else {
            return SubmitOutcome::Invalid;
        };
        let update = OrderUpdate {
            state: self.state,
            sum,
        };

        match api.update_order(self.id, &update).await {
            Ok(_) => SubmitOutcome::Saved,
            Err(e) => {
                tracing::error!(error = %e, id = self.id, "failed to save order");
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> Order {
        serde_json::from_value(json!({"id": 3, "state": "pending", "sum": 250.0})).unwrap()
    }

    #[test]
    fn test_empty_sum_is_invalid() {
        let mut form = OrderForm::edit(&order());
        assert_eq!(form.sum.parse::<Decimal>().unwrap(), Decimal::from(250));
        assert!(form.validate().is_ok());

        form.sum = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_state_preselected_from_order() {
        let form = OrderForm::edit(&order());
        assert_eq!(form.state, OrderState::Pending);
        assert_eq!(form.id(), 3);
    }
}

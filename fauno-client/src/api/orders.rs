//! Order API

use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{Order, OrderState, OrderStateUpdate, OrderUpdate};
use shared::{ListPage, ListQuery, normalize_list};

impl HttpClient {
    /// Fetch one page of orders (`{rows, count}`).
    pub async fn list_orders(&self, query: &ListQuery) -> ClientResult<ListPage<Order>> {
        let value: Value = self.get_query("order", query).await?;
        Ok(normalize_list::<Order>(value)?)
    }

    /// Full order edit, keyed by `id` as a query parameter.
    pub async fn update_order(&self, id: i64, update: &OrderUpdate) -> ClientResult<Value> {
        self.put_query("order", &[("id", id)], update).await
    }

    /// Status-only update. The body carries the state and nothing else;
    /// one call per selection.
    pub async fn set_order_state(&self, id: i64, state: OrderState) -> ClientResult<Value> {
        self.put_query("order/state", &[("id", id)], &OrderStateUpdate { state })
            .await
    }

    /// Cancel an order. A dedicated POST, distinct from state assignment.
    pub async fn cancel_order(&self, id: i64) -> ClientResult<Value> {
        self.post_query("order", &[("id", id)], &serde_json::json!({}))
            .await
    }
}

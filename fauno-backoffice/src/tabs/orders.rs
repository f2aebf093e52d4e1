//! Orders tab.

use crate::list::ListState;
use fauno_client::HttpClient;
use shared::models::{Order, OrderState};

/// Order table: paginated rows with an inline status select. Choosing a
/// status fires the state PUT immediately; validity of the transition is
/// the server's call. Cancel is its own endpoint, not a state assignment.
pub struct OrdersTab {
    api: HttpClient,
    pub list: ListState<Order>,
}

impl OrdersTab {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            list: ListState::new(25),
        }
    }

    pub async fn refresh(&mut self) {
        let seq = self.list.begin();
        match self.api.list_orders(&self.list.query()).await {
            Ok(page) => {
                self.list.apply(seq, page);
            }
            Err(e) => tracing::error!(error = %e, "failed to fetch orders"),
        }
    }

    pub async fn set_page(&mut self, page: u32) {
        self.list.set_page(page);
        self.refresh().await;
    }

    pub async fn set_limit(&mut self, limit: u32) {
        self.list.set_limit(limit);
        self.refresh().await;
    }

    /// Assign a new status: exactly one state-only PUT per selection,
    /// then the standard refetch.
    pub async fn set_state(&mut self, id: i64, state: OrderState) {
        match self.api.set_order_state(id, state).await {
            Ok(_) => self.refresh().await,
            Err(e) => tracing::error!(error = %e, id, state = %state, "failed to update order state"),
        }
    }

    pub async fn cancel(&mut self, id: i64) {
        match self.api.cancel_order(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => tracing::error!(error = %e, id, "failed to cancel order"),
        }
    }
}

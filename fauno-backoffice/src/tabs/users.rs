//! Users tab.

use crate::list::ListState;
use fauno_client::HttpClient;
use shared::models::User;

/// Customer table. Read-only: no mutations, just the paginated fetch.
pub struct UsersTab {
    api: HttpClient,
    pub list: ListState<User>,
}

impl UsersTab {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            list: ListState::new(25),
        }
    }

    pub async fn refresh(&mut self) {
        let seq = self.list.begin();
        match self.api.list_users(&self.list.query()).await {
            Ok(page) => {
                self.list.apply(seq, page);
            }
            Err(e) => tracing::error!(error = %e, "failed to fetch users"),
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
}

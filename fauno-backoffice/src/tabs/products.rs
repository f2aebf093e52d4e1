//! Products tab.

use crate::list::ListState;
use fauno_client::HttpClient;
use shared::models::Product;

/// Product catalog: paginated card grid with name search. The header
/// shows the server totals (`total` plus the `active` count when the
/// endpoint reports one).
pub struct ProductsTab {
    api: HttpClient,
    pub list: ListState<Product>,
}

impl ProductsTab {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            list: ListState::new(20),
        }
    }

    /// Refetch the current page. A response superseded by a newer fetch
    /// is discarded; a failed fetch leaves the previous page in place.
    pub async fn refresh(&mut self) {
        let seq = self.list.begin();
        match self.api.list_products(&self.list.query()).await {
            Ok(page) => {
                self.list.apply(seq, page);
            }
            Err(e) => tracing::error!(error = %e, "failed to fetch products"),
        }
    }

    pub async fn set_page(&mut self, page: u32) {
        self.list.set_page(page);
        self.refresh().await;
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        self.list.set_search(search);
        self.refresh().await;
    }

    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_product(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => tracing::error!(error = %e, id, "failed to delete product"),
        }
    }
}

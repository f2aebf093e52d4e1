//! Arrivals tab.

use fauno_client::HttpClient;
use shared::models::Arrival;

/// "Latest arrivals" gallery: unpaginated, one cover image per car.
pub struct ArrivalsTab {
    api: HttpClient,
    arrivals: Vec<Arrival>,
}

impl ArrivalsTab {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            arrivals: Vec::new(),
        }
    }

    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    pub async fn refresh(&mut self) {
        match self.api.list_arrivals().await {
            Ok(rows) => self.arrivals = rows,
            Err(e) => tracing::error!(error = %e, "failed to fetch arrivals"),
        }
    }

    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_arrival(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => tracing::error!(error = %e, id, "failed to delete arrival"),
        }
    }
}

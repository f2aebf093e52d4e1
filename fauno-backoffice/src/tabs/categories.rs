//! Categories tab.

use fauno_client::HttpClient;
use shared::models::Category;

/// Category catalog: unpaginated list of cards, create/edit through
/// [`CategoryForm`](crate::CategoryForm), two-step-confirmed delete.
pub struct CategoriesTab {
    api: HttpClient,
    categories: Vec<Category>,
}

impl CategoriesTab {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api,
            categories: Vec::new(),
        }
    }

    /// Soft-deleted records are already filtered out.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Refetch the whole collection. On failure the previous list stays.
    pub async fn refresh(&mut self) {
        match self.api.list_categories().await {
            Ok(rows) => self.categories = rows,
            Err(e) => tracing::error!(error = %e, "failed to fetch categories"),
        }
    }

    /// Delete a category and refetch. The view confirms before calling;
    /// there is no undo once the server accepts.
    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_category(id).await {
            Ok(_) => self.refresh().await,
            Err(e) => tracing::error!(error = %e, id, "failed to delete category"),
        }
    }
}

//! User API

use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::User;
use shared::{ListPage, ListQuery, normalize_list};

impl HttpClient {
    /// Fetch one page of storefront customers (`{rows, count}`). The
    /// back office never mutates users.
    pub async fn list_users(&self, query: &ListQuery) -> ClientResult<ListPage<User>> {
        let value: Value = self.get_query("user", query).await?;
        Ok(normalize_list::<User>(value)?)
    }
}

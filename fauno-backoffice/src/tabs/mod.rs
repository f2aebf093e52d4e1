//! Tab controllers, one per back-office resource.
//!
//! Each controller owns its collection state and an API handle, and
//! implements the shared cycle: `refresh()` on mount and after every
//! completed mutation, full refetch instead of local patching. Fetch and
//! mutation failures are logged and leave the previous state untouched; no
//! operation retries. The requests inbox is the one surface that also
//! records a user-facing error message.

pub mod arrivals;
pub mod categories;
pub mod orders;
pub mod products;
pub mod requests;
pub mod users;

pub use arrivals::ArrivalsTab;
pub use categories::CategoriesTab;
pub use orders::OrdersTab;
pub use products::ProductsTab;
pub use requests::{InboxTab, RequestsInbox};
pub use users::UsersTab;

//! Fauno Back-Office - application core
//!
//! Tab controllers, entity form models and session bootstrapping for the
//! admin panel. Every screen follows the same cycle: fetch a collection,
//! expose it for rendering, mutate through the API, refetch. Rendering is
//! the embedder's concern; controllers hold exactly the state a view would
//! draw and the callbacks it would invoke.

pub mod forms;
pub mod list;
pub mod session;
pub mod tabs;

pub use forms::{ArrivalForm, CategoryForm, OrderForm, ProductForm, SlugField, SubmitOutcome};
pub use list::ListState;
pub use session::{Session, SessionState};
pub use tabs::{
    ArrivalsTab, CategoriesTab, InboxTab, OrdersTab, ProductsTab, RequestsInbox, UsersTab,
};

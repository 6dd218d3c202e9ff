//! Bulk customer create / edit modal
//!
//! MVVM split:
//! - view_model.rs: signals, commands, submission flow
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::BulkCustomerFormModal;
pub use view_model::BulkCustomerFormViewModel;

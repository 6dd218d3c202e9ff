//! Customers: server records, draft records and the bulk create/edit form.

pub mod aggregate;
pub mod bulk_form;
pub mod validation;

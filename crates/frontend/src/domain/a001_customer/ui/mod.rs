pub mod bulk_form;
pub mod list;

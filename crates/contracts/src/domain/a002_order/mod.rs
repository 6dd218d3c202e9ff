//! Orders of a customer and the order filter queries.

pub mod aggregate;
pub mod filter;

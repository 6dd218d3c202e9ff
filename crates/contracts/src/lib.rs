pub mod domain;
pub mod shared;

//! Platform-independent core of the portfolio interaction layer.
//!
//! Everything here is plain Rust with no DOM access: menu and filter state,
//! contact form validation, the declarative binding table and the DOM
//! contract configuration. The `frontend` crate applies these decisions to
//! the live page.

pub mod domain;
pub mod shared;

pub use shared::error::ContractError;

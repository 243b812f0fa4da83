pub mod classes;
pub mod context;

pub use context::{BindingContext, BindingReport, MissingElement};

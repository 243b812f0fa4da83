pub mod filter;

pub use filter::{FilterPlan, FilterSelection, ALL_CATEGORY};

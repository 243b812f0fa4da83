pub mod binding;
pub mod config;
pub mod error;
pub mod navigation;

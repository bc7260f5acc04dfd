//! Business domains.

pub mod menu;
pub mod orders;

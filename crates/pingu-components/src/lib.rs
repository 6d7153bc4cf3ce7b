//! # pingu-components
//!
//! Leptos UI for the PINGU analytics dashboard: shared layout pieces,
//! ranked list panels and the four pages.

pub mod commercial;
pub mod customer;
pub mod layout;
pub mod lists;
pub mod not_found;
pub mod operations;
pub mod overview;

pub use commercial::Commercial;
pub use customer::Customer;
pub use layout::*;
pub use lists::*;
pub use not_found::NotFound;
pub use operations::Operations;
pub use overview::Overview;

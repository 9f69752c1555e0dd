//! Meal selection engine
//!
//! - [`budget`]: the user-adjustable spending amount and its floor
//! - [`selector`]: greedy one-item-per-store selection under a shared budget

pub mod budget;
pub mod selector;

pub use budget::Budget;
pub use selector::{select, Selection, Summary};

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;

pub use catalog::{Catalog, MenuItem, Store};
pub use engine::budget::Budget;
pub use engine::selector::{select, Selection, Summary};
pub use error::{FinderError, Result};

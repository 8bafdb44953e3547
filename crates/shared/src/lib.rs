pub mod catalog;
mod error;
pub mod mealplan;

pub use error::*;

mod catalog;
mod rng;
mod rules;
mod service;

pub use catalog::*;
pub use rng::*;
pub use rules::*;
pub use service::*;

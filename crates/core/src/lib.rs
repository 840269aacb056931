pub mod analysis;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;

pub use error::Result;

//! Core types shared by the library and its consumers

mod error;
pub mod logging;
mod variant;

pub use error::*;
pub use logging::*;
pub use variant::*;

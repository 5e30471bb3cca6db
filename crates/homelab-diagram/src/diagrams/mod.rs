//! The home-lab flowchart sources
//!
//! Each edition is a plain `&'static str` in Mermaid flowchart syntax. Nothing
//! here interprets the text; a Mermaid renderer does that downstream.

mod full;
mod summary;

pub use full::FULL_DIAGRAM;
pub use summary::SUMMARY_DIAGRAM;

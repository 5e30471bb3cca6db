//! Homelab Diagram - Mermaid sources for the home-lab service map
//!
//! Two editions of one flowchart are provided as string constants: the full
//! service map and a summary of its home automation core. The text is handed
//! unchanged to a Mermaid renderer; this crate never interprets it.
//!
//! # Quick Start
//!
//! ```rust
//! use homelab_diagram::{FULL_DIAGRAM, SUMMARY_DIAGRAM};
//!
//! assert!(FULL_DIAGRAM.contains("Watchtower --> Portainer"));
//! assert!(SUMMARY_DIAGRAM.contains("Z2M -->|MQTT| Mosq"));
//! ```
//!
//! # Choosing at Runtime
//!
//! Consumers that only learn the edition at runtime (a CLI flag, a page
//! parameter) go through [`Variant`]:
//!
//! ```rust
//! use homelab_diagram::{diagram, Variant, SUMMARY_DIAGRAM};
//!
//! let variant: Variant = "summary".parse().unwrap();
//! assert_eq!(diagram(variant), SUMMARY_DIAGRAM);
//! ```

pub mod core;
pub mod diagrams;

pub use crate::core::*;
pub use diagrams::{FULL_DIAGRAM, SUMMARY_DIAGRAM};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DiagramError, Variant};
    pub use crate::diagrams::{FULL_DIAGRAM, SUMMARY_DIAGRAM};
    pub use crate::diagram;
}

/// Mermaid source for the given variant
///
/// Always returns the same `'static` text for the same variant and never
/// fails.
///
/// # Example
/// ```rust
/// use homelab_diagram::{diagram, Variant};
///
/// let text = diagram(Variant::Full);
/// assert!(text.trim_start().starts_with("flowchart TD"));
/// ```
pub fn diagram(variant: Variant) -> &'static str {
    variant.diagram()
}

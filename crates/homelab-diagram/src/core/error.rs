//! Error types
//!
//! Reading a diagram never fails. These errors only come from picking a
//! variant by name at runtime and from the I/O done by consumers.

use thiserror::Error;

/// Errors raised around diagram selection and output
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Unknown diagram variant: {name} (expected one of: full, summary)")]
    UnknownVariant { name: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new unknown variant error
    pub fn unknown_variant(name: String) -> Self {
        Self::UnknownVariant { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_error() {
        let error = DiagramError::unknown_variant("detailed".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown diagram variant"));
        assert!(error_msg.contains("detailed"));
        assert!(error_msg.contains("full, summary"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("read-only filesystem"));
    }
}

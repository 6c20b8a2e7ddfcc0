//! Error types for theme rendering.
//!
//! Rendering follows a "never fail on content" policy: malformed or
//! unmatched directives fall through as literal output text instead of
//! raising. The only hard failure is the recursion depth bound, which is a
//! resource-safety concern rather than a content concern.

use std::fmt;

/// Error type for theme rendering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Block nesting exceeded the configured maximum recursion depth.
    ///
    /// Carries the depth limit that was in effect for the render.
    TemplateTooDeep(usize),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateTooDeep(limit) => {
                write!(f, "template nesting exceeds maximum depth {}", limit)
            }
        }
    }
}

impl std::error::Error for RenderError {}

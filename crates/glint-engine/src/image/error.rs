use std::fmt;

use crate::coords::Rect;

/// Errors surfaced by image operations.
///
/// Texture allocation failure is not an error: it shows up as "nothing drawn".
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// A lifecycle call was made in a state that forbids it, such as releasing
    /// an image that holds no references. Indicates a bug in the caller.
    PreconditionViolation(&'static str),

    /// The operation needs CPU-side pixels, which this image does not have.
    CapabilityUnsupported {
        operation: &'static str,
        kind: &'static str,
    },

    /// A region does not fit inside the image or texture it was carved from.
    RegionOutOfBounds { region: Rect, bounds: Rect },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::PreconditionViolation(msg) => write!(f, "precondition violated: {msg}"),
            ImageError::CapabilityUnsupported { operation, kind } => {
                write!(f, "cannot {operation} on a GPU-backed {kind} image")
            }
            ImageError::RegionOutOfBounds { region, bounds } => write!(
                f,
                "region ({}, {}, {}x{}) is outside ({}, {}, {}x{})",
                region.origin.x,
                region.origin.y,
                region.size.x,
                region.size.y,
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.x,
                bounds.size.y
            ),
        }
    }
}

impl std::error::Error for ImageError {}

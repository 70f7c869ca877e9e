//! Identifier newtypes for ROIs, shapes and images.
//!
//! All three wrap a `u64` and serialize as the bare number. Keeping them
//! distinct stops a shape id from being passed where a ROI key is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! u64_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }
    };
}

u64_id! {
    /// Key of a ROI within a component.
    ///
    /// Client-side ROIs have one too, for ordering; it only reaches the
    /// output record when the ROI came from the server.
    RoiId
}

u64_id! {
    /// Server identifier of a single shape.
    ShapeId
}

u64_id! {
    /// Identifier of the image the ROIs are drawn on.
    ImageId
}

//! An explicit container for a value that may be absent, paired with a [diagnostic](diagnostic::Diagnostic)
//! explaining the absence.

#[macro_use]
mod trace;

pub mod diagnostic;
pub mod nil;
pub mod maybe;
pub mod transform;

#[cfg(feature = "serde")]
pub mod serde_impls;

pub use diagnostic::{Diagnostic, OptionError};
pub use maybe::Maybe;
pub use nil::{is_nil, Nil};
pub use transform::{flat_map, map, map_present};

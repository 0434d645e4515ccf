#![no_std]

extern crate alloc;

pub mod error;
pub use error::Error;

// O module
pub mod o;
pub use o::*; // Allow `maybe::O` and the `some`/`none` shorthands at the crate root

pub mod mutate;

pub mod cmp;

pub mod flatten;
pub use flatten::{flatten, Flatten, Leaf};

pub mod zip;
pub use zip::unzip;

pub mod convert;

#[cfg(feature = "serde")]
mod serde_impls;

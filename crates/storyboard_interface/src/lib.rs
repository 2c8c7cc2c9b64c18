//! Trait definitions for the storyboard generator.
//!
//! The pipeline talks to generative models only through these traits, so any
//! backend (or a test double) can stand in for the hosted services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageModel, StructuringModel};

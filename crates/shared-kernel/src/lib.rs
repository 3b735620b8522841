// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfrastructureError, PresentationError,
    PresentationResult, Result, TallyError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, FlipCount, LineCount, WordCount};

//! Compound-interest projection engine.
//!
//! The engine in [`projection`] is a set of pure `f64` functions: closed-form
//! future value with periodic contributions, inflation adjustment, a bisection
//! goal-timeline solver and an iterative year-by-year breakdown. Everything
//! else in the crate sits around it: input validation and orchestration in
//! [`plan`], cents-rounded export rows in `report`, query-string persistence in
//! `share` and localized amount parsing in `locale`.

pub mod error;
pub mod input;
pub mod plan;
pub mod projection;
pub mod types;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "share")]
pub mod share;

#[cfg(feature = "locale")]
pub mod locale;

pub use error::CompoundError;
pub use input::ProjectionInput;
pub use types::*;

/// Standard result type for all fallible compound-core operations
pub type CompoundResult<T> = Result<T, CompoundError>;

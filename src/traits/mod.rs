//! Conversion traits for error combination.
//!
//! [`IntoConstituent`] is the seam that lets
//! [`CompositeError::combine`](crate::CompositeError::combine) accept native
//! values, foreign errors, and `Option`s of either interchangeably.

pub mod into_constituent;

pub use into_constituent::IntoConstituent;

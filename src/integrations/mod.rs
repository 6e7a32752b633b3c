//! Provides schema support for some external types.

#[doc(hidden)]
pub mod serde;

#[cfg(feature = "chrono")]
pub mod chrono;

//! [`Reflect`](crate::Reflect) implementations for the standard library types.

pub mod base;
pub mod containers;
pub mod pointers;
pub mod scalars;

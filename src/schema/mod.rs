//! Compiled GraphQL schema representation.

pub mod meta;

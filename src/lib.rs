#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Only used in benchmarks.
#[cfg(test)]
use bencher as _;

#[doc(hidden)]
#[macro_use]
mod macros;
mod ast;
pub mod executor;
pub mod integrations;
pub mod reflect;
pub mod schema;
pub mod types;
mod util;
mod value;

#[cfg(test)]
mod executor_tests;

pub use crate::{
    ast::{FromInputValue, InputValue, ToInputValue},
    executor::{Ancestors, CompileError, Config, DuplicatePolicy, Registry, Side},
    reflect::{
        DescriptorFn, Kind, Member, MembersFn, Primitive, Reflect, TypeDescriptor,
        probes::{Defaulted, Described, Identifier, Named, Probes},
        tag::{FieldDescriptor, FieldMeta},
    },
    schema::meta::{
        ArgumentMap, EnumMeta, EnumValue, Field, Fields, InputObjectMeta, ListMeta, MetaType,
        NonNullMeta, ObjectMeta, ScalarMeta, Type, TypeKind,
    },
    types::{
        base::Arguments,
        scalars::{Bytes, ID},
    },
    value::ScalarValue,
};

static_assertions::assert_impl_all!(Type: Send, Sync);
static_assertions::assert_impl_all!(CompileError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(Registry: Send);

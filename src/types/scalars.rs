//! Built-in scalars and the primitive types they represent.

use std::{fmt, time::SystemTime};

use arcstr::{ArcStr, literal};
use derive_more::with_trait::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::{
    ast::{FromInputValue, InputValue, ToInputValue},
    reflect::{
        DescriptorFn, Primitive, Reflect, TypeDescriptor,
        probes::{Described, Identifier},
    },
    schema::meta::{ScalarMeta, Type},
};

/// An ID as defined by the GraphQL specification
///
/// Represented as a string, but can be converted _to_ from an integer as well.
#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, From, Hash, Into, PartialEq, Serialize)]
#[deref(forward)]
#[from(Box<str>, String)]
#[into(Box<str>, String)]
pub struct ID(Box<str>);

impl ID {
    /// Construct a new [`ID`] from anything implementing [`Into`]`<`[`String`]`>`.
    #[must_use]
    pub fn new<S: Into<String>>(value: S) -> Self {
        ID(value.into().into())
    }
}

impl Identifier for ID {
    fn is_id() -> bool {
        true
    }
}

impl Reflect for ID {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::String).identifier::<Self>()
    }
}

impl FromInputValue for ID {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        v.as_string_value()
            .map(Self::new)
            .or_else(|| v.as_int_value().map(|i| Self::new(i.to_string())))
    }
}

impl ToInputValue for ID {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(&*self.0)
    }
}

/// Opaque sequence of bytes, exposed as a `String`.
///
/// A plain [`Vec`]`<`[`u8`]`>` is a list of integers instead.
#[derive(Clone, Debug, Default, Deref, Eq, From, Hash, Into, PartialEq)]
pub struct Bytes(Vec<u8>);

impl Reflect for Bytes {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::Bytes)
    }
}

/// Marker for the built-in `DateTime` scalar.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DateTime;

impl Described for DateTime {
    fn description() -> ArcStr {
        literal!("Combined date and time (with time zone) in RFC 3339 format.")
    }
}

macro_rules! impl_reflect_primitive {
    ($($ty:ty => $primitive:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::primitive::<Self>(Primitive::$primitive)
            }
        }
    )*};
}

impl_reflect_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    str => String,
    String => String,
    ArcStr => String,
    SystemTime => DateTime,
}

/// Types every [`Registry`](crate::Registry) is seeded with.
pub(crate) const SEEDS: &[DescriptorFn] = &[
    <bool as Reflect>::descriptor,
    <i8 as Reflect>::descriptor,
    <i16 as Reflect>::descriptor,
    <i32 as Reflect>::descriptor,
    <i64 as Reflect>::descriptor,
    <isize as Reflect>::descriptor,
    <u8 as Reflect>::descriptor,
    <u16 as Reflect>::descriptor,
    <u32 as Reflect>::descriptor,
    <u64 as Reflect>::descriptor,
    <usize as Reflect>::descriptor,
    <f32 as Reflect>::descriptor,
    <f64 as Reflect>::descriptor,
    <char as Reflect>::descriptor,
    <str as Reflect>::descriptor,
    <String as Reflect>::descriptor,
    <ArcStr as Reflect>::descriptor,
    <Bytes as Reflect>::descriptor,
    <ID as Reflect>::descriptor,
    <SystemTime as Reflect>::descriptor,
];

/// Built-in scalars of a [`Registry`](crate::Registry).
///
/// Each scalar is a single node shared by every field using it.
pub(crate) struct Builtins {
    pub(crate) boolean: Type,
    pub(crate) int: Type,
    pub(crate) float: Type,
    pub(crate) string: Type,
    pub(crate) id: Type,
    pub(crate) date_time: Type,
}

impl Builtins {
    pub(crate) fn new() -> Self {
        let scalar = |name| Type::from(ScalarMeta::new(name).into_meta());
        Self {
            boolean: scalar(literal!("Boolean")),
            int: scalar(literal!("Int")),
            float: scalar(literal!("Float")),
            string: scalar(literal!("String")),
            id: scalar(literal!("ID")),
            date_time: ScalarMeta::new(literal!("DateTime"))
                .description(DateTime::description())
                .specified_by_url(literal!(
                    "https://datatracker.ietf.org/doc/html/rfc3339#section-5.6"
                ))
                .into_meta()
                .into(),
        }
    }

    /// Maps a [`Primitive`] kind to its built-in scalar, if it has one.
    pub(crate) fn for_primitive(&self, primitive: Primitive) -> Option<&Type> {
        use Primitive as P;

        match primitive {
            P::Bool => Some(&self.boolean),
            P::I8 | P::I16 | P::I32 | P::I64 | P::Isize => Some(&self.int),
            P::U8 | P::U16 | P::U32 | P::U64 | P::Usize => Some(&self.int),
            P::F32 | P::F64 => Some(&self.float),
            P::Char | P::String | P::Bytes => Some(&self.string),
            P::DateTime => Some(&self.date_time),
            P::I128 | P::U128 => None,
        }
    }
}

impl fmt::Debug for Builtins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtins").finish_non_exhaustive()
    }
}

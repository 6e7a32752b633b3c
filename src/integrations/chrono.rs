//! Schema support for [`chrono`] crate types.
//!
//! # Supported types
//!
//! | Rust type         | GraphQL scalar |
//! |-------------------|----------------|
//! | [`DateTime`]      | `DateTime`     |
//! | [`NaiveDateTime`] | `DateTime`     |

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

use crate::reflect::{DescriptorFn, Primitive, Reflect, TypeDescriptor};

impl<Tz: TimeZone + 'static> Reflect for DateTime<Tz> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::DateTime)
    }
}

impl Reflect for NaiveDateTime {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::primitive::<Self>(Primitive::DateTime)
    }
}

pub(crate) const SEEDS: &[DescriptorFn] = &[
    <DateTime<Utc> as Reflect>::descriptor,
    <DateTime<FixedOffset> as Reflect>::descriptor,
    <DateTime<Local> as Reflect>::descriptor,
    <NaiveDateTime as Reflect>::descriptor,
];

use std::{fmt, ops::Index};

use indexmap::IndexMap;
use itertools::Itertools as _;

use crate::value::ScalarValue;

/// A JSON-like value that can be passed into the schema: an argument value,
/// an input object field or a default value.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum InputValue {
    Null,
    Scalar(ScalarValue),
    Enum(String),
    List(Vec<InputValue>),
    Object(IndexMap<String, InputValue>),
}

pub(crate) static NULL: InputValue = InputValue::Null;

/// Parses a Rust value out of an [`InputValue`].
pub trait FromInputValue: Sized {
    /// Performs the conversion, returning [`None`] if the value has an
    /// unexpected shape.
    fn from_input_value(v: &InputValue) -> Option<Self>;
}

/// Losslessly clones a Rust value into an [`InputValue`].
pub trait ToInputValue {
    /// Performs the conversion.
    fn to_input_value(&self) -> InputValue;
}

impl InputValue {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value.
    pub fn scalar<T: Into<ScalarValue>>(v: T) -> Self {
        Self::Scalar(v.into())
    }

    /// Construct an enum value.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Construct a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Construct an object value.
    pub fn object<K: Into<String>>(o: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Object(o.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Shorthand form of invoking [`FromInputValue::from_input_value()`].
    pub fn convert<T: FromInputValue>(&self) -> Option<T> {
        T::from_input_value(self)
    }

    /// Does the value represent a `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying scalar value, if present.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying enum value, if present.
    pub fn as_enum_value(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// View the underlying int value, if present.
    pub fn as_int_value(&self) -> Option<i32> {
        self.as_scalar().and_then(ScalarValue::as_int)
    }

    /// View the underlying float value, if present.
    pub fn as_float_value(&self) -> Option<f64> {
        self.as_scalar().and_then(ScalarValue::as_float)
    }

    /// View the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::as_str)
    }

    /// View the underlying boolean value, if present.
    pub fn as_bool_value(&self) -> Option<bool> {
        self.as_scalar().and_then(ScalarValue::as_bool)
    }

    /// View the underlying list, if present.
    pub fn to_list_value(&self) -> Option<&[Self]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// View the underlying object fields, if present.
    pub fn to_object_value(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up a field of an object value.
    ///
    /// Returns [`None`] for missing fields and for non-object values.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.to_object_value().and_then(|o| o.get(key))
    }
}

/// Object field access, yielding `null` for anything that isn't there.
impl Index<&str> for InputValue {
    type Output = Self;

    fn index(&self, key: &str) -> &Self {
        self.get(key).unwrap_or(&NULL)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(l) => write!(f, "[{}]", l.iter().format(", ")),
            Self::Object(o) => write!(
                f,
                "{{{}}}",
                o.iter().format_with(", ", |(k, v), f| f(&format_args!("{k}: {v}"))),
            ),
        }
    }
}

impl FromInputValue for InputValue {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        Some(v.clone())
    }
}

impl FromInputValue for String {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        v.as_string_value().map(Into::into)
    }
}

impl FromInputValue for bool {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        v.as_bool_value()
    }
}

impl FromInputValue for i32 {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        v.as_int_value()
    }
}

impl FromInputValue for f64 {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        v.as_float_value()
    }
}

impl<T: FromInputValue> FromInputValue for Option<T> {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        match v {
            InputValue::Null => Some(None),
            v => v.convert().map(Some),
        }
    }
}

impl<T: FromInputValue> FromInputValue for Vec<T> {
    fn from_input_value(v: &InputValue) -> Option<Self> {
        match v {
            InputValue::List(l) => l.iter().map(T::from_input_value).collect(),
            // A single item is coerced into a list of one.
            v => v.convert().map(|item| vec![item]),
        }
    }
}

impl ToInputValue for InputValue {
    fn to_input_value(&self) -> InputValue {
        self.clone()
    }
}

impl ToInputValue for str {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(self)
    }
}

impl ToInputValue for String {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(self.as_str())
    }
}

impl ToInputValue for bool {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(*self)
    }
}

impl ToInputValue for i32 {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(*self)
    }
}

impl ToInputValue for f64 {
    fn to_input_value(&self) -> InputValue {
        InputValue::scalar(*self)
    }
}

impl<T: ToInputValue> ToInputValue for Option<T> {
    fn to_input_value(&self) -> InputValue {
        match self {
            Some(v) => v.to_input_value(),
            None => InputValue::null(),
        }
    }
}

impl<T: ToInputValue> ToInputValue for [T] {
    fn to_input_value(&self) -> InputValue {
        InputValue::list(self.iter().map(T::to_input_value).collect())
    }
}

impl<T: ToInputValue> ToInputValue for Vec<T> {
    fn to_input_value(&self) -> InputValue {
        self.as_slice().to_input_value()
    }
}

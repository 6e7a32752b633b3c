//! Field arguments filled from compiled argument lists.

use std::ops::Index;

use indexmap::IndexMap;

use crate::{
    ast::{FromInputValue, InputValue},
    schema::meta::ArgumentMap,
};

/// Field argument container, filled according to an [`ArgumentMap`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    args: IndexMap<String, InputValue>,
}

impl Arguments {
    /// Builds [`Arguments`] out of the provided `args`, completing them with
    /// the defaults of `meta_args`.
    ///
    /// A declared argument that is missing or `null` takes its default value,
    /// or `null` if it has none.
    pub fn new(mut args: IndexMap<String, InputValue>, meta_args: &ArgumentMap) -> Self {
        for (name, arg) in meta_args {
            if args.get(name.as_str()).is_none_or(InputValue::is_null) {
                let value = arg.default_value.clone().unwrap_or_else(InputValue::null);
                args.insert(name.to_string(), value);
            }
        }

        Self { args }
    }

    /// Builds [`Arguments`] out of an object [`InputValue`], e.g. a
    /// deserialized request.
    ///
    /// Returns `None` if the `value` is not an object.
    pub fn from_input_value(value: &InputValue, meta_args: &ArgumentMap) -> Option<Self> {
        let args = value.to_object_value()?.clone();
        Some(Self::new(args, meta_args))
    }

    /// Gets and converts an argument into the desired type.
    ///
    /// If the argument is found, or a default argument has been provided,
    /// the [`InputValue`] will be converted into the type `T`.
    ///
    /// Returns `Some` if the argument is present _and_ type conversion
    /// succeeds.
    pub fn get<T: FromInputValue>(&self, key: &str) -> Option<T> {
        self.args.get(key).and_then(InputValue::convert)
    }

    /// Gets the raw [`InputValue`] of an argument.
    pub fn get_input_value(&self, key: &str) -> Option<&InputValue> {
        self.args.get(key)
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Indicates whether there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates over argument names and values, in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, InputValue> {
        self.args.iter()
    }
}

impl Index<&str> for Arguments {
    type Output = InputValue;

    fn index(&self, key: &str) -> &InputValue {
        self.args.get(key).unwrap_or(&crate::ast::NULL)
    }
}

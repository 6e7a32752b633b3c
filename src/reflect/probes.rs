//! Optional capabilities a described type may provide to customize its
//! schema representation.
//!
//! A type opts into a capability by implementing the corresponding trait and
//! recording it in its [`TypeDescriptor`](super::TypeDescriptor), e.g. via
//! [`TypeDescriptor::named()`](super::TypeDescriptor::named).

use std::fmt;

use arcstr::ArcStr;

use crate::ast::InputValue;

/// Overrides the schema name of a type.
pub trait Named {
    /// Returns the name to expose the type under.
    fn name() -> ArcStr;
}

/// Provides a description of a type.
pub trait Described {
    /// Returns the description of the type.
    fn description() -> ArcStr;
}

/// Provides the value a field or an argument of this type takes when omitted.
pub trait Defaulted {
    /// Returns the default value.
    fn default_value() -> InputValue;
}

/// Marks a primitive type as an identifier, exposing it as `ID` in output
/// types.
pub trait Identifier {
    /// Indicates whether the type is an identifier.
    fn is_id() -> bool;
}

/// Set of capabilities a type opted into.
#[derive(Clone, Copy, Default)]
pub struct Probes {
    pub(crate) name: Option<fn() -> ArcStr>,
    pub(crate) description: Option<fn() -> ArcStr>,
    pub(crate) default_value: Option<fn() -> InputValue>,
    pub(crate) is_id: Option<fn() -> bool>,
}

impl Probes {
    /// Indicates whether the type provides [`Named`].
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Indicates whether the type provides [`Described`].
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// Indicates whether the type provides [`Defaulted`].
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    /// Indicates whether the type provides [`Identifier`].
    pub fn has_is_id(&self) -> bool {
        self.is_id.is_some()
    }
}

impl fmt::Debug for Probes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probes")
            .field("name", &self.has_name())
            .field("description", &self.has_description())
            .field("default_value", &self.has_default_value())
            .field("is_id", &self.has_is_id())
            .finish()
    }
}

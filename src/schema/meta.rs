//! Types used to describe a compiled GraphQL schema.

use std::{fmt, ops::Deref, sync::Arc};

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::ast::InputValue;

/// Ordered mapping from an exposed field name to its [`Field`].
pub type Fields = IndexMap<ArcStr, Field>;

/// Ordered mapping from an argument name to its definition.
pub type ArgumentMap = IndexMap<ArcStr, Field>;

/// Shared handle to a compiled [`MetaType`].
///
/// Cloning is cheap and preserves identity, so two fields referencing the
/// same compiled type hold the very same node (see [`Type::ptr_eq()`]).
#[derive(Clone, Debug)]
pub struct Type(Arc<MetaType>);

/// GraphQL type kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    /// Leaf values, such as `Int` or `String`.
    Scalar,
    /// Leaf values restricted to a fixed set.
    Enum,
    /// Output object with fields.
    Object,
    /// Object passed _into_ the system.
    InputObject,
    /// List of another type.
    List,
    /// Wrapper forbidding `null` for another type.
    NonNull,
}

/// Generic type metadata.
#[derive(Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum MetaType {
    Scalar(ScalarMeta),
    Enum(EnumMeta),
    Object(ObjectMeta),
    InputObject(InputObjectMeta),
    List(ListMeta),
    NonNull(NonNullMeta),
}

/// Scalar type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
}

/// Enum type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue>,
}

/// Metadata for a single value in an enum.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    /// The name of the enum value.
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The optional description of the enum value.
    pub description: Option<ArcStr>,
    /// Internal value this enum value stands for, if any.
    pub value: Option<InputValue>,
}

/// Object type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Fields,
}

/// Input object metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Fields,
}

/// List type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ListMeta {
    #[doc(hidden)]
    pub of_type: Type,
}

/// Non-null type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullMeta {
    #[doc(hidden)]
    pub of_type: Type,
}

/// Metadata for a field of an object or input object, or for an argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
}

impl Type {
    /// Wraps the provided [`MetaType`] into a new node.
    pub fn new(meta: MetaType) -> Self {
        Self(Arc::new(meta))
    }

    /// Returns the [`MetaType`] behind this node.
    pub fn meta(&self) -> &MetaType {
        &self.0
    }

    /// Wraps this node into a list.
    #[must_use]
    pub fn list(self) -> Self {
        ListMeta::new(self).into_meta().into()
    }

    /// Wraps this node into `n` nested lists.
    #[must_use]
    pub fn list_n(self, n: usize) -> Self {
        (0..n).fold(self, |ty, _| ty.list())
    }

    /// Forbids `null` for this node.
    ///
    /// Does nothing if the node is already non-null.
    #[must_use]
    pub fn non_null(self) -> Self {
        if self.is_non_null() {
            self
        } else {
            NonNullMeta::new(self).into_meta().into()
        }
    }

    /// Indicates whether this node is a non-null wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(*self.0, MetaType::NonNull(_))
    }

    /// Strips a non-null wrapper, if any.
    pub fn nullable(&self) -> &Self {
        match &*self.0 {
            MetaType::NonNull(NonNullMeta { of_type }) => of_type,
            _ => self,
        }
    }

    /// Returns the innermost named node, stripping all list and non-null
    /// wrappers.
    pub fn innermost(&self) -> &Self {
        match &*self.0 {
            MetaType::List(ListMeta { of_type }) | MetaType::NonNull(NonNullMeta { of_type }) => {
                of_type.innermost()
            }
            _ => self,
        }
    }

    /// Indicates whether both handles point to the very same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Type {
    type Target = MetaType;

    fn deref(&self) -> &MetaType {
        &self.0
    }
}

impl From<MetaType> for Type {
    fn from(meta: MetaType) -> Self {
        Self::new(meta)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            MetaType::List(ListMeta { of_type }) => write!(f, "[{of_type}]"),
            MetaType::NonNull(NonNullMeta { of_type }) => write!(f, "{of_type}!"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl MetaType {
    /// Access the name of the type, if applicable.
    ///
    /// Lists and non-null wrappers don't have names.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. }) => Some(name),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Access the description of the type, if applicable.
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Returns the [`TypeKind`] of this type.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Enum(_) => TypeKind::Enum,
            Self::Object(_) => TypeKind::Object,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::List(_) => TypeKind::List,
            Self::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Returns the wrapped type of a list or non-null wrapper.
    pub fn of_type(&self) -> Option<&Type> {
        match self {
            Self::List(ListMeta { of_type }) | Self::NonNull(NonNullMeta { of_type }) => {
                Some(of_type)
            }
            _ => None,
        }
    }

    /// Returns the fields of an object or an input object.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Self::Object(ObjectMeta { fields, .. })
            | Self::InputObject(InputObjectMeta {
                input_fields: fields,
                ..
            }) => Some(fields),
            _ => None,
        }
    }

    /// Access a field's metadata given its name.
    ///
    /// Only objects have fields. This method always returns `None` for other
    /// types.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Object(ObjectMeta { fields, .. }) => fields.get(name),
            _ => None,
        }
    }

    /// Access an input field's metadata given its name.
    ///
    /// Only input objects have input fields. This method always returns
    /// `None` for other types.
    pub fn input_field_by_name(&self, name: &str) -> Option<&Field> {
        match self {
            Self::InputObject(InputObjectMeta { input_fields, .. }) => input_fields.get(name),
            _ => None,
        }
    }

    /// Returns true if the type can occur in leaf positions in queries.
    ///
    /// Only enums and scalars are leaf types.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    /// Returns true if the type can be used in input positions, e.g.
    /// arguments or variables.
    ///
    /// Wrappers are input types when their innermost type is.
    pub fn is_input(&self) -> bool {
        match self {
            Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_) => true,
            Self::Object(_) => false,
            Self::List(ListMeta { of_type }) | Self::NonNull(NonNullMeta { of_type }) => {
                of_type.is_input()
            }
        }
    }

    /// Returns true if the type is one of the scalars every GraphQL schema
    /// comes with.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Scalar(ScalarMeta { name, .. })
                if ["Boolean", "String", "Int", "Float", "ID"].contains(&name.as_str()),
        )
    }
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            specified_by_url: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: ArcStr) -> Self {
        self.specified_by_url = Some(url);
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Scalar(self)
    }
}

impl EnumMeta {
    /// Builds a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    pub fn new(name: ArcStr, values: &[EnumValue]) -> Self {
        Self {
            name,
            description: None,
            values: values.to_vec(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Enum(self)
    }
}

impl EnumValue {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            value: None,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the internal value this [`EnumValue`] stands for.
    #[must_use]
    pub fn value(mut self, value: InputValue) -> Self {
        self.value = Some(value);
        self
    }
}

impl ObjectMeta {
    /// Builds a new [`ObjectMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(name: ArcStr, fields: Fields) -> Self {
        Self {
            name,
            description: None,
            fields,
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Object(self)
    }
}

impl InputObjectMeta {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(name: ArcStr, input_fields: Fields) -> Self {
        Self {
            name,
            description: None,
            input_fields,
        }
    }

    /// Sets the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::InputObject(self)
    }
}

impl ListMeta {
    /// Builds a new [`ListMeta`] type by wrapping the specified [`Type`].
    pub fn new(of_type: Type) -> Self {
        Self { of_type }
    }

    /// Wraps this [`ListMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::List(self)
    }
}

impl NonNullMeta {
    /// Builds a new [`NonNullMeta`] type by wrapping the specified [`Type`].
    ///
    /// Prefer [`Type::non_null()`], which never nests non-null wrappers.
    pub fn new(of_type: Type) -> Self {
        Self { of_type }
    }

    /// Wraps this [`NonNullMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::NonNull(self)
    }
}

impl Field {
    /// Builds a new [`Field`] of the given [`Type`] with the given `name`.
    pub fn new(name: ArcStr, field_type: Type) -> Self {
        Self {
            name,
            description: None,
            field_type,
            default_value: None,
        }
    }

    /// Sets the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the default value of this [`Field`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }
}

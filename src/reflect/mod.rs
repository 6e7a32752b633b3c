//! Reflection of Rust types into [`TypeDescriptor`]s the compiler can walk.
//!
//! Rust has no runtime reflection, so every type taking part in a schema
//! describes itself by implementing [`Reflect`]. Implementations for the
//! standard library types live in [`crate::types`].

pub mod probes;
pub mod tag;

use std::{
    any::{self, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

use arcstr::ArcStr;

use crate::{ast::InputValue, util::short_type_name};

use self::probes::{Defaulted, Described, Identifier, Named, Probes};

/// Lazily produced [`TypeDescriptor`].
///
/// Laziness lets a type mention itself among its own members.
pub type DescriptorFn = fn() -> TypeDescriptor;

/// Lazily produced list of [`Member`]s of a composite type.
pub type MembersFn = fn() -> Vec<Member>;

/// Primary trait used to expose Rust types to the schema compiler.
///
/// # Example
///
/// ```rust
/// use juniper_reflect::{Member, Reflect, TypeDescriptor};
///
/// struct User {
///     id: u64,
///     name: String,
///     friends: Vec<Box<User>>,
/// }
///
/// impl Reflect for User {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::composite::<Self>(|| {
///             vec![
///                 Member::new::<u64>("id").tag(r#"graphql:",id""#),
///                 Member::new::<String>("name"),
///                 Member::new::<Vec<Box<User>>>("friends").tag(r#"graphql:",nullable""#),
///             ]
///         })
///     }
/// }
/// ```
pub trait Reflect: 'static {
    /// Returns the [`TypeDescriptor`] of this type.
    ///
    /// Pointer-like wrappers return the descriptor of the type they point to.
    fn descriptor() -> TypeDescriptor;
}

/// Canonical identity of a Rust type, with pointer-like indirection removed.
///
/// Two descriptors are equal if and only if they describe the same type, so
/// a descriptor is used as the key of every cache in a
/// [`Registry`](crate::Registry).
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    type_name: &'static str,
    kind: Kind,
    probes: Probes,
}

/// Structural shape of a described type.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    /// Leaf value of a built-in kind.
    Primitive(Primitive),
    /// Structure with named members.
    Composite(MembersFn),
    /// Homogeneous sequence of the described element type.
    Sequence(DescriptorFn),
    /// Key-value mapping. Has no GraphQL counterpart.
    Map,
    /// Zero-sized value. Has no GraphQL counterpart.
    Unit,
}

/// Built-in leaf kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum Primitive {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    Bytes,
    DateTime,
}

/// Member of a composite type.
#[derive(Clone, Copy, Debug)]
pub struct Member {
    name: &'static str,
    ty: DescriptorFn,
    embedded: bool,
    tag: &'static str,
}

impl TypeDescriptor {
    /// Creates a descriptor of `T` having the provided [`Kind`].
    pub fn new<T: ?Sized + 'static>(kind: Kind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            kind,
            probes: Probes::default(),
        }
    }

    /// Creates a descriptor of a primitive `T`.
    pub fn primitive<T: ?Sized + 'static>(primitive: Primitive) -> Self {
        Self::new::<T>(Kind::Primitive(primitive))
    }

    /// Creates a descriptor of a composite `T` with the provided `members`.
    pub fn composite<T: ?Sized + 'static>(members: MembersFn) -> Self {
        Self::new::<T>(Kind::Composite(members))
    }

    /// Creates a descriptor of a sequence `T` of `E` elements.
    pub fn sequence<T: ?Sized + 'static, E: Reflect + ?Sized>() -> Self {
        Self::new::<T>(Kind::Sequence(E::descriptor))
    }

    /// Returns the descriptor of `T`.
    pub fn of<T: Reflect + ?Sized>() -> Self {
        T::descriptor()
    }

    /// Returns the descriptor of the type of the provided `value`.
    pub fn of_val<T: Reflect + ?Sized>(value: &T) -> Self {
        _ = value;
        T::descriptor()
    }

    /// Records that the described type provides its own name via [`Named`].
    #[must_use]
    pub fn named<T: Named + ?Sized>(mut self) -> Self {
        self.probes.name = Some(T::name);
        self
    }

    /// Records that the described type provides a description via
    /// [`Described`].
    #[must_use]
    pub fn described<T: Described + ?Sized>(mut self) -> Self {
        self.probes.description = Some(T::description);
        self
    }

    /// Records that the described type provides a default value via
    /// [`Defaulted`].
    #[must_use]
    pub fn defaulted<T: Defaulted + ?Sized>(mut self) -> Self {
        self.probes.default_value = Some(T::default_value);
        self
    }

    /// Records that the described type may mark itself as an identifier via
    /// [`Identifier`].
    #[must_use]
    pub fn identifier<T: Identifier + ?Sized>(mut self) -> Self {
        self.probes.is_id = Some(T::is_id);
        self
    }

    /// Returns the [`TypeId`] of the described type.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the full Rust path of the described type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the Rust name of the described type, without module paths.
    pub fn declared_name(&self) -> String {
        short_type_name(self.type_name)
    }

    /// Returns the [`Kind`] of the described type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the probes the described type opted into.
    pub fn probes(&self) -> &Probes {
        &self.probes
    }

    /// Indicates whether the described type has named members.
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, Kind::Composite(_))
    }

    /// Returns the members of a composite type, or nothing otherwise.
    pub fn members(&self) -> Vec<Member> {
        match self.kind {
            Kind::Composite(members) => members(),
            _ => vec![],
        }
    }

    /// Strips all sequence layers, returning the element descriptor and the
    /// number of stripped layers.
    pub fn unwrap_sequences(self) -> (Self, usize) {
        let mut dims = 0;
        let mut base = self;
        while let Kind::Sequence(elem) = base.kind {
            dims += 1;
            base = elem();
        }
        (base, dims)
    }

    /// Returns the schema name of the described type.
    ///
    /// That's the [`Named`] probe result, if provided, or the
    /// [declared name](Self::declared_name) otherwise.
    pub fn resolved_name(&self) -> ArcStr {
        self.probes
            .name
            .map_or_else(|| self.declared_name().into(), |name| name())
    }

    /// Returns the [`Described`] probe result, if provided and not empty.
    pub fn description(&self) -> Option<ArcStr> {
        self.probes
            .description
            .map(|description| description())
            .filter(|d| !d.is_empty())
    }

    /// Returns the [`Defaulted`] probe result, if provided.
    pub fn default_value(&self) -> Option<InputValue> {
        self.probes.default_value.map(|default| default())
    }

    /// Returns the [`Identifier`] probe result, or `false` if not provided.
    pub fn is_id(&self) -> bool {
        self.probes.is_id.is_some_and(|is_id| is_id())
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declared_name())
    }
}

impl Kind {
    /// Short human-readable name of this [`Kind`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.as_str(),
            Self::Composite(_) => "struct",
            Self::Sequence(_) => "sequence",
            Self::Map => "map",
            Self::Unit => "unit",
        }
    }
}

impl Primitive {
    /// Short human-readable name of this [`Primitive`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::DateTime => "datetime",
        }
    }
}

impl Member {
    /// Declares a regular member named `name` of type `T`.
    pub fn new<T: Reflect + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            ty: T::descriptor,
            embedded: false,
            tag: "",
        }
    }

    /// Declares an embedded member named `name` of type `T`.
    ///
    /// Fields of an embedded composite are promoted into its owner.
    pub fn embedded<T: Reflect + ?Sized>(name: &'static str) -> Self {
        Self {
            embedded: true,
            ..Self::new::<T>(name)
        }
    }

    /// Sets the raw annotation string of this member, e.g.
    /// `graphql:"name,nullable"`.
    #[must_use]
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Returns the declared name of this member.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeDescriptor`] of this member's type.
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.ty)()
    }

    /// Indicates whether this member is embedded.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw annotation string of this member.
    pub fn raw_tag(&self) -> &'static str {
        self.tag
    }
}

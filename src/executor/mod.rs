//! Type registry and the compiler of Rust types into schema types.

mod ancestors;
mod compile;
pub mod config;

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use fnv::FnvHashMap;
use itertools::Itertools as _;

use crate::{
    ast::InputValue,
    reflect::{Kind, Reflect, TypeDescriptor},
    schema::meta::{EnumMeta, EnumValue, MetaType, ScalarMeta, Type},
    types::scalars::{Builtins, SEEDS},
};

pub use self::{
    ancestors::Ancestors,
    config::{Config, DuplicatePolicy},
};

/// Side of the schema a type is compiled for.
///
/// A type compiles to an object on the output side and to an input object on
/// the input side, and each side has its own cache.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Side {
    /// Types of fields returned by the schema.
    #[display("output")]
    Output,
    /// Types of arguments and input fields.
    #[display("input")]
    Input,
}

/// Error occurring while compiling a type.
///
/// Any of these aborts the whole compilation it occurred in, as it indicates
/// a defect in the described types rather than a runtime condition.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum CompileError {
    /// A root entry point was handed a type without named members.
    #[display("`{type_name}` cannot be compiled as a root type: it's not a struct")]
    InvalidRootType {
        /// Name of the offending type.
        type_name: ArcStr,
    },

    /// A type is neither registered nor has a built-in mapping.
    #[display("`{type_name}` of kind `{kind}` has no GraphQL representation")]
    UnsupportedKind {
        /// Name of the offending type.
        type_name: ArcStr,
        /// Kind of the offending type.
        kind: &'static str,
    },

    /// A type is reachable from its own members.
    #[display("`{type_name}` contains itself: {}", path.iter().format(" -> "))]
    CircularReference {
        /// Name of the offending type.
        type_name: ArcStr,
        /// Types along the cycle, outermost first, ending with the offending
        /// one.
        path: Vec<ArcStr>,
    },

    /// A custom type was registered for a sequence, which always compiles to
    /// a list of its element type.
    #[display("`{type_name}` is a sequence and cannot be registered: register its element type")]
    SequenceRegistration {
        /// Name of the offending type.
        type_name: ArcStr,
    },

    /// A custom type was registered for an already known type while
    /// [`DuplicatePolicy::Reject`] is in effect.
    #[display("`{type_name}` is already registered")]
    DuplicateType {
        /// Name of the offending type.
        type_name: ArcStr,
    },
}

impl CompileError {
    pub(crate) fn invalid_root(ty: &TypeDescriptor) -> Self {
        Self::InvalidRootType {
            type_name: ty.declared_name().into(),
        }
    }

    pub(crate) fn unsupported(ty: &TypeDescriptor) -> Self {
        Self::UnsupportedKind {
            type_name: ty.declared_name().into(),
            kind: ty.kind().as_str(),
        }
    }

    pub(crate) fn circular(ty: &TypeDescriptor, ancestors: &Ancestors<'_>) -> Self {
        let type_name = ArcStr::from(ty.declared_name());
        let mut path = ancestors.path();
        path.push(type_name.clone());
        Self::CircularReference { type_name, path }
    }

    /// Returns the name of the type this error is about.
    pub fn type_name(&self) -> &str {
        match self {
            Self::InvalidRootType { type_name }
            | Self::UnsupportedKind { type_name, .. }
            | Self::CircularReference { type_name, .. }
            | Self::SequenceRegistration { type_name }
            | Self::DuplicateType { type_name } => type_name,
        }
    }
}

/// Compilation session: memoizes compiled schema types of Rust types.
///
/// Compiled nodes are shared: every field of the same type references the
/// very same [`Type`], and compiling a type again returns its cached node.
///
/// Mutating operations take `&mut self`, so a [`Registry`] shared between
/// threads has to be guarded by a lock for the whole session. Compiled
/// [`Type`]s are immutable and may be shared freely.
pub struct Registry {
    config: Config,
    builtins: Builtins,
    outputs: FnvHashMap<TypeDescriptor, Type>,
    inputs: FnvHashMap<TypeDescriptor, Type>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a new [`Registry`] with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new [`Registry`] with the provided [`Config`].
    ///
    /// Both sides are seeded with the built-in scalars of the primitive
    /// types.
    pub fn with_config(config: Config) -> Self {
        let mut registry = Self {
            config,
            builtins: Builtins::new(),
            outputs: FnvHashMap::default(),
            inputs: FnvHashMap::default(),
        };

        let seeds = SEEDS.iter();
        #[cfg(feature = "chrono")]
        let seeds = seeds.chain(crate::integrations::chrono::SEEDS);
        for seed in seeds {
            let ty = seed();
            let Kind::Primitive(primitive) = ty.kind() else {
                continue;
            };
            let scalar = if ty.is_id() {
                Some(&registry.builtins.id)
            } else {
                registry.builtins.for_primitive(primitive)
            };
            if let Some(scalar) = scalar.cloned() {
                registry.inputs.insert(ty, scalar.clone());
                registry.outputs.insert(ty, scalar);
            }
        }
        registry
    }

    /// Returns the [`Config`] of this [`Registry`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a custom scalar to represent `T` on both sides, bypassing
    /// compilation of `T` entirely.
    ///
    /// # Errors
    ///
    /// - [`CompileError::SequenceRegistration`] if `T` is a sequence.
    /// - [`CompileError::DuplicateType`] if `T` is known already and
    ///   [`DuplicatePolicy::Reject`] is in effect. Otherwise, the first
    ///   registration wins and its node is returned.
    pub fn register_scalar<T: Reflect + ?Sized>(
        &mut self,
        meta: ScalarMeta,
    ) -> Result<Type, CompileError> {
        self.register(T::descriptor(), meta.into_meta())
    }

    /// Registers a custom enum to represent `T` on both sides, bypassing
    /// compilation of `T` entirely.
    ///
    /// # Errors
    ///
    /// - [`CompileError::SequenceRegistration`] if `T` is a sequence.
    /// - [`CompileError::DuplicateType`] if `T` is known already and
    ///   [`DuplicatePolicy::Reject`] is in effect. Otherwise, the first
    ///   registration wins and its node is returned.
    pub fn register_enum<T: Reflect + ?Sized>(
        &mut self,
        meta: EnumMeta,
    ) -> Result<Type, CompileError> {
        self.register(T::descriptor(), meta.into_meta())
    }

    /// Registers an enum of the provided `values` to represent `T`, named and
    /// described by `T` itself.
    ///
    /// Each value maps an enum value name to the value it stands for.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::register_enum()`].
    pub fn register_enum_values<T, N>(
        &mut self,
        values: impl IntoIterator<Item = (N, InputValue)>,
    ) -> Result<Type, CompileError>
    where
        T: Reflect + ?Sized,
        N: Into<ArcStr>,
    {
        let ty = T::descriptor();
        let values = values
            .into_iter()
            .map(|(name, value)| EnumValue::new(name.into()).value(value))
            .collect::<Vec<_>>();

        let mut meta = EnumMeta::new(ty.resolved_name(), &values);
        if let Some(description) = ty.description() {
            meta = meta.description(description);
        }
        self.register(ty, meta.into_meta())
    }

    fn register(&mut self, ty: TypeDescriptor, meta: MetaType) -> Result<Type, CompileError> {
        if let Kind::Sequence(_) = ty.kind() {
            return Err(CompileError::SequenceRegistration {
                type_name: ty.declared_name().into(),
            });
        }
        if let Some(existing) = self.outputs.get(&ty).or_else(|| self.inputs.get(&ty)) {
            return match self.config.duplicates {
                DuplicatePolicy::Ignore => {
                    __warn!(
                        type_name = ty.type_name(),
                        "type is already registered, ignoring"
                    );
                    Ok(existing.clone())
                }
                DuplicatePolicy::Reject => Err(CompileError::DuplicateType {
                    type_name: ty.declared_name().into(),
                }),
            };
        }

        let node = Type::from(meta);
        __debug!(
            type_name = ty.type_name(),
            node = %node,
            "registered custom type"
        );
        self.inputs.insert(ty, node.clone());
        self.outputs.insert(ty, node.clone());
        Ok(node)
    }

    /// Looks up the node compiled or registered for the provided type on the
    /// provided [`Side`].
    pub fn lookup(&self, side: Side, ty: &TypeDescriptor) -> Option<&Type> {
        self.cache(side).get(ty)
    }

    /// Looks up the node compiled or registered for `T` on the provided
    /// [`Side`].
    pub fn get_type<T: Reflect + ?Sized>(&self, side: Side) -> Option<&Type> {
        self.lookup(side, &T::descriptor())
    }

    /// Returns the number of nodes known on the provided [`Side`], including
    /// the built-in ones.
    pub fn len(&self, side: Side) -> usize {
        self.cache(side).len()
    }

    fn cache(&self, side: Side) -> &FnvHashMap<TypeDescriptor, Type> {
        match side {
            Side::Output => &self.outputs,
            Side::Input => &self.inputs,
        }
    }

    fn cache_mut(&mut self, side: Side) -> &mut FnvHashMap<TypeDescriptor, Type> {
        match side {
            Side::Output => &mut self.outputs,
            Side::Input => &mut self.inputs,
        }
    }
}

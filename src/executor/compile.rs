use crate::{
    reflect::{Kind, Primitive, Reflect, TypeDescriptor, tag::FieldDescriptor},
    schema::meta::{ArgumentMap, Field, Fields, InputObjectMeta, ObjectMeta, Type},
};

use super::{Ancestors, CompileError, Registry, Side};

impl Registry {
    /// Compiles the provided type for the provided [`Side`], returning its
    /// cached node if it was compiled already.
    ///
    /// Sequences compile to lists of their element type, so `Vec<Vec<i32>>`
    /// gives `[[Int]]`.
    ///
    /// # Errors
    ///
    /// If the type, or any type reachable from its members, has no GraphQL
    /// representation or contains itself. Nothing is cached for the failed
    /// types, while the nodes compiled before the failure stay valid.
    pub fn compile(&mut self, side: Side, ty: TypeDescriptor) -> Result<Type, CompileError> {
        self.resolve(side, ty, &Ancestors::Root)
    }

    /// Compiles `T` into an object.
    ///
    /// # Errors
    ///
    /// - [`CompileError::InvalidRootType`] if `T` has no named members.
    /// - Same as [`Registry::compile()`] otherwise.
    pub fn compile_object<T: Reflect + ?Sized>(&mut self) -> Result<Type, CompileError> {
        self.compile_root(Side::Output, T::descriptor())
    }

    /// Compiles the type of the provided `value` into an object.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::compile_object()`].
    pub fn compile_object_of<T: Reflect + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<Type, CompileError> {
        self.compile_root(Side::Output, TypeDescriptor::of_val(value))
    }

    /// Compiles `T` into an input object.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::compile_object()`].
    pub fn compile_input<T: Reflect + ?Sized>(&mut self) -> Result<Type, CompileError> {
        self.compile_root(Side::Input, T::descriptor())
    }

    /// Compiles the type of the provided `value` into an input object.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::compile_object()`].
    pub fn compile_input_of<T: Reflect + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<Type, CompileError> {
        self.compile_root(Side::Input, TypeDescriptor::of_val(value))
    }

    /// Compiles the members of `T` into field arguments.
    ///
    /// Unlike [`Registry::compile_input()`], no input object is built for `T`
    /// itself: each member becomes an argument on its own, and the members
    /// of embedded members are promoted.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::compile_object()`].
    pub fn compile_arguments<T: Reflect + ?Sized>(
        &mut self,
    ) -> Result<ArgumentMap, CompileError> {
        self.arguments(T::descriptor())
    }

    /// Compiles the members of the type of the provided `value` into field
    /// arguments.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::compile_object()`].
    pub fn compile_arguments_of<T: Reflect + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<ArgumentMap, CompileError> {
        self.arguments(TypeDescriptor::of_val(value))
    }

    fn compile_root(&mut self, side: Side, ty: TypeDescriptor) -> Result<Type, CompileError> {
        if !ty.is_composite() {
            return Err(CompileError::invalid_root(&ty));
        }
        self.compile(side, ty)
    }

    fn arguments(&mut self, ty: TypeDescriptor) -> Result<ArgumentMap, CompileError> {
        if !ty.is_composite() {
            return Err(CompileError::invalid_root(&ty));
        }

        let mut args = ArgumentMap::new();
        for member in ty.members() {
            let field = FieldDescriptor::new(ty, member, &self.config.tag_key);
            self.add_field(Side::Input, &field, &Ancestors::Root, &mut args)?;
        }
        Ok(args)
    }

    fn resolve(
        &mut self,
        side: Side,
        ty: TypeDescriptor,
        ancestors: &Ancestors<'_>,
    ) -> Result<Type, CompileError> {
        let (base, dims) = ty.unwrap_sequences();
        Ok(self.resolve_base(side, base, ancestors)?.list_n(dims))
    }

    /// Compiles a type stripped of its sequence layers.
    fn resolve_base(
        &mut self,
        side: Side,
        ty: TypeDescriptor,
        ancestors: &Ancestors<'_>,
    ) -> Result<Type, CompileError> {
        if let Some(node) = self.lookup(side, &ty) {
            __trace!(%side, type_name = ty.type_name(), "cache hit");
            return Ok(node.clone());
        }
        if ancestors.contains(&ty) {
            return Err(CompileError::circular(&ty, ancestors));
        }

        let node = match ty.kind() {
            Kind::Composite(_) => self.composite(side, &ty, ancestors)?,
            Kind::Primitive(primitive) => self.primitive(side, &ty, primitive)?,
            Kind::Sequence(_) => return self.resolve(side, ty, ancestors),
            Kind::Map | Kind::Unit => return Err(CompileError::unsupported(&ty)),
        };

        __debug!(%side, type_name = ty.type_name(), node = %node, "compiled type");
        self.cache_mut(side).insert(ty, node.clone());
        Ok(node)
    }

    fn composite(
        &mut self,
        side: Side,
        ty: &TypeDescriptor,
        ancestors: &Ancestors<'_>,
    ) -> Result<Type, CompileError> {
        let ancestors = ancestors.with(ty);
        let mut fields = Fields::new();
        self.collect_fields(side, ty, &ancestors, &mut fields)?;

        let name = ty.resolved_name();
        let description = ty.description();
        let meta = match side {
            Side::Output => {
                let mut meta = ObjectMeta::new(name, fields);
                if let Some(description) = description {
                    meta = meta.description(description);
                }
                meta.into_meta()
            }
            Side::Input => {
                let mut meta = InputObjectMeta::new(name, fields);
                if let Some(description) = description {
                    meta = meta.description(description);
                }
                meta.into_meta()
            }
        };
        Ok(Type::from(meta))
    }

    fn primitive(
        &self,
        side: Side,
        ty: &TypeDescriptor,
        primitive: Primitive,
    ) -> Result<Type, CompileError> {
        if side == Side::Output && ty.is_id() {
            return Ok(self.builtins.id.clone());
        }
        self.builtins
            .for_primitive(primitive)
            .cloned()
            .ok_or_else(|| CompileError::unsupported(ty))
    }

    /// Collects the fields of the `owner` type into `fields`.
    ///
    /// The `ancestors` are expected to contain the `owner` already.
    fn collect_fields(
        &mut self,
        side: Side,
        owner: &TypeDescriptor,
        ancestors: &Ancestors<'_>,
        fields: &mut Fields,
    ) -> Result<(), CompileError> {
        for member in owner.members() {
            let field = FieldDescriptor::new(*owner, member, &self.config.tag_key);
            self.add_field(side, &field, ancestors, fields)?;
        }
        Ok(())
    }

    /// Adds the provided member to `fields`, or the members it promotes if
    /// it's an embedded struct.
    ///
    /// A field declared on the owner replaces a promoted one of the same
    /// name, while a promoted field never replaces an existing one. An
    /// embedded struct registered as a custom scalar or enum is a regular
    /// field.
    fn add_field(
        &mut self,
        side: Side,
        field: &FieldDescriptor,
        ancestors: &Ancestors<'_>,
        fields: &mut Fields,
    ) -> Result<(), CompileError> {
        let ty = field.descriptor();
        // Compiled structs are never leaves, so a cached leaf is a custom type.
        let registered = self.lookup(side, &ty).is_some_and(|node| node.is_leaf());
        if field.is_embedded() && ty.is_composite() && !registered {
            if ancestors.contains(&ty) {
                return Err(CompileError::circular(&ty, ancestors));
            }
            let ancestors = ancestors.with(&ty);
            let mut promoted = Fields::new();
            self.collect_fields(side, &ty, &ancestors, &mut promoted)?;
            for (name, f) in promoted {
                fields.entry(name).or_insert(f);
            }
        } else {
            let f = self.compile_field(side, field, ancestors)?;
            fields.insert(f.name.clone(), f);
        }
        Ok(())
    }

    fn compile_field(
        &mut self,
        side: Side,
        field: &FieldDescriptor,
        ancestors: &Ancestors<'_>,
    ) -> Result<Field, CompileError> {
        let (base, dims) = field.descriptor().unwrap_sequences();
        let meta = field.meta();

        let node = if meta.id {
            self.builtins.id.clone()
        } else {
            self.resolve_base(side, base, ancestors)?
        };
        let node = node.list_n(dims);
        let node = if meta.nullable { node } else { node.non_null() };

        let mut f = Field::new(field.exposed_name(), node);
        if let Some(description) = base.description() {
            f = f.description(description);
        }
        if let Some(default) = base.default_value() {
            f = f.default_value(default);
        }
        Ok(f)
    }
}

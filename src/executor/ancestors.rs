use arcstr::ArcStr;

use crate::reflect::TypeDescriptor;

/// Chain of types currently being compiled along the active recursion path.
///
/// Descending into a type pushes a new link living on the call stack, so
/// sibling branches never observe each other's types. Two fields referencing
/// the same type are fine, while a type reached again through its own
/// members is a cycle.
#[derive(Clone, Copy, Debug)]
pub enum Ancestors<'a> {
    /// Top of a compilation, with no types being compiled yet.
    Root,
    /// A type being compiled and the chain it was reached through.
    Type(&'a TypeDescriptor, &'a Ancestors<'a>),
}

impl<'a> Ancestors<'a> {
    /// Extends this chain with the provided type.
    #[must_use]
    pub fn with(&'a self, ty: &'a TypeDescriptor) -> Self {
        Self::Type(ty, self)
    }

    /// Indicates whether the provided type is being compiled along this
    /// chain.
    pub fn contains(&self, ty: &TypeDescriptor) -> bool {
        let mut current = self;
        while let Self::Type(ancestor, parent) = *current {
            if ancestor == ty {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Returns the number of types in this chain.
    pub fn depth(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::Type(_, parent) => parent.depth() + 1,
        }
    }

    /// Returns the declared names of the types in this chain, outermost
    /// first.
    pub fn path(&self) -> Vec<ArcStr> {
        let mut acc = Vec::with_capacity(self.depth());
        self.construct_path(&mut acc);
        acc
    }

    fn construct_path(&self, acc: &mut Vec<ArcStr>) {
        match self {
            Self::Root => {}
            Self::Type(ty, parent) => {
                parent.construct_path(acc);
                acc.push(ty.declared_name().into());
            }
        }
    }
}

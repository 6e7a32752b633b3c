//! [`Reflect`](crate::Reflect) implementations for sequences, maps and unit.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::BuildHasher,
};

use indexmap::{IndexMap, IndexSet};

use crate::reflect::{Kind, Reflect, TypeDescriptor};

macro_rules! impl_reflect_sequence {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::sequence::<Self, T>()
            }
        }
    )*};
}

impl_reflect_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Reflect> Reflect for [T] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<Self, T>()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<Self, T>()
    }
}

impl<T: Reflect, S: BuildHasher + 'static> Reflect for HashSet<T, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<Self, T>()
    }
}

impl<T: Reflect, S: BuildHasher + 'static> Reflect for IndexSet<T, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence::<Self, T>()
    }
}

impl<K: 'static, V: 'static, S: BuildHasher + 'static> Reflect for HashMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Kind::Map)
    }
}

impl<K: 'static, V: 'static, S: BuildHasher + 'static> Reflect for IndexMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Kind::Map)
    }
}

impl<K: 'static, V: 'static> Reflect for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Kind::Map)
    }
}

impl Reflect for () {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Kind::Unit)
    }
}

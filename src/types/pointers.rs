//! Pointer-like wrappers are transparent: they describe as the type they
//! point to, so `Box<T>`, `Arc<Option<T>>` and `T` share one schema node.

use std::{borrow::Cow, rc::Rc, sync::Arc};

use crate::reflect::{Reflect, TypeDescriptor};

macro_rules! impl_reflect_transparent {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: Reflect + ?Sized> Reflect for $ty<T> {
            fn descriptor() -> TypeDescriptor {
                T::descriptor()
            }
        }
    )*};
}

impl_reflect_transparent!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Option<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for &'static T {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

impl<T> Reflect for Cow<'static, T>
where
    T: Reflect + ToOwned + ?Sized,
    T::Owned: 'static,
{
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }
}

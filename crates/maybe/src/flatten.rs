use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::O;

/// Removes one level of `O` nesting.
///
/// `Output` is the type left after flattening: `O<O<T>>` becomes `O<T>`,
/// while an `O` around a plain value type is passed through as is.
pub trait Flatten {
    type Output;
    fn flatten(self) -> Self::Output;
}

impl<T> Flatten for O<O<T>> {
    type Output = O<T>;

    fn flatten(self) -> Self::Output {
        match self {
            O::Some(inner) => inner,
            O::None => O::None,
        }
    }
}

/// Marks a type that is never itself an `O`.
///
/// `O<T>` passes through [`Flatten`] unchanged for every `T: Leaf`. Types
/// from other crates opt in with `impl maybe::flatten::Leaf for MyType {}`.
pub trait Leaf {}

impl<T: Leaf> Flatten for O<T> {
    type Output = O<T>;

    fn flatten(self) -> Self::Output {
        self
    }
}

macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(impl Leaf for $ty {})*
    };
}

leaf!(
    (), bool, char, f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    str, String,
);

impl<T: ?Sized> Leaf for &T {}
impl<T: ?Sized> Leaf for &mut T {}
impl<T> Leaf for Vec<T> {}
impl<T: ?Sized> Leaf for Box<T> {}
impl<T, const N: usize> Leaf for [T; N] {}
impl<A, B> Leaf for (A, B) {}
impl<A, B, C> Leaf for (A, B, C) {}

/// Free-function form of [`Flatten::flatten`].
pub fn flatten<F: Flatten>(opt: F) -> F::Output {
    opt.flatten()
}

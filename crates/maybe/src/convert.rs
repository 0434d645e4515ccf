use alloc::vec;
use alloc::vec::Vec;
use core::slice;

use crate::O;

impl<T> O<T> {
    /// Builds an `O` from a nullable value. Only `None` is absent; falsy
    /// values like `0` or `false` are kept.
    pub fn from_nullable(val: Option<T>) -> Self {
        match val {
            Some(val) => O::Some(val),
            None => O::None,
        }
    }

    /// Converts into the standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            O::Some(val) => Some(val),
            O::None => None,
        }
    }

    /// Empty vector for `None`, one element for `Some`.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            O::Some(val) => vec![val],
            O::None => Vec::new(),
        }
    }

    /// Clones the contents into a vector of zero or one element.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Views the contents as a slice of length zero or one.
    pub fn as_slice(&self) -> &[T] {
        match self {
            O::Some(val) => slice::from_ref(val),
            O::None => &[],
        }
    }
}

impl<T> From<Option<T>> for O<T> {
    fn from(val: Option<T>) -> Self {
        O::from_nullable(val)
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(val: O<T>) -> Self {
        val.into_option()
    }
}

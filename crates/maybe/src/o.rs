use crate::Error;

/// A value that is either present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum O<T> {
    Some(T),
    #[default]
    None,
}

/// Shorthand for [`O::some`].
pub fn some<T>(val: T) -> O<T> {
    O::Some(val)
}

/// Shorthand for [`O::none`].
pub fn none<T>() -> O<T> {
    O::None
}

impl<T> O<T> {
    /// Constructs an `O::Some(val)` variant.
    pub fn some(val: T) -> Self {
        O::Some(val)
    }

    /// Constructs an `O::None` variant.
    pub fn none() -> Self {
        O::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, O::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, O::None)
    }

    /// Returns true if the value is `Some` and `pred` accepts it.
    pub fn is_some_and<F: FnOnce(&T) -> bool>(&self, pred: F) -> bool {
        match self {
            O::Some(val) => pred(val),
            O::None => false,
        }
    }

    /// Returns true if the value is `Some` and `pred` rejects it.
    pub fn is_some_but<F: FnOnce(&T) -> bool>(&self, pred: F) -> bool {
        match self {
            O::Some(val) => !pred(val),
            O::None => false,
        }
    }

    /// Returns true if the value is `None` or `pred` accepts it.
    pub fn is_none_or<F: FnOnce(&T) -> bool>(&self, pred: F) -> bool {
        match self {
            O::Some(val) => pred(val),
            O::None => true,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with the message of [`Error::UnwrapOnNone`] if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            O::Some(val) => val,
            O::None => {
                tracing::error!("unwrap on empty O");
                panic!("{}", Error::UnwrapOnNone)
            }
        }
    }

    /// Returns the contained value, or [`Error::UnwrapOnNone`] when there is none.
    pub fn try_unwrap(self) -> Result<T, Error> {
        match self {
            O::Some(val) => Ok(val),
            O::None => {
                tracing::debug!("try_unwrap on empty O");
                Err(Error::UnwrapOnNone)
            }
        }
    }

    /// Expects the value to be `Some`, panics with `msg` if not.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Some(val) => val,
            O::None => panic!("{}", msg),
        }
    }

    /// Returns the contained value, or hands `err` back to the caller.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err),
        }
    }

    /// Like [`O::ok_or`], building the error only when it is needed.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            O::Some(val) => Ok(val),
            O::None => Err(err()),
        }
    }

    /// Returns the contained value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            O::Some(val) => val,
            O::None => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    /// `f` is not called when the value is `Some`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            O::Some(val) => val,
            O::None => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            O::Some(val) => val,
            O::None => T::default(),
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => O::Some(f(val)),
            O::None => O::None,
        }
    }

    /// Keeps the value only if `pred` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, pred: P) -> Self {
        match self {
            O::Some(val) => {
                if pred(&val) {
                    O::Some(val)
                } else {
                    O::None
                }
            }
            O::None => O::None,
        }
    }

    /// Applies `f` to the contained value, or returns `default` if there is none.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            O::Some(val) => f(val),
            O::None => default,
        }
    }

    /// Like [`O::map_or`], with a lazily computed default.
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            O::Some(val) => f(val),
            O::None => default(),
        }
    }

    /// Returns `other` if `self` is `Some`, otherwise `None`.
    pub fn and<U>(self, other: O<U>) -> O<U> {
        match self {
            O::Some(_) => other,
            O::None => O::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    pub fn or(self, other: O<T>) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => other,
        }
    }

    /// Returns whichever of `self` and `other` is `Some`, if exactly one is.
    pub fn xor(self, other: O<T>) -> O<T> {
        match (self, other) {
            (a @ O::Some(_), O::None) => a,
            (O::None, b @ O::Some(_)) => b,
            _ => O::None,
        }
    }

    /// Chains a computation that may itself produce nothing.
    pub fn and_then<U, F: FnOnce(T) -> O<U>>(self, f: F) -> O<U> {
        match self {
            O::Some(val) => f(val),
            O::None => O::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `f`.
    pub fn or_else<F: FnOnce() -> O<T>>(self, f: F) -> O<T> {
        match self {
            O::Some(_) => self,
            O::None => f(),
        }
    }

    /// Calls `f` with the contained value, if any, and returns `self` unchanged.
    pub fn if_some<F: FnOnce(&T)>(self, f: F) -> Self {
        if let O::Some(val) = &self {
            f(val);
        }
        self
    }

    /// Calls `f` if there is no value and returns `self` unchanged.
    pub fn if_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }

    /// Alias of [`O::if_some`].
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        self.if_some(f)
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Some(val) => O::Some(val),
            O::None => O::None,
        }
    }
}

impl<T> O<O<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> O<T> {
        match self {
            O::Some(inner) => inner,
            O::None => O::None,
        }
    }
}

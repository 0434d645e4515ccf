use crate::O;

impl<T> O<T> {
    /// Pairs two values when both are present.
    pub fn zip<U>(self, other: O<U>) -> O<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines two values with `f` when both are present.
    /// `f` is not called if either side is `None`.
    pub fn zip_with<U, R, F: FnOnce(T, U) -> R>(self, other: O<U>, f: F) -> O<R> {
        match (self, other) {
            (O::Some(a), O::Some(b)) => O::Some(f(a, b)),
            _ => O::None,
        }
    }
}

impl<A, B> O<(A, B)> {
    /// Splits a present pair into two present halves, or `None` into two `None`s.
    pub fn unzip(self) -> (O<A>, O<B>) {
        match self {
            O::Some((a, b)) => (O::Some(a), O::Some(b)),
            O::None => (O::None, O::None),
        }
    }
}

/// Free-function form of [`O::unzip`].
pub fn unzip<A, B>(opt: O<(A, B)>) -> (O<A>, O<B>) {
    opt.unzip()
}

use crate::O;

impl<T> O<T> {
    /// Structural equality: two `None`s are equal, two `Some`s are equal when
    /// their values are, and a `Some` never equals a `None`.
    pub fn equals<U>(&self, other: &O<U>) -> bool
    where
        T: PartialEq<U>,
    {
        self.equals_with(other, |a, b| a == b)
    }

    /// Same as [`O::equals`], comparing present values with `cmp`.
    /// `cmp` is only called when both sides are `Some`.
    pub fn equals_with<U, F: FnOnce(&T, &U) -> bool>(&self, other: &O<U>, cmp: F) -> bool {
        match (self, other) {
            (O::Some(a), O::Some(b)) => cmp(a, b),
            (O::None, O::None) => true,
            _ => false,
        }
    }
}

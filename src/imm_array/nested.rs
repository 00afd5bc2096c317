use std::fmt;

use tracing::{instrument, trace};

use super::ImmArray;

/// An element of an array that may itself hold arrays: either a plain value
/// or a nested [`ImmArray`].
///
/// This is the element type [`ImmArray::flatten`] works on.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Value(T),
    List(ImmArray<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps plain values into a nested list.
    pub fn list(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Self::Value).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl<T> From<ImmArray<Nested<T>>> for Nested<T> {
    fn from(list: ImmArray<Nested<T>>) -> Self {
        Self::List(list)
    }
}

impl<T: fmt::Debug> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::List(list) => list.fmt(f),
        }
    }
}

impl<T: Clone> ImmArray<Nested<T>> {
    /// Inlines nested arrays by exactly one level.
    ///
    /// Returns `self` if no element is a [`Nested::List`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use imm_array::{ImmArray, Nested};
    /// # use assert2::assert;
    /// let one_deep = ImmArray::from([
    ///     Nested::value(1),
    ///     Nested::list([2, 3]),
    ///     Nested::value(4),
    /// ]);
    /// assert!(format!("{:?}", one_deep.flatten()) == "[1, 2, 3, 4]");
    ///
    /// let two_deep = ImmArray::from([
    ///     Nested::value(1),
    ///     Nested::List(ImmArray::from([Nested::value(2), Nested::list([3, 4])])),
    /// ]);
    /// assert!(format!("{:?}", two_deep.flatten()) == "[1, 2, [3, 4]]");
    /// ```
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn flatten(&self) -> Self {
        if !self.iter().any(Nested::is_list) {
            trace!("no nested lists, returning self");
            return self.clone();
        }

        let mut flat = Vec::with_capacity(self.len());
        for item in self.iter() {
            match item {
                Nested::List(inner) => flat.extend_from_slice(inner),
                Nested::Value(_) => flat.push(item.clone()),
            }
        }
        Self::from_vec(flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};

    #[test]
    fn flatten_inlines_one_level() {
        let nested = ImmArray::from([
            Nested::value('a'),
            Nested::list(['b', 'c']),
            Nested::list([]),
            Nested::value('d'),
        ]);
        let flat = nested.flatten();
        assert!(flat == [Nested::value('a'), Nested::value('b'), Nested::value('c'), Nested::value('d')]);
        assert!(nested.len() == 4);
    }

    #[test]
    fn flatten_without_lists_is_identity() {
        let plain = ImmArray::from([Nested::value(1), Nested::value(2)]);
        assert!(ImmArray::ptr_eq(&plain, &plain.flatten()));

        let empty = ImmArray::<Nested<u8>>::new();
        assert!(ImmArray::ptr_eq(&empty, &empty.flatten()));
    }

    #[test]
    fn flatten_stops_after_one_level() {
        let inner = ImmArray::from([Nested::value(3), Nested::value(4)]);
        let deep = ImmArray::from([
            Nested::value(1),
            Nested::List(ImmArray::from([Nested::value(2), Nested::List(inner.clone())])),
        ]);

        let once = deep.flatten();
        assert!(once.len() == 3);
        let_assert!(Nested::List(kept) = &once[2]);
        assert!(ImmArray::ptr_eq(kept, &inner));

        let twice = once.flatten();
        assert!(twice == [Nested::value(1), Nested::value(2), Nested::value(3), Nested::value(4)]);
    }
}

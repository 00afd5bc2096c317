use std::{borrow::Borrow, fmt, hash::Hash, ops::Deref};

use super::ImmArray;

impl<T> Clone for ImmArray<T> {
    /// Cheap: the clone shares `self`'s allocation and is [`ImmArray::ptr_eq`]
    /// to it.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T> Deref for ImmArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for ImmArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for ImmArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for ImmArray<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T: Clone> From<&[T]> for ImmArray<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for ImmArray<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_vec(Vec::from(array))
    }
}

impl<T> FromIterator<T> for ImmArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(Vec::from_iter(iter))
    }
}

impl<'a, T> IntoIterator for &'a ImmArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares content. Use [`ImmArray::ptr_eq`] to compare identity.
///
/// Two handles to the same array are equal without looking at the elements.
impl<S, T> PartialEq<S> for ImmArray<T>
where
    S: AsRef<[T]>,
    T: PartialEq,
{
    fn eq(&self, other: &S) -> bool {
        let other = other.as_ref();
        std::ptr::eq(self.as_slice(), other) || self.as_slice() == other
    }
}

impl<T: Eq> Eq for ImmArray<T> {}

impl<T: Hash> Hash for ImmArray<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Default for ImmArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashSet};

    use super::*;
    use assert2::assert;

    #[test]
    fn clone_keeps_identity() {
        let a = ImmArray::from([1, 2, 3]);
        let b = a.clone();
        assert!(ImmArray::ptr_eq(&a, &b));
    }

    #[test]
    fn eq_against_other_sequences() {
        let a = ImmArray::from(vec!["x", "y"]);
        assert!(a == ["x", "y"]);
        assert!(a == vec!["x", "y"]);
        assert!(a == &["x", "y"][..]);
        assert!(a == ImmArray::from(["x", "y"]));
        assert!(a != ["x"]);
    }

    thread_local! {
        static ELEMENT_COMPARISONS: Cell<usize> = Cell::new(0);
    }

    #[derive(Debug)]
    struct Tracked(u8);

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            ELEMENT_COMPARISONS.with(|count| count.set(count.get() + 1));
            self.0 == other.0
        }
    }

    #[test]
    fn eq_on_same_array_skips_elements() {
        let a = ImmArray::from([Tracked(1), Tracked(2), Tracked(3)]);
        ELEMENT_COMPARISONS.with(|count| count.set(0));

        assert!(a == a.clone());
        assert!(ELEMENT_COMPARISONS.with(Cell::get) == 0);

        let b = ImmArray::from([Tracked(1), Tracked(2), Tracked(3)]);
        assert!(a == b);
        assert!(ELEMENT_COMPARISONS.with(Cell::get) == 3);
    }

    #[test]
    fn debug_looks_like_a_slice() {
        let a = ImmArray::from([1, 2]);
        assert!(format!("{a:?}") == "[1, 2]");
        assert!(format!("{:?}", ImmArray::<u8>::new()) == "[]");
    }

    #[test]
    fn hash_follows_content() {
        let mut set = HashSet::new();
        set.insert(ImmArray::from([1, 2]));
        assert!(set.contains(&ImmArray::from(vec![1, 2])));
        assert!(set.contains(&[1, 2][..]));
    }

    #[test]
    fn indexing_and_iteration() {
        let a: ImmArray<char> = "abc".chars().collect();
        assert!(a[1] == 'b');
        assert!(a.len() == 3);
        assert!(a.iter().rev().copied().collect::<String>() == "cba");
        assert!((&a).into_iter().count() == 3);
    }
}

use std::sync::Arc;

use tracing::{debug, instrument, trace};

mod nested;
mod trait_impls;

#[cfg(test)]
pub(crate) mod new_counts;


pub use nested::Nested;

/// An immutable, reference-counted array.
///
/// Operations never modify `self`. The ones that would change the content
/// return a freshly allocated `ImmArray`; the ones that turn out not to
/// change anything return a clone of `self`, which shares its allocation
/// (see [`ImmArray::ptr_eq`]).
pub struct ImmArray<T> {
    data: Arc<[T]>,
}

impl<T> ImmArray<T> {
    /// Creates an empty `ImmArray`.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Every fresh allocation goes through here.
    fn from_vec(vec: Vec<T>) -> Self {
        #[cfg(test)]
        new_counts::incr_total_new_count();

        Self {
            data: Arc::from(vec),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns `true` if `this` and `other` are the same array, not merely
    /// equal ones.
    ///
    /// This is the change signal: an operation that had nothing to do
    /// returns an array that is `ptr_eq` to its input.
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let a = ImmArray::from(vec!['a', 'b']);
    /// let b = ImmArray::from(vec!['a', 'b']);
    /// assert!(a == b);
    /// assert!(!ImmArray::ptr_eq(&a, &b));
    /// assert!(ImmArray::ptr_eq(&a, &a.clone()));
    /// ```
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.data, &other.data)
    }

    /// Elements before `end`, clamped to the array.
    fn prefix(&self, end: usize) -> &[T] {
        &self.data[..end.min(self.len())]
    }

    /// Elements from `start` onwards, clamped to the array.
    fn suffix(&self, start: usize) -> &[T] {
        &self.data[start.min(self.len())..]
    }

    /// Applies `f` to every element, returning the original array if every
    /// result is equal to the element it came from.
    ///
    /// `f` receives each element and its index, and is called exactly once
    /// per element, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let nums = ImmArray::from(vec![1, 2, 3]);
    ///
    /// let incremented = nums.map(|n, _| n + 1);
    /// assert!(incremented == [2, 3, 4]);
    ///
    /// let unchanged = nums.map(|n, _| *n);
    /// assert!(ImmArray::ptr_eq(&nums, &unchanged));
    /// ```
    #[instrument(skip(self, f), fields(len = self.len()))]
    pub fn map(&self, mut f: impl FnMut(&T, usize) -> T) -> Self
    where
        T: PartialEq,
    {
        let mut changed = false;
        let mapped: Vec<T> = self
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let new_item = f(item, index);
                changed = changed || *item != new_item;
                log!("map: index {index}, changed so far: {changed}");
                new_item
            })
            .collect();

        if changed {
            trace!("at least one element changed, allocating");
            Self::from_vec(mapped)
        } else {
            trace!("every element unchanged, returning self");
            self.clone()
        }
    }

    /// Like [`ImmArray::map`] but `f` may produce a different element type.
    /// Since the element type changes the result is always a new array.
    #[instrument(skip(self, f), fields(len = self.len()))]
    pub fn map_into<U>(&self, mut f: impl FnMut(&T, usize) -> U) -> ImmArray<U> {
        let mapped = self
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect();
        ImmArray::from_vec(mapped)
    }
}

impl<T: Clone> ImmArray<T> {
    /// Returns an array with the element at `index` replaced by `value`.
    ///
    /// If the element at `index` already equals `value`, `self` is returned
    /// unchanged. An `index` past the end is not an error: the prefix clamps
    /// to the whole array, so `value` ends up appended.
    ///
    /// # Examples
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let abc = ImmArray::from(vec!['a', 'b', 'c']);
    /// assert!(abc.set(1, 'B') == ['a', 'B', 'c']);
    /// assert!(ImmArray::ptr_eq(&abc, &abc.set(2, 'c')));
    /// assert!(abc.set(7, 'z') == ['a', 'b', 'c', 'z']);
    /// ```
    #[instrument(skip(self, value), fields(len = self.len()))]
    pub fn set(&self, index: usize, value: T) -> Self
    where
        T: PartialEq,
    {
        if self.get(index) == Some(&value) {
            trace!("element already equal, returning self");
            return self.clone();
        }

        if index >= self.len() {
            debug!("index is past the end, value will be appended");
        }

        let prefix = self.prefix(index);
        let suffix = self.suffix(index.saturating_add(1));

        let mut vec = Vec::with_capacity(prefix.len() + 1 + suffix.len());
        vec.extend_from_slice(prefix);
        vec.push(value);
        vec.extend_from_slice(suffix);
        Self::from_vec(vec)
    }

    /// Calls [`ImmArray::set`] once per item, at consecutive indices starting
    /// at `index`, each call building on the result of the last.
    pub(crate) fn set_multiple(&self, index: usize, items: impl IntoIterator<Item = T>) -> Self
    where
        T: PartialEq,
    {
        items
            .into_iter()
            .enumerate()
            .fold(self.clone(), |array, (offset, item)| {
                array.set(index.saturating_add(offset), item)
            })
    }

    /// Returns a new array with `value` added onto the end.
    pub fn push(&self, value: T) -> Self {
        let mut vec = Vec::with_capacity(self.len() + 1);
        vec.extend_from_slice(self);
        vec.push(value);
        Self::from_vec(vec)
    }

    /// Returns a new array with everything but the last element. Popping an
    /// empty array gives another empty array.
    pub fn pop(&self) -> Self {
        Self::from_vec(self.prefix(self.len().saturating_sub(1)).to_vec())
    }

    /// Returns a new array with everything but the first element. Shifting an
    /// empty array gives another empty array.
    pub fn shift(&self) -> Self {
        Self::from_vec(self.suffix(1).to_vec())
    }

    /// Returns a new array with `value` added onto the front.
    pub fn unshift(&self, value: T) -> Self {
        let mut vec = Vec::with_capacity(self.len() + 1);
        vec.push(value);
        vec.extend_from_slice(self);
        Self::from_vec(vec)
    }

    /// Removes `delete_count` elements starting at `index` and puts `items` in
    /// their place.
    ///
    /// When as many items are inserted as are deleted, the elements are
    /// replaced one at a time with [`ImmArray::set`], so splicing in items
    /// that are all equal to the ones they replace returns `self`. Otherwise
    /// the result is the elements before `index`, then `items`, then the
    /// elements from `index + delete_count` on. Both bounds clamp to the
    /// array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let nums = ImmArray::from(vec![1, 2, 3, 4]);
    /// assert!(nums.splice(1, 2, [7]) == [1, 7, 4]);
    /// assert!(nums.splice(1, 0, [8, 9]) == [1, 8, 9, 2, 3, 4]);
    /// assert!(nums.splice(2, 100, []) == [1, 2]);
    ///
    /// let same = nums.splice(1, 2, [2, 3]);
    /// assert!(ImmArray::ptr_eq(&nums, &same));
    /// ```
    #[instrument(skip(self, items), fields(len = self.len()))]
    pub fn splice<I>(&self, index: usize, delete_count: usize, items: I) -> Self
    where
        T: PartialEq,
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();

        if delete_count == items.len() {
            trace!("replacing {delete_count} element(s) in place");
            return self.set_multiple(index, items);
        }

        trace!("deleting {delete_count}, inserting {}", items.len());
        let prefix = self.prefix(index);
        let suffix = self.suffix(index.saturating_add(delete_count));

        let mut vec = Vec::with_capacity(prefix.len() + items.len() + suffix.len());
        vec.extend_from_slice(prefix);
        vec.extend(items);
        vec.extend_from_slice(suffix);
        Self::from_vec(vec)
    }

    /// Moves the element at `from` so that it ends up at `to`.
    ///
    /// The element is first removed, then inserted at `to` in the *shortened*
    /// array. So `to` counts positions after the removal, not in `self`.
    ///
    /// If there is no element at `from`, `self` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let nums = ImmArray::from(vec![1, 2, 3]);
    /// assert!(nums.move_item(0, 1) == [2, 1, 3]);
    ///
    /// // [1, 2, 3] -> remove index 2 -> [1, 2] -> insert at 0 -> [3, 1, 2]
    /// assert!(nums.move_item(2, 0) == [3, 1, 2]);
    /// ```
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn move_item(&self, from: usize, to: usize) -> Self
    where
        T: PartialEq,
    {
        let Some(item) = self.get(from).cloned() else {
            debug!("no element at `from`, returning self");
            return self.clone();
        };

        self.splice(from, 1, Vec::new()).splice(to, 0, [item])
    }

    /// Keeps the elements for which `predicate` returns `true`, returning the
    /// original array if it kept all of them.
    ///
    /// `predicate` receives each element and its index in `self`.
    ///
    /// ```
    /// # use imm_array::ImmArray;
    /// # use assert2::assert;
    /// let nums = ImmArray::from(vec![1, 2, 3, 4]);
    /// assert!(nums.filter(|n, _| n % 2 == 0) == [2, 4]);
    /// assert!(nums.filter(|_, i| i != 0) == [2, 3, 4]);
    /// assert!(ImmArray::ptr_eq(&nums, &nums.filter(|_, _| true)));
    /// ```
    #[instrument(skip(self, predicate), fields(len = self.len()))]
    pub fn filter(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Self {
        let mut changed = false;
        let kept: Vec<&T> = self
            .iter()
            .enumerate()
            .filter(|&(index, item)| {
                let keep = predicate(item, index);
                changed = !keep || changed;
                log!("filter: index {index}, keep: {keep}");
                keep
            })
            .map(|(_, item)| item)
            .collect();

        if changed {
            trace!("kept {} of {} element(s)", kept.len(), self.len());
            Self::from_vec(kept.into_iter().cloned().collect())
        } else {
            trace!("kept every element, returning self");
            self.clone()
        }
    }
}

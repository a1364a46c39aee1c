//! Projections: read-only views derived from a list held in state.
//!
//! A projection is a named predicate over items. Projecting a slice yields a
//! lazy iterator over the matching items in their original order; nothing is
//! cached, so every call recomputes from the slice it is given.
//!
//! [`Complement`] inverts a projection. A projection and its complement
//! partition any slice: every item lands in exactly one of the two views.
//!
//! ## Example
//!
//! ```
//! use todo_store_core::projection::{Complement, Projection};
//!
//! struct Even;
//!
//! impl Projection for Even {
//!     type Item = u32;
//!
//!     fn name(&self) -> &'static str {
//!         "even"
//!     }
//!
//!     fn includes(&self, item: &u32) -> bool {
//!         item % 2 == 0
//!     }
//! }
//!
//! let items = [1, 2, 3, 4];
//! let even: Vec<_> = Even.project(&items).copied().collect();
//! let odd: Vec<_> = Complement::new(Even, "odd").project(&items).copied().collect();
//!
//! assert_eq!(even, vec![2, 4]);
//! assert_eq!(odd, vec![1, 3]);
//! ```

/// A named, predicate-based view over a slice of items.
pub trait Projection {
    /// The item type this projection filters.
    type Item;

    /// Name of the view (used for headings and logging).
    fn name(&self) -> &'static str;

    /// Whether `item` belongs to this view.
    fn includes(&self, item: &Self::Item) -> bool;

    /// Lazily yield the items of `items` that belong to this view, in order.
    fn project<'a>(&'a self, items: &'a [Self::Item]) -> Projected<'a, Self>
    where
        Self::Item: 'a,
    {
        Projected {
            projection: self,
            items: items.iter(),
        }
    }

    /// Number of items of `items` that belong to this view.
    fn count(&self, items: &[Self::Item]) -> usize {
        items.iter().filter(|item| self.includes(item)).count()
    }

    /// The view of everything this projection excludes.
    fn complement(self, name: &'static str) -> Complement<Self>
    where
        Self: Sized,
    {
        Complement::new(self, name)
    }
}

/// Iterator returned by [`Projection::project`].
pub struct Projected<'a, P>
where
    P: Projection + ?Sized,
    P::Item: 'a,
{
    projection: &'a P,
    items: std::slice::Iter<'a, P::Item>,
}

impl<'a, P> Iterator for Projected<'a, P>
where
    P: Projection + ?Sized,
    P::Item: 'a,
{
    type Item = &'a P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let projection = self.projection;
        self.items.by_ref().find(|item| projection.includes(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<'a, P> Clone for Projected<'a, P>
where
    P: Projection + ?Sized,
    P::Item: 'a,
{
    fn clone(&self) -> Self {
        Self {
            projection: self.projection,
            items: self.items.clone(),
        }
    }
}

/// Inverts a projection: includes exactly what the inner projection excludes.
#[derive(Debug, Clone, Copy)]
pub struct Complement<P> {
    inner: P,
    name: &'static str,
}

impl<P> Complement<P> {
    /// Complement of `inner`, shown under `name`.
    #[must_use]
    pub const fn new(inner: P, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<P: Projection> Projection for Complement<P> {
    type Item = P::Item;

    fn name(&self) -> &'static str {
        self.name
    }

    fn includes(&self, item: &Self::Item) -> bool {
        !self.inner.includes(item)
    }
}

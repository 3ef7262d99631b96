//! Comparison capabilities: equality and ordering, gated on the underlying type.
//!
//! Each impl is conditional on `T` declaring the same capability, so a
//! wrapper is exactly as comparable as the type it wraps. `PartialOrd`
//! stays partial (`f64` wrappers still have no order against NaN) and `Ord`
//! stays total. All comparisons are defined only between wrappers with the
//! identical `(Tag, T)` pair; anything else is a type error at the call site.

use core::cmp::Ordering;

use crate::strong::Strong;

impl<Tag, T: PartialEq> PartialEq for Strong<Tag, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag, T: Eq> Eq for Strong<Tag, T> {}

impl<Tag, T: PartialOrd> PartialOrd for Strong<Tag, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<Tag, T: Ord> Ord for Strong<Tag, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

//! The strong typedef wrapper itself: construction, unwrapping, copyability.
//!
//! Comparison lives in [`crate::cmp`], additive arithmetic in [`crate::ops`].

use core::marker::PhantomData;

/// A nominally distinct wrapper around a single value of `T`.
///
/// The `Tag` parameter is a marker type that exists purely at the type level:
/// it is never constructed, carries no data, and only serves to make two
/// wrappers over the same underlying type mutually non-interchangeable.
/// Two `Strong` instantiations are the same type iff both `Tag` and `T`
/// match exactly.
///
/// Every operator the wrapper exposes is gated on the corresponding
/// capability of `T` (see [`crate::cmp`] and [`crate::ops`]); using an
/// operator `T` does not support is rejected at compile time.
///
/// ```
/// use nominal::Strong;
///
/// enum MetersTag {}
/// type Meters = Strong<MetersTag, f64>;
///
/// let m = Meters::new(1.5);
/// assert!(m.into_inner() == 1.5);
/// ```
#[repr(transparent)]
pub struct Strong<Tag, T> {
    pub(crate) value: T,
    // fn() -> Tag: the marker never exists as a value, so the wrapper's
    // auto traits and variance must not depend on it.
    pub(crate) _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, T> Strong<Tag, T> {
    /// Wrap an underlying value. The only way to obtain a `Strong`;
    /// there is deliberately no `Default`.
    pub const fn new(value: T) -> Self {
        Strong {
            value,
            _tag: PhantomData,
        }
    }

    /// Consume the wrapper and return the underlying value.
    ///
    /// Infallible: a wrapper always holds exactly one value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Return a copy of the underlying value.
    ///
    /// Equivalent to [`Strong::into_inner`] for `Copy` underlying types,
    /// without consuming the wrapper.
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }
}

// Manual impls: a derive would also bound Tag, and markers implement nothing.
impl<Tag, T: Clone> Clone for Strong<Tag, T> {
    fn clone(&self) -> Self {
        Strong::new(self.value.clone())
    }
}

impl<Tag, T: Copy> Copy for Strong<Tag, T> {}

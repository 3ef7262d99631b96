//! Additive arithmetic, gated on the underlying type.
//!
//! Only `+` and `-` are granted, and only when `T` itself supports them
//! with `T` output (so `Strong<_, u32> + Strong<_, u32>` exists, while a
//! wrapped type without arithmetic gets nothing). Both operands and the
//! result share one `(Tag, T)` pair; adding a quantity to an identifier is
//! unwritable. Overflow and precision behave exactly as they do on `T` —
//! the wrapper adds no checking, saturation, or rounding of its own.

use core::ops::{Add, Sub};

use crate::strong::Strong;

impl<Tag, T: Add<Output = T>> Add for Strong<Tag, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Strong::new(self.value + rhs.value)
    }
}

impl<Tag, T: Sub<Output = T>> Sub for Strong<Tag, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Strong::new(self.value - rhs.value)
    }
}

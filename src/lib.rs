#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

//! # nominal
//!
//! Strong typedefs with compile-time capability gating.
//!
//! **Nominally distinct value types for Rust.**
//!
//! ## Architecture
//!
//! `nominal` turns a plain value type into a distinct nominal type by
//! pairing it with an empty tag marker:
//!
//! ```text
//! Name -> Tag marker (uninhabited enum) -> Strong<Tag, T>
//! ```
//!
//! Two wrappers are the same type iff both the tag and the underlying type
//! match exactly. A count and an identifier can both wrap `u64` and still be
//! impossible to mix up.
//!
//! ### Capability gating
//!
//! The wrapper grants an operation only when the underlying type declares
//! the matching capability, via conditional trait impls:
//!
//! ```text
//! +--------------------------------------------------------------+
//! |  Underlying capability          ->  Wrapper capability       |
//! |  T: PartialEq / Eq              ->  ==, !=                   |
//! |  T: PartialOrd / Ord            ->  <, <=, >, >=, cmp        |
//! |  T: Add<Output = T> / Sub<..>   ->  +, -                     |
//! |  T: Clone / Copy                ->  clone, copy              |
//! +--------------------------------------------------------------+
//! ```
//!
//! Everything is resolved when the instantiation is used; an unsupported
//! operator is a type error, never a runtime failure.
//!
//! ## Features
//!
//! - **Zero runtime overhead**: `#[repr(transparent)]`, no data beyond the
//!   wrapped value, markers never constructed
//! - **Compile-time rejection**: cross-tag comparison and arithmetic do not
//!   compile
//! - **Inherited semantics**: ordering and overflow behave exactly as on
//!   the underlying type
//! - **One-step declaration**: `strong_typedef!` / `strong_typedefs!`
//!
//! ## Quick Start
//!
//! ```
//! use nominal::strong_typedef;
//!
//! strong_typedef!(Meters: f64);
//! strong_typedef!(Seconds: f64);
//!
//! let x = Meters::new(1.0);
//! let y = Meters::new(2.0);
//!
//! assert!((x + y).into_inner() == 3.0);
//! assert!((x - y).into_inner() == -1.0);
//! assert!(x < y);
//! assert!(x != y);
//! ```
//!
//! ## Compile-time rejection
//!
//! Wrappers with different tags are never comparable, even over the same
//! underlying representation:
//!
//! ```compile_fail
//! use nominal::strong_typedef;
//!
//! strong_typedef!(Meters: f64);
//! strong_typedef!(Seconds: f64);
//!
//! let oops = Meters::new(1.0) == Seconds::new(1.0);
//! ```
//!
//! An operator the underlying type does not support is equally unwritable:
//!
//! ```compile_fail
//! use nominal::strong_typedef;
//!
//! struct Opaque;
//! strong_typedef!(Handle: Opaque);
//!
//! let oops = Handle::new(Opaque) == Handle::new(Opaque);
//! ```
//!
//! And a wrapper cannot come from anywhere but an explicit value:
//!
//! ```compile_fail
//! use nominal::strong_typedef;
//!
//! strong_typedef!(Count: u64);
//!
//! let oops: Count = Default::default();
//! ```

// Allow `::nominal` to work inside the crate itself
extern crate self as nominal;

// Re-export paste for the strong_typedefs! block macro
pub use paste;

// The wrapper type and its capability impls
pub mod strong;

// Capability impls, gated on the underlying type
pub mod cmp;
pub mod ops;

// Declarative block form (strong_typedefs!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use strong::Strong;

// Re-export proc-macros
pub use macros::strong_typedef;

/// Common items for strong typedef declarations.
pub mod prelude {
    pub use crate::Strong;
    pub use macros::strong_typedef;
    // Note: strong_typedefs! is #[macro_export] so it's at the crate root
}

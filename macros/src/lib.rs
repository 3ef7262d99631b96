//! Procedural macros for the `nominal` strong typedef wrapper.
//!
//! One macro lives here: `strong_typedef!`, the declaration-site helper that
//! turns a name and an underlying type into a fresh tag marker plus a
//! wrapper alias. It has no runtime behavior; everything it does happens at
//! expansion time.
//!
//! ```ignore
//! strong_typedef!(pub UserId: u64);
//! // expands to:
//! // pub enum UserIdTag {}
//! // pub type UserId = ::nominal::Strong<UserIdTag, u64>;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod typedef;

/// Declare a strong typedef in one step.
///
/// Accepts `vis? Name: Type` (or `vis? Name, Type`) and expands to an
/// uninhabited `NameTag` marker enum and a `type Name` alias for the
/// wrapper over that marker. The marker is unique per invocation site, so
/// reusing a name in an unrelated module still yields a distinct,
/// non-interchangeable type.
///
/// # Usage
/// ```ignore
/// strong_typedef!(Meters: f64);
/// strong_typedef!(pub(crate) Count, usize);
/// ```
#[proc_macro]
pub fn strong_typedef(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as typedef::TypedefInput);
    typedef::expand_strong_typedef(input).into()
}

//! Declarative block form of the typedef helper.
//!
//! [`strong_typedef!`](macro@crate::strong_typedef) (the proc-macro) declares
//! one typedef per invocation with precise error spans; this module provides
//! the `macro_rules!` block form for declaring several at once. Both expand
//! to the same two items per name: an uninhabited `NameTag` marker enum and
//! a `type Name = Strong<NameTag, T>` alias.

/// Declare several strong typedefs in one block.
///
/// Each entry is `vis Name: Underlying;`. Marker idents are derived by
/// pasting `Tag` onto the chosen name, so `Meters` gets a `MetersTag`
/// marker. Uniqueness is structural: the marker is a fresh item at the
/// declaration site, and the same name in two different modules yields two
/// unrelated types.
///
/// # Example
///
/// ```
/// nominal::strong_typedefs! {
///     pub Meters: f64;
///     Seconds: f64;
/// }
///
/// let d = Meters::new(2.5) + Meters::new(0.5);
/// assert!(d.into_inner() == 3.0);
/// // Meters and Seconds share a representation but not a type:
/// // `Meters::new(1.0) == Seconds::new(1.0)` does not compile.
/// ```
#[macro_export]
macro_rules! strong_typedefs {
    ($($vis:vis $name:ident: $ty:ty);+ $(;)?) => {
        $crate::paste::paste! {
            $(
                $vis enum [<$name Tag>] {}
                $vis type $name = $crate::Strong<[<$name Tag>], $ty>;
            )+
        }
    };
}

#[cfg(test)]
mod tests {
    strong_typedefs! {
        Width: u32;
        Height: u32;
        Label: &'static str;
    }

    #[test]
    fn block_form_declares_working_typedefs() {
        let w = Width::new(4) + Width::new(6);
        assert!(w.value() == 10);
        assert!(Height::new(3) < Height::new(5));
        assert!(Label::new("a").into_inner() == "a");
    }
}

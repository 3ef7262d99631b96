//! Parsing and expansion for `strong_typedef!`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{Ident, Token, Type, Visibility};

/// `vis? Name: Type` — the separator may also be a comma.
pub struct TypedefInput {
    vis: Visibility,
    name: Ident,
    ty: Type,
}

impl Parse for TypedefInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;

        let lookahead = input.lookahead1();
        if lookahead.peek(Token![:]) {
            input.parse::<Token![:]>()?;
        } else if lookahead.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        } else {
            return Err(lookahead.error());
        }

        let ty: Type = input.parse()?;

        // Tolerate a trailing comma, reject anything else.
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("expected end of strong_typedef! input"));
        }

        Ok(TypedefInput { vis, name, ty })
    }
}

/// Emit the marker enum and the wrapper alias.
///
/// The marker is an uninhabited enum: it exists only at the type level and
/// can never be constructed. Because each expansion declares a fresh item
/// at its own call site, two invocations never produce the same marker,
/// even when the chosen names coincide in unrelated modules.
pub fn expand_strong_typedef(input: TypedefInput) -> TokenStream2 {
    let TypedefInput { vis, name, ty } = input;
    let tag = format_ident!("{}Tag", &name);

    let tag_doc = format!("Type-level marker distinguishing [`{name}`] from other typedefs.");
    let alias_doc = format!("Strong typedef over `{}`.", quote!(#ty));

    quote! {
        #[doc = #tag_doc]
        #vis enum #tag {}

        #[doc = #alias_doc]
        #vis type #name = ::nominal::Strong<#tag, #ty>;
    }
}

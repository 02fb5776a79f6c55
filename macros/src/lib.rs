//! Derive macros for uiflow
//!
//! This crate provides procedural macros to reduce boilerplate when declaring
//! screen actions.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `uiflow_core::action::Action` for an enum
//!
//! # Example
//!
//! ```ignore
//! use uiflow_macros::Action;
//! use uiflow_core::Action as _;
//!
//! #[derive(Action, Clone, Debug)]
//! enum SearchAction {
//!     #[input]
//!     QueryChanged(String),
//!
//!     Submit,
//! }
//!
//! assert_eq!(SearchAction::Submit.name(), "Submit");
//! assert!(SearchAction::QueryChanged("a".into()).is_input());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Derive macro for Action enums
///
/// Implements `uiflow_core::action::Action`:
/// - `name()` - Returns the variant name
/// - `is_input()` - Returns true for variants marked `#[input]`
///
/// # Attributes
///
/// - `#[input]` - Mark a variant as a high-frequency input event (one per
///   keystroke). The Store logs those at trace level.
/// - `#[scope]` - Mark a single-field tuple variant wrapping a component's
///   action. `name()` and `is_input()` delegate to the wrapped action.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - `#[scope]` is put on a variant that is not a single-field tuple
/// - A variant has both `#[scope]` and `#[input]`
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum DraftAction {
///     #[input]
///     Changed(String),
///     Submit,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum ScreenAction {
///     #[scope]
///     Draft(DraftAction),
/// }
/// ```
#[proc_macro_derive(Action, attributes(input, scope))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut name_arms = Vec::new();
    let mut input_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_scope = has_attribute(&variant.attrs, "scope");
        let is_input = has_attribute(&variant.attrs, "input");

        if is_scope && is_input {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[scope] and #[input]")
                .to_compile_error()
                .into();
        }

        let ident = &variant.ident;
        if is_scope {
            if !matches!(&variant.fields, Fields::Unnamed(fields) if fields.unnamed.len() == 1) {
                return syn::Error::new_spanned(variant, "#[scope] requires a single-field tuple variant")
                    .to_compile_error()
                    .into();
            }
            name_arms.push(quote! { Self::#ident(inner) => ::uiflow_core::action::Action::name(inner), });
            input_arms.push(quote! { Self::#ident(inner) => ::uiflow_core::action::Action::is_input(inner), });
            continue;
        }

        let pattern = variant_pattern(ident, &variant.fields);
        let variant_name = ident.to_string();
        name_arms.push(quote! { #pattern => #variant_name, });
        if is_input {
            input_arms.push(quote! { #pattern => true, });
        }
    }

    let expanded = quote! {
        impl #impl_generics ::uiflow_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_input(&self) -> bool {
                match self {
                    #(#input_arms)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern ignoring a variant's fields
fn variant_pattern(variant: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

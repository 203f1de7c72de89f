//! Procedural macros for the `async-actions` crate.
//!
//! # Provided Macros
//!
//! - `#[derive(AsyncOperation)]`: Implements the `AsyncOperation` trait for an
//!   enum of unit variants, one variant per asynchronous operation, and checks
//!   at compile time that their base names are distinct.

use proc_macro::TokenStream;
use proc_macro_error2::{abort, abort_call_site, proc_macro_error};
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, parse};

mod utils;

/// Derives the `AsyncOperation` trait for an enum.
///
/// Each variant is one asynchronous operation. Its base name is the variant
/// name in `camelCase`, unless overridden with
/// `#[async_operation(rename = "...")]`.
///
/// # Example
/// ```rust,ignore
/// #[derive(AsyncOperation)]
/// enum UserOperation {
///     FetchUser,
///     #[async_operation(rename = "profile/save")]
///     SaveProfile,
/// }
/// ```
/// This expands to:
/// ```rust,ignore
/// const _: () = {
///     const FIRST_DUPLICATE: Option<usize> = first_duplicate(&["fetchUser", "profile/save"]);
///     assert!(!matches!(FIRST_DUPLICATE, Some(1)), "Base name `profile/save` of ...");
/// };
///
/// impl AsyncOperation for UserOperation {
///     fn base_name(&self) -> &'static str {
///         match self {
///             Self::FetchUser => "fetchUser",
///             Self::SaveProfile => "profile/save",
///         }
///     }
/// }
///
/// impl UserOperation {
///     pub const OPERATIONS: &'static [Self] = &[Self::FetchUser, Self::SaveProfile];
/// }
/// ```
#[proc_macro_derive(AsyncOperation, attributes(async_operation))]
#[proc_macro_error]
pub fn async_operation_derive(input: TokenStream) -> TokenStream {
    let parsed_input: DeriveInput = parse(input).expect("A syn parseable token stream");
    let derived = impl_async_operation(&parsed_input);
    derived.into()
}

/// Validates the derive input and generates the `AsyncOperation`
/// implementation.
///
/// # Panics
///
/// This function will abort compilation if the input is not a non-generic enum
/// with at least one variant, all of them unit variants.
fn impl_async_operation(input: &DeriveInput) -> proc_macro2::TokenStream {
    let identifier = &input.ident;
    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        abort_call_site!("Deriving AsyncOperation is only supported for enums.");
    };
    if variants.is_empty() {
        abort_call_site!("Deriving AsyncOperation requires at least one variant.");
    }
    if !input.generics.params.is_empty() {
        abort!(
            input.generics,
            "Deriving AsyncOperation is not supported for generic enums."
        );
    }

    let operations: Vec<(&Ident, String)> = variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                abort!(
                    variant,
                    "AsyncOperation variants must be unit variants, `{}` carries data.",
                    variant.ident
                );
            }
            (&variant.ident, utils::variant_base_name(variant))
        })
        .collect();

    let unique_names_check = generate_unique_names_check(identifier, &operations);
    let async_operation_impl = generate_async_operation_impl(identifier, &operations);
    let operations_const = generate_operations_const(identifier, &operations);

    quote! {
        #unique_names_check

        #async_operation_impl

        #operations_const
    }
}

/// Generates compile-time assertions that no two variants share a base name.
///
/// Every variant after the first gets its own assertion, so the compile error
/// names the variant and the base name it repeats.
fn generate_unique_names_check(
    identifier: &Ident,
    operations: &[(&Ident, String)],
) -> proc_macro2::TokenStream {
    if operations.len() < 2 {
        return quote! {};
    }
    let base_names = operations.iter().map(|(_, base_name)| base_name);
    let assertions = operations
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, (variant, base_name))| {
            let message = format!(
                "Base name `{base_name}` of `{identifier}::{variant}` is already used by an earlier variant."
            )
            .replace('{', "{{")
            .replace('}', "}}");
            quote! {
                ::core::assert!(
                    !::core::matches!(FIRST_DUPLICATE, ::core::option::Option::Some(#index)),
                    #message
                );
            }
        });
    quote! {
        const _: () = {
            const FIRST_DUPLICATE: ::core::option::Option<usize> =
                ::async_actions::utils::const_checks::first_duplicate(&[#(#base_names),*]);
            #(#assertions)*
        };
    }
}

fn generate_async_operation_impl(
    identifier: &Ident,
    operations: &[(&Ident, String)],
) -> proc_macro2::TokenStream {
    let match_arms = operations.iter().map(|(variant, base_name)| {
        quote! { Self::#variant => #base_name }
    });
    quote! {
        impl ::async_actions::AsyncOperation for #identifier {
            fn base_name(&self) -> &'static str {
                match self {
                    #(#match_arms),*
                }
            }
        }
    }
}

/// Generates the `OPERATIONS` associated constant, listing every variant in
/// declaration order.
fn generate_operations_const(
    identifier: &Ident,
    operations: &[(&Ident, String)],
) -> proc_macro2::TokenStream {
    let variants = operations.iter().map(|(variant, _)| variant);
    quote! {
        impl #identifier {
            pub const OPERATIONS: &'static [Self] = &[#(Self::#variants),*];
        }
    }
}

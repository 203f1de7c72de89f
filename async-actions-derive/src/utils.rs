use convert_case::{Case, Casing as _};
use proc_macro_error2::abort;
use syn::{LitStr, Variant};

const ATTRIBUTE_NAME: &str = "async_operation";

/// Converts a variant name (`PascalCase`) to a base name in `camelCase`.
///
/// # Examples
/// ```rust,ignore
/// assert_eq!(variant_name_to_base_name("FetchUser"), "fetchUser");
/// assert_eq!(variant_name_to_base_name("Load"), "load");
/// ```
pub fn variant_name_to_base_name(name: &str) -> String {
    name.to_case(Case::Camel)
}

/// Resolves the base name of an enum variant.
///
/// An `#[async_operation(rename = "...")]` attribute takes precedence over the
/// converted variant name. The last `rename` wins if there are several.
///
/// # Errors
/// Aborts compilation on any other key inside `#[async_operation(...)]` or on
/// a `rename` value that is not a string literal.
pub fn variant_base_name(variant: &Variant) -> String {
    let mut rename = None;
    for attribute in variant
        .attrs
        .iter()
        .filter(|attribute| attribute.path().is_ident(ATTRIBUTE_NAME))
    {
        let parsed = attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported `async_operation` key, expected `rename`"))
            }
        });
        if let Err(error) = parsed {
            abort!(error.span(), "{}", error);
        }
    }
    rename.unwrap_or_else(|| variant_name_to_base_name(&variant.ident.to_string()))
}

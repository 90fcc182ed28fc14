//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in
//! terms of `crate::Unit`, `crate::Quantity` and `crate::ratio`, so it is intended to be used by
//! `mensura-core` (or by crates that expose an identical crate-root API). Downstream crates
//! defining their own units implement the `Unit` trait by hand instead.
//!
//! Most users should depend on `mensura` and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, with the `num`/`den` ratio reduced to lowest terms at compile time
//! - `core::fmt::Display for crate::Quantity<MyUnit, R>` (formats as `<value><symbol>`, no
//!   separator)
//!
//! plus a compile-time assertion that the ratio is positive.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `num = 1000`: numerator of the ratio to the canonical unit of the dimension
//! - `den = 1` (optional, defaults to `1`): denominator of that ratio
//!
//! `num` and `den` accept arbitrary constant expressions, so derived units can spell out their
//! definition (`num = 66 * 3_048, den = 100 * 10_000`) and let the reduction normalize it.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit, R>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension` and
/// `num` (with an optional `den`).
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let num = &unit_attr.num;
    let den = match &unit_attr.den {
        Some(den) => quote!(#den),
        None => quote!(1),
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const NUM: i64 = crate::ratio::reduce_num(#num, #den);
            const DEN: i64 = crate::ratio::reduce_den(#num, #den);
            const SYMBOL: &'static str = #symbol;
        }

        const _: () = {
            let num: i64 = #num;
            let den: i64 = #den;
            assert!(num > 0 && den > 0, "unit ratio must be positive");
        };

        impl<R: crate::Scalar> ::core::fmt::Display for crate::Quantity<#name, R> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}{}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    num: Expr,
    den: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut num: Option<Expr> = None;
        let mut den: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "num" => {
                    num = Some(input.parse()?);
                }
                "den" => {
                    den = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let num = num
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `num`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            num,
            den,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Distance, num = 1, den = 1)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.den.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_den_defaults() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Distance, num = 1_000)]
            pub struct Kilometer;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(attr.den.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Distance, num = 1)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", num = 1)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_num() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Distance)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("missing required attribute `num`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Distance, num = 1, ratio = 1.0)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_msg = err.to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Distance, num = 1, den = 1)]
            pub struct Meter;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let tokens = result.unwrap();
        let code = tokens.to_string();
        assert!(code.contains("impl crate :: Unit for Meter"));
        assert!(code.contains("const NUM : i64 = crate :: ratio :: reduce_num"));
        assert!(code.contains("const DEN : i64 = crate :: ratio :: reduce_den"));
        assert!(code.contains("const SYMBOL : & 'static str = \"m\""));
        assert!(code.contains("type Dim = Distance"));
    }

    #[test]
    fn test_derive_unit_impl_emits_display() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Distance, num = 1_000)]
            pub struct Kilometer;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("core :: fmt :: Display"));
        assert!(code.contains("crate :: Quantity < Kilometer , R >"));
    }

    #[test]
    fn test_derive_unit_impl_emits_positivity_assert() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "ft", dimension = Distance, num = 3_048, den = 10_000)]
            pub struct Foot;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("unit ratio must be positive"));
    }

    #[test]
    fn test_derive_unit_impl_with_expression_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "ch", dimension = Distance, num = 66 * 3_048, den = 100 * 10_000)]
            pub struct Chain;
        };

        let result = derive_unit_impl(input);
        assert!(result.is_ok());
        let code = result.unwrap().to_string();
        assert!(code.contains("66 * 3_048"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Distance, num = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_no_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Distance, num = 1
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Distance, num = 1
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let result = derive_unit_impl(input);
        assert!(result.is_err());
        let err = result.err().unwrap();
        let err_tokens = err.to_compile_error();
        let code = err_tokens.to_string();
        assert!(code.contains("compile_error"));
    }
}

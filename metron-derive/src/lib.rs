//! Derive macro implementation used by `metron-core`.
//!
//! `metron-derive` is an implementation detail of this workspace. The `Unit` derive expands in
//! terms of `crate::Unit`, `crate::Quantity`, and `crate::UnknownUnit`, so it is intended to be
//! used by `metron-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `metron` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a fieldless unit enum `MyUnit`, the derive implements:
//!
//! - inherent `const fn factor`, `const fn abbreviation`, and `const fn convert`
//! - `crate::Unit for MyUnit`
//! - `core::str::FromStr for MyUnit` (spelling lookup, exact then ASCII-case-insensitive)
//! - `core::fmt::Display for MyUnit` (writes the abbreviation)
//! - `crate::Quantity<MyUnit>::create`, a `const` constructor from a `(value, unit)` pair
//!
//! It also emits a compile-time assertion that the declared standard variant's factor is
//! exactly `1.0`.
//!
//! # Attributes
//!
//! The derive reads a required container-level `#[unit(...)]` attribute:
//!
//! - `dimensions = DIMS`: a `const` expression of type `crate::Dimensions`
//! - `standard = Variant`: the variant whose factor is `1.0` and in which values are stored
//!
//! and a required `#[unit(...)]` attribute on every variant:
//!
//! - `abbr = "km"`: the canonical abbreviation
//! - `factor = 1000.0`: conversion factor to the standard unit (any `const` expression)
//! - `spellings("km", "kilometer", "kilometers")`: accepted text spellings

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and its companion impls for a fieldless unit enum.
///
/// The derive must be paired with a container-level `#[unit(...)]` attribute providing
/// `dimensions` and `standard`, and a `#[unit(...)]` attribute on every variant providing
/// `abbr`, `factor`, and `spellings(...)`.
///
/// This macro is intended for use by `metron-core`.
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

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Unit)] only supports enums",
            ))
        }
    };

    let container = parse_container_attribute(&input.attrs, name)?;
    let dimensions = &container.dimensions;
    let standard = &container.standard;

    let mut idents: Vec<&Ident> = Vec::new();
    let mut factor_arms: Vec<TokenStream2> = Vec::new();
    let mut abbr_arms: Vec<TokenStream2> = Vec::new();
    let mut spelling_arms: Vec<TokenStream2> = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(Unit)] variants must be fieldless",
            ));
        }

        let attr = parse_variant_attribute(&variant.attrs, &variant.ident)?;
        let ident = &variant.ident;
        let abbr = &attr.abbr;
        let factor = &attr.factor;
        let spellings = &attr.spellings;

        idents.push(ident);
        factor_arms.push(quote! { Self::#ident => #factor });
        abbr_arms.push(quote! { Self::#ident => #abbr });
        spelling_arms.push(quote! { Self::#ident => &[#(#spellings),*] });
    }

    if !idents.iter().any(|ident| *ident == standard) {
        return Err(syn::Error::new_spanned(
            standard,
            "`standard` must name a variant of the enum",
        ));
    }

    // The arms are reused across the inherent and trait impls, so clone the token streams.
    let factor_arms_trait = factor_arms.clone();
    let abbr_arms_trait = abbr_arms.clone();

    let expanded = quote! {
        impl #name {
            /// Conversion factor from this unit to the standard unit of its kind.
            pub const fn factor(self) -> f64 {
                match self {
                    #(#factor_arms,)*
                }
            }

            /// Canonical abbreviation of this unit.
            pub const fn abbreviation(self) -> &'static str {
                match self {
                    #(#abbr_arms,)*
                }
            }

            /// Converts `value` expressed in `from` into the equivalent value in `to`.
            pub const fn convert(value: f64, from: Self, to: Self) -> f64 {
                if from as u32 == to as u32 {
                    return value;
                }
                value * from.factor() / to.factor()
            }
        }

        const _: () = assert!(
            #name::#standard.factor() == 1.0,
            "the standard unit's factor must be exactly 1.0",
        );

        impl crate::Unit for #name {
            const DIMENSIONS: crate::Dimensions = #dimensions;
            const STANDARD: Self = Self::#standard;
            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn factor(self) -> f64 {
                match self {
                    #(#factor_arms_trait,)*
                }
            }

            fn abbreviation(self) -> &'static str {
                match self {
                    #(#abbr_arms_trait,)*
                }
            }

            fn spellings(self) -> &'static [&'static str] {
                match self {
                    #(#spelling_arms,)*
                }
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::UnknownUnit;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as crate::Unit>::parse(s)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.abbreviation())
            }
        }

        impl crate::Quantity<#name> {
            /// Creates a quantity from a value expressed in `unit`.
            pub const fn create(value: f64, unit: #name) -> Self {
                Self::from_standard(value * unit.factor())
            }
        }
    };

    Ok(expanded)
}

// ─────────────────────────────────────────────
// Attribute parsing
// ─────────────────────────────────────────────

#[derive(Debug)]
struct ContainerAttribute {
    dimensions: Expr,
    standard: Ident,
}

impl Parse for ContainerAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimensions = None;
        let mut standard = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            if key == "dimensions" {
                dimensions = Some(input.parse::<Expr>()?);
            } else if key == "standard" {
                standard = Some(input.parse::<Ident>()?);
            } else {
                return Err(syn::Error::new_spanned(
                    key,
                    "unknown key in #[unit(...)], expected `dimensions` or `standard`",
                ));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ContainerAttribute {
            dimensions: dimensions
                .ok_or_else(|| input.error("missing `dimensions = ...` in #[unit(...)]"))?,
            standard: standard
                .ok_or_else(|| input.error("missing `standard = ...` in #[unit(...)]"))?,
        })
    }
}

#[derive(Debug)]
struct VariantAttribute {
    abbr: LitStr,
    factor: Expr,
    spellings: Vec<LitStr>,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut abbr = None;
        let mut factor = None;
        let mut spellings = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;

            if key == "abbr" {
                input.parse::<Token![=]>()?;
                abbr = Some(input.parse::<LitStr>()?);
            } else if key == "factor" {
                input.parse::<Token![=]>()?;
                factor = Some(input.parse::<Expr>()?);
            } else if key == "spellings" {
                let content;
                syn::parenthesized!(content in input);
                let parsed =
                    content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
                spellings = Some(parsed.into_iter().collect::<Vec<_>>());
            } else {
                return Err(syn::Error::new_spanned(
                    key,
                    "unknown key in #[unit(...)], expected `abbr`, `factor`, or `spellings`",
                ));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(VariantAttribute {
            abbr: abbr.ok_or_else(|| input.error("missing `abbr = ...` in #[unit(...)]"))?,
            factor: factor
                .ok_or_else(|| input.error("missing `factor = ...` in #[unit(...)]"))?,
            spellings: spellings
                .ok_or_else(|| input.error("missing `spellings(...)` in #[unit(...)]"))?,
        })
    }
}

fn parse_container_attribute(
    attrs: &[Attribute],
    enum_ident: &Ident,
) -> syn::Result<ContainerAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<ContainerAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        enum_ident,
        "missing #[unit(dimensions = ..., standard = ...)] attribute",
    ))
}

fn parse_variant_attribute(
    attrs: &[Attribute],
    variant_ident: &Ident,
) -> syn::Result<VariantAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<VariantAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        variant_ident,
        "missing #[unit(abbr = ..., factor = ..., spellings(...))] attribute",
    ))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn sample_enum() -> DeriveInput {
        parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s", "second", "seconds"))]
                Second,
                #[unit(abbr = "min", factor = 60.0, spellings("min", "minute", "minutes"))]
                Minute,
            }
        }
    }

    #[test]
    fn parses_container_attribute() {
        let input = sample_enum();
        let attr = parse_container_attribute(&input.attrs, &input.ident).unwrap();
        assert_eq!(attr.standard, "Second");
    }

    #[test]
    fn container_attribute_missing_dimensions_is_an_error() {
        let input: DeriveInput = parse_quote! {
            #[unit(standard = Second)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second,
            }
        };
        let err = parse_container_attribute(&input.attrs, &input.ident).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn container_attribute_missing_standard_is_an_error() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second,
            }
        };
        let err = parse_container_attribute(&input.attrs, &input.ident).unwrap_err();
        assert!(err.to_string().contains("standard"));
    }

    #[test]
    fn container_attribute_unknown_key_is_an_error() {
        let input: DeriveInput = parse_quote! {
            #[unit(dims = crate::Dimensions::TIME, standard = Second)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second,
            }
        };
        let err = parse_container_attribute(&input.attrs, &input.ident).unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn missing_container_attribute_is_an_error() {
        let input: DeriveInput = parse_quote! {
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second,
            }
        };
        let err = parse_container_attribute(&input.attrs, &input.ident).unwrap_err();
        assert!(err.to_string().contains("missing #[unit("));
    }

    #[test]
    fn parses_variant_attribute() {
        let input = sample_enum();
        let Data::Enum(data) = &input.data else {
            panic!("expected enum");
        };
        let second = &data.variants[0];
        let attr = parse_variant_attribute(&second.attrs, &second.ident).unwrap();
        assert_eq!(attr.abbr.value(), "s");
        assert_eq!(attr.spellings.len(), 3);
        assert_eq!(attr.spellings[1].value(), "second");
    }

    #[test]
    fn variant_attribute_accepts_expression_factors() {
        let variant: syn::Variant = parse_quote! {
            #[unit(abbr = "d", factor = 24.0 * 3_600.0, spellings("d", "day", "days"))]
            Day
        };
        let attr = parse_variant_attribute(&variant.attrs, &variant.ident).unwrap();
        assert!(matches!(attr.factor, Expr::Binary(_)));
    }

    #[test]
    fn variant_attribute_accepts_trailing_comma() {
        let variant: syn::Variant = parse_quote! {
            #[unit(abbr = "s", factor = 1.0, spellings("s", "second",),)]
            Second
        };
        let attr = parse_variant_attribute(&variant.attrs, &variant.ident).unwrap();
        assert_eq!(attr.spellings.len(), 2);
    }

    #[test]
    fn variant_attribute_missing_factor_is_an_error() {
        let variant: syn::Variant = parse_quote! {
            #[unit(abbr = "s", spellings("s"))]
            Second
        };
        let err = parse_variant_attribute(&variant.attrs, &variant.ident).unwrap_err();
        assert!(err.to_string().contains("factor"));
    }

    #[test]
    fn variant_attribute_missing_spellings_is_an_error() {
        let variant: syn::Variant = parse_quote! {
            #[unit(abbr = "s", factor = 1.0)]
            Second
        };
        let err = parse_variant_attribute(&variant.attrs, &variant.ident).unwrap_err();
        assert!(err.to_string().contains("spellings"));
    }

    #[test]
    fn variant_attribute_unknown_key_is_an_error() {
        let variant: syn::Variant = parse_quote! {
            #[unit(abbr = "s", factor = 1.0, ratio = 2.0, spellings("s"))]
            Second
        };
        let err = parse_variant_attribute(&variant.attrs, &variant.ident).unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn missing_variant_attribute_is_an_error() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
            enum TimeUnit {
                Second,
            }
        };
        let err = derive_unit_impl(input).unwrap_err();
        assert!(err.to_string().contains("missing #[unit("));
    }

    #[test]
    fn generates_unit_impl() {
        let tokens = derive_unit_impl(sample_enum()).unwrap().to_string();
        assert!(tokens.contains("impl crate :: Unit for TimeUnit"));
        assert!(tokens.contains("const STANDARD : Self = Self :: Second"));
        assert!(tokens.contains("const DIMENSIONS : crate :: Dimensions"));
    }

    #[test]
    fn generates_inherent_const_fns() {
        let tokens = derive_unit_impl(sample_enum()).unwrap().to_string();
        assert!(tokens.contains("pub const fn factor"));
        assert!(tokens.contains("pub const fn abbreviation"));
        assert!(tokens.contains("pub const fn convert"));
    }

    #[test]
    fn generates_standard_factor_assertion() {
        let tokens = derive_unit_impl(sample_enum()).unwrap().to_string();
        assert!(tokens.contains("TimeUnit :: Second . factor () == 1.0"));
    }

    #[test]
    fn generates_from_str_and_display() {
        let tokens = derive_unit_impl(sample_enum()).unwrap().to_string();
        assert!(tokens.contains("impl :: core :: str :: FromStr for TimeUnit"));
        assert!(tokens.contains("impl :: core :: fmt :: Display for TimeUnit"));
    }

    #[test]
    fn generates_quantity_create() {
        let tokens = derive_unit_impl(sample_enum()).unwrap().to_string();
        assert!(tokens.contains("impl crate :: Quantity < TimeUnit >"));
        assert!(tokens.contains("pub const fn create"));
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
            struct TimeUnit;
        };
        let err = derive_unit_impl(input).unwrap_err();
        assert!(err.to_string().contains("only supports enums"));
    }

    #[test]
    fn rejects_variants_with_fields() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second(f64),
            }
        };
        let err = derive_unit_impl(input).unwrap_err();
        assert!(err.to_string().contains("fieldless"));
    }

    #[test]
    fn rejects_unknown_standard_variant() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Hour)]
            enum TimeUnit {
                #[unit(abbr = "s", factor = 1.0, spellings("s"))]
                Second,
            }
        };
        let err = derive_unit_impl(input).unwrap_err();
        assert!(err.to_string().contains("must name a variant"));
    }

    #[test]
    fn errors_surface_as_compile_error_tokens() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimensions = crate::Dimensions::TIME, standard = Second)]
            struct TimeUnit;
        };
        let err = derive_unit_impl(input).unwrap_err();
        let tokens = err.to_compile_error().to_string();
        assert!(tokens.contains("compile_error"));
    }
}

//! Procedural macros for the aoc-runner harness

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro registering a solution with the harness
///
/// Emits an `inventory` submission for the annotated unit struct so the
/// registry discovers it at startup. The struct must implement
/// `aoc_runner::Solution`; a missing implementation fails at compile time
/// inside the generated factory.
///
/// # Attributes
///
/// - `#[solution(day = N, part = N)]`: Required, once. `day` is 1-25 and
///   `part` is 1 or 2. An optional `variant = "name"` marks an alternate
///   take on the same part; without it the solution is the canonical one
///   and answers to the `part1`/`part2` selector token.
/// - `#[input(path = "...")]`: Optional, repeatable, one per registered
///   input. `kind` is one of `standard` (default), `example`, or
///   `challenge`; `name` and `description` are optional string literals;
///   `default` prefers this input during default resolution; `embedded`
///   compiles the file into the binary with `include_str!`, resolved
///   relative to the file containing the struct.
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{RegisterSolution, Solution, SolveError};
///
/// #[derive(RegisterSolution)]
/// #[solution(day = 6, part = 2, variant = "xor")]
/// #[input(path = "inputs/day06.txt")]
/// #[input(path = "inputs/day06_example.txt", kind = example, embedded)]
/// struct Part2Xor;
///
/// impl Solution for Part2Xor {
///     fn run(&self, input: &str) -> Result<String, SolveError> {
///         // ... implementation
///     }
/// }
/// ```
#[proc_macro_derive(RegisterSolution, attributes(solution, input))]
pub fn derive_register_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct SolutionKey {
    day: u8,
    part: u8,
    variant: Option<LitStr>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    ensure_unit_struct(input)?;

    let key = parse_solution_attr(input)?;
    let inputs: Vec<TokenStream2> = input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("input"))
        .map(parse_input_attr)
        .collect::<syn::Result<_>>()?;

    let ident = &input.ident;
    let day = key.day;
    let part = key.part;
    let variant = match &key.variant {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };

    Ok(quote! {
        const _: () = {
            fn __aoc_runner_factory() -> ::std::boxed::Box<dyn ::aoc_runner::Solution> {
                ::std::boxed::Box::new(#ident)
            }

            ::aoc_runner::inventory::submit! {
                ::aoc_runner::SolutionPlugin {
                    day: #day,
                    part: #part,
                    variant: #variant,
                    inputs: &[#(#inputs),*],
                    factory: __aoc_runner_factory,
                }
            }
        };
    })
}

fn ensure_unit_struct(input: &DeriveInput) -> syn::Result<()> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => Ok(()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "RegisterSolution only supports unit structs",
        )),
    }
}

fn parse_solution_attr(input: &DeriveInput) -> syn::Result<SolutionKey> {
    let mut attrs = input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("solution"));
    let attr = attrs.next().ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing #[solution(day = ..., part = ...)] attribute",
        )
    })?;
    if let Some(extra) = attrs.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "only one #[solution] attribute is allowed",
        ));
    }

    let mut day: Option<u8> = None;
    let mut part: Option<u8> = None;
    let mut variant: Option<LitStr> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("part") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=2).contains(&value) {
                return Err(syn::Error::new(lit.span(), "part must be 1 or 2"));
            }
            part = Some(value);
        } else if meta.path.is_ident("variant") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().trim().is_empty() {
                return Err(syn::Error::new(lit.span(), "variant name must not be empty"));
            }
            variant = Some(lit);
        } else {
            return Err(meta.error("unsupported key, expected day, part, or variant"));
        }
        Ok(())
    })?;

    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'day'"))?;
    let part = part.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'part'"))?;
    Ok(SolutionKey { day, part, variant })
}

fn parse_input_attr(attr: &syn::Attribute) -> syn::Result<TokenStream2> {
    let mut path: Option<LitStr> = None;
    let mut kind = quote! { ::aoc_runner::InputKind::Standard };
    let mut name: Option<LitStr> = None;
    let mut description: Option<LitStr> = None;
    let mut default = false;
    let mut embedded = false;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("path") {
            path = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("kind") {
            let ident: syn::Ident = meta.value()?.parse()?;
            kind = match ident.to_string().as_str() {
                "standard" => quote! { ::aoc_runner::InputKind::Standard },
                "example" => quote! { ::aoc_runner::InputKind::Example },
                "challenge" => quote! { ::aoc_runner::InputKind::Challenge },
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        "expected standard, example, or challenge",
                    ));
                }
            };
        } else if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("description") {
            description = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("default") {
            default = true;
        } else if meta.path.is_ident("embedded") {
            embedded = true;
        } else {
            return Err(meta.error(
                "unsupported key, expected path, kind, name, description, default, or embedded",
            ));
        }
        Ok(())
    })?;

    let path = path.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'path'"))?;
    let name = option_tokens(&name);
    let description = option_tokens(&description);
    let source = if embedded {
        quote! { ::aoc_runner::InputSource::Embedded(::core::include_str!(#path)) }
    } else {
        quote! { ::aoc_runner::InputSource::OnDisk }
    };

    Ok(quote! {
        ::aoc_runner::InputSpec {
            path: #path,
            kind: #kind,
            name: #name,
            description: #description,
            source: #source,
            default: #default,
        }
    })
}

fn option_tokens(lit: &Option<LitStr>) -> TokenStream2 {
    match lit {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    }
}

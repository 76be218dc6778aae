use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type, Variant};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

pub(crate) fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_name = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("sgrate_error can only be applied to enums"); };
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match parse_variant(variant) {
            Ok(parsed) => variants.push(parsed),
            Err(err) => return err,
        }
    }

    let ext_trait = expand_ext_trait(name, &ext_name, &variants);
    let from_impls = variants.iter().filter_map(|v| expand_from_impl(name, &ext_name, v));
    let internal_impls = expand_internal_impls(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #[derive(Debug, ::thiserror::Error)]
        #input

        #ext_trait
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(variant: &Variant) -> Result<ErrorVariant<'_>, TokenStream> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "sgrate_error requires named fields for source/context handling",
        )
        .to_compile_error());
    };

    let source = fields.named.iter().find_map(|field| {
        let ident = field.ident.as_ref()?;
        let marked = field.attrs.iter().any(|attr| {
            attr.path().is_ident("source") || attr.path().is_ident("from")
        });
        (ident == "source" || marked).then_some((ident, &field.ty))
    });

    let has_context =
        fields.named.iter().any(|field| field.ident.as_ref().is_some_and(|i| i == "context"));

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "sgrate_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        )
        .to_compile_error());
    }

    Ok(ErrorVariant { ident: &variant.ident, source, has_context })
}

fn expand_ext_trait(
    name: &Ident,
    ext_name: &Ident,
    variants: &[ErrorVariant<'_>],
) -> TokenStream {
    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        quote! { #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext_name<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_name<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    #[allow(unreachable_patterns)]
                    match &mut e {
                        #( #context_arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn expand_from_impl(
    name: &Ident,
    ext_name: &Ident,
    variant: &ErrorVariant<'_>,
) -> Option<TokenStream> {
    // Internal keeps its string conversions; a source there would shadow them.
    if variant.ident == "Internal" {
        return None;
    }
    let (source_field, source_ty) = variant.source?;
    let v_ident = variant.ident;

    Some(quote! {
        #[automatically_derived]
        impl From<#source_ty> for #name {
            #[inline]
            fn from(#source_field: #source_ty) -> Self { Self::#v_ident { #source_field, context: None } }
        }

        impl<T> #ext_name<T> for std::result::Result<T, #source_ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#source_field| #name::#v_ident { #source_field, context: Some(context.into()) })
            }
        }
    })
}

fn expand_internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    if !variants.iter().any(|v| v.ident == "Internal") {
        return quote!();
    }

    quote! {
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

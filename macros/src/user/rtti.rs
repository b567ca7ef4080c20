use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Member, Type};

use crate::common::{field_options, forbid_rtti_attrs};

/// #[derive(Rtti)] generates a call to the declarative macro bridge.
///
/// The proc-macro only gathers the type name and its base fields. The bridge
/// (`__impl_rtti!`) writes the impls, so `module_path!()` is expanded in the
/// deriving module and the identity name reads `crate::module::Type`.
pub fn expand_derive_rtti(input: DeriveInput) -> TokenStream2 {
    match collect_bases(&input) {
        Ok(bases) => {
            let ident = &input.ident;
            let members = bases.iter().map(|(member, _)| member);
            let types = bases.iter().map(|(_, ty)| ty);
            quote! {
                ::tola_cast::__impl_rtti!(#ident; #(#members: #types),*);
            }
        }
        Err(err) => err.to_compile_error(),
    }
}

fn collect_bases(input: &DeriveInput) -> syn::Result<Vec<(Member, Type)>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Rtti cannot be derived for generic types: one identity record cannot cover every instantiation",
        ));
    }
    forbid_rtti_attrs(&input.attrs, "the type itself")?;

    match &input.data {
        Data::Struct(data) => struct_bases(&data.fields),
        Data::Enum(data) => {
            for variant in &data.variants {
                forbid_rtti_attrs(&variant.attrs, "enum variants")?;
                for field in &variant.fields {
                    forbid_rtti_attrs(&field.attrs, "enum variant fields")?;
                }
            }
            Ok(Vec::new())
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Rtti cannot be derived for unions",
        )),
    }
}

fn struct_bases(fields: &Fields) -> syn::Result<Vec<(Member, Type)>> {
    let mut bases = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !field_options(field)?.base {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        bases.push((member, field.ty.clone()));
    }
    Ok(bases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(source: &str) -> String {
        let input: DeriveInput = syn::parse_str(source).expect("derive input");
        expand_derive_rtti(input).to_string()
    }

    #[test]
    fn test_named_bases_in_order() {
        let out = expand(
            "struct Tree { #[rtti(base)] container: Container, depth: u32, #[rtti(base)] node: Node }",
        );
        assert!(out.contains("__impl_rtti"));
        let container = out.find("container : Container").expect("first base");
        let node = out.find("node : Node").expect("second base");
        assert!(container < node);
        assert!(!out.contains("depth"));
    }

    #[test]
    fn test_tuple_base_uses_index() {
        let out = expand("struct Wrapper(u8, #[rtti(base)] Node);");
        assert!(out.contains("1 : Node"));
    }

    #[test]
    fn test_no_bases() {
        let out = expand("struct Node { value: i32 }");
        assert!(out.contains("__impl_rtti ! (Node ;)"));
    }

    #[test]
    fn test_generic_rejected() {
        let out = expand("struct Holder<T> { value: T }");
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let out = expand("struct Bad { #[rtti(parent)] node: Node }");
        assert!(out.contains("unsupported rtti option"));
    }
}

//! `#[rtti(...)]` attribute parsing

use syn::{Attribute, Field};

/// Name of the helper attribute accepted by `#[derive(Rtti)]`.
pub const RTTI_ATTR: &str = "rtti";

/// Options recognised inside `#[rtti(...)]` on a field.
#[derive(Default)]
pub struct FieldOptions {
    pub base: bool,
}

/// Parse every `#[rtti(...)]` on `field`.
///
/// Unknown keys are reported at their own span.
pub fn field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in rtti_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                options.base = true;
                Ok(())
            } else {
                Err(meta.error("unsupported rtti option, expected `base`"))
            }
        })?;
    }
    Ok(options)
}

/// Reject `#[rtti(...)]` where it has no meaning.
pub fn forbid_rtti_attrs(attrs: &[Attribute], place: &str) -> syn::Result<()> {
    match rtti_attrs(attrs).next() {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("#[rtti(...)] is not supported on {place}"),
        )),
        None => Ok(()),
    }
}

fn rtti_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(RTTI_ATTR))
}

//! Derives for parameter schema structs.
//!
//! Both derives read a field's doc comment. A `(Default: <expr>)` marker anywhere in it provides
//! the default value, the remaining text becomes the parameter description.
use quote::quote;
use syn::{parse_quote, Attribute, Expr, Lit, LitStr, Meta, MetaNameValue};
use synstructure::decl_derive;

/// String valued `name = "..."` attributes with the given name.
fn name_value_attrs(attrs: &[Attribute], name: &str) -> Vec<LitStr> {
    let mut values = vec![];
    for attr in attrs.iter() {
        if let Ok(Meta::NameValue(MetaNameValue {
            ident,
            lit: Lit::Str(value),
            ..
        })) = attr.parse_meta()
        {
            if ident == name {
                values.push(value);
            }
        }
    }
    values
}

fn default_re() -> regex::Regex {
    regex::Regex::new(r"\(Default: (.*)\)").unwrap()
}

/// The expression of the `(Default: ...)` marker, if present.
fn doc_default(attrs: &[Attribute]) -> Option<Expr> {
    let default_re = default_re();
    for doc_str in name_value_attrs(attrs, "doc") {
        if let Some(default_str) = default_re.captures(&doc_str.value()) {
            let default_str = default_str.get(1).unwrap().as_str();
            let default_str = LitStr::new(default_str, doc_str.span());
            return Some(
                default_str
                    .parse()
                    .expect("error parsing default expression"),
            );
        }
    }
    None
}

/// The doc comment as a single line, without the default marker.
fn doc_description(attrs: &[Attribute]) -> String {
    let text = name_value_attrs(attrs, "doc")
        .iter()
        .map(|line| line.value().trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    default_re().replace_all(&text, "").trim().to_owned()
}

/// Derives a default instance from the documentation.
fn derive_doc_default(s: synstructure::Structure) -> proc_macro2::TokenStream {
    let variant = match s.variants() {
        [variant] => variant,
        _ => panic!("DocDefault requires a struct"),
    };

    let body = variant.construct(|field, _| {
        doc_default(&field.attrs).unwrap_or_else(|| parse_quote!(Default::default()))
    });

    s.gen_impl(quote! {
        gen impl Default for @Self {
            fn default() -> Self {
                #body
            }
        }
    })
}

/// Derives `ParamSchema`, reading every field from the parameter store under the field's name.
///
/// The struct needs a `#[param_module = "..."]` attribute and a `Default` impl, usually from
/// `DocDefault`.
fn derive_param_schema(s: synstructure::Structure) -> proc_macro2::TokenStream {
    let variant = match s.variants() {
        [variant] => variant,
        _ => panic!("ParamSchema requires a struct"),
    };

    let module = match &name_value_attrs(&s.ast().attrs, "param_module")[..] {
        [module] => module.value(),
        _ => panic!("ParamSchema requires a single #[param_module = \"...\"] attribute"),
    };

    let mut lookups = vec![];
    let mut descrs = vec![];

    for binding in variant.bindings() {
        let field = binding.ast();
        let ident = field
            .ident
            .as_ref()
            .expect("ParamSchema requires named fields");
        let ty = &field.ty;
        let name = ident.to_string();
        let description = doc_description(&field.attrs);

        lookups.push(quote! {
            #ident: params
                .lookup_in::<#ty>(Self::MODULE, #name)
                .unwrap_or(defaults.#ident)
        });

        descrs.push(quote! {
            descrs.insert(::satconf::descrs::ParamDescr {
                module: Self::MODULE,
                name: #name,
                kind: <#ty as ::satconf::schema::ParamValue>::KIND,
                description: #description,
                default: ::satconf::schema::ParamValue::render(&defaults.#ident),
            });
        });
    }

    s.gen_impl(quote! {
        gen impl ::satconf::schema::ParamSchema for @Self {
            const MODULE: &'static str = #module;

            fn from_params(params: &::satconf::params::Params) -> Self {
                let defaults = <Self as ::std::default::Default>::default();
                Self {
                    #(#lookups,)*
                }
            }

            fn collect_param_descrs(descrs: &mut ::satconf::descrs::ParamDescrs) {
                let defaults = <Self as ::std::default::Default>::default();
                #(#descrs)*
            }
        }
    })
}

decl_derive!([DocDefault] => derive_doc_default);
decl_derive!([ParamSchema, attributes(param_module)] => derive_param_schema);

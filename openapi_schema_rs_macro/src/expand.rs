use crate::field_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, GenericParam, parse_quote};

/// Generates the `Describe` impl for a struct or enum.
pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    let body: TokenStream = match &input.data {
        Data::Struct(data) => describe_struct(input, data)?,
        Data::Enum(data) => describe_enum(data),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "`#[derive(Describe)]` does not support unions",
            ));
        }
    };

    let mut generics = input.generics.clone();
    let type_params: Vec<syn::Ident> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for param in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::openapi_schema_rs::Describe));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::openapi_schema_rs::Describe for #ident #ty_generics #where_clause {
            fn describe<__R>(reflector: __R) -> <__R as ::openapi_schema_rs::Reflector>::Output
            where
                __R: ::openapi_schema_rs::Reflector,
            {
                #body
            }
        }
    })
}

fn unsupported() -> TokenStream {
    quote! {
        ::openapi_schema_rs::Reflector::reflect_unsupported(
            reflector,
            ::std::any::type_name::<Self>(),
        )
    }
}

fn describe_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    // Newtypes and transparent structs serialize as their single field.
    let transparent: bool = field_name::is_transparent(&input.attrs)?;
    if transparent || matches!(&data.fields, Fields::Unnamed(fields) if fields.unnamed.len() == 1)
    {
        let Some(inner) = data.fields.iter().next() else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "transparent struct must have exactly one field",
            ));
        };
        let ty = &inner.ty;
        return Ok(quote! {
            ::openapi_schema_rs::Reflector::reflect_pointer::<#ty>(reflector)
        });
    }

    let Fields::Named(fields) = &data.fields else {
        return Ok(unsupported());
    };

    let name: String = input.ident.to_string();
    let mut described: Vec<TokenStream> = Vec::new();
    for field in &fields.named {
        let Some(wire_name) = field_name::resolve(&field.attrs)? else {
            continue;
        };
        let ty = &field.ty;
        described.push(quote! {
            ::openapi_schema_rs::StructReflector::field::<#ty>(&mut fields, #wire_name);
        });
    }

    if described.is_empty() {
        return Ok(quote! {
            ::openapi_schema_rs::StructReflector::end(
                ::openapi_schema_rs::Reflector::reflect_struct(reflector, #name),
            )
        });
    }

    Ok(quote! {
        let mut fields = ::openapi_schema_rs::Reflector::reflect_struct(reflector, #name);
        #( #described )*
        ::openapi_schema_rs::StructReflector::end(fields)
    })
}

/// Enums made only of unit variants serialize as their variant names.
fn describe_enum(data: &DataEnum) -> TokenStream {
    let unit_only: bool = !data.variants.is_empty()
        && data
            .variants
            .iter()
            .all(|variant| matches!(variant.fields, Fields::Unit));
    if unit_only {
        quote! {
            ::openapi_schema_rs::Reflector::reflect_string(reflector)
        }
    } else {
        unsupported()
    }
}

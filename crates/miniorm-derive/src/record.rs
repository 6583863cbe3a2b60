use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use miniorm_primitives::naming::snake_case;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident, Type, Visibility, ext::IdentExt};

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<Ignored, RecordField>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(column))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,

    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    flatten: bool,
}

///
/// FieldRole
///
/// What the generated code does with one declared field.
///

enum FieldRole {
    Column(String),
    Flatten,
    Ignored,
}

impl RecordField {
    fn validate(&self) -> Result<(), darling::Error> {
        let ident = self.ident.as_ref().expect("named field");

        if self.flatten && (self.skip || self.rename.is_some()) {
            return Err(darling::Error::custom(
                "`flatten` cannot be combined with `rename` or `skip`",
            )
            .with_span(ident));
        }

        if self.rename.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(darling::Error::custom("`rename` requires a non-empty column key")
                .with_span(ident));
        }

        Ok(())
    }

    fn role(&self) -> FieldRole {
        // only `pub` fields are visible to the mapper
        if self.skip || !matches!(self.vis, Visibility::Public(_)) {
            return FieldRole::Ignored;
        }

        if let Some(name) = &self.rename {
            return FieldRole::Column(name.to_lowercase());
        }

        if self.flatten {
            return FieldRole::Flatten;
        }

        let ident = self.ident.as_ref().expect("named field").unraw();

        FieldRole::Column(snake_case(&ident.to_string()))
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    let fields = record
        .data
        .take_struct()
        .expect("supports(struct_named)")
        .fields;

    let errors: Vec<darling::Error> = fields.iter().filter_map(|f| f.validate().err()).collect();
    if !errors.is_empty() {
        return darling::Error::multiple(errors).write_errors();
    }

    let mut describe = Vec::new();
    let mut arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_ty = &field.ty;

        match field.role() {
            FieldRole::Column(key) => {
                describe.push(quote! {
                    fields.insert(#key, prefix.child(#index));
                });
                arms.push(quote! {
                    [#index] => ::core::option::Option::Some(
                        &mut self.#field_ident as &mut dyn ::miniorm::traits::ScanTarget,
                    ),
                });
            }
            FieldRole::Flatten => {
                describe.push(quote! {
                    <#field_ty as ::miniorm::traits::Record>::describe(
                        fields,
                        &prefix.child(#index),
                    );
                });
                arms.push(quote! {
                    [#index, rest @ ..] => {
                        ::miniorm::traits::FieldBinder::field_mut(&mut self.#field_ident, rest)
                    }
                });
            }
            FieldRole::Ignored => {}
        }
    }

    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    quote! {
        impl #impl_generics ::miniorm::traits::FieldBinder for #ident #ty_generics #where_clause {
            fn field_mut(
                &mut self,
                path: &[usize],
            ) -> ::core::option::Option<&mut dyn ::miniorm::traits::ScanTarget> {
                match path {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::miniorm::traits::Record for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn describe(
                fields: &mut ::miniorm::model::FieldMap,
                prefix: &::miniorm::model::FieldPath,
            ) {
                #(#describe)*
            }
        }
    }
}

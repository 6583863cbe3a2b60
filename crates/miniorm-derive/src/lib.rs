use proc_macro::TokenStream;

mod record;

/// Derive `Record` and `FieldBinder` for a struct with named fields.
///
/// Field attributes, under `#[column(...)]`:
/// - `rename = "key"` maps the field to an explicit column key
/// - `skip` never maps the field
/// - `flatten` walks an embedded record's fields in place
///
/// Fields that are not `pub` are never mapped.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

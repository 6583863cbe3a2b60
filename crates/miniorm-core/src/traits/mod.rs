mod scan;

pub use scan::ValueError;

use crate::{
    model::{FieldMap, FieldPath},
    value::Value,
};

///
/// Record
///
/// A record type whose fields map to relation columns.
/// Usually derived with `#[derive(Record)]`, which also derives `FieldBinder`.
///

pub trait Record: FieldBinder + Default + Send + 'static {
    /// Insert this type's column keys into `fields`, addressed under `prefix`,
    /// walking fields in declaration order.
    fn describe(fields: &mut FieldMap, prefix: &FieldPath);

    /// Column key index rooted at this type.
    #[must_use]
    fn field_map() -> FieldMap {
        let mut fields = FieldMap::new();
        Self::describe(&mut fields, &FieldPath::root());

        fields
    }
}

///
/// FieldBinder
///
/// Typed, reflection-free access to the field a FieldPath addresses.
///

pub trait FieldBinder {
    /// Writable destination for the field at `path`, or `None` if `path` does
    /// not address a mapped field of this type.
    fn field_mut(&mut self, path: &[usize]) -> Option<&mut dyn ScanTarget>;
}

///
/// ScanTarget
///
/// Destination a row cell is written into.
///

pub trait ScanTarget {
    /// Convert `value` and store it.
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError>;

    /// Materialize backing storage so a following `scan_value` always has
    /// somewhere to write. Nullable targets override this.
    fn prepare(&mut self) {}

    /// True when the target accepts `Value::Null`.
    fn is_nullable(&self) -> bool {
        false
    }
}

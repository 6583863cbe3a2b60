use crate::{
    traits::ScanTarget,
    value::{Value, ValueKind},
};
use thiserror::Error as ThisError;

///
/// ValueError
/// A cell could not be converted into its destination type.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("cannot scan {found} into {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: ValueKind,
    },

    #[error("value {value} out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    #[error("cannot parse '{text}' as {target}")]
    Parse { target: &'static str, text: String },
}

impl ValueError {
    const fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }
}

//
// Scalars
//

impl ScanTarget for bool {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        *self = match value {
            Value::Bool(v) => v,
            Value::Int(0) | Value::Uint(0) => false,
            Value::Int(1) | Value::Uint(1) => true,
            Value::Int(v) => {
                return Err(ValueError::OutOfRange {
                    target: "bool",
                    value: v.to_string(),
                });
            }
            Value::Uint(v) => {
                return Err(ValueError::OutOfRange {
                    target: "bool",
                    value: v.to_string(),
                });
            }
            other => return Err(ValueError::mismatch("bool", &other)),
        };

        Ok(())
    }
}

macro_rules! impl_scan_int {
    ($($ty:ty),*) => {
        $(
            impl ScanTarget for $ty {
                fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
                    const TARGET: &str = stringify!($ty);

                    *self = match value {
                        Value::Int(v) => <$ty>::try_from(v).map_err(|_| ValueError::OutOfRange {
                            target: TARGET,
                            value: v.to_string(),
                        })?,
                        Value::Uint(v) => <$ty>::try_from(v).map_err(|_| ValueError::OutOfRange {
                            target: TARGET,
                            value: v.to_string(),
                        })?,
                        Value::Text(text) => text.trim().parse::<$ty>().map_err(|_| {
                            ValueError::Parse { target: TARGET, text }
                        })?,
                        other => return Err(ValueError::mismatch(TARGET, &other)),
                    };

                    Ok(())
                }
            }
        )*
    };
}

impl_scan_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_scan_float {
    ($($ty:ty),*) => {
        $(
            impl ScanTarget for $ty {
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
                    const TARGET: &str = stringify!($ty);

                    *self = match value {
                        Value::Float(v) => v as $ty,
                        Value::Int(v) => v as $ty,
                        Value::Uint(v) => v as $ty,
                        Value::Text(text) => text.trim().parse::<$ty>().map_err(|_| {
                            ValueError::Parse { target: TARGET, text }
                        })?,
                        other => return Err(ValueError::mismatch(TARGET, &other)),
                    };

                    Ok(())
                }
            }
        )*
    };
}

impl_scan_float!(f32, f64);

impl ScanTarget for String {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        *self = match value {
            Value::Text(v) => v,
            Value::Blob(bytes) => Self::from_utf8(bytes).map_err(|_| ValueError::TypeMismatch {
                expected: "String",
                found: ValueKind::Blob,
            })?,
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Null => return Err(ValueError::mismatch("String", &Value::Null)),
        };

        Ok(())
    }
}

impl ScanTarget for Vec<u8> {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        *self = match value {
            Value::Blob(v) => v,
            Value::Text(v) => v.into_bytes(),
            other => return Err(ValueError::mismatch("Vec<u8>", &other)),
        };

        Ok(())
    }
}

// untyped passthrough, accepts anything including null
impl ScanTarget for Value {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        *self = value;

        Ok(())
    }

    fn is_nullable(&self) -> bool {
        true
    }
}

//
// Wrappers
//

impl<T: ScanTarget + Default> ScanTarget for Option<T> {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        self.get_or_insert_with(T::default).scan_value(value)
    }

    fn prepare(&mut self) {
        self.get_or_insert_with(T::default).prepare();
    }

    fn is_nullable(&self) -> bool {
        true
    }
}

impl<T: ScanTarget + ?Sized> ScanTarget for Box<T> {
    fn scan_value(&mut self, value: Value) -> Result<(), ValueError> {
        (**self).scan_value(value)
    }

    fn prepare(&mut self) {
        (**self).prepare();
    }

    fn is_nullable(&self) -> bool {
        (**self).is_nullable()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<T: ScanTarget + Default>(value: Value) -> Result<T, ValueError> {
        let mut target = T::default();
        target.scan_value(value)?;

        Ok(target)
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(scan::<i32>(Value::Int(7)), Ok(7));
        assert_eq!(scan::<u8>(Value::Uint(255)), Ok(255));
        assert_eq!(scan::<i64>(Value::Uint(9)), Ok(9));
        assert!(matches!(
            scan::<u8>(Value::Int(-1)),
            Err(ValueError::OutOfRange { target: "u8", .. })
        ));
        assert!(matches!(
            scan::<i8>(Value::Uint(300)),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn integers_parse_text_cells() {
        assert_eq!(scan::<i64>(Value::Text(" 42 ".into())), Ok(42));
        assert_eq!(
            scan::<i64>(Value::Text("x".into())),
            Err(ValueError::Parse {
                target: "i64",
                text: "x".into(),
            })
        );
    }

    #[test]
    fn null_into_plain_field_is_a_mismatch() {
        assert_eq!(
            scan::<i64>(Value::Null),
            Err(ValueError::TypeMismatch {
                expected: "i64",
                found: ValueKind::Null,
            })
        );
        assert!(scan::<String>(Value::Null).is_err());
    }

    #[test]
    fn floats_widen_integers() {
        assert_eq!(scan::<f64>(Value::Int(3)), Ok(3.0));
        assert_eq!(scan::<f32>(Value::Float(0.5)), Ok(0.5));
    }

    #[test]
    fn bool_accepts_zero_and_one() {
        assert_eq!(scan::<bool>(Value::Int(1)), Ok(true));
        assert_eq!(scan::<bool>(Value::Uint(0)), Ok(false));
        assert!(scan::<bool>(Value::Int(2)).is_err());
        assert!(scan::<bool>(Value::Text("true".into())).is_err());
    }

    #[test]
    fn strings_accept_text_blob_and_scalars() {
        assert_eq!(scan::<String>(Value::Text("x".into())), Ok("x".into()));
        assert_eq!(scan::<String>(Value::Blob(b"ab".to_vec())), Ok("ab".into()));
        assert_eq!(scan::<String>(Value::Int(-4)), Ok("-4".into()));
        assert!(scan::<String>(Value::Blob(vec![0xff])).is_err());
    }

    #[test]
    fn option_prepares_backing_storage() {
        let mut target: Option<i64> = None;
        target.prepare();
        assert_eq!(target, Some(0));
        assert!(target.is_nullable());

        target.scan_value(Value::Int(5)).unwrap();
        assert_eq!(target, Some(5));

        target.scan_value(Value::Null).unwrap();
        assert_eq!(target, None);
    }

    #[test]
    fn option_without_prepare_still_writes_through() {
        assert_eq!(scan::<Option<String>>(Value::Text("y".into())), Ok(Some("y".into())));
    }

    #[test]
    fn value_target_takes_anything() {
        assert_eq!(scan::<Value>(Value::Blob(vec![1])), Ok(Value::Blob(vec![1])));
        assert_eq!(scan::<Value>(Value::Null), Ok(Value::Null));
    }

    #[test]
    fn boxed_targets_delegate() {
        let mut target: Box<Option<u32>> = Box::default();
        target.prepare();
        assert_eq!(*target, Some(0));
        target.scan_value(Value::Uint(9)).unwrap();
        assert_eq!(*target, Some(9));
    }
}

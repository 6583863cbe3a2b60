use crate::{error::ErrorClass, traits::Record};
use thiserror::Error as ThisError;

///
/// ResponseError
/// Errors related to interpreting a materialized response.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResponseError {
    #[error("expected a row, found 0 (model {model})")]
    NotFound { model: &'static str },

    #[error("ambiguous query: expected exactly one row, found {count} (model {model})")]
    NotUnique { model: &'static str, count: usize },
}

impl ResponseError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::NotUnique { .. } => ErrorClass::Conflict,
        }
    }
}

///
/// Response
/// Materialized query result: one record per row, in cursor order.
///

#[derive(Debug)]
pub struct Response<R: Record>(pub Vec<R>);

impl<R: Record> Response<R> {
    //
    // Introspection
    //

    #[must_use]
    pub const fn count(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    //
    // Cardinality
    //

    /// First row; extra rows are ignored.
    pub fn first(self) -> Result<R, ResponseError> {
        self.0
            .into_iter()
            .next()
            .ok_or_else(|| ResponseError::NotFound {
                model: std::any::type_name::<R>(),
            })
    }

    /// Require exactly one row.
    pub fn one(self) -> Result<R, ResponseError> {
        let model = std::any::type_name::<R>();

        match self.count() {
            0 => Err(ResponseError::NotFound { model }),
            1 => self.first(),
            count => Err(ResponseError::NotUnique { model, count }),
        }
    }

    //
    // Records
    //

    #[must_use]
    pub fn entities(self) -> Vec<R> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.0.iter()
    }
}

impl<R: Record> IntoIterator for Response<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, R: Record> IntoIterator for &'a Response<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Item;

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
        }
    }

    #[test]
    fn first_ignores_extra_rows() {
        let response = Response(vec![item(1), item(2)]);

        assert_eq!(response.first().unwrap().id, 1);
    }

    #[test]
    fn one_reports_the_row_count() {
        let err = Response(vec![item(1), item(2)]).one().unwrap_err();

        assert!(matches!(err, ResponseError::NotUnique { count: 2, .. }));
        assert_eq!(err.class(), ErrorClass::Conflict);
    }

    #[test]
    fn empty_responses_are_not_found() {
        assert!(matches!(
            Response::<Item>(vec![]).first(),
            Err(ResponseError::NotFound { .. })
        ));
        assert!(matches!(
            Response::<Item>(vec![]).one(),
            Err(ResponseError::NotFound { .. })
        ));
    }

    #[test]
    fn iteration_keeps_cursor_order() {
        let response = Response(vec![item(3), item(1), item(2)]);
        let ids: Vec<i64> = response.iter().map(|i| i.id).collect();

        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(response.count(), 3);
        assert_eq!(response.entities().len(), 3);
    }
}

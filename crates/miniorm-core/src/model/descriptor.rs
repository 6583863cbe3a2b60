use crate::{
    model::{FieldMap, FieldPath},
    naming::normalize_column,
    traits::Record,
};
use std::any::type_name;

///
/// ModelDescriptor
///
/// Registered mapping for one record type: the relation it is bound to and
/// its column key -> FieldPath index. Built once, owned by the registry.
///

#[derive(Clone, Debug)]
pub struct ModelDescriptor {
    /// Rust type path (diagnostics only).
    type_name: &'static str,
    /// Relation (table) name given at registration.
    relation: String,
    fields: FieldMap,
}

impl ModelDescriptor {
    /// Walk `R`'s fields and bind the result to `relation`.
    #[must_use]
    pub fn for_record<R: Record>(relation: impl Into<String>) -> Self {
        Self {
            type_name: type_name::<R>(),
            relation: relation.into(),
            fields: R::field_map(),
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Resolve a raw column identifier, as reported by the executor.
    #[must_use]
    pub fn lookup(&self, column: &str) -> Option<&FieldPath> {
        self.fields.get(&normalize_column(column))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Account, Audit, Item, Renamed};

    fn paths(descriptor: &ModelDescriptor) -> Vec<(String, Vec<usize>)> {
        descriptor
            .fields()
            .iter()
            .map(|(key, path)| (key.to_string(), path.to_vec()))
            .collect()
    }

    #[test]
    fn direct_fields_use_derived_keys() {
        let descriptor = ModelDescriptor::for_record::<Item>("items");

        assert_eq!(descriptor.relation(), "items");
        assert!(descriptor.type_name().ends_with("Item"));
        assert_eq!(
            paths(&descriptor),
            vec![("id".into(), vec![0]), ("name".into(), vec![1])]
        );
    }

    #[test]
    fn flattened_fields_join_the_parent_index() {
        let descriptor = ModelDescriptor::for_record::<Account>("accounts");

        assert_eq!(
            paths(&descriptor),
            vec![
                ("user_id".into(), vec![0]),
                ("nickname".into(), vec![1]),
                ("last_login".into(), vec![2]),
                ("created_by".into(), vec![3, 0]),
                ("revision".into(), vec![3, 1]),
                ("audit_note".into(), vec![3, 2]),
            ]
        );
        assert!(descriptor.lookup("audit").is_none(), "no key for the composite");
    }

    #[test]
    fn skipped_and_private_fields_are_not_mapped() {
        let fields = Account::field_map();

        assert!(!fields.contains_key("session_cache"));
        assert!(!fields.contains_key("password_hash"));
    }

    #[test]
    fn embedded_record_describes_itself_standalone() {
        let fields = Audit::field_map();

        assert_eq!(fields.get("audit_note").map(|p| p.to_vec()), Some(vec![2]));
    }

    #[test]
    fn later_fields_win_key_conflicts() {
        let descriptor = ModelDescriptor::for_record::<Renamed>("renamed");

        assert_eq!(descriptor.fields().len(), 3);
        assert_eq!(descriptor.lookup("user_id").map(|p| p.to_vec()), Some(vec![1]));
        assert_eq!(descriptor.lookup("type").map(|p| p.to_vec()), Some(vec![2]));
        assert_eq!(descriptor.lookup("payload").map(|p| p.to_vec()), Some(vec![3]));
    }

    #[test]
    fn lookup_normalizes_raw_columns() {
        let descriptor = ModelDescriptor::for_record::<Item>("items");

        for raw in ["Items.ID", "\"id\"", "id", " `id` ", "[items].[id]"] {
            assert_eq!(
                descriptor.lookup(raw).map(|p| p.to_vec()),
                Some(vec![0]),
                "{raw}"
            );
        }
    }
}

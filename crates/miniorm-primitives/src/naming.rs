///
/// QUOTE_CHARS
///
/// Quoting and bracketing characters some drivers leave around identifiers.
///

pub const QUOTE_CHARS: [char; 4] = ['`', '"', '[', ']'];

/// Separator between a relation/schema qualifier and the column name.
pub const QUALIFIER_SEPARATOR: char = '.';

/// Convert a capitalization-delimited identifier into a snake_case column key.
///
/// Only a lowercase -> uppercase transition starts a new word, so uppercase
/// runs stay together: `UserId` becomes `user_id`, `ID` becomes `id` and
/// `HTTPServer` becomes `httpserver`.
#[must_use]
pub fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;

    for c in ident.chars() {
        if prev.is_some_and(char::is_lowercase) && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// Canonicalize a raw column identifier reported by a query engine.
///
/// Trims whitespace, strips quoting characters, drops any relation qualifier
/// (`users.id` -> `id`) and lowercases. The result is a fixed point:
/// normalizing it again returns it unchanged.
#[must_use]
pub fn normalize_column(raw: &str) -> String {
    let trimmed = strip_quoting(raw);

    // qualified names keep only the last segment
    let column = match trimmed.rfind(QUALIFIER_SEPARATOR) {
        Some(dot) => strip_quoting(&trimmed[dot + QUALIFIER_SEPARATOR.len_utf8()..]),
        None => trimmed,
    };

    column.to_lowercase()
}

fn strip_quoting(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || QUOTE_CHARS.contains(&c))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snake_case_splits_on_lower_to_upper() {
        assert_eq!(snake_case("UserId"), "user_id");
        assert_eq!(snake_case("CreatedAtUtc"), "created_at_utc");
        assert_eq!(snake_case("name"), "name");
        assert_eq!(snake_case("userId"), "user_id");
    }

    #[test]
    fn snake_case_keeps_uppercase_runs_together() {
        assert_eq!(snake_case("ID"), "id");
        assert_eq!(snake_case("HTTPServer"), "httpserver");
        assert_eq!(snake_case("UserID"), "user_id");
    }

    #[test]
    fn snake_case_leaves_existing_underscores() {
        assert_eq!(snake_case("user_id"), "user_id");
        assert_eq!(snake_case("Owner_Id"), "owner_id");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn normalize_strips_qualifiers_and_quotes() {
        assert_eq!(normalize_column("Users.ID"), "id");
        assert_eq!(normalize_column("\"id\""), "id");
        assert_eq!(normalize_column("id"), "id");
        assert_eq!(normalize_column("`Name`"), "name");
        assert_eq!(normalize_column("[CreatedAt]"), "createdat");
        assert_eq!(normalize_column("  public.users.email  "), "email");
    }

    #[test]
    fn normalize_handles_quoted_qualified_names() {
        assert_eq!(normalize_column("\"users\".\"id\""), "id");
        assert_eq!(normalize_column("[dbo].[Users].[UserId]"), "userid");
    }

    #[test]
    fn normalize_trailing_separator_yields_empty_key() {
        assert_eq!(normalize_column("users."), "");
        assert_eq!(normalize_column(""), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[ `\"\\[\\]a-zA-Z0-9_.]{0,24}") {
            let once = normalize_column(&raw);
            prop_assert_eq!(normalize_column(&once), once);
        }

        #[test]
        fn snake_case_output_has_no_uppercase(ident in "[A-Za-z][A-Za-z0-9]{0,16}") {
            let key = snake_case(&ident);
            prop_assert!(!key.chars().any(char::is_uppercase));
        }
    }
}

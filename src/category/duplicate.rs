//! The duplicate category name check.
//!
//! A submitted name is treated as a duplicate if any existing category name
//! contains it as a substring. This is looser than exact-match uniqueness: an
//! existing "Foobar" rejects a new "Foo", but an existing "Foo" does not reject
//! a new "Foobar".

use rusqlite::Connection;

use crate::{
    Error,
    category::{Category, CategoryName, db::map_row},
};

const LIKE_ESCAPE: char = '\\';

/// Find the categories whose name contains `name`.
///
/// When `case_sensitive` is false, letters are compared case-insensitively
/// (SQLite `LIKE` folds ASCII letters only).
pub fn find_categories_containing(
    name: &str,
    case_sensitive: bool,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    let mut statement = if case_sensitive {
        connection.prepare(
            "SELECT id, name FROM category WHERE instr(name, :pattern) > 0 ORDER BY id;",
        )?
    } else {
        connection.prepare(
            "SELECT id, name FROM category WHERE name LIKE :pattern ESCAPE '\\' ORDER BY id;",
        )?
    };

    let pattern = if case_sensitive {
        name.to_owned()
    } else {
        format!("%{}%", escape_like(name))
    };

    statement
        .query_map(&[(":pattern", &pattern)], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Check that no existing category name contains `name`.
///
/// # Errors
///
/// This function will return an [Error::DuplicateName] if a category name
/// contains `name`, or an [Error::SqlError] if the query fails.
pub fn check_duplicate_name(
    name: &CategoryName,
    case_sensitive: bool,
    connection: &Connection,
) -> Result<(), Error> {
    let matches = find_categories_containing(name.as_ref(), case_sensitive, connection)?;

    match matches.first() {
        Some(existing) => {
            tracing::debug!("Category name {name} matches existing category {existing:?}");
            Err(Error::DuplicateName(name.to_string()))
        }
        None => Ok(()),
    }
}

/// Escape the `LIKE` wildcards in `text` so they match literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }

        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        category::{CategoryName, create_category, create_category_table},
    };

    use super::{check_duplicate_name, escape_like, find_categories_containing};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).expect("Could not create category table");
        connection
    }

    fn must_create(name: &str, connection: &Connection) {
        create_category(CategoryName::new_unchecked(name), connection)
            .expect("Could not create test category");
    }

    fn check(name: &str, case_sensitive: bool, connection: &Connection) -> Result<(), Error> {
        check_duplicate_name(&CategoryName::new_unchecked(name), case_sensitive, connection)
    }

    #[test]
    fn passes_when_there_are_no_categories() {
        let connection = get_test_db_connection();

        assert_eq!(check("Books", true, &connection), Ok(()));
        assert_eq!(check("Books", false, &connection), Ok(()));
    }

    #[test]
    fn exact_match_fails() {
        let connection = get_test_db_connection();
        must_create("Books", &connection);

        assert_eq!(
            check("Books", true, &connection),
            Err(Error::DuplicateName("Books".to_owned()))
        );
    }

    #[test]
    fn different_case_passes_when_case_sensitive() {
        let connection = get_test_db_connection();
        must_create("Books", &connection);

        assert_eq!(check("book", true, &connection), Ok(()));
    }

    #[test]
    fn different_case_fails_when_case_insensitive() {
        let connection = get_test_db_connection();
        must_create("Books", &connection);

        assert_eq!(
            check("book", false, &connection),
            Err(Error::DuplicateName("book".to_owned()))
        );
    }

    #[test]
    fn substring_of_existing_name_fails_in_both_modes() {
        let connection = get_test_db_connection();
        must_create("Books", &connection);

        assert_eq!(
            check("Book", true, &connection),
            Err(Error::DuplicateName("Book".to_owned()))
        );
        assert_eq!(
            check("Book", false, &connection),
            Err(Error::DuplicateName("Book".to_owned()))
        );
    }

    #[test]
    fn shorter_name_fails_after_longer_name() {
        let connection = get_test_db_connection();
        must_create("Foobar", &connection);

        assert_eq!(
            check("Foo", true, &connection),
            Err(Error::DuplicateName("Foo".to_owned()))
        );
    }

    #[test]
    fn longer_name_passes_after_shorter_name() {
        let connection = get_test_db_connection();
        must_create("Foo", &connection);

        assert_eq!(check("Foobar", true, &connection), Ok(()));
        assert_eq!(check("Foobar", false, &connection), Ok(()));
    }

    #[test]
    fn wildcards_match_literally() {
        let connection = get_test_db_connection();
        must_create("Books", &connection);

        assert_eq!(check("B%s", false, &connection), Ok(()));
        assert_eq!(check("B_oks", false, &connection), Ok(()));
    }

    #[test]
    fn literal_wildcard_in_existing_name_is_found() {
        let connection = get_test_db_connection();
        must_create("100% Cotton", &connection);

        let matches = find_categories_containing("0% C", false, &connection).unwrap();

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn finds_all_matching_categories() {
        let connection = get_test_db_connection();
        must_create("Board Games", &connection);
        must_create("Toys", &connection);
        must_create("Video Games", &connection);

        let matches = find_categories_containing("Games", true, &connection).unwrap();

        let names = matches
            .iter()
            .map(|category| category.name.as_ref())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Board Games", "Video Games"]);
    }

    #[test]
    fn escape_like_escapes_wildcards_and_escape_character() {
        assert_eq!(escape_like(r"50%_off\"), r"50\%\_off\\");
    }
}

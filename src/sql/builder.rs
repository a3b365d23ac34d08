//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the frameworks table.

use crate::model::FrameworkFields;
use crate::search::{Clause, Predicate};
use crate::sql::params::PgBindValue;

pub const TABLE_NAME: &str = "frameworks";

/// Column order used by every SELECT and RETURNING list.
pub const COLUMNS: &[&str] = &["id", "name", "versions", "deprecation_date", "hype_level"];

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(TABLE_NAME))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row, ORDER BY id.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        qualified_table(schema),
        quoted("id")
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::BigInt(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        qualified_table(schema),
        quoted("id"),
        n
    );
    q
}

/// INSERT all mutable columns; id comes from the BIGSERIAL default.
pub fn insert(schema: &str, fields: &FrameworkFields) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values = field_values(fields);
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, v) in values {
        let n = q.push_param(v);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    );
    q
}

/// UPDATE by id: SET every mutable column. Returns no row when id is absent.
pub fn update(schema: &str, id: i64, fields: &FrameworkFields) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (col, v) in field_values(fields) {
        let n = q.push_param(v);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    let id_param = q.push_param(PgBindValue::BigInt(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        qualified_table(schema),
        sets.join(", "),
        quoted("id"),
        id_param,
        select_column_list()
    );
    q
}

/// DELETE by id, returning the removed row.
pub fn delete(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::BigInt(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        qualified_table(schema),
        quoted("id"),
        n,
        select_column_list()
    );
    q
}

/// SELECT rows matching the predicate, ordered by name (byte-wise) then id.
/// An empty predicate renders no WHERE clause.
pub fn select_search(schema: &str, predicate: &Predicate) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::with_capacity(predicate.clauses.len());
    for clause in &predicate.clauses {
        where_parts.push(render_clause(&mut q, clause));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {} COLLATE \"C\", {}",
        select_column_list(),
        qualified_table(schema),
        where_clause,
        quoted("name"),
        quoted("id")
    );
    q
}

fn render_clause(q: &mut QueryBuf, clause: &Clause) -> String {
    match clause {
        Clause::NameContains(s) => {
            let n = q.push_param(PgBindValue::Text(s.clone()));
            format!("strpos({}, ${}) > 0", quoted("name"), n)
        }
        Clause::VersionIn(versions) => {
            let alternatives: Vec<String> = versions
                .iter()
                .map(|v| {
                    let n = q.push_param(PgBindValue::Text(v.clone()));
                    format!("${} = ANY({})", n, quoted("versions"))
                })
                .collect();
            format!("({})", alternatives.join(" OR "))
        }
        Clause::DeprecatedAfter(d) => {
            let n = q.push_param(PgBindValue::Date(*d));
            format!("{} > ${}", quoted("deprecation_date"), n)
        }
        Clause::DeprecatedBefore(d) => {
            let n = q.push_param(PgBindValue::Date(*d));
            format!("{} < ${}", quoted("deprecation_date"), n)
        }
        Clause::MinHypeLevel(level) => {
            let n = q.push_param(PgBindValue::Int(*level));
            format!("{} >= ${}", quoted("hype_level"), n)
        }
        Clause::MaxHypeLevel(level) => {
            let n = q.push_param(PgBindValue::Int(*level));
            format!("{} <= ${}", quoted("hype_level"), n)
        }
    }
}

fn field_values(fields: &FrameworkFields) -> [(&'static str, PgBindValue); 4] {
    [
        ("name", PgBindValue::Text(fields.name.clone())),
        ("versions", PgBindValue::TextArray(fields.versions.clone())),
        ("deprecation_date", PgBindValue::Date(fields.deprecation_date)),
        ("hype_level", PgBindValue::Int(fields.hype_level)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchFilter;
    use chrono::NaiveDate;

    const COLS: &str = r#""id", "name", "versions", "deprecation_date", "hype_level""#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields() -> FrameworkFields {
        FrameworkFields {
            name: "svelte".into(),
            versions: vec!["3".into(), "4".into()],
            deprecation_date: date(2031, 2, 3),
            hype_level: 7,
        }
    }

    #[test]
    fn quoted_escapes_double_quotes() {
        assert_eq!(quoted("a\"b"), "\"a\"\"b\"");
        assert_eq!(qualified_table("public"), "\"public\".\"frameworks\"");
    }

    #[test]
    fn select_by_id_binds_id() {
        let q = select_by_id("public", 12);
        assert_eq!(
            q.sql,
            format!(r#"SELECT {} FROM "public"."frameworks" WHERE "id" = $1"#, COLS)
        );
        assert_eq!(q.params, vec![PgBindValue::BigInt(12)]);
    }

    #[test]
    fn insert_omits_id_and_returns_row() {
        let q = insert("public", &fields());
        assert_eq!(
            q.sql,
            format!(
                r#"INSERT INTO "public"."frameworks" ("name", "versions", "deprecation_date", "hype_level") VALUES ($1, $2, $3, $4) RETURNING {}"#,
                COLS
            )
        );
        assert_eq!(
            q.params,
            vec![
                PgBindValue::Text("svelte".into()),
                PgBindValue::TextArray(vec!["3".into(), "4".into()]),
                PgBindValue::Date(date(2031, 2, 3)),
                PgBindValue::Int(7),
            ]
        );
    }

    #[test]
    fn update_sets_all_fields_and_binds_id_last() {
        let q = update("app", 5, &fields());
        assert_eq!(
            q.sql,
            format!(
                r#"UPDATE "app"."frameworks" SET "name" = $1, "versions" = $2, "deprecation_date" = $3, "hype_level" = $4 WHERE "id" = $5 RETURNING {}"#,
                COLS
            )
        );
        assert_eq!(q.params.last(), Some(&PgBindValue::BigInt(5)));
    }

    #[test]
    fn delete_returns_removed_row() {
        let q = delete("public", 3);
        assert_eq!(
            q.sql,
            format!(r#"DELETE FROM "public"."frameworks" WHERE "id" = $1 RETURNING {}"#, COLS)
        );
    }

    #[test]
    fn search_without_clauses_has_no_where() {
        let q = select_search("public", &SearchFilter::default().predicate());
        assert_eq!(
            q.sql,
            format!(
                r#"SELECT {} FROM "public"."frameworks" ORDER BY "name" COLLATE "C", "id""#,
                COLS
            )
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn search_renders_every_clause_in_order() {
        let filter = SearchFilter {
            name: Some("script".into()),
            versions: vec!["2".into(), "3".into()],
            deprecation_date_after: Some(date(2021, 1, 1)),
            deprecation_date_before: Some(date(2023, 1, 1)),
            min_hype_level: Some(0),
            max_hype_level: Some(10),
        };
        let q = select_search("public", &filter.predicate());
        assert_eq!(
            q.sql,
            format!(
                concat!(
                    r#"SELECT {} FROM "public"."frameworks" WHERE strpos("name", $1) > 0"#,
                    r#" AND ($2 = ANY("versions") OR $3 = ANY("versions"))"#,
                    r#" AND "deprecation_date" > $4 AND "deprecation_date" < $5"#,
                    r#" AND "hype_level" >= $6 AND "hype_level" <= $7"#,
                    r#" ORDER BY "name" COLLATE "C", "id""#
                ),
                COLS
            )
        );
        assert_eq!(
            q.params,
            vec![
                PgBindValue::Text("script".into()),
                PgBindValue::Text("2".into()),
                PgBindValue::Text("3".into()),
                PgBindValue::Date(date(2021, 1, 1)),
                PgBindValue::Date(date(2023, 1, 1)),
                PgBindValue::Int(0),
                PgBindValue::Int(10),
            ]
        );
    }
}

//! Search filter and the predicate built from it.
//!
//! A `Predicate` is the conjunction of the clauses for the filter fields that were
//! supplied. With no clauses it matches every record.

use crate::model::Framework;
use chrono::NaiveDate;

/// Sparse search criteria. `None` (or an empty list / empty name) means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub versions: Vec<String>,
    pub deprecation_date_after: Option<NaiveDate>,
    pub deprecation_date_before: Option<NaiveDate>,
    pub min_hype_level: Option<i32>,
    pub max_hype_level: Option<i32>,
}

/// One condition on a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Clause {
    /// Case-sensitive substring of `name`.
    NameContains(String),
    /// Record carries at least one of these versions.
    VersionIn(Vec<String>),
    /// `deprecation_date > bound`.
    DeprecatedAfter(NaiveDate),
    /// `deprecation_date < bound`.
    DeprecatedBefore(NaiveDate),
    /// `hype_level >= bound`.
    MinHypeLevel(i32),
    /// `hype_level <= bound`.
    MaxHypeLevel(i32),
}

impl Clause {
    pub fn matches(&self, f: &Framework) -> bool {
        match self {
            Clause::NameContains(s) => f.name.contains(s.as_str()),
            Clause::VersionIn(vs) => vs.iter().any(|v| f.versions.contains(v)),
            Clause::DeprecatedAfter(d) => f.deprecation_date > *d,
            Clause::DeprecatedBefore(d) => f.deprecation_date < *d,
            Clause::MinHypeLevel(n) => f.hype_level >= *n,
            Clause::MaxHypeLevel(n) => f.hype_level <= *n,
        }
    }
}

/// Conjunction of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Predicate {
    pub clauses: Vec<Clause>,
}

impl Predicate {
    pub fn matches(&self, f: &Framework) -> bool {
        self.clauses.iter().all(|c| c.matches(f))
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl SearchFilter {
    pub fn predicate(&self) -> Predicate {
        let mut clauses = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            clauses.push(Clause::NameContains(name.to_string()));
        }
        if !self.versions.is_empty() {
            clauses.push(Clause::VersionIn(self.versions.clone()));
        }
        if let Some(d) = self.deprecation_date_after {
            clauses.push(Clause::DeprecatedAfter(d));
        }
        if let Some(d) = self.deprecation_date_before {
            clauses.push(Clause::DeprecatedBefore(d));
        }
        if let Some(n) = self.min_hype_level {
            clauses.push(Clause::MinHypeLevel(n));
        }
        if let Some(n) = self.max_hype_level {
            clauses.push(Clause::MaxHypeLevel(n));
        }
        Predicate { clauses }
    }
}

/// Orders search results: by name (byte-wise), then by id.
pub fn sort_by_name(records: &mut [Framework]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fw(id: i64, name: &str, versions: &[&str], deprecated: NaiveDate, hype: i32) -> Framework {
        Framework {
            id,
            name: name.to_string(),
            versions: versions.iter().map(|v| v.to_string()).collect(),
            deprecation_date: deprecated,
            hype_level: hype,
        }
    }

    fn names(p: &Predicate, records: &[Framework]) -> Vec<String> {
        let mut hits: Vec<Framework> = records.iter().filter(|f| p.matches(f)).cloned().collect();
        sort_by_name(&mut hits);
        hits.into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn empty_filter_has_no_clauses_and_matches_all() {
        let p = SearchFilter::default().predicate();
        assert!(p.is_empty());
        assert!(p.matches(&fw(1, "x", &["1"], date(2020, 1, 1), -5)));
    }

    #[test]
    fn empty_name_and_versions_add_no_clause() {
        let filter = SearchFilter {
            name: Some(String::new()),
            versions: Vec::new(),
            ..Default::default()
        };
        assert!(filter.predicate().is_empty());
    }

    #[test]
    fn zero_hype_bound_still_filters() {
        let filter = SearchFilter {
            min_hype_level: Some(0),
            ..Default::default()
        };
        let p = filter.predicate();
        assert_eq!(p.clauses, vec![Clause::MinHypeLevel(0)]);
        assert!(!p.matches(&fw(1, "a", &["1"], date(2022, 1, 1), -1)));
        assert!(p.matches(&fw(2, "b", &["1"], date(2022, 1, 1), 0)));
    }

    #[test]
    fn name_is_case_sensitive_substring() {
        let records = vec![
            fw(1, "framework", &["1"], date(2022, 1, 1), 0),
            fw(2, "framework script", &["1"], date(2022, 1, 1), 0),
            fw(3, "script", &["1"], date(2022, 1, 1), 0),
            fw(4, "totally random", &["1"], date(2022, 1, 1), 0),
            fw(5, "Script", &["1"], date(2022, 1, 1), 0),
        ];
        let p = SearchFilter {
            name: Some("script".into()),
            ..Default::default()
        }
        .predicate();
        assert_eq!(names(&p, &records), vec!["framework script", "script"]);
    }

    #[test]
    fn versions_match_any() {
        let records = vec![
            fw(1, "framework1", &["1"], date(2022, 1, 1), 0),
            fw(2, "framework2", &["2"], date(2022, 1, 1), 0),
            fw(3, "framework3", &["3", "4"], date(2022, 1, 1), 0),
        ];
        let p = SearchFilter {
            versions: vec!["2".into(), "3".into()],
            ..Default::default()
        }
        .predicate();
        assert_eq!(names(&p, &records), vec!["framework2", "framework3"]);
    }

    #[test]
    fn date_bounds_are_exclusive() {
        let records = vec![
            fw(1, "framework1", &["1"], date(2021, 1, 1), 0),
            fw(2, "framework2", &["2"], date(2022, 1, 1), 0),
            fw(3, "framework3", &["3"], date(2023, 1, 1), 0),
        ];
        let after = SearchFilter {
            deprecation_date_after: Some(date(2021, 1, 1)),
            ..Default::default()
        }
        .predicate();
        assert_eq!(names(&after, &records), vec!["framework2", "framework3"]);

        let before = SearchFilter {
            deprecation_date_before: Some(date(2023, 1, 1)),
            ..Default::default()
        }
        .predicate();
        assert_eq!(names(&before, &records), vec!["framework1", "framework2"]);
    }

    #[test]
    fn hype_bounds_are_inclusive() {
        let records: Vec<Framework> = (1..=4)
            .map(|n| fw(n as i64, &format!("framework{}", n), &["1"], date(2022, 1, 1), n))
            .collect();
        let min = SearchFilter {
            min_hype_level: Some(3),
            ..Default::default()
        };
        assert_eq!(names(&min.predicate(), &records), vec!["framework3", "framework4"]);

        let max = SearchFilter {
            max_hype_level: Some(3),
            ..Default::default()
        };
        assert_eq!(
            names(&max.predicate(), &records),
            vec!["framework1", "framework2", "framework3"]
        );

        let both = SearchFilter {
            min_hype_level: Some(3),
            max_hype_level: Some(3),
            ..Default::default()
        };
        assert_eq!(names(&both.predicate(), &records), vec!["framework3"]);
    }

    #[test]
    fn all_clauses_combine_conjunctively() {
        let records = vec![
            fw(1, "angular", &["1"], date(2024, 1, 1), 5),
            fw(2, "angular js", &["2"], date(2024, 1, 1), 5),
            fw(3, "angular dart", &["3"], date(2019, 1, 1), 5),
            fw(4, "ember angular", &["3"], date(2024, 1, 1), 1),
            fw(5, "react", &["2"], date(2024, 1, 1), 5),
        ];
        let filter = SearchFilter {
            name: Some("angular".into()),
            versions: vec!["2".into(), "3".into()],
            deprecation_date_after: Some(date(2020, 1, 1)),
            deprecation_date_before: Some(date(2025, 1, 1)),
            min_hype_level: Some(2),
            max_hype_level: Some(8),
        };
        let p = filter.predicate();
        assert_eq!(p.clauses.len(), 6);
        assert_eq!(names(&p, &records), vec!["angular js"]);
    }

    #[test]
    fn sort_breaks_name_ties_by_id() {
        let mut records = vec![
            fw(3, "b", &["1"], date(2022, 1, 1), 0),
            fw(2, "a", &["1"], date(2022, 1, 1), 0),
            fw(1, "b", &["1"], date(2022, 1, 1), 0),
        ];
        sort_by_name(&mut records);
        let ids: Vec<i64> = records.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}

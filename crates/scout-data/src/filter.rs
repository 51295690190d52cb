//! Keyword filtering over a job table.

use scout_core::models::JobTable;

/// Return the subset of `table` whose `title` OR `category` contains
/// `keyword` as a case-insensitive substring.
///
/// The keyword is used verbatim apart from trimming surrounding whitespace.
/// An empty (post-trim) keyword matches every row. Rows missing a field are
/// treated as non-matching on that field. Row order and the column set are
/// preserved; the input table is left untouched.
pub fn filter_by_keyword(table: &JobTable, keyword: &str) -> JobTable {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return table.clone();
    }

    let rows = table
        .rows()
        .iter()
        .filter(|row| {
            contains_ci(row.title.as_deref(), &needle)
                || contains_ci(row.category.as_deref(), &needle)
        })
        .cloned()
        .collect();

    JobTable::new(table.columns().to_vec(), rows)
}

/// Case-insensitive substring test; a missing field never matches.
fn contains_ci(field: Option<&str>, needle_lower: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::models::{Column, JobListing, JobTable};

    fn listing(title: Option<&str>, category: Option<&str>) -> JobListing {
        JobListing {
            title: title.map(String::from),
            category: category.map(String::from),
            ..Default::default()
        }
    }

    fn sample_table() -> JobTable {
        JobTable::from_rows(vec![
            listing(Some("Senior Python Developer"), Some("Software Development")),
            listing(Some("Data Analyst"), Some("Data Science")),
            listing(Some("Sales Manager"), Some("Sales")),
        ])
    }

    #[test]
    fn test_filter_matches_title_substring() {
        let result = filter_by_keyword(&sample_table(), "python");
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.rows()[0].title.as_deref(),
            Some("Senior Python Developer")
        );
    }

    #[test]
    fn test_filter_matches_category_substring() {
        let result = filter_by_keyword(&sample_table(), "science");
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows()[0].title.as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn test_filter_case_insensitive() {
        let lower = filter_by_keyword(&sample_table(), "python");
        let upper = filter_by_keyword(&sample_table(), "PYTHON");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_empty_keyword_returns_full_table() {
        let table = sample_table();
        let result = filter_by_keyword(&table, "");
        assert_eq!(result, table);
    }

    #[test]
    fn test_filter_whitespace_keyword_returns_full_table() {
        let table = sample_table();
        let result = filter_by_keyword(&table, "   ");
        assert_eq!(result, table);
    }

    #[test]
    fn test_filter_trims_surrounding_whitespace() {
        let result = filter_by_keyword(&sample_table(), "  python  ");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_idempotent() {
        let once = filter_by_keyword(&sample_table(), "data");
        let twice = filter_by_keyword(&once, "data");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_missing_title_never_matches_on_title() {
        // Table with a category column but no title column at all.
        let table = JobTable::from_rows(vec![
            listing(None, Some("Software Development")),
            listing(None, Some("Design")),
        ]);

        // Matching on category still works; missing titles never panic.
        let result = filter_by_keyword(&table, "design");
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows()[0].category.as_deref(), Some("Design"));
    }

    #[test]
    fn test_filter_no_matches_is_empty_with_columns_kept() {
        let result = filter_by_keyword(&sample_table(), "blockchain");
        assert!(result.is_empty());
        assert!(result.has_column(Column::Title));
        assert!(result.has_column(Column::Category));
    }

    #[test]
    fn test_filter_empty_table() {
        let empty = JobTable::from_rows(vec![]);
        let result = filter_by_keyword(&empty, "python");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_preserves_row_order() {
        let table = JobTable::from_rows(vec![
            listing(Some("Data Engineer"), None),
            listing(Some("Data Scientist"), None),
            listing(Some("Database Admin"), None),
        ]);
        let result = filter_by_keyword(&table, "data");
        let titles: Vec<_> = result.rows().iter().map(|r| r.title.as_deref()).collect();
        assert_eq!(
            titles,
            vec![
                Some("Data Engineer"),
                Some("Data Scientist"),
                Some("Database Admin")
            ]
        );
    }
}

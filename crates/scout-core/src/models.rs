use serde::{Deserialize, Serialize};

// ── Column ────────────────────────────────────────────────────────────────────

/// The six listing fields recognised by Job Scout.
///
/// Raw listings from the API (and loaded files) may carry any number of
/// additional fields; everything outside this set is discarded on ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Title,
    CompanyName,
    Category,
    CandidateRequiredLocation,
    Url,
    PublicationDate,
}

impl Column {
    /// All recognised columns in canonical display order.
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::CompanyName,
        Column::Category,
        Column::CandidateRequiredLocation,
        Column::Url,
        Column::PublicationDate,
    ];

    /// The wire name used in the API payload, CSV headers and spreadsheet
    /// headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::CompanyName => "company_name",
            Column::Category => "category",
            Column::CandidateRequiredLocation => "candidate_required_location",
            Column::Url => "url",
            Column::PublicationDate => "publication_date",
        }
    }

    /// Map a header string back to a recognised column.
    ///
    /// Surrounding whitespace and a leading UTF-8 BOM are stripped so that
    /// headers read from `utf-8-sig` files resolve correctly. Returns `None`
    /// for anything outside the recognised set.
    pub fn from_header(header: &str) -> Option<Column> {
        let name = header.trim_start_matches('\u{feff}').trim();
        Column::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── JobListing ────────────────────────────────────────────────────────────────

/// A single remote-job listing.
///
/// Each field mirrors one recognised column; only fields actually present in
/// the source data are populated. Absent fields stay `None` and are never
/// synthesised with placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_required_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

impl JobListing {
    /// Borrow the value stored under `column`, if any.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Title => self.title.as_deref(),
            Column::CompanyName => self.company_name.as_deref(),
            Column::Category => self.category.as_deref(),
            Column::CandidateRequiredLocation => self.candidate_required_location.as_deref(),
            Column::Url => self.url.as_deref(),
            Column::PublicationDate => self.publication_date.as_deref(),
        }
    }

    /// Store `value` under `column`, replacing any previous value.
    pub fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::Title => &mut self.title,
            Column::CompanyName => &mut self.company_name,
            Column::Category => &mut self.category,
            Column::CandidateRequiredLocation => &mut self.candidate_required_location,
            Column::Url => &mut self.url,
            Column::PublicationDate => &mut self.publication_date,
        };
        *slot = Some(value);
    }
}

// ── JobTable ──────────────────────────────────────────────────────────────────

/// An ordered sequence of listings sharing a common column set.
///
/// Invariants:
/// * `columns` is a subset of [`Column::ALL`], kept in canonical order.
/// * Row order follows the producing operation (API response order on fetch,
///   file order on load) and is never reordered afterwards.
/// * Operations that consume a table never mutate it; filtering produces a
///   new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTable {
    columns: Vec<Column>,
    rows: Vec<JobListing>,
}

impl JobTable {
    /// Build a table with an explicit column set.
    ///
    /// `columns` is normalised to canonical order with duplicates removed.
    /// Used by the file loaders, where headers define the columns even when
    /// every cell under a header happens to be empty.
    pub fn new(columns: Vec<Column>, rows: Vec<JobListing>) -> Self {
        let columns = Column::ALL
            .into_iter()
            .filter(|c| columns.contains(c))
            .collect();
        Self { columns, rows }
    }

    /// Build a table from rows alone, deriving the column set.
    ///
    /// A column is considered present when at least one row carries a value
    /// for it, matching how the fetcher keeps only fields that actually
    /// occur in the API response.
    pub fn from_rows(rows: Vec<JobListing>) -> Self {
        let columns = Column::ALL
            .into_iter()
            .filter(|c| rows.iter().any(|row| row.get(*c).is_some()))
            .collect();
        Self { columns, rows }
    }

    /// The columns present in this table, in canonical order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows in this table, in original order.
    pub fn rows(&self) -> &[JobListing] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `true` when `column` is part of this table's column set.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: Option<&str>, category: Option<&str>) -> JobListing {
        JobListing {
            title: title.map(String::from),
            category: category.map(String::from),
            ..Default::default()
        }
    }

    // ── Column ────────────────────────────────────────────────────────────

    #[test]
    fn test_column_wire_names_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.as_str()), Some(column));
        }
    }

    #[test]
    fn test_column_from_header_unknown() {
        assert_eq!(Column::from_header("salary"), None);
        assert_eq!(Column::from_header(""), None);
    }

    #[test]
    fn test_column_from_header_strips_bom_and_whitespace() {
        assert_eq!(Column::from_header("\u{feff}title"), Some(Column::Title));
        assert_eq!(Column::from_header("  category "), Some(Column::Category));
    }

    #[test]
    fn test_column_serde_uses_wire_name() {
        let json = serde_json::to_string(&Column::CompanyName).unwrap();
        assert_eq!(json, r#""company_name""#);
    }

    // ── JobListing ────────────────────────────────────────────────────────

    #[test]
    fn test_listing_get_set() {
        let mut row = JobListing::default();
        assert!(row.get(Column::Url).is_none());

        row.set(Column::Url, "https://example.com/job/1".to_string());
        assert_eq!(row.get(Column::Url), Some("https://example.com/job/1"));
    }

    #[test]
    fn test_listing_serialize_omits_absent_fields() {
        let row = listing(Some("Data Analyst"), None);
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("title"));
        assert!(!json.contains("category"));
        assert!(!json.contains("company_name"));
    }

    #[test]
    fn test_listing_deserialize_ignores_unknown_fields() {
        let row: JobListing = serde_json::from_str(
            r#"{"title": "DevOps Engineer", "salary": "$100k", "tags": ["aws"]}"#,
        )
        .unwrap();
        assert_eq!(row.title.as_deref(), Some("DevOps Engineer"));
        assert!(row.category.is_none());
    }

    // ── JobTable ──────────────────────────────────────────────────────────

    #[test]
    fn test_from_rows_derives_present_columns() {
        let table = JobTable::from_rows(vec![
            listing(Some("Senior Python Developer"), None),
            listing(None, Some("Software Development")),
        ]);

        assert!(table.has_column(Column::Title));
        assert!(table.has_column(Column::Category));
        assert!(!table.has_column(Column::Url));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_rows_empty() {
        let table = JobTable::from_rows(vec![]);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_new_keeps_explicit_columns_even_when_all_cells_empty() {
        let table = JobTable::new(
            vec![Column::Title, Column::Category],
            vec![JobListing::default()],
        );
        assert!(table.has_column(Column::Category));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_new_normalises_column_order_and_dedups() {
        let table = JobTable::new(
            vec![Column::Category, Column::Title, Column::Category],
            vec![],
        );
        assert_eq!(table.columns(), &[Column::Title, Column::Category]);
    }

    #[test]
    fn test_rows_preserve_insertion_order() {
        let table = JobTable::from_rows(vec![
            listing(Some("first"), None),
            listing(Some("second"), None),
            listing(Some("third"), None),
        ]);
        let titles: Vec<_> = table.rows().iter().map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("first"), Some("second"), Some("third")]);
    }
}

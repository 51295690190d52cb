//! Category aggregation for the distribution chart.

use std::collections::HashMap;

use scout_core::error::{Result, ScoutError};
use scout_core::models::{Column, JobTable};

/// Maximum number of category bars shown on a chart.
pub const MAX_CHART_CATEGORIES: usize = 10;

/// Count listings per category and return the most frequent categories,
/// largest first, capped at [`MAX_CHART_CATEGORIES`].
///
/// Rows with a missing category value are skipped. Ties are broken by
/// first-encountered order: the ranking starts from encounter order and the
/// descending sort is stable, so equal counts never reorder arbitrarily.
///
/// Fails with [`ScoutError::MissingCategoryColumn`] when the table has no
/// category column at all.
pub fn top_categories(table: &JobTable) -> Result<Vec<(String, u64)>> {
    if !table.has_column(Column::Category) {
        return Err(ScoutError::MissingCategoryColumn);
    }

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut encounter_order: Vec<String> = Vec::new();

    for row in table.rows() {
        let Some(category) = row.category.as_deref() else {
            continue;
        };
        match counts.get_mut(category) {
            Some(n) => *n += 1,
            None => {
                counts.insert(category.to_string(), 1);
                encounter_order.push(category.to_string());
            }
        }
    }

    let mut ranked: Vec<(String, u64)> = encounter_order
        .into_iter()
        .map(|category| {
            let count = counts[&category];
            (category, count)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_CHART_CATEGORIES);
    Ok(ranked)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Per-table insert counts for one seed run

use radar_common::db::{table_spec, TableFamily};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Rows inserted per table
    pub tables: BTreeMap<&'static str, i64>,
}

impl SeedReport {
    pub fn record(&mut self, table: &'static str, rows: i64) {
        *self.tables.entry(table).or_insert(0) += rows;
    }

    pub fn rows(&self, table: &str) -> i64 {
        self.tables.get(table).copied().unwrap_or(0)
    }

    /// Totals per table family; every family is present
    pub fn family_totals(&self) -> BTreeMap<TableFamily, i64> {
        let mut totals: BTreeMap<TableFamily, i64> =
            TableFamily::ALL.iter().map(|f| (*f, 0)).collect();

        for (table, rows) in &self.tables {
            if let Some(spec) = table_spec(table) {
                *totals.entry(spec.family).or_insert(0) += rows;
            }
        }
        totals
    }

    pub fn total(&self) -> i64 {
        self.tables.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_totals() {
        let mut report = SeedReport::default();
        report.record("articles", 2);
        report.record("article_abstracts", 5);
        report.record("comments", 3);
        report.record("article_abstracts", 1);

        let totals = report.family_totals();
        assert_eq!(totals[&TableFamily::Articles], 8);
        assert_eq!(totals[&TableFamily::Comments], 3);
        assert_eq!(totals[&TableFamily::Protocols], 0);
        assert_eq!(report.rows("article_abstracts"), 6);
        assert_eq!(report.total(), 11);
    }
}

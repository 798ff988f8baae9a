use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    View,
    /// The view lookup failed; the relation was left alone.
    ClassificationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableOutcome {
    Synced { rows: usize, batches: usize },
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: String,
    pub outcome: TableOutcome,
}

/// What a run did to each relation, in enumeration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub tables: Vec<TableReport>,
    pub elapsed: Duration,
}

impl SyncReport {
    pub fn record(&mut self, table: &str, outcome: TableOutcome) {
        self.tables.push(TableReport {
            table: table.to_string(),
            outcome,
        });
    }

    pub fn outcome(&self, table: &str) -> Option<&TableOutcome> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| &t.outcome)
    }

    pub fn synced_tables(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| matches!(t.outcome, TableOutcome::Synced { .. }))
            .count()
    }

    pub fn skipped_tables(&self) -> usize {
        self.tables.len() - self.synced_tables()
    }

    pub fn total_rows(&self) -> usize {
        self.tables
            .iter()
            .map(|t| match t.outcome {
                TableOutcome::Synced { rows, .. } => rows,
                TableOutcome::Skipped { .. } => 0,
            })
            .sum()
    }
}

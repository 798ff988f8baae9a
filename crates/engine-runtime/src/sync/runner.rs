use crate::{
    error::SyncError,
    report::{SkipReason, SyncReport, TableOutcome},
    settings::SyncSettings,
    sync::{schema::mirror_schema, table::sync_rows},
};
use connectors::sql::base::{destination::DbDestination, source::SourceCatalog};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives a full refresh of every base table, one relation at a time.
pub struct TableSyncer<'a, S: ?Sized, D: ?Sized> {
    source: &'a S,
    destination: &'a D,
    settings: SyncSettings,
}

impl<'a, S, D> TableSyncer<'a, S, D>
where
    S: SourceCatalog + ?Sized,
    D: DbDestination + ?Sized,
{
    pub fn new(source: &'a S, destination: &'a D, settings: SyncSettings) -> Self {
        Self {
            source,
            destination,
            settings,
        }
    }

    /// Runs the sync. The first fatal error stops the run; relations already
    /// synced stay synced.
    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        let started = Instant::now();
        let relations = self
            .source
            .list_tables()
            .await
            .map_err(SyncError::Enumerate)?;

        info!(
            database = self.source.database(),
            relations = relations.len(),
            chunk_size = self.settings.chunk_size,
            pagination = %self.settings.pagination,
            "Starting sync"
        );

        let mut report = SyncReport::default();
        for relation in &relations {
            let outcome = self.sync_relation(relation).await?;
            report.record(relation, outcome);
        }

        report.elapsed = started.elapsed();
        Ok(report)
    }

    async fn sync_relation(&self, relation: &str) -> Result<TableOutcome, SyncError> {
        match self.source.is_view(self.source.database(), relation).await {
            Ok(false) => {}
            Ok(true) => {
                info!(relation, "Skipping view");
                return Ok(TableOutcome::Skipped {
                    reason: SkipReason::View,
                });
            }
            Err(e) => {
                warn!(relation, error = %e, "Could not determine relation kind, skipping");
                return Ok(TableOutcome::Skipped {
                    reason: SkipReason::ClassificationFailed(e.to_string()),
                });
            }
        }

        let schema = mirror_schema(self.source, self.destination, relation).await?;
        debug!(relation, schema = ?schema, "Schema mirrored");

        sync_rows(self.source, self.destination, relation, &self.settings).await
    }
}

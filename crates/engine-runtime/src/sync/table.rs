use crate::{
    error::SyncError,
    report::TableOutcome,
    settings::{PaginationMode, SyncSettings},
};
use connectors::sql::base::{
    destination::DbDestination, error::DbError, requests::FetchRowsRequestBuilder,
    source::SourceCatalog,
};
use model::pagination::cursor::Cursor;
use planner::query::offsets::{LimitOffset, OffsetStrategy, PkOffset};
use std::sync::Arc;
use tracing::{debug, info};

/// Copies every row of `table` in chunks of `settings.chunk_size`.
///
/// A chunk shorter than the chunk size (an empty one included) is the last;
/// empty chunks are never written.
pub async fn sync_rows<S, D>(
    source: &S,
    destination: &D,
    table: &str,
    settings: &SyncSettings,
) -> Result<TableOutcome, SyncError>
where
    S: SourceCatalog + ?Sized,
    D: DbDestination + ?Sized,
{
    let extract_err = |e: DbError| SyncError::Extract {
        table: table.to_string(),
        source: e,
    };

    let strategy = pagination_strategy(source, table, settings)
        .await
        .map_err(extract_err)?;
    debug!(table, strategy = strategy.name(), "Paginating table");

    let mut cursor = Cursor::None;
    let mut rows = 0;
    let mut batches = 0;

    loop {
        let request = FetchRowsRequestBuilder::new(table)
            .limit(settings.chunk_size)
            .cursor(cursor.clone())
            .strategy(strategy.clone())
            .build();

        let batch = source.fetch_chunk(request).await.map_err(extract_err)?;
        if batch.is_empty() {
            break;
        }

        destination
            .upsert(&batch)
            .await
            .map_err(|e| SyncError::Write {
                table: table.to_string(),
                source: e,
            })?;

        rows += batch.len();
        batches += 1;
        debug!(table, batch = batches, rows = batch.len(), cursor = ?cursor, "Wrote batch");

        if batch.is_last(settings.chunk_size) {
            break;
        }

        cursor = strategy
            .next_cursor(&cursor, &batch.rows)
            .map_err(|e| extract_err(e.into()))?;
    }

    info!(table, rows, batches, "Table synced");
    Ok(TableOutcome::Synced { rows, batches })
}

async fn pagination_strategy<S>(
    source: &S,
    table: &str,
    settings: &SyncSettings,
) -> Result<Arc<dyn OffsetStrategy>, DbError>
where
    S: SourceCatalog + ?Sized,
{
    if settings.pagination == PaginationMode::Offset {
        return Ok(Arc::new(LimitOffset));
    }

    match source.integer_primary_key(table).await? {
        Some(pk) => Ok(Arc::new(PkOffset { pk })),
        None => {
            debug!(table, "No single integer primary key, using offset pagination");
            Ok(Arc::new(LimitOffset))
        }
    }
}

use model::pagination::cursor::Cursor;
use planner::query::offsets::{LimitOffset, OffsetStrategy};
use std::sync::Arc;

/// One page read against a single table.
#[derive(Clone)]
pub struct FetchRowsRequest {
    pub table: String,
    pub limit: usize,
    pub cursor: Cursor,
    pub strategy: Arc<dyn OffsetStrategy>,
}

pub struct FetchRowsRequestBuilder {
    table: String,
    limit: usize,
    cursor: Cursor,
    strategy: Arc<dyn OffsetStrategy>,
}

impl FetchRowsRequestBuilder {
    pub fn new(table: &str) -> Self {
        FetchRowsRequestBuilder {
            table: table.to_string(),
            limit: 0,
            cursor: Cursor::None,
            strategy: Arc::new(LimitOffset),
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn strategy(mut self, strategy: Arc<dyn OffsetStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> FetchRowsRequest {
        FetchRowsRequest {
            table: self.table,
            limit: self.limit,
            cursor: self.cursor,
            strategy: self.strategy,
        }
    }
}

impl std::fmt::Debug for FetchRowsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRowsRequest")
            .field("table", &self.table)
            .field("limit", &self.limit)
            .field("cursor", &self.cursor)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

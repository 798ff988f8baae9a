use crate::error::SyncError;
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// How consecutive chunks of a table are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PaginationMode {
    /// `LIMIT .. OFFSET ..` in natural table order.
    #[default]
    Offset,

    /// `WHERE pk > last ORDER BY pk` for tables with a single integer primary
    /// key; other tables fall back to `Offset`.
    Keyset,
}

impl FromStr for PaginationMode {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offset" => Ok(PaginationMode::Offset),
            "keyset" | "pk" => Ok(PaginationMode::Keyset),
            other => Err(SyncError::InvalidSettings(format!(
                "unknown pagination mode '{other}' (expected 'offset' or 'keyset')"
            ))),
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationMode::Offset => write!(f, "offset"),
            PaginationMode::Keyset => write!(f, "keyset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSettings {
    /// Upper bound on rows per read and per write.
    pub chunk_size: usize,
    pub pagination: PaginationMode,
}

impl SyncSettings {
    pub fn new(chunk_size: usize, pagination: PaginationMode) -> Result<Self, SyncError> {
        if chunk_size == 0 {
            return Err(SyncError::InvalidSettings(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            chunk_size,
            pagination,
        })
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            pagination: PaginationMode::Offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SyncSettings::default();
        assert_eq!(settings.chunk_size, 1000);
        assert_eq!(settings.pagination, PaginationMode::Offset);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        assert!(matches!(
            SyncSettings::new(0, PaginationMode::Offset),
            Err(SyncError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_parse_pagination_mode() {
        assert_eq!("Keyset".parse::<PaginationMode>().unwrap(), PaginationMode::Keyset);
        assert_eq!(" offset ".parse::<PaginationMode>().unwrap(), PaginationMode::Offset);
        assert!("cursor".parse::<PaginationMode>().is_err());
    }
}

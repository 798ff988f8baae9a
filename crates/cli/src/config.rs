use crate::{env::EnvManager, error::CliError};
use engine_runtime::settings::{PaginationMode, SyncSettings};
use model::execution::connection::{ConnectionTarget, TransportMode};

/// Profile suffixes: `DB_HOST1` is the source, `DB_HOST2` the destination.
const SOURCE_PROFILE: &str = "1";
const DESTINATION_PROFILE: &str = "2";

const CHUNK_SIZE_VAR: &str = "SYNC_CHUNK_SIZE";
const PAGINATION_VAR: &str = "SYNC_PAGINATION";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub source: ConnectionTarget,
    pub destination: ConnectionTarget,
    pub settings: SyncSettings,
}

impl SyncConfig {
    pub fn from_env(env: &EnvManager) -> Result<Self, CliError> {
        Ok(Self {
            source: profile(env, SOURCE_PROFILE)?,
            destination: profile(env, DESTINATION_PROFILE)?,
            settings: settings(env)?,
        })
    }
}

/// Missing credentials stay empty; the server is the one to reject them.
fn profile(env: &EnvManager, suffix: &str) -> Result<ConnectionTarget, CliError> {
    Ok(ConnectionTarget {
        username: env.get_or_empty(&format!("DB_USERNAME{suffix}")),
        password: env.get_or_empty(&format!("DB_PASSWORD{suffix}")),
        hostname: env.get_or_empty(&format!("DB_HOST{suffix}")),
        database: env.get_or_empty(&format!("DB_NAME{suffix}")),
        transport: transport(env, &format!("DB_TLS{suffix}"))?,
    })
}

fn transport(env: &EnvManager, key: &str) -> Result<TransportMode, CliError> {
    let Some(raw) = env.get(key) else {
        return Ok(TransportMode::Tls);
    };

    match raw.trim().to_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(TransportMode::Tls),
        "0" | "false" | "off" | "no" => Ok(TransportMode::Plain),
        other => Err(CliError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn settings(env: &EnvManager) -> Result<SyncSettings, CliError> {
    let defaults = SyncSettings::default();

    let chunk_size = match env.get(CHUNK_SIZE_VAR) {
        Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
            CliError::Config(format!("{CHUNK_SIZE_VAR} must be a positive integer: {e}"))
        })?,
        None => defaults.chunk_size,
    };

    let pagination = match env.get(PAGINATION_VAR) {
        Some(raw) => raw
            .parse::<PaginationMode>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => defaults.pagination,
    };

    SyncSettings::new(chunk_size, pagination).map_err(|e| CliError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_from_env() {
        let env = EnvManager::from_pairs(&[
            ("DB_USERNAME1", "reader"),
            ("DB_PASSWORD1", "pw1"),
            ("DB_HOST1", "primary:3306"),
            ("DB_NAME1", "shop"),
            ("DB_USERNAME2", "writer"),
            ("DB_PASSWORD2", "pw2"),
            ("DB_HOST2", "replica"),
            ("DB_NAME2", "shop_copy"),
            ("DB_TLS2", "false"),
        ]);

        let config = SyncConfig::from_env(&env).unwrap();
        assert_eq!(config.source.username, "reader");
        assert_eq!(config.source.hostname, "primary:3306");
        assert_eq!(config.source.transport, TransportMode::Tls);
        assert_eq!(config.destination.database, "shop_copy");
        assert_eq!(config.destination.transport, TransportMode::Plain);
        assert_eq!(config.settings, SyncSettings::default());
    }

    #[test]
    fn test_missing_values_are_empty() {
        let config = SyncConfig::from_env(&EnvManager::from_pairs(&[])).unwrap();
        assert_eq!(config.source.username, "");
        assert_eq!(config.source.password, "");
        assert_eq!(config.destination.hostname, "");
        assert_eq!(config.destination.database, "");
    }

    #[test]
    fn test_sync_settings_from_env() {
        let env = EnvManager::from_pairs(&[
            ("SYNC_CHUNK_SIZE", "250"),
            ("SYNC_PAGINATION", "keyset"),
        ]);
        let config = SyncConfig::from_env(&env).unwrap();
        assert_eq!(config.settings.chunk_size, 250);
        assert_eq!(config.settings.pagination, PaginationMode::Keyset);
    }

    #[test]
    fn test_invalid_settings() {
        for (key, value) in [
            ("SYNC_CHUNK_SIZE", "0"),
            ("SYNC_CHUNK_SIZE", "many"),
            ("SYNC_PAGINATION", "random"),
            ("DB_TLS1", "maybe"),
        ] {
            let env = EnvManager::from_pairs(&[(key, value)]);
            assert!(
                matches!(SyncConfig::from_env(&env), Err(CliError::Config(_))),
                "{key}={value}"
            );
        }
    }
}

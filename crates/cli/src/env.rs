use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::CliError;

/// Default dotenv file, looked up in the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Points at a dotenv file to use instead of `./.env`.
pub const ENV_FILE_VAR: &str = "SYNC_ENV_FILE";

/// Environment variable manager that loads from system and .env files.
///
/// Variables set in the process environment win over the file, which only
/// fills in what is missing.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
    system_keys: HashSet<String>,
}

impl EnvManager {
    pub fn new() -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let system_keys = vars.keys().cloned().collect();
        Self { vars, system_keys }
    }

    /// Loads `$SYNC_ENV_FILE` if set (it must exist), else `./.env` if present.
    pub fn load_dotenv(&mut self) -> Result<(), CliError> {
        if let Some(path) = self.get(ENV_FILE_VAR).map(str::to_string) {
            info!("Loading environment from '{}'", path);
            return self.load_from_file(path);
        }

        let path = Path::new(DEFAULT_ENV_FILE);
        if !path.exists() {
            info!("No {} file found, using the process environment", DEFAULT_ENV_FILE);
            return Ok(());
        }
        self.load_from_file(path)
    }

    /// Load variables from a .env file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The value of `key`, or an empty string when unset.
    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            if self.system_keys.contains(key) {
                continue;
            }
            self.vars
                .insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

#[cfg(test)]
impl EnvManager {
    /// A manager whose "process environment" is exactly `vars`.
    pub fn from_pairs(vars: &[(&str, &str)]) -> Self {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let system_keys = vars.keys().cloned().collect();
        Self { vars, system_keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_env() {
        let mut env = EnvManager::default();
        let content = r#"
# Comment
DB_HOST1=db1.internal:3306
export DB_NAME1=shop
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("DB_HOST1"), Some("db1.internal:3306"));
        assert_eq!(env.get("DB_NAME1"), Some("shop"));
    }

    #[test]
    fn test_parse_quoted_values() {
        let mut env = EnvManager::default();
        let content = r#"
QUOTED="value with spaces"
SINGLE='p=ss'
UNQUOTED=no_spaces
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("QUOTED"), Some("value with spaces"));
        assert_eq!(env.get("SINGLE"), Some("p=ss"));
        assert_eq!(env.get("UNQUOTED"), Some("no_spaces"));
    }

    #[test]
    fn test_invalid_env_format() {
        let mut env = EnvManager::default();
        assert!(env.parse_env_content("INVALID LINE WITHOUT EQUALS").is_err());
        assert!(env.parse_env_content("=value").is_err());
    }

    #[test]
    fn test_process_environment_wins() {
        let mut env = EnvManager::from_pairs(&[("DB_USERNAME1", "from_process")]);
        env.parse_env_content("DB_USERNAME1=from_file\nDB_USERNAME2=replica")
            .unwrap();

        assert_eq!(env.get("DB_USERNAME1"), Some("from_process"));
        assert_eq!(env.get("DB_USERNAME2"), Some("replica"));
    }

    #[test]
    fn test_explicit_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DB_NAME2=replica").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut env = EnvManager::from_pairs(&[(ENV_FILE_VAR, path.as_str())]);
        env.load_dotenv().unwrap();
        assert_eq!(env.get("DB_NAME2"), Some("replica"));
    }

    #[test]
    fn test_missing_explicit_env_file_is_an_error() {
        let mut env = EnvManager::from_pairs(&[(ENV_FILE_VAR, "/nonexistent/sync.env")]);
        assert!(matches!(env.load_dotenv(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_get_or_empty() {
        let env = EnvManager::from_pairs(&[("DB_HOST1", "db")]);
        assert_eq!(env.get_or_empty("DB_HOST1"), "db");
        assert_eq!(env.get_or_empty("DB_HOST2"), "");
    }
}

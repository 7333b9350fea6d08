use hearts_bot::BotDifficulty;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimConfig {
    pub run_id: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_games")]
    pub games: usize,
    pub players: Vec<SeatConfig>,
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SimConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        if self.games == 0 {
            return Err(ValidationError::InvalidField {
                field: "games".to_string(),
                message: "number of games must be greater than zero".to_string(),
            });
        }
        validate_players(&self.players)?;
        self.persistence.validate()?;
        self.logging.normalize();
        Ok(())
    }

    /// Save-file path with `{run_id}` substituted, if persistence is configured.
    pub fn resolved_save_path(&self) -> Option<PathBuf> {
        self.persistence
            .path
            .as_deref()
            .map(|template| resolve_template(&self.run_id, template))
    }

    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|template| resolve_template(&self.run_id, template))
    }
}

fn default_games() -> usize {
    1
}

/// One seat at the table, in seat order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeatConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub human: bool,
    #[serde(default)]
    pub difficulty: DifficultySetting,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifficultySetting {
    Easy,
    #[default]
    Normal,
}

impl From<DifficultySetting> for BotDifficulty {
    fn from(setting: DifficultySetting) -> Self {
        match setting {
            DifficultySetting::Easy => BotDifficulty::Easy,
            DifficultySetting::Normal => BotDifficulty::Normal,
        }
    }
}

/// Saved-game location. Without a path the session keeps its save in memory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub path: Option<String>,
}

impl PersistenceConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.path.as_deref() {
            Some(path) if path.trim().is_empty() => Err(ValidationError::InvalidField {
                field: "persistence.path".to_string(),
                message: "path must not be empty".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Logging configuration defaults to compact text on stderr.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_players(players: &[SeatConfig]) -> Result<(), ValidationError> {
    if players.len() != 4 {
        return Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: format!("exactly 4 players required, found {}", players.len()),
        });
    }

    let mut seen = HashSet::new();
    for (index, seat) in players.iter().enumerate() {
        if seat.id.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: format!("players[{index}].id"),
                message: "player id must not be empty".to_string(),
            });
        }

        if seat.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: format!("players[{index}].name"),
                message: "player name must not be empty".to_string(),
            });
        }

        if !seen.insert(seat.id.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("player id '{}' defined more than once", seat.id),
            });
        }
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    PathBuf::from(template.replace("{run_id}", run_id))
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_YAML: &str = r#"
run_id: "table_smoke"
seed: 99
games: 3
players:
  - id: "player-0"
    name: "You"
    human: true
  - id: "player-1"
    name: "Alice AI"
    difficulty: "easy"
  - id: "player-2"
    name: "Bob AI"
  - id: "player-3"
    name: "Charlie AI"
    difficulty: "normal"
persistence:
  path: "sim/out/{run_id}/hearts-game-state.json"
logging:
  enable_structured: true
  tracing_level: "debug"
  file: "sim/out/{run_id}/events.jsonl"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: SimConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.games, 3);
        assert_eq!(cfg.seed, Some(99));
        assert!(cfg.players[0].human);
        assert_eq!(cfg.players[1].difficulty, DifficultySetting::Easy);
        assert_eq!(cfg.players[2].difficulty, DifficultySetting::Normal);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert_eq!(
            cfg.resolved_save_path(),
            Some(PathBuf::from("sim/out/table_smoke/hearts-game-state.json"))
        );
        assert_eq!(
            cfg.resolved_log_path(),
            Some(PathBuf::from("sim/out/table_smoke/events.jsonl"))
        );
    }

    #[test]
    fn defaults_fill_optional_blocks() {
        let yaml = r#"
run_id: "bare"
players:
  - { id: "a", name: "A" }
  - { id: "b", name: "B" }
  - { id: "c", name: "C" }
  - { id: "d", name: "D" }
"#;
        let mut cfg: SimConfig = serde_yaml::from_str(yaml).expect("parse");
        cfg.validate().expect("validate");
        assert_eq!(cfg.games, 1);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.resolved_save_path(), None);
        assert!(!cfg.logging.enable_structured);
        assert_eq!(cfg.logging.tracing_level, "info");
    }

    #[test]
    fn rejects_wrong_table_size() {
        let yaml = BASIC_YAML.replace(
            "  - id: \"player-3\"\n    name: \"Charlie AI\"\n    difficulty: \"normal\"\n",
            "",
        );
        let mut cfg: SimConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("should fail");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "players"
        ));
    }

    #[test]
    fn rejects_duplicate_player_ids() {
        let yaml = BASIC_YAML.replace("id: \"player-3\"", "id: \"player-1\"");
        let mut cfg: SimConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("should fail");
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn rejects_zero_games_and_bad_run_id() {
        let mut cfg: SimConfig = serde_yaml::from_str(BASIC_YAML).expect("parse");
        cfg.games = 0;
        assert!(cfg.validate().is_err());

        let mut cfg: SimConfig = serde_yaml::from_str(BASIC_YAML).expect("parse");
        cfg.run_id = "has spaces".to_string();
        let err = cfg.validate().expect_err("should fail");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "run_id"
        ));
    }

    #[test]
    fn unknown_difficulty_fails_to_parse() {
        let yaml = BASIC_YAML.replace("difficulty: \"easy\"", "difficulty: \"brutal\"");
        assert!(serde_yaml::from_str::<SimConfig>(&yaml).is_err());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = SimConfig::from_path("does/not/exist.yaml").expect_err("missing");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), Path::new("does/not/exist.yaml"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::source::{BuiltinSource, EmailSource, JsonFileSource, sample_records};
use crate::model::config::{AiModel, DeskConfig, EmailProvider, ResponseTone};
use crate::model::desk::Desk;
use crate::ops::triage::TriageStore;
use crate::parse::ingest;

/// Error type for desk I/O operations
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("not a desk: no desk/ directory found")]
    NotADesk,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse desk.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not edit desk.toml: {0}")]
    ConfigEditError(#[from] toml_edit::TomlError),
    #[error("could not parse {path}: {source}")]
    DataParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("desk already exists at {0} (use --force to reinitialize)")]
    AlreadyExists(PathBuf),
    #[error("unknown setting '{0}' (expected provider, model or tone)")]
    UnknownSetting(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidSetting { key: String, value: String },
    #[error("[settings] in desk.toml is not a table")]
    SettingsNotTable,
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

pub const DESK_DIR: &str = "desk";
pub const CONFIG_FILE: &str = "desk.toml";
pub const SEED_FILE: &str = "emails.json";
pub const LOG_FILE: &str = "desk.log";

/// Walk up from `start` looking for a `desk/desk.toml`. Returns the `desk/`
/// directory.
pub fn discover_desk(start: &Path) -> Result<PathBuf, DeskError> {
    let mut current = start.to_path_buf();
    loop {
        let desk_dir = current.join(DESK_DIR);
        if desk_dir.is_dir() && desk_dir.join(CONFIG_FILE).exists() {
            return Ok(desk_dir);
        }
        if !current.pop() {
            return Err(DeskError::NotADesk);
        }
    }
}

/// The config of the desk found from `start`, or the defaults when there is
/// none. Never touches the data file.
pub fn load_config(start: &Path) -> Result<DeskConfig, DeskError> {
    match discover_desk(start) {
        Ok(dir) => read_config(&dir),
        Err(DeskError::NotADesk) => Ok(DeskConfig::default()),
        Err(e) => Err(e),
    }
}

/// Read and parse desk.toml
pub fn read_config(desk_dir: &Path) -> Result<DeskConfig, DeskError> {
    let (config, _) = read_config_doc(desk_dir)?;
    Ok(config)
}

/// Read the config along with the raw toml_edit document for
/// round-trip-safe editing.
pub fn read_config_doc(desk_dir: &Path) -> Result<(DeskConfig, toml_edit::DocumentMut), DeskError> {
    let path = desk_dir.join(CONFIG_FILE);
    let text = fs::read_to_string(&path).map_err(|e| DeskError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: DeskConfig = toml::from_str(&text)?;
    let doc: toml_edit::DocumentMut = text.parse()?;
    Ok((config, doc))
}

/// Write the config document back, preserving formatting
pub fn write_config(desk_dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), DeskError> {
    fs::write(desk_dir.join(CONFIG_FILE), doc.to_string())?;
    Ok(())
}

/// Set a `[settings]` key after checking the value is one the desk knows
pub fn set_setting(doc: &mut toml_edit::DocumentMut, key: &str, value: &str) -> Result<(), DeskError> {
    let valid = match key {
        "provider" => parse_setting::<EmailProvider>(value),
        "model" => parse_setting::<AiModel>(value),
        "tone" => parse_setting::<ResponseTone>(value),
        _ => return Err(DeskError::UnknownSetting(key.to_string())),
    };
    if !valid {
        return Err(DeskError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    if !doc.contains_key("settings") {
        doc["settings"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    let settings = doc
        .get_mut("settings")
        .and_then(toml_edit::Item::as_table_like_mut)
        .ok_or(DeskError::SettingsNotTable)?;
    settings.insert(key, toml_edit::value(value));
    Ok(())
}

fn parse_setting<T: serde::de::DeserializeOwned>(value: &str) -> bool {
    toml::Value::String(value.to_string()).try_into::<T>().is_ok()
}

/// Persist one setting to desk.toml
pub fn save_setting(desk_dir: &Path, key: &str, value: &str) -> Result<(), DeskError> {
    let (_, mut doc) = read_config_doc(desk_dir)?;
    set_setting(&mut doc, key, value)?;
    write_config(desk_dir, &doc)
}

/// Load the desk found from `start`. With no desk on disk the defaults and
/// the builtin sample inbox are used. `data_override` replaces `[data] file`;
/// a relative override is taken from `start`.
pub fn load_desk(start: &Path, data_override: Option<&Path>) -> Result<Desk, DeskError> {
    let (desk_dir, config) = match discover_desk(start) {
        Ok(dir) => {
            let config = read_config(&dir)?;
            (Some(dir), config)
        }
        Err(DeskError::NotADesk) => (None, DeskConfig::default()),
        Err(e) => return Err(e),
    };

    let source: Box<dyn EmailSource> = match (data_override, &config.data.file, &desk_dir) {
        (Some(path), _, _) => Box::new(JsonFileSource::new(start.join(path))),
        (None, Some(file), Some(dir)) => Box::new(JsonFileSource::new(dir.join(file))),
        _ => Box::new(BuiltinSource),
    };

    load_with_source(desk_dir, config, source.as_ref())
}

/// Build a desk from an explicit source
pub fn load_with_source(
    desk_dir: Option<PathBuf>,
    config: DeskConfig,
    source: &dyn EmailSource,
) -> Result<Desk, DeskError> {
    let ingested = ingest(source.load()?);
    tracing::info!(
        source = %source.name(),
        loaded = ingested.records.len(),
        rejected = ingested.rejected.len(),
        "desk loaded"
    );
    Ok(Desk {
        desk_dir,
        config,
        store: TriageStore::new(ingested.records),
        rejected: ingested.rejected,
        source_name: source.name(),
    })
}

/// Create `desk/desk.toml` under `root`. With `with_seed`, the sample inbox
/// is also written to `desk/emails.json` and referenced from the config.
pub fn init_desk(root: &Path, name: &str, with_seed: bool, force: bool) -> Result<PathBuf, DeskError> {
    let desk_dir = root.join(DESK_DIR);
    if desk_dir.join(CONFIG_FILE).exists() && !force {
        return Err(DeskError::AlreadyExists(desk_dir));
    }
    fs::create_dir_all(&desk_dir)?;

    let mut doc: toml_edit::DocumentMut = CONFIG_TEMPLATE.parse()?;
    doc["desk"]["name"] = toml_edit::value(name);
    if with_seed {
        let seed =
            serde_json::to_string_pretty(&sample_records()).map_err(std::io::Error::other)?;
        fs::write(desk_dir.join(SEED_FILE), seed + "\n")?;
        doc["data"]["file"] = toml_edit::value(SEED_FILE);
    }
    write_config(&desk_dir, &doc)?;
    Ok(desk_dir)
}

const CONFIG_TEMPLATE: &str = r#"[desk]
name = "Support Desk"

[data]
# file = "emails.json"

[settings]
provider = "gmail"
model = "gpt4"
tone = "professional"

[ui]
show_key_hints = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_walks_up() {
        let tmp = TempDir::new().unwrap();
        init_desk(tmp.path(), "Test", false, false).unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        let found = discover_desk(&nested).unwrap();
        assert_eq!(found, tmp.path().join("desk"));
    }

    #[test]
    fn discover_without_desk_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(discover_desk(tmp.path()), Err(DeskError::NotADesk)));
    }

    #[test]
    fn load_without_desk_uses_builtin() {
        let tmp = TempDir::new().unwrap();
        let desk = load_desk(tmp.path(), None).unwrap();
        assert!(desk.desk_dir.is_none());
        assert_eq!(desk.store.len(), 4);
        assert!(desk.rejected.is_empty());
        assert_eq!(desk.source_name, "builtin sample inbox");
    }

    #[test]
    fn init_with_seed_round_trips() {
        let tmp = TempDir::new().unwrap();
        let dir = init_desk(tmp.path(), "Acme Support", true, false).unwrap();
        assert!(dir.join(SEED_FILE).exists());

        let desk = load_desk(tmp.path(), None).unwrap();
        assert_eq!(desk.config.desk.name, "Acme Support");
        assert_eq!(desk.config.data.file.as_deref(), Some("emails.json"));
        assert_eq!(desk.store.records(), sample_records().as_slice());
    }

    #[test]
    fn init_refuses_existing_without_force() {
        let tmp = TempDir::new().unwrap();
        init_desk(tmp.path(), "One", false, false).unwrap();
        assert!(matches!(
            init_desk(tmp.path(), "Two", false, false),
            Err(DeskError::AlreadyExists(_))
        ));
        init_desk(tmp.path(), "Two", false, true).unwrap();
        let config = read_config(&tmp.path().join("desk")).unwrap();
        assert_eq!(config.desk.name, "Two");
    }

    #[test]
    fn data_override_wins() {
        let tmp = TempDir::new().unwrap();
        init_desk(tmp.path(), "Test", true, false).unwrap();
        let other = tmp.path().join("other.json");
        fs::write(&other, "[]").unwrap();
        let desk = load_desk(tmp.path(), Some(other.as_path())).unwrap();
        assert!(desk.store.is_empty());
    }

    #[test]
    fn relative_data_override_is_taken_from_start() {
        let tmp = TempDir::new().unwrap();
        init_desk(tmp.path(), "Test", true, false).unwrap();
        fs::write(tmp.path().join("one.json"), "[]").unwrap();
        let desk = load_desk(tmp.path(), Some(Path::new("one.json"))).unwrap();
        assert!(desk.store.is_empty());
        assert!(desk.source_name.contains(&tmp.path().display().to_string()));
    }

    #[test]
    fn load_config_skips_the_data_file() {
        let tmp = TempDir::new().unwrap();
        let dir = init_desk(tmp.path(), "Acme", true, false).unwrap();
        fs::write(dir.join(SEED_FILE), "{ not json").unwrap();
        assert!(matches!(
            load_desk(tmp.path(), None),
            Err(DeskError::DataParseError { .. })
        ));
        assert_eq!(load_config(tmp.path()).unwrap().desk.name, "Acme");

        let empty = TempDir::new().unwrap();
        assert_eq!(
            load_config(empty.path()).unwrap().settings,
            DeskConfig::default().settings
        );
    }

    #[test]
    fn bad_records_are_reported_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let dir = init_desk(tmp.path(), "Test", true, false).unwrap();
        let mut values: Vec<serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(dir.join(SEED_FILE)).unwrap()).unwrap();
        values[1]["priority"] = serde_json::json!("asap");
        fs::write(dir.join(SEED_FILE), serde_json::to_string(&values).unwrap()).unwrap();

        let desk = load_desk(tmp.path(), None).unwrap();
        assert_eq!(desk.store.len(), 3);
        assert_eq!(desk.rejected.len(), 1);
        assert_eq!(desk.rejected[0].record(), "2");
    }

    #[test]
    fn set_setting_preserves_comments() {
        let mut doc: toml_edit::DocumentMut = CONFIG_TEMPLATE.parse().unwrap();
        set_setting(&mut doc, "tone", "friendly").unwrap();
        let text = doc.to_string();
        assert!(text.contains("tone = \"friendly\""));
        assert!(text.contains("# file = \"emails.json\""));
        let config: DeskConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.settings.tone, ResponseTone::Friendly);
    }

    #[test]
    fn set_setting_rejects_unknown() {
        let mut doc: toml_edit::DocumentMut = CONFIG_TEMPLATE.parse().unwrap();
        assert!(matches!(
            set_setting(&mut doc, "colour", "red"),
            Err(DeskError::UnknownSetting(_))
        ));
        assert!(matches!(
            set_setting(&mut doc, "model", "llama"),
            Err(DeskError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn set_setting_creates_missing_table() {
        let mut doc: toml_edit::DocumentMut = "[desk]\nname = \"x\"\n".parse().unwrap();
        set_setting(&mut doc, "provider", "imap").unwrap();
        let config: DeskConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.settings.provider, EmailProvider::Imap);
    }

    #[test]
    fn set_setting_refuses_non_table_settings() {
        let mut doc: toml_edit::DocumentMut = "settings = 1\n".parse().unwrap();
        assert!(matches!(
            set_setting(&mut doc, "tone", "friendly"),
            Err(DeskError::SettingsNotTable)
        ));
        assert_eq!(doc.to_string(), "settings = 1\n");
    }

    #[test]
    fn set_setting_writes_into_inline_table() {
        let mut doc: toml_edit::DocumentMut = "settings = { tone = \"formal\" }\n".parse().unwrap();
        set_setting(&mut doc, "tone", "friendly").unwrap();
        let config: DeskConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.settings.tone, ResponseTone::Friendly);
    }

    #[test]
    fn save_setting_writes_file() {
        let tmp = TempDir::new().unwrap();
        let dir = init_desk(tmp.path(), "Test", false, false).unwrap();
        save_setting(&dir, "model", "bert").unwrap();
        assert_eq!(read_config(&dir).unwrap().settings.model, AiModel::Bert);
    }
}

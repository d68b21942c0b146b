use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShortnConfig;
use crate::error::{Result, ShortnError};
use crate::registry::ServiceRegistry;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(
    config_dir: &Path,
    registry: &ServiceRegistry,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut config = ShortnConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config_entries(config.entries());
        }
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result = result.with_config_entries(vec![(key, value)]),
            None => result.add_message(CmdMessage::info(format!("{} is not set", key))),
        },
        ConfigAction::Set(key, value) => {
            if key == "main-service" && !registry.contains(&value) {
                return Err(ShortnError::Config(format!(
                    "Unknown service `{}` (available: {})",
                    value,
                    registry.ids().collect::<Vec<_>>().join(", ")
                )));
            }
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        let registry = ServiceRegistry::new();

        run(
            dir.path(),
            &registry,
            ConfigAction::Set("main-service".into(), "isgood".into()),
        )
        .unwrap();

        let show = ConfigAction::ShowKey("main-service".into());
        let shown = run(dir.path(), &registry, show).unwrap();
        assert_eq!(
            shown.config_entries,
            vec![("main-service".to_string(), "isgood".to_string())]
        );
    }

    #[test]
    fn rejects_unknown_main_service() {
        let dir = TempDir::new().unwrap();
        let err = run(
            dir.path(),
            &ServiceRegistry::new(),
            ConfigAction::Set("main-service".into(), "nope".into()),
        )
        .unwrap_err();
        assert!(matches!(err, ShortnError::Config(_)));
        assert_eq!(ShortnConfig::load(dir.path()).unwrap(), ShortnConfig::default());
    }

    #[test]
    fn show_all_lists_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), &ServiceRegistry::new(), ConfigAction::ShowAll).unwrap();
        let keys: Vec<&str> = result.config_entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["main-service", "enable-history", "timeout"]);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

/// Projects reported on when none are given on the command line
pub const DEFAULT_PROJECTS: &[&str] = &[
    "javapoet",
    "mybatis",
    "traccar",
    "stream-lib",
    "mustache.java",
    "twilio-java",
    "jsoup",
    "protostuff",
    "logback",
    "retrofit",
];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PathsConfig {
    /// Root of the PIT reports for the original test classes
    pub original: Option<String>,
    /// Root of the amplification reports
    pub amplified: Option<String>,
    /// File listing the selected classes per project
    pub selection: Option<String>,
}

impl PathsConfig {
    pub fn original(&self) -> &str {
        self.original.as_deref().unwrap_or("original/october-2017")
    }

    pub fn amplified(&self) -> &str {
        self.amplified.as_deref().unwrap_or("results/october-2017")
    }

    pub fn selection(&self) -> &str {
        self.selection
            .as_deref()
            .unwrap_or("dataset/selected_classes.csv")
    }

    pub fn to_effective(&self) -> Self {
        Self {
            original: Some(self.original().to_string()),
            amplified: Some(self.amplified().to_string()),
            selection: Some(self.selection().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub projects: Option<Vec<String>>,

    pub paths: Option<PathsConfig>,
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn projects(&self) -> Vec<String> {
        match &self.projects {
            Some(projects) if !projects.is_empty() => projects.clone(),
            _ => DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn paths(&self) -> PathsConfig {
        self.paths.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            projects: Some(self.projects()),
            paths: Some(self.paths().to_effective()),
            log: Some(self.log().to_effective()),
        }
    }

    /// Projects given on the command line win over the configured list
    pub fn resolve_projects(&self, cli_projects: &[String]) -> Vec<String> {
        if cli_projects.is_empty() {
            self.projects()
        } else {
            cli_projects.to_vec()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub original: Option<String>,
    pub amplified: Option<String>,
    pub selection: Option<String>,
}

pub const CONFIG_FILENAME: &str = "pms-report.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        match load_nearest_config_file() {
            Ok(Some(file_cfg)) => apply_file_config(&mut cfg, &file_cfg),
            Ok(None) => {}
            Err(e) => warn!("Ignoring config file: {e}"),
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(file_cfg) = load_nearest_config_file()? {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
    Ok(())
}

fn load_nearest_config_file() -> AppResult<Option<Config>> {
    match find_nearest_config_file() {
        Some(path) => read_config_file(&path).map(Some),
        None => Ok(None),
    }
}

fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&contents)
        .map_err(|e| AppError::Custom(format!("Invalid config file {}: {e}", path.display())))
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.projects.is_some() {
        cfg.projects = file.projects.clone();
    }

    if let Some(file_paths) = &file.paths {
        let mut paths = cfg.paths.clone().unwrap_or_default();
        if file_paths.original.is_some() {
            paths.original = file_paths.original.clone();
        }
        if file_paths.amplified.is_some() {
            paths.amplified = file_paths.amplified.clone();
        }
        if file_paths.selection.is_some() {
            paths.selection = file_paths.selection.clone();
        }
        cfg.paths = Some(paths);
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut paths = cfg.paths.clone().unwrap_or_default();
    for (value, slot) in [
        (&overrides.original, &mut paths.original),
        (&overrides.amplified, &mut paths.amplified),
        (&overrides.selection, &mut paths.selection),
    ] {
        if let Some(v) = value
            && !v.trim().is_empty()
        {
            *slot = Some(v.trim().to_string());
        }
    }
    if overrides.original.is_some() || overrides.amplified.is_some() || overrides.selection.is_some()
    {
        cfg.paths = Some(paths);
    }

    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_october_2017_layout() {
        let cfg = Config::default().to_effective();
        let paths = cfg.paths.unwrap();
        assert_eq!(paths.original.as_deref(), Some("original/october-2017"));
        assert_eq!(paths.amplified.as_deref(), Some("results/october-2017"));
        assert_eq!(
            paths.selection.as_deref(),
            Some("dataset/selected_classes.csv")
        );
        assert_eq!(cfg.projects.unwrap().len(), 10);
        assert_eq!(cfg.log.unwrap().level.as_deref(), Some("info"));
    }

    #[test]
    fn file_config_overrides_defaults() {
        let file: Config = toml::from_str(
            r#"
projects = ["jsoup"]

[paths]
original = "data/original"

[log]
level = "debug"
color = false
"#,
        )
        .unwrap();
        let mut cfg = Config::default();
        apply_file_config(&mut cfg, &file);

        assert_eq!(cfg.projects(), vec!["jsoup".to_string()]);
        assert_eq!(cfg.paths().original(), "data/original");
        assert_eq!(cfg.paths().amplified(), "results/october-2017");
        assert_eq!(cfg.log().level(), "debug");
        assert_eq!(cfg.log().color(), Some(false));
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let mut cfg = Config {
            paths: Some(PathsConfig {
                original: Some("from-file".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        apply_cli_overrides(
            &mut cfg,
            &CliOverrides {
                original: Some(" from-cli ".to_string()),
                log_color: Some("ON".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(cfg.paths().original(), "from-cli");
        assert_eq!(cfg.log().color(), Some(true));
    }

    #[test]
    fn blank_cli_values_are_ignored() {
        let mut cfg = Config::default();
        apply_cli_overrides(
            &mut cfg,
            &CliOverrides {
                selection: Some("   ".to_string()),
                log_level: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(cfg.paths().selection(), "dataset/selected_classes.csv");
        assert_eq!(cfg.log().level(), "info");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[paths]\noriginal = 3\n").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(&err, AppError::Custom(msg) if msg.contains(CONFIG_FILENAME)));
    }

    #[test]
    fn valid_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "projects = [\"jsoup\"]\n").unwrap();

        let cfg = read_config_file(&path).unwrap();
        assert_eq!(cfg.projects(), vec!["jsoup".to_string()]);
    }

    #[test]
    fn empty_project_list_falls_back_to_defaults() {
        let cfg = Config {
            projects: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(cfg.projects()[0], "javapoet");
        assert_eq!(
            cfg.resolve_projects(&["logback".to_string()]),
            vec!["logback".to_string()]
        );
    }
}

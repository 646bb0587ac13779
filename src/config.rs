use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_NAME: &str = "vimlet";
const LOCAL_FILE: &str = ".vimletrc";

/// Verbosity of the debug log.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_line_numbers: bool,
    pub no_status: bool,
    pub tick_ms: Option<u64>,
    pub log_level: Option<LogLevel>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans accumulate, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_line_numbers: self.no_line_numbers || other.no_line_numbers,
            no_status: self.no_status || other.no_status,
            tick_ms: other.tick_ms.or(self.tick_ms),
            log_level: other.log_level.or(self.log_level),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_NAME).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_NAME)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_NAME).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_NAME).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec![format!("# {APP_NAME} defaults (saved with --save)")];
    if flags.no_line_numbers {
        lines.push("--no-line-numbers".to_string());
    }
    if flags.no_status {
        lines.push("--no-status".to_string());
    }
    if let Some(tick_ms) = flags.tick_ms {
        lines.push(format!("--tick-ms {tick_ms}"));
    }
    if let Some(level) = flags.log_level {
        lines.push(format!("--log-level {}", level.as_str()));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list; anything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let mut value = || {
            inline_value.map(ToOwned::to_owned).or_else(|| {
                let next = tokens.get(i + 1).cloned();
                if next.is_some() {
                    i += 1;
                }
                next
            })
        };
        match name {
            "--no-line-numbers" => flags.no_line_numbers = true,
            "--no-status" => flags.no_status = true,
            "--tick-ms" => flags.tick_ms = value().and_then(|v| v.parse().ok()),
            "--log-level" => flags.log_level = value().as_deref().and_then(parse_log_level),
            "--debug-log" => flags.debug_log = value().map(PathBuf::from),
            _ => {}
        }
        i += 1;
    }
    flags
}

fn parse_log_level(s: &str) -> Option<LogLevel> {
    match s {
        "error" => Some(LogLevel::Error),
        "warn" => Some(LogLevel::Warn),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "vimlet".to_string(),
            "--no-line-numbers".to_string(),
            "--tick-ms".to_string(),
            "25".to_string(),
            "--log-level=trace".to_string(),
            "--debug-log=editor.log".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_line_numbers);
        assert!(!flags.no_status);
        assert_eq!(flags.tick_ms, Some(25));
        assert_eq!(flags.log_level, Some(LogLevel::Trace));
        assert_eq!(flags.debug_log, Some(PathBuf::from("editor.log")));
    }

    #[test]
    fn test_bad_tick_value_is_ignored() {
        let args = vec!["--tick-ms".to_string(), "fast".to_string()];
        assert_eq!(parse_flag_tokens(&args).tick_ms, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_status: true,
            tick_ms: Some(50),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            no_line_numbers: true,
            tick_ms: Some(8),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_status);
        assert!(merged.no_line_numbers);
        assert_eq!(merged.tick_ms, Some(8));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_FILE);
        let flags = ConfigFlags {
            no_line_numbers: true,
            no_status: true,
            tick_ms: Some(20),
            log_level: Some(LogLevel::Debug),
            debug_log: Some(PathBuf::from("editor.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("nope")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}

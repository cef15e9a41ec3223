// Configuration for pcard
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/pcard/config.toml)
// 3. Built-in defaults (lowest priority)

use crate::profile::Profile;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notification timing
#[derive(Debug, Clone)]
pub struct NotificationsConfig {
    /// How long a toast stays visible, in milliseconds
    pub duration_ms: u64,

    /// Longer duration for the startup no-clipboard warning
    pub capability_notice_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            capability_notice_ms: 5000,
        }
    }
}

/// Mail client detection settings
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Substrings that mark a mail client in the environment id string.
    /// One list for the one heuristic; matched case-insensitively.
    pub client_markers: Vec<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            client_markers: ["thunderbird", "mutt", "neomutt", "aerc", "mail"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pcard")
        .join("logs")
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "monokai", "dracula", "nord", "solarized"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// The card content shown by the UI
    pub profile: Profile,

    /// Notification timing
    pub notifications: NotificationsConfig,

    /// Mail client detection
    pub mail: MailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_theme_background: false,
            profile: Profile::sample(),
            notifications: NotificationsConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Notification settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileNotifications {
    duration_ms: Option<u64>,
    capability_notice_ms: Option<u64>,
}

/// Mail settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileMail {
    client_markers: Option<Vec<String>>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    use_theme_background: Option<bool>,

    /// Optional [profile] section (sample profile when absent)
    profile: Option<Profile>,

    /// Optional [notifications] section
    notifications: Option<FileNotifications>,

    /// Optional [mail] section
    mail: Option<FileMail>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/pcard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("pcard").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let _ = std::fs::write(&path, Config::default().to_toml());
    }

    /// Load configuration: file values under env overrides, defaults beneath
    pub fn from_env() -> Self {
        let file = Self::read_file_config().unwrap_or_default();
        let mut config = Self::from_file_config(file);

        // Environment overrides
        if let Ok(theme) = std::env::var("PCARD_THEME") {
            if !theme.is_empty() {
                config.theme = theme;
            }
        }
        if let Ok(level) = std::env::var("PCARD_LOG") {
            if !level.is_empty() {
                config.logging.level = level;
            }
        }

        config
    }

    fn read_file_config() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(file) => Some(file),
            Err(e) => {
                // Logging isn't up yet when config loads; stderr is fine
                // because the alternate screen isn't active either.
                eprintln!("Warning: ignoring malformed config {}: {e}", path.display());
                None
            }
        }
    }

    fn from_file_config(file: FileConfig) -> Self {
        let defaults = Config::default();

        let notifications = file.notifications.unwrap_or_default();
        let mail = file.mail.unwrap_or_default();
        let logging = file.logging.unwrap_or_default();

        Self {
            theme: file.theme.unwrap_or(defaults.theme),
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            profile: file.profile.unwrap_or(defaults.profile),
            notifications: NotificationsConfig {
                duration_ms: notifications
                    .duration_ms
                    .unwrap_or(defaults.notifications.duration_ms),
                capability_notice_ms: notifications
                    .capability_notice_ms
                    .unwrap_or(defaults.notifications.capability_notice_ms),
            },
            mail: MailConfig {
                client_markers: mail.client_markers.unwrap_or(defaults.mail.client_markers),
            },
            logging: LoggingConfig {
                level: logging.level.unwrap_or(defaults.logging.level),
                file_enabled: logging
                    .file_enabled
                    .unwrap_or(defaults.logging.file_enabled),
                file_dir: logging
                    .file_dir
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logging.file_dir),
            },
        }
    }

    /// Render the config as a commented TOML template.
    /// Single source of truth for `config --reset` and the first-run file.
    pub fn to_toml(&self) -> String {
        let mut out = String::new();

        out.push_str("# pcard configuration\n");
        out.push_str("# Delete a line to fall back to the built-in default.\n\n");

        out.push_str("# Theme: dark, light, monokai, dracula, nord, solarized\n");
        out.push_str(&format!("theme = \"{}\"\n", toml_escape(&self.theme)));
        out.push_str(&format!(
            "use_theme_background = {}\n\n",
            self.use_theme_background
        ));

        out.push_str("[notifications]\n");
        out.push_str("# How long a toast stays visible, in milliseconds\n");
        out.push_str(&format!(
            "duration_ms = {}\n",
            self.notifications.duration_ms
        ));
        out.push_str("# Longer duration for the startup no-clipboard warning\n");
        out.push_str(&format!(
            "capability_notice_ms = {}\n\n",
            self.notifications.capability_notice_ms
        ));

        out.push_str("[mail]\n");
        out.push_str("# Substrings that mark a mail client in the environment\n");
        out.push_str(&format!(
            "client_markers = [{}]\n\n",
            self.mail
                .client_markers
                .iter()
                .map(|m| format!("\"{}\"", toml_escape(m)))
                .collect::<Vec<_>>()
                .join(", ")
        ));

        out.push_str("[logging]\n");
        out.push_str("# Log level: trace, debug, info, warn, error\n");
        out.push_str(&format!(
            "level = \"{}\"\n",
            toml_escape(&self.logging.level)
        ));
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = \"{}\"\n\n",
            toml_escape(&self.logging.file_dir.display().to_string())
        ));

        out.push_str("[profile]\n");
        out.push_str(&format!(
            "name = \"{}\"\n",
            toml_escape(&self.profile.name)
        ));
        out.push_str(&format!(
            "tagline = \"{}\"\n",
            toml_escape(&self.profile.tagline)
        ));
        out.push_str(&format!(
            "email = \"{}\"\n",
            toml_escape(&self.profile.email)
        ));

        for card in &self.profile.interests {
            out.push_str("\n[[profile.interests]]\n");
            out.push_str(&format!("title = \"{}\"\n", toml_escape(&card.title)));
            out.push_str(&format!("summary = \"{}\"\n", toml_escape(&card.summary)));
            out.push_str(&format!(
                "details = [{}]\n",
                card.details
                    .iter()
                    .map(|d| format!("\"{}\"", toml_escape(d)))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        out
    }
}

/// Escape a string for inclusion in a double-quoted TOML value
fn toml_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back. Catches TOML syntax slips
    /// like using `[array.property]` instead of array-of-tables.
    #[test]
    fn default_config_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        let profile = file.profile.expect("profile section present");
        assert_eq!(profile.interests.len(), 3);
        assert_eq!(profile.email, Config::default().profile.email);
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let file: FileConfig = toml::from_str("theme = \"nord\"").unwrap();
        let config = Config::from_file_config(file);

        assert_eq!(config.theme, "nord");
        assert_eq!(config.notifications.duration_ms, 3000);
        assert_eq!(config.notifications.capability_notice_ms, 5000);
        assert!(!config.mail.client_markers.is_empty());
        assert_eq!(config.profile.email, Profile::sample().email);
    }

    #[test]
    fn file_profile_replaces_sample() {
        let file: FileConfig = toml::from_str(
            r#"
            [profile]
            name = "Alice"
            tagline = "hello"
            email = "alice@example.com"

            [[profile.interests]]
            title = "Chess"
            summary = "Endgames"
            "#,
        )
        .unwrap();
        let config = Config::from_file_config(file);

        assert_eq!(config.profile.name, "Alice");
        assert_eq!(config.profile.email, "alice@example.com");
        assert_eq!(config.profile.interests.len(), 1);
        assert!(config.profile.interests[0].details.is_empty());
    }

    #[test]
    fn marker_overrides_apply() {
        let file: FileConfig = toml::from_str("[mail]\nclient_markers = [\"gmail\"]").unwrap();
        let config = Config::from_file_config(file);
        assert_eq!(config.mail.client_markers, vec!["gmail".to_string()]);
    }

    #[test]
    fn escaping_survives_quotes() {
        let mut config = Config::default();
        config.profile.tagline = "likes \"quotes\" and \\slashes".to_string();

        let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("template parses");
        assert_eq!(
            parsed.profile.unwrap().tagline,
            "likes \"quotes\" and \\slashes"
        );
    }
}

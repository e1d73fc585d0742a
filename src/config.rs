use thiserror::Error;

/// ログフィルタの既定値（RUST_LOG未設定時）
pub const DEFAULT_LOG_FILTER: &str = "lending_library=info";

/// 設定のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} (expected true/false)")]
    InvalidBool { key: &'static str, value: String },
}

/// アプリケーション設定
///
/// 環境変数から読み込み、未設定の項目は既定値を使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `LIBRARY_LOG_FILTER` - RUST_LOGが未設定のときのログフィルタ
    pub log_filter: String,
    /// `LIBRARY_SAMPLE_DATA` - 起動時にサンプルの書籍・会員を登録するか
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_filter = lookup("LIBRARY_LOG_FILTER").unwrap_or(defaults.log_filter);
        let seed_sample_data = match lookup("LIBRARY_SAMPLE_DATA") {
            Some(value) => parse_bool("LIBRARY_SAMPLE_DATA", value)?,
            None => defaults.seed_sample_data,
        };

        Ok(Self {
            log_filter,
            seed_sample_data,
        })
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

use crate::core::driver::RunSettings;
use crate::core::fetcher::HttpSettings;
use crate::domain::model::IdRange;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.edbchinese.hk/lexlist_ch/result.jsp";
pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_END: u32 = 4762;
pub const DEFAULT_OUTPUT_DIR: &str = "words_data";
/// 四位數編號的上限
pub const MAX_ID: u32 = 9999;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub source: SourceConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// 關閉 TLS 憑證驗證，只在伺服器使用自簽憑證時開啟
    pub accept_invalid_certs: bool,
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub start: u32,
    pub end: u32,
    pub delay_ms: u64,
    pub progress_every: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            delay_ms: 200,
            progress_every: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub checkpoint_every: Option<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_OUTPUT_DIR.to_string(),
            checkpoint_every: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl FetchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LEXLIST_BASE_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn id_range(&self) -> IdRange {
        IdRange::new(self.run.start, self.run.end)
    }

    pub fn output_dir(&self) -> &str {
        &self.output.dir
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_secs(self.source.timeout_secs),
            accept_invalid_certs: self.source.accept_invalid_certs,
            user_agent: self.source.user_agent.clone(),
        }
    }

    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            range: self.id_range(),
            delay: Duration::from_millis(self.run.delay_ms),
            progress_every: self.run.progress_every,
            checkpoint_every: self.output.checkpoint_every,
        }
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_positive_number("source.timeout_secs", self.source.timeout_secs, 1)?;

        validation::validate_range("run.start", self.run.start, 1, MAX_ID)?;
        validation::validate_range("run.end", self.run.end, self.run.start, MAX_ID)?;
        validation::validate_positive_number("run.progress_every", self.run.progress_every, 1)?;

        validation::validate_path("output.dir", &self.output.dir)?;
        if let Some(every) = self.output.checkpoint_every {
            validation::validate_positive_number("output.checkpoint_every", every, 1)?;
        }

        Ok(())
    }
}

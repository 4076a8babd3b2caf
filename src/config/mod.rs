pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::FetchConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lexlist-fetch")]
#[command(about = "Fetch the EDB Chinese lexical list one word at a time")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page endpoint; the word ID is sent as the `id` query parameter
    #[arg(long)]
    pub base_url: Option<String>,

    /// First ID to fetch (inclusive)
    #[arg(long)]
    pub start: Option<u32>,

    /// Last ID to fetch (inclusive)
    #[arg(long)]
    pub end: Option<u32>,

    #[arg(long)]
    pub output_dir: Option<String>,

    /// Pause between requests, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log an aggregate progress line whenever the ID is a multiple of this
    #[arg(long)]
    pub progress_every: Option<u32>,

    /// Rewrite the output files every N processed IDs
    #[arg(long)]
    pub checkpoint_every: Option<u32>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Skip TLS certificate verification")]
    pub insecure: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Show the resolved configuration and exit")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔 (若有指定) 並套用命令列覆蓋
    pub fn resolve(&self) -> Result<FetchConfig> {
        let mut config = match &self.config {
            Some(path) => FetchConfig::from_file(path)?,
            None => FetchConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut FetchConfig) {
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.source.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.source.user_agent = Some(user_agent.clone());
        }
        if self.insecure {
            config.source.accept_invalid_certs = true;
        }
        if let Some(start) = self.start {
            config.run.start = start;
        }
        if let Some(end) = self.end {
            config.run.end = end;
        }
        if let Some(delay) = self.delay_ms {
            config.run.delay_ms = delay;
        }
        if let Some(every) = self.progress_every {
            config.run.progress_every = every;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(every) = self.checkpoint_every {
            config.output.checkpoint_every = Some(every);
        }
        if self.monitor {
            config.monitoring = Some(toml_config::MonitoringConfig { enabled: true });
        }
    }
}

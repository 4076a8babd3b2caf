use anyhow::Context;
use clap::Parser;
use lexlist_fetch::utils::{logger, validation::Validate};
use lexlist_fetch::{
    CliConfig, FetchConfig, FetchEngine, FetchError, HttpPageSource, LocalStorage, RunDriver,
};

const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
        display_plan(&config)?;
        return Ok(());
    }

    let source = match HttpPageSource::new(config.source.base_url.clone(), &config.http_settings()) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };
    let storage = LocalStorage::new(config.output_dir().to_string());
    let driver = RunDriver::new(storage, source, config.run_settings());
    let engine = FetchEngine::new_with_monitoring(driver, config.monitoring_enabled());

    tokio::select! {
        result = engine.run() => match result {
            Ok(report) => {
                println!("✅ Fetching completed! Success rate: {}", report.summary.success_rate);
                println!("📁 Data saved to: {}", report.output_dir);
            }
            Err(e) => fail(&e),
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            let e = FetchError::Interrupted;
            tracing::info!("Fetching interrupted by user.");
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_INTERRUPTED);
        }
    }

    Ok(())
}

fn fail(e: &FetchError) -> ! {
    tracing::error!(
        "❌ Unexpected error: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(EXIT_FAILURE);
}

fn display_plan(config: &FetchConfig) -> anyhow::Result<()> {
    let range = config.id_range();
    let rendered = toml::to_string_pretty(config).context("failed to render configuration")?;

    println!("📋 Fetch plan");
    println!("   IDs: {:04}..={:04} ({} requests)", range.start, range.end, range.len());
    println!("   Endpoint: {}", config.source.base_url);
    println!("   Output: {}", config.output_dir());
    println!();
    println!("{}", rendered);
    Ok(())
}

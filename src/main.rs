use anyhow::Context;
use clap::Parser;
use std::io::Write;
use word_heat::utils::error::ErrorSeverity;
use word_heat::utils::{logger, validation::Validate};
use word_heat::{CliConfig, EtlEngine, FrequencyPipeline, LocalSource, WordHeatError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting word-heat CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併並驗證配置
    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let pipeline = FrequencyPipeline::new(LocalSource::default(), settings);
    let engine = EtlEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out) {
        Ok(report) => {
            tracing::debug!("✅ Previewed {} lines", report.lines_rendered);
        }
        Err(e) => {
            exit_with(e);
            return Ok(());
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn exit_with(e: WordHeatError) {
    tracing::debug!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code);
    }
}

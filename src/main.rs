use clap::Parser;
use std::process::ExitCode;
use strkit::core::rules::{self, RuleCheck};
use strkit::core::{case, duration, markup, substring};
use strkit::domain::model::RuleKind;
use strkit::domain::ports::Check;
use strkit::utils::error::{ErrorSeverity, Result, StrKitError};
use strkit::utils::{logger, validation::Validate};
use strkit::{BatchChecker, BatchConfig, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::High => ExitCode::from(1),
                ErrorSeverity::Medium => ExitCode::from(2),
                ErrorSeverity::Critical => ExitCode::from(3),
            }
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Check {
            rule,
            value,
            pattern,
        } => {
            let passed = match (rule, pattern) {
                (RuleKind::Pattern, Some(source)) => RuleCheck::pattern(&source)?.check(&value),
                (RuleKind::Pattern, None) => {
                    return Err(StrKitError::MissingConfigError {
                        field: "--pattern".to_string(),
                    })
                }
                (rule, _) => rules::evaluate(rule, &value),
            };
            if passed {
                println!("✅ valid {}", rule);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("❌ invalid {}", rule);
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Substring {
            input,
            start,
            length,
        } => {
            println!("{}", substring::substring(&input, start, length)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Lower { input } => {
            println!("{}", case::to_ascii_lower(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Duration { seconds } => {
            println!("{}", duration::format_signed_duration(seconds)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::StripHtml { input } => {
            println!("{}", markup::strip_html_tags(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Https { url } => {
            println!("{}", markup::http_to_https(&url));
            Ok(ExitCode::SUCCESS)
        }
        Command::UrlEncode { input } => {
            println!("{}", markup::url_encode(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Batch { config, dry_run } => run_batch(&config, dry_run),
    }
}

fn run_batch(config_path: &str, dry_run: bool) -> Result<ExitCode> {
    tracing::info!("📁 Loading configuration from: {}", config_path);
    let config = BatchConfig::from_file(config_path)?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No input will be read");
        return Ok(ExitCode::SUCCESS);
    }

    let summary = BatchChecker::new(config).run()?;
    println!(
        "📊 {} rows, {} checks, {} failures",
        summary.rows, summary.checks, summary.failures
    );
    println!("📁 Report saved to: {}", summary.output_path);

    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn display_config_summary(config: &BatchConfig) {
    println!("📋 Configuration Summary:");
    println!("  Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input.path);
    println!("  Output: {} ({})", config.output.path, config.output_format());
    if config.failures_only() {
        println!("  Failures only: true");
    }
    println!("  Checks:");
    for check in &config.checks {
        match &check.pattern {
            Some(pattern) => println!("    {} -> {} /{}/", check.column, check.rule, pattern),
            None => println!("    {} -> {}", check.column, check.rule),
        }
    }
    println!();
}

use airfoil_points::core::ConfigProvider;
use airfoil_points::utils::error::{AirfoilError, ErrorSeverity};
use airfoil_points::utils::{logger, validation::Validate};
use airfoil_points::{AirfoilPipeline, CliConfig, ExportEngine, LocalStorage};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting airfoil-points");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AirfoilPipeline::new(storage, config.clone(), config.source());
    let engine = ExportEngine::new(pipeline);

    let outcome = if config.print {
        engine.render().map(|document| (document, None))
    } else {
        engine
            .run()
            .map(|report| (report.document, Some(report.output_path)))
    };

    match outcome {
        Ok((document, output_path)) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else if config.print {
                println!("{}", document.coordinates);
            }

            if let Some(path) = output_path {
                tracing::info!("✅ Export completed successfully!");
                if !config.json {
                    println!("📁 Output saved to: {}", path);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn exit_code(error: &AirfoilError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

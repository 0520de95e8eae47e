use airfoil_points::config::toml_config::TomlConfig;
use airfoil_points::utils::{logger, validation::Validate};
use airfoil_points::core::export::BatchExport;
use airfoil_points::{AirfoilPipeline, AirfoilSource, ExportEngine, LocalStorage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "airfoil-batch")]
#[command(about = "Export a list of airfoils described in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "airfoils.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output directory from config
    #[arg(long)]
    output_path: Option<String>,

    /// Dry run - list what would be exported without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting airfoil batch export");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(output_path) = args.output_path {
        tracing::info!("🔧 Output path overridden to: {}", output_path);
        config.export.output_path = output_path;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let jobs = config.jobs()?;
    tracing::info!("✅ {}: {} airfoils to export", config.export_name(), jobs.len());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        for (source, settings) in &jobs {
            println!(
                "{} -> {} ({} layout, {} points per surface)",
                describe(source),
                settings.output_path,
                settings.layout,
                settings.point_count
            );
        }
        return Ok(());
    }

    let mut batch = BatchExport::new();
    let mut failures = 0usize;
    for (source, settings) in jobs {
        let label = describe(&source);
        let storage = LocalStorage::new(settings.output_path.clone());
        let engine = ExportEngine::new(AirfoilPipeline::new(storage, settings, source));

        match batch.export(&engine) {
            Ok(report) => println!("✅ {} -> {}", label, report.output_path),
            Err(e) => {
                failures += 1;
                tracing::error!("❌ {} failed: {}", label, e);
                eprintln!("❌ {}: {}", label, e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            }
        }
    }

    if failures > 0 {
        tracing::error!("{} export(s) failed", failures);
        std::process::exit(1);
    }

    tracing::info!("✅ Batch export completed successfully!");
    Ok(())
}

fn describe(source: &AirfoilSource) -> String {
    match source {
        AirfoilSource::Naca(code) => format!("NACA {}", code),
        AirfoilSource::Csv(path) => path.display().to_string(),
    }
}

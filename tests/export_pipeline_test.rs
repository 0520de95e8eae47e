use airfoil_points::config::toml_config::{JobSettings, TomlConfig};
use airfoil_points::utils::validation::Validate;
use airfoil_points::{
    AirfoilError, AirfoilPipeline, AirfoilSource, BatchExport, ExportEngine, Layout, LocalStorage,
};
use anyhow::Result;
use tempfile::TempDir;

fn settings(output_path: &str, layout: Layout) -> JobSettings {
    JobSettings {
        output_path: output_path.to_string(),
        layout,
        point_count: 50,
        normalize_units: false,
    }
}

fn engine(
    output_path: &str,
    layout: Layout,
    source: AirfoilSource,
) -> ExportEngine<AirfoilPipeline<LocalStorage, JobSettings>> {
    let storage = LocalStorage::new(output_path.to_string());
    ExportEngine::new(AirfoilPipeline::new(storage, settings(output_path, layout), source))
}

#[test]
fn test_naca_export_writes_solidworks_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let report = engine(&output_path, Layout::SolidWorks, AirfoilSource::Naca("2412".to_string())).run()?;

    assert!(report.output_path.ends_with("NACA_2412_Airfoil.txt"));
    assert_eq!(report.document.point_count, 99);
    assert_eq!(report.document.format, Layout::SolidWorks);

    let written = std::fs::read_to_string(temp_dir.path().join("NACA_2412_Airfoil.txt"))?;
    assert_eq!(written.lines().count(), 99);
    assert!(written.lines().all(|line| line.ends_with(" 0.000000")));
    Ok(())
}

#[test]
fn test_csv_export_passes_rows_through() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("b737d-il.csv");
    std::fs::write(
        &csv_path,
        "Name,BOEING 737 OUTBOARD AIRFOIL\n\
         Chord(mm),100\n\
         Airfoil surface,\n\
         X(mm),Y(mm)\n\
         1.0,0.001\n\
         0.3,0.07\n\
         0.3,0.07\n\
         0.0,0.0\n\
         0.4,-0.03\n\
         1.0,-0.001\n\
         Camber line,\n\
         X(mm),Y(mm)\n\
         0.0,0.0\n",
    )?;
    let output_path = temp_dir.path().join("out").to_string_lossy().into_owned();

    let report = engine(&output_path, Layout::Standard, AirfoilSource::Csv(csv_path)).run()?;

    assert_eq!(report.document.name, "BOEING 737 OUTBOARD AIRFOIL");
    assert_eq!(report.document.file_name, "BOEING_737_OUTBOARD_AIRFOIL.txt");
    assert_eq!(report.document.metadata.get("Chord(mm)").map(String::as_str), Some("100"));

    let written = std::fs::read_to_string(temp_dir.path().join("out").join("BOEING_737_OUTBOARD_AIRFOIL.txt"))?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "BOEING 737 OUTBOARD AIRFOIL",
            "  1.000000  0.001000",
            "  0.300000  0.070000",
            "  0.300000  0.070000",
            "  0.000000  0.000000",
            "  0.400000  -0.030000",
            "  1.000000  -0.001000",
        ]
    );
    Ok(())
}

#[test]
fn test_render_does_not_write() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("never").to_string_lossy().into_owned();

    let document = engine(&output_path, Layout::Standard, AirfoilSource::Naca("0012".to_string())).render()?;

    assert_eq!(document.name, "NACA 0012 Airfoil");
    assert!(!temp_dir.path().join("never").exists());
    Ok(())
}

#[test]
fn test_malformed_csv_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("broken.csv");
    std::fs::write(&csv_path, "x,y\n1.0,0.0\nnot,numbers\n")?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let result = engine(&output_path, Layout::Standard, AirfoilSource::Csv(csv_path)).run();

    assert!(matches!(result, Err(AirfoilError::MalformedRow { line: 3, .. })));
    Ok(())
}

#[test]
fn test_batch_config_drives_exports() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("flat-plate.csv");
    std::fs::write(&csv_path, "1.0,0.0\n0.0,0.0\n1.0,0.0\n")?;
    let output_path = temp_dir.path().join("exports");

    let config_content = format!(
        r#"
[export]
name = "batch-test"
output_path = "{}"
layout = "solidworks"
point_count = 20

[[airfoils]]
naca = "0012"

[[airfoils]]
csv = "{}"
layout = "standard"
"#,
        output_path.to_string_lossy().replace('\\', "/"),
        csv_path.to_string_lossy().replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&config_content)?;

    let mut written = Vec::new();
    for (source, settings) in config.jobs()? {
        let storage = LocalStorage::new(settings.output_path.clone());
        let report = ExportEngine::new(AirfoilPipeline::new(storage, settings, source)).run()?;
        written.push(report.document);
    }

    assert_eq!(written.len(), 2);
    assert_eq!(written[0].point_count, 39);
    assert_eq!(written[0].format, Layout::SolidWorks);
    assert_eq!(written[1].format, Layout::Standard);

    let plate = std::fs::read_to_string(output_path.join("flat-plate.txt"))?;
    assert!(plate.starts_with("flat-plate\n"));
    assert!(output_path.join("NACA_0012_Airfoil.txt").exists());
    Ok(())
}

#[test]
fn test_uploaded_name_stays_inside_output_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("out");
    let output_path = output_dir.to_string_lossy().into_owned();
    let absolute_name = temp_dir.path().join("escaped");

    let names = [
        "../../sibling".to_string(),
        "/abs/x".to_string(),
        absolute_name.to_string_lossy().into_owned(),
    ];
    for (index, name) in names.iter().enumerate() {
        let csv_path = temp_dir.path().join(format!("upload-{}.csv", index));
        std::fs::write(&csv_path, format!("Name,{}\n1.0,0.0\n0.0,0.0\n", name))?;

        let report = engine(&output_path, Layout::SolidWorks, AirfoilSource::Csv(csv_path)).run()?;

        assert!(!report.document.file_name.contains('/'));
        assert!(!report.document.file_name.starts_with('.'));
        assert!(output_dir.join(&report.document.file_name).exists());
    }

    assert!(!temp_dir.path().join("sibling.txt").exists());
    assert!(!temp_dir.path().join("escaped.txt").exists());
    assert_eq!(std::fs::read_dir(&output_dir)?.count(), 3);
    Ok(())
}

#[test]
fn test_batch_rejects_same_code_listed_twice() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[export]
output_path = "./output"

[[airfoils]]
naca = "2412"

[[airfoils]]
naca = "2412"
layout = "solidworks"
"#,
    )?;

    assert!(matches!(
        config.validate(),
        Err(AirfoilError::InvalidConfigValue { .. })
    ));
    Ok(())
}

#[test]
fn test_batch_does_not_overwrite_earlier_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first_csv = temp_dir.path().join("first.csv");
    let second_csv = temp_dir.path().join("second.csv");
    std::fs::write(&first_csv, "Name,Wing Root\n1.0,0.0\n0.0,0.0\n")?;
    std::fs::write(&second_csv, "Name,Wing Root\n0.5,0.5\n0.0,0.0\n")?;
    let output_path = temp_dir.path().join("out").to_string_lossy().into_owned();

    let mut batch = BatchExport::new();
    let first = engine(&output_path, Layout::Standard, AirfoilSource::Csv(first_csv));
    let second = engine(&output_path, Layout::SolidWorks, AirfoilSource::Csv(second_csv));

    let report = batch.export(&first)?;
    assert!(matches!(
        batch.export(&second),
        Err(AirfoilError::InvalidConfigValue { .. })
    ));

    let written = std::fs::read_to_string(&report.output_path)?;
    assert!(written.starts_with("Wing Root\n  1.000000  0.000000"));
    Ok(())
}

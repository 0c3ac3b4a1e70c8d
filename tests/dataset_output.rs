//! Dataset Output Tests
//!
//! End to end: simulate, assemble the three tables, write them to a
//! temporary directory and read them back.

use chrono::{TimeZone, Utc};

use twin_telemetry::dataset::{BladeRow, CombinedRow, MotorRow, TableRow};
use twin_telemetry::{assemble, DatasetWriter, OutputFormat, SimConfig, Simulator, TableKind, Tables};

const SAMPLES: usize = 1_200;

fn tables() -> Tables {
    let mut config = SimConfig::default();
    config.run.samples = SAMPLES;
    config.run.start = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assemble(&Simulator::new(config).unwrap().run())
}

#[test]
fn csv_files_have_header_and_one_row_per_sample() {
    let dir = tempfile::tempdir().unwrap();
    let tables = tables();
    let paths = DatasetWriter::new(dir.path(), OutputFormat::Csv).write_all(&tables).unwrap();

    for (path, header) in [
        (&paths.motor, MotorRow::HEADER),
        (&paths.blade, BladeRow::HEADER),
        (&paths.combined, CombinedRow::HEADER),
    ] {
        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), SAMPLES + 1, "{}", path.display());
        assert_eq!(lines[0], header.join(","));
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), header.len(), "bad row in {}: {line}", path.display());
        }
    }

    assert!(paths.motor.ends_with("motor_dataset_realistic.csv"));
    assert!(paths.combined.ends_with("combined_dataset_realistic.csv"));
}

#[test]
fn rows_are_in_ascending_time_order() {
    let tables = tables();
    assert_eq!(tables.len(), SAMPLES);
    assert_eq!(tables.motor[0].timestamp, "2024-01-01T00:00:00.000Z");
    assert_eq!(tables.blade[1].timestamp, "2024-01-01T00:00:01.000Z");
    for pair in tables.combined.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

#[test]
fn combined_rows_agree_with_source_tables() {
    let tables = tables();
    for ((motor, blade), combined) in tables.motor.iter().zip(&tables.blade).zip(&tables.combined) {
        assert_eq!(combined.timestamp, motor.timestamp);
        assert_eq!(combined.health_status, motor.health_status);
        assert_eq!(combined.condition, blade.condition);
        assert_eq!(combined.blade_type, blade.blade_type);
        assert_eq!(combined.motor_vibration, motor.vibration);
        assert_eq!(combined.rul_motor, motor.rul);
        assert_eq!(combined.rul_blade, blade.rul);
    }
    assert_eq!(tables.blade[0].condition, "Sharp");
    assert_eq!(tables.blade[SAMPLES - 1].condition, "Crack Detected");
}

#[test]
fn json_lines_files_parse_back() {
    let dir = tempfile::tempdir().unwrap();
    let tables = tables();
    let writer = DatasetWriter::new(dir.path().join("nested/out"), OutputFormat::Json);
    let paths = writer.write_all(&tables).unwrap();
    assert!(paths.blade.ends_with("blade_dataset_realistic.jsonl"));

    let text = std::fs::read_to_string(&paths.combined).unwrap();
    let rows: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(rows.len(), SAMPLES);
    for column in CombinedRow::HEADER {
        assert!(rows[0].get(*column).is_some(), "missing {column}");
    }
    assert_eq!(rows[0]["Condition"], "Sharp");
}

#[test]
fn single_table_streams_to_any_writer() {
    let tables = tables();
    let writer = DatasetWriter::new("unused", OutputFormat::Csv);
    let mut out = Vec::new();
    writer.write_kind(TableKind::Blade, &tables, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), SAMPLES + 1);
    assert!(text.starts_with("Timestamp,Blade_Type,"));
}

#[test]
fn table_kind_parses_from_cli_text() {
    assert_eq!("Motor".parse::<TableKind>().unwrap(), TableKind::Motor);
    assert_eq!("combined".parse::<TableKind>().unwrap(), TableKind::Combined);
    assert!("turbine".parse::<TableKind>().is_err());
}

use crate::{
    constants::{CSV_ROOM_HEADER, CSV_TOTAL_HEADER, TOTAL_LABEL},
    error::{FloorPlanError, Result},
    report::ApartmentReport,
    room::{Furniture, FurnitureCounts},
};
use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    room: &'a str,
    w: u64,
    p: u64,
    s: u64,
    c: u64,
    total: u64,
}

impl<'a> CsvRow<'a> {
    fn new(room: &'a str, counts: &FurnitureCounts) -> Self {
        Self {
            room,
            w: counts.get(Furniture::W),
            p: counts.get(Furniture::P),
            s: counts.get(Furniture::S),
            c: counts.get(Furniture::C),
            total: counts.total(),
        }
    }
}

/// Writes `report` to a timestamped CSV file and returns its path.
///
/// The apartment total comes first, then one row per room in report order.
pub fn export_report_csv(report: &ApartmentReport, output_dir: Option<&Path>) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("rooms_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| FloorPlanError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| FloorPlanError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.has_headers(false).from_writer(BufWriter::new(file));

    let mut header = vec![CSV_ROOM_HEADER.to_string()];
    header.extend(Furniture::ALL.iter().map(Furniture::to_string));
    header.push(CSV_TOTAL_HEADER.to_string());
    wtr.write_record(&header)?;

    wtr.serialize(CsvRow::new(TOTAL_LABEL, report.totals()))?;
    for room in report.rooms() {
        wtr.serialize(CsvRow::new(room.name(), room.furniture()))?;
    }

    wtr.flush()?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_rooms;
    use tempfile::TempDir;

    const PLAN: &str = "\
+------+------+
|(b) WW|(a) PC|
+------+------+
";

    #[test]
    fn test_export_creates_timestamped_file() {
        let temp_dir = TempDir::new().unwrap();
        let report = ApartmentReport::new(segment_rooms(PLAN));

        let path = export_report_csv(&report, Some(temp_dir.path())).unwrap();
        assert!(path.exists());
        assert!(path.starts_with(temp_dir.path()));

        let filename = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(filename.starts_with("rooms_"));
        assert!(filename.ends_with(".csv"));
    }

    #[test]
    fn test_csv_content_format() {
        let temp_dir = TempDir::new().unwrap();
        let report = ApartmentReport::new(segment_rooms(PLAN));

        let path = export_report_csv(&report, Some(temp_dir.path())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Room,W,P,S,C,Total",
                "total,2,1,0,1,4",
                "a,0,1,0,1,2",
                "b,2,0,0,0,2",
            ]
        );
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("nested");
        let report = ApartmentReport::new(Vec::new());

        let path = export_report_csv(&report, Some(&nested)).unwrap();
        assert!(nested.is_dir());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let report = ApartmentReport::new(Vec::new());
        let result = export_report_csv(&report, Some(&blocker));
        assert!(matches!(result, Err(FloorPlanError::CreateDir { .. })));
    }
}

//! Чтение и запись файла набора данных.

use std::fs;

use datebench::{CalendarDate, DataFileHandler, DatasetError, ErrorExt, StatusCode};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn load_skips_blank_lines_and_strips_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dates.txt");
    fs::write(&path, "\u{feff}2024-03-10\n\n  2024-01-05  \r\n2024-03-10\n\n").unwrap();

    let loaded = DataFileHandler::new(&path).load().unwrap();
    assert!(loaded.interrupted.is_none());
    assert_eq!(
        loaded.dataset.as_slice(),
        &[date("2024-03-10"), date("2024-01-05"), date("2024-03-10")]
    );
}

#[test]
fn malformed_line_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dates.txt");
    fs::write(&path, "2024-03-10\n2024-02-30\n2024-01-01\n").unwrap();

    let err = DataFileHandler::new(&path).load().unwrap_err();
    match &err {
        DatasetError::MalformedLine { line, content, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(content, "2024-02-30");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status_code(), StatusCode::MalformedLine);
}

#[test]
fn non_iso_line_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dates.txt");

    for bad in ["2024-3-7", "+2024-03-07", "2024-03-7"] {
        fs::write(&path, format!("2024-01-01\n{bad}\n")).unwrap();
        let err = DataFileHandler::new(&path).load().unwrap_err();
        assert!(
            matches!(err, DatasetError::MalformedLine { line: 2, .. }),
            "{bad}: {err:?}"
        );
    }
}

#[test]
fn missing_file_yields_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = DataFileHandler::new(dir.path().join("absent.txt"))
        .load()
        .unwrap();

    assert!(loaded.dataset.is_empty());
    let err = loaded.interrupted.unwrap();
    assert!(err.is_io());
    assert_eq!(err.status_code(), StatusCode::NotFound);
}

#[test]
fn write_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.sorted");
    fs::write(&path, "garbage that must disappear\n".repeat(10)).unwrap();

    let handler = DataFileHandler::new(&path);
    handler
        .write_sorted(&[date("2024-01-05"), date("2024-07-01")])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2024-01-05\n2024-07-01\n");
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let handler = DataFileHandler::new(dir.path().join("no").join("such").join("dir.txt"));

    let err = handler.write_sorted(&[date("2024-01-05")]).unwrap_err();
    assert!(matches!(err, DatasetError::Write { .. }));
}

//! Загрузка и сохранение набора дат в построчном текстовом формате.
//!
//! Одна дата `YYYY-MM-DD` на строку. При чтении пустые строки пропускаются,
//! пробелы и BOM удаляются; строка, которая не разбирается как дата, —
//! фатальная ошибка загрузки.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use datebench_error::{BenchResult, DatasetError, ResultExt};
use tracing::{debug, error, info};

use crate::database::{normalize, CalendarDate, DateDataset};

/// Результат загрузки.
///
/// Ошибка ввода-вывода посреди чтения не прерывает работу: возвращается то,
/// что успели разобрать, а сама ошибка сохраняется в `interrupted`.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: DateDataset,
    pub interrupted: Option<DatasetError>,
}

/// Файл набора данных по явно заданному пути.
#[derive(Debug, Clone)]
pub struct DataFileHandler {
    path: PathBuf,
}

impl DataFileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Читает набор дат из файла.
    pub fn load(&self) -> Result<LoadOutcome, DatasetError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) => {
                let err = self.read_error(source);
                error!(path = %self.path.display(), error = %err, "Failed to open dataset file");
                return Ok(LoadOutcome {
                    dataset: DateDataset::default(),
                    interrupted: Some(err),
                });
            }
        };

        let outcome = self.read_from(BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            records = outcome.dataset.len(),
            complete = outcome.interrupted.is_none(),
            "Dataset loaded"
        );
        Ok(outcome)
    }

    /// [`load`](Self::load) с путём файла в контексте ошибки.
    pub fn load_with_context(&self) -> BenchResult<LoadOutcome> {
        self.load()
            .with_context(|| format!("loading dataset '{}'", self.path.display()))
    }

    /// Разбирает строки из произвольного источника.
    pub fn read_from<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<LoadOutcome, DatasetError> {
        let mut dates = Vec::new();
        let mut interrupted = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    let err = self.read_error(source);
                    error!(
                        path = %self.path.display(),
                        line = idx + 1,
                        parsed = dates.len(),
                        error = %err,
                        "Dataset read interrupted, keeping parsed prefix"
                    );
                    interrupted = Some(err);
                    break;
                }
            };

            let content = normalize(&line);
            if content.is_empty() {
                continue;
            }

            let date = content
                .parse::<CalendarDate>()
                .map_err(|e| DatasetError::MalformedLine {
                    line: idx + 1,
                    content: content.to_string(),
                    reason: e.to_string(),
                })?;
            dates.push(date);
        }

        Ok(LoadOutcome {
            dataset: DateDataset::new(dates),
            interrupted,
        })
    }

    /// Перезаписывает файл: одна дата на строку.
    pub fn write_sorted(
        &self,
        dates: &[CalendarDate],
    ) -> Result<(), DatasetError> {
        let result = File::create(&self.path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            Self::write_to(&mut writer, dates)?;
            writer.flush()
        });

        match result {
            Ok(()) => {
                debug!(path = %self.path.display(), records = dates.len(), "Dataset written");
                Ok(())
            }
            Err(source) => {
                let err = DatasetError::Write {
                    path: self.path.display().to_string(),
                    source,
                };
                error!(error = %err, "Failed to write dataset file");
                Err(err)
            }
        }
    }

    pub fn write_to<W: Write>(
        writer: &mut W,
        dates: &[CalendarDate],
    ) -> io::Result<()> {
        for date in dates {
            writeln!(writer, "{date}")?;
        }
        Ok(())
    }

    fn read_error(
        &self,
        source: io::Error,
    ) -> DatasetError {
        DatasetError::Read {
            path: self.path.display().to_string(),
            source,
        }
    }
}

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{error::SetupError, logging::LoggingConfig};

/// Путь к набору данных по умолчанию.
pub const DEFAULT_DATA_PATH: &str = "list/LocalDate.data.sorted";

/// Суффикс файла с отсортированным массивом.
pub const SORTED_SUFFIX: &str = ".sorted";

/// Базовое имя необязательного файла настроек (`datebench.toml`,
/// `datebench.yaml`, ...).
const SETTINGS_FILE: &str = "datebench";

/// Настройки запуска.
///
/// Источники в порядке приоритета: значения по умолчанию → файл настроек →
/// переменные окружения `DATEBENCH_*` (вложенные ключи через `__`,
/// например `DATEBENCH_LOG__LEVEL=debug`). Флаги командной строки
/// применяются поверх в `main`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_path: PathBuf,
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub log: LoggingConfig,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Загружает настройки; `file` заменяет файл по умолчанию и в отличие от
    /// него обязателен.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(SETTINGS_FILE).required(false),
        };

        let cfg = Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("DATEBENCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        cfg.try_deserialize()
    }

    /// Загрузка с проверкой секции логирования.
    pub fn load_checked(file: Option<&Path>) -> Result<Self, SetupError> {
        let settings = Self::load_from(file)?;
        settings.log.validate()?;
        Ok(settings)
    }

    /// Куда сохранять отсортированный массив: явный путь или
    /// `<data_path>.sorted`.
    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            let mut raw = self.data_path.clone().into_os_string();
            raw.push(SORTED_SUFFIX);
            PathBuf::from(raw)
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_path: None,
            log: LoggingConfig::default(),
        }
    }
}

//! Замер времени операций над представлениями.
//!
//! [`OperationTimer`] оборачивает ровно одну операцию (сортировку, поиск,
//! проход) и по завершении пишет событие в лог. Операции дольше порога
//! логируются как медленные на уровне `warn`.

use std::time::{Duration, Instant};

lazy_static::lazy_static! {
    pub static ref TIMING_CONFIG: parking_lot::RwLock<TimingConfig> =
        parking_lot::RwLock::new(TimingConfig::default());
}

/// Настройки замера.
#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Порог, после которого операция считается медленной.
    pub slow_threshold: Duration,
}

/// Замер одной операции.
#[must_use = "timer measures nothing until finish() is called"]
pub struct OperationTimer {
    label: String,
    start: Instant,
}

impl OperationTimer {
    /// Запускает замер по монотонным часам.
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Завершает замер, пишет событие в лог и возвращает длительность.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        let threshold = TIMING_CONFIG.read().slow_threshold;

        if elapsed > threshold {
            tracing::warn!(
                target: "slow_op",
                operation = %self.label,
                elapsed_us = elapsed.as_micros() as u64,
                threshold_ms = threshold.as_millis() as u64,
                "Slow operation"
            );
        } else {
            tracing::debug!(
                operation = %self.label,
                elapsed_us = elapsed.as_micros() as u64,
                "Operation finished"
            );
        }

        elapsed
    }
}

/// Выполняет `f` под таймером.
pub fn measure<T>(
    label: impl Into<String>,
    f: impl FnOnce() -> T,
) -> (T, Duration) {
    let timer = OperationTimer::start(label);
    let value = f();
    (value, timer.finish())
}

/// Заменяет глобальные настройки замера.
pub fn update_config(config: TimingConfig) {
    *TIMING_CONFIG.write() = config;
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            slow_threshold: Duration::from_millis(50),
        }
    }
}

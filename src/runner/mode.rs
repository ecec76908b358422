use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Какие коллекции прогонять.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    List,
    Queue,
    Set,
    #[default]
    All,
}

/// Коллекция, прогон которой образует отдельный раздел отчёта.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    List,
    Queue,
    Set,
}

impl RunMode {
    /// Коллекции в порядке прогона: list → queue → set.
    pub fn collections(self) -> &'static [Collection] {
        match self {
            RunMode::List => &[Collection::List],
            RunMode::Queue => &[Collection::Queue],
            RunMode::Set => &[Collection::Set],
            RunMode::All => &[Collection::List, Collection::Queue, Collection::Set],
        }
    }
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::List => "list",
            Collection::Queue => "queue",
            Collection::Set => "set",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RunMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            RunMode::List => "list",
            RunMode::Queue => "queue",
            RunMode::Set => "set",
            RunMode::All => "all",
        };
        f.write_str(s)
    }
}

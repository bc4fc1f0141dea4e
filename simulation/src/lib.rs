// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.

//! Experiments on voting rules using randomly generated electorates, and the binaries that run them.
//!
//! * [data_collector] runs many random elections under each standard rule and records the fairness statistics.
//! * [evolve] searches for positional scoring rules with good fairness statistics using a genetic algorithm.

use std::fs::File;
use std::path::Path;
use serde::Serialize;

pub mod data_collector;
pub mod evolve;

/// A type written as one line of a CSV file.
pub trait CsvRow : Serialize {
    /// The column names, in the order the fields are serialized.
    const HEADER : &'static [&'static str];
}

/// Write rows to a CSV file with a header line, making the directory if needed.
/// The header is written even if there are no rows.
pub fn write_csv<T:CsvRow>(path:&Path,rows:&[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() { std::fs::create_dir_all(parent)? }
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(T::HEADER)?;
    for row in rows { writer.serialize(row)?; }
    writer.flush()?;
    Ok(())
}

/// Save some data as JSON, making the directory if needed.
pub fn save_json<T:?Sized + Serialize>(path:&Path,data:&T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() { std::fs::create_dir_all(parent)? }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file,data)?;
    Ok(())
}

/// Set up logging for a binary. Defaults to info level, override with RUST_LOG.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

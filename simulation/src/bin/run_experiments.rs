// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use std::path::PathBuf;
use simulation::data_collector::{run_experiments, ExperimentConfig};

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="run_experiments")]
/// Measure the fairness of the standard voting rules over many random elections,
/// writing one line per rule per election to a CSV file.
struct Opts {
    #[clap(flatten)]
    config : ExperimentConfig,

    /// Where to write the results. The configuration used is written next to it with a .json extension.
    #[clap(long,default_value="data/results.csv")]
    output : PathBuf,
}

fn main() -> anyhow::Result<()> {
    simulation::init_logging();
    let opt : Opts = Opts::parse();
    let results = run_experiments(&opt.config)?;
    simulation::write_csv(&opt.output,&results.rows)?;
    simulation::save_json(&opt.output.with_extension("json"),&opt.config)?;
    println!("Data saved to {}",opt.output.display());
    results.print_summary_table();
    Ok(())
}

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use simulation::evolve::{evolve, EvolutionConfig};

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="evolve_rules")]
/// Search for a positional scoring rule that does well on satisfaction, Condorcet compliance and monotonicity.
struct Opts {
    #[clap(flatten)]
    config : EvolutionConfig,

    /// Directory to write evolve_log.csv and best_rule.json into.
    #[clap(long,default_value="data")]
    output_dir : PathBuf,
}

fn main() -> anyhow::Result<()> {
    simulation::init_logging();
    let opt : Opts = Opts::parse();
    let mut rng = ChaCha20Rng::seed_from_u64(opt.config.seed);
    let result = evolve(&opt.config,&mut rng)?;
    simulation::write_csv(&opt.output_dir.join("evolve_log.csv"),&result.log)?;
    simulation::save_json(&opt.output_dir.join("evolve_config.json"),&opt.config)?;
    let best_path = opt.output_dir.join("best_rule.json");
    simulation::save_json(&best_path,&result.best)?;
    let f = &result.best.final_fitness;
    println!("Best rule {}",result.best.weights);
    println!("Fitness: {:.4}, sat: {:.4}, cond_rate: {:.4}, mono: {:.4} over {} elections",f.fitness,f.avg_sat,f.cond_rate,f.avg_mono,result.best.final_trials);
    println!("Best rule saved to {}",best_path.display());
    Ok(())
}

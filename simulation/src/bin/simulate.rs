// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use statistics::condorcet::find_condorcet_winner;
use statistics::satisfaction::satisfaction_with_winner;
use voting::ballot_metadata::{candidate_name, CandidateIndex};
use voting::random_util::impartial_culture;
use voting::rules::instant_runoff::instant_runoff_transcript;
use voting::rules::{Rules, VotingRule};

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="simulate")]
/// Hold one random election and show who each voting rule elects.
struct Opts {
    #[clap(long,default_value_t=100)]
    num_voters : usize,

    #[clap(long,default_value_t=4)]
    num_candidates : usize,

    /// Seed for the random ballots. If not given, one is chosen and printed.
    #[clap(long)]
    seed : Option<u64>,

    /// Only show these rules. Defaults to all of them.
    #[clap(long)]
    rules : Vec<Rules>,

    /// Show the tallies of each round of instant runoff counting.
    #[clap(long)]
    verbose : bool,
}

fn name(candidate:Option<CandidateIndex>) -> String { candidate.map(candidate_name).unwrap_or_else(||"none".to_string()) }

fn main() -> anyhow::Result<()> {
    simulation::init_logging();
    let opt : Opts = Opts::parse();
    let seed = opt.seed.unwrap_or_else(||rand::rng().random());
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let ballots = impartial_culture(opt.num_voters,opt.num_candidates,&mut rng);
    println!("Election with {} voters and {} candidates, seed {}",ballots.num_voters(),ballots.num_candidates(),seed);
    println!();
    println!("Election Results:");
    println!("-----------------");
    let rules = if opt.rules.is_empty() { Rules::all() } else { opt.rules };
    for rule in rules {
        let winner = rule.winner(&ballots)?;
        let satisfaction = winner.map(|w|satisfaction_with_winner(w,&ballots)).unwrap_or(0.0);
        println!("{:<12} winner: {:<5} satisfaction {:.4}",rule.name(),name(winner),satisfaction);
    }
    println!("Condorcet winner: {}",name(find_condorcet_winner(&ballots)));
    if opt.verbose {
        let transcript = instant_runoff_transcript(&ballots);
        for (round_no,round) in transcript.rounds.iter().enumerate() {
            let tallies = round.tallies.iter().enumerate().map(|(c,t)|format!("{}:{}",candidate_name(CandidateIndex(c)),t)).collect::<Vec<_>>().join(" ");
            println!("IRV round {} {} excluded {}",round_no+1,tallies,name(round.excluded));
        }
    }
    Ok(())
}

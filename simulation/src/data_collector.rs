// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Run many random elections under each of the standard rules, recording the fairness statistics for each.

use std::thread;
use anyhow::anyhow;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Serialize,Deserialize};
use statistics::summary::{ElectionFairness, FairnessSummary};
use voting::random_util::impartial_culture;
use voting::rules::{RuleError, Rules};

/// The parameters of a batch of experiments.
#[derive(Args,Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct ExperimentConfig {
    /// The number of random elections to hold.
    #[clap(long,default_value_t=500)]
    pub num_trials : usize,
    /// The number of voters in each election.
    #[clap(long,default_value_t=200)]
    pub num_voters : usize,
    /// The number of candidates in each election.
    #[clap(long,default_value_t=4)]
    pub num_candidates : usize,
    /// The number of random promotions tried per election and rule when checking monotonicity.
    #[clap(long,default_value_t=10)]
    pub monotonicity_trials : usize,
    /// Trial t uses a random number generator seeded with seed+t.
    #[clap(long,default_value_t=42)]
    pub seed : u64,
    /// The number of worker threads. Does not affect the results.
    #[clap(long,default_value_t=1)]
    pub num_threads : usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig{ num_trials: 500, num_voters: 200, num_candidates: 4, monotonicity_trials: 10, seed: 42, num_threads: 1 }
    }
}

impl ExperimentConfig {
    pub fn rng_for_trial(&self,trial:usize) -> ChaCha20Rng { ChaCha20Rng::seed_from_u64(self.seed.wrapping_add(trial as u64)) }
}

/// One line of the results file: one rule on one election.
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct ExperimentRow {
    /// 1 for the first election.
    pub trial : usize,
    pub system : Rules,
    pub satisfaction : f64,
    /// None if the election had no Condorcet winner.
    pub condorcet_compliance : Option<bool>,
    pub monotonicity_violation_rate : f64,
}

impl crate::CsvRow for ExperimentRow {
    const HEADER: &'static [&'static str] = &["trial","system","satisfaction","condorcet_compliance","monotonicity_violation_rate"];
}

impl ExperimentRow {
    pub fn new(trial:usize,system:Rules,fairness:&ElectionFairness) -> Self {
        ExperimentRow{
            trial,
            system,
            satisfaction: fairness.satisfaction,
            condorcet_compliance: fairness.condorcet.as_option(),
            monotonicity_violation_rate: fairness.monotonicity.violation_rate(),
        }
    }
}

/// The accumulated statistics for one rule over all the elections.
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct RuleSummary {
    pub system : Rules,
    pub summary : FairnessSummary,
}

#[derive(Clone,Debug,Default)]
pub struct ExperimentResults {
    /// Ordered by trial, then by rule in the order of [Rules::all].
    pub rows : Vec<ExperimentRow>,
    /// one per rule, in the order of [Rules::all].
    pub summaries : Vec<RuleSummary>,
}

impl ExperimentResults {
    fn empty() -> Self {
        ExperimentResults{ rows: vec![], summaries: Rules::all().into_iter().map(|system|RuleSummary{system,summary:FairnessSummary::default()}).collect() }
    }

    /// add in other, which should be for later trials than self.
    fn merge(&mut self,other:ExperimentResults) {
        self.rows.extend(other.rows);
        for (mine,theirs) in self.summaries.iter_mut().zip(other.summaries.iter()) {
            mine.summary.merge(&theirs.summary);
        }
    }

    pub fn print_summary_table(&self) {
        println!("{:<12} {:>8} {:>12} {:>12} {:>12}","System","Trials","Satisfaction","Condorcet","Monotonicity");
        for s in &self.summaries {
            println!("{:<12} {:>8} {:>12.4} {:>12.4} {:>12.4}",s.system.to_string(),s.summary.num_elections,s.summary.mean_satisfaction(),s.summary.condorcet_rate(),s.summary.mean_violation_rate());
        }
    }
}

/// Run the rules on one random election. trial is 0 based.
pub fn run_trial(config:&ExperimentConfig,trial:usize) -> Result<Vec<(Rules,ElectionFairness)>,RuleError> {
    let mut rng = config.rng_for_trial(trial);
    let ballots = impartial_culture(config.num_voters,config.num_candidates,&mut rng);
    let mut res = vec![];
    for rule in Rules::all() {
        let fairness = ElectionFairness::measure(&rule,&ballots,config.monotonicity_trials,&mut rng)?;
        res.push((rule,fairness));
    }
    Ok(res)
}

/// Run trials start..end (0 based) single threaded.
fn run_trials(config:&ExperimentConfig,start:usize,end:usize) -> Result<ExperimentResults,RuleError> {
    let mut res = ExperimentResults::empty();
    for trial in start..end {
        for (rule_no,(rule,fairness)) in run_trial(config,trial)?.into_iter().enumerate() {
            res.summaries[rule_no].summary.add(&fairness);
            res.rows.push(ExperimentRow::new(trial+1,rule,&fairness));
        }
        if (trial+1-start)%100==0 { log::debug!("Completed {} of trials {}..{}",trial+1-start,start,end); }
    }
    Ok(res)
}

/// Run all the trials, split amongst config.num_threads threads. The results are the same whatever the number of threads.
pub fn run_experiments(config:&ExperimentConfig) -> anyhow::Result<ExperimentResults> {
    let num_threads = config.num_threads.max(1).min(config.num_trials.max(1));
    log::info!("Running {} trials of {} voters and {} candidates on {} thread(s)",config.num_trials,config.num_voters,config.num_candidates,num_threads);
    let mut handles = vec![];
    let mut start = 0;
    for thread_no in 0..num_threads {
        let num_to_do = config.num_trials / num_threads + (if config.num_trials % num_threads > thread_no { 1 } else { 0 });
        let end = start+num_to_do;
        let config = config.clone();
        handles.push(thread::spawn(move || run_trials(&config,start,end)));
        start = end;
    }
    let mut res = ExperimentResults::empty();
    for handle in handles {
        let partial = handle.join().map_err(|_|anyhow!("Experiment worker thread panicked"))??;
        res.merge(partial);
    }
    log::info!("Completed {} trials",config.num_trials);
    Ok(res)
}

/// Recompute the per rule summaries from a set of rows, such as those read back from a results file.
pub fn summarize(rows:&[ExperimentRow]) -> Vec<RuleSummary> {
    Rules::all().into_iter().map(|system|{
        let mut summary = FairnessSummary::default();
        for row in rows.iter().filter(|r|r.system==system) {
            summary.num_elections+=1;
            summary.sum_satisfaction+=row.satisfaction;
            if let Some(compliant) = row.condorcet_compliance {
                summary.condorcet_applicable+=1;
                if compliant { summary.condorcet_compliant+=1; }
            }
            summary.sum_violation_rate+=row.monotonicity_violation_rate;
        }
        RuleSummary{system,summary}
    }).collect()
}

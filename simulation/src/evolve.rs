// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Search for positional scoring rules with good fairness statistics using a genetic algorithm.
//!
//! A rule is a weight vector, weights[r] being the points for being ranked in position r.
//! Vectors are kept non-increasing and non-negative throughout. Each generation every
//! rule is scored on fresh random elections; the best fraction survive unchanged and
//! the rest of the next generation are bred from them by one point crossover and mutation.

use anyhow::ensure;
use clap::Args;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Serialize,Deserialize};
use statistics::summary::{ElectionFairness, FairnessSummary};
use voting::positional::PositionalScoring;
use voting::random_util::impartial_culture;
use voting::rules::RuleError;

/// The parameters of the genetic algorithm.
#[derive(Args,Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct EvolutionConfig {
    #[clap(long,default_value_t=40)]
    pub generations : usize,
    #[clap(long,default_value_t=20)]
    pub population_size : usize,
    /// The number of candidates in each election, and so the length of the weight vectors.
    #[clap(long,default_value_t=4)]
    pub num_candidates : usize,
    /// The number of random elections each rule is scored on, each generation.
    #[clap(long,default_value_t=30)]
    pub num_trials : usize,
    #[clap(long,default_value_t=100)]
    pub num_voters : usize,
    /// The probability that each weight is changed when mutating.
    #[clap(long,default_value_t=0.3)]
    pub mutation_rate : f64,
    /// The fraction of each generation that survives into the next.
    #[clap(long,default_value_t=0.3)]
    pub elitism_fraction : f64,
    /// The largest weight in the initial population.
    #[clap(long,default_value_t=10)]
    pub max_weight : usize,
    /// The largest change to a weight in one mutation.
    #[clap(long,default_value_t=2)]
    pub max_step : usize,
    #[clap(long,default_value_t=10)]
    pub monotonicity_trials : usize,
    /// The number of elections the best rule is re-scored on at the end.
    #[clap(long,default_value_t=100)]
    pub final_trials : usize,
    #[clap(long,default_value_t=42)]
    pub seed : u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig{
            generations: 40,
            population_size: 20,
            num_candidates: 4,
            num_trials: 30,
            num_voters: 100,
            mutation_rate: 0.3,
            elitism_fraction: 0.3,
            max_weight: 10,
            max_step: 2,
            monotonicity_trials: 10,
            final_trials: 100,
            seed: 42,
        }
    }
}

impl EvolutionConfig {
    /// The number of rules that survive each generation. At least 1.
    pub fn num_parents(&self) -> usize {
        ((self.elitism_fraction*self.population_size as f64) as usize).max(1).min(self.population_size)
    }
}

/// How good a rule is.
#[derive(Clone,Copy,Debug,PartialEq,Serialize,Deserialize)]
pub struct Fitness {
    /// The combined objective being maximized.
    pub fitness : f64,
    pub avg_sat : f64,
    pub cond_rate : f64,
    pub avg_mono : f64,
}

impl From<&FairnessSummary> for Fitness {
    fn from(summary: &FairnessSummary) -> Self {
        let avg_sat = summary.mean_satisfaction();
        let cond_rate = summary.condorcet_rate();
        let avg_mono = summary.mean_violation_rate();
        Fitness{ fitness: 0.6*avg_sat+0.3*cond_rate-0.1*avg_mono, avg_sat, cond_rate, avg_mono }
    }
}

/// Score a weight vector on num_trials fresh random elections.
pub fn evaluate_weights<R:Rng+?Sized>(weights:&PositionalScoring,num_trials:usize,num_voters:usize,num_candidates:usize,monotonicity_trials:usize,rng:&mut R) -> Result<Fitness,RuleError> {
    let mut summary = FairnessSummary::default();
    for _ in 0..num_trials {
        let ballots = impartial_culture(num_voters,num_candidates,rng);
        summary.add(&ElectionFairness::measure(weights,&ballots,monotonicity_trials,rng)?);
    }
    Ok(Fitness::from(&summary))
}

fn sort_descending(weights:&mut PositionalScoring) { weights.weights.sort_unstable_by(|a,b|b.cmp(a)); }

/// A random non-increasing weight vector with entries 0..=max_weight.
pub fn random_weights<R:Rng+?Sized>(num_candidates:usize,max_weight:usize,rng:&mut R) -> PositionalScoring {
    let mut res = PositionalScoring::new((0..num_candidates).map(|_|rng.random_range(0..=max_weight)).collect());
    sort_descending(&mut res);
    res
}

/// Change each weight with probability mutation_rate by one of -max_step,-1,0,1,max_step, never going below 0.
pub fn mutate<R:Rng+?Sized>(weights:&PositionalScoring,mutation_rate:f64,max_step:usize,rng:&mut R) -> PositionalScoring {
    let max_step = max_step as isize;
    let steps = [-max_step,-1,0,1,max_step];
    let mut child = weights.clone();
    for w in child.weights.iter_mut() {
        if rng.random::<f64>()<mutation_rate {
            let step = steps[rng.random_range(0..steps.len())];
            *w = (*w as isize+step).max(0) as usize;
        }
    }
    sort_descending(&mut child);
    child
}

/// One point crossover: the start of a and the end of b, cut at a random point that leaves at least one weight from a.
pub fn crossover<R:Rng+?Sized>(a:&PositionalScoring,b:&PositionalScoring,rng:&mut R) -> PositionalScoring {
    let n = a.weights.len();
    if n<=1 { return a.clone(); }
    let cut = rng.random_range(1..n);
    let mut child = PositionalScoring::new(a.weights[..cut].iter().chain(b.weights.iter().skip(cut)).copied().collect());
    sort_descending(&mut child);
    child
}

/// One line of the generation log.
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct GenerationLogEntry {
    /// 1 for the first generation.
    pub generation : usize,
    /// 1 for the fittest rule in the generation.
    pub rank : usize,
    pub weights : String,
    pub fitness : f64,
    pub avg_sat : f64,
    pub cond_rate : f64,
    pub avg_mono : f64,
}

impl crate::CsvRow for GenerationLogEntry {
    const HEADER: &'static [&'static str] = &["generation","rank","weights","fitness","avg_sat","cond_rate","avg_mono"];
}

impl GenerationLogEntry {
    fn new(generation:usize,rank:usize,weights:&PositionalScoring,fitness:&Fitness) -> Self {
        GenerationLogEntry{ generation, rank, weights: weights.to_string(), fitness: fitness.fitness, avg_sat: fitness.avg_sat, cond_rate: fitness.cond_rate, avg_mono: fitness.avg_mono }
    }
}

/// The best rule found, with its fitness measured on a fresh, larger set of elections.
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct BestRule {
    pub weights : PositionalScoring,
    /// The highest fitness it achieved during the search.
    pub search_fitness : f64,
    pub final_fitness : Fitness,
    pub final_trials : usize,
}

#[derive(Clone,Debug)]
pub struct EvolutionResult {
    pub log : Vec<GenerationLogEntry>,
    pub best : BestRule,
}

/// Run the genetic algorithm. All randomness comes from rng.
pub fn evolve<R:Rng+?Sized>(config:&EvolutionConfig,rng:&mut R) -> anyhow::Result<EvolutionResult> {
    ensure!(config.population_size>0,"Population size must be positive");
    ensure!(config.generations>0,"Need at least one generation");
    let evaluate = |weights:&PositionalScoring,num_trials:usize,rng:&mut R| evaluate_weights(weights,num_trials,config.num_voters,config.num_candidates,config.monotonicity_trials,rng);
    let mut population : Vec<PositionalScoring> = (0..config.population_size).map(|_|random_weights(config.num_candidates,config.max_weight,rng)).collect();
    let mut log = vec![];
    let mut best_overall : Option<(PositionalScoring,f64)> = None;
    for generation in 1..=config.generations {
        let mut scored = vec![];
        for weights in population {
            let fitness = evaluate(&weights,config.num_trials,rng)?;
            log::debug!("Generation {} rule {} has fitness {:.3}",generation,weights,fitness.fitness);
            scored.push((weights,fitness));
        }
        scored.sort_by(|(_,a),(_,b)|b.fitness.total_cmp(&a.fitness));
        for (rank,(weights,fitness)) in scored.iter().enumerate() {
            log.push(GenerationLogEntry::new(generation,rank+1,weights,fitness));
        }
        let (best_weights,best_fitness) = &scored[0];
        let average = scored.iter().map(|(_,f)|f.fitness).sum::<f64>()/scored.len() as f64;
        log::info!("Generation {}/{} best {} fitness {:.4} (sat {:.3}, cond {:.3}, mono {:.3}) average {:.4}",generation,config.generations,best_weights,best_fitness.fitness,best_fitness.avg_sat,best_fitness.cond_rate,best_fitness.avg_mono,average);
        if best_overall.as_ref().is_none_or(|(_,f)|best_fitness.fitness>*f) {
            best_overall=Some((best_weights.clone(),best_fitness.fitness));
        }
        let parents : Vec<PositionalScoring> = scored.into_iter().take(config.num_parents()).map(|(w,_)|w).collect();
        population = parents.clone();
        while population.len()<config.population_size {
            let child = match (parents.choose(rng),parents.choose(rng)) {
                (Some(a),Some(b)) => crossover(a,b,rng),
                _ => break,
            };
            population.push(mutate(&child,config.mutation_rate,config.max_step,rng));
        }
    }
    let (weights,search_fitness) = best_overall.ok_or_else(||anyhow::anyhow!("No rules evaluated"))?;
    let final_fitness = evaluate(&weights,config.final_trials,rng)?;
    log::info!("Best rule {} re-scored on {} elections has fitness {:.4}",weights,config.final_trials,final_fitness.fitness);
    Ok(EvolutionResult{ log, best: BestRule{ weights, search_fitness, final_fitness, final_trials: config.final_trials } })
}

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use simulation::CsvRow;
use simulation::data_collector::{run_experiments, run_trial, summarize, ExperimentConfig, ExperimentRow};
use simulation::evolve::{crossover, evaluate_weights, evolve, mutate, random_weights, EvolutionConfig, GenerationLogEntry};
use voting::positional::PositionalScoring;
use voting::rules::Rules;

fn small_experiment(num_threads:usize) -> ExperimentConfig {
    ExperimentConfig{ num_trials: 13, num_voters: 25, num_candidates: 4, monotonicity_trials: 3, seed: 7, num_threads }
}

fn is_non_increasing(weights:&PositionalScoring) -> bool { weights.weights.windows(2).all(|w|w[0]>=w[1]) }

#[test]
fn test_experiment_rows() {
    let results = run_experiments(&small_experiment(1)).unwrap();
    assert_eq!(13*4,results.rows.len());
    for (i,row) in results.rows.iter().enumerate() {
        assert_eq!(i/4+1,row.trial);
        assert_eq!(Rules::all()[i%4],row.system);
        assert!(row.satisfaction>=0.0 && row.satisfaction<=1.0);
        assert!(row.monotonicity_violation_rate>=0.0 && row.monotonicity_violation_rate<=1.0);
    }
    // Ranked pairs always elects a Condorcet winner; plurality and Borda are monotonic.
    for row in &results.rows {
        match row.system {
            Rules::RankedPairs => assert_ne!(Some(false),row.condorcet_compliance),
            Rules::Plurality | Rules::Borda => assert_eq!(0.0,row.monotonicity_violation_rate),
            Rules::IRV => {}
        }
    }
    assert_eq!(results.summaries,summarize(&results.rows));
    assert!(results.summaries.iter().all(|s|s.summary.num_elections==13));
}

#[test]
fn test_thread_count_does_not_change_results() {
    let single = run_experiments(&small_experiment(1)).unwrap();
    let multi = run_experiments(&small_experiment(4)).unwrap();
    assert_eq!(single.rows,multi.rows);
    let trial_5 = run_trial(&small_experiment(1),5).unwrap();
    for (i,(rule,fairness)) in trial_5.iter().enumerate() {
        assert_eq!(&single.rows[5*4+i],&ExperimentRow::new(6,*rule,fairness));
    }
}

#[test]
fn test_no_trials() {
    let config = ExperimentConfig{ num_trials: 0, num_threads: 3, ..ExperimentConfig::default() };
    let results = run_experiments(&config).unwrap();
    assert!(results.rows.is_empty());
    assert_eq!(0.0,results.summaries[0].summary.mean_satisfaction());
}

#[test]
fn test_write_csv() {
    let rows = vec![
        ExperimentRow{ trial: 1, system: Rules::RankedPairs, satisfaction: 0.5, condorcet_compliance: Some(true), monotonicity_violation_rate: 0.0 },
        ExperimentRow{ trial: 1, system: Rules::IRV, satisfaction: 0.25, condorcet_compliance: None, monotonicity_violation_rate: 0.1 },
    ];
    let path = std::env::temp_dir().join(format!("rule_fairness_test_{}",std::process::id())).join("results.csv");
    simulation::write_csv(&path,&rows).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines : Vec<&str> = text.lines().collect();
    assert_eq!(vec!["trial,system,satisfaction,condorcet_compliance,monotonicity_violation_rate","1,RankedPairs,0.5,true,0.0","1,IRV,0.25,,0.1"],lines);
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let read : Vec<ExperimentRow> = reader.deserialize().collect::<Result<_,_>>().unwrap();
    assert_eq!(rows,read);
    // no rows still gets a header.
    let empty_path = path.with_file_name("empty.csv");
    simulation::write_csv::<ExperimentRow>(&empty_path,&[]).unwrap();
    assert_eq!("trial,system,satisfaction,condorcet_compliance,monotonicity_violation_rate\n",std::fs::read_to_string(&empty_path).unwrap());
    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

/// The header csv would derive from the field names, for comparison with the declared one.
fn derived_header<T:Serialize>(row:&T) -> String {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.serialize(row).unwrap();
    let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    text.lines().next().unwrap().to_string()
}

#[test]
fn test_csv_headers_match_fields() {
    let row = ExperimentRow{ trial: 3, system: Rules::Borda, satisfaction: 0.75, condorcet_compliance: Some(false), monotonicity_violation_rate: 0.0 };
    assert_eq!(ExperimentRow::HEADER.join(","),derived_header(&row));
    let entry = GenerationLogEntry{ generation: 1, rank: 2, weights: "[3,2,1,0]".to_string(), fitness: 0.5, avg_sat: 0.6, cond_rate: 0.7, avg_mono: 0.0 };
    assert_eq!(GenerationLogEntry::HEADER.join(","),derived_header(&entry));
}

#[derive(Parser)]
struct ExperimentArgs {
    #[clap(flatten)]
    config : ExperimentConfig,
}

#[derive(Parser)]
struct EvolutionArgs {
    #[clap(flatten)]
    config : EvolutionConfig,
}

#[test]
fn test_command_line_defaults_match_default() {
    assert_eq!(ExperimentConfig::default(),ExperimentArgs::try_parse_from(["run_experiments"]).unwrap().config);
    assert_eq!(EvolutionConfig::default(),EvolutionArgs::try_parse_from(["evolve_rules"]).unwrap().config);
    let changed = ExperimentArgs::try_parse_from(["run_experiments","--num-trials","7","--seed","3"]).unwrap().config;
    assert_eq!(ExperimentConfig{ num_trials: 7, seed: 3, ..ExperimentConfig::default() },changed);
}

#[test]
fn test_genetic_operators_keep_weights_sorted() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..200 {
        let a = random_weights(5,10,&mut rng);
        let b = random_weights(5,10,&mut rng);
        assert!(is_non_increasing(&a));
        assert!(a.weights.iter().all(|&w|w<=10));
        let child = crossover(&a,&b,&mut rng);
        assert_eq!(5,child.weights.len());
        assert!(is_non_increasing(&child));
        let mutated = mutate(&child,0.5,2,&mut rng);
        assert_eq!(5,mutated.weights.len());
        assert!(is_non_increasing(&mutated));
    }
    let single = PositionalScoring::new(vec![3]);
    assert_eq!(single,crossover(&single,&PositionalScoring::new(vec![9]),&mut rng));
    let zeros = PositionalScoring::new(vec![0,0,0]);
    assert_eq!(zeros,mutate(&zeros,0.0,2,&mut rng));
}

#[test]
fn test_fitness_combines_statistics() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let borda = evaluate_weights(&PositionalScoring::borda(4),20,50,4,3,&mut rng).unwrap();
    assert!((borda.fitness-(0.6*borda.avg_sat+0.3*borda.cond_rate-0.1*borda.avg_mono)).abs()<1e-12);
    assert_eq!(0.0,borda.avg_mono);
    assert!(borda.avg_sat>0.5);
}

#[test]
fn test_evolve() {
    let config = EvolutionConfig{ generations: 3, population_size: 6, num_trials: 4, num_voters: 20, final_trials: 5, monotonicity_trials: 2, ..EvolutionConfig::default() };
    let result = evolve(&config,&mut ChaCha20Rng::seed_from_u64(config.seed)).unwrap();
    assert_eq!(3*6,result.log.len());
    for (i,entry) in result.log.iter().enumerate() {
        assert_eq!(i/6+1,entry.generation);
        assert_eq!(i%6+1,entry.rank);
    }
    for generation in result.log.chunks(6) {
        assert!(generation.windows(2).all(|w|w[0].fitness>=w[1].fitness));
    }
    assert!(is_non_increasing(&result.best.weights));
    assert_eq!(4,result.best.weights.weights.len());
    let best_logged = result.log.iter().map(|e|e.fitness).fold(f64::NEG_INFINITY,f64::max);
    assert_eq!(best_logged,result.best.search_fitness);
    let again = evolve(&config,&mut ChaCha20Rng::seed_from_u64(config.seed)).unwrap();
    assert_eq!(result.log,again.log);
    assert_eq!(result.best,again.best);
}

#[test]
fn test_evolve_rejects_empty_population() {
    let config = EvolutionConfig{ population_size: 0, ..EvolutionConfig::default() };
    assert!(evolve(&config,&mut ChaCha20Rng::seed_from_u64(1)).is_err());
}

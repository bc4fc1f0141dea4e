// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! All the fairness statistics for one rule on one election, and their accumulation over many elections.

use rand::Rng;
use serde::{Serialize,Deserialize};
use voting::ballot_metadata::CandidateIndex;
use voting::ballot_paper::BallotSet;
use voting::rules::{RuleError, VotingRule};
use crate::condorcet::{find_condorcet_winner, CondorcetCompliance};
use crate::monotonicity::{monotonicity_test_for_winner, MonotonicityTest};
use crate::satisfaction::satisfaction_with_winner;

/// The fairness statistics of one rule on one election.
#[derive(Clone,Copy,Debug,PartialEq,Serialize,Deserialize)]
pub struct ElectionFairness {
    pub winner : Option<CandidateIndex>,
    pub satisfaction : f64,
    pub condorcet : CondorcetCompliance,
    pub monotonicity : MonotonicityTest,
}

impl ElectionFairness {
    /// Compute all the statistics, running the rule once for the winner and then once per monotonicity trial.
    /// Gives the same values as calling satisfaction_score, condorcet_compliance and monotonicity_test separately.
    pub fn measure<R:VotingRule+?Sized,G:Rng+?Sized>(rule:&R,ballots:&BallotSet,monotonicity_trials:usize,rng:&mut G) -> Result<Self,RuleError> {
        let winner = if ballots.is_empty() { None } else { rule.winner(ballots)? };
        let condorcet = CondorcetCompliance::of(winner,find_condorcet_winner(ballots));
        let (satisfaction,monotonicity) = match winner {
            Some(winner) => (satisfaction_with_winner(winner,ballots),monotonicity_test_for_winner(rule,ballots,winner,monotonicity_trials,rng)?),
            None => (0.0,MonotonicityTest{ trials_requested: monotonicity_trials, ..Default::default() }),
        };
        Ok(ElectionFairness{ winner, satisfaction, condorcet, monotonicity })
    }
}

/// Accumulated fairness statistics of one rule over many elections.
#[derive(Clone,Debug,Default,PartialEq,Serialize,Deserialize)]
pub struct FairnessSummary {
    pub num_elections : usize,
    pub sum_satisfaction : f64,
    /// number of elections with a Condorcet winner.
    pub condorcet_applicable : usize,
    /// number of elections where the Condorcet winner won.
    pub condorcet_compliant : usize,
    pub sum_violation_rate : f64,
}

impl FairnessSummary {
    pub fn add(&mut self,election:&ElectionFairness) {
        self.num_elections+=1;
        self.sum_satisfaction+=election.satisfaction;
        match election.condorcet {
            CondorcetCompliance::Compliant => { self.condorcet_applicable+=1; self.condorcet_compliant+=1; }
            CondorcetCompliance::NonCompliant => { self.condorcet_applicable+=1; }
            CondorcetCompliance::NotApplicable => {}
        }
        self.sum_violation_rate+=election.monotonicity.violation_rate();
    }

    /// add in other to the cumulative sum of self.
    pub fn merge(&mut self,other:&FairnessSummary) {
        self.num_elections+=other.num_elections;
        self.sum_satisfaction+=other.sum_satisfaction;
        self.condorcet_applicable+=other.condorcet_applicable;
        self.condorcet_compliant+=other.condorcet_compliant;
        self.sum_violation_rate+=other.sum_violation_rate;
    }

    pub fn mean_satisfaction(&self) -> f64 { mean(self.sum_satisfaction,self.num_elections) }
    /// Fraction of elections with a Condorcet winner in which they won. 0 if there were none.
    pub fn condorcet_rate(&self) -> f64 { mean(self.condorcet_compliant as f64,self.condorcet_applicable) }
    pub fn mean_violation_rate(&self) -> f64 { mean(self.sum_violation_rate,self.num_elections) }
}

fn mean(sum:f64,n:usize) -> f64 { if n==0 { 0.0 } else { sum/n as f64 } }

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Monotonicity: ranking the winner higher on some ballot should never make them lose.
//!
//! This is tested by perturbation. Pick a ballot that does not have the winner first,
//! swap the winner with the candidate immediately above them, and see if the rule still
//! elects them. Each trial changes exactly one ballot of a single working copy, and the
//! change is undone afterwards, so trials are independent and no trial copies the whole
//! ballot set.

use rand::Rng;
use serde::{Serialize,Deserialize};
use voting::ballot_metadata::CandidateIndex;
use voting::ballot_paper::BallotSet;
use voting::rules::{RuleError, VotingRule};

/// The outcome of a set of monotonicity trials.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct MonotonicityTest {
    /// The number of trials asked for.
    pub trials_requested : usize,
    /// The number of trials actually run. Zero if no ballot could have the winner promoted, otherwise trials_requested.
    pub trials_performed : usize,
    /// The number of trials in which promoting the winner made them lose.
    pub violations : usize,
}

impl MonotonicityTest {
    /// violations/trials_performed, or 0 if no trials could be performed.
    pub fn violation_rate(&self) -> f64 {
        if self.trials_performed==0 { 0.0 } else { self.violations as f64/self.trials_performed as f64 }
    }
}

/// (ballot index, position of the winner) for every ballot where the winner is not first.
fn promotable_ballots(winner:CandidateIndex,ballots:&BallotSet) -> Vec<(usize,usize)> {
    ballots.iter().enumerate().filter_map(|(index,ballot)|{
        match ballot.rank_of(winner) {
            Some(position) if position>0 => Some((index,position)),
            _ => None,
        }
    }).collect()
}

/// Run `trials` monotonicity trials against a known baseline winner.
pub fn monotonicity_test_for_winner<R:VotingRule+?Sized,G:Rng+?Sized>(rule:&R,ballots:&BallotSet,winner:CandidateIndex,trials:usize,rng:&mut G) -> Result<MonotonicityTest,RuleError> {
    let mut res = MonotonicityTest{ trials_requested: trials, ..Default::default() };
    let promotable = promotable_ballots(winner,ballots);
    if promotable.is_empty() || trials==0 {
        log::debug!("No monotonicity trials possible for {} : every ballot has them first",winner);
        return Ok(res);
    }
    let mut perturbed = ballots.clone();
    for _ in 0..trials {
        let (ballot,position) = promotable[rng.random_range(0..promotable.len())];
        perturbed.promote(ballot,position);
        let new_winner = rule.winner(&perturbed);
        perturbed.promote(ballot,position); // undo
        if new_winner?!=Some(winner) { res.violations+=1; }
        res.trials_performed+=1;
    }
    Ok(res)
}

/// Run the rule to find the winner, then run `trials` monotonicity trials.
/// Nothing is performed if there are no ballots or the rule produces no winner.
pub fn monotonicity_test<R:VotingRule+?Sized,G:Rng+?Sized>(rule:&R,ballots:&BallotSet,trials:usize,rng:&mut G) -> Result<MonotonicityTest,RuleError> {
    if ballots.is_empty() { return Ok(MonotonicityTest{ trials_requested: trials, ..Default::default() }); }
    match rule.winner(ballots)? {
        Some(winner) => monotonicity_test_for_winner(rule,ballots,winner,trials,rng),
        None => Ok(MonotonicityTest{ trials_requested: trials, ..Default::default() }),
    }
}

/// The fraction of monotonicity trials in which promoting the winner made them lose. In [0,1].
pub fn monotonicity_violation_rate<R:VotingRule+?Sized,G:Rng+?Sized>(rule:&R,ballots:&BallotSet,trials:usize,rng:&mut G) -> Result<f64,RuleError> {
    Ok(monotonicity_test(rule,ballots,trials,rng)?.violation_rate())
}

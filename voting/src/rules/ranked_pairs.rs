// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Ranked Pairs, also known as the Tideman method.
//!
//! Head to head victories are considered strongest first, and each is locked in unless it
//! would contradict (make a cycle with) victories already locked in. The winner is the
//! candidate with no locked in defeats.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::lock_graph::LockGraph;
use crate::rules::RuleError;
use crate::tally::PairwiseTally;
use serde::{Serialize,Deserialize};

/// A head to head victory of winner over loser.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct PairwiseVictory {
    pub winner : CandidateIndex,
    pub loser : CandidateIndex,
    /// Number of voters preferring winner to loser minus the number preferring loser to winner. Always positive.
    pub margin : usize,
}

/// All head to head victories, in the order they should be considered for locking:
/// largest margin first; equal margins by winner index, then loser index, lowest first.
/// Tied head to head contests are not victories for either candidate.
pub fn sorted_victories(tally:&PairwiseTally) -> Vec<PairwiseVictory> {
    let mut res = vec![];
    for a in 0..tally.num_candidates() {
        for b in 0..tally.num_candidates() {
            let (winner,loser) = (CandidateIndex(a),CandidateIndex(b));
            if tally.beats(winner,loser) {
                res.push(PairwiseVictory{ winner, loser, margin: tally.prefer(winner,loser)-tally.prefer(loser,winner) });
            }
        }
    }
    res.sort_by(|x,y|y.margin.cmp(&x.margin).then_with(||x.winner.cmp(&y.winner)).then_with(||x.loser.cmp(&y.loser)));
    res
}

/// Lock in the victories in the given order, skipping any that would make a cycle.
pub fn lock_victories(num_candidates:usize,victories:&[PairwiseVictory]) -> LockGraph {
    let mut graph = LockGraph::new(num_candidates);
    for victory in victories {
        if !graph.try_lock(victory.winner,victory.loser) {
            log::trace!("Not locking {}>{} margin {} as it would make a cycle",victory.winner,victory.loser,victory.margin);
        }
    }
    graph
}

/// The Ranked Pairs winner. Ok(None) if there are no ballots or no candidates.
///
/// If several candidates have no locked defeats (possible only when some head to head contests are exactly tied),
/// the lowest index wins. If no candidate is free of locked defeats, the lock graph has a cycle, which is a bug,
/// reported as [RuleError::NoUnbeatenCandidate].
pub fn evaluate_ranked_pairs(ballots:&BallotSet) -> Result<Option<CandidateIndex>,RuleError> {
    let num_candidates = ballots.num_candidates();
    if ballots.is_empty() || num_candidates==0 { return Ok(None); }
    let tally = PairwiseTally::new(ballots);
    let graph = lock_victories(num_candidates,&sorted_victories(&tally));
    match graph.sources().first() {
        Some(&winner) => Ok(Some(winner)),
        None => {
            log::error!("Ranked pairs found no candidate without a locked defeat amongst {} candidates",num_candidates);
            Err(RuleError::NoUnbeatenCandidate{ num_candidates })
        }
    }
}

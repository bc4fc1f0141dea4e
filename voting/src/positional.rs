// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Positional scoring rules, where a candidate gets points depending on where they appear on each ballot.
//! Borda and Plurality are special cases; arbitrary weight vectors are what the rule optimizer searches over.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::tie_resolution::highest_score;
use serde::{Serialize,Deserialize};
use std::fmt::{Display, Formatter};

/// result[i] = total points for CandidateIndex(i), where a candidate in position r (0 = first) on a ballot gets points(r).
pub fn positional_scores(ballots:&BallotSet,points:impl Fn(usize)->usize) -> Vec<usize> {
    let mut res = vec![0;ballots.num_candidates()];
    for ballot in ballots {
        for (rank,candidate) in ballot.candidates.iter().enumerate() {
            res[candidate.0]+=points(rank);
        }
    }
    res
}

/// A positional scoring rule defined by a weight vector. weights[r] is the number of points for
/// being in position r. Positions beyond the end of the vector get nothing.
#[derive(Clone,Debug,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(transparent)]
pub struct PositionalScoring {
    pub weights : Vec<usize>,
}

impl PositionalScoring {
    pub fn new(weights:Vec<usize>) -> Self { PositionalScoring{weights} }

    /// The Borda count for num_candidates candidates, weights num_candidates-1 down to 0.
    pub fn borda(num_candidates:usize) -> Self { PositionalScoring{weights:(0..num_candidates).rev().collect()} }

    pub fn points(&self,rank:usize) -> usize { self.weights.get(rank).copied().unwrap_or(0) }

    pub fn scores(&self,ballots:&BallotSet) -> Vec<usize> { positional_scores(ballots,|rank|self.points(rank)) }

    /// The highest scoring candidate, ties going to the lowest index. None if no one voted.
    pub fn winner(&self,ballots:&BallotSet) -> Option<CandidateIndex> {
        if ballots.is_empty() { None } else { highest_score(&self.scores(ballots)) }
    }
}

impl Display for PositionalScoring {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"[{}]",self.weights.iter().map(|w|w.to_string()).collect::<Vec<_>>().join(","))
    }
}

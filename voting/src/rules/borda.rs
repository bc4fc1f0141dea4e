// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! The Borda count. With m candidates, a candidate gets m-1 points for each first preference, m-2 for each second, down to 0 for last.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::positional::positional_scores;
use crate::tie_resolution::highest_score;

/// result[i] = Borda score of CandidateIndex(i). Sums to num_voters*m*(m-1)/2.
pub fn borda_scores(ballots:&BallotSet) -> Vec<usize> {
    let num_candidates = ballots.num_candidates();
    positional_scores(ballots,|rank|num_candidates-1-rank)
}

/// The candidate with the highest Borda score, ties going to the lowest index. None if there are no ballots.
pub fn evaluate_borda(ballots:&BallotSet) -> Option<CandidateIndex> {
    if ballots.is_empty() { return None; }
    highest_score(&borda_scores(ballots))
}

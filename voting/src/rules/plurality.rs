// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Plurality, also known as first past the post. The candidate with the most first preferences wins.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::tally::count_first_preferences;
use crate::tie_resolution::highest_score;

/// The candidate with the most first preferences, ties going to the lowest index. None if there are no ballots.
pub fn evaluate_plurality(ballots:&BallotSet) -> Option<CandidateIndex> {
    if ballots.is_empty() { return None; }
    highest_score(&count_first_preferences(ballots))
}

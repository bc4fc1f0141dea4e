// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! How happy, on average, voters are with the winner.

use voting::ballot_metadata::CandidateIndex;
use voting::ballot_paper::BallotSet;
use voting::rules::{RuleError, VotingRule};

/// The mean over ballots of (m-1-rank)/(m-1), where rank is the position (0 = first) of the winner on the ballot
/// and m the number of candidates. 1.0 means everyone ranked the winner first, 0.0 means everyone ranked them last.
///
/// With only one candidate everyone got their first choice, so this is 1.0. With no ballots it is 0.0.
/// A winner who is not in the contest at all counts as last on every ballot.
pub fn satisfaction_with_winner(winner:CandidateIndex,ballots:&BallotSet) -> f64 {
    if ballots.is_empty() { return 0.0; }
    let num_candidates = ballots.num_candidates();
    if num_candidates<2 { return 1.0; }
    let worst = (num_candidates-1) as f64;
    let total : f64 = ballots.iter().map(|ballot|{
        match ballot.rank_of(winner) {
            Some(rank) => (worst-rank as f64)/worst,
            None => 0.0,
        }
    }).sum();
    total/ballots.num_voters() as f64
}

/// Run the rule and measure voter satisfaction with its winner. 0.0 if there are no ballots or no winner.
pub fn satisfaction_score<R:VotingRule+?Sized>(rule:&R,ballots:&BallotSet) -> Result<f64,RuleError> {
    if ballots.is_empty() { return Ok(0.0); }
    Ok(match rule.winner(ballots)? {
        Some(winner) => satisfaction_with_winner(winner,ballots),
        None => 0.0,
    })
}

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Instant runoff voting. Repeatedly exclude the candidate with the fewest votes, until someone has a majority.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::tally::{count_first_continuing_preferences, ContinuingCandidates};
use crate::tie_resolution::lowest_score_among;
use serde::{Serialize,Deserialize};

/// What happened in one round of the count.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct InstantRunoffRound {
    /// tallies[i] = votes for CandidateIndex(i) at the start of this round. Zero for excluded candidates.
    pub tallies : Vec<usize>,
    /// The candidate excluded at the end of this round, if the count continued.
    pub excluded : Option<CandidateIndex>,
}

/// The full history of an instant runoff count.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct InstantRunoffTranscript {
    pub rounds : Vec<InstantRunoffRound>,
    pub winner : Option<CandidateIndex>,
}

/// Run the count, keeping track of each round.
///
/// Each round, a continuing candidate with strictly more than half the votes wins.
/// Otherwise the continuing candidate with the fewest votes (lowest index if tied, including
/// candidates with no votes at all) is excluded, and their ballots pass to the next continuing preference.
/// When only one candidate is left they win, majority or not.
pub fn instant_runoff_transcript(ballots:&BallotSet) -> InstantRunoffTranscript {
    let mut rounds = vec![];
    if ballots.is_empty() { return InstantRunoffTranscript{ rounds, winner: None } }
    let mut continuing = ContinuingCandidates::all(ballots.num_candidates());
    loop {
        let tallies = count_first_continuing_preferences(ballots,&continuing);
        let total : usize = tallies.iter().sum();
        if let Some(winner) = continuing.iter().find(|c|2*tallies[c.0]>total) {
            rounds.push(InstantRunoffRound{ tallies, excluded: None });
            return InstantRunoffTranscript{ rounds, winner: Some(winner) };
        }
        let Some(lowest) = lowest_score_among(&tallies,|c|continuing.is_continuing(c)) else {
            // no continuing candidates at all, which only happens with no candidates.
            rounds.push(InstantRunoffRound{ tallies, excluded: None });
            return InstantRunoffTranscript{ rounds, winner: None };
        };
        log::debug!("IRV round {} excluding {} with {} of {} votes",rounds.len()+1,lowest,tallies[lowest.0],total);
        continuing.exclude(lowest);
        rounds.push(InstantRunoffRound{ tallies, excluded: Some(lowest) });
        if continuing.num_continuing()==1 {
            return InstantRunoffTranscript{ rounds, winner: continuing.iter().next() };
        }
    }
}

/// The instant runoff winner. None if there are no ballots.
pub fn evaluate_irv(ballots:&BallotSet) -> Option<CandidateIndex> {
    instant_runoff_transcript(ballots).winner
}

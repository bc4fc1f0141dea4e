// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! The Condorcet criterion: if some candidate beats every other candidate head to head, they should win.

use serde::{Serialize,Deserialize};
use std::fmt::{Display, Formatter};
use voting::ballot_metadata::CandidateIndex;
use voting::ballot_paper::BallotSet;
use voting::rules::{RuleError, VotingRule};
use voting::tally::PairwiseTally;

/// (a,b) -> number of voters preferring a to b.
pub fn pairwise_matrix(ballots:&BallotSet) -> PairwiseTally { PairwiseTally::new(ballots) }

/// The candidate who strictly beats every other candidate head to head, if there is one.
/// None if there are no ballots.
pub fn find_condorcet_winner(ballots:&BallotSet) -> Option<CandidateIndex> {
    pairwise_matrix(ballots).condorcet_winner()
}

/// Whether a rule chose the Condorcet winner in a particular election.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum CondorcetCompliance {
    Compliant,
    NonCompliant,
    /// There was no Condorcet winner, so the criterion says nothing.
    NotApplicable,
}

impl CondorcetCompliance {
    /// Compare a winner against the Condorcet winner (if any).
    pub fn of(winner:Option<CandidateIndex>,condorcet_winner:Option<CandidateIndex>) -> Self {
        match condorcet_winner {
            None => CondorcetCompliance::NotApplicable,
            Some(c) if winner==Some(c) => CondorcetCompliance::Compliant,
            Some(_) => CondorcetCompliance::NonCompliant,
        }
    }
    /// Some(true) for compliant, Some(false) for non compliant, None if not applicable.
    pub fn as_option(self) -> Option<bool> {
        match self {
            CondorcetCompliance::Compliant => Some(true),
            CondorcetCompliance::NonCompliant => Some(false),
            CondorcetCompliance::NotApplicable => None,
        }
    }
}

impl Display for CondorcetCompliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CondorcetCompliance::Compliant => f.write_str("compliant"),
            CondorcetCompliance::NonCompliant => f.write_str("non_compliant"),
            CondorcetCompliance::NotApplicable => f.write_str("not_applicable"),
        }
    }
}

/// See whether the rule elects the Condorcet winner. The rule is not run if there is no Condorcet winner.
pub fn condorcet_compliance<R:VotingRule+?Sized>(rule:&R,ballots:&BallotSet) -> Result<CondorcetCompliance,RuleError> {
    match find_condorcet_winner(ballots) {
        None => Ok(CondorcetCompliance::NotApplicable),
        condorcet_winner => Ok(CondorcetCompliance::of(rule.winner(ballots)?,condorcet_winner)),
    }
}

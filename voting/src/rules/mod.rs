// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! The voting rules, and a common interface to them.
//!
//! Anything that can turn a [BallotSet] into a winner is a [VotingRule]. The fairness
//! statistics only ever use rules through this trait, so a custom rule (such as a
//! [PositionalScoring] rule with evolved weights, or any function wrapped in [FnRule])
//! can be measured exactly like the built in ones.

pub mod plurality;
pub mod borda;
pub mod instant_runoff;
pub mod ranked_pairs;

pub use plurality::evaluate_plurality;
pub use borda::evaluate_borda;
pub use instant_runoff::evaluate_irv;
pub use ranked_pairs::evaluate_ranked_pairs;

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::BallotSet;
use crate::positional::PositionalScoring;
use serde::{Serialize,Deserialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Something that went wrong inside a rule. This always indicates a bug, never a property of the votes.
#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum RuleError {
    #[error("Ranked pairs locked graph over {num_candidates} candidates has no candidate without a locked defeat")]
    NoUnbeatenCandidate{ num_candidates:usize },
}

/// A single winner voting rule.
pub trait VotingRule {
    /// A short name for this rule, used in output.
    fn name(&self) -> String;
    /// The winner for the given ballots. Ok(None) means there is no winner, as happens when there are no ballots.
    fn winner(&self,ballots:&BallotSet) -> Result<Option<CandidateIndex>,RuleError>;
}

impl <R:VotingRule+?Sized> VotingRule for &R {
    fn name(&self) -> String { (**self).name() }
    fn winner(&self, ballots: &BallotSet) -> Result<Option<CandidateIndex>, RuleError> { (**self).winner(ballots) }
}

impl <R:VotingRule+?Sized> VotingRule for Box<R> {
    fn name(&self) -> String { (**self).name() }
    fn winner(&self, ballots: &BallotSet) -> Result<Option<CandidateIndex>, RuleError> { (**self).winner(ballots) }
}

impl VotingRule for PositionalScoring {
    fn name(&self) -> String { format!("Positional{}",self) }
    fn winner(&self, ballots: &BallotSet) -> Result<Option<CandidateIndex>, RuleError> { Ok(PositionalScoring::winner(self,ballots)) }
}

/// Turn an arbitrary function from ballots to a winner into a rule.
/// ```
/// use voting::ballot_paper::BallotSet;
/// use voting::ballot_metadata::CandidateIndex;
/// use voting::rules::{FnRule, VotingRule};
/// let last_candidate = FnRule::new("Last",|b:&BallotSet|b.candidates().last());
/// let ballots = BallotSet::from_rankings(vec![vec![0,1,2]]).unwrap();
/// assert_eq!(Ok(Some(CandidateIndex(2))),last_candidate.winner(&ballots));
/// ```
pub struct FnRule<F> {
    name : String,
    function : F,
}

impl <F:Fn(&BallotSet)->Option<CandidateIndex>> FnRule<F> {
    pub fn new(name:&str,function:F) -> Self { FnRule{ name: name.to_string(), function } }
}

impl <F:Fn(&BallotSet)->Option<CandidateIndex>> VotingRule for FnRule<F> {
    fn name(&self) -> String { self.name.clone() }
    fn winner(&self, ballots: &BallotSet) -> Result<Option<CandidateIndex>, RuleError> { Ok((self.function)(ballots)) }
}

/// The built in rules, selectable by name.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Rules {
    Plurality,
    Borda,
    IRV,
    RankedPairs,
}

impl Rules {
    pub fn all() -> Vec<Self> { vec![Rules::Plurality,Rules::Borda,Rules::IRV,Rules::RankedPairs] }
}

impl FromStr for Rules {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Plurality" => Ok(Rules::Plurality),
            "Borda" => Ok(Rules::Borda),
            "IRV" => Ok(Rules::IRV),
            "InstantRunoff" => Ok(Rules::IRV), // alias
            "RankedPairs" => Ok(Rules::RankedPairs),
            "Tideman" => Ok(Rules::RankedPairs), // alias
            _ => Err("No such rule supported")
        }
    }
}

impl Display for Rules {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rules::Plurality => "Plurality",
            Rules::Borda => "Borda",
            Rules::IRV => "IRV",
            Rules::RankedPairs => "RankedPairs",
        };
        f.write_str(s)
    }
}

impl VotingRule for Rules {
    fn name(&self) -> String { self.to_string() }

    fn winner(&self, ballots: &BallotSet) -> Result<Option<CandidateIndex>, RuleError> {
        match self {
            Rules::Plurality => Ok(evaluate_plurality(ballots)),
            Rules::Borda => Ok(evaluate_borda(ballots)),
            Rules::IRV => Ok(evaluate_irv(ballots)),
            Rules::RankedPairs => evaluate_ranked_pairs(ballots),
        }
    }
}

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Ballots and collections of ballots.
//!
//! A ballot here is always complete: a strict ranking of every candidate in the contest.
//! A [BallotSet] checks this when it is made, so the counting code never has to.

use crate::ballot_metadata::CandidateIndex;
use serde::{Deserialize,Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// One voter's ranking of all the candidates.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct Ballot {
    /// Candidate ids, in preference order. candidates[0] is the first preference.
    pub candidates : Vec<CandidateIndex>,
}

impl Ballot {
    pub fn new(candidates:Vec<CandidateIndex>) -> Self { Ballot{candidates} }

    pub fn first_preference(&self) -> Option<CandidateIndex> { self.candidates.first().copied() }

    /// The position of the candidate on this ballot, 0 being first preference.
    pub fn rank_of(&self,candidate:CandidateIndex) -> Option<usize> {
        self.candidates.iter().position(|&c|c==candidate)
    }

    pub fn len(&self) -> usize { self.candidates.len() }
    pub fn is_empty(&self) -> bool { self.candidates.is_empty() }

    /// This ballot with a given candidate struck out, everyone below moving up one place.
    pub fn without(&self,candidate:CandidateIndex) -> Ballot {
        Ballot{candidates:self.candidates.iter().copied().filter(|&c|c!=candidate).collect()}
    }
}

impl From<Vec<usize>> for Ballot {
    fn from(value: Vec<usize>) -> Self { Ballot{candidates:value.into_iter().map(CandidateIndex).collect()} }
}

impl Display for Ballot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"{}",self.candidates.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(","))
    }
}

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum BallotValidationError {
    #[error("Ballot {ballot} ranks {found} candidates but the contest has {expected}")]
    WrongLength{ ballot:usize, expected:usize, found:usize },
    #[error("Ballot {ballot} mentions candidate {candidate} which is not one of the {num_candidates} candidates in the contest")]
    CandidateOutOfRange{ ballot:usize, candidate:CandidateIndex, num_candidates:usize },
    #[error("Ballot {ballot} ranks candidate {candidate} more than once")]
    DuplicateCandidate{ ballot:usize, candidate:CandidateIndex },
}

/// All the ballots cast in one election.
///
/// Invariant: every ballot is a permutation of `CandidateIndex(0)..CandidateIndex(num_candidates)`.
/// The only mutation allowed after construction is [BallotSet::promote], which preserves this.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from = "UncheckedBallotSet")]
pub struct BallotSet {
    num_candidates : usize,
    ballots : Vec<Ballot>,
}

/// The serialized form of a [BallotSet], before validation.
#[derive(Deserialize)]
struct UncheckedBallotSet {
    num_candidates : usize,
    ballots : Vec<Ballot>,
}

impl TryFrom<UncheckedBallotSet> for BallotSet {
    type Error = BallotValidationError;
    fn try_from(value: UncheckedBallotSet) -> Result<Self, Self::Error> { BallotSet::new(value.num_candidates,value.ballots) }
}

impl BallotSet {
    /// An election with no voters.
    pub fn empty(num_candidates:usize) -> Self { BallotSet{num_candidates,ballots:vec![]} }

    /// Make a ballot set, checking that every ballot is a complete strict ranking of num_candidates candidates.
    pub fn new(num_candidates:usize,ballots:Vec<Ballot>) -> Result<Self,BallotValidationError> {
        for (index,ballot) in ballots.iter().enumerate() {
            check_ballot(index,num_candidates,ballot)?;
        }
        Ok(BallotSet{num_candidates,ballots})
    }

    /// Make a ballot set from preference lists of candidate numbers. The number of candidates is taken from the first ballot.
    /// ```
    /// use voting::ballot_paper::BallotSet;
    /// let ballots = BallotSet::from_rankings(vec![vec![0,1,2],vec![2,0,1]]).unwrap();
    /// assert_eq!(3,ballots.num_candidates());
    /// assert_eq!(2,ballots.num_voters());
    /// assert!(BallotSet::from_rankings(vec![vec![0,1,2],vec![2,0]]).is_err());
    /// assert!(BallotSet::from_rankings(vec![vec![0,1,1]]).is_err());
    /// ```
    pub fn from_rankings(rankings:Vec<Vec<usize>>) -> Result<Self,BallotValidationError> {
        let num_candidates = rankings.first().map(|r|r.len()).unwrap_or(0);
        BallotSet::new(num_candidates,rankings.into_iter().map(Ballot::from).collect())
    }

    /// add a ballot, checking it.
    pub fn push(&mut self,ballot:Ballot) -> Result<(),BallotValidationError> {
        check_ballot(self.ballots.len(),self.num_candidates,&ballot)?;
        self.ballots.push(ballot);
        Ok(())
    }

    /// add a ballot known to be a permutation of the candidates, such as a shuffled list.
    pub(crate) fn push_permutation(&mut self,ballot:Ballot) {
        debug_assert!(check_ballot(self.ballots.len(),self.num_candidates,&ballot).is_ok());
        self.ballots.push(ballot);
    }

    /// Add n copies of the same ballot.
    pub fn push_multiple(&mut self,ballot:Ballot,n:usize) -> Result<(),BallotValidationError> {
        check_ballot(self.ballots.len(),self.num_candidates,&ballot)?;
        for _ in 0..n { self.ballots.push(ballot.clone()); }
        Ok(())
    }

    pub fn num_candidates(&self) -> usize { self.num_candidates }
    pub fn num_voters(&self) -> usize { self.ballots.len() }
    pub fn is_empty(&self) -> bool { self.ballots.is_empty() }
    pub fn ballots(&self) -> &[Ballot] { &self.ballots }
    pub fn ballot(&self,index:usize) -> &Ballot { &self.ballots[index] }
    pub fn iter(&self) -> std::slice::Iter<'_,Ballot> { self.ballots.iter() }

    /// All the candidates in the contest, lowest index first.
    pub fn candidates(&self) -> impl Iterator<Item=CandidateIndex> + use<> { (0..self.num_candidates).map(CandidateIndex) }

    /// Swap the candidate at `position` on ballot `ballot` with the candidate immediately above it.
    /// Applying it twice restores the original ballot.
    ///
    /// Panics if position is 0 or off the end of the ballot.
    pub fn promote(&mut self,ballot:usize,position:usize) {
        assert!(position>0,"Cannot promote the first preference");
        self.ballots[ballot].candidates.swap(position-1,position);
    }
}

impl<'a> IntoIterator for &'a BallotSet {
    type Item = &'a Ballot;
    type IntoIter = std::slice::Iter<'a,Ballot>;
    fn into_iter(self) -> Self::IntoIter { self.ballots.iter() }
}

/// Check that a ballot ranks each of num_candidates candidates exactly once.
fn check_ballot(index:usize,num_candidates:usize,ballot:&Ballot) -> Result<(),BallotValidationError> {
    if ballot.len()!=num_candidates { return Err(BallotValidationError::WrongLength{ ballot: index, expected: num_candidates, found: ballot.len() }) }
    let mut seen = vec![false;num_candidates];
    for &candidate in &ballot.candidates {
        if candidate.0>=num_candidates { return Err(BallotValidationError::CandidateOutOfRange{ ballot: index, candidate, num_candidates }) }
        if seen[candidate.0] { return Err(BallotValidationError::DuplicateCandidate{ ballot: index, candidate }) }
        seen[candidate.0]=true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(BallotSet::from_rankings(vec![vec![0,1,2],vec![1,0]]),Err(BallotValidationError::WrongLength{ballot:1,expected:3,found:2}));
        assert_eq!(BallotSet::from_rankings(vec![vec![0,3,2]]),Err(BallotValidationError::CandidateOutOfRange{ballot:0,candidate:CandidateIndex(3),num_candidates:3}));
        assert_eq!(BallotSet::from_rankings(vec![vec![0,1,2],vec![2,2,1]]),Err(BallotValidationError::DuplicateCandidate{ballot:1,candidate:CandidateIndex(2)}));
        let empty = BallotSet::from_rankings(vec![]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(0,empty.num_candidates());
        let mut set = BallotSet::empty(2);
        set.push_multiple(Ballot::from(vec![1,0]),3).unwrap();
        assert_eq!(3,set.num_voters());
        assert!(set.push(Ballot::from(vec![1,1])).is_err());
        assert_eq!(3,set.num_voters());
    }

    #[test]
    fn test_promote_is_its_own_inverse() {
        let mut set = BallotSet::from_rankings(vec![vec![0,1,2,3]]).unwrap();
        let original = set.clone();
        set.promote(0,2);
        assert_eq!(set.ballot(0),&Ballot::from(vec![0,2,1,3]));
        set.promote(0,2);
        assert_eq!(set,original);
    }

    #[test]
    fn test_without() {
        let ballot = Ballot::from(vec![2,0,1]);
        assert_eq!(ballot.without(CandidateIndex(0)),Ballot::from(vec![2,1]));
        assert_eq!(Some(1),ballot.rank_of(CandidateIndex(0)));
        assert_eq!(None,ballot.without(CandidateIndex(0)).rank_of(CandidateIndex(0)));
    }
}

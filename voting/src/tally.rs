// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Counting primitives shared by the rules: first preferences, exclusion of candidates, and head to head comparisons.

use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Ballot, BallotSet};
use serde::{Serialize,Deserialize};
use thiserror::Error;

/// result[i] = number of ballots with CandidateIndex(i) as first preference.
pub fn count_first_preferences(ballots:&BallotSet) -> Vec<usize> {
    let mut res = vec![0;ballots.num_candidates()];
    for ballot in ballots {
        if let Some(first) = ballot.first_preference() { res[first.0]+=1; }
    }
    res
}

/// The set of candidates not yet excluded. Excluding a candidate is equivalent to
/// striking them from every ballot, without having to rewrite the ballots.
#[derive(Clone,Debug)]
pub struct ContinuingCandidates {
    continuing : Vec<bool>,
    num_continuing : usize,
}

impl ContinuingCandidates {
    /// Everyone is continuing.
    pub fn all(num_candidates:usize) -> Self {
        ContinuingCandidates{ continuing: vec![true;num_candidates], num_continuing: num_candidates }
    }
    pub fn is_continuing(&self,candidate:CandidateIndex) -> bool { self.continuing[candidate.0] }
    pub fn num_continuing(&self) -> usize { self.num_continuing }

    /// Remove a candidate from the count. Does nothing if already excluded.
    pub fn exclude(&mut self,candidate:CandidateIndex) {
        if self.continuing[candidate.0] {
            self.continuing[candidate.0]=false;
            self.num_continuing-=1;
        }
    }

    /// continuing candidates, lowest index first.
    pub fn iter(&self) -> impl Iterator<Item=CandidateIndex> + '_ {
        self.continuing.iter().enumerate().filter(|(_,c)|**c).map(|(i,_)|CandidateIndex(i))
    }

    /// The most preferred candidate on the ballot who is still continuing.
    pub fn first_continuing_preference(&self,ballot:&Ballot) -> Option<CandidateIndex> {
        ballot.candidates.iter().copied().find(|&c|self.is_continuing(c))
    }
}

/// Like count_first_preferences, but votes for excluded candidates pass to the next continuing preference.
/// Excluded candidates get a count of zero.
pub fn count_first_continuing_preferences(ballots:&BallotSet,continuing:&ContinuingCandidates) -> Vec<usize> {
    let mut res = vec![0;ballots.num_candidates()];
    for ballot in ballots {
        if let Some(first) = continuing.first_continuing_preference(ballot) { res[first.0]+=1; }
    }
    res
}

/// How many voters prefer each candidate to each other candidate.
///
/// Since every ballot ranks every candidate, `prefer(a,b)+prefer(b,a)` is the number of voters for any a≠b.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
#[serde(try_from = "UncheckedPairwiseTally")]
pub struct PairwiseTally {
    num_candidates : usize,
    num_voters : usize,
    /// counts[a*num_candidates+b] = number of voters ranking a above b.
    counts : Vec<usize>,
}

/// The serialized form of a [PairwiseTally], before checking it could have come from complete ballots.
#[derive(Deserialize)]
struct UncheckedPairwiseTally {
    num_candidates : usize,
    num_voters : usize,
    counts : Vec<usize>,
}

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum PairwiseTallyError {
    #[error("Pairwise tally for {num_candidates} candidates should have {num_candidates} squared counts but has {found}")]
    WrongSize{ num_candidates:usize, found:usize },
    #[error("Candidate {candidate} is recorded as preferred to themself")]
    SelfPreference{ candidate:CandidateIndex },
    #[error("Counts for candidates {a} and {b} sum to {found} but there are {num_voters} voters")]
    Inconsistent{ a:CandidateIndex, b:CandidateIndex, found:usize, num_voters:usize },
}

impl TryFrom<UncheckedPairwiseTally> for PairwiseTally {
    type Error = PairwiseTallyError;
    fn try_from(value: UncheckedPairwiseTally) -> Result<Self, Self::Error> {
        let UncheckedPairwiseTally{ num_candidates, num_voters, counts } = value;
        if num_candidates.checked_mul(num_candidates)!=Some(counts.len()) { return Err(PairwiseTallyError::WrongSize{ num_candidates, found: counts.len() }) }
        let res = PairwiseTally{ num_candidates, num_voters, counts };
        for a in (0..num_candidates).map(CandidateIndex) {
            if res.prefer(a,a)!=0 { return Err(PairwiseTallyError::SelfPreference{ candidate: a }) }
            for b in (a.0+1..num_candidates).map(CandidateIndex) {
                let found = res.prefer(a,b).saturating_add(res.prefer(b,a));
                if found!=num_voters { return Err(PairwiseTallyError::Inconsistent{ a, b, found, num_voters }) }
            }
        }
        Ok(res)
    }
}

impl PairwiseTally {
    pub fn new(ballots:&BallotSet) -> Self {
        let num_candidates = ballots.num_candidates();
        let mut counts = vec![0;num_candidates*num_candidates];
        for ballot in ballots {
            for (i,above) in ballot.candidates.iter().enumerate() {
                for below in &ballot.candidates[i+1..] {
                    counts[above.0*num_candidates+below.0]+=1;
                }
            }
        }
        PairwiseTally{ num_candidates, num_voters: ballots.num_voters(), counts }
    }

    pub fn num_candidates(&self) -> usize { self.num_candidates }
    pub fn num_voters(&self) -> usize { self.num_voters }

    /// The number of voters ranking a above b. Zero if a==b.
    pub fn prefer(&self,a:CandidateIndex,b:CandidateIndex) -> usize { self.counts[a.0*self.num_candidates+b.0] }

    /// prefer(a,b)-prefer(b,a). Positive if a beats b head to head.
    pub fn margin(&self,a:CandidateIndex,b:CandidateIndex) -> isize { self.prefer(a,b) as isize-self.prefer(b,a) as isize }

    /// true iff strictly more voters prefer a to b than b to a.
    pub fn beats(&self,a:CandidateIndex,b:CandidateIndex) -> bool { self.prefer(a,b)>self.prefer(b,a) }

    /// A candidate who beats every other candidate head to head. There can be at most one.
    /// With fewer than two candidates there are no head to head contests, and so no Condorcet winner.
    pub fn condorcet_winner(&self) -> Option<CandidateIndex> {
        if self.num_voters==0 || self.num_candidates<2 { return None; }
        (0..self.num_candidates).map(CandidateIndex).find(|&c|{
            (0..self.num_candidates).map(CandidateIndex).all(|other|other==c || self.beats(c,other))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialized_tally_is_checked() {
        let ballots = BallotSet::from_rankings(vec![vec![0,1,2],vec![2,0,1]]).unwrap();
        let tally = PairwiseTally::new(&ballots);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(tally,serde_json::from_str::<PairwiseTally>(&json).unwrap());
        assert!(serde_json::from_str::<PairwiseTally>(r#"{"num_candidates":3,"num_voters":2,"counts":[]}"#).unwrap_err().to_string().contains("squared counts"));
        assert!(serde_json::from_str::<PairwiseTally>(r#"{"num_candidates":2,"num_voters":1,"counts":[1,0,1,0]}"#).unwrap_err().to_string().contains("themself"));
        assert!(serde_json::from_str::<PairwiseTally>(r#"{"num_candidates":2,"num_voters":3,"counts":[0,1,1,0]}"#).unwrap_err().to_string().contains("sum to 2"));
        let empty : PairwiseTally = serde_json::from_str(r#"{"num_candidates":0,"num_voters":0,"counts":[]}"#).unwrap();
        assert_eq!(None,empty.condorcet_winner());
    }
}

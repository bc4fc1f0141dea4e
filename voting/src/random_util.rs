// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Some utility routines using pseudo-random numbers: making up electorates to test rules on.


use rand::Rng;
use rand::seq::SliceRandom;
use crate::ballot_metadata::CandidateIndex;
use crate::ballot_paper::{Ballot, BallotSet};

/// A uniformly random ranking of num_candidates candidates.
pub fn random_ballot<R:Rng+?Sized>(num_candidates:usize,rng:&mut R) -> Ballot {
    let mut candidates : Vec<CandidateIndex> = (0..num_candidates).map(CandidateIndex).collect();
    candidates.shuffle(rng);
    Ballot::new(candidates)
}

/// An "impartial culture" electorate: each voter independently picks a uniformly random ranking.
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use voting::random_util::impartial_culture;
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let ballots = impartial_culture(100,4,&mut rng);
/// assert_eq!(100,ballots.num_voters());
/// assert_eq!(4,ballots.num_candidates());
/// assert_eq!(ballots,impartial_culture(100,4,&mut ChaCha20Rng::seed_from_u64(1)));
/// ```
pub fn impartial_culture<R:Rng+?Sized>(num_voters:usize,num_candidates:usize,rng:&mut R) -> BallotSet {
    let mut res = BallotSet::empty(num_candidates);
    for _ in 0..num_voters {
        res.push_permutation(random_ballot(num_candidates,rng));
    }
    res
}

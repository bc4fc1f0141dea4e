// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! Deterministic tie resolution.
//!
//! Whenever a rule has to choose between candidates with equal scores, the candidate with
//! the lower index is chosen. This applies both when choosing a winner (the lowest index of
//! the tied top scorers wins) and when choosing who to exclude (the lowest index of the
//! tied bottom scorers is excluded). Results are thus reproducible and do not depend on
//! the iteration order of any container.

use crate::ballot_metadata::CandidateIndex;

/// The candidate with the highest score, scores[i] being the score for CandidateIndex(i).
/// Ties are resolved in favour of the lowest index. None if there are no candidates.
/// ```
/// use voting::ballot_metadata::CandidateIndex;
/// use voting::tie_resolution::highest_score;
/// assert_eq!(Some(CandidateIndex(1)),highest_score(&[3,5,5,1]));
/// assert_eq!(None,highest_score::<usize>(&[]));
/// ```
pub fn highest_score<T:Ord>(scores:&[T]) -> Option<CandidateIndex> {
    let mut best : Option<(usize,&T)> = None;
    for (i,score) in scores.iter().enumerate() {
        match best {
            Some((_,best_score)) if score<=best_score => {}
            _ => best=Some((i,score)),
        }
    }
    best.map(|(i,_)|CandidateIndex(i))
}

/// The candidate with the lowest score amongst those for whom `eligible` is true.
/// Ties are resolved by choosing the lowest index.
/// ```
/// use voting::ballot_metadata::CandidateIndex;
/// use voting::tie_resolution::lowest_score_among;
/// assert_eq!(Some(CandidateIndex(2)),lowest_score_among(&[0,4,2,2],|c|c.0!=0));
/// ```
pub fn lowest_score_among<T:Ord>(scores:&[T],eligible:impl Fn(CandidateIndex)->bool) -> Option<CandidateIndex> {
    let mut best : Option<(usize,&T)> = None;
    for (i,score) in scores.iter().enumerate() {
        if !eligible(CandidateIndex(i)) { continue; }
        match best {
            Some((_,best_score)) if score>=best_score => {}
            _ => best=Some((i,score)),
        }
    }
    best.map(|(i,_)|CandidateIndex(i))
}

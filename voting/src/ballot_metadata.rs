// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.

//! Information about the contest, such as candidates.

use serde::{Serialize,Deserialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// a candidate, referred to by position in the list of candidates, 0 being first.
/// The ordering is used for deterministic tie resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

impl FromStr for CandidateIndex {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(CandidateIndex(s.parse()?)) }
}

/// A human readable name for a candidate, C1 for CandidateIndex(0) etc.
pub fn candidate_name(candidate:CandidateIndex) -> String { format!("C{}",candidate.0+1) }

// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.

//! Single winner voting rules over complete ranked ballots.
//!
//! Every rule has the same shape: it takes a validated [`ballot_paper::BallotSet`] and
//! produces the winning candidate, or `None` if there were no voters.


pub mod ballot_metadata;
pub mod ballot_paper;
pub mod tally;
pub mod tie_resolution;
pub mod lock_graph;
pub mod positional;
pub mod rules;
pub mod random_util;

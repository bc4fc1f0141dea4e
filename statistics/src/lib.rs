// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.

//! Fairness statistics for voting rules.
//!
//! Each statistic treats the rule as a black box, only ever asking it for the winner of
//! some set of ballots, so they work just as well for custom rules as for the standard ones.

pub mod condorcet;
pub mod satisfaction;
pub mod monotonicity;
pub mod summary;

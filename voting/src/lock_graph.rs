// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


//! The graph of locked in head to head victories used by Ranked Pairs.
//!
//! Edges are only ever added if they keep the graph acyclic, so there is always
//! at least one candidate with no locked defeats when there are any candidates at all.

use crate::ballot_metadata::CandidateIndex;

#[derive(Clone,Debug)]
pub struct LockGraph {
    /// successors[a] = the candidates that a has a locked victory over.
    successors : Vec<Vec<CandidateIndex>>,
    /// num_incoming[b] = number of locked defeats of b.
    num_incoming : Vec<usize>,
}

impl LockGraph {
    /// A graph with no edges.
    pub fn new(num_candidates:usize) -> Self {
        LockGraph{ successors: vec![vec![];num_candidates], num_incoming: vec![0;num_candidates] }
    }

    pub fn num_candidates(&self) -> usize { self.successors.len() }

    /// See if there is a path from `from` to `to` through locked edges. A candidate can always reach itself.
    pub fn can_reach(&self,from:CandidateIndex,to:CandidateIndex) -> bool {
        let mut visited = vec![false;self.num_candidates()];
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            if node==to { return true; }
            if visited[node.0] { continue; }
            visited[node.0]=true;
            for &next in &self.successors[node.0] {
                if !visited[next.0] { stack.push(next); }
            }
        }
        false
    }

    /// Lock in winner→loser unless doing so would make a cycle, i.e. loser can already reach winner.
    /// Returns true iff the edge was locked.
    pub fn try_lock(&mut self,winner:CandidateIndex,loser:CandidateIndex) -> bool {
        if self.can_reach(loser,winner) { false }
        else {
            self.successors[winner.0].push(loser);
            self.num_incoming[loser.0]+=1;
            true
        }
    }

    pub fn is_locked(&self,winner:CandidateIndex,loser:CandidateIndex) -> bool { self.successors[winner.0].contains(&loser) }

    pub fn num_locked_defeats(&self,candidate:CandidateIndex) -> usize { self.num_incoming[candidate.0] }

    /// The candidates with no locked defeats, lowest index first.
    pub fn sources(&self) -> Vec<CandidateIndex> {
        self.num_incoming.iter().enumerate().filter(|(_,n)|**n==0).map(|(i,_)|CandidateIndex(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_is_not_locked() {
        let a = CandidateIndex(0);
        let b = CandidateIndex(1);
        let c = CandidateIndex(2);
        let mut graph = LockGraph::new(3);
        assert!(graph.try_lock(a,b));
        assert!(graph.try_lock(b,c));
        assert!(graph.can_reach(a,c));
        assert!(!graph.can_reach(c,a));
        assert!(!graph.try_lock(c,a));
        assert!(!graph.is_locked(c,a));
        assert_eq!(vec![a],graph.sources());
        assert_eq!(1,graph.num_locked_defeats(c));
    }

    #[test]
    fn test_no_edges_means_everyone_is_a_source() {
        let graph = LockGraph::new(3);
        assert_eq!(vec![CandidateIndex(0),CandidateIndex(1),CandidateIndex(2)],graph.sources());
        assert!(graph.can_reach(CandidateIndex(1),CandidateIndex(1)));
    }
}

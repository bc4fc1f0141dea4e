// Copyright 2026 Andrew Conway.
// This file is part of RuleFairness.
// RuleFairness is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// RuleFairness is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with RuleFairness.  If not, see <https://www.gnu.org/licenses/>.


use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use voting::ballot_metadata::CandidateIndex;
use voting::ballot_paper::{Ballot, BallotSet};
use voting::positional::PositionalScoring;
use voting::random_util::impartial_culture;
use voting::rules::{evaluate_borda, evaluate_irv, evaluate_plurality, evaluate_ranked_pairs, Rules, VotingRule};
use voting::rules::borda::borda_scores;
use voting::rules::instant_runoff::instant_runoff_transcript;
use voting::tally::{count_first_preferences, PairwiseTally};

const A : CandidateIndex = CandidateIndex(0);
const B : CandidateIndex = CandidateIndex(1);
const C : CandidateIndex = CandidateIndex(2);

/// Make a ballot set from (number of voters, ranking) pairs.
fn weighted(num_candidates:usize,groups:&[(usize,Vec<usize>)]) -> BallotSet {
    let mut res = BallotSet::empty(num_candidates);
    for (n,ranking) in groups {
        res.push_multiple(Ballot::from(ranking.clone()),*n).unwrap();
    }
    res
}

#[test]
fn test_no_voters_means_no_winner() {
    let ballots = BallotSet::empty(3);
    for rule in Rules::all() {
        assert_eq!(Ok(None),rule.winner(&ballots),"{}",rule);
    }
    assert_eq!(None,PositionalScoring::new(vec![3,1,0]).winner(&ballots));
}

#[test]
fn test_unanimous_ballots() {
    let ballots = weighted(4,&[(7,vec![2,0,3,1])]);
    assert_eq!(Some(C),evaluate_plurality(&ballots));
    assert_eq!(Some(C),evaluate_borda(&ballots));
    assert_eq!(Some(C),evaluate_irv(&ballots));
    assert_eq!(Ok(Some(C)),evaluate_ranked_pairs(&ballots));
}

#[test]
fn test_single_candidate() {
    let ballots = weighted(1,&[(3,vec![0])]);
    for rule in Rules::all() {
        assert_eq!(Ok(Some(A)),rule.winner(&ballots),"{}",rule);
    }
}

#[test]
fn test_ties_go_to_lowest_index() {
    let ballots = BallotSet::from_rankings(vec![vec![0,1],vec![1,0]]).unwrap();
    assert_eq!(Some(A),evaluate_plurality(&ballots));
    assert_eq!(Some(A),evaluate_borda(&ballots));
    // the lowest index is also the one excluded in a tie for last place.
    assert_eq!(Some(B),evaluate_irv(&ballots));
    // tied head to head, so nothing is locked and both are unbeaten.
    assert_eq!(Ok(Some(A)),evaluate_ranked_pairs(&ballots));
}

#[test]
fn test_borda_and_plurality_disagree() {
    // A has the most first preferences, but B is everyone's second choice.
    let ballots = weighted(3,&[(4,vec![0,1,2]),(3,vec![2,1,0]),(1,vec![1,2,0])]);
    assert_eq!(Some(A),evaluate_plurality(&ballots));
    assert_eq!(vec![8,9,7],borda_scores(&ballots));
    assert_eq!(Some(B),evaluate_borda(&ballots));
    assert_eq!(Some(B),PositionalScoring::borda(3).winner(&ballots));
    // weights beyond the end of the vector score nothing, so this is plurality.
    assert_eq!(Some(A),PositionalScoring::new(vec![1]).winner(&ballots));
}

#[test]
fn test_irv_excludes_and_transfers() {
    // A 8, C 7, B 6. B is excluded, their votes go to C, who then has a majority.
    let ballots = weighted(3,&[(8,vec![0,1,2]),(7,vec![2,1,0]),(6,vec![1,2,0])]);
    let transcript = instant_runoff_transcript(&ballots);
    assert_eq!(Some(C),transcript.winner);
    assert_eq!(2,transcript.rounds.len());
    assert_eq!(vec![8,6,7],transcript.rounds[0].tallies);
    assert_eq!(Some(B),transcript.rounds[0].excluded);
    assert_eq!(vec![8,0,13],transcript.rounds[1].tallies);
    assert_eq!(None,transcript.rounds[1].excluded);
}

#[test]
fn test_irv_excludes_candidates_with_no_votes() {
    // D has no first preferences and is excluded first, their absence changing nothing.
    let ballots = weighted(4,&[(3,vec![0,3,1,2]),(2,vec![1,3,0,2]),(2,vec![2,3,1,0])]);
    let transcript = instant_runoff_transcript(&ballots);
    assert_eq!(Some(CandidateIndex(3)),transcript.rounds[0].excluded);
    // then B and C tie on 2, B (lower index) is excluded, and A gets a majority.
    assert_eq!(Some(B),transcript.rounds[1].excluded);
    assert_eq!(Some(A),transcript.winner);
}

#[test]
fn test_ranked_pairs_breaks_cycle() {
    // A beats B by 3, B beats C by 5, C beats A by 1. The weakest victory, C over A, is not locked.
    let ballots = weighted(3,&[(4,vec![0,1,2]),(3,vec![1,2,0]),(2,vec![2,0,1])]);
    let tally = PairwiseTally::new(&ballots);
    assert_eq!(3,tally.margin(A,B));
    assert_eq!(5,tally.margin(B,C));
    assert_eq!(1,tally.margin(C,A));
    assert_eq!(None,tally.condorcet_winner());
    let victories = voting::rules::ranked_pairs::sorted_victories(&tally);
    assert_eq!(vec![(B,C,5),(A,B,3),(C,A,1)],victories.iter().map(|v|(v.winner,v.loser,v.margin)).collect::<Vec<_>>());
    let graph = voting::rules::ranked_pairs::lock_victories(3,&victories);
    assert!(graph.is_locked(B,C));
    assert!(graph.is_locked(A,B));
    assert!(!graph.is_locked(C,A));
    assert_eq!(Ok(Some(A)),evaluate_ranked_pairs(&ballots));
}

#[test]
fn test_irv_can_miss_the_condorcet_winner() {
    // B beats both A and C head to head, but has the fewest first preferences so is excluded first by IRV.
    let ballots = weighted(3,&[(8,vec![0,1,2]),(7,vec![2,1,0]),(6,vec![1,2,0])]);
    assert_eq!(Some(B),PairwiseTally::new(&ballots).condorcet_winner());
    assert_eq!(Some(C),evaluate_irv(&ballots));
    assert_eq!(Ok(Some(B)),evaluate_ranked_pairs(&ballots));
    assert_eq!(Some(A),evaluate_plurality(&ballots));
}

#[test]
fn test_properties_on_random_elections() {
    let mut rng = ChaCha20Rng::seed_from_u64(2026);
    for trial in 0..300 {
        let num_candidates = 2+trial%5;
        let num_voters = 1+trial%23;
        let ballots = impartial_culture(num_voters,num_candidates,&mut rng);
        // Borda points per ballot always add to m(m-1)/2.
        let total_borda : usize = borda_scores(&ballots).iter().sum();
        assert_eq!(num_voters*num_candidates*(num_candidates-1)/2,total_borda);
        assert_eq!(num_voters,count_first_preferences(&ballots).iter().sum::<usize>());
        let tally = PairwiseTally::new(&ballots);
        for a in ballots.candidates() {
            for b in ballots.candidates() {
                if a!=b { assert_eq!(num_voters,tally.prefer(a,b)+tally.prefer(b,a)); }
            }
        }
        let ranked_pairs = evaluate_ranked_pairs(&ballots).unwrap();
        assert!(ranked_pairs.is_some());
        if let Some(condorcet) = tally.condorcet_winner() {
            assert_eq!(Some(condorcet),ranked_pairs,"Trial {}",trial);
        }
        for rule in Rules::all() {
            assert!(rule.winner(&ballots).unwrap().is_some());
        }
    }
}

#[test]
fn test_rules_by_name() {
    for rule in Rules::all() {
        assert_eq!(Ok(rule),rule.to_string().parse::<Rules>());
    }
    assert_eq!(Ok(Rules::RankedPairs),"Tideman".parse::<Rules>());
    assert!("Approval".parse::<Rules>().is_err());
}

#[test]
fn test_deserialization_validates() {
    let good : BallotSet = serde_json::from_str(r#"{"num_candidates":3,"ballots":[[0,1,2],[2,1,0]]}"#).unwrap();
    assert_eq!(2,good.num_voters());
    assert!(serde_json::from_str::<BallotSet>(r#"{"num_candidates":3,"ballots":[[0,1,2],[0,0,1]]}"#).is_err());
    assert!(serde_json::from_str::<BallotSet>(r#"{"num_candidates":3,"ballots":[[0,1]]}"#).is_err());
}

//! Breadth-first ladder search
//!
//! Words are nodes and single-letter substitutions are edges. The graph is
//! never materialised: successors are generated on expansion by mutating
//! each position through `a..=z` and probing the dictionary.

use super::tree::{LadderTree, NodeId};
use crate::core::{Dictionary, Ladder, for_each_mutation};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Tunables for a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many expansions; `None` runs to completion
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_expansions: None,
        }
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest ladder from start to goal
    Found(Ladder),
    /// The frontier ran dry before the goal was reached
    NoPath,
    /// The expansion limit was hit first
    Aborted { expansions: usize },
}

impl SearchOutcome {
    #[must_use]
    pub const fn ladder(&self) -> Option<&Ladder> {
        match self {
            Self::Found(ladder) => Some(ladder),
            Self::NoPath | Self::Aborted { .. } => None,
        }
    }

    #[must_use]
    pub fn into_ladder(self) -> Option<Ladder> {
        match self {
            Self::Found(ladder) => Some(ladder),
            Self::NoPath | Self::Aborted { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words whose successors were generated
    pub expansions: usize,
    /// Nodes created in the ladder tree, root included
    pub nodes_created: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
    /// Frontier entries dropped because their word was already expanded
    pub stale_pops: usize,
    /// Depth of the deepest node popped from the frontier
    pub depth_reached: usize,
}

/// Everything a finished search leaves behind
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub tree: LadderTree,
}

/// State for one breadth-first search run
///
/// The frontier is strictly FIFO and the explored set holds words that have
/// already been expanded. Successor admission consults the explored set, not
/// node identity.
pub struct LadderSearch<'a> {
    dictionary: &'a Dictionary,
    goal: String,
    config: SearchConfig,
    tree: LadderTree,
    frontier: VecDeque<NodeId>,
    explored: FxHashSet<String>,
    stats: SearchStats,
}

impl<'a> LadderSearch<'a> {
    /// Prepare a search from `start` to `goal`
    ///
    /// Both words are expected to be validated dictionary members of equal
    /// length; see [`crate::solver::validate_query`].
    #[must_use]
    pub fn new(start: &str, goal: &str, dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            goal: goal.to_string(),
            config: SearchConfig::default(),
            tree: LadderTree::with_root(start),
            frontier: VecDeque::new(),
            explored: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the search to completion
    ///
    /// # Examples
    /// ```
    /// use word_ladder::solver::{LadderSearch, SearchOutcome};
    /// use word_ladder::wordlists::loader::dictionary_from_slice;
    ///
    /// let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog"]);
    /// let report = LadderSearch::new("cat", "dog", &dict).run();
    ///
    /// let ladder = report.outcome.ladder().unwrap();
    /// assert_eq!(ladder.rungs(), ["cat", "cot", "cog", "dog"]);
    /// ```
    #[must_use]
    pub fn run(mut self) -> SearchReport {
        let outcome = self.search();
        self.stats.nodes_created = self.tree.len();

        match &outcome {
            SearchOutcome::Found(ladder) => info!(
                steps = ladder.steps(),
                expansions = self.stats.expansions,
                "ladder found"
            ),
            SearchOutcome::NoPath => info!(
                start = self.tree.word(self.tree.root()),
                goal = %self.goal,
                expansions = self.stats.expansions,
                "no path exists"
            ),
            SearchOutcome::Aborted { expansions } => {
                info!(expansions, "search aborted at expansion limit");
            }
        }

        SearchReport {
            outcome,
            stats: self.stats,
            tree: self.tree,
        }
    }

    fn search(&mut self) -> SearchOutcome {
        let root = self.tree.root();

        // A one-word ladder needs no expansion
        if self.tree.word(root) == self.goal {
            return SearchOutcome::Found(Ladder::new(self.tree.path_to(root)));
        }

        if let Some(aborted) = self.check_limit() {
            return aborted;
        }
        self.expand(root);

        while let Some(current) = self.frontier.pop_front() {
            let depth = self.tree.depth(current);
            self.stats.depth_reached = self.stats.depth_reached.max(depth);

            if self.tree.word(current) == self.goal {
                return SearchOutcome::Found(Ladder::new(self.tree.path_to(current)));
            }

            // An earlier copy of this word was already expanded
            if self.explored.contains(self.tree.word(current)) {
                self.stats.stale_pops += 1;
                continue;
            }

            if let Some(aborted) = self.check_limit() {
                return aborted;
            }
            self.expand(current);
        }

        SearchOutcome::NoPath
    }

    fn check_limit(&self) -> Option<SearchOutcome> {
        match self.config.max_expansions {
            Some(limit) if self.stats.expansions >= limit => Some(SearchOutcome::Aborted {
                expansions: self.stats.expansions,
            }),
            _ => None,
        }
    }

    /// Mark the node's word explored, then admit each unexplored dictionary
    /// mutation once as a child appended to the frontier
    fn expand(&mut self, id: NodeId) {
        let word = self.tree.word(id).to_string();
        self.explored.insert(word.clone());
        self.stats.expansions += 1;

        let mut generated: FxHashSet<String> = FxHashSet::default();
        let mut admitted: Vec<String> = Vec::new();

        for_each_mutation(&word, |candidate| {
            if self.dictionary.contains(candidate)
                && !self.explored.contains(candidate)
                && generated.insert(candidate.to_string())
            {
                admitted.push(candidate.to_string());
            }
        });

        debug!(word = %word, successors = admitted.len(), "expanded");

        for successor in admitted {
            let child = self.tree.add_child(id, successor);
            self.frontier.push_back(child);
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }
}

/// Find a shortest ladder from `start` to `goal`
///
/// Returns `None` when no ladder exists.
///
/// # Examples
/// ```
/// use word_ladder::solver::find_ladder;
/// use word_ladder::wordlists::loader::dictionary_from_slice;
///
/// let dict = dictionary_from_slice(&["cat", "dog"]);
/// assert!(find_ladder("cat", "dog", &dict).is_none());
/// ```
#[must_use]
pub fn find_ladder(start: &str, goal: &str, dictionary: &Dictionary) -> Option<Ladder> {
    LadderSearch::new(start, goal, dictionary)
        .run()
        .outcome
        .into_ladder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_adjacent;
    use crate::wordlists::loader::dictionary_from_slice;
    use rustc_hash::FxHashMap;

    fn rungs(ladder: &Ladder) -> Vec<&str> {
        ladder.rungs().iter().map(String::as_str).collect()
    }

    /// Shortest ladder length by plain BFS over precomputed adjacency
    fn oracle_length(start: &str, goal: &str, dict: &Dictionary) -> Option<usize> {
        let words: Vec<&str> = dict.words_of_length(start.len());
        let mut distance: FxHashMap<&str, usize> = FxHashMap::default();
        let mut queue = VecDeque::new();
        distance.insert(start, 1);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let d = distance[current];
            if current == goal {
                return Some(d);
            }
            for &next in &words {
                if is_adjacent(current, next) && !distance.contains_key(next) {
                    distance.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    #[test]
    fn simple_ladder() {
        let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog"]);
        let ladder = find_ladder("cat", "dog", &dict).unwrap();

        assert_eq!(rungs(&ladder), vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(ladder.len(), 4);
    }

    #[test]
    fn unreachable_goal_reports_no_path() {
        let dict = dictionary_from_slice(&["cat", "dog"]);
        let report = LadderSearch::new("cat", "dog", &dict).run();

        assert_eq!(report.outcome, SearchOutcome::NoPath);
        assert_eq!(report.stats.expansions, 1);
    }

    #[test]
    fn start_equals_goal_is_single_word() {
        let dict = dictionary_from_slice(&["cat", "cot"]);
        let report = LadderSearch::new("cat", "cat", &dict).run();

        let ladder = report.outcome.ladder().unwrap();
        assert_eq!(rungs(ladder), vec!["cat"]);
        assert_eq!(report.stats.expansions, 0);
        assert_eq!(report.tree.len(), 1);
    }

    #[test]
    fn adjacent_goal_found_after_root_expansion() {
        let dict = dictionary_from_slice(&["cat", "cot"]);
        let ladder = find_ladder("cat", "cot", &dict).unwrap();

        assert_eq!(rungs(&ladder), vec!["cat", "cot"]);
    }

    #[test]
    fn tie_break_prefers_earliest_position_then_letter() {
        // cat -> bat -> bag and cat -> cag -> bag are both two steps; the
        // position-0 mutation is generated first.
        let dict = dictionary_from_slice(&["cat", "cag", "bat", "bag"]);
        let ladder = find_ladder("cat", "bag", &dict).unwrap();

        assert_eq!(rungs(&ladder), vec!["cat", "bat", "bag"]);
    }

    #[test]
    fn tie_break_prefers_earlier_letter_at_same_position() {
        // Only one route reaches "mag" and one reaches "hag"
        let dict = dictionary_from_slice(&["cat", "mat", "hat", "mag", "hag"]);
        let ladder = find_ladder("cat", "mag", &dict).unwrap();

        assert_eq!(rungs(&ladder), vec!["cat", "mat", "mag"]);

        let ladder = find_ladder("cat", "hag", &dict).unwrap();
        assert_eq!(rungs(&ladder), vec!["cat", "hat", "hag"]);

        // Two three-step routes reach "zag"; "h" sorts before "m"
        let dict = dictionary_from_slice(&["cat", "mat", "hat", "hag", "mag", "zag"]);
        let ladder = find_ladder("cat", "zag", &dict).unwrap();
        assert_eq!(rungs(&ladder), vec!["cat", "hat", "hag", "zag"]);
    }

    #[test]
    fn ignores_words_of_other_lengths() {
        let dict = dictionary_from_slice(&["cat", "cats", "cot", "cots", "cog", "dog"]);
        let ladder = find_ladder("cat", "dog", &dict).unwrap();

        assert_eq!(rungs(&ladder), vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn prefers_shorter_of_two_routes() {
        let dict = dictionary_from_slice(&[
            "cold", "bold", "bolt", "boat", "coat", "cord", "card", "ward", "warm", "worm", "form",
            "farm",
        ]);
        let ladder = find_ladder("cold", "warm", &dict).unwrap();

        assert!(ladder.is_valid(&dict));
        assert_eq!(Some(ladder.len()), oracle_length("cold", "warm", &dict));
        assert_eq!(rungs(&ladder), vec!["cold", "cord", "card", "ward", "warm"]);
    }

    #[test]
    fn deterministic_across_runs() {
        let dict = dictionary_from_slice(&[
            "cat", "cot", "cog", "dog", "bat", "bog", "cag", "dot", "hat", "hot",
        ]);
        let first = find_ladder("cat", "dog", &dict);
        for _ in 0..5 {
            assert_eq!(find_ladder("cat", "dog", &dict), first);
        }
    }

    #[test]
    fn matches_oracle_on_every_pair() {
        let dict = dictionary_from_slice(&[
            "cat", "cot", "cog", "dog", "bat", "bog", "cag", "dot", "hat", "hot", "hit", "sit",
            "sat", "bag", "big", "dig", "dim", "him", "ham", "yam", "zen",
        ]);
        let words = dict.words_of_length(3);

        for &start in &words {
            for &goal in &words {
                let found = find_ladder(start, goal, &dict);
                let expected = oracle_length(start, goal, &dict);

                assert_eq!(found.as_ref().map(Ladder::len), expected, "{start} -> {goal}");
                if let Some(ladder) = found {
                    assert!(ladder.is_valid(&dict), "{start} -> {goal}: {ladder}");
                    assert_eq!(ladder.start(), Some(start));
                    assert_eq!(ladder.goal(), Some(goal));
                }
            }
        }
    }

    #[test]
    fn tree_parents_are_adjacent() {
        let dict = dictionary_from_slice(&[
            "cat", "cot", "cog", "dog", "bat", "bog", "cag", "dot", "hat", "hot",
        ]);
        let report = LadderSearch::new("cat", "zzz", &dict).run();
        let tree = &report.tree;

        assert_eq!(report.outcome, SearchOutcome::NoPath);
        for id in tree.ids().skip(1) {
            let parent = tree.node(id).parent().unwrap();
            assert!(is_adjacent(tree.word(parent), tree.word(id)));
            assert!(tree.children(parent).contains(&id));
        }
    }

    #[test]
    fn unexpanded_word_can_be_admitted_twice() {
        let dict = dictionary_from_slice(&[
            "cat", "cot", "cog", "dog", "bat", "bog", "cag", "dot", "hat", "hot",
        ]);
        let report = LadderSearch::new("cat", "zzz", &dict).run();
        let tree = &report.tree;

        // "hot" is reached from "hat" and again from "cot" before either copy is expanded
        let hot_parents: Vec<&str> = tree
            .ids()
            .filter(|&id| tree.word(id) == "hot")
            .filter_map(|id| tree.node(id).parent())
            .map(|parent| tree.word(parent))
            .collect();
        assert_eq!(hot_parents, ["hat", "cot"]);

        assert!(report.stats.stale_pops > 0);
        assert!(report.stats.nodes_created > dict.len());
        assert_eq!(report.stats.expansions, dict.len());
    }

    #[test]
    fn each_word_expanded_at_most_once() {
        let dict = dictionary_from_slice(&[
            "cat", "cot", "cog", "dog", "bat", "bog", "cag", "dot", "hat", "hot",
        ]);
        let report = LadderSearch::new("cat", "zzz", &dict).run();

        // Every reachable word is expanded exactly once
        assert_eq!(report.stats.expansions, dict.len());
    }

    #[test]
    fn expansion_limit_aborts() {
        let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog"]);
        let report = LadderSearch::new("cat", "dog", &dict)
            .with_config(SearchConfig::new().with_max_expansions(2))
            .run();

        assert_eq!(report.outcome, SearchOutcome::Aborted { expansions: 2 });
    }

    #[test]
    fn zero_limit_still_answers_trivial_query() {
        let dict = dictionary_from_slice(&["cat"]);
        let report = LadderSearch::new("cat", "cat", &dict)
            .with_config(SearchConfig::new().with_max_expansions(0))
            .run();

        assert!(report.outcome.is_found());
    }

    #[test]
    fn stats_track_frontier_and_depth() {
        let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog", "bat", "hat"]);
        let report = LadderSearch::new("cat", "dog", &dict).run();

        assert!(report.outcome.is_found());
        assert_eq!(report.stats.depth_reached, 3);
        assert!(report.stats.max_frontier >= 3);
        assert_eq!(report.stats.nodes_created, report.tree.len());
    }
}

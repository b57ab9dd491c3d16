use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::interpreter::matcher::keyword::KeywordId;

/// Index of the root state.
pub const ROOT: usize = 0;

/// One trie state.
///
/// States are owned by the automaton's arena; `fail` is a plain index used
/// only for lookups and never for ownership.
#[derive(Debug, Default)]
struct State {
    next:    FxHashMap<char, usize>,
    fail:    usize,
    /// Keywords completing here, including those inherited through failure
    /// links once the automaton is compiled. Own keywords come first, so
    /// longer keywords precede shorter suffixes.
    outputs: Vec<KeywordId>,
    /// How many leading entries of `outputs` were inserted directly.
    own:     usize,
}

/// A trie over a set of keywords with Aho-Corasick failure links.
///
/// Keywords are inserted one at a time; [`Automaton::compile`] then computes
/// failure links breadth-first. Inserting after a compile marks the automaton
/// stale until the next compile.
#[derive(Debug)]
pub struct Automaton {
    states:   Vec<State>,
    compiled: bool,
    patterns: usize,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Creates an automaton containing only the root state.
    #[must_use]
    pub fn new() -> Self {
        Self { states:   vec![State::default()],
               compiled: true,
               patterns: 0, }
    }

    /// Adds the path spelled by `symbols` and records `id` at its end.
    ///
    /// An empty symbol sequence is ignored; a keyword completing at the root
    /// would otherwise be reported at every position.
    pub fn insert(&mut self, symbols: impl IntoIterator<Item = char>, id: KeywordId) {
        let mut current = ROOT;
        for symbol in symbols {
            current = match self.states[current].next.get(&symbol) {
                Some(&child) => child,
                None => {
                    let child = self.states.len();
                    self.states.push(State::default());
                    self.states[current].next.insert(symbol, child);
                    child
                },
            };
        }

        if current == ROOT {
            return;
        }

        let state = &mut self.states[current];
        state.outputs.insert(state.own, id);
        state.own += 1;
        self.patterns += 1;
        self.compiled = false;
    }

    /// Whether no keyword has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Whether failure links are up to date with the inserted keywords.
    #[must_use]
    pub const fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// Number of trie states, root included.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Computes failure links and propagates outputs along them.
    ///
    /// States are visited breadth-first, so a state's failure target (which
    /// is always shallower) already carries its complete output set when
    /// the state inherits from it.
    pub fn compile(&mut self) {
        if self.compiled {
            return;
        }

        // Outputs inherited by an earlier compile must not be duplicated.
        self.reset_links();

        let mut queue = VecDeque::new();
        let root_children: Vec<usize> = self.states[ROOT].next.values().copied().collect();
        for child in root_children {
            self.states[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let current_fail = self.states[current].fail;
            let children: Vec<(char, usize)> =
                self.states[current].next.iter().map(|(&symbol, &child)| (symbol, child)).collect();

            for (symbol, child) in children {
                queue.push_back(child);

                let fail = self.transition(current_fail, symbol);
                self.states[child].fail = fail;

                let inherited = self.states[fail].outputs.clone();
                self.states[child].outputs.extend(inherited);
            }
        }

        self.compiled = true;
    }

    /// Follows the goto function from `state` on `symbol`, falling back
    /// along failure links on a miss. Never rescans input.
    #[must_use]
    pub fn transition(&self, state: usize, symbol: char) -> usize {
        let mut state = state;
        loop {
            if let Some(&next) = self.states[state].next.get(&symbol) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].fail;
        }
    }

    /// Keywords completing at `state`.
    #[must_use]
    pub fn outputs(&self, state: usize) -> &[KeywordId] {
        &self.states[state].outputs
    }

    fn reset_links(&mut self) {
        for state in &mut self.states {
            state.fail = ROOT;
            state.outputs.truncate(state.own);
        }
    }
}

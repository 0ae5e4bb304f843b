//! Arena entries for the exhaustive search tree (C5).
//!
//! States are stored by index in a flat `Vec` rather than linked by owned
//! parent/child pointers: Rust's ownership rules make a classic
//! parent-pointer tree awkward (a child can't hold a strong reference back
//! to its parent without `Rc`/`RefCell`), and an arena sidesteps that
//! entirely while still letting every state record exactly one parent index
//! for path reconstruction.

use crate::action::{PlayerAction, SolverInstance};
use crate::graph::Node;
use crate::location::Location;

/// One node in the search tree: the position it represents, the action that
/// produced it from its parent, and the parent's arena index (`None` at the
/// root).
pub struct GameState {
    pub instance: SolverInstance,
    pub parent: Option<usize>,
    pub action: Option<PlayerAction>,
}

/// A hashable fingerprint of a position, used to avoid re-expanding a state
/// the search has already reached by a different route.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    tiles: Vec<Node>,
    leftover: Node,
    player_location: Location,
}

impl StateKey {
    pub fn of(instance: &SolverInstance) -> StateKey {
        let extent = instance.graph.extent();
        let tiles = (0..extent)
            .flat_map(|row| (0..extent).map(move |column| Location::new(row, column)))
            .map(|location| *instance.graph.node(location))
            .collect();
        StateKey { tiles, leftover: *instance.graph.leftover(), player_location: instance.player_location }
    }
}

//! Solver core for the sliding-tile Labyrinth board game.
//!
//! This crate implements the two search engines that choose a computer
//! player's next action: an exhaustive breadth-first search (`exh`) for the
//! single-player case, and a negamax-with-iterative-deepening search (`mm`)
//! for the two-player zero-sum case. Both engines share a maze graph model
//! (`graph`), reachability algorithms (`reachability`), and shift geometry
//! (`geometry`).
//!
//! Instance file parsing, CSV benchmarking, FFI bindings, procedural graph
//! builders, and command-line entry points are external collaborators and
//! are not part of this crate.

pub mod action;
pub mod eval;
pub mod exh;
pub mod geometry;
pub mod graph;
pub mod location;
pub mod mm;
pub mod reachability;
pub mod sets;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;
    }
}

pub mod prelude {
    pub use crate::action::{PlayerAction, Position, ShiftAction, SolverInstance};
    pub use crate::eval::{Evaluation, Evaluator};
    pub use crate::geometry::{opposing_shift, rotate_mask, translate_by_shift};
    pub use crate::graph::{MazeGraph, Node, OutPaths, Rotation};
    pub use crate::location::{Location, Offset};
    pub use crate::reachability::ReachableNode;
    pub use crate::utils::prelude::*;
}

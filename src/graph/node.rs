//! Tiles: node identity, wall openings, and rotation (part of C2).

use crate::geometry::rotate_mask;

/// Bitmask of wall openings on a tile, in its *unrotated* orientation.
///
/// bit 0 = North, bit 1 = East, bit 2 = South, bit 3 = West.
pub type OutPaths = u8;

pub const NORTH: OutPaths = 0b0001;
pub const EAST: OutPaths = 0b0010;
pub const SOUTH: OutPaths = 0b0100;
pub const WEST: OutPaths = 0b1000;

/// All four cardinal directions, in the bit order used by [`OutPaths`].
pub const DIRECTIONS: [OutPaths; 4] = [NORTH, EAST, SOUTH, WEST];

/// The opposite direction bit, used when checking that two neighboring tiles'
/// openings point at each other.
pub fn opposite(direction: OutPaths) -> OutPaths {
    match direction {
        NORTH => SOUTH,
        SOUTH => NORTH,
        EAST => WEST,
        WEST => EAST,
        _ => unreachable!("direction {direction:#06b} is not a single cardinal bit"),
    }
}

/// A tile's rotation, normalized to quarter turns (0..=3) regardless of
/// whatever degree representation a caller (e.g. a future FFI layer) uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0);

    /// Constructs a rotation from a quarter-turn count, wrapping modulo 4.
    pub fn from_quarter_turns(quarter_turns: u8) -> Rotation {
        Rotation(quarter_turns % 4)
    }

    /// Constructs a rotation from a degree value (0/90/180/270, or any
    /// multiple thereof); this is the only place degrees appear in the core,
    /// kept for the convenience of a future FFI boundary (§6).
    pub fn from_degrees(degrees: i32) -> Rotation {
        let quarter_turns = degrees.div_euclid(90).rem_euclid(4) as u8;
        Rotation(quarter_turns)
    }

    pub fn quarter_turns(&self) -> u8 {
        self.0
    }

    pub fn degrees(&self) -> i32 {
        self.0 as i32 * 90
    }
}

/// One tile: a stable identity, its wall-opening shape, and its current
/// rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub node_id: u32,
    pub out_paths: OutPaths,
    pub rotation: Rotation,
}

impl Default for Node {
    fn default() -> Node {
        Node { node_id: 0, out_paths: 0, rotation: Rotation::ZERO }
    }
}

impl Node {
    pub fn new(node_id: u32, out_paths: OutPaths, rotation: Rotation) -> Node {
        Node { node_id, out_paths, rotation }
    }

    /// The wall openings as they actually face, after applying `rotation` to
    /// the unrotated `out_paths` mask.
    pub fn effective_out_paths(&self) -> OutPaths {
        rotate_mask(self.out_paths, self.rotation.quarter_turns())
    }

    pub fn has_out_path(&self, direction: OutPaths) -> bool {
        self.effective_out_paths() & direction != 0
    }

    /// Whether this tile's *shape* (independent of its current rotation) is a
    /// straight piece (North|South or East|West): such pieces look the same
    /// after a 180° turn, so only rotations 0 and 90 are distinct insertion
    /// choices (§4.5 Rotation symmetry).
    pub fn is_straight(&self) -> bool {
        rotate_mask(self.out_paths, 2) == self.out_paths
    }

    /// Number of distinct rotations worth trying when inserting this tile:
    /// 2 for a straight piece, 4 otherwise.
    pub fn rotation_symmetry(&self) -> u8 {
        if self.is_straight() {
            2
        } else {
            4
        }
    }
}

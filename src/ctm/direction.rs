use bitvec::prelude::*;
use std::fmt;

/// Compass direction of a neighbouring block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North
    N,
    /// North-east
    NE,
    /// East
    E,
    /// South-east
    SE,
    /// South
    S,
    /// South-west
    SW,
    /// West
    W,
    /// North-west
    NW,
}

impl Direction {
    /// All eight directions in clockwise order starting at north
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub const fn bit(self) -> usize {
        match self {
            Self::N => 0,
            Self::NE => 1,
            Self::E => 2,
            Self::SE => 3,
            Self::S => 4,
            Self::SW => 5,
            Self::W => 6,
            Self::NW => 7,
        }
    }

    /// Lowercase compass code (`"n"`, `"ne"`, ...)
    pub const fn code(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
        }
    }

    /// Parse a compass code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Set of neighbour directions sharing a tile's material
///
/// One bit per [`Direction`], so duplicates are impossible and
/// iteration always follows compass order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConnectionSet {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl ConnectionSet {
    /// Create a set with no connected neighbours
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a list of directions
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut set = Self::empty();
        for &direction in directions {
            set.insert(direction);
        }
        set
    }

    /// Mark a direction as connected
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.bit(), true);
    }

    /// Test whether a direction is connected
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.bit()).as_deref() == Some(&true)
    }

    /// Test whether both directions are connected
    pub fn contains_both(&self, first: Direction, second: Direction) -> bool {
        self.contains(first) && self.contains(second)
    }

    /// Number of connected directions
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no direction is connected
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Connected directions in compass order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|bit| Direction::ALL.get(bit).copied())
    }
}

impl FromIterator<Direction> for ConnectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Display for ConnectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.iter().map(Direction::code).collect();
        write!(f, "{{{}}}", codes.join(", "))
    }
}

impl fmt::Debug for ConnectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectionSet{self}")
    }
}

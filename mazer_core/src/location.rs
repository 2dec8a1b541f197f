//! Integer grid coordinates and the four movement offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Cell coordinate on the maze floor (`x` across, `z` deep)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub z: i32,
}

impl Location {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Straight-line distance between cell coordinates
    pub fn euclidean_distance(&self, other: Location) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dz = (other.z - self.z) as f64;
        (dx * dx + dz * dz).sqrt()
    }

    /// True when `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: Location) -> bool {
        (self.x - other.x).abs() + (self.z - other.z).abs() == 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// Unit offsets for 4-directional movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Expansion order. Equal-cost ties depend on it, so it never changes.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, -1),
        }
    }
}

impl Add<Direction> for Location {
    type Output = Location;

    fn add(self, direction: Direction) -> Location {
        let (dx, dz) = direction.offset();
        Location::new(self.x + dx, self.z + dz)
    }
}

impl Add<Location> for Direction {
    type Output = Location;

    fn add(self, location: Location) -> Location {
        location + self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_direction_addition() {
        let origin = Location::new(4, 7);
        assert_eq!(origin + Direction::Right, Location::new(5, 7));
        assert_eq!(origin + Direction::Up, Location::new(4, 8));
        assert_eq!(Direction::Left + origin, Location::new(3, 7));
        assert_eq!(Direction::Down + origin, Location::new(4, 6));
    }

    #[test]
    fn test_hash_identity() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Location::new(2, 3)));
        assert!(!seen.insert(Location::new(2, 3)));
        assert!(seen.insert(Location::new(3, 2)));
    }

    #[test]
    fn test_euclidean_distance() {
        let a = Location::new(1, 1);
        assert_eq!(a.euclidean_distance(Location::new(4, 5)), 5.0);
        assert_eq!(a.euclidean_distance(a), 0.0);
        assert!((a.euclidean_distance(Location::new(2, 2)) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_adjacency() {
        let a = Location::new(3, 3);
        for direction in Direction::ALL {
            assert!(a.is_adjacent(a + direction));
        }
        assert!(!a.is_adjacent(a));
        assert!(!a.is_adjacent(Location::new(4, 4)));
    }
}

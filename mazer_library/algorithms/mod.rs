//! Pure computational algorithms for maze search
//!
//! Nothing in here touches a terminal or a file. Randomness is always passed in.
//!
//! # Available Algorithms
//!
//! ## Representation
//! - **grid**: occupancy grid with border-aware passability and neighbour counts
//!
//! ## Generation
//! - **generator**: random fill, depth-first backtracker, endpoint selection
//!
//! ## Search
//! - **astar**: incremental A* with per-step expansion reports and path reconstruction

pub mod astar;
pub mod generator;
pub mod grid;

use crate::location::Location;
use thiserror::Error;

/// Errors raised by the maze grid, the search engine and configuration loading
#[derive(Error, Debug)]
pub enum MazeError {
    /// An operation was called out of sequence (e.g. expanding before a search began)
    #[error("Cannot {operation} while search is {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },

    /// A start or goal location is not a passable interior cell
    #[error("Invalid location {location}: {reason}")]
    InvalidLocation { location: Location, reason: String },

    /// The open set emptied before the goal was closed. No path exists.
    #[error("Search exhausted: no path from {start} to {goal}")]
    SearchExhausted { start: Location, goal: Location },

    /// Parent links did not lead back to the start node
    #[error("Corrupt parent chain at {at}")]
    CorruptChain { at: Location },

    #[error("Search did not finish within {limit} steps")]
    StepLimitReached { limit: usize },

    #[error("Need at least two open cells to place start and goal, found {found}")]
    NotEnoughOpenCells { found: usize },

    #[error("Invalid maze layout: {0}")]
    InvalidMaze(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// True for the legitimate "no path exists" outcome
    pub fn is_no_path(&self) -> bool {
        matches!(self, MazeError::SearchExhausted { .. })
    }

    /// True for errors caused by calling the engine incorrectly
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            MazeError::InvalidState { .. } | MazeError::InvalidLocation { .. }
        )
    }
}

pub type MazeResult<T> = Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MazeError::SearchExhausted {
            start: Location::new(1, 1),
            goal: Location::new(3, 3),
        };
        assert_eq!(
            err.to_string(),
            "Search exhausted: no path from (1, 1) to (3, 3)"
        );
        assert!(err.is_no_path());
        assert!(!err.is_usage_error());

        let err = MazeError::InvalidState {
            operation: "expand",
            state: "Idle".to_string(),
        };
        assert!(err.to_string().contains("Cannot expand while search is Idle"));
        assert!(err.is_usage_error());
    }
}

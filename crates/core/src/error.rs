use crate::coordinate::Coordinate;

/// Failures raised by the in-memory mission while handling rover operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    #[error("Planet dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Obstacle {0} lies outside the planet surface")]
    ObstacleOutOfBounds(Coordinate),
    #[error("Position {0} lies outside the planet surface")]
    PositionOutOfBounds(Coordinate),
    #[error("Position {0} is occupied by an obstacle")]
    PositionBlocked(Coordinate),
    #[error("Unknown rover command: '{0}'")]
    UnknownCommand(String),
    #[error("Obstacle detected at {obstacle}, rover stopped at {stopped_at}")]
    ObstacleDetected {
        obstacle: Coordinate,
        stopped_at: Coordinate,
    },
}

/// Failures raised by an input source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input stream closed")]
    Closed,
    #[error("Failed to read operator input: {0}")]
    Read(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_error_display() {
        let err = MissionError::ObstacleDetected {
            obstacle: Coordinate::new(2, 3),
            stopped_at: Coordinate::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "Obstacle detected at (2, 3), rover stopped at (2, 2)"
        );

        let err = MissionError::UnknownCommand("x".to_string());
        assert_eq!(err.to_string(), "Unknown rover command: 'x'");
    }

    #[test]
    fn test_input_error_display() {
        assert_eq!(InputError::Closed.to_string(), "Input stream closed");
    }
}

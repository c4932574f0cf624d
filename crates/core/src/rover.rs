use crate::{
    collaborators::Position, coordinate::Coordinate, error::MissionError, planet::Planet,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit step taken when moving forward. North increases `y`.
    fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::East => write!(f, "East"),
            Direction::South => write!(f, "South"),
            Direction::West => write!(f, "West"),
        }
    }
}

/// A single command understood by the in-memory rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoverCommand {
    Forward,
    Left,
    Right,
}

impl RoverCommand {
    pub fn parse(token: &str) -> Result<Self, MissionError> {
        match token {
            "f" => Ok(RoverCommand::Forward),
            "l" => Ok(RoverCommand::Left),
            "r" => Ok(RoverCommand::Right),
            other => Err(MissionError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rover {
    coordinate: Coordinate,
    direction: Direction,
}

impl Rover {
    /// Lands a rover at `at`, facing North.
    pub fn land(planet: &Planet, at: Coordinate) -> Result<Self, MissionError> {
        if !planet.contains(at) {
            return Err(MissionError::PositionOutOfBounds(at));
        }
        if planet.is_blocked(at) {
            return Err(MissionError::PositionBlocked(at));
        }
        Ok(Self {
            coordinate: at,
            direction: Direction::North,
        })
    }

    pub fn position(&self) -> Position {
        Position {
            coordinate: self.coordinate,
            direction: self.direction,
        }
    }

    /// Executes one command. A forward move into an obstacle leaves the rover
    /// where it is.
    pub fn execute(&mut self, command: RoverCommand, planet: &Planet) -> Result<(), MissionError> {
        match command {
            RoverCommand::Left => self.direction = self.direction.turn_left(),
            RoverCommand::Right => self.direction = self.direction.turn_right(),
            RoverCommand::Forward => {
                let (dx, dy) = self.direction.offset();
                let next = planet.wrap(Coordinate::new(
                    self.coordinate.x + dx,
                    self.coordinate.y + dy,
                ));
                if planet.is_blocked(next) {
                    return Err(MissionError::ObstacleDetected {
                        obstacle: next,
                        stopped_at: self.coordinate,
                    });
                }
                self.coordinate = next;
            }
        }
        Ok(())
    }
}

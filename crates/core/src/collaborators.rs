//! Rover Collaborator Contracts
//!
//! The session never touches planet or rover state directly. Everything it
//! shows or changes goes through the four capabilities defined here, which
//! are injected at construction so the session can be driven against the
//! in-memory mission, a remote rover, or test doubles alike.

use crate::{command::CommandSequence, coordinate::Coordinate, rover::Direction};
use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::{fmt, sync::Arc};

/// Static details of the planet the rover operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetInfo {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Coordinate>,
}

impl fmt::Display for PlanetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{}), obstacles: ", self.name, self.width, self.height)?;
        if self.obstacles.is_empty() {
            return write!(f, "none");
        }
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{obstacle}")?;
        }
        Ok(())
    }
}

/// Where the rover is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub coordinate: Coordinate,
    pub direction: Direction,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.coordinate, self.direction)
    }
}

/// Retrieves the details of the planet being explored.
///
/// Called once while the session initializes and again every time the
/// operator asks for planet details. Results are never cached by the caller,
/// so implementations may return fresh data on each call.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlanetDetails: Send + Sync {
    async fn describe_planet(&self) -> Result<PlanetInfo>;
}

/// Retrieves the rover's current position.
///
/// The session renders the result right after placing the rover, after every
/// batch of commands, and on demand from the menu.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoverPosition: Send + Sync {
    async fn describe_rover_position(&self) -> Result<Position>;
}

/// Executes movement and turning commands on the rover.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoverCommands: Send + Sync {
    /// Applies the tokens in order.
    ///
    /// # Arguments
    ///
    /// * `commands` - One token per character the operator typed, including
    ///   spaces and punctuation. Interpreting or rejecting each token is
    ///   entirely up to the implementation.
    ///
    /// # Returns
    ///
    /// `Ok(())` once every token has been applied. An error ends the
    /// operator's session.
    async fn apply_rover_commands(&self, commands: CommandSequence) -> Result<()>;
}

/// Places the rover on the surface before any other command is sent.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoverPlacement: Send + Sync {
    /// Sets the rover's starting cell.
    ///
    /// # Arguments
    ///
    /// * `x` - The operator's X answer, already coerced to an integer.
    /// * `y` - The operator's Y answer, already coerced to an integer.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the rover has been placed. Bounds and obstacle checks
    /// belong to the implementation; an error ends the operator's session.
    async fn set_rover_initial_position(&self, x: i32, y: i32) -> Result<()>;
}

/// The set of collaborators a session is constructed with.
#[derive(Clone)]
pub struct Collaborators {
    pub planet: Arc<dyn PlanetDetails>,
    pub position: Arc<dyn RoverPosition>,
    pub commands: Arc<dyn RoverCommands>,
    pub placement: Arc<dyn RoverPlacement>,
}

impl Collaborators {
    /// Uses one shared implementation for all four capabilities.
    pub fn from_shared<T>(mission: Arc<T>) -> Self
    where
        T: PlanetDetails + RoverPosition + RoverCommands + RoverPlacement + 'static,
    {
        Self {
            planet: mission.clone(),
            position: mission.clone(),
            commands: mission.clone(),
            placement: mission,
        }
    }
}

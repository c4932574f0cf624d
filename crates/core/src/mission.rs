//! In-Memory Mission
//!
//! A self-contained implementation of every rover collaborator, backed by a
//! `Planet` and a single `Rover` held in memory. It is what the console binary
//! runs against when no remote rover is available.

use crate::{
    collaborators::{
        PlanetDetails, PlanetInfo, Position, RoverCommands, RoverPlacement, RoverPosition,
    },
    command::CommandSequence,
    coordinate::Coordinate,
    planet::Planet,
    rover::{Rover, RoverCommand},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct MarsMission {
    planet: Planet,
    rover: Mutex<Rover>,
}

impl MarsMission {
    /// Creates a mission with the rover parked at the origin, facing North.
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            rover: Mutex::new(Rover::default()),
        }
    }
}

#[async_trait]
impl PlanetDetails for MarsMission {
    async fn describe_planet(&self) -> Result<PlanetInfo> {
        Ok(self.planet.info())
    }
}

#[async_trait]
impl RoverPosition for MarsMission {
    async fn describe_rover_position(&self) -> Result<Position> {
        Ok(self.rover.lock().await.position())
    }
}

#[async_trait]
impl RoverCommands for MarsMission {
    async fn apply_rover_commands(&self, commands: CommandSequence) -> Result<()> {
        // Reject the whole batch before moving if any token is unknown.
        let parsed = commands
            .tokens()
            .iter()
            .map(|token| RoverCommand::parse(token))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rover = self.rover.lock().await;
        for command in parsed {
            debug!(?command, "Executing rover command");
            rover.execute(command, &self.planet)?;
        }
        info!(position = %rover.position(), "Rover commands applied");
        Ok(())
    }
}

#[async_trait]
impl RoverPlacement for MarsMission {
    async fn set_rover_initial_position(&self, x: i32, y: i32) -> Result<()> {
        let landed = Rover::land(&self.planet, Coordinate::new(x, y))?;
        *self.rover.lock().await = landed;
        info!(x, y, "Rover landed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MissionError, rover::Direction};

    fn mission() -> MarsMission {
        let planet = Planet::new("Mars", 5, 5, [Coordinate::new(2, 2)]).unwrap();
        MarsMission::new(planet)
    }

    #[tokio::test]
    async fn test_describe_planet() {
        let info = mission().describe_planet().await.unwrap();
        assert_eq!(info.to_string(), "Mars (5x5), obstacles: (2, 2)");
    }

    #[tokio::test]
    async fn test_starts_at_origin_facing_north() {
        let position = mission().describe_rover_position().await.unwrap();
        assert_eq!(position.coordinate, Coordinate::new(0, 0));
        assert_eq!(position.direction, Direction::North);
    }

    #[tokio::test]
    async fn test_set_initial_position_then_move() {
        let mission = mission();
        mission.set_rover_initial_position(1, 1).await.unwrap();
        mission
            .apply_rover_commands(CommandSequence::from_raw("rff"))
            .await
            .unwrap();

        let position = mission.describe_rover_position().await.unwrap();
        assert_eq!(position.to_string(), "(3, 1) facing East");
    }

    #[tokio::test]
    async fn test_set_initial_position_out_of_bounds_fails() {
        let mission = mission();
        let err = mission.set_rover_initial_position(7, 0).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<MissionError>(),
            Some(&MissionError::PositionOutOfBounds(Coordinate::new(7, 0)))
        );
    }

    #[tokio::test]
    async fn test_unknown_token_rejects_whole_batch() {
        let mission = mission();
        let err = mission
            .apply_rover_commands(CommandSequence::from_raw("ffx"))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<MissionError>(),
            Some(&MissionError::UnknownCommand("x".to_string()))
        );

        let position = mission.describe_rover_position().await.unwrap();
        assert_eq!(position.coordinate, Coordinate::new(0, 0));
    }

    #[tokio::test]
    async fn test_obstacle_stops_rover_at_last_safe_cell() {
        let mission = mission();
        mission.set_rover_initial_position(2, 0).await.unwrap();
        let err = mission
            .apply_rover_commands(CommandSequence::from_raw("fff"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MissionError>(),
            Some(MissionError::ObstacleDetected { .. })
        ));

        let position = mission.describe_rover_position().await.unwrap();
        assert_eq!(position.coordinate, Coordinate::new(2, 1));
    }
}

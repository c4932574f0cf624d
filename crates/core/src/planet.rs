use crate::{collaborators::PlanetInfo, coordinate::Coordinate, error::MissionError};
use std::collections::BTreeSet;

/// A rectangular, wrap-around planet surface with fixed obstacles.
///
/// Valid cells span `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct Planet {
    name: String,
    width: i32,
    height: i32,
    obstacles: BTreeSet<Coordinate>,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, MissionError> {
        if width <= 0 || height <= 0 {
            return Err(MissionError::InvalidDimensions { width, height });
        }
        let mut planet = Self {
            name: name.into(),
            width,
            height,
            obstacles: BTreeSet::new(),
        };
        for obstacle in obstacles {
            if !planet.contains(obstacle) {
                return Err(MissionError::ObstacleOutOfBounds(obstacle));
            }
            planet.obstacles.insert(obstacle);
        }
        Ok(planet)
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        (0..self.width).contains(&at.x) && (0..self.height).contains(&at.y)
    }

    pub fn is_blocked(&self, at: Coordinate) -> bool {
        self.obstacles.contains(&at)
    }

    /// Folds a coordinate that stepped off one edge back onto the opposite edge.
    pub fn wrap(&self, at: Coordinate) -> Coordinate {
        Coordinate::new(at.x.rem_euclid(self.width), at.y.rem_euclid(self.height))
    }

    pub fn info(&self) -> PlanetInfo {
        PlanetInfo {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            obstacles: self.obstacles.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = Planet::new("Mars", 0, 5, []).unwrap_err();
        assert_eq!(err, MissionError::InvalidDimensions { width: 0, height: 5 });
        assert!(Planet::new("Mars", 5, -1, []).is_err());
    }

    #[test]
    fn test_rejects_obstacle_outside_surface() {
        let err = Planet::new("Mars", 5, 5, [Coordinate::new(5, 0)]).unwrap_err();
        assert_eq!(err, MissionError::ObstacleOutOfBounds(Coordinate::new(5, 0)));
    }

    #[test]
    fn test_contains_and_blocked() {
        let planet = Planet::new("Mars", 4, 3, [Coordinate::new(1, 1)]).unwrap();
        assert!(planet.contains(Coordinate::new(0, 0)));
        assert!(planet.contains(Coordinate::new(3, 2)));
        assert!(!planet.contains(Coordinate::new(4, 2)));
        assert!(!planet.contains(Coordinate::new(0, -1)));
        assert!(planet.is_blocked(Coordinate::new(1, 1)));
        assert!(!planet.is_blocked(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_wrap_around_edges() {
        let planet = Planet::new("Mars", 4, 3, []).unwrap();
        assert_eq!(planet.wrap(Coordinate::new(4, 1)), Coordinate::new(0, 1));
        assert_eq!(planet.wrap(Coordinate::new(-1, 1)), Coordinate::new(3, 1));
        assert_eq!(planet.wrap(Coordinate::new(2, 3)), Coordinate::new(2, 0));
        assert_eq!(planet.wrap(Coordinate::new(2, -1)), Coordinate::new(2, 2));
    }

    #[test]
    fn test_info_lists_obstacles_sorted_and_deduplicated() {
        let planet = Planet::new(
            "Mars",
            10,
            10,
            [
                Coordinate::new(5, 7),
                Coordinate::new(2, 2),
                Coordinate::new(5, 7),
            ],
        )
        .unwrap();
        let info = planet.info();
        assert_eq!(
            info.obstacles,
            vec![Coordinate::new(2, 2), Coordinate::new(5, 7)]
        );
        assert_eq!(info.name, "Mars");
    }
}

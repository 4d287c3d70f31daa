use std::fmt::Display;

/// A point in room coordinates, in meters.
///
/// `x` grows towards the East wall, `y` grows towards the South wall.
pub type Position = nalgebra::Point2<f64>;

/// Compass direction the robot is facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing the North wall, i.e. decreasing y.
    #[default]
    North,
    /// Facing the West wall, i.e. decreasing x.
    West,
    /// Facing the South wall, i.e. increasing y.
    South,
    /// Facing the East wall, i.e. increasing x.
    East,
}

/// Direction of a 90 degree turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// North -> West -> South -> East -> North.
    Clockwise,
    /// North -> East -> South -> West -> North.
    Counterclockwise,
}

impl Heading {
    /// Heading after a single turn.
    ///
    /// The robot's designer assumed a right handed coordinate system with the turn being a
    /// rotation about the z axis, so "clockwise" takes North to West.
    pub const fn turned(self, turn: TurnDirection) -> Self {
        match turn {
            TurnDirection::Clockwise => match self {
                Heading::North => Heading::West,
                Heading::West => Heading::South,
                Heading::South => Heading::East,
                Heading::East => Heading::North,
            },
            TurnDirection::Counterclockwise => match self {
                Heading::North => Heading::East,
                Heading::East => Heading::South,
                Heading::South => Heading::West,
                Heading::West => Heading::North,
            },
        }
    }

    /// True if moving along this heading changes y.
    pub const fn is_north_south(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }

    /// Coordinate of `position` along the axis of travel.
    pub fn along(self, position: &Position) -> f64 {
        if self.is_north_south() {
            position.y
        } else {
            position.x
        }
    }

    /// Coordinate of `position` across the axis of travel.
    pub fn across(self, position: &Position) -> f64 {
        if self.is_north_south() {
            position.x
        } else {
            position.y
        }
    }

    /// Sign of the coordinate change when moving along this heading.
    pub const fn sign(self) -> f64 {
        match self {
            Heading::North | Heading::West => -1.0,
            Heading::South | Heading::East => 1.0,
        }
    }
}

impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::West => "WEST",
            Heading::South => "SOUTH",
            Heading::East => "EAST",
        };
        write!(f, "{}", name)
    }
}

/// Something in the room the robot can get close to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Landmark {
    /// A point-like landmark such as the desk or the chair.
    Point(Position),
    /// The North or South wall. Only its y coordinate is meaningful.
    HorizontalWall {
        /// y coordinate of the wall.
        y: f64,
    },
    /// The East or West wall. Only its x coordinate is meaningful.
    VerticalWall {
        /// x coordinate of the wall.
        x: f64,
    },
}

impl Landmark {
    /// Coordinate of the landmark along the axis of travel of `heading`.
    ///
    /// Returns `None` for a wall running parallel to the heading.
    pub fn along(&self, heading: Heading) -> Option<f64> {
        match *self {
            Landmark::Point(p) => Some(heading.along(&p)),
            Landmark::HorizontalWall { y } => heading.is_north_south().then_some(y),
            Landmark::VerticalWall { x } => (!heading.is_north_south()).then_some(x),
        }
    }
}

/// Obstacles the robot can crash into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Obstacle {
    /// The desk with the button.
    Desk,
    /// Wall at y = 0.
    NorthWall,
    /// Wall at y = [WorldModel::NS_LENGTH].
    SouthWall,
    /// Wall at x = [WorldModel::EW_WIDTH].
    EastWall,
    /// Wall at x = 0.
    WestWall,
}

impl Obstacle {
    /// The wall the robot runs into when moving along `heading`.
    pub const fn wall_ahead(heading: Heading) -> Self {
        match heading {
            Heading::North => Obstacle::NorthWall,
            Heading::South => Obstacle::SouthWall,
            Heading::East => Obstacle::EastWall,
            Heading::West => Obstacle::WestWall,
        }
    }
}

impl Display for Obstacle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Obstacle::Desk => "desk",
            Obstacle::NorthWall => "North wall",
            Obstacle::SouthWall => "South wall",
            Obstacle::EastWall => "East wall",
            Obstacle::WestWall => "West wall",
        };
        write!(f, "{}", name)
    }
}

/// The fixed room.
pub struct WorldModel {}

impl WorldModel {
    /// Width of the room in East/West direction.
    pub const EW_WIDTH: f64 = 20.0;
    /// Length of the room in North/South direction.
    pub const NS_LENGTH: f64 = 20.0;
    /// Distance of the desk from the North wall.
    pub const DESK_Y: f64 = 10.0;
    /// Smallest distance of the desk from the West wall.
    pub const DESK_X_MIN: f64 = 5.0;
    /// Width of the band the desk is placed in, starting at [WorldModel::DESK_X_MIN].
    pub const DESK_X_SPAN: f64 = 10.0;

    /// The chair sits in the North-West corner.
    pub fn chair() -> Position {
        Position::origin()
    }

    /// Desk position for a uniform draw `u` in `[0, 1)`.
    pub fn desk(u: f64) -> Position {
        Position::new(Self::DESK_X_MIN + u * Self::DESK_X_SPAN, Self::DESK_Y)
    }

    /// Landmark of the wall ahead when facing `heading`.
    pub fn wall_ahead(heading: Heading) -> Landmark {
        match heading {
            Heading::North => Landmark::HorizontalWall { y: 0.0 },
            Heading::South => Landmark::HorizontalWall { y: Self::NS_LENGTH },
            Heading::East => Landmark::VerticalWall { x: Self::EW_WIDTH },
            Heading::West => Landmark::VerticalWall { x: 0.0 },
        }
    }
}

/// A range measurement model.
///
/// The distance sensor was mounted too high to see the desk, it only ever measures the wall
/// ahead.
pub struct RangeMeasurementModel {}

impl RangeMeasurementModel {
    /// Standard deviation of the range measurement.
    pub const RANGE_STD_DEV: f64 = 2.0;

    /// True distance between `position` and the wall ahead.
    pub fn range(&self, position: &Position, heading: Heading) -> f64 {
        match heading {
            Heading::North => position.y,
            Heading::South => WorldModel::NS_LENGTH - position.y,
            Heading::East => WorldModel::EW_WIDTH - position.x,
            Heading::West => position.x,
        }
    }
}

/// Motion model of a robot without brakes.
pub struct MotionModel {}

impl MotionModel {
    /// Upper bound of the overshoot, as a factor of the squared energy.
    pub const OVERSHOOT_FACTOR: f64 = 0.1;

    /// Distance travelled for `energy` and a uniform draw `u` in `[0, 1)`.
    pub fn distance(&self, energy: f64, u: f64) -> f64 {
        energy + u * energy * energy * Self::OVERSHOOT_FACTOR
    }

    /// Expected overshoot for `energy`.
    pub fn mean_overshoot(&self, energy: f64) -> f64 {
        0.5 * energy * energy * Self::OVERSHOOT_FACTOR
    }

    /// Variance of the overshoot for `energy`.
    pub fn overshoot_variance(&self, energy: f64) -> f64 {
        let width = energy * energy * Self::OVERSHOOT_FACTOR;
        width * width / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Heading; 4] = [Heading::North, Heading::West, Heading::South, Heading::East];

    #[test]
    fn clockwise_takes_north_to_west() {
        assert_eq!(Heading::North.turned(TurnDirection::Clockwise), Heading::West);
        assert_eq!(Heading::West.turned(TurnDirection::Clockwise), Heading::South);
        assert_eq!(Heading::South.turned(TurnDirection::Clockwise), Heading::East);
        assert_eq!(Heading::East.turned(TurnDirection::Clockwise), Heading::North);
        assert_eq!(
            Heading::North.turned(TurnDirection::Counterclockwise),
            Heading::East
        );
    }

    #[test]
    fn four_turns_and_opposite_turns_restore_heading() {
        for heading in ALL {
            for turn in [TurnDirection::Clockwise, TurnDirection::Counterclockwise] {
                let mut h = heading;
                for _ in 0..4 {
                    h = h.turned(turn);
                }
                assert_eq!(h, heading);
            }
            let there_and_back = heading
                .turned(TurnDirection::Clockwise)
                .turned(TurnDirection::Counterclockwise);
            assert_eq!(there_and_back, heading);
            let back_and_there = heading
                .turned(TurnDirection::Counterclockwise)
                .turned(TurnDirection::Clockwise);
            assert_eq!(back_and_there, heading);
        }
    }

    #[test]
    fn range_is_distance_to_wall_ahead() {
        let model = RangeMeasurementModel {};
        let p = Position::new(3.0, 7.5);
        assert_relative_eq!(model.range(&p, Heading::North), 7.5);
        assert_relative_eq!(model.range(&p, Heading::South), 12.5);
        assert_relative_eq!(model.range(&p, Heading::East), 17.0);
        assert_relative_eq!(model.range(&p, Heading::West), 3.0);
    }

    #[test]
    fn overshoot_grows_quadratically() {
        let model = MotionModel {};
        assert_relative_eq!(model.distance(2.0, 0.0), 2.0);
        assert_relative_eq!(model.distance(2.0, 0.5), 2.2);
        assert_relative_eq!(model.mean_overshoot(2.0), 0.2);
    }

    #[test]
    fn parallel_walls_have_no_coordinate_along_heading() {
        let north = Landmark::HorizontalWall { y: 0.0 };
        assert_eq!(north.along(Heading::North), Some(0.0));
        assert_eq!(north.along(Heading::East), None);
        let east = Landmark::VerticalWall { x: 20.0 };
        assert_eq!(east.along(Heading::West), Some(20.0));
        assert_eq!(east.along(Heading::South), None);
        assert_eq!(
            WorldModel::wall_ahead(Heading::South),
            Landmark::HorizontalWall { y: 20.0 }
        );
    }
}

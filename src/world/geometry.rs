use crate::world::model::{Heading, Landmark, Position};

/// Distance below which the robot counts as close to a landmark.
pub const NEAR_THRESHOLD: f64 = 0.5;

/// True if `position` is close to `landmark` on the axes that matter for it.
///
/// Walls only constrain the coordinate perpendicular to them, point landmarks constrain both.
pub fn is_near(position: &Position, landmark: &Landmark) -> bool {
    match *landmark {
        Landmark::HorizontalWall { y } => (position.y - y).abs() < NEAR_THRESHOLD,
        Landmark::VerticalWall { x } => (position.x - x).abs() < NEAR_THRESHOLD,
        Landmark::Point(q) => {
            (position.x - q.x).abs() < NEAR_THRESHOLD && (position.y - q.y).abs() < NEAR_THRESHOLD
        }
    }
}

/// True if `position` has not passed `landmark` when travelling along `heading`.
fn is_approaching(position: &Position, landmark: &Landmark, heading: Heading) -> bool {
    let Some(target) = landmark.along(heading) else {
        return false;
    };
    let own = heading.along(position);
    match heading {
        Heading::North | Heading::West => own >= target,
        Heading::South | Heading::East => own <= target,
    }
}

/// [is_near] restricted to approaching `landmark` along `heading`.
pub fn is_near_facing(position: &Position, landmark: &Landmark, heading: Heading) -> bool {
    is_approaching(position, landmark, heading) && is_near(position, landmark)
}

/// True if `landmark` lies straight ahead along `heading`.
pub fn can_see(position: &Position, landmark: &Landmark, heading: Heading) -> bool {
    if !is_approaching(position, landmark, heading) {
        return false;
    }
    match landmark {
        Landmark::Point(q) => {
            (heading.across(position) - heading.across(q)).abs() < NEAR_THRESHOLD
        }
        Landmark::HorizontalWall { .. } | Landmark::VerticalWall { .. } => true,
    }
}

/// Line-of-travel distance to `landmark`, or infinity if it is not ahead.
pub fn distance_to_obstacle(position: &Position, landmark: &Landmark, heading: Heading) -> f64 {
    match landmark.along(heading) {
        Some(target) if can_see(position, landmark, heading) => {
            (target - heading.along(position)).abs()
        }
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NORTH_WALL: Landmark = Landmark::HorizontalWall { y: 0.0 };
    const SOUTH_WALL: Landmark = Landmark::HorizontalWall { y: 20.0 };
    const WEST_WALL: Landmark = Landmark::VerticalWall { x: 0.0 };

    fn desk() -> Landmark {
        Landmark::Point(Position::new(8.0, 10.0))
    }

    #[test]
    fn walls_only_constrain_one_axis() {
        assert!(is_near(&Position::new(13.0, 0.4), &NORTH_WALL));
        assert!(!is_near(&Position::new(13.0, 0.5), &NORTH_WALL));
        assert!(is_near(&Position::new(0.2, 19.0), &WEST_WALL));
        assert!(is_near(&Position::new(3.0, 19.7), &SOUTH_WALL));
    }

    #[test]
    fn point_landmarks_constrain_both_axes() {
        assert!(is_near(&Position::new(7.6, 10.4), &desk()));
        assert!(!is_near(&Position::new(7.4, 10.0), &desk()));
        assert!(!is_near(&Position::new(8.0, 9.5), &desk()));
    }

    #[test]
    fn directional_proximity_is_one_sided() {
        let west_of_desk = Position::new(7.8, 10.0);
        let east_of_desk = Position::new(8.2, 10.0);
        assert!(is_near_facing(&west_of_desk, &desk(), Heading::East));
        assert!(!is_near_facing(&east_of_desk, &desk(), Heading::East));
        assert!(is_near_facing(&east_of_desk, &desk(), Heading::West));
        assert!(is_near_facing(&Position::new(8.0, 9.8), &desk(), Heading::South));
        assert!(!is_near_facing(&Position::new(8.0, 9.8), &desk(), Heading::North));
    }

    #[test]
    fn desk_is_visible_only_when_aligned_and_ahead() {
        let p = Position::new(2.0, 10.3);
        assert!(can_see(&p, &desk(), Heading::East));
        assert!(!can_see(&p, &desk(), Heading::West));
        assert!(!can_see(&Position::new(2.0, 10.6), &desk(), Heading::East));
        assert_relative_eq!(distance_to_obstacle(&p, &desk(), Heading::East), 6.0);
        assert_eq!(
            distance_to_obstacle(&p, &desk(), Heading::West),
            f64::INFINITY
        );
    }

    #[test]
    fn wall_ahead_is_always_visible() {
        let p = Position::new(17.0, 4.0);
        assert!(can_see(&p, &NORTH_WALL, Heading::North));
        assert_relative_eq!(distance_to_obstacle(&p, &NORTH_WALL, Heading::North), 4.0);
        assert_relative_eq!(distance_to_obstacle(&p, &SOUTH_WALL, Heading::South), 16.0);
        assert!(!can_see(&p, &NORTH_WALL, Heading::East));
        assert_eq!(
            distance_to_obstacle(&p, &WEST_WALL, Heading::North),
            f64::INFINITY
        );
    }
}

use crate::navigation::filter::{average_distance, RangeFilter};
use crate::robot::{CrashError, IsRobot, MissionStatus};
use crate::world::TurnDirection;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, info};

/// Properties of the navigator.
#[derive(Clone, Debug)]
pub struct NavigatorProp {
    /// Energy of a single move. Small values keep the overshoot negligible.
    pub step_energy: f64,
    /// Distance readings fused after every move towards the desk row.
    pub samples_per_step: usize,
    /// Distance readings averaged before the first move towards the desk row.
    pub initial_samples: usize,
    /// Range to the South wall at which the desk row lies.
    pub desk_row_distance: f64,
    /// The desk row counts as reached once the estimated range is this close.
    pub range_tolerance: f64,
    /// Moves after which a leg is given up.
    pub max_steps_per_leg: usize,
}

impl Default for NavigatorProp {
    fn default() -> Self {
        Self {
            step_energy: 0.05,
            samples_per_step: 20,
            initial_samples: 100,
            desk_row_distance: 10.0,
            range_tolerance: 0.05,
            max_steps_per_leg: 100_000,
        }
    }
}

/// Legs of the mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// South from the chair to the row of the desk.
    DeskRow,
    /// East along the row until the desk is touched.
    Desk,
    /// West back to the West wall.
    WestWall,
    /// North along the West wall to the chair.
    NorthWall,
}

impl Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Leg::DeskRow => "desk row",
            Leg::Desk => "desk",
            Leg::WestWall => "West wall",
            Leg::NorthWall => "North wall",
        };
        write!(f, "{}", name)
    }
}

/// Why the mission did not finish.
#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    /// The robot crashed.
    #[error(transparent)]
    Crash(#[from] CrashError),

    /// A leg did not finish within [NavigatorProp::max_steps_per_leg] moves.
    #[error("gave up on the {leg} leg after {steps} moves")]
    StepLimit {
        /// The unfinished leg.
        leg: Leg,
        /// Moves made on that leg.
        steps: usize,
    },
}

/// Drives a robot from its chair to the desk, presses the button and brings it back.
///
/// Only the [IsRobot] interface is used: the desk is found by its touch sensor, the desk row by
/// filtering the noisy distance sensor.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    prop: NavigatorProp,
}

impl Navigator {
    /// Creates a navigator.
    pub fn from_prop(prop: NavigatorProp) -> Self {
        Self { prop }
    }

    /// Properties of the navigator.
    pub fn prop(&self) -> &NavigatorProp {
        &self.prop
    }

    /// Runs the whole mission and returns the status reported when sitting back down.
    pub fn run<Robot: IsRobot>(&self, robot: &mut Robot) -> Result<MissionStatus, NavigationError> {
        robot.stand_up()?;
        Self::turn_around(robot)?;

        info!("Moving to the desk row");
        let filter = self.drive_to_range(robot, Leg::DeskRow, self.prop.desk_row_distance)?;
        info!("Reached the desk row, estimated range {}", filter);
        robot.turn(TurnDirection::Clockwise)?;

        info!("Searching for desk");
        self.advance_until_touch(robot, Leg::Desk)?;
        robot.extend_arm()?;
        robot.retract_arm()?;

        info!("Going home");
        Self::turn_around(robot)?;
        self.advance_until_touch(robot, Leg::WestWall)?;
        robot.turn(TurnDirection::Counterclockwise)?;
        self.advance_until_touch(robot, Leg::NorthWall)?;

        Ok(robot.sit_down()?)
    }

    fn turn_around<Robot: IsRobot>(robot: &mut Robot) -> Result<(), CrashError> {
        robot.turn(TurnDirection::Clockwise)?;
        robot.turn(TurnDirection::Clockwise)
    }

    /// Moves ahead until the filtered range to the wall ahead drops to `target`.
    fn drive_to_range<Robot: IsRobot>(
        &self,
        robot: &mut Robot,
        leg: Leg,
        target: f64,
    ) -> Result<RangeFilter, NavigationError> {
        let average = average_distance(robot, self.prop.initial_samples);
        let mut filter = RangeFilter::from_average(average, self.prop.initial_samples);
        for _ in 0..self.prop.max_steps_per_leg {
            if filter.range.mean <= target + self.prop.range_tolerance {
                return Ok(filter);
            }
            let energy = (filter.range.mean - target).min(self.prop.step_energy);
            robot.move_forward(energy)?;
            filter.prediction(energy);
            for _ in 0..self.prop.samples_per_step {
                filter.update(robot.read_distance_sensor());
            }
            debug!("{} leg: {}", leg, filter);
        }
        Err(NavigationError::StepLimit {
            leg,
            steps: self.prop.max_steps_per_leg,
        })
    }

    /// Moves ahead in small steps until the touch sensor fires.
    fn advance_until_touch<Robot: IsRobot>(
        &self,
        robot: &mut Robot,
        leg: Leg,
    ) -> Result<usize, NavigationError> {
        for steps in 0..self.prop.max_steps_per_leg {
            if robot.is_touch_sensor_pressed() {
                debug!("{} leg: touched after {} moves", leg, steps);
                return Ok(steps);
            }
            robot.move_forward(self.prop.step_energy)?;
        }
        if robot.is_touch_sensor_pressed() {
            return Ok(self.prop.max_steps_per_leg);
        }
        Err(NavigationError::StepLimit {
            leg,
            steps: self.prop.max_steps_per_leg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{RobotSimulator, StatusEvent};
    use crate::world::{Heading, Obstacle};

    #[test]
    fn finds_the_desk_and_returns_to_the_chair() {
        for seed in 0..5 {
            let mut sim = RobotSimulator::from_seed(seed);
            let status = Navigator::default().run(&mut sim).unwrap();
            assert_eq!(status, MissionStatus::Accomplished, "seed {}", seed);
            assert!(sim.state().button_pressed);
            assert!(sim.state().is_sitting);
            assert_eq!(sim.facing_direction(), Heading::North);
            assert_eq!(
                sim.status_log().last().map(|s| &s.value),
                Some(&StatusEvent::Mission(MissionStatus::Accomplished))
            );
        }
    }

    #[test]
    fn gives_up_after_the_step_limit() {
        let mut sim = RobotSimulator::from_seed(20);
        let navigator = Navigator::from_prop(NavigatorProp {
            max_steps_per_leg: 3,
            ..Default::default()
        });
        assert_eq!(
            navigator.run(&mut sim),
            Err(NavigationError::StepLimit {
                leg: Leg::DeskRow,
                steps: 3
            })
        );
        assert!(!sim.is_crashed());
    }

    #[test]
    fn reports_the_crash() {
        let mut sim = RobotSimulator::from_seed(21);
        let navigator = Navigator::from_prop(NavigatorProp {
            step_energy: 50.0,
            desk_row_distance: -10.0,
            ..Default::default()
        });
        assert_eq!(
            navigator.run(&mut sim),
            Err(NavigationError::Crash(CrashError::Collision(
                Obstacle::SouthWall
            )))
        );
        assert!(sim.is_crashed());
    }
}

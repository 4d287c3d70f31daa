use crate::world::{Heading, TurnDirection};

/// Crash error of the simulated robot.
pub mod error;
pub use error::CrashError;

/// Status notifications and the mission outcome.
pub mod status;
pub use status::{MissionStatus, Stamped, StatusEvent};

/// The robot simulator.
pub mod sim;
pub use sim::{RobotSimulator, RobotState};

/// Actuator commands and sensor queries of the robot.
///
/// This is everything a navigation algorithm gets to see: the true location of the desk and
/// the encoding of the walls stay hidden behind it.
pub trait IsRobot {
    /// Leaves the chair. Does nothing if already standing.
    fn stand_up(&mut self) -> Result<(), CrashError>;

    /// Sits down on the chair and reports whether the button was pressed.
    ///
    /// Crashes if the chair is not nearby.
    fn sit_down(&mut self) -> Result<MissionStatus, CrashError>;

    /// Turns by 90 degrees.
    fn turn(&mut self, direction: TurnDirection) -> Result<(), CrashError>;

    /// Extends the arm, pressing the button if the desk is nearby.
    fn extend_arm(&mut self) -> Result<(), CrashError>;

    /// Retracts the arm.
    fn retract_arm(&mut self) -> Result<(), CrashError>;

    /// Moves along the current heading.
    ///
    /// The robot has no brakes: it coasts further than `energy` by a random amount that grows
    /// with the square of the energy.
    fn move_forward(&mut self, energy: f64) -> Result<(), CrashError>;

    /// True if the robot touches the wall or the desk ahead.
    fn is_touch_sensor_pressed(&self) -> bool;

    /// Noisy estimate of the distance to the wall ahead.
    fn read_distance_sensor(&mut self) -> f64;

    /// x coordinate of the robot.
    fn x_position(&self) -> f64;

    /// y coordinate of the robot.
    fn y_position(&self) -> f64;

    /// Direction the robot is facing.
    fn facing_direction(&self) -> Heading;
}

#![deny(missing_docs)]

//! # deskbot
//!
//! deskbot simulates a simple robot in a room: it starts sitting on a chair in the North-West
//! corner, has to find a desk somewhere in the middle of the room, press a button on it by
//! extending its arm, and return to sit down on its chair again. The robot's sensors are noisy
//! and the robot is extremely easy to crash, for example by running into a wall.
//!
//! The simulation is a synchronous state machine. There is no clock: every command is applied
//! immediately and either succeeds or crashes the robot.
//!
//! ## Module Overview
//!
//! The library is organized in the following modules:
//!
//! - The [world] module contains the fixed room: its dimensions, the [Heading] and
//!   [TurnDirection] types, landmarks and obstacles, the range measurement and motion models, as
//!   well as the [geometry](world::geometry) rules deciding whether the robot is near or can see
//!   a landmark.
//!
//! - The [robot] module contains the [IsRobot] trait, which is the complete interface a
//!   navigation algorithm gets to see, and its implementation [RobotSimulator]. Crashes are
//!   reported as [CrashError]; each state change is reported as a [StatusEvent].
//!
//! - The [navigation] module contains a [Navigator] which completes the mission using nothing
//!   but [IsRobot], and the [RangeFilter] it uses to make sense of the noisy distance sensor.
//!
//! ## The room
//!
//! The room is 20 meters long (North/South) and 20 meters wide (East/West). x grows towards
//! the East, y grows towards the South. The desk is 10 meters from the North wall and between
//! 5 and 15 meters from the West wall; its exact position is drawn once per simulator.
//!
//! ## Turning
//!
//! The robot's designer assumed a right handed coordinate system and that a turn is a rotation
//! about the z axis. Their understanding of clockwise might be different from yours:
//!
//! ```rust
//! # use deskbot::prelude::*;
//! let mut robot = RobotSimulator::from_seed(7);
//! robot.turn(TurnDirection::Clockwise).unwrap();
//! assert_eq!(robot.facing_direction(), Heading::West);
//! ```
//!
//! ## Moving
//!
//! The robot has no brakes. Moving with `energy` makes it coast `energy + overshoot`, where the
//! overshoot is uniformly drawn between zero and a tenth of the squared energy. Moving onto a
//! wall or the desk crashes the robot, as does moving while sitting or with the arm extended.
//! Once crashed, the robot refuses every further command:
//!
//! ```rust
//! # use deskbot::prelude::*;
//! let mut robot = RobotSimulator::from_seed(7);
//! assert_eq!(robot.move_forward(0.1), Err(CrashError::MovedWhileSitting));
//! assert!(robot.stand_up().is_err());
//! assert!(robot.is_crashed());
//! ```
//!
//! ## Sensing
//!
//! The touch sensor fires when the robot is close to the wall ahead, or close to the desk
//! when approaching it. The distance sensor measures the distance to the wall ahead, with
//! Gaussian noise of two meters standard deviation. It was mounted too high to see the desk.
//!
//! ## Example: the whole mission
//!
//! ```rust
//! # use deskbot::prelude::*;
//! let mut robot = RobotSimulator::from_seed(3);
//! let status = Navigator::default().run(&mut robot).unwrap();
//! assert_eq!(status, MissionStatus::Accomplished);
//! for line in robot.status_log() {
//!     println!("{}", line);
//! }
//! ```
//!
//! which prints
//!
//! ``` text
//! #0 Robot is standing up
//! #1 Robot turned to direction WEST
//! #2 Robot turned to direction SOUTH
//! #3 Robot turned to direction EAST
//! #4 Arm extended at (<x>, <y>), buttonPressed = true
//! #5 Robot turned to direction NORTH
//! #6 Robot turned to direction WEST
//! #7 Robot turned to direction NORTH
//! #8 Robot is sitting down
//! #9 MISSION ACCOMPLISHED!
//! ```

/// The room, its landmarks and the geometry rules.
pub mod world;
pub use crate::world::geometry;
pub use crate::world::Heading;
pub use crate::world::Landmark;
pub use crate::world::MotionModel;
pub use crate::world::Obstacle;
pub use crate::world::Position;
pub use crate::world::RangeMeasurementModel;
pub use crate::world::TurnDirection;
pub use crate::world::WorldModel;

/// The simulated robot.
pub mod robot;
pub use crate::robot::CrashError;
pub use crate::robot::IsRobot;
pub use crate::robot::MissionStatus;
pub use crate::robot::RobotSimulator;
pub use crate::robot::RobotState;
pub use crate::robot::Stamped;
pub use crate::robot::StatusEvent;

/// Navigation on top of the robot interface.
pub mod navigation;
pub use crate::navigation::average_distance;
pub use crate::navigation::Leg;
pub use crate::navigation::NavigationError;
pub use crate::navigation::Navigator;
pub use crate::navigation::NavigatorProp;
pub use crate::navigation::RangeBelief;
pub use crate::navigation::RangeFilter;

/// The prelude module contains the most important traits and structs of the library.
pub mod prelude {
    pub use crate::CrashError;
    pub use crate::Heading;
    pub use crate::IsRobot;
    pub use crate::MissionStatus;
    pub use crate::NavigationError;
    pub use crate::Navigator;
    pub use crate::NavigatorProp;
    pub use crate::RobotSimulator;
    pub use crate::StatusEvent;
    pub use crate::TurnDirection;
}

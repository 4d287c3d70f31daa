use crate::robot::CrashError;
use crate::world::{Heading, Position};
use std::fmt::Debug;
use std::fmt::Display;

/// A generic value with a sequence number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stamped<T: Clone + Debug> {
    /// Monotonic sequence counter
    pub seq: u64,
    /// The value.
    pub value: T,
}

impl<T: Clone + Debug> Stamped<T> {
    /// Creates a new value with a sequence number.
    pub fn from_counter_and_value(seq: u64, value: &T) -> Self {
        Self {
            seq,
            value: value.clone(),
        }
    }
}

impl<T: Display + Clone + Debug> Display for Stamped<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.seq, self.value)
    }
}

/// Outcome reported when the robot sits back down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionStatus {
    /// The button has been pressed.
    Accomplished,
    /// The button has not been pressed.
    Incomplete,
}

impl Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionStatus::Accomplished => write!(f, "MISSION ACCOMPLISHED!"),
            MissionStatus::Incomplete => write!(f, "Button not pressed, mission incomplete"),
        }
    }
}

/// Human readable notification of a state change.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusEvent {
    /// The robot left the chair.
    StoodUp,
    /// The robot sat down on the chair.
    SatDown,
    /// The robot turned to a new heading.
    Turned(Heading),
    /// The arm was extended.
    ArmExtended {
        /// Where the arm was extended.
        position: Position,
        /// Button state right after extending.
        button_pressed: bool,
    },
    /// Mission evaluation after sitting down.
    Mission(MissionStatus),
    /// The robot crashed.
    Crashed(CrashError),
}

impl Display for StatusEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusEvent::StoodUp => write!(f, "Robot is standing up"),
            StatusEvent::SatDown => write!(f, "Robot is sitting down"),
            StatusEvent::Turned(heading) => write!(f, "Robot turned to direction {}", heading),
            StatusEvent::ArmExtended {
                position,
                button_pressed,
            } => write!(
                f,
                "Arm extended at ({}, {}), buttonPressed = {}",
                position.x, position.y, button_pressed
            ),
            StatusEvent::Mission(status) => write!(f, "{}", status),
            StatusEvent::Crashed(cause) => write!(f, "CRASH!!: {}", cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Obstacle;

    #[test]
    fn status_lines_read_like_the_robot_console() {
        let extended = StatusEvent::ArmExtended {
            position: Position::new(7.5, 10.0),
            button_pressed: true,
        };
        assert_eq!(
            extended.to_string(),
            "Arm extended at (7.5, 10), buttonPressed = true"
        );
        assert_eq!(
            StatusEvent::Turned(Heading::West).to_string(),
            "Robot turned to direction WEST"
        );
        assert_eq!(
            StatusEvent::Crashed(CrashError::Collision(Obstacle::NorthWall)).to_string(),
            "CRASH!!: Robot crashed into North wall"
        );
        let stamped = Stamped::from_counter_and_value(3, &StatusEvent::StoodUp);
        assert_eq!(stamped.to_string(), "#3 Robot is standing up");
    }
}

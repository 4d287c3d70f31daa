use crate::world::Obstacle;
use thiserror::Error;

/// Reason the robot crashed.
///
/// A crash is terminal: the simulator refuses every further actuator command with
/// [CrashError::Halted].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CrashError {
    /// Move commanded while sitting on the chair.
    #[error("Robot can't move when sitting")]
    MovedWhileSitting,

    /// Move commanded with the arm extended.
    #[error("Robot tipped over because the arm was extended")]
    TippedOver,

    /// The robot reached or passed an obstacle while moving.
    #[error("Robot crashed into {0}")]
    Collision(Obstacle),

    /// Sit down commanded away from the chair.
    #[error("No chair -- robot crashed to the ground when trying to sit down")]
    NoChairNearby,

    /// Move commanded with negative, zero or non-finite energy.
    #[error("Robot motor failed on invalid energy {0}")]
    InvalidEnergy(f64),

    /// Command issued after the robot already crashed.
    #[error("Robot is halted after a crash: {0}")]
    Halted(Box<CrashError>),
}

impl CrashError {
    /// The crash which halted the robot in the first place.
    pub fn root_cause(&self) -> &CrashError {
        match self {
            CrashError::Halted(cause) => cause.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(
            CrashError::Collision(Obstacle::SouthWall).to_string(),
            "Robot crashed into South wall"
        );
        assert_eq!(
            CrashError::Collision(Obstacle::Desk).to_string(),
            "Robot crashed into desk"
        );
        assert!(CrashError::MovedWhileSitting.to_string().contains("sitting"));
        assert!(CrashError::TippedOver.to_string().contains("arm"));
        assert!(CrashError::NoChairNearby.to_string().contains("No chair"));
    }

    #[test]
    fn halted_keeps_root_cause() {
        let halted = CrashError::Halted(Box::new(CrashError::TippedOver));
        assert_eq!(halted.root_cause(), &CrashError::TippedOver);
        assert!(halted.to_string().ends_with("because the arm was extended"));
    }
}

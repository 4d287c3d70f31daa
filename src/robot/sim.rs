use crate::robot::{CrashError, IsRobot, MissionStatus, Stamped, StatusEvent};
use crate::world::geometry;
use crate::world::{
    Heading, Landmark, MotionModel, Obstacle, Position, RangeMeasurementModel, TurnDirection,
    WorldModel,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::fmt::Display;
use tracing::{debug, error, info, trace};

/// Physical state of the robot.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotState {
    /// Position in the room.
    pub position: Position,
    /// Direction the robot is facing.
    pub heading: Heading,
    /// True while sitting on the chair.
    pub is_sitting: bool,
    /// True while the arm is extended.
    pub is_arm_extended: bool,
    /// True once the button on the desk was pressed. Never reset.
    pub button_pressed: bool,
    /// True once the robot crashed. Never reset.
    pub crashed: bool,
}

impl Default for RobotState {
    /// Sitting on the chair in the North-West corner, facing the North wall.
    fn default() -> Self {
        Self {
            position: WorldModel::chair(),
            heading: Heading::North,
            is_sitting: true,
            is_arm_extended: false,
            button_pressed: false,
            crashed: false,
        }
    }
}

impl Display for RobotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "position: ({}, {}), heading: {}, sitting: {}, arm extended: {}, button pressed: {}, crashed: {}",
            self.position.x,
            self.position.y,
            self.heading,
            self.is_sitting,
            self.is_arm_extended,
            self.button_pressed,
            self.crashed
        )
    }
}

/// Simulation of the robot in the room.
///
/// A single random stream `R` drives the desk placement, the overshoot of every move and the
/// noise of every distance reading.
#[derive(Debug)]
pub struct RobotSimulator<R: Rng = StdRng> {
    state: RobotState,
    chair: Position,
    desk: Position,
    rng: R,
    seq: u64,
    status_log: Vec<Stamped<StatusEvent>>,
    halted_by: Option<CrashError>,
}

impl RobotSimulator<StdRng> {
    /// Creates a simulator seeded from system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible simulator.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RobotSimulator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RobotSimulator<R> {
    const RANGE_MODEL: RangeMeasurementModel = RangeMeasurementModel {};
    const MOTION_MODEL: MotionModel = MotionModel {};

    /// Creates a simulator drawing from `rng`. The desk is placed right away.
    pub fn from_rng(mut rng: R) -> Self {
        let desk = WorldModel::desk(rng.gen::<f64>());
        debug!("desk placed at ({}, {})", desk.x, desk.y);
        Self {
            state: RobotState::default(),
            chair: WorldModel::chair(),
            desk,
            rng,
            seq: 0,
            status_log: Vec::new(),
            halted_by: None,
        }
    }

    /// Current physical state.
    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// All status notifications so far, oldest first.
    pub fn status_log(&self) -> &[Stamped<StatusEvent>] {
        &self.status_log
    }

    /// True once the robot crashed.
    pub fn is_crashed(&self) -> bool {
        self.state.crashed
    }

    /// The crash which halted the robot, if any.
    pub fn crash_cause(&self) -> Option<&CrashError> {
        self.halted_by.as_ref()
    }

    fn emit(&mut self, event: StatusEvent) {
        let stamped = Stamped::from_counter_and_value(self.seq, &event);
        self.seq += 1;
        match &event {
            StatusEvent::Crashed(_) => error!("{}", stamped),
            _ => info!("{}", stamped),
        }
        self.status_log.push(stamped);
    }

    fn crash(&mut self, cause: CrashError) -> CrashError {
        self.state.crashed = true;
        self.halted_by = Some(cause.clone());
        self.emit(StatusEvent::Crashed(cause.clone()));
        cause
    }

    fn ensure_operational(&self) -> Result<(), CrashError> {
        match &self.halted_by {
            Some(cause) => Err(CrashError::Halted(Box::new(cause.clone()))),
            None => Ok(()),
        }
    }

    fn desk_landmark(&self) -> Landmark {
        Landmark::Point(self.desk)
    }

    /// Line-of-travel distance to the closest visible obstacle, and its name.
    ///
    /// The desk wins a tie with the wall.
    fn obstacle_ahead(&self) -> (f64, Obstacle) {
        let heading = self.state.heading;
        let position = &self.state.position;
        let desk_distance =
            geometry::distance_to_obstacle(position, &self.desk_landmark(), heading);
        let wall_distance =
            geometry::distance_to_obstacle(position, &WorldModel::wall_ahead(heading), heading);
        if wall_distance < desk_distance {
            (wall_distance, Obstacle::wall_ahead(heading))
        } else {
            (desk_distance, Obstacle::Desk)
        }
    }
}

impl<R: Rng> IsRobot for RobotSimulator<R> {
    fn stand_up(&mut self) -> Result<(), CrashError> {
        self.ensure_operational()?;
        if self.state.is_sitting {
            self.state.is_sitting = false;
            self.emit(StatusEvent::StoodUp);
        }
        Ok(())
    }

    fn sit_down(&mut self) -> Result<MissionStatus, CrashError> {
        self.ensure_operational()?;
        if !geometry::is_near(&self.state.position, &Landmark::Point(self.chair)) {
            return Err(self.crash(CrashError::NoChairNearby));
        }
        if !self.state.is_sitting {
            self.state.is_sitting = true;
            self.emit(StatusEvent::SatDown);
        }
        let status = if self.state.button_pressed {
            MissionStatus::Accomplished
        } else {
            MissionStatus::Incomplete
        };
        self.emit(StatusEvent::Mission(status));
        Ok(status)
    }

    fn turn(&mut self, direction: TurnDirection) -> Result<(), CrashError> {
        self.ensure_operational()?;
        self.state.heading = self.state.heading.turned(direction);
        self.emit(StatusEvent::Turned(self.state.heading));
        Ok(())
    }

    fn extend_arm(&mut self) -> Result<(), CrashError> {
        self.ensure_operational()?;
        self.state.is_arm_extended = true;
        if geometry::is_near(&self.state.position, &self.desk_landmark()) {
            self.state.button_pressed = true;
        }
        self.emit(StatusEvent::ArmExtended {
            position: self.state.position,
            button_pressed: self.state.button_pressed,
        });
        Ok(())
    }

    fn retract_arm(&mut self) -> Result<(), CrashError> {
        self.ensure_operational()?;
        self.state.is_arm_extended = false;
        debug!("arm retracted");
        Ok(())
    }

    fn move_forward(&mut self, energy: f64) -> Result<(), CrashError> {
        self.ensure_operational()?;
        if self.state.is_sitting {
            return Err(self.crash(CrashError::MovedWhileSitting));
        }
        if self.state.is_arm_extended {
            return Err(self.crash(CrashError::TippedOver));
        }
        if !(energy.is_finite() && energy > 0.0) {
            return Err(self.crash(CrashError::InvalidEnergy(energy)));
        }

        let distance = Self::MOTION_MODEL.distance(energy, self.rng.gen::<f64>());
        let (clearance, obstacle) = self.obstacle_ahead();
        if distance >= clearance {
            return Err(self.crash(CrashError::Collision(obstacle)));
        }

        let heading = self.state.heading;
        if heading.is_north_south() {
            self.state.position.y += heading.sign() * distance;
        } else {
            self.state.position.x += heading.sign() * distance;
        }
        trace!(
            "moved {} towards {}, now at ({}, {})",
            distance,
            heading,
            self.state.position.x,
            self.state.position.y
        );
        Ok(())
    }

    fn is_touch_sensor_pressed(&self) -> bool {
        let heading = self.state.heading;
        let position = &self.state.position;
        geometry::is_near(position, &WorldModel::wall_ahead(heading))
            || geometry::is_near_facing(position, &self.desk_landmark(), heading)
    }

    fn read_distance_sensor(&mut self) -> f64 {
        let noise: f64 = self.rng.sample(StandardNormal);
        Self::RANGE_MODEL.range(&self.state.position, self.state.heading)
            + RangeMeasurementModel::RANGE_STD_DEV * noise
    }

    fn x_position(&self) -> f64 {
        self.state.position.x
    }

    fn y_position(&self) -> f64 {
        self.state.position.y
    }

    fn facing_direction(&self) -> Heading {
        self.state.heading
    }
}

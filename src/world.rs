/// Room, landmark, sensor and motion model.
pub mod model;
pub use model::{
    Heading, Landmark, MotionModel, Obstacle, Position, RangeMeasurementModel, TurnDirection,
    WorldModel,
};

/// Proximity, visibility and line-of-travel rules.
///
/// ```text
///  (0,0) chair                    x ->           (20,0)
///    +------------------ North wall ------------------+
///    |                                                |
///  West                      desk at (5..15, 10)    East
///  wall                          [#]                wall
///    |                                                |
///    +------------------ South wall ------------------+
///  (0,20)                                         (20,20)
/// ```
pub mod geometry;

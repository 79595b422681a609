//! Default dimensions and build settings (screen units)

pub const LANE_WIDTH: f64 = 120.0;
pub const BARRIER_WIDTH: f64 = 10.0;
pub const BARRIER_CHUNKS: f64 = 4.0;

pub const START_X: f64 = 0.0;
pub const START_Y: f64 = 0.0;
pub const START_ANGLE: f64 = 0.0;
pub const H_PADDING: f64 = 0.0;
pub const V_PADDING: f64 = 0.0;

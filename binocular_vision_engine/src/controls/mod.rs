//! Controls module: the input record and its documented bounds.

mod control_state;

pub use control_state::{
    ControlState, ObjectType, CAMERA_VISUALIZER_SCALE_RANGE, FOCAL_LENGTH_RANGE_MM,
    IPD_RANGE_MM, OBJECT_SCALE_RANGE, TARGET_DISTANCE_RANGE_M,
};

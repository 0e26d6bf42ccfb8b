use rapier2d::parry::shape::ShapeType;
use thiserror::Error;

/// Things which can go wrong while building, drawing or running a world.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to create the render window: {0}")]
    WindowCreate(String),

    #[error("unsupported shape type: {0:?}")]
    UnsupportedShape(ShapeType),

    #[error("a dynamic body needs a positive mass, got {0}")]
    InvalidMass(f32),

    #[error("shape dimensions must be positive, got {width} x {height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("an object needs at least one shape")]
    NoShapes,

    #[error("the object is not part of this world")]
    UnknownObject,

    #[error("frame rate must be at least 1 fps")]
    InvalidFrameRate,

    #[error("the info overlay failed to render: {0}")]
    Overlay(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

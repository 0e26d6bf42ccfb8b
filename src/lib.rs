//! Draw rapier2d rigid bodies and joints with SFML.
//!
//! Describe boxes and circles with [`ObjectOptions`], pin them together
//! with [`Joint`]s, add both to a [`World`] and let [`World::run`] step the
//! simulation and redraw it at a fixed frame rate.
//!
//! World coordinates have the y axis pointing up, one world unit is one
//! pixel of the window.

pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod joint;
pub mod logging;
pub mod object;
pub mod options;
pub mod renderer;
pub mod space;
pub mod timing;
pub mod world;

pub use config::WorldOptions;
pub use draw::{DrawCommand, DrawList};
pub use engine::FrameInput;
pub use error::{Error, Result};
pub use geometry::Bounds;
pub use joint::Joint;
pub use object::Object;
pub use options::*;
pub use world::{Drawable, DrawableId, JointHandle, ObjectHandle, World};

pub use glam;
pub use rapier2d;
pub use sfml;

use glam::Vec2;
use log::debug;
use rapier2d::prelude::*;

use crate::{
    config::WorldOptions,
    draw::DrawList,
    engine::{self, FrameInput},
    error::{Error, Result},
    geometry::{Bounds, from_vector},
    joint::Joint,
    object::Object,
    space::PhysicsSpace,
};

/// An object that was added to a [`World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub(crate) RigidBodyHandle);

impl ObjectHandle {
    /// The rapier handle of the object's body.
    pub fn body(self) -> RigidBodyHandle {
        self.0
    }
}

/// A joint that was added to a [`World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JointHandle(pub(crate) ImpulseJointHandle);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawableId {
    Object(ObjectHandle),
    Joint(JointHandle),
}

impl From<ObjectHandle> for DrawableId {
    fn from(handle: ObjectHandle) -> Self {
        Self::Object(handle)
    }
}

impl From<JointHandle> for DrawableId {
    fn from(handle: JointHandle) -> Self {
        Self::Joint(handle)
    }
}

/// Everything the world draws, each one registered with the physics space.
#[derive(Debug)]
pub enum Drawable {
    Object { handle: ObjectHandle, object: Object },
    Joint { handle: JointHandle, joint: Joint },
}

impl Drawable {
    pub fn id(&self) -> DrawableId {
        match self {
            Drawable::Object { handle, .. } => DrawableId::Object(*handle),
            Drawable::Joint { handle, .. } => DrawableId::Joint(*handle),
        }
    }

    fn draw(&self, space: &PhysicsSpace, list: &mut DrawList) -> Result<()> {
        match self {
            Drawable::Object { handle, object } => {
                let body = space.body(handle.0).ok_or(Error::UnknownObject)?;
                object.draw(body, space.colliders(), list)
            }
            Drawable::Joint { joint, .. } => {
                let (a, b) = joint.objects();
                let body_a = space.body(a.0).ok_or(Error::UnknownObject)?;
                let body_b = space.body(b.0).ok_or(Error::UnknownObject)?;
                joint.draw(body_a, body_b, list);
                Ok(())
            }
        }
    }
}

/// A physics space together with the ordered list of things to draw and the
/// settings of the window that shows them.
pub struct World {
    options: WorldOptions,
    space: PhysicsSpace,
    drawables: Vec<Drawable>,
}

impl World {
    pub fn new(name: &str, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        let options = WorldOptions::new(name, Bounds::new(min_x, min_y, max_x, max_y));
        Self {
            space: PhysicsSpace::new(options.gravity, options.length_unit),
            options,
            drawables: Vec::new(),
        }
    }

    pub fn with_options(options: WorldOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            space: PhysicsSpace::new(options.gravity, options.length_unit),
            options,
            drawables: Vec::new(),
        })
    }

    pub fn options(&self) -> &WorldOptions {
        &self.options
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn bounds(&self) -> Bounds {
        self.options.bounds
    }

    pub fn frame_rate(&self) -> u32 {
        self.options.frame_rate
    }

    pub fn set_frame_rate(&mut self, frame_rate: u32) -> Result<()> {
        if frame_rate == 0 {
            return Err(Error::InvalidFrameRate);
        }
        self.options.frame_rate = frame_rate;
        Ok(())
    }

    pub fn gravity(&self) -> Vec2 {
        self.space.gravity()
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.options.gravity = gravity;
        self.space.set_gravity(gravity);
    }

    pub fn space(&self) -> &PhysicsSpace {
        &self.space
    }

    pub fn add_object(&mut self, object: Object) -> ObjectHandle {
        let body = self
            .space
            .insert_body(object.build_body(), object.build_colliders());
        let handle = ObjectHandle(body);
        debug!("added object {body:?} with {} shape(s)", object.shapes().len());
        self.drawables.push(Drawable::Object { handle, object });
        handle
    }

    pub fn add_joint(&mut self, joint: Joint) -> Result<JointHandle> {
        let (a, b) = joint.objects();
        if !self.space.contains_body(a.0) || !self.space.contains_body(b.0) {
            return Err(Error::UnknownObject);
        }
        let handle = JointHandle(self.space.insert_joint(a.0, b.0, joint.build()));
        debug!("added joint {:?} between {:?} and {:?}", handle.0, a.0, b.0);
        self.drawables.push(Drawable::Joint { handle, joint });
        Ok(handle)
    }

    /// Removes a drawable from the world and from the physics space.
    /// Removing an object also removes every joint attached to it.
    pub fn remove(&mut self, id: impl Into<DrawableId>) -> Option<Drawable> {
        let id = id.into();
        let index = self.drawables.iter().position(|drawable| drawable.id() == id)?;
        let removed = self.drawables.remove(index);
        match &removed {
            Drawable::Object { handle, .. } => {
                self.space.remove_body(handle.0);
                let handle = *handle;
                self.drawables.retain(|drawable| match drawable {
                    Drawable::Joint { joint, .. } => !joint.connects(handle),
                    Drawable::Object { .. } => true,
                });
            }
            Drawable::Joint { handle, .. } => {
                self.space.remove_joint(handle.0);
            }
        }
        debug!("removed {id:?}");
        Some(removed)
    }

    /// Removes every object for which `keep` returns false. Returns the
    /// number of removed objects.
    pub fn retain_objects(
        &mut self,
        mut keep: impl FnMut(ObjectHandle, &RigidBody) -> bool,
    ) -> usize {
        let doomed: Vec<ObjectHandle> = self
            .object_handles()
            .filter(|&handle| {
                self.space
                    .body(handle.0)
                    .is_some_and(|body| !keep(handle, body))
            })
            .collect();
        for &handle in &doomed {
            self.remove(handle);
        }
        doomed.len()
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        self.space.step(self.options.time_step());
    }

    pub fn step_by(&mut self, dt: f32) {
        self.space.step(dt);
    }

    /// Draws every drawable in the order they were added.
    pub fn draw(&self, list: &mut DrawList) -> Result<()> {
        for drawable in &self.drawables {
            drawable.draw(&self.space, list)?;
        }
        Ok(())
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn object_handles(&self) -> impl Iterator<Item = ObjectHandle> + '_ {
        self.drawables.iter().filter_map(|drawable| match drawable {
            Drawable::Object { handle, .. } => Some(*handle),
            Drawable::Joint { .. } => None,
        })
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&Object> {
        self.drawables.iter().find_map(|drawable| match drawable {
            Drawable::Object { handle: h, object } if *h == handle => Some(object),
            _ => None,
        })
    }

    pub fn joint(&self, handle: JointHandle) -> Option<&Joint> {
        self.drawables.iter().find_map(|drawable| match drawable {
            Drawable::Joint { handle: h, joint } if *h == handle => Some(joint),
            _ => None,
        })
    }

    pub fn object_count(&self) -> usize {
        self.object_handles().count()
    }

    pub fn joint_count(&self) -> usize {
        self.drawables.len() - self.object_count()
    }

    pub fn body(&self, handle: ObjectHandle) -> Option<&RigidBody> {
        self.space.body(handle.0)
    }

    pub fn body_mut(&mut self, handle: ObjectHandle) -> Option<&mut RigidBody> {
        self.space.body_mut(handle.0)
    }

    pub fn position(&self, handle: ObjectHandle) -> Option<Vec2> {
        self.body(handle).map(|body| from_vector(body.translation()))
    }

    pub fn angle(&self, handle: ObjectHandle) -> Option<f32> {
        self.body(handle).map(|body| body.rotation().angle())
    }

    pub fn velocity(&self, handle: ObjectHandle) -> Option<Vec2> {
        self.body(handle).map(|body| from_vector(body.linvel()))
    }

    /// Opens a window and simulates until it gets closed.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(|_, _| {})
    }

    /// Like [`World::run`], calling `on_frame` at the start of every frame,
    /// before the physics step.
    pub fn run_with(&mut self, on_frame: impl FnMut(&mut World, &FrameInput)) -> Result<()> {
        engine::run(self, on_frame)
    }
}

use glam::Vec2;
use rapier2d::prelude::*;

use crate::{
    draw::DrawList,
    geometry::{from_vector, rotate_vector, to_point},
    options::JointOptions,
    world::ObjectHandle,
};

/// Pins two objects together at an anchor point on each of them. The bodies
/// can rotate freely around the pivot.
#[derive(Clone, Copy, Debug)]
pub struct Joint {
    object_a: ObjectHandle,
    object_b: ObjectHandle,
    offset_a: Vec2,
    offset_b: Vec2,
    options: JointOptions,
}

impl Joint {
    /// `offset_a` and `offset_b` are relative to each body's origin, in the
    /// body's unrotated frame.
    pub fn pivot(
        object_a: ObjectHandle,
        object_b: ObjectHandle,
        offset_a: Vec2,
        offset_b: Vec2,
        options: JointOptions,
    ) -> Self {
        Self {
            object_a,
            object_b,
            offset_a,
            offset_b,
            options,
        }
    }

    pub fn objects(&self) -> (ObjectHandle, ObjectHandle) {
        (self.object_a, self.object_b)
    }

    pub fn options(&self) -> &JointOptions {
        &self.options
    }

    pub fn connects(&self, object: ObjectHandle) -> bool {
        self.object_a == object || self.object_b == object
    }

    pub(crate) fn build(&self) -> RevoluteJoint {
        RevoluteJointBuilder::new()
            .local_anchor1(to_point(self.offset_a))
            .local_anchor2(to_point(self.offset_b))
            .contacts_enabled(self.options.collide_connected)
            .build()
    }

    /// World positions of both anchors given the current body poses.
    pub fn anchors(&self, body_a: &RigidBody, body_b: &RigidBody) -> (Vec2, Vec2) {
        let anchor = |body: &RigidBody, offset| {
            from_vector(body.translation()) + rotate_vector(offset, body.rotation().angle())
        };
        (anchor(body_a, self.offset_a), anchor(body_b, self.offset_b))
    }

    /// Draws a line from each body's center to its anchor and one between the
    /// two anchors. Does nothing unless [`JointOptions::draw`] is set.
    pub fn draw(&self, body_a: &RigidBody, body_b: &RigidBody, list: &mut DrawList) {
        if !self.options.draw {
            return;
        }
        let JointOptions {
            color, thickness, ..
        } = self.options;
        let (anchor_a, anchor_b) = self.anchors(body_a, body_b);
        list.line(from_vector(body_a.translation()), anchor_a, color, thickness);
        list.line(from_vector(body_b.translation()), anchor_b, color, thickness);
        list.line(anchor_a, anchor_b, color, thickness);
    }
}

use std::collections::HashMap;

use crate::rigid_body::{BodyHandle, RigidBody, Vec2};

/// All bodies of one world in insertion order, addressable by handle.
pub struct BodySet {
    bodies: Vec<RigidBody>,
    index: HashMap<BodyHandle, usize>,
}

impl BodySet {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(super) fn insert(&mut self, body: RigidBody) {
        self.index.insert(body.id, self.bodies.len());
        self.bodies.push(body);
    }

    #[inline]
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.index.get(&handle).map(|&i| &self.bodies[i])
    }

    #[inline]
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        match self.index.get(&handle) {
            Some(&i) => Some(&mut self.bodies[i]),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    pub(super) fn as_mut_slice(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Topmost (most recently added) dynamic body under `point`.
    pub fn pick(&self, point: Vec2) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .rev()
            .find(|b| !b.is_static && b.contains_point(point))
            .map(|b| b.id)
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }
}

impl Default for BodySet {
    fn default() -> Self {
        Self::new()
    }
}

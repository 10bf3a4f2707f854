//! Registry of externally-simulated rigid bodies.
//!
//! Rigid-body dynamics (collision, constraint solving) belong to an
//! external physics engine; what lives here is the ownership contract
//! around it. A [`World`] is an arena of body records addressed by opaque
//! generational [`BodyHandle`]s. Entities hold handles, never references,
//! and must release them with [`World::remove`] before discarding them —
//! otherwise the record lingers in the world's bookkeeping forever.
//!
//! For release-on-all-exit-paths guarantees, acquire through
//! [`World::scoped`], which returns a guard that removes the body when
//! dropped:
//!
//! ```ignore
//! use flit::{ShapeDef, Vec2, World};
//!
//! let mut world = World::new();
//! {
//!     let mut boulder = world.scoped(&ShapeDef::Circle { radius: 20.0 }, Vec2::ZERO);
//!     boulder.set_velocity(Vec2::new(3.0, 0.0));
//! } // released here, even on early return or panic unwind
//! assert!(world.is_empty());
//! ```

use glam::Vec2;
use tracing::{debug, trace};

/// Vertex count used to approximate circles.
const CIRCLE_SEGMENTS: usize = 16;

/// Shape description for body creation.
///
/// Bodies are created from primitive shapes, arbitrary vertex lists, or
/// compounds of parts placed at local offsets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeDef {
    /// Axis-aligned rectangle centered on the body position.
    Rect {
        /// Full width.
        width: f32,
        /// Full height.
        height: f32,
    },
    /// Circle approximated by a vertex ring.
    Circle {
        /// Circle radius.
        radius: f32,
    },
    /// Arbitrary polygon from local-space vertices.
    Polygon {
        /// Vertices relative to the body position.
        vertices: Vec<Vec2>,
    },
    /// Several parts composed into one body.
    Compound {
        /// `(local offset, shape)` pairs.
        parts: Vec<(Vec2, ShapeDef)>,
    },
}

impl ShapeDef {
    /// Flatten the shape into local-space vertices.
    fn vertices(&self) -> Vec<Vec2> {
        match self {
            ShapeDef::Rect { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                vec![
                    Vec2::new(-hw, -hh),
                    Vec2::new(hw, -hh),
                    Vec2::new(hw, hh),
                    Vec2::new(-hw, hh),
                ]
            }
            ShapeDef::Circle { radius } => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let theta = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                    *radius * Vec2::from_angle(theta)
                })
                .collect(),
            ShapeDef::Polygon { vertices } => vertices.clone(),
            ShapeDef::Compound { parts } => parts
                .iter()
                .flat_map(|(offset, shape)| {
                    shape.vertices().into_iter().map(move |v| v + *offset)
                })
                .collect(),
        }
    }
}

/// Opaque reference to a body inside a [`World`].
///
/// Handles are generational: after the body is removed, the handle goes
/// stale and every lookup through it answers `None`/`false`, even if the
/// slot has been recycled for a new body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

/// State record of one externally-simulated rigid body.
///
/// Position, angle, and the local vertex list are what display callers
/// read; velocity setters mirror the engine-facing write surface.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// World position (center).
    pub position: Vec2,
    /// Rotation in radians.
    pub angle: f32,
    /// Linear velocity.
    pub velocity: Vec2,
    /// Angular velocity in radians per step.
    pub angular_velocity: f32,
    vertices: Vec<Vec2>,
}

impl RigidBody {
    /// Local-space vertex list.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Vertices transformed into world space for display.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        let rotation = Vec2::from_angle(self.angle);
        self.vertices
            .iter()
            .map(|v| self.position + rotation.rotate(*v))
            .collect()
    }
}

/// A distance constraint recorded between two bodies.
#[derive(Debug, Clone, Copy)]
pub struct Joint {
    /// First endpoint.
    pub a: BodyHandle,
    /// Second endpoint.
    pub b: BodyHandle,
    /// Rest distance between the endpoints.
    pub length: f32,
}

struct Slot {
    generation: u32,
    body: Option<RigidBody>,
}

/// Arena owning rigid-body records and the joints between them.
#[derive(Default)]
pub struct World {
    slots: Vec<Slot>,
    free: Vec<usize>,
    joints: Vec<Joint>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            joints: Vec::new(),
        }
    }

    /// Register a body built from `shape` at `position`.
    pub fn add(&mut self, shape: &ShapeDef, position: Vec2) -> BodyHandle {
        let body = RigidBody {
            position,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            vertices: shape.vertices(),
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].body = Some(body);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    body: Some(body),
                });
                self.slots.len() - 1
            }
        };
        let handle = BodyHandle {
            index: index as u32,
            generation: self.slots[index].generation,
        };
        trace!(?handle, "registered rigid body");
        handle
    }

    /// Register a body and return a guard that releases it on drop.
    pub fn scoped(&mut self, shape: &ShapeDef, position: Vec2) -> ScopedBody<'_> {
        let handle = self.add(shape, position);
        ScopedBody {
            world: self,
            handle,
        }
    }

    /// Look up a live body.
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    /// Look up a live body mutably.
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Set a body's linear velocity. Returns false for a stale handle.
    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) -> bool {
        match self.get_mut(handle) {
            Some(body) => {
                body.velocity = velocity;
                true
            }
            None => false,
        }
    }

    /// Set a body's angular velocity. Returns false for a stale handle.
    pub fn set_angular_velocity(&mut self, handle: BodyHandle, angular_velocity: f32) -> bool {
        match self.get_mut(handle) {
            Some(body) => {
                body.angular_velocity = angular_velocity;
                true
            }
            None => false,
        }
    }

    /// Record a distance joint between two live bodies.
    ///
    /// Returns false (and records nothing) if either handle is stale.
    pub fn add_joint(&mut self, a: BodyHandle, b: BodyHandle, length: f32) -> bool {
        if self.get(a).is_none() || self.get(b).is_none() {
            return false;
        }
        self.joints.push(Joint { a, b, length });
        true
    }

    /// Joints between live bodies.
    #[inline]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Release a body and any joints attached to it.
    ///
    /// The handle goes stale immediately; the slot may be recycled by a
    /// later [`World::add`]. Returns false if the handle was already
    /// stale.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        let Some(slot) = self.slots.get_mut(handle.index as usize) else {
            return false;
        };
        if slot.generation != handle.generation || slot.body.is_none() {
            return false;
        }
        slot.body = None;
        slot.generation += 1;
        self.free.push(handle.index as usize);
        self.joints.retain(|j| j.a != handle && j.b != handle);
        debug!(?handle, "released rigid body");
        true
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.body.is_some()).count()
    }

    /// Whether no bodies are live.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.body.is_none())
    }
}

/// Guard over a body registered with [`World::scoped`].
///
/// Dereferences into accessors on the world and removes the body when
/// dropped, guaranteeing release on every exit path.
pub struct ScopedBody<'w> {
    world: &'w mut World,
    handle: BodyHandle,
}

impl ScopedBody<'_> {
    /// Handle of the guarded body.
    #[inline]
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    /// Read the guarded body.
    pub fn body(&self) -> &RigidBody {
        self.world
            .get(self.handle)
            .expect("guarded body is live until the guard drops")
    }

    /// Mutate the guarded body.
    pub fn body_mut(&mut self) -> &mut RigidBody {
        self.world
            .get_mut(self.handle)
            .expect("guarded body is live until the guard drops")
    }

    /// Set the guarded body's linear velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.body_mut().velocity = velocity;
    }

    /// Set the guarded body's angular velocity.
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.body_mut().angular_velocity = angular_velocity;
    }
}

impl Drop for ScopedBody<'_> {
    fn drop(&mut self) {
        self.world.remove(self.handle);
    }
}

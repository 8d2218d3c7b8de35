//! Gravitational forces between bodies
//!
//! Direct pairwise Newtonian gravity, no softening. Forces (not accelerations)
//! are returned so the integrator can divide by the receiving body's mass.
//!
//! Precondition for everything in here: two distinct bodies never sit at the
//! exact same position. The distance would be zero and the force infinite/NaN.
//! This is not checked at runtime; the scenario builder only rejects
//! coincident starting positions.

use crate::simulation::states::{Body, NVec2};

/// Total force on one body plus its distance to the anchor, if an anchor
/// was among the peers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetForce {
    pub force: NVec2,
    pub anchor_distance: Option<f64>,
}

/// 2D Newtonian gravity
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Force exerted on `body` by `other`, pointing from `body` towards `other`
    pub fn attraction(&self, body: &Body, other: &Body) -> NVec2 {
        let (force, _) = self.attraction_with_distance(body, other);
        force
    }

    fn attraction_with_distance(&self, body: &Body, other: &Body) -> (NVec2, f64) {
        // displacement from body to other
        let dx = other.x.x - body.x.x;
        let dy = other.x.y - body.x.y;
        let distance = (dx * dx + dy * dy).sqrt();

        // F = G * m1 * m2 / r^2
        let force = self.g * body.m * other.m / (distance * distance);

        // split along the direction of the displacement; atan2 keeps the quadrant
        let theta = dy.atan2(dx);
        let fx = theta.cos() * force;
        let fy = theta.sin() * force;

        (NVec2::new(fx, fy), distance)
    }

    /// Sum of the attractions of every peer except `body` itself.
    /// `peers` may contain `body` (matched by id), it is skipped.
    pub fn net_force(&self, body: &Body, peers: &[Body]) -> NetForce {
        let mut total = NVec2::zeros();
        let mut anchor_distance = None;

        for other in peers {
            if other.id == body.id {
                continue;
            }
            let (force, distance) = self.attraction_with_distance(body, other);
            if other.anchor {
                anchor_distance = Some(distance);
            }
            total.x += force.x;
            total.y += force.y;
        }

        NetForce {
            force: total,
            anchor_distance,
        }
    }
}

//! Fixed-step symplectic Euler integrator
//!
//! Velocity is kicked first with the current net force, then the position
//! drifts with the *new* velocity. Bodies are advanced one after another in
//! insertion order, in place, so a body sees the already-advanced positions of
//! the bodies before it in the same tick.

use super::forces::{NetForce, NewtonianGravity};
use super::params::Parameters;
use super::states::{Body, System};

impl Body {
    /// Advance this body by one step against `peers` (which may include itself).
    /// Anchors are left untouched.
    pub fn update(&mut self, peers: &[Body], gravity: &NewtonianGravity, params: &Parameters, tick: u32) {
        if self.anchor {
            return;
        }
        let net = gravity.net_force(self, peers);
        self.advance(net, params, tick);
    }

    fn advance(&mut self, net: NetForce, params: &Parameters, tick: u32) {
        let dt = params.dt;

        if let Some(distance) = net.anchor_distance {
            self.anchor_distance = distance;
        }

        // Kick: v_n+1 = v_n + (F / m) * dt
        self.v.x += net.force.x / self.m * dt;
        self.v.y += net.force.y / self.m * dt;

        // Drift: x_n+1 = x_n + v_n+1 * dt
        self.x.x += self.v.x * dt;
        self.x.y += self.v.y * dt;

        if self.tier.samples_on(tick, params.trail_decimation) {
            self.trail.record(self.x, params.trail_max_len);
        }
    }
}

/// Advance the whole system by one tick (`params.dt` seconds).
/// Bumps the world tick counter, then updates every non-anchor body in order.
pub fn symplectic_euler(sys: &mut System, gravity: &NewtonianGravity, params: &Parameters) {
    let tick = sys.ticks.advance();

    for i in 0..sys.bodies.len() {
        if sys.bodies[i].anchor {
            continue;
        }
        // force from the current state of every body, including ones already moved this tick
        let net = gravity.net_force(&sys.bodies[i], &sys.bodies);
        sys.bodies[i].advance(net, params, tick);
    }

    sys.t += params.dt;
}

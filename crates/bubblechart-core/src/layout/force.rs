// crates/bubblechart-core/src/layout/force.rs
use super::Node;
use std::f64::consts::TAU;

/// One additive contribution to the simulation.
///
/// Forces run in registration order once per tick, before velocities are
/// damped and integrated. `alpha` is the current cooling factor in `(0, 1]`.
pub trait Force {
    fn name(&self) -> &'static str;
    fn apply(&mut self, nodes: &mut [Node], alpha: f64);
}

/// Tiny deterministic offset for nodes that sit on top of each other.
pub(crate) fn jiggle(i: usize, j: usize) -> (f64, f64) {
    let angle = ((i as f64) * 0.618_034 + (j as f64) * 0.414_214) * TAU;
    (angle.cos() * 1e-6, angle.sin() * 1e-6)
}

/// Pairwise repulsion, `strength * alpha / d²` along the separating axis.
#[derive(Debug, Clone, Copy)]
pub struct ManyBody {
    pub strength: f64,
    /// Squared distances below this are softened to avoid blow-ups.
    pub distance_min2: f64,
}

impl ManyBody {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            distance_min2: 1.0,
        }
    }
}

impl Force for ManyBody {
    fn name(&self) -> &'static str {
        "repulsion"
    }

    fn apply(&mut self, nodes: &mut [Node], alpha: f64) {
        if self.strength == 0.0 {
            return;
        }
        let n = nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (mut dx, mut dy) = (nodes[j].x - nodes[i].x, nodes[j].y - nodes[i].y);
                let mut l = dx * dx + dy * dy;
                if l == 0.0 {
                    (dx, dy) = jiggle(i, j);
                    l = dx * dx + dy * dy;
                }
                if l < self.distance_min2 {
                    l = (self.distance_min2 * l).sqrt();
                }
                let w = self.strength * alpha / l;
                nodes[i].vx -= dx * w;
                nodes[i].vy -= dy * w;
                nodes[j].vx += dx * w;
                nodes[j].vy += dy * w;
            }
        }
    }
}

/// Translates all nodes so their centroid moves toward `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct Center {
    pub x: f64,
    pub y: f64,
    pub strength: f64,
}

impl Center {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            strength: 1.0,
        }
    }
}

impl Force for Center {
    fn name(&self) -> &'static str {
        "center"
    }

    fn apply(&mut self, nodes: &mut [Node], _alpha: f64) {
        if nodes.is_empty() {
            return;
        }
        let n = nodes.len() as f64;
        let (sx, sy) = nodes
            .iter()
            .fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
        let shift_x = (sx / n - self.x) * self.strength;
        let shift_y = (sy / n - self.y) * self.strength;
        for node in nodes {
            node.x -= shift_x;
            node.y -= shift_y;
        }
    }
}

/// Velocity-level collision avoidance.
///
/// For every pair whose predicted positions (`x + vx`) overlap, the overlap
/// is split between both nodes in proportion to the *other* node's area, so
/// large bubbles move less than small ones.
#[derive(Debug, Clone, Copy)]
pub struct Collide {
    pub strength: f64,
    pub passes: usize,
}

impl Collide {
    pub fn new(strength: f64, passes: usize) -> Self {
        Self {
            strength,
            passes: passes.max(1),
        }
    }
}

impl Force for Collide {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn apply(&mut self, nodes: &mut [Node], _alpha: f64) {
        let n = nodes.len();
        for _ in 0..self.passes {
            for i in 0..n {
                let xi = nodes[i].x + nodes[i].vx;
                let yi = nodes[i].y + nodes[i].vy;
                let ri = nodes[i].radius;
                let ri2 = ri * ri;
                for j in (i + 1)..n {
                    let rj = nodes[j].radius;
                    let r = ri + rj;
                    let mut x = xi - nodes[j].x - nodes[j].vx;
                    let mut y = yi - nodes[j].y - nodes[j].vy;
                    let mut l = x * x + y * y;
                    if l >= r * r {
                        continue;
                    }
                    if l == 0.0 {
                        (x, y) = jiggle(i, j);
                        l = x * x + y * y;
                    }
                    let d = l.sqrt();
                    let k = (r - d) / d * self.strength;
                    x *= k;
                    y *= k;
                    let rj2 = rj * rj;
                    let share = rj2 / (ri2 + rj2);
                    nodes[i].vx += x * share;
                    nodes[i].vy += y * share;
                    nodes[j].vx -= x * (1.0 - share);
                    nodes[j].vy -= y * (1.0 - share);
                }
            }
        }
    }
}

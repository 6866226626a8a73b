// crates/bubblechart-core/src/layout/mod.rs

//! # Layout Engine
//!
//! A small force simulation that places one circle per item on the canvas
//! without overlap.
//!
//! Each tick runs the registered [`Force`]s (repulsion, centering,
//! collision), damps velocities and integrates positions, then cools
//! `alpha`. The stepped phase stops when `alpha` drops below `alpha_min`,
//! the mean kinetic energy drops below `energy_threshold`, or `max_steps`
//! ticks have run. A settling phase then resolves any overlap that is left
//! with direct position corrections and recenters the result.

pub mod force;
pub mod settle;

pub use force::{Center, Collide, Force, ManyBody};

use crate::config::Canvas;
use crate::error::{ChartError, Result};
use crate::model::{PositionedItem, SizedItem};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::f64::consts::PI;

/// Default `alpha_min`; with the default decay the stepped phase cools in 300 ticks.
pub const DEFAULT_ALPHA_MIN: f64 = 0.001;
const INITIAL_RADIUS: f64 = 10.0;
const ALPHA_EPSILON: f64 = 1e-9;

/// Physical state of one circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Simulation tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pairwise repulsion. Kept weak; collision does the real separating.
    pub repulsion_strength: f64,
    pub center_strength: f64,
    pub collision_strength: f64,
    /// Collision sweeps per tick.
    pub collision_passes: usize,
    /// Fraction of velocity lost each tick.
    pub velocity_decay: f64,
    pub alpha_min: f64,
    pub alpha_decay: f64,
    /// Mean squared speed below which the layout counts as settled.
    pub energy_threshold: f64,
    pub max_steps: usize,
    /// Largest overlap tolerated after settling.
    pub overlap_tolerance: f64,
    /// Safety stop for settling. Dense layouts of a few hundred bubbles
    /// need around a thousand passes.
    pub max_relax_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulsion_strength: 5.0,
            center_strength: 1.0,
            collision_strength: 1.0,
            collision_passes: 1,
            velocity_decay: 0.4,
            alpha_min: DEFAULT_ALPHA_MIN,
            alpha_decay: 1.0 - DEFAULT_ALPHA_MIN.powf(1.0 / 300.0),
            energy_threshold: 1e-4,
            max_steps: 300,
            overlap_tolerance: 0.01,
            max_relax_passes: 10_000,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ChartError::InvalidConfig(msg));
        if self.max_steps == 0 {
            return invalid("layout.max_steps must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.velocity_decay) {
            return invalid(format!(
                "layout.velocity_decay must be within [0, 1], got {}",
                self.velocity_decay
            ));
        }
        if !(self.alpha_decay > 0.0 && self.alpha_decay <= 1.0) {
            return invalid(format!(
                "layout.alpha_decay must be within (0, 1], got {}",
                self.alpha_decay
            ));
        }
        if !(self.alpha_min > 0.0) || !(self.overlap_tolerance > 0.0) {
            return invalid("layout.alpha_min and layout.overlap_tolerance must be positive".into());
        }
        if self.collision_passes == 0 {
            return invalid("layout.collision_passes must be at least 1".into());
        }
        Ok(())
    }
}

/// How a layout run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub steps: usize,
    /// `true` only when kinetic energy fell below `energy_threshold`.
    /// Cooling out or hitting the step cap leaves it `false`.
    pub converged: bool,
    pub kinetic_energy: f64,
    pub relax_passes: usize,
    /// Overlap left after settling; within tolerance unless the pass cap hit.
    pub max_overlap: f64,
}

/// A single layout run. Owns its nodes; nothing survives into the next run.
pub struct Simulation {
    items: Vec<SizedItem>,
    nodes: Vec<Node>,
    forces: Vec<Box<dyn Force>>,
    canvas: Canvas,
    config: LayoutConfig,
    alpha: f64,
    steps: usize,
}

impl Simulation {
    pub fn new(items: Vec<SizedItem>, canvas: Canvas, config: LayoutConfig) -> Self {
        let (cx, cy) = canvas.center();
        let nodes = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (x, y) = phyllotaxis(i);
                Node {
                    x: cx + x,
                    y: cy + y,
                    vx: 0.0,
                    vy: 0.0,
                    radius: item.radius,
                }
            })
            .collect();
        let forces: Vec<Box<dyn Force>> = vec![
            Box::new(ManyBody::new(config.repulsion_strength)),
            Box::new(Center {
                x: cx,
                y: cy,
                strength: config.center_strength,
            }),
            Box::new(Collide::new(
                config.collision_strength,
                config.collision_passes,
            )),
        ];
        Self {
            items,
            nodes,
            forces,
            canvas,
            config,
            alpha: 1.0,
            steps: 0,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Advance one step and return the mean kinetic energy afterwards.
    pub fn tick(&mut self) -> f64 {
        self.alpha += (0.0 - self.alpha) * self.config.alpha_decay;
        for force in &mut self.forces {
            force.apply(&mut self.nodes, self.alpha);
        }
        let keep = 1.0 - self.config.velocity_decay;
        for node in &mut self.nodes {
            node.vx *= keep;
            node.vy *= keep;
            node.x += node.vx;
            node.y += node.vy;
        }
        self.steps += 1;
        self.kinetic_energy()
    }

    pub fn kinetic_energy(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .nodes
            .iter()
            .map(|n| n.vx * n.vx + n.vy * n.vy)
            .sum();
        sum / self.nodes.len() as f64
    }

    /// Run to completion.
    pub fn run(&mut self) -> LayoutReport {
        match self.run_while(|_| Ok::<(), Infallible>(())) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Run to completion, calling `check` before every tick and before every
    /// settling pass with the number of iterations done so far. An error
    /// from `check` aborts the run and is returned as-is.
    pub fn run_while<E, F>(&mut self, mut check: F) -> std::result::Result<LayoutReport, E>
    where
        F: FnMut(usize) -> std::result::Result<(), E>,
    {
        let mut energy = 0.0;
        let mut converged = self.nodes.is_empty();
        let mut cooled = false;
        while !converged && !cooled && self.steps < self.config.max_steps {
            check(self.steps)?;
            energy = self.tick();
            converged = energy < self.config.energy_threshold;
            cooled = self.alpha - self.config.alpha_min < ALPHA_EPSILON;
            if self.steps % 50 == 0 {
                log::trace!(
                    "step {}: alpha {:.4}, energy {:.6}",
                    self.steps,
                    self.alpha,
                    energy
                );
            }
        }

        let steps = self.steps;
        let (relax_passes, max_overlap) = settle::relax(
            &mut self.nodes,
            self.config.overlap_tolerance,
            self.config.max_relax_passes,
            |pass| check(steps + pass),
        )?;
        self.recenter();

        if max_overlap > self.config.overlap_tolerance {
            log::warn!(
                "layout left an overlap of {max_overlap:.3} after {relax_passes} settling passes"
            );
        }
        log::debug!(
            "layout of {} nodes: {} steps (converged: {converged}), {relax_passes} settling passes",
            self.nodes.len(),
            self.steps
        );

        Ok(LayoutReport {
            steps: self.steps,
            converged,
            kinetic_energy: energy,
            relax_passes,
            max_overlap,
        })
    }

    /// Translate the whole arrangement so its centroid sits on the canvas center.
    fn recenter(&mut self) {
        let (cx, cy) = self.canvas.center();
        Center::new(cx, cy).apply(&mut self.nodes, 0.0);
    }

    pub fn into_positioned(self) -> Vec<PositionedItem> {
        self.items
            .into_iter()
            .zip(self.nodes)
            .map(|(sized, node)| PositionedItem {
                name: sized.item.name,
                value: sized.item.value,
                full_name: sized.item.full_name,
                radius: sized.radius,
                x: node.x,
                y: node.y,
            })
            .collect()
    }
}

/// Initial spiral placement around the origin.
fn phyllotaxis(i: usize) -> (f64, f64) {
    let angle = i as f64 * PI * (3.0 - 5f64.sqrt());
    let r = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
    (r * angle.cos(), r * angle.sin())
}

/// Lay out `items` on `canvas` with the default [`LayoutConfig`].
pub fn layout(items: Vec<SizedItem>, canvas: Canvas) -> Vec<PositionedItem> {
    layout_with(items, canvas, LayoutConfig::default()).0
}

pub fn layout_with(
    items: Vec<SizedItem>,
    canvas: Canvas,
    config: LayoutConfig,
) -> (Vec<PositionedItem>, LayoutReport) {
    let mut sim = Simulation::new(items, canvas, config);
    let report = sim.run();
    (sim.into_positioned(), report)
}

// crates/bubblechart-core/src/cycle.rs

//! # Chart cycle
//!
//! One selection change = one cycle: aggregate → derive scale → lay out.
//! Cycles share nothing; the only cross-cycle coordination is the
//! generation counter in [`ChartSession`], which lets a newer selection
//! stop an older layout that is still running.

use crate::aggregate::aggregate;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::layout::{LayoutReport, Simulation};
use crate::model::{AggregationMode, PositionedItem};
use crate::raw::RawCountry;
use crate::scale::{derive_scale_with, RadiusScale};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Result of one cycle, ready for a table or a drawing.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub mode: AggregationMode,
    pub scale: RadiusScale,
    pub items: Vec<PositionedItem>,
    pub report: LayoutReport,
}

impl Chart {
    /// `(name, value)` rows in layout order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.items.iter().map(|p| (p.name.as_str(), p.value))
    }
}

/// Run a full cycle for `selection` with no supersede checks.
pub fn run_cycle(
    countries: &[RawCountry],
    selection: &str,
    config: &ChartConfig,
) -> Result<Chart> {
    run_cycle_while(countries, selection, config, |_| Ok(()))
}

fn run_cycle_while<F>(
    countries: &[RawCountry],
    selection: &str,
    config: &ChartConfig,
    check: F,
) -> Result<Chart>
where
    F: FnMut(usize) -> Result<()>,
{
    config.validate()?;
    let mode = AggregationMode::from_token(selection);
    let items = aggregate(countries, mode)?;
    let scale = derive_scale_with(&items, &config.scale);

    let mut sim = Simulation::new(scale.size(items), config.canvas, config.layout.clone());
    let report = sim.run_while(check)?;
    let items = sim.into_positioned();

    log::info!(
        "cycle '{selection}' ({mode}): {} items, {} steps, max overlap {:.3}",
        items.len(),
        report.steps,
        report.max_overlap
    );
    Ok(Chart {
        mode,
        scale,
        items,
        report,
    })
}

/// Hands out [`CycleTicket`]s; starting a cycle invalidates older tickets.
///
/// Cloning a session shares the counter, so a UI thread can hold one clone
/// and begin new cycles while a worker lays out the previous one.
#[derive(Debug, Clone, Default)]
pub struct ChartSession {
    generation: Arc<AtomicU64>,
}

/// Identifies one cycle. Stale once a newer cycle begins.
#[derive(Debug, Clone)]
pub struct CycleTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl CycleTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.id
    }

    /// `Err(Superseded)` once a newer ticket exists.
    pub fn check(&self) -> Result<()> {
        let current = self.generation.load(Ordering::Acquire);
        if current == self.id {
            Ok(())
        } else {
            Err(ChartError::Superseded {
                ticket: self.id,
                current,
            })
        }
    }
}

impl ChartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding any in flight.
    pub fn begin(&self) -> CycleTicket {
        let id = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        CycleTicket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Begin and run a cycle. Stops with [`ChartError::Superseded`] if
    /// another cycle begins before this one finishes.
    pub fn run(
        &self,
        countries: &[RawCountry],
        selection: &str,
        config: &ChartConfig,
    ) -> Result<Chart> {
        let ticket = self.begin();
        run_ticketed(&ticket, countries, selection, config)
    }
}

/// Run a cycle under an existing ticket.
///
/// The ticket is checked before every layout iteration and once more
/// before the chart is handed back.
pub fn run_ticketed(
    ticket: &CycleTicket,
    countries: &[RawCountry],
    selection: &str,
    config: &ChartConfig,
) -> Result<Chart> {
    let result = run_cycle_while(countries, selection, config, |_| ticket.check())
        .and_then(|chart| ticket.check().map(|()| chart));
    if let Err(ChartError::Superseded { ticket, current }) = &result {
        log::debug!("cycle {ticket} for '{selection}' dropped; cycle {current} is newer");
    }
    result
}

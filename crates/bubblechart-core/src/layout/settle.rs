// crates/bubblechart-core/src/layout/settle.rs
use super::force::jiggle;
use super::Node;

/// Largest pairwise overlap, 0 if no two nodes intersect.
pub fn max_overlap(nodes: &[Node]) -> f64 {
    let mut worst: f64 = 0.0;
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let d = (a.x - b.x).hypot(a.y - b.y);
            worst = worst.max(a.radius + b.radius - d);
        }
    }
    worst
}

/// One Gauss-Seidel sweep of position corrections.
///
/// Each overlapping pair is pushed to `r_i + r_j + slack` apart, the
/// displacement split by the other node's share of the pair's area.
/// Returns the number of pairs corrected.
fn relax_pass(nodes: &mut [Node], slack: f64) -> usize {
    let n = nodes.len();
    let mut corrected = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let (mut dx, mut dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
            let min = nodes[i].radius + nodes[j].radius;
            let mut d = dx.hypot(dy);
            if d >= min {
                continue;
            }
            if d == 0.0 {
                (dx, dy) = jiggle(i, j);
                d = dx.hypot(dy);
            }
            let push = (min - d + slack) / d;
            let ri2 = nodes[i].radius * nodes[i].radius;
            let rj2 = nodes[j].radius * nodes[j].radius;
            let share = rj2 / (ri2 + rj2);
            nodes[i].x += dx * push * share;
            nodes[i].y += dy * push * share;
            nodes[j].x -= dx * push * (1.0 - share);
            nodes[j].y -= dy * push * (1.0 - share);
            corrected += 1;
        }
    }
    corrected
}

/// Separate nodes until no pair overlaps by more than `tolerance`.
///
/// `max_passes` is a hard stop; reaching it with overlap left is reported
/// through the returned `remaining_overlap`. `check` runs before every
/// sweep with the sweep index, and an error from it aborts the settling.
/// Returns `(passes, remaining_overlap)`.
pub fn relax<E, F>(
    nodes: &mut [Node],
    tolerance: f64,
    max_passes: usize,
    mut check: F,
) -> Result<(usize, f64), E>
where
    F: FnMut(usize) -> Result<(), E>,
{
    let slack = tolerance * 0.5;
    let mut passes = 0;
    let mut worst = max_overlap(nodes);
    while worst > tolerance && passes < max_passes {
        check(passes)?;
        let corrected = relax_pass(nodes, slack);
        passes += 1;
        worst = max_overlap(nodes);
        log::trace!("relax pass {passes}: {corrected} pairs, worst overlap {worst:.4}");
    }
    Ok((passes, worst))
}

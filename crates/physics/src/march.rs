//! Sphere tracing
//!
//! Stepping a ray by the current field value can never overshoot the nearest
//! surface, because the field never overestimates distance. The fixed-step
//! tracer below is the correctness-critical variant used for collision
//! queries; the overstepping variant skips empty space faster and is meant
//! for visibility-scale queries where a rare backtrack is acceptable.

use field::DistanceField;
use glam::Vec3;

/// Budgets and thresholds for a single march
#[derive(Debug, Clone, Copy)]
pub struct MarchConfig {
    /// Maximum number of field evaluations
    pub max_steps: u32,
    /// Field value below which the ray counts as having hit a surface
    pub min_hit: f32,
    /// Travel distance beyond which the ray counts as a miss
    pub max_dist: f32,
}

impl MarchConfig {
    /// Budget for short movement queries tied to the player radius
    pub fn movement() -> Self {
        Self {
            max_steps: 10,
            min_hit: 0.01,
            max_dist: 100.0,
        }
    }

    /// Budget for long visibility queries
    pub fn visibility() -> Self {
        Self {
            max_steps: 16,
            min_hit: 0.1,
            max_dist: 100.0,
        }
    }
}

/// How a march terminated
///
/// Budget exhaustion is deliberately distinct from both outcomes: a ray that
/// ran out of steps inside `max_dist` found no surface, but has not proven
/// the corridor clear either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarchOutcome {
    /// The field value dropped below `min_hit`
    Hit,
    /// The ray traveled past `max_dist` without hitting anything
    Miss,
    /// The step budget ran out while still inside `max_dist`
    BudgetExhausted,
}

/// Distance traveled plus how the march ended
#[derive(Debug, Clone, Copy)]
pub struct MarchResult {
    /// Distance traveled along the ray
    pub distance: f32,
    /// Termination cause
    pub outcome: MarchOutcome,
}

impl MarchResult {
    /// True if the scene obstructs the ray within `radius`
    ///
    /// Conservative: an exhausted budget that stalled inside `radius` counts
    /// as blocked, since the ray got stuck near geometry. A genuine miss
    /// never blocks.
    pub fn blocked_within(&self, radius: f32) -> bool {
        self.outcome != MarchOutcome::Miss && self.distance <= radius
    }

    /// True if the march found a surface
    pub fn is_hit(&self) -> bool {
        self.outcome == MarchOutcome::Hit
    }
}

/// Fixed-step sphere trace from `origin` along `dir`
///
/// `dir` must be pre-normalized by the caller. Returns the distance traveled
/// when the field value first drops below `min_hit`, the ray leaves
/// `max_dist`, or the step budget runs out. The miss bound takes precedence:
/// once the ray has traveled past `max_dist` no hit is reported, even when a
/// surface lies at the current point.
pub fn march(
    field: &dyn DistanceField,
    origin: Vec3,
    dir: Vec3,
    config: &MarchConfig,
) -> MarchResult {
    let mut t = 0.0;

    for _ in 0..config.max_steps {
        if t > config.max_dist {
            return MarchResult {
                distance: t,
                outcome: MarchOutcome::Miss,
            };
        }

        let h = field.distance(origin + dir * t);
        if h < config.min_hit {
            return MarchResult {
                distance: t,
                outcome: MarchOutcome::Hit,
            };
        }

        t += h;
    }

    let outcome = if t > config.max_dist {
        MarchOutcome::Miss
    } else {
        MarchOutcome::BudgetExhausted
    };
    MarchResult { distance: t, outcome }
}

/// Accelerated sphere trace that oversteps through open space
///
/// While the field keeps growing along the ray, the step is inflated by an
/// overstep estimate damped against the previous field value; when the
/// estimate proves wrong the ray retreats by the accumulated overstep and
/// resumes conservatively. Do not use for collision queries: only the
/// fixed-step [`march`] carries the no-overshoot guarantee.
pub fn march_overstep(
    field: &dyn DistanceField,
    origin: Vec3,
    dir: Vec3,
    config: &MarchConfig,
) -> MarchResult {
    let mut t = 0.0;
    let mut h = f32::MAX;
    let mut prev_h = config.max_dist;
    let mut overstep = 0.0;

    for _ in 0..config.max_steps {
        if t > config.max_dist {
            break;
        }

        h = field.distance(origin + dir * t);
        if h < config.min_hit {
            break;
        }

        if h > overstep {
            // Field still opening up: stretch the step.
            overstep = h * (0.5 * h / prev_h).min(1.0);
            t += h * 0.5 + overstep;
            prev_h = h;
        } else {
            // Overshot past a narrowing: back out and go conservative.
            t -= overstep;
            prev_h = config.max_dist;
            overstep = 0.0;
        }
    }

    // Same precedence as the fixed-step tracer: past the miss bound no hit
    // is reported.
    let outcome = if t > config.max_dist {
        MarchOutcome::Miss
    } else if h < config.min_hit {
        MarchOutcome::Hit
    } else {
        MarchOutcome::BudgetExhausted
    };
    MarchResult { distance: t, outcome }
}

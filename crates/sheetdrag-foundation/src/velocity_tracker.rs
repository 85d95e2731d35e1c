//! Pointer velocity estimation.
//!
//! Impulse strategy: each pair of consecutive samples contributes the
//! kinetic energy it would impart on a unit mass, and the accumulated energy
//! is converted back into a velocity. It reacts to the latest movement
//! without overshooting on a single noisy sample.

use sheetdrag_ui_graphics::Point;
use smallvec::SmallVec;

use crate::gesture_constants::MAX_FLING_VELOCITY;

/// Ring buffer size for samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one are considered.
const HORIZON_MS: u64 = 100;

/// A gap this long between two samples means the pointer had stopped.
const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    position: Point,
}

/// Two-axis velocity tracker fed with absolute pointer positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_position(&mut self, time_ms: u64, position: Point) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in logical pixels per second; zero until two recent samples
    /// exist.
    pub fn velocity(&self) -> Point {
        let recent = self.recent_samples();
        if recent.len() < 2 {
            return Point::ZERO;
        }
        let newest_time = recent[0].time_ms;
        // Times relative to the newest sample, oldest first.
        let timeline: SmallVec<[(f32, Point); HISTORY_SIZE]> = recent
            .iter()
            .rev()
            .map(|sample| (sample.time_ms as f32 - newest_time as f32, sample.position))
            .collect();

        Point::new(
            impulse_velocity(&timeline, |p| p.x) * 1000.0,
            impulse_velocity(&timeline, |p| p.y) * 1000.0,
        )
    }

    /// [`Self::velocity`] clamped per axis to [`MAX_FLING_VELOCITY`].
    pub fn clamped_velocity(&self) -> Point {
        let velocity = self.velocity();
        Point::new(clamp_component(velocity.x), clamp_component(velocity.y))
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }

    /// Newest-first samples inside the horizon, stopping at the first stall.
    fn recent_samples(&self) -> SmallVec<[Sample; HISTORY_SIZE]> {
        let mut recent: SmallVec<[Sample; HISTORY_SIZE]> = SmallVec::new();
        let Some(newest) = self.samples[self.newest] else {
            return recent;
        };

        let mut index = self.newest;
        let mut previous = newest;
        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous.time_ms.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            recent.push(sample);
            previous = sample;
            if recent.len() == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }
        recent
    }
}

/// Units per millisecond along the axis picked by `component`.
fn impulse_velocity(timeline: &[(f32, Point)], component: impl Fn(Point) -> f32) -> f32 {
    let mut work = 0.0f32;
    let mut first_pair = true;

    for pair in timeline.windows(2) {
        let (t0, p0) = pair[0];
        let (t1, p1) = pair[1];
        if t0 == t1 {
            continue;
        }
        let v_curr = (component(p1) - component(p0)) / (t1 - t0);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if first_pair {
            work *= 0.5;
            first_pair = false;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

fn clamp_component(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
}

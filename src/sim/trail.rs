//! Time-ordered ball position history for the fading trail

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A recorded ball position and how long ago it was recorded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub pos: Vec2,
    /// Seconds since recorded
    pub age: f32,
}

/// Ball history, oldest sample at the front
#[derive(Debug, Clone)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
    duration: f32,
}

impl Trail {
    /// A trail that looks as if the ball has been resting at `pos` forever
    pub fn primed(pos: Vec2, duration: f32) -> Self {
        let mut samples = VecDeque::with_capacity(256);
        samples.push_back(TrailSample { pos, age: duration });
        samples.push_back(TrailSample { pos, age: 0.0 });
        Self { samples, duration }
    }

    /// Age every sample by `dt`, record `pos`, then drop stale history.
    ///
    /// The oldest sample is only dropped once the one after it is also past
    /// the duration, so there is always a pair bracketing any time within it.
    pub fn advance(&mut self, pos: Vec2, dt: f32) {
        for sample in self.samples.iter_mut() {
            sample.age += dt;
        }
        self.samples.push_back(TrailSample { pos, age: 0.0 });

        while self.samples.len() >= 2 && self.samples[1].age > self.duration {
            self.samples.pop_front();
        }
    }

    /// Samples from oldest to newest
    pub fn samples(&self) -> &VecDeque<TrailSample> {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Seconds of history the trail keeps
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

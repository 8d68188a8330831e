// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame driving: per-frame updates and a fixed-step clock.

use crate::scene::Scene;

/// Per-frame scene update, called by [`Scene::tick`] before drawing.
///
/// Implementations should be deterministic in `time_ms`: replaying the same
/// sequence of times must produce the same sequence of surface commands.
pub trait Animation {
    /// Move sprites for the frame at `time_ms` (milliseconds since start).
    fn update(&mut self, scene: &mut Scene, time_ms: u64);
}

impl<F: FnMut(&mut Scene, u64)> Animation for F {
    fn update(&mut self, scene: &mut Scene, time_ms: u64) {
        self(scene, time_ms);
    }
}

/// Monotonic frame times at a fixed interval, starting at zero.
///
/// Stands in for a display clock when rendering offline or in tests.
#[derive(Clone, Debug)]
pub struct FixedClock {
    interval_ms: u64,
    next_ms: Option<u64>,
}

impl FixedClock {
    /// A clock ticking every `interval_ms` milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if `interval_ms` is zero, which would not be monotonic.
    pub fn new(interval_ms: u64) -> Self {
        assert!(interval_ms > 0, "frame interval must be positive");
        Self {
            interval_ms,
            next_ms: Some(0),
        }
    }

    /// The interval between frames.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl Iterator for FixedClock {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let now = self.next_ms?;
        self.next_ms = now.checked_add(self.interval_ms);
        Some(now)
    }
}

// ABOUTME: Choice of one recipe from a slot's lowest-scoring candidate window
// ABOUTME: Deterministic best-of-window by default, or seeded uniform sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// How the planner picks from the candidate window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Always the lowest-scoring candidate; every attempt is identical
    #[default]
    BestOfWindow,
    /// Uniform choice within the window from a seeded generator
    Seeded {
        /// Generator seed; equal seeds reproduce equal plans
        seed: u64,
    },
}

/// Per-request picker state
pub(super) enum Picker {
    First,
    Random(ChaCha8Rng),
}

impl Picker {
    /// One picker per plan request, so a seed reproduces the whole search
    pub(super) fn for_policy(policy: SelectionPolicy) -> Self {
        match policy {
            SelectionPolicy::BestOfWindow => Self::First,
            SelectionPolicy::Seeded { seed } => Self::Random(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Index into a non-empty window of `len` candidates
    pub(super) fn pick(&mut self, len: usize) -> usize {
        match self {
            Self::First => 0,
            Self::Random(rng) if len > 1 => rng.gen_range(0..len),
            Self::Random(_) => 0,
        }
    }
}

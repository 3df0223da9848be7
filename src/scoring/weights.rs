// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::Word;

/// Relative importance of each field. Unset fields weigh 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexWeights {
    weights: HashMap<Word, f64>,
}

impl IndexWeights {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(&self, field: &Word) -> f64 {
        self.weights
            .get(field)
            .copied()
            .unwrap_or(Self::DEFAULT_WEIGHT)
    }

    /// Overwrites any earlier weight for `field`.
    pub fn set_weight(&mut self, field: Word, weight: f64) {
        self.weights.insert(field, weight);
    }

    /// Fields with an explicit weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a matched word turns into relevancy.
//!
//! Three things multiply together. How close the match was, how rare the
//! indexed word is in its field, and how much the field itself is worth.

mod core;
mod weights;

pub use core::*;
pub use weights::*;

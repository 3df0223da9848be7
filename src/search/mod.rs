// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything a query carries in and out: parameters, filters and results.

mod filter;
mod params;
mod results;

pub use filter::*;
pub use params::*;
pub use results::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model that gets indexed: documents and the corpus holding them.

mod collection;
mod document;

pub use collection::*;
pub use document::*;

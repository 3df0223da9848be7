// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text primitives: words, word lists, and the tokenizer that makes them.

mod tokenizer;
mod word;
mod word_list;

pub use tokenizer::*;
pub use word::*;
pub use word_list::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ready-made error tables: accents, keyboard typos, phone keypads.
//!
//! All tables use lowercase letters. Matching folds case before comparing,
//! so uppercase entries would never be consulted.

use super::ErrorValues;
use crate::error::Result;
use crate::text::{Letter, Word};

/// Which built-in accent table to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentGroup {
    Latin,
    Greek,
}

const LATIN_ACCENT_GROUPS: &[&str] = &[
    "aàáâãäåāăą",
    "cçćĉċč",
    "dďđ",
    "eèéêëēĕėęě",
    "gĝğġģ",
    "hĥħ",
    "iìíîïĩīĭįı",
    "jĵ",
    "kķ",
    "lĺļľŀł",
    "nñńņňŉ",
    "oòóôõöøōŏő",
    "rŕŗř",
    "sśŝşš",
    "tţťŧ",
    "uùúûüũūŭůűų",
    "wŵ",
    "yýÿŷ",
    "zźżž",
];

const GREEK_ACCENT_GROUPS: &[&str] = &[
    "αά",
    "εέ",
    "ηή",
    "ιίϊΐ",
    "οό",
    "υύϋΰ",
    "ωώ",
];

// A Nordic QWERTY layout, row by row.
const KEYBOARD_ROWS: [&[Letter]; 4] = [
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '+'],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'å'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'ö', 'ä', '\''],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '-'],
];

// Phone keypad, 3x3. Key `1` carries no letters.
const PAD_NUMBERS: [[Letter; 3]; 3] = [['1', '2', '3'], ['4', '5', '6'], ['7', '8', '9']];
const PAD_LETTERS: [[&str; 3]; 3] = [
    ["", "abc", "def"],
    ["ghi", "jkl", "mno"],
    ["pqrs", "tuv", "wxyz"],
];
const PAD_SAME_BUTTON_ERROR: i32 = 0;
const PAD_ADJACENT_BUTTON_ERROR: i32 = 50;

impl ErrorValues {
    /// Make accented letters cheap substitutes for their base letter.
    ///
    /// Nothing is added when any letter of the table already has a group.
    pub fn add_accents(&mut self, group: AccentGroup) -> Result<()> {
        let table = match group {
            AccentGroup::Latin => LATIN_ACCENT_GROUPS,
            AccentGroup::Greek => GREEK_ACCENT_GROUPS,
        };
        let lines: Vec<Word> = table.iter().map(|line| Word::from_token(line)).collect();
        for line in &lines {
            self.check_group(line.letters())?;
        }
        for line in &lines {
            self.set_group_error(line, Self::DEFAULT_GROUP_ERROR)?;
        }
        Ok(())
    }

    /// Neighbouring keys on the same row and on the row below are cheap typos.
    pub fn add_keyboard_errors(&mut self) {
        let error = Self::DEFAULT_TYPO_ERROR;
        for pair in KEYBOARD_ROWS.windows(2) {
            let (row, next) = (pair[0], pair[1]);
            for (j, &key) in row.iter().enumerate() {
                if let Some(&right) = row.get(j + 1) {
                    self.set_error(key, right, error);
                }
                if j > 0 {
                    if let Some(&below_left) = next.get(j - 1) {
                        self.set_error(key, below_left, error);
                    }
                }
                if let Some(&below) = next.get(j) {
                    self.set_error(key, below, error);
                }
            }
        }
    }

    /// Digits match their own keypad letters for free and neighbouring
    /// buttons' letters at a discount. For T9-style numeric queries.
    pub fn add_numberpad_errors(&mut self) {
        for row in 0..3 {
            for col in 0..3 {
                let number = PAD_NUMBERS[row][col];
                self.set_pad_error(number, PAD_LETTERS[row][col], PAD_SAME_BUTTON_ERROR);

                let mut neighbours = Vec::with_capacity(4);
                if col > 0 {
                    neighbours.push((row, col - 1));
                }
                if col + 1 < 3 {
                    neighbours.push((row, col + 1));
                }
                if row > 0 {
                    neighbours.push((row - 1, col));
                }
                if row + 1 < 3 {
                    neighbours.push((row + 1, col));
                }
                for (r, c) in neighbours {
                    self.set_pad_error(number, PAD_LETTERS[r][c], PAD_ADJACENT_BUTTON_ERROR);
                }
            }
        }
    }

    /// Latin accents plus keyboard typos.
    pub fn add_standard_errors(&mut self) -> Result<()> {
        self.add_accents(AccentGroup::Latin)?;
        self.add_keyboard_errors();
        Ok(())
    }

    fn set_pad_error(&mut self, number: Letter, letters: &str, error: i32) {
        debug_assert!(number.is_ascii_digit());
        for letter in letters.chars() {
            self.set_error(number, letter, error);
        }
    }
}

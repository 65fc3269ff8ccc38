// src/models/quote_table.rs
use clap::ValueEnum;
use serde::Deserialize;

pub const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
pub const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Selects which replacement table a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// Legacy behaviour: curly double quotes pass through unchanged and the
    /// reported count is twice the number of right double quotes
    Faithful,
    /// Every curly quote becomes its ASCII counterpart and the count covers
    /// both curly double quotes once each
    #[default]
    Corrected,
}

/// An ordered list of character substitutions plus the characters whose
/// occurrences make up the reported count.
///
/// Substitutions are applied one after another over the whole text, so a
/// later pair sees the output of an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTable {
    replacements: Vec<(char, char)>,
    counted: Vec<char>,
}

impl QuoteTable {
    #[must_use]
    pub fn for_mode(mode: TableMode) -> Self {
        match mode {
            TableMode::Faithful => Self {
                replacements: vec![
                    (RIGHT_DOUBLE_QUOTE, RIGHT_DOUBLE_QUOTE),
                    (RIGHT_DOUBLE_QUOTE, RIGHT_DOUBLE_QUOTE),
                    (LEFT_SINGLE_QUOTE, '\''),
                    (RIGHT_SINGLE_QUOTE, '\''),
                ],
                // Same character twice, so every occurrence counts double
                counted: vec![RIGHT_DOUBLE_QUOTE, RIGHT_DOUBLE_QUOTE],
            },
            TableMode::Corrected => Self {
                replacements: vec![
                    (LEFT_DOUBLE_QUOTE, '"'),
                    (RIGHT_DOUBLE_QUOTE, '"'),
                    (LEFT_SINGLE_QUOTE, '\''),
                    (RIGHT_SINGLE_QUOTE, '\''),
                ],
                counted: vec![LEFT_DOUBLE_QUOTE, RIGHT_DOUBLE_QUOTE],
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn replacements(&self) -> &[(char, char)] {
        &self.replacements
    }

    #[inline]
    #[must_use]
    pub fn counted(&self) -> &[char] {
        &self.counted
    }
}

impl Default for QuoteTable {
    fn default() -> Self {
        Self::for_mode(TableMode::default())
    }
}

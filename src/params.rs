// src/params.rs
use std::path::PathBuf;

use crate::classify::GroupRules;
use crate::csv::Delim;
use crate::rounding::Rounding;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Human-readable group tables + verdict (the default renderer).
    Summary,
    Delimited(Delim),
    Json,
}

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>,   // saved page; None = read stdin
    pub out: Option<PathBuf>,     // None = stdout
    pub format: Format,
    pub rounding: Rounding,
    pub include_headers: bool,    // header row for csv/tsv
    pub rules: GroupRules,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            out: None,
            format: Format::Summary,
            rounding: Rounding::Half,
            include_headers: false,
            rules: GroupRules::default(),
        }
    }
}

// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications: each spec encodes *where the ground
//! truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## Conventions & invariants
//! - **Case-insensitive** tag detection; avoid brittle full-document regexes.
//! - Prefer **local scanning within known blocks** (`<table>…</table>`,
//!   `<tr>…</tr>`) using the `core::html` helpers.
//! - Return **stable row shapes** per page so the rest of the pipeline can
//!   rely on them (grades page = name cell markup + grade cell text).
//! - Absence of the table or of qualifying rows is a **normal empty result**,
//!   never an error.
//! - Specs only extract; grouping, rounding and the promotion rule live with
//!   the report layer.
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline HTML fixtures.
//! - Keep selectors resilient to whitespace, attribute order, and harmless
//!   markup noise.

pub mod grades;

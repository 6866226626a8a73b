//! bubblechart-cli
//! ===============
//!
//! Command-line front end for `bubblechart-core`.
//!
//! The binary (`bubblechart`) loads a countries dataset, aggregates it by a
//! selection token, lays the result out as non-overlapping bubbles and
//! prints a table, JSON, or a standalone SVG. The library target holds the
//! pieces the binary is built from so they can be tested directly.
//!
//! Quick start
//! -----------
//!
//! ```text
//! bubblechart --input countries.json modes
//! bubblechart --input countries.json stats
//! bubblechart --input countries.json chart population
//! bubblechart --input countries.json chart regionCountries --format json
//! bubblechart --input countries.json chart languages --format svg -o chart.svg
//! ```
//!
//! With the `fetch` feature, `--url` (or no input at all) downloads the
//! public dataset instead.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
pub mod settings;

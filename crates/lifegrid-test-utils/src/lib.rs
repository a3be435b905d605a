//! Test utilities and pattern fixtures for lifegrid development.
//!
//! Provides well-known Life patterns as cell lists ([`patterns`]), an
//! ASCII grid parser and renderer for readable expectations, and the
//! neighbour-subset enumeration used by the combinatorial rule tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod patterns;

pub use fixtures::{neighbour_subsets, parse_grid, render, ParsedGrid};
pub use patterns::Pattern;

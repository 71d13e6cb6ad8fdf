//! org-loc: line-of-code reporting for a whole GitHub organization
//!
//! Lists an organization's repositories, shallow-clones every active one into a
//! scratch workspace, runs `cloc` against each clone, and sums the per-repository
//! reports into a single table.

pub mod aggregate;
pub mod clone;
pub mod config;
pub mod count;
pub mod filter;
pub mod github;
pub mod run;
pub mod tools;
pub mod workspace;

pub mod cli;

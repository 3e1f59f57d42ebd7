//! # viewlint-core
//!
//! Core engine for style-checking declarative UI trees.
//!
//! An external syntax-tree builder supplies an immutable [`Tree`] of nodes
//! (declarations and invocation chains with byte offsets); rules describe
//! modifier shapes as data ([`ModifierSpec`]) and traversal policies as
//! decision functions, and the engine reports where the composition breaks
//! a style contract. It includes:
//!
//! - [`Node`] / [`Tree`] / [`TreeBuilder`] for the arena-backed input tree
//! - [`ModifierSpec`] and [`ArgumentSpec`] for invocation shapes
//! - [`matcher`] for textual invocation matching and content extraction
//! - [`walker`] for policy-driven traversal and violation collection
//! - [`Rule`] and [`Linter`] for composing and running rule sets
//!
//! ## Example
//!
//! ```ignore
//! use viewlint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = linter.lint(&trees);
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod modifier;
mod node;
mod rule;
mod types;

/// Textual invocation matching.
pub mod matcher;
/// Policy-driven tree traversal.
pub mod walker;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{Linter, LinterBuilder};
pub use modifier::{ArgumentSpec, MatchMode, ModifierSpec};
pub use node::{Node, NodeId, NodeKind, Tree, TreeBuilder};
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Severity, Violation, ViolationDiagnostic, ViolationTemplate};
pub use walker::{Decision, Site, Walk};

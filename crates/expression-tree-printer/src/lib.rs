//! expression-tree-printer - indented text dumps of expression trees.
//!
//! [`TreePrinter`] walks an [`expression_tree::Expression`] depth-first and
//! renders every node as a header, a node-info line, its metadata, and its
//! labeled children, two spaces deeper per level. Equal trees always print
//! equal text, so [`print_equivalent`] and [`first_difference`] can stand in
//! for structural equality.

mod equivalence;
pub mod format;
mod printer;

pub use equivalence::{first_difference, first_text_difference, print_equivalent, LineDifference};
pub use printer::{print_tree, TreePrinter};

//! Structural equivalence by printed text.
//!
//! Two trees are treated as the same program when their dumps are equal.

use std::fmt;

use expression_tree::Expression;

use crate::printer::TreePrinter;

/// First line at which two dumps disagree. Line numbers are 1-based; a side
/// is `None` when its dump ended before that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    pub line: usize,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl fmt::Display for LineDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {:?} != {:?}",
            self.line,
            self.left.as_deref().unwrap_or("<end>"),
            self.right.as_deref().unwrap_or("<end>")
        )
    }
}

pub fn print_equivalent(left: &Expression, right: &Expression) -> bool {
    let mut printer = TreePrinter::new();
    let left = printer.print(left);
    let right = printer.print(right);
    left == right
}

pub fn first_difference(left: &Expression, right: &Expression) -> Option<LineDifference> {
    let mut printer = TreePrinter::new();
    let left = printer.print(left);
    let right = printer.print(right);
    first_text_difference(&left, &right)
}

/// Line-wise comparison of two already printed dumps.
pub fn first_text_difference(left: &str, right: &str) -> Option<LineDifference> {
    let mut left_lines = left.lines();
    let mut right_lines = right.lines();
    let mut line = 0;
    loop {
        line += 1;
        match (left_lines.next(), right_lines.next()) {
            (None, None) => return None,
            (l, r) if l == r => continue,
            (l, r) => {
                return Some(LineDifference {
                    line,
                    left: l.map(str::to_string),
                    right: r.map(str::to_string),
                })
            }
        }
    }
}

//! JSON form of expression trees.
//!
//! Trees are stored with serde's default externally tagged layout: each node
//! is `{"node_type": .., "type": .., "kind": {"<Variant>": {..}}}`.

use std::io::Read;

use crate::error::TreeError;
use crate::expr::Expression;

pub fn from_json_str(input: &str) -> Result<Expression, TreeError> {
    Ok(serde_json::from_str(input)?)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Expression, TreeError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn to_json_string(expression: &Expression) -> Result<String, TreeError> {
    Ok(serde_json::to_string_pretty(expression)?)
}

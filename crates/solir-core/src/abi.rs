//! Canonical ABI spelling of Solidity types.
//!
//! Type names as written in source (`IERC20[]`, `Order`, `Price`) are not what a
//! selector hashes. The type checker's identifiers carry enough structure to
//! recover the ABI type: `t_array$_t_contract$_IERC20_$40_$dyn_calldata_ptr` is
//! `address[]`, `t_struct$_Order_$12_memory_ptr` is the tuple of `Order`'s members.

use crate::function::Parameter;
use crate::types::NodeId;
use std::collections::HashMap;

const MAX_NESTING: usize = 32;

/// User defined types a canonical signature has to spell out, keyed by
/// declaration id: struct members and the underlying type of each user
/// defined value type.
#[derive(Debug, Clone, Default)]
pub struct AbiTypes {
    structs: HashMap<NodeId, Vec<Parameter>>,
    value_types: HashMap<NodeId, String>,
}

impl AbiTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_struct(&mut self, id: NodeId, members: Vec<Parameter>) {
        self.structs.insert(id, members);
    }

    pub fn add_value_type(&mut self, id: NodeId, underlying: impl Into<String>) {
        self.value_types.insert(id, underlying.into());
    }

    /// ABI type of `parameter`. Falls back to the declared type name when the
    /// identifier is missing or names a type with no ABI encoding.
    pub fn parameter_type(&self, parameter: &Parameter) -> String {
        self.resolve_parameter(parameter, 0)
    }

    /// ABI type named by a type identifier, if it has one.
    pub fn resolve(&self, type_identifier: &str) -> Option<String> {
        self.resolve_identifier(type_identifier, 0)
    }

    fn resolve_parameter(&self, parameter: &Parameter, depth: usize) -> String {
        self.resolve_identifier(&parameter.type_description.type_identifier, depth)
            .unwrap_or_else(|| elementary_type(&parameter.type_name))
    }

    fn resolve_identifier(&self, identifier: &str, depth: usize) -> Option<String> {
        if identifier.is_empty() || depth > MAX_NESTING {
            return None;
        }

        if let Some(rest) = identifier.strip_prefix("t_array$_") {
            let (element, tail) = split_nested(rest)?;
            let element = self.resolve_identifier(element, depth + 1)?;
            return match tail.split('_').next().unwrap_or_default() {
                "dyn" => Some(format!("{}[]", element)),
                length if !length.is_empty() && length.bytes().all(|b| b.is_ascii_digit()) => {
                    Some(format!("{}[{}]", element, length))
                }
                _ => None,
            };
        }

        if let Some(rest) = identifier.strip_prefix("t_struct$_") {
            let members = self.structs.get(&declaration_id(rest)?)?;
            let members: Vec<String> = members
                .iter()
                .map(|member| self.resolve_parameter(member, depth + 1))
                .collect();
            return Some(format!("({})", members.join(",")));
        }

        if let Some(rest) = identifier.strip_prefix("t_userDefinedValueType$_") {
            return self.value_types.get(&declaration_id(rest)?).cloned();
        }

        if identifier.starts_with("t_contract$_") || identifier.starts_with("t_address") {
            return Some("address".to_string());
        }
        if identifier.starts_with("t_enum$_") {
            return Some("uint8".to_string());
        }
        if identifier.starts_with("t_string") {
            return Some("string".to_string());
        }
        if identifier == "t_bytes" || identifier.starts_with("t_bytes_") {
            return Some("bytes".to_string());
        }
        if identifier.starts_with("t_function_external") {
            return Some("function".to_string());
        }

        let base = identifier.strip_prefix("t_")?.split('_').next()?;
        let elementary = ["uint", "int", "bytes", "bool", "fixed", "ufixed"]
            .iter()
            .any(|prefix| base.starts_with(prefix));
        elementary.then(|| base.to_string())
    }
}

/// ABI spelling of a type name written in source, for parameters that carry
/// no type identifier.
pub fn elementary_type(type_name: &str) -> String {
    match type_name {
        "uint" => "uint256",
        "int" => "int256",
        "byte" => "bytes1",
        "address payable" => "address",
        other if other.starts_with("contract ") || other.starts_with("interface ") => "address",
        other if other.starts_with("enum ") => "uint8",
        other => other,
    }
    .to_string()
}

/// Splits `s`, which follows an opening `$_`, at its matching `_$`.
fn split_nested(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'$', b'_') => {
                depth += 1;
                i += 2;
            }
            (b'_', b'$') => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[..i], &s[i + 2..]));
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    None
}

/// Declaration id in the `<name>_$<id>...` tail of a user defined type identifier.
fn declaration_id(rest: &str) -> Option<NodeId> {
    let (_, tail) = split_nested(rest)?;
    let end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
    tail[..end].parse().ok()
}

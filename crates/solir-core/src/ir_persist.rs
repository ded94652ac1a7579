use crate::root::RootSourceUnit;
use crate::schema::{ir_pb, ToSchema};
use crate::Result;
use std::fs;
use std::path::Path;

pub fn save_root(root: &RootSourceUnit, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(root)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_root(path: impl AsRef<Path>) -> Result<RootSourceUnit> {
    let json = fs::read_to_string(path)?;
    let root = serde_json::from_str(&json)?;
    Ok(root)
}

pub fn save_schema(root: &RootSourceUnit, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&root.to_schema())?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_schema(path: impl AsRef<Path>) -> Result<ir_pb::Root> {
    let json = fs::read_to_string(path)?;
    let message = serde_json::from_str(&json)?;
    Ok(message)
}

use crate::config::EmitterConfig;
use crate::emitter::Emitter;
use crate::ir_emitter::IrEmitter;
use anyhow::{bail, Result};
use solir_core::{RootSourceUnit, ToSchema};
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented listing for reading.
    Text,
    /// Field-named JSON of the IR.
    Json,
    /// JSON of the schema-typed projection.
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Compact,
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "schema" | "pb" => Ok(OutputFormat::Schema),
            other => bail!("Unknown output format: {}", other),
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, style: OutputStyle) -> Result<String> {
    let json = match style {
        OutputStyle::Compact => serde_json::to_string(value)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

pub fn render(
    root: &RootSourceUnit,
    format: OutputFormat,
    style: OutputStyle,
    config: &EmitterConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => IrEmitter::new(config.clone()).emit_to_string(root),
        OutputFormat::Json => to_json(root, style),
        OutputFormat::Schema => to_json(&root.to_schema(), style),
    }
}

/// Renders several roots as one document. The JSON formats produce an array
/// in input order; text listings follow one another.
pub fn render_all(
    roots: &[RootSourceUnit],
    format: OutputFormat,
    style: OutputStyle,
    config: &EmitterConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let emitter = IrEmitter::new(config.clone());
            let mut listing = String::new();
            for root in roots {
                listing.push_str(&emitter.emit_to_string(root)?);
                if !listing.ends_with('\n') {
                    listing.push('\n');
                }
            }
            Ok(listing)
        }
        OutputFormat::Json => to_json(roots, style),
        OutputFormat::Schema => {
            let messages: Vec<_> = roots.iter().map(|root| root.to_schema()).collect();
            to_json(&messages, style)
        }
    }
}

pub fn write_output<W: Write>(
    writer: &mut W,
    root: &RootSourceUnit,
    format: OutputFormat,
    style: OutputStyle,
    config: &EmitterConfig,
) -> Result<()> {
    let rendered = render(root, format, style, config)?;
    writer.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}

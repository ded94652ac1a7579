/*! Render solir IR for people and tools.
 *
 * A built IR tree is read in three ways: as an indented listing while reviewing a contract, as
 * field-named JSON for downstream analysis, and as the schema-typed projection for consumers bound
 * to the message schema. The listing highlights external calls and detected standards.
 */

pub mod config;
pub mod emitter;
pub mod ir_emitter;
pub mod output;

pub use config::{EmitterConfig, IndentStyle, VerbosityLevel};
pub use emitter::{EmitContext, EmitHelper, EmitResult, Emitter, Tone};
pub use ir_emitter::IrEmitter;
pub use output::{render, render_all, write_output, OutputFormat, OutputStyle};

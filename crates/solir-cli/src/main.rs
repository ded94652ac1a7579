use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use solir_ast::Ast;
use solir_core::{RootSourceUnit, StandardsRegistry};
use solir_emit::{render, render_all, EmitterConfig, OutputFormat, OutputStyle, VerbosityLevel};
use solir_transform::{build_from_ast, collect_comments, extract_links, BuilderConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "solir")]
#[command(about = "solir - Solidity AST to IR with call resolution and standards detection")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build IR from a compiler-style AST JSON file, or every `.json` file in a directory.
    Build {
        input: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Solidity source to collect comments from when the AST has none.
        #[arg(long)]
        source: Option<PathBuf>,

        #[arg(long)]
        no_standards: bool,

        #[arg(long)]
        no_links: bool,

        #[arg(long)]
        allow_errors: bool,

        #[arg(long)]
        compact: bool,

        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in standards in precedence order.
    Standards {
        #[arg(short, long)]
        verbose: bool,
    },

    /// Extract links from the comments of a Solidity file.
    Links { input: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Schema,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Schema => OutputFormat::Schema,
        }
    }
}

struct BuildOptions {
    format: Format,
    output: Option<PathBuf>,
    source: Option<PathBuf>,
    config: BuilderConfig,
    compact: bool,
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            format,
            output,
            source,
            no_standards,
            no_links,
            allow_errors,
            compact,
            verbose,
        } => {
            let config = BuilderConfig {
                process_standards: !no_standards,
                process_links: !no_links,
                allow_upstream_errors: allow_errors,
            };
            cmd_build(
                input,
                BuildOptions {
                    format,
                    output,
                    source,
                    config,
                    compact,
                    verbose,
                },
            )
        }
        Commands::Standards { verbose } => cmd_standards(verbose),
        Commands::Links { input } => cmd_links(input),
    }
}

fn ast_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("Input not found: {}", input.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn build_one(path: &Path, options: &BuildOptions, registry: &StandardsRegistry) -> Result<RootSourceUnit> {
    let mut ast = Ast::from_file(path).with_context(|| format!("Failed to load AST {}", path.display()))?;

    if let Some(source) = &options.source {
        if ast.comments().is_empty() {
            let text = fs::read_to_string(source)?;
            ast = ast.with_comments(collect_comments(&text)?);
        }
    }

    build_from_ast(&ast, registry, options.config.clone())
}

fn cmd_build(input: PathBuf, options: BuildOptions) -> Result<()> {
    let verbose = options.verbose;
    if verbose {
        println!("{}", " solir Builder".bright_blue().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!(" Input: {}", input.display());
        if let Some(ref out) = options.output {
            println!(" Output: {}", out.display());
        }
        println!(" Format: {:?}", options.format);
        println!();
    }

    let from_directory = input.is_dir();
    if from_directory && options.source.is_some() {
        bail!("--source pairs one Solidity file with one AST and cannot be used with a directory");
    }

    let start = Instant::now();
    let inputs = ast_inputs(&input)?;
    if inputs.is_empty() {
        println!("{}", "  No AST files found in input".yellow());
        return Ok(());
    }

    let registry = StandardsRegistry::builtin();
    let emitter_config = EmitterConfig {
        use_colors: options.output.is_none(),
        include_standards: options.config.process_standards,
        include_links: options.config.process_links,
        verbosity: if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        },
        ..Default::default()
    };
    let style = if options.compact {
        OutputStyle::Compact
    } else {
        OutputStyle::Pretty
    };

    let mut roots = Vec::with_capacity(inputs.len());
    for path in &inputs {
        if verbose {
            println!(" Building {}...", path.display());
        }
        let root = build_one(path, &options, &registry)?;

        if verbose {
            println!(
                "   {} contract(s), {} standard(s), {} link(s)",
                root.contracts_count,
                root.standards.len(),
                root.links.len()
            );
        }
        roots.push(root);
    }

    let format: OutputFormat = options.format.into();
    let mut rendered = match roots.as_slice() {
        [root] if !from_directory => render(root, format, style, &emitter_config)?,
        _ => render_all(&roots, format, style, &emitter_config)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match options.output {
        Some(output_path) => {
            fs::write(&output_path, &rendered)?;
            if verbose {
                println!("\n {} Build successful!", "SUCCESS:".bright_green().bold());
                println!("   Time: {:.3}s", start.elapsed().as_secs_f64());
                println!("   Output: {}", output_path.display());
            }
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn cmd_standards(verbose: bool) -> Result<()> {
    let registry = StandardsRegistry::builtin();

    for (idx, standard) in registry.iter().enumerate() {
        println!(
            "{:>2}. {} - {} ({} tokens)",
            idx + 1,
            standard.kind.to_string().bright_green().bold(),
            standard.name,
            standard.token_count()
        );

        if verbose {
            if !standard.url.is_empty() {
                println!("      {}", standard.url.bright_blue());
            }
            for function in &standard.functions {
                println!("      function {}", function);
            }
            for event in &standard.events {
                println!("      event {}", event);
            }
        }
    }

    Ok(())
}

fn cmd_links(input: PathBuf) -> Result<()> {
    let source = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let comments = collect_comments(&source)?;

    let links: Vec<_> = comments
        .iter()
        .flat_map(|comment| extract_links(&comment.text))
        .collect();

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    for link in links {
        match link.platform {
            Some(platform) => println!("{} {}", link.url, format!("[{}]", platform.as_str()).bright_cyan()),
            None => println!("{}", link.url),
        }
    }

    Ok(())
}

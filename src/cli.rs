//! Minimal CLI: example JSON → (python | tree)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::{debug, info};

use json_dataclass::{Error, Indent, Options};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build Python dataclasses and a `translate` function from example JSON
#[derive(Parser, Debug)]
#[command(name = "json-dataclass", version)]
pub struct CommandLineInterface {
    /// log more (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit the Python module
    Python(PythonOut),
    /// infer and print the resolved type tree as JSON
    Tree(TreeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// name of the top-level structure
    #[arg(long, short)]
    name: String,

    /// read the example from this file
    #[arg(long, short, conflicts_with = "text", required_unless_present = "text")]
    filename: Option<PathBuf>,

    /// inline example JSON text
    #[arg(long, short)]
    text: Option<String>,

    /// JSON Pointer selecting the example inside the document (e.g. /data/0)
    #[arg(long)]
    json_pointer: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IndentStyle {
    Tab,
    Spaces,
}

#[derive(clap::Parser, Debug)]
struct PythonOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .py file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// parameter name of the generated `translate` function
    #[arg(long, default_value = json_dataclass::codegen::DEFAULT_INPUT_BINDING)]
    binding: String,

    /// indentation of class bodies and `translate`
    #[arg(long, value_enum, default_value_t = IndentStyle::Tab)]
    indent: IndentStyle,

    /// width used with `--indent spaces`
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    spaces: u8,
}

#[derive(clap::Parser, Debug)]
struct TreeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Value> {
        let (source, origin) = match (&self.filename, &self.text) {
            (Some(path), _) => {
                let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                (source, path.display().to_string())
            }
            (None, Some(text)) => (text.clone(), "--text".to_string()),
            (None, None) => anyhow::bail!("enter filename or text"),
        };
        let value = serde_json::from_str::<Value>(&source)
            .map_err(Error::from)
            .with_context(|| format!("invalid example JSON in {origin}"))?;
        debug!(%origin, bytes = source.len(), "loaded example");

        match self.json_pointer.as_deref() {
            None => Ok(value),
            Some(pointer) => value
                .pointer(pointer)
                .cloned()
                .ok_or_else(|| Error::PointerNotFound { pointer: pointer.to_string() }.into()),
        }
    }
}

impl PythonOut {
    fn options(&self) -> Options {
        let indent = match self.indent {
            IndentStyle::Tab => Indent::Tab,
            IndentStyle::Spaces => Indent::Spaces(self.spaces),
        };
        Options { input_binding: self.binding.clone(), indent }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Explicit `-v` wins over `RUST_LOG`.
    pub fn log_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Python(target) => {
                let settings = &target.input_settings;
                let example = settings.load()?;
                let src = json_dataclass::generate_with(&settings.name, &example, target.options())
                    .with_context(|| format!("failed to generate `{}`", settings.name))?;
                write_output(target.output.as_deref(), &src)
            }
            Command::Tree(target) => {
                let settings = &target.input_settings;
                let example = settings.load()?;
                let view = json_dataclass::describe(&settings.name, &example)?;
                let out = serde_json::to_string_pretty(&view)?;
                write_output(target.output.as_deref(), &out)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    let Some(out) = out else {
        print!("{contents}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("failed to write {}", out.display()))?;
    info!(path = %out.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

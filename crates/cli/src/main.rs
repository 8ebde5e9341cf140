//! Memory core demo driver.
//!
//! This binary exercises the memory management core end to end. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file, and flag overrides.
//! 2. **Loading:** Builds a program from command-line opcodes and places it with the selected strategy.
//! 3. **Pagination:** Carves the memory into pages unless disabled.
//! 4. **Inspection:** Prints the hex dump of the resulting memory state.
//!
//! Set `RUST_LOG=trace` to see the structured operation trace emitted by
//! the core.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::{fs, process};

use emumem_core::config::{Config, LoaderKind};
use emumem_core::{Memory, Pagination, Program};

/// Opcodes loaded when no program bytes are given on the command line.
const DEMO_PROGRAM: &[u8] = &[0x13, 0x17, 0x6f, 0x73];

#[derive(Parser, Debug)]
#[command(
    name = "emumem",
    author,
    version,
    about = "Byte-addressable memory core demo",
    long_about = "Build a program, load it into an emulated memory with the selected \
strategy, paginate the address space, and dump the result.\n\nExamples:\n  \
emumem\n  emumem --memory-size 64 --page-size 16 0x13 0x6f 0x73\n  \
emumem --config memory.json --loader static"
)]
struct Cli {
    /// JSON configuration file (flags below override its values).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Memory size in bytes.
    #[arg(long)]
    memory_size: Option<usize>,

    /// Page size in bytes for pagination.
    #[arg(long)]
    page_size: Option<usize>,

    /// Placement strategy for loading the program.
    #[arg(long, value_enum)]
    loader: Option<LoaderArg>,

    /// Skip carving the memory into pages after loading.
    #[arg(long)]
    no_paginate: bool,

    /// Program opcodes (decimal or 0x-prefixed hex); a small demo program
    /// is used when none are given.
    #[arg(value_parser = parse_opcode)]
    opcodes: Vec<u8>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LoaderArg {
    /// Place at address zero whenever any free byte exists.
    Static,
    /// First-fit placement at the first free byte.
    Dynamic,
}

impl From<LoaderArg> for LoaderKind {
    fn from(arg: LoaderArg) -> Self {
        match arg {
            LoaderArg::Static => Self::Static,
            LoaderArg::Dynamic => Self::Dynamic,
        }
    }
}

/// Parses an opcode byte, accepting decimal or `0x`-prefixed hex.
fn parse_opcode(raw: &str) -> Result<u8, String> {
    let parsed = raw.strip_prefix("0x").map_or_else(
        || raw.parse::<u8>(),
        |hex| u8::from_str_radix(hex, 16),
    );
    parsed.map_err(|e| format!("invalid opcode '{raw}': {e}"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Runs the demo: configure, load, paginate, dump.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(size) = cli.memory_size {
        config.memory.size = size;
    }
    if let Some(page_size) = cli.page_size {
        config.paging.page_size = page_size;
    }
    if let Some(loader) = cli.loader {
        config.loader = loader.into();
    }

    let opcodes = if cli.opcodes.is_empty() {
        DEMO_PROGRAM
    } else {
        &cli.opcodes
    };

    let mut program = Program::new(config.program.capacity.max(opcodes.len()))?;
    for &opcode in opcodes {
        let address = program.add_instruction(opcode)?;
        println!("added instruction {opcode:#04x} at address {address}");
    }

    let mut memory = Memory::new(config.memory.size)?;
    memory.add(&program, config.loader.strategy())?;
    println!(
        "loaded {} byte program via the {:?} loader",
        program.capacity(),
        config.loader
    );

    if !cli.no_paginate {
        let view = Pagination::new(&mut memory, config.paging.page_size)?;
        println!(
            "paginated into {} pages of {} bytes",
            view.page_count(),
            view.page_size()
        );
    }

    println!("{}", memory.inspect());
    Ok(())
}

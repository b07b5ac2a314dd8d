//! Command-line truth-table generator.
//!
//! Assembles a table from repeatable `--op` flags and prints it as text,
//! optionally saving an HTML document:
//!
//! ```text
//! tablegen --inputs "A|B" --op "NOT:A:NOT A" --op "AND:A|NOT A:always0" --output table.html
//! ```

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use ttab_rs::document::{HtmlDocument, TextDocument};
use ttab_rs::gate::Gate;
use ttab_rs::operation::Operation;
use ttab_rs::table::Table;

#[derive(Parser)]
#[command(version, about = "Truth table generator")]
struct Cli {
    /// Pipe-delimited input variable names, e.g. "A|B|C"
    #[arg(short, long, value_name = "NAMES")]
    inputs: String,

    /// Derived column as GATE:INPUTS[:HEADER], e.g. "AND:A|B:both"
    #[arg(long = "op", value_name = "SPEC")]
    ops: Vec<String>,

    /// Save the table as a standalone HTML document
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn parse_op(spec: &str) -> Result<Operation> {
    let mut parts = spec.splitn(3, ':');
    let gate: Gate = parts.next().unwrap_or("").parse()?;
    let inputs = parts
        .next()
        .ok_or_else(|| eyre!("operation spec {:?} is missing inputs", spec))?;

    let mut op = Operation::new(gate, inputs);
    if let Some(header) = parts.next() {
        op = op.header(header);
    }
    Ok(op)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let operations = cli
        .ops
        .iter()
        .map(|spec| parse_op(spec))
        .collect::<Result<Vec<_>>>()?;
    let table = Table::new(&cli.inputs, operations)?;

    let mut text = TextDocument::new();
    table.to_document(&mut text);
    print!("{}", text.to_text());

    if let Some(output) = cli.output {
        let mut html = HtmlDocument::new();
        table.export(&mut html, &output)?;
        log::info!("saved {}", output.display());
    }

    Ok(())
}

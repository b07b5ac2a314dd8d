//! Builds the truth table of a four-variable sum-of-products expression,
//! chaining NOT columns into AND terms and the AND terms into the final
//! OR column.

use ttab_rs::document::{HtmlDocument, TextDocument};
use ttab_rs::operation::Operation;
use ttab_rs::table::Table;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let operations = vec![
        // Base negations.
        Operation::not("A").header("NOT A"),
        Operation::not("B").header("NOT B"),
        Operation::not("C").header("NOT C"),
        Operation::not("D").header("NOT D"),
        Operation::and("NOT A|C").header("A̅C"),
        Operation::and("NOT A|B|D").header("A̅BD"),
        // Product terms of the final sum.
        Operation::and("A̅C|A̅BD").header("A̅C(A̅BD)"),
        Operation::and("NOT A|B|NOT C|NOT D").header("A̅BC̅D̅"),
        Operation::and("A|NOT B|C").header("AB̅C"),
        // The sum itself.
        Operation::or("A̅C(A̅BD)|A̅BC̅D̅|AB̅C").header("A̅C(A̅BD) + A̅BC̅D̅ + AB̅C"),
    ];

    let table = Table::new("A|B|C|D", operations)?;

    let mut text = TextDocument::new();
    table.to_document(&mut text);
    println!("{}", text.to_text());

    let mut html = HtmlDocument::new();
    table.export(&mut html, "sum_of_products.html")?;
    println!("Saved sum_of_products.html");

    Ok(())
}

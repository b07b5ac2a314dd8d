use ttab_rs::document::{HtmlDocument, TextDocument};
use ttab_rs::operation::Operation;
use ttab_rs::table::Table;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let table = Table::new(
        "A|B|C",
        vec![
            Operation::not("A").header("NOT A"),
            Operation::not("B").header("NOT B"),
            Operation::and("A|NOT B").header("A AND NOT B"),
        ],
    )?;

    println!("inputs = {:?}", table.inputs());
    println!("rows = {}", table.num_rows());
    println!("headers = {:?}", table.display_names());

    let mut text = TextDocument::new();
    table.to_document(&mut text);
    println!("{}", text.to_text());

    let mut html = HtmlDocument::new();
    table.export(&mut html, "simple.html")?;
    println!("Saved simple.html");

    Ok(())
}

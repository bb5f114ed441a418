// Entry point and interactive console flow.
//
// - The dataset is loaded once at startup; any load failure aborts.
// - All insights are computed up front into a `Catalog`.
// - The user then picks insights from a numbered menu until they exit.
use anyhow::{Context, Result};
use ardd_insights::{config, insights, loader, output, util, Catalog, Selection};
use std::io::{self, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Read a single trimmed line after printing the common "Enter choice:" prompt.
///
/// Returns `None` once stdin is closed.
fn read_choice() -> Option<String> {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Ask whether to go back to the insight menu.
///
/// Returns `true` for `Y`, `false` for `N` or end of input.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Insight Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        match buf.trim().to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Map menu input to a selection. Accepts the menu number or the exact
/// insight name.
fn parse_choice(input: &str) -> Option<Selection> {
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Selection::ALL.get(i))
            .copied();
    }
    input.parse::<Selection>().ok()
}

fn print_menu() {
    println!("Insights");
    println!("Select an insight to view:");
    for (i, sel) in Selection::ALL.iter().enumerate() {
        println!("[{}] {}", i + 1, sel.key());
    }
    println!("");
}

fn run(catalog: &Catalog) {
    loop {
        print_menu();
        let Some(input) = read_choice() else {
            break;
        };
        let Some(selection) = parse_choice(&input) else {
            println!("Invalid choice. Please enter 1-9 or an insight name.\n");
            continue;
        };
        println!("");
        print!(
            "{}",
            output::render_insight(selection.info(), catalog.get(selection))
        );
        println!("");
        if !prompt_back_to_menu() {
            break;
        }
    }
    println!("\n{}", output::DATA_SOURCE_NOTE);
    println!("Exiting the program.");
}

fn main() -> Result<()> {
    // RUST_LOG wins, otherwise info. Logs go to stderr to keep the menu clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr).compact())
        .init();

    let path = config::data_path().context("failed to resolve dataset path")?;
    let (data, report) = loader::load(&path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    let catalog = insights::build_catalog(&data);

    println!("Australian Traffic Accident Analysis\n");
    match (report.first_year, report.last_year) {
        (Some(first), Some(last)) => println!(
            "{} records loaded ({}–{})\n",
            util::format_int(report.total_rows),
            first,
            last
        ),
        _ => println!("{} records loaded\n", util::format_int(report.total_rows)),
    }

    run(&catalog);
    Ok(())
}

// Command-line front end.
//
// With `--item` the binary loads the file, prints the ranking and exits.
// Otherwise it runs a small menu: load a dataset, pick an item, show the
// top areas, repeat.
mod logging;

use chrono::Utc;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use trade_recommender::output;
use trade_recommender::types::ExportSummary;
use trade_recommender::{Ranking, Session, Severity, TradeError, DEFAULT_TOP_N, PLACEHOLDER_ITEM};

#[derive(Parser, Debug)]
#[command(name = "trade_recommender")]
#[command(about = "Rank the most promising trading areas per commodity")]
#[command(version)]
struct Cli {
    /// CSV dataset with item, area, import, export, production, consumption columns
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Item to rank; skips the interactive menu
    #[arg(short, long)]
    item: Option<String>,

    /// Number of areas to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    top: usize,

    /// Write the ranking to this CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Write the ranking with metadata to this JSON file
    #[arg(long)]
    export_json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn report_error(e: &TradeError) {
    match e.severity() {
        Severity::Warning => eprintln!("Warning: {}\n", e),
        Severity::Error => eprintln!("Error: {}\n", e),
    }
}

fn handle_load(session: &mut Session, path: &Path) -> bool {
    match session.load(path) {
        Ok(ds) => {
            let report = ds.report();
            println!("Dataset loaded successfully. Now choose an item.");
            println!(
                "({} rows, {} items; clamped {} import and {} consumption values)\n",
                report.total_rows,
                ds.items().len(),
                report.clamped_import,
                report.clamped_consumption
            );
            true
        }
        Err(e) => {
            report_error(&e);
            false
        }
    }
}

fn handle_show(session: &Session, item: &str, cli: &Cli) {
    let rows = match session.top_countries(item, cli.top) {
        Ok(Ranking::Ranked(rows)) => rows,
        Ok(Ranking::NoData) => {
            println!("Info: No data found for selected item.\n");
            return;
        }
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    println!("Top {} areas for {}\n", rows.len(), item);
    println!("{}\n", output::render_table(&rows));

    if let Some(path) = &cli.export_csv {
        match output::write_csv(path, &rows) {
            Ok(()) => println!("(Table exported to {})", path.display()),
            Err(e) => eprintln!("Write error: {}", e),
        }
    }
    if let Some(path) = &cli.export_json {
        let summary = ExportSummary {
            item: item.to_string(),
            generated_at: Utc::now(),
            total_rows: rows.len(),
            rows,
        };
        match output::write_json(path, &summary) {
            Ok(()) => println!("(Summary exported to {})", path.display()),
            Err(e) => eprintln!("Write error: {}", e),
        }
    }
}

/// Let the user choose an item by number or name. Returns the placeholder
/// when nothing valid was chosen so the ranker reports the missing selection.
fn select_item(session: &Session) -> String {
    let items = session.items();
    for (i, item) in items.iter().enumerate() {
        println!("[{}] {}", i + 1, item);
    }
    let Some(choice) = read_line("Select item (number or name): ") else {
        return PLACEHOLDER_ITEM.to_string();
    };
    match choice.parse::<usize>() {
        Ok(i) if (1..=items.len()).contains(&i) => items[i - 1].clone(),
        Ok(_) => PLACEHOLDER_ITEM.to_string(),
        Err(_) => choice,
    }
}

fn run_menu(session: &mut Session, cli: &Cli) {
    loop {
        println!("[1] Load dataset");
        println!("[2] Show top countries for an item");
        println!("[3] Exit\n");
        let Some(choice) = read_line("Enter choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let default = cli.file.as_ref().map(|p| p.display().to_string());
                let prompt = match &default {
                    Some(d) => format!("CSV path [{}]: ", d),
                    None => "CSV path: ".to_string(),
                };
                let Some(input) = read_line(&prompt) else {
                    break;
                };
                let path = match (input.is_empty(), default) {
                    (true, Some(d)) => PathBuf::from(d),
                    (true, None) => {
                        println!("No file selected.\n");
                        continue;
                    }
                    (false, _) => PathBuf::from(input),
                };
                handle_load(session, &path);
            }
            "2" => {
                if session.dataset().is_none() {
                    report_error(&TradeError::NoDataset);
                    continue;
                }
                let item = select_item(session);
                println!();
                handle_show(session, &item, cli);
            }
            "3" => {
                println!("Exiting the program.");
                break;
            }
            _ => println!("Invalid choice. Please enter 1, 2 or 3.\n"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut session = Session::new();

    if let Some(item) = cli.item.clone() {
        let Some(path) = cli.file.clone() else {
            report_error(&TradeError::NoDataset);
            std::process::exit(2);
        };
        if !handle_load(&mut session, &path) {
            std::process::exit(1);
        }
        handle_show(&session, &item, &cli);
        return;
    }

    if let Some(path) = cli.file.clone() {
        handle_load(&mut session, &path);
    }
    run_menu(&mut session, &cli);
}

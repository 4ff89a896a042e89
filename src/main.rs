use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use stafftable::jsonl::{read_employees, write_employees};
use stafftable::render::render_page;
use stafftable::shell::Shell;
use stafftable::{Column, Config, EmployeeTable, seed_employees};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stafftable")]
#[command(about = "StaffTable CLI - Browse and edit an in-memory employee table")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Config file (default: ~/.config/stafftable/config.yml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load employees from a JSONL file instead of the built-in demo data
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// View parameters shared by `show` and `export`
#[derive(clap::Args)]
struct ViewArgs {
    /// Case-insensitive text searched in every column
    #[arg(long, default_value = "")]
    search: String,

    /// Only show this department (exact name, e.g. Engineering)
    #[arg(long, default_value = "")]
    department: String,

    /// Column to sort by; repeat the same column to reverse
    #[arg(long = "sort", value_parser = parse_column)]
    sort: Vec<Column>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the table
    Show {
        #[command(flatten)]
        view: ViewArgs,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write every matching row as JSONL, in sort order
    Export {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Interactive session reading commands from stdin
    Shell,
}

fn parse_column(s: &str) -> Result<Column, String> {
    s.parse().map_err(|e: stafftable::TableError| e.to_string())
}

fn apply_view(table: &mut EmployeeTable, view: &ViewArgs) {
    table.set_filter(&view.search, &view.department);
    for column in &view.sort {
        table.sort_by(*column);
    }
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    let records = match &cli.seed {
        Some(path) => read_employees(path)?,
        None => seed_employees(),
    };
    let mut table = EmployeeTable::with_config(records, &config).context("Invalid table configuration")?;

    match cli.command {
        Commands::Show {
            view,
            page,
            page_size,
            json,
        } => {
            if let Some(size) = page_size {
                table.set_page_size(size)?;
            }
            apply_view(&mut table, &view);
            table.set_page(page);

            let current = table.page();
            if json {
                let out = serde_json::json!({
                    "page": current.page,
                    "page_count": current.page_count,
                    "page_size": current.page_size,
                    "shown_count": current.shown_count,
                    "total_count": current.total_count,
                    "rows": current.rows,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render_page(&current, table.sort()));
            }
        }
        Commands::Export { view } => {
            apply_view(&mut table, &view);
            let mut stdout = io::stdout().lock();
            write_employees(&mut stdout, table.view_records())?;
        }
        Commands::Shell => {
            let mut shell = Shell::new(table);
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            shell.run(stdin, &mut stdout)?;
        }
    }

    Ok(())
}

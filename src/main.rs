use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::graph::NO_DATA_MESSAGE;
use expense_tracker::cli::{run_shell, GraphController, Prompter};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::Palette;
use expense_tracker::models::{CategoryId, TimeRange};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Terminal-based personal expense and income tracker",
    long_about = "Track expenses and incomes by category from the terminal, and \
                  graph them per date over a daily, weekly, monthly or total range."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Print a trend graph and exit
    Graph {
        /// Time range: daily, weekly, monthly or total
        #[arg(short, long, default_value = "total")]
        range: TimeRange,
        /// Only include this category ID
        #[arg(short, long)]
        category: Option<u32>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        log::warn!("{}; using default settings", e);
        Settings::default()
    });
    let palette = Palette::new(settings.use_color);

    let mut storage = Storage::new(paths.clone())?;
    for error in storage.load_all() {
        eprintln!("{}", palette.warning(&format!("Warning: {}", error)));
    }

    let today = chrono::Local::now().date_naive();

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), palette)
                .with_date_format(settings.entry_date_format.clone());
            run_shell(&mut storage, today, &mut prompter)?;
        }
        Some(Commands::Graph { range, category }) => {
            let controller = GraphController::new(&storage, today);
            if !controller.has_data() {
                println!("{}", palette.warning(NO_DATA_MESSAGE));
                return Ok(());
            }
            for line in controller.graph(range, category.map(CategoryId::new))? {
                println!("{}", line);
            }
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Entry date format: {}", settings.entry_date_format);
            println!("  Colored output:    {}", settings.use_color);
            println!();
            println!("Records:");
            println!("  Categories: {}", storage.categories.count());
            println!("  Expenses:   {}", storage.expenses.count());
            println!("  Incomes:    {}", storage.incomes.count());
        }
    }

    Ok(())
}

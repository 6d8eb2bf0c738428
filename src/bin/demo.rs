//! promptline-demo - interactive tour of every prompt kind.
//!
//! Runs Confirm, Input, Select, and MultiSelect in sequence and prints
//! the collected answers. Cancellation at any point exits cleanly.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use promptline::{bind, Confirm, Input, MultiSelect, OptionItem, PromptError, Select, Theme};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Demo configuration
struct Config {
    /// Clear the screen before each frame
    clear_screen: bool,
    /// Theme for all prompts
    theme: Theme,
}

fn print_version() {
    eprintln!("promptline-demo {}", VERSION);
}

fn print_help() {
    eprintln!(
        "promptline-demo {} - interactive tour of the prompt kinds",
        VERSION
    );
    eprintln!();
    eprintln!("Usage: promptline-demo [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --clear               Clear the screen before each frame");
    eprintln!("  -t, --theme <FILE>    Load a TOML theme file");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys: arrows navigate, space toggles, enter confirms,");
    eprintln!("      Ctrl+C or Ctrl+Q cancels.");
    eprintln!();
    eprintln!("Log file: ~/.promptline/promptline.log");
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config {
        clear_screen: false,
        theme: Theme::default(),
    };
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "--clear" => {
                config.clear_screen = true;
            }
            "-t" | "--theme" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing theme file argument".to_string());
                }
                config.theme = Theme::load(Path::new(&args[i]));
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Initialize logging to ~/.promptline/promptline.log
fn init_logging() {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from);

    let log_path = home
        .map(|h| h.join(".promptline").join("promptline.log"))
        .unwrap_or_else(|| PathBuf::from("promptline.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let config = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("promptline-demo starting");

    match run_tour(&config) {
        Ok(()) => {
            info!("tour finished");
            Ok(())
        }
        Err(e) if e.is_canceled() => {
            println!("canceled");
            info!("tour canceled by user");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_tour(config: &Config) -> Result<(), PromptError> {
    let proceed = Confirm {
        title: "Take the tour?".into(),
        default: true,
        clear_screen: config.clear_screen,
        theme: config.theme.clone(),
        ..Default::default()
    }
    .run()?;
    if !proceed {
        println!("maybe later");
        return Ok(());
    }

    let name = Input {
        title: "Name: ".into(),
        placeholder: "anonymous".into(),
        validate: Some(Box::new(|value: &str| {
            if value.trim().is_empty() {
                Err("name must not be empty".into())
            } else {
                Ok(())
            }
        })),
        clear_screen: config.clear_screen,
        theme: config.theme.clone(),
        ..Default::default()
    }
    .run()?;

    let language = Select {
        title: "Favorite language?".into(),
        options: vec![
            OptionItem::new("Rust", "rust"),
            OptionItem::new("Go", "go"),
            OptionItem::new("Zig", "zig"),
        ],
        clear_screen: config.clear_screen,
        theme: config.theme.clone(),
        ..Default::default()
    }
    .run()?;

    let toppings = MultiSelect {
        title: "Pizza toppings?".into(),
        options: vec![
            OptionItem::new("mushrooms", "mushrooms"),
            OptionItem::new("olives", "olives").with_selected(true),
            OptionItem::new("anchovies", "anchovies"),
        ],
        clear_screen: config.clear_screen,
        theme: config.theme.clone(),
        ..Default::default()
    }
    .run()?;

    let mut chosen = String::new();
    bind::bind_value(&mut chosen, language.to_string());

    println!("hello {name}: language={chosen}, toppings={toppings:?}");
    Ok(())
}

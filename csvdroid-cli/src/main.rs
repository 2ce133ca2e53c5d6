use std::path::PathBuf;

use clap::{Parser, Subcommand};
use csvdroid::{Language, format_row, sanitize_key, sanitize_value};
use csvdroid_cli::{
    config::TableArgs,
    convert::{run_convert_command, run_preview_command},
    inspect::run_inspect_command,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a CSV localization table into Android strings.xml files.
    Convert {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Print the strings.xml documents a conversion would write.
    Preview {
        #[command(flatten)]
        table: TableArgs,

        /// Only show this language (`default`, `fr`, `fr-CA`, ...)
        #[arg(long)]
        show: Option<Language>,
    },

    /// List the strings in an existing strings.xml file.
    Inspect {
        /// The strings.xml file to read
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the Android resource name a raw key turns into.
    SanitizeKey {
        /// Raw key text
        key: String,
    },

    /// Print a raw value as Android string text, or as a full row with --key.
    SanitizeValue {
        /// Raw value text
        value: String,

        /// Render a complete `<string>` row for this key
        #[arg(long)]
        key: Option<String>,

        /// Translator comment for the row
        #[arg(long, requires = "key")]
        comment: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.commands {
        Commands::Convert { table } => run_convert_command(&table),
        Commands::Preview { table, show } => run_preview_command(&table, show.as_ref()),
        Commands::Inspect { input } => run_inspect_command(&input),
        Commands::SanitizeKey { key } => {
            println!("{}", sanitize_key(&key));
            Ok(())
        }
        Commands::SanitizeValue {
            value,
            key,
            comment,
        } => {
            match key {
                Some(key) => print!("{}", format_row(&key, &value, comment.as_deref())),
                None => println!("{}", sanitize_value(&value)),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

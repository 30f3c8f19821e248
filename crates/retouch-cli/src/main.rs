use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use retouch_cli::CorrectionArgs;

mod commands;

use commands::{cmd_analyze, cmd_batch, cmd_enhance, cmd_init};

#[derive(Parser)]
#[command(name = "retouch")]
#[command(version, about = "Automatic photo enhancement", long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a single image
    Enhance {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory (default: next to the input)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        #[command(flatten)]
        corrections: CorrectionArgs,
    },

    /// Enhance every supported image in a directory
    Batch {
        /// Source directory
        #[arg(value_name = "SRC_DIR")]
        src_dir: PathBuf,

        /// Destination directory (created if missing)
        #[arg(value_name = "DST_DIR")]
        dst_dir: PathBuf,

        /// Include subdirectories, mirroring their layout in DST_DIR
        #[arg(short, long)]
        recursive: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        #[command(flatten)]
        corrections: CorrectionArgs,
    },

    /// Print image statistics and the corrections that would be applied
    Analyze {
        /// Input file
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        corrections: CorrectionArgs,
    },

    /// Write a default config file to ~/retouch/retouch.yml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG still wins when set
    builder.parse_env("RUST_LOG");
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[retouch] {}: {}",
            record.level().to_string().to_lowercase(),
            record.args()
        )
    });
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Enhance {
            input,
            out,
            corrections,
        } => cmd_enhance(input, out, corrections),

        Commands::Batch {
            src_dir,
            dst_dir,
            recursive,
            threads,
            corrections,
        } => cmd_batch(src_dir, dst_dir, recursive, threads, corrections),

        Commands::Analyze {
            input,
            json,
            corrections,
        } => cmd_analyze(input, corrections, json),

        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

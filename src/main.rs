use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use fullname_parser::{Error, NameParser, ReferenceLists, Result, scanner};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fullname",
    about = "Split full names into title, first, middle, last, nickname and suffix"
)]
struct Cli {
    /// JSON file overriding the built-in suffix/title/prefix/conjunction lists
    #[arg(long, global = true)]
    lists: Option<PathBuf>,

    /// Log every pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse one name given on the command line
    Parse {
        /// The name, e.g. "Dr. Juan Q. Xavier III"
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Parse every line of every matching file under a directory
    Batch {
        dir: PathBuf,
        /// File extension to pick up
        #[arg(long, default_value = "txt")]
        ext: String,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let lists = match &cli.lists {
        Some(path) => ReferenceLists::from_path(path)?,
        None => ReferenceLists::default(),
    };
    let parser = NameParser::new(lists);

    match cli.command {
        Some(Command::Parse { name, format }) => run_parse(&parser, &name.join(" "), format),
        Some(Command::Batch { dir, ext, output }) => {
            run_batch(&parser, &dir, &ext, output.as_deref())
        }
        // Default: one name per stdin line
        None => run_stdin(&parser),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(parser: &NameParser, name: &str, format: Format) -> Result<()> {
    let parsed = parser.parse(name);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        Format::Text => println!("{parsed}"),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  BATCH MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_batch(parser: &NameParser, dir: &Path, ext: &str, output: Option<&Path>) -> Result<()> {
    let records = scanner::parse_tree(parser, dir, ext)?;
    let json = serde_json::to_string_pretty(&records)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!(
                "  {} ({} names, {} bytes)",
                path.display(),
                records.len(),
                json.len()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  STDIN MODE: JSON Lines out
// ═══════════════════════════════════════════════════════════════════════

fn run_stdin(parser: &NameParser) -> Result<()> {
    let stdin_path = PathBuf::from("<stdin>");
    let io_err = |source: io::Error| Error::Io {
        path: stdin_path.clone(),
        source,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parser.parse(&line);
        writeln!(out, "{}", serde_json::to_string(&parsed)?).map_err(io_err)?;
    }
    Ok(())
}

use crate::dedup::Strategy;
use crate::history::{self, Format, History, Shell};
use crate::io;
use crate::sort::Order;
use crate::timer::Timer;
use simplelog::LevelFilter;
use std::io::Read;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "keeplast",
    about = "Deduplicate lines, keeping each one at its last occurrence"
)]
pub struct Opt {
    /// Files to read, in order. Reads standard input when none are given
    #[structopt(parse(from_os_str))]
    pub files: Vec<PathBuf>,
    /// Read this shell's history from the home directory (bash, zsh)
    #[structopt(long, conflicts_with = "files")]
    pub shell: Option<Shell>,
    /// Input format (plain, zsh). Defaults to the shell's format, else plain
    #[structopt(long)]
    pub format: Option<Format>,
    /// Output order (last, first, frequency)
    #[structopt(long, default_value = "last")]
    pub order: Order,
    /// Last-occurrence implementation (reverse-scan, counted)
    #[structopt(long, default_value = "reverse-scan")]
    pub strategy: Strategy,
    /// Reverse the output order (newest first with --order last)
    #[structopt(long)]
    pub reverse: bool,
    /// Level of verbosity
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Opt {
    pub fn format(&self) -> Format {
        self.format
            .or_else(|| self.shell.map(Shell::format))
            .unwrap_or(Format::Plain)
    }

    /// A shell's history file, the listed files in order, or `stdin`.
    pub fn read_history<R: Read>(&self, stdin: R) -> anyhow::Result<History> {
        let format = self.format();
        if let Some(shell) = self.shell {
            let path = io::home_path(shell.history_file())?;
            log::debug!("reading {:?} history from {}", shell, path.display());
            return Ok(history::parse(io::read_as_bytes(path)?, format));
        }

        if self.files.is_empty() {
            log::debug!("reading standard input");
            return Ok(history::parse(io::read_stdin(stdin)?, format));
        }

        let mut entries = History::new();
        for path in &self.files {
            log::debug!("reading {}", path.display());
            entries.extend(history::parse(io::read_as_bytes(path)?, format));
        }
        Ok(entries)
    }

    /// Deduplicate and order `history` for printing.
    pub fn render(&self, history: &[String]) -> Vec<String> {
        let mut commands = Timer::new("dedup").time(|| self.order.apply(history, self.strategy));
        log::info!(
            "kept {} distinct entries ({:?}, {:?})",
            commands.len(),
            self.order,
            self.strategy
        );
        if self.reverse {
            commands.reverse();
        }
        commands
    }

    /// Initialize a terminal logger on stderr with the requested level.
    pub fn init_logging(&self) -> Result<(), log::SetLoggerError> {
        simplelog::TermLogger::init(
            select_log_level_filter(self.verbose),
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        )
    }
}

fn select_log_level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

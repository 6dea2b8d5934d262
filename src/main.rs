use keeplast::cli::Opt;
use keeplast::io;
use keeplast::timer::Timer;
use structopt::StructOpt;

fn main() {
    let args = Opt::from_args();
    if let Err(e) = args.init_logging() {
        eprintln!("keeplast error: {:?}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("keeplast error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(args: Opt) -> anyhow::Result<()> {
    let history = Timer::new("read").time(|| args.read_history(std::io::stdin()))?;
    log::info!("read {} entries", history.len());

    let commands = args.render(&history);

    let stdout = std::io::stdout();
    io::write_lines(stdout.lock(), &commands)
}

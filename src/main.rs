use clap::Parser;
use slate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = slate::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

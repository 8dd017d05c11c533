use std::io::{self, BufWriter};
use std::process;

use clap::Parser;
use freq_words::{Cli, Config};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Cli::parse());

    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(err) = freq_words::run(&config, &mut out) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

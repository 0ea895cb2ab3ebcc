use clap::Parser;
use log::LevelFilter;
use std::env;
use std::io::Write;
use text2bf::commands::generate::{self, GenerateArgs};

#[derive(Parser, Debug)]
#[command(name = "text2bf", disable_help_flag = true, disable_help_subcommand = true)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Ok(filters) = env::var("TEXT2BF_LOG") {
        builder.parse_filters(&filters);
    }

    // Just the level and message; stdout is reserved for the program
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    builder.target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}

fn main() {
    init_logging();

    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("text2bf"));

    let cli = Cli::parse();
    let code = generate::run(&program, cli.args);

    std::process::exit(code);
}

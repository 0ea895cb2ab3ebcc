use clap::Args;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use crate::cli_util::{flush_streams, print_input_error};
use crate::config::{self, Settings};
use crate::theme;
use crate::{BrainfuckWriter, InputError, InputSource};

const PROMPT: &str = "Enter string: ";
const HEADER: &str = "Generated Brainfuck code:";

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct GenerateArgs {
    /// Read the line from the file at PATH (otherwise reads from TEXT or STDIN)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print a header line before the generated program
    #[arg(long = "header")]
    pub header: bool,

    /// Never prompt when reading from an interactive STDIN
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Positional text. If omitted, reads one line from STDIN.
    #[arg(value_name = "TEXT", trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: GenerateArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let GenerateArgs {
        file,
        header,
        no_prompt,
        text,
        ..
    } = args;

    let settings = config::settings(header, no_prompt);
    log::debug!("settings: {settings:?}");

    let source = match InputSource::from_args(text, file) {
        Ok(source) => source,
        Err(err @ InputError::Conflict) => {
            eprintln!("{program}: {err}");
            usage_and_exit(program, 2);
        }
        Err(err) => {
            print_input_error(program, &err);
            return 1;
        }
    };

    if source == InputSource::Stdin && settings.prompt && io::stdin().is_terminal() {
        prompt();
    }

    let line = match source.read_line() {
        Ok(line) => line,
        Err(err) => {
            print_input_error(program, &err);
            return 1;
        }
    };

    let code = BrainfuckWriter::new(&line).generate();
    print_program(&code, settings);
    0
}

fn prompt() {
    let mut stderr = io::stderr();
    let text = if stderr.is_terminal() {
        theme::prompt_style().paint(PROMPT).to_string()
    } else {
        PROMPT.to_string()
    };
    let _ = write!(stderr, "{text}");
    let _ = stderr.flush();
}

fn print_program(code: &str, settings: Settings) {
    if settings.header {
        if io::stdout().is_terminal() {
            println!("{}", theme::header_style().paint(HEADER));
        } else {
            println!("{HEADER}");
        }
    }
    println!("{code}");
    flush_streams();
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [--header] [--no-prompt] [TEXT...]        # Encode TEXT args (joined with spaces), or one line of STDIN
  {0} [--header] [--no-prompt] --file <PATH>    # Encode the first line of a file

Options:
  --file,  -f <PATH>  Read the line from PATH instead of TEXT or STDIN
  --header            Print "Generated Brainfuck code:" before the program
  --no-prompt         Do not prompt when STDIN is a terminal
  --help,  -h         Show this help

Description:
  Generates Brainfuck code that, when executed, prints the input line followed by a newline.

Environment:
  TEXT2BF_HEADER      1/true/yes to print the header (overridden by --header)
  TEXT2BF_PROMPT      0/false/no to disable the prompt (overridden by --no-prompt)
  TEXT2BF_LOG         Log filter for diagnostics on stderr (default: warn)

Notes:
  - Only the first line of input is used; the trailing line ending is dropped.
  - Characters are encoded as UTF-16 code units; run the output on an interpreter with 16-bit or wider cells.
  - Output is Brainfuck code printed to stdout followed by a newline.
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

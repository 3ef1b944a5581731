use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

/// alphadelta runs AlphaDelta-lite scripts: numbers, strings, arrays,
/// variables, arithmetic and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script file to run.
    #[arg(required_unless_present = "command", conflicts_with = "command")]
    path: Option<PathBuf>,

    /// Runs the given source text instead of reading a file.
    #[arg(short, long)]
    command: Option<String>,

    /// Prints the parsed syntax tree instead of running the script.
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = match (args.command, args.path) {
        (Some(source), _) => source,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, None) => {
            eprintln!("No script given. Pass a file path or --command.");
            return ExitCode::FAILURE;
        },
    };

    if args.dump_ast {
        return match alphadelta::parse(&script) {
            Ok(program) => {
                println!("{program:#?}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let mut stdout = BufWriter::new(io::stdout().lock());
    let result = alphadelta::run(&script, &mut stdout);
    // Lines printed before a failure must still reach stdout, ahead of the
    // diagnostic.
    let flushed = stdout.flush();

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = flushed {
        eprintln!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

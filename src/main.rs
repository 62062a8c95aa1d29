use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use lox::{errors::errors::ConsoleReporter, init_tracing, lexer::lexer::tokenize};
use tracing::{debug, error};

// sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => match run_prompt() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("prompt failed: {err}");
                ExitCode::from(EX_IOERR)
            }
        },
        [path] => run_file(path),
        _ => {
            println!("Usage: lox [script]");
            ExitCode::from(EX_USAGE)
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", path, err);
            return ExitCode::from(EX_IOERR);
        }
    };

    let file_name = path.rsplit('/').next().unwrap_or(path);
    let mut reporter = ConsoleReporter::new(&source, file_name);

    if let Err(err) = run(&source, &mut reporter) {
        eprintln!("Failed to write tokens: {}", err);
        return ExitCode::from(EX_IOERR);
    }

    if reporter.had_error() {
        return ExitCode::from(EX_DATAERR);
    }

    ExitCode::SUCCESS
}

fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        // A mistake on one line must not poison the rest of the session.
        let mut reporter = ConsoleReporter::new(&line, "shell");
        run(&line, &mut reporter)?;
    }
}

fn run(source: &str, reporter: &mut ConsoleReporter) -> io::Result<()> {
    let tokens = tokenize(source, reporter);
    debug!(tokens = tokens.len(), had_error = reporter.had_error(), "tokenized");

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{}", token)?;
    }

    Ok(())
}

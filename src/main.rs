use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "loxide", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: LoxideCommand,
}

#[derive(Debug, Subcommand)]
pub enum LoxideCommand {
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    Parse {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "sexpr")]
        format: ExpressionFormat,
    },
    Evaluate {
        path: PathBuf,
        /// Underline the offending source in error messages.
        #[clap(long)]
        pretty: bool,
    },
    /// Read expressions line by line from standard input.
    Prompt {
        #[clap(long = "print-ast")]
        print_ast: bool,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExpressionFormat {
    Debug,
    #[clap(name = "sexpr")]
    SExpr,
}

const EXIT_DATA_ERROR: u8 = 65;
const EXIT_SOFTWARE_ERROR: u8 = 70;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CLArgs::parse();
    match args.routine {
        LoxideCommand::Tokenize { path, format } => {
            eprintln!("Tokenizing {:?}...", path);
            let src = read_to_string(path)?;
            if !tokenize(&src, &format) {
                return Ok(ExitCode::from(EXIT_DATA_ERROR));
            }
        }
        LoxideCommand::Parse { path, format } => {
            eprintln!("Parsing {:?}...", path);
            let src = read_to_string(path)?;
            if !parse(&src, &format) {
                return Ok(ExitCode::from(EXIT_DATA_ERROR));
            }
        }
        LoxideCommand::Evaluate { path, pretty } => {
            eprintln!("Evaluating {:?}...", path);
            let src = read_to_string(&path)?;
            let name = path.to_string_lossy();
            return Ok(evaluate(&src, &name, pretty));
        }
        LoxideCommand::Prompt { print_ast } => {
            prompt(print_ast)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn tokenize(src: &str, format: &TokenFormat) -> bool {
    use loxide::lexer::Lexer;
    use loxide::token::formatter::{BasicFormatter, DebugFormatter, TokenFormatter};

    let mut scanner = Lexer::new(src);
    let formatter: Box<dyn TokenFormatter> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
    };
    let mut succeeded = true;
    loop {
        match scanner.next_token() {
            Ok(token) => {
                println!("{}", formatter.format(&token));
                if token.is_eof() {
                    return succeeded;
                }
            }
            Err(error) => {
                eprintln!("{}", formatter.format_lexical_error(&error));
                succeeded = false;
            }
        };
    }
}

fn parse(src: &str, format: &ExpressionFormat) -> bool {
    use loxide::diagnostic::StderrReporter;
    use loxide::expression::formatter::{DebugFormatter, ExpressionFormatter, SExpressionFormatter};
    use loxide::lexer::Lexer;
    use loxide::parser::Parser;

    let mut reporter = StderrReporter;
    let scanned = Lexer::new(src).scan(&mut reporter);
    if scanned.had_error {
        return false;
    }
    let formatter: Box<dyn ExpressionFormatter> = match format {
        ExpressionFormat::Debug => Box::new(DebugFormatter),
        ExpressionFormat::SExpr => Box::new(SExpressionFormatter),
    };
    match Parser::new(scanned.tokens).parse_reporting(&mut reporter) {
        Some(expression) => {
            println!("{}", formatter.format(&expression));
            true
        }
        None => false,
    }
}

fn evaluate(src: &str, name: &str, pretty: bool) -> ExitCode {
    use loxide::diagnostic::{PrettyReporter, Reporter, StderrReporter};
    use loxide::runner::{run, Action, RunFailure};

    let mut reporter: Box<dyn Reporter + '_> = if pretty {
        Box::new(PrettyReporter::new(src, name))
    } else {
        Box::new(StderrReporter)
    };
    match run(src, Action::Evaluate, &mut *reporter) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(RunFailure::Lexical | RunFailure::Syntax) => ExitCode::from(EXIT_DATA_ERROR),
        Err(RunFailure::Runtime) => ExitCode::from(EXIT_SOFTWARE_ERROR),
    }
}

fn prompt(print_ast: bool) -> Result<()> {
    use loxide::diagnostic::StderrReporter;
    use loxide::runner::{run, Action};

    let action = if print_ast {
        Action::Print
    } else {
        Action::Evaluate
    };
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.is_empty() {
            break;
        }
        if let Ok(output) = run(&line, action, &mut StderrReporter) {
            println!("{output}");
        }
    }
    Ok(())
}

use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use infix_tree::{Expression, interpreter::matcher::Keyword};
use tracing_subscriber::EnvFilter;

/// infix-tree evaluates infix expressions over named variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infix-tree to read expressions, one per line, from a file
    /// instead of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--var PI=3.14`. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Matches variable names regardless of letter case.
    #[arg(short, long)]
    ignore_case: bool,

    /// Prints the order-of-operations tree before each result.
    #[arg(short, long)]
    tree: bool,

    /// Raises log verbosity; may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or the file path with `--file`. Without it,
    /// expressions are read from standard input until `!stop`.
    contents: Option<String>,
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, got '{binding}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "infix_tree=warn",
        1 => "infix_tree=debug",
        _ => "infix_tree=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}

/// Builds and evaluates one expression, printing the result.
fn run(expression: &mut Expression, source: &str, args: &Args, values: &[f64]) {
    let keywords = args.vars.iter().map(|(name, _)| {
                                       let keyword = Keyword::new(name.as_str());
                                       if args.ignore_case { keyword.case_insensitive() } else { keyword }
                                   });

    if let Err(e) = expression.build_with_keywords(source, keywords) {
        eprintln!("{e}");
        return;
    }

    if args.tree
       && let Some(root) = expression.root()
    {
        println!("{root}");
    }
    println!("{}", expression.evaluate(values));
}

/// Where the expressions to evaluate come from.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    /// One expression per non-blank line of the file at this path.
    File(&'a str),
    /// A single expression from the command line.
    Expression(&'a str),
    /// Lines from standard input until `!stop`.
    Interactive,
}

/// Decides where expressions come from; `--file` without a path is an
/// error rather than a silent switch to standard input.
fn input(args: &Args) -> Result<Input<'_>, String> {
    match (args.contents.as_deref(), args.file) {
        (Some(path), true) => Ok(Input::File(path)),
        (None, true) => Err("No input file given. Pass the file path after --file.".to_string()),
        (Some(expression), false) => Ok(Input::Expression(expression)),
        (None, false) => Ok(Input::Interactive),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let values: Vec<f64> = args.vars.iter().map(|(_, value)| *value).collect();
    let mut expression = Expression::new();

    let input = input(&args).unwrap_or_else(|e| {
                                 eprintln!("{e}");
                                 std::process::exit(2);
                             });

    match input {
        Input::File(path) => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                run(&mut expression, line, &args, &values);
            }
        },
        Input::Expression(source) => run(&mut expression, source, &args, &values),
        Input::Interactive => {
            println!("write !stop to exit");
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let line = line.trim();
                if line == "!stop" {
                    break;
                }
                if !line.is_empty() {
                    run(&mut expression, line, &args, &values);
                }
                if let Err(e) = io::stdout().flush() {
                    eprintln!("Failed to write to standard output: {e}");
                    std::process::exit(1);
                }
            }
        },
    }
}

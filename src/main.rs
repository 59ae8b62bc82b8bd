use std::{io, process};

use clap::Parser;
use infix::{
    repl::repl::{eval_line, run, Config},
    value::trace::TRACE_TARGET,
    PrecedenceTable,
};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Evaluates infix expressions over integers, booleans and strings.
#[derive(Parser, Debug)]
#[command(name = "infix", version, about, long_about = None)]
struct Args {
    /// Evaluate this expression and exit. May be given more than once.
    #[arg(short, long = "expr", value_name = "EXPR")]
    expressions: Vec<String>,

    /// Log every literal and operation to stderr.
    #[arg(long)]
    trace: bool,

    /// Reject malformed expressions instead of evaluating them.
    #[arg(long)]
    strict: bool,

    /// Add or override an operator precedence, e.g. `-p '**=6'`.
    #[arg(short, long = "precedence", value_name = "OP=N", value_parser = PrecedenceTable::parse_entry)]
    precedences: Vec<(String, u32)>,

    /// Prompt shown before each line in interactive mode.
    #[arg(long, default_value = "> ")]
    prompt: String,
}

fn init_tracing(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        if let Ok(directive) = format!("{}=debug", TRACE_TARGET).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).without_time())
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.trace);

    let mut table = PrecedenceTable::default();
    table.extend(args.precedences);

    let config = Config {
        prompt: args.prompt,
        strict: args.strict,
        trace: args.trace,
        table,
    };

    if !args.expressions.is_empty() {
        for expression in &args.expressions {
            println!("{}", eval_line(&config, expression));
        }
        return;
    }

    if let Err(e) = run(&config, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("{e}");
        process::exit(1);
    }
}


extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;

pub mod compiler;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};

use std::io::Write;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    let expr = args.value_of("EXPR").unwrap();

    debug!("Arguments:\n\tVerbosity: {}\n\tExpression: {:?}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        expr
    );

    // Stdout carries nothing but the generated assembly; diagnostics and
    // logging go to stderr.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = compiler::compile(expr, &mut out) {
        // Anything already emitted stays visible; the non-zero exit tells
        // the caller to discard it.
        let _ = out.flush();
        eprintln!("{}", err.render(expr));
        std::process::exit(1);
    }

    if let Err(err) = out.flush() {
        error!("fatal: unable to flush generated assembly: {}", err);
        std::process::exit(1);
    }
}

fn process_arguments() -> ArgMatches<'static> {
    let parsed = App::new(option_env!("CARGO_PKG_NAME").unwrap())
        .version(option_env!("CARGO_PKG_VERSION").unwrap())
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap())
        // Per-arg allow_hyphen_values does not cover a hyphen-leading first
        // token in clap 2; the app-level setting is required for it to reach
        // the positional.
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(Arg::with_name("EXPR")
            .help("The expression to compile, e.g. '5+20-4' (quote it to keep the shell out)")
            .required(true)
            .multiple(false)
            // A leading '-' is a binary operator, not a flag; the parser
            // rejects it with "expected a number", not the usage error.
            .allow_hyphen_values(true)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .get_matches_safe();

    match parsed {
        Ok(args) => args,
        // --help and --version print and exit 0.
        Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => {
            e.exit()
        }
        // Anything else is a malformed invocation: missing expression,
        // extra positionals (usually an unquoted expression), stray flags.
        Err(_) => {
            eprintln!("Invalid number of arguments.");
            std::process::exit(1);
        }
    }
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        .chain(std::io::stderr())
        .apply().ok();
}

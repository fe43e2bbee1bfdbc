//! bcalib CLI
//!
//! Usage:
//!   bcalib                              # prompt for password, calibrate to 500ms
//!   bcalib --time 1s                    # calibrate to a different minimum time
//!   bcalib --difficulty 12              # fixed cost, no calibration
//!   bcalib --password pw --json         # JSON output
//!   bcalib --verify <BASE64>            # check a password against a hash

use clap::{ArgAction, Parser};
use colored::Colorize;
use std::process;
use tracing::Level;

use bcalib::core::{acquire_secret, diagnostic_line, hash_line, verify, Calibrator};
use bcalib::types::{CalibrationResult, HashConfig, HashError, Secret};
use bcalib::{DEFAULT_TARGET, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "bcalib",
    version = VERSION,
    about = "Generate a bcrypt hash whose difficulty is calibrated to a minimum computation time",
    long_about = "bcalib hashes a password with bcrypt.\n\n\
                  Unless a fixed difficulty is given, costs are tried from the lowest\n\
                  upwards and the first one taking longer than --time is used.\n\
                  The hash is printed base64-encoded.\n\n\
                  If no password is given it is read twice from the terminal\n\
                  without echo. An empty entry exits without output."
)]
struct Args {
    /// Minimum computation time for the hash (e.g. 500ms, 1.5s, 1m)
    #[arg(long, env = "BCALIB_TIME", default_value = DEFAULT_TARGET)]
    time: String,

    /// Use this difficulty instead of calibrating (0 = calibrate)
    #[arg(long, env = "BCALIB_DIFFICULTY", default_value_t = 0)]
    difficulty: u32,

    /// Password; read from the terminal if empty
    #[arg(long, default_value = "")]
    password: String,

    /// Verify the password against this base64 hash instead of hashing
    #[arg(long, value_name = "BASE64")]
    verify: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        eprintln!("{}", format!("{}: {}", e.code(), e).red());
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), HashError> {
    if let Some(encoded) = args.verify.as_deref() {
        return match acquire_secret(Some(args.password))? {
            Some(secret) => run_verify(secret, encoded, args.json),
            None => Ok(()),
        };
    }

    let calibrator = Calibrator::new();
    let config = HashConfig {
        target: args.time.clone(),
        difficulty: args.difficulty,
    };

    // Bad flags fail before the password is asked for
    let difficulty = calibrator.resolve(&config)?;

    let secret = match acquire_secret(Some(args.password))? {
        Some(secret) => secret,
        None => return Ok(()),
    };
    let result = calibrator.run(secret, difficulty)?;

    if args.json {
        print_json(&result);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn run_verify(secret: Secret, encoded: &str, json: bool) -> Result<(), HashError> {
    let outcome = verify(secret, encoded)?;

    if json {
        match serde_json::to_string(&outcome) {
            Ok(s) => println!("{}", s),
            Err(e) => return Err(HashError::Encoding(e.to_string())),
        }
    } else if outcome.valid {
        let cost = outcome.cost.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string());
        println!("{}", format!("Password matches (difficulty {})", cost).green());
    } else {
        println!("{}", "Password does not match".red());
    }

    if !outcome.valid {
        process::exit(2);
    }
    Ok(())
}

/// Diagnostic line (calibrated runs only) then the hash line
fn print_result(result: &CalibrationResult) {
    if let Some(line) = diagnostic_line(result) {
        if result.met_threshold {
            println!("{}", line.cyan());
        } else {
            println!("{}", line.yellow());
        }
    }
    println!("{}", hash_line(result));
}

fn print_json(result: &CalibrationResult) {
    match serde_json::to_string_pretty(result) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("JSON encoding failed: {}", e);
            process::exit(1);
        }
    }
}

//! Riva Compiler CLI
//!
//! Source-unification front end: flattens a program's include tree and
//! maps flattened positions back to user files.

use rivac::commands::{dump_events, flatten_file, trace_line};

/// Split `args` into `-I`/`--include-path=` directories and positionals.
fn parse_common(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut include_dirs = Vec::new();
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "-I" && i + 1 < args.len() {
            include_dirs.push(args[i + 1].clone());
            i += 2;
        } else if let Some(dir) = args[i].strip_prefix("--include-path=") {
            include_dirs.push(dir.to_string());
            i += 1;
        } else if args[i].starts_with('-') {
            eprintln!("error: unknown option '{}'", args[i]);
            std::process::exit(1);
        } else {
            positional.push(args[i].clone());
            i += 1;
        }
    }
    (include_dirs, positional)
}

fn main() {
    rivac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "flatten" => {
            let (include_dirs, positional) = parse_common(&args[2..]);
            let [file] = positional.as_slice() else {
                eprintln!("Usage: riva flatten <file.rv> [-I <dir>]...");
                std::process::exit(1);
            };
            flatten_file(file, &include_dirs);
        }
        "trace" => {
            let (include_dirs, positional) = parse_common(&args[2..]);
            let [file, line] = positional.as_slice() else {
                eprintln!("Usage: riva trace <file.rv> <line> [-I <dir>]...");
                std::process::exit(1);
            };
            trace_line(file, line, &include_dirs);
        }
        "events" => {
            let (include_dirs, positional) = parse_common(&args[2..]);
            let [file] = positional.as_slice() else {
                eprintln!("Usage: riva events <file.rv> [-I <dir>]...");
                std::process::exit(1);
            };
            dump_events(file, &include_dirs);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Riva Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Riva Compiler (source unification front end)");
    println!();
    println!("Usage: riva <command> [options]");
    println!();
    println!("Commands:");
    println!("  flatten <file.rv>         Resolve includes and print the unified program");
    println!("  trace <file.rv> <line>    Print the include trace for a flattened line");
    println!("  events <file.rv>          Dump the preprocessing event log");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Options:");
    println!("  -I <dir>                  Add a directory to the include search path;");
    println!("                            repeatable, probed in order, first match wins");
    println!("  --include-path=<dir>      Same as -I");
    println!();
    println!("Examples:");
    println!("  riva flatten model.rv -I inc");
    println!("  riva trace model.rv 42 -I inc -I ../shared");
    println!("  riva events model.rv -I inc");
}

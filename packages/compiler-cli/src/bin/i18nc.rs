/**
 * i18n Compiler CLI - i18nc
 *
 * Precompile i18n message files into ES modules
 */
use clap::{Arg, ArgAction, Command};
use i18n_compiler_cli::perform_compile::{perform_compilation, CompileOptions, DEFAULT_PATTERN};
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = Command::new("i18nc")
        .version(i18n_compiler_cli::version())
        .about("Precompile i18n message files into ES modules")
        .arg(
            Arg::new("files")
                .value_name("FILES_OR_GLOBS")
                .num_args(0..)
                .help("Message files or glob patterns (default: **/*.i18n.json)"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Write modules into DIR instead of next to their inputs"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only report errors"),
        )
        .get_matches();

    let patterns = matches
        .get_many::<String>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()]);
    let options = CompileOptions {
        patterns,
        out_dir: matches.get_one::<String>("out-dir").map(PathBuf::from),
    };
    let quiet = matches.get_flag("quiet");

    let result = match perform_compilation(&options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if !quiet {
        for warning in &result.warnings {
            eprintln!("Warning: {}", warning);
        }
        for file in &result.emitted {
            println!("{} -> {}", file.input.display(), file.output.display());
        }
    }
    for error in &result.errors {
        eprintln!("Error: {}", error);
    }
    if !result.is_success() {
        process::exit(1);
    }
}

//! Perform Compile
//!
//! Finds message files, compiles each one into an ES module
//! (`export default <compiled>;`) and writes it out as `<name>.js`.

use anyhow::{bail, Context, Result};
use i18n_compiler::logging::{LogLevel, MemoryLogger};
use i18n_compiler::output::AotCompiler;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Used when no file or pattern is given.
pub const DEFAULT_PATTERN: &str = "**/*.i18n.json";

#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Files or glob patterns.
    pub patterns: Vec<String>,
    /// Where modules are written; next to each input when unset.
    pub out_dir: Option<PathBuf>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            patterns: vec![DEFAULT_PATTERN.to_string()],
            out_dir: None,
        }
    }
}

/// One emitted module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct CompilationResult {
    pub emitted: Vec<EmittedFile>,
    /// Compiler warnings, prefixed with the file they came from.
    pub warnings: Vec<String>,
    /// One entry per file that failed.
    pub errors: Vec<String>,
}

impl CompilationResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Expand files and glob patterns into a sorted, de-duplicated file list.
pub fn discover_files(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let entries = glob::glob(pattern)
            .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
        files.extend(entries.filter_map(|entry| entry.ok()).filter(|p| p.is_file()));
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// `messages/app.i18n.json` becomes `app.i18n.js`, next to the input or in
/// `out_dir`.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}.js", stem);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Compile a single message file and write the module. Returns the output
/// path and any compiler warnings.
pub fn compile_file(input: &Path, out_dir: Option<&Path>) -> Result<(PathBuf, Vec<String>)> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let messages: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse {} as JSON", input.display()))?;

    let logger = MemoryLogger::new(LogLevel::Warn);
    let module = AotCompiler::new(&logger)
        .compile_module(&messages)
        .with_context(|| format!("Failed to compile {}", input.display()))?;

    let output = output_path(input, out_dir);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, module).with_context(|| format!("Failed to write {}", output.display()))?;

    Ok((output, logger.warnings()))
}

/// Split `files` into those with a unique output path and an error for each
/// input whose output would be written by another input too.
fn partition_collisions(files: Vec<PathBuf>, out_dir: Option<&Path>) -> (Vec<PathBuf>, Vec<String>) {
    let mut by_output: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
    for input in &files {
        by_output
            .entry(output_path(input, out_dir))
            .or_default()
            .push(input.clone());
    }

    let mut unique = Vec::with_capacity(files.len());
    let mut errors = Vec::new();
    for input in files {
        let output = output_path(&input, out_dir);
        match by_output.get(&output) {
            Some(inputs) if inputs.len() > 1 => {
                let others: Vec<String> = inputs
                    .iter()
                    .filter(|other| **other != input)
                    .map(|other| other.display().to_string())
                    .collect();
                errors.push(format!(
                    "{}: output {} is also written by {}",
                    input.display(),
                    output.display(),
                    others.join(", ")
                ));
            }
            _ => unique.push(input),
        }
    }
    (unique, errors)
}

/// Compile every matching file in parallel. Per-file failures are collected
/// in the result; only a bad pattern or an empty match fails the whole run.
/// Inputs that map to the same output file are reported and left unwritten.
pub fn perform_compilation(options: &CompileOptions) -> Result<CompilationResult> {
    let files = discover_files(&options.patterns)?;
    if files.is_empty() {
        bail!("No message files match {}", options.patterns.join(", "));
    }

    let out_dir = options.out_dir.as_deref();
    let (files, collisions) = partition_collisions(files, out_dir);
    let outcomes: Vec<(PathBuf, Result<(PathBuf, Vec<String>)>)> = files
        .into_par_iter()
        .map(|input| {
            let outcome = compile_file(&input, out_dir);
            (input, outcome)
        })
        .collect();

    let mut result = CompilationResult {
        errors: collisions,
        ..CompilationResult::default()
    };
    for (input, outcome) in outcomes {
        match outcome {
            Ok((output, warnings)) => {
                result.warnings.extend(
                    warnings
                        .into_iter()
                        .map(|w| format!("{}: {}", input.display(), w)),
                );
                result.emitted.push(EmittedFile { input, output });
            }
            Err(e) => result.errors.push(format!("{:#}", e)),
        }
    }
    Ok(result)
}

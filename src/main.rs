//! apidoc: dump the tree of `/** ... */` API comments in source files.
//!
//! Two modes:
//!
//! - **stdin mode**: `apidoc < file.js`
//! - **file mode**: `apidoc -f json -o out/ src/*.js`

mod render;

use anyhow::{anyhow, bail, Context, Result};
use apidoc::{Document, ParseError, Position};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidoc",
    version,
    about = "Parse /** ... */ API documentation comments and dump the document tree"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory; one dump per input file. Defaults to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: sexp (default), json
    #[arg(short = 'f', long, default_value = "sexp")]
    format: String,

    /// Report files that fail to parse and continue with the rest
    #[arg(long)]
    keep_going: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// stdin mode: read from stdin, parse, write the dump to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = apidoc::parse(&input).map_err(|e| describe("<stdin>", &input, &e))?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: parse every matched file, then dump to stdout or to the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;
    let input_files = expand_globs(&cli.files)?;

    let mut parsed: Vec<(String, Document)> = Vec::new();
    let mut failed = 0usize;
    for path in &input_files {
        let source = path.to_string_lossy().to_string();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match apidoc::parse(&content) {
            Ok(doc) => {
                let tags = doc.entries().filter(|e| e.is_tag()).count();
                debug!(file = %source, blocks = doc.len(), tags, "parsed");
                parsed.push((source, doc));
            }
            Err(e) => {
                let err = describe(&source, &content, &e);
                if !cli.keep_going {
                    return Err(err);
                }
                warn!("skipping {}", err);
                failed += 1;
            }
        }
    }

    match cli.output.as_deref() {
        Some(dir) => write_outputs(dir, renderer.as_ref(), &parsed)?,
        None => print!("{}", renderer.render_many(&parsed)?),
    }

    if failed > 0 {
        bail!("{} file(s) failed to parse", failed);
    }
    Ok(())
}

/// Write one dump per document into `dir`.
///
/// Nothing is written if two sources map to the same output file.
fn write_outputs(
    dir: &Path,
    renderer: &dyn render::Renderer,
    docs: &[(String, Document)],
) -> Result<()> {
    let ext = renderer.file_extension();
    let names = output_names(docs.iter().map(|(source, _)| source.as_str()), ext)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    for (name, (_, doc)) in names.iter().zip(docs) {
        let out_path = dir.join(name);
        fs::write(&out_path, renderer.render(doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }
    Ok(())
}

/// Output file name for each source, in order. Fails on the first clash.
fn output_names<'a>(sources: impl Iterator<Item = &'a str>, ext: &str) -> Result<Vec<String>> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::new();
    for source in sources {
        let name = format!("{}.{}", derive_output_name(source), ext);
        if let Some(first) = claimed.insert(name.clone(), source) {
            bail!("{} and {} both map to output file {}", first, source, name);
        }
        names.push(name);
    }
    Ok(names)
}

/// Attach `source:line:column` to a parse error.
fn describe(source: &str, content: &str, err: &ParseError) -> anyhow::Error {
    let pos = Position::locate(content, err.offset());
    anyhow!("{}:{}: {}", source, pos, err)
}

/// File extensions recognized as source files when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "src/math.js" → "math", "lib/types.d.ts" → "types.d"
fn derive_output_name(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

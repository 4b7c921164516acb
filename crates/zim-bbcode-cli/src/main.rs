use anyhow::{Context, Result, bail};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::Write,
    path::{Path, PathBuf},
    process,
};
use zim_bbcode_config::Config;
use zim_bbcode_engine::{Metadata, WikiPage, io, parse};

const USAGE: &str = "[--root-path ROOT] [--out DIR] [--metadata] <page.txt | notebook-folder>";

/// Command line options; unset values fall back to the config file
#[derive(Debug, Default, PartialEq)]
struct Args {
    input: PathBuf,
    root_path: Option<String>,
    output_dir: Option<PathBuf>,
    print_metadata: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--root-path" => {
                let value = iter.next().context("--root-path needs a value")?;
                parsed.root_path = Some(value.clone());
            }
            "--out" => {
                let value = iter.next().context("--out needs a value")?;
                parsed.output_dir = Some(PathBuf::from(value));
            }
            "--metadata" => parsed.print_metadata = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    bail!("Only one input path can be given");
                }
            }
        }
    }

    parsed.input = input.context("No input path provided")?;
    Ok(parsed)
}

/// Settings after merging command line and config file
struct Settings {
    root_path: String,
    output_dir: Option<PathBuf>,
    extension: String,
    print_metadata: bool,
}

impl Settings {
    fn new(args: &Args, config: Config) -> Self {
        Self {
            root_path: args.root_path.clone().unwrap_or(config.root_path),
            output_dir: args.output_dir.clone().or(config.output_dir),
            extension: config.output_extension,
            print_metadata: args.print_metadata,
        }
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Refuse to write `.txt` output next to the `.txt` pages it came from
fn ensure_not_overwriting_pages(source_dir: &Path, out_dir: &Path, extension: &str) -> Result<()> {
    if same_dir(source_dir, out_dir) && extension.eq_ignore_ascii_case(WikiPage::EXTENSION) {
        bail!(
            "Output extension '{extension}' would overwrite the pages in {}; set --out or output_extension",
            source_dir.display()
        );
    }
    Ok(())
}

fn print_metadata(label: &str, metadata: &Metadata) {
    eprintln!("{label}:");
    for (key, value) in metadata {
        eprintln!("  {key}: {value}");
    }
}

/// Convert a single page to stdout, or into the output folder when one is set
fn convert_file(path: &Path, settings: &Settings) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    let page = parse(&text, &settings.root_path);

    if settings.print_metadata {
        print_metadata(&path.display().to_string(), &page.metadata);
    }

    match &settings.output_dir {
        Some(out_dir) => {
            if let Some(source_dir) = path.parent() {
                ensure_not_overwriting_pages(source_dir, out_dir, &settings.extension)?;
            }
            let file_name = path
                .file_name()
                .context("Input path has no file name")?
                .to_string_lossy();
            let relative =
                RelativePathBuf::from(file_name.into_owned()).with_extension(&settings.extension);
            io::write_output(&relative, out_dir, &page.bbcode)?;
            log::info!("Wrote {}", relative.to_path(out_dir).display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", page.bbcode)?;
        }
    }
    Ok(())
}

/// Convert every page of a notebook, mirroring its folder layout
fn convert_notebook(notebook: &Path, settings: &Settings) -> Result<usize> {
    io::validate_notebook_dir(notebook)?;
    let out_dir = settings.output_dir.as_deref().unwrap_or(notebook);
    ensure_not_overwriting_pages(notebook, out_dir, &settings.extension)?;
    let pages = io::list_pages(notebook)?;

    for page in &pages {
        let parsed = io::convert_page(page, notebook, &settings.root_path)
            .with_context(|| format!("Failed to convert {}", page.relative_path()))?;
        if settings.print_metadata {
            print_metadata(&page.page_name(), &parsed.metadata);
        }
        let output = page.output_path(&settings.extension);
        io::write_output(&output, out_dir, &parsed.bbcode)?;
        log::debug!("{} -> {}", page.relative_path(), output);
    }

    log::info!(
        "Converted {} pages from {} into {}",
        pages.len(),
        notebook.display(),
        out_dir.display()
    );
    Ok(pages.len())
}

fn run(args: &Args, config: Config) -> Result<()> {
    let settings = Settings::new(args, config);
    if args.input.is_dir() {
        convert_notebook(&args.input, &settings)?;
    } else {
        convert_file(&args.input, &settings)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("zim-bbcode");

    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let config = Config::load_or_default().with_context(|| {
        format!(
            "Failed to load config file at {}",
            Config::config_path().display()
        )
    })?;
    log::debug!("Using config {config:?}");

    run(&args, config)
}

use std::path::PathBuf;

use anyhow::bail;
use curvekit::designer::svg_export;
use curvekit::session::{load_script, replay};
use curvekit::{init_logging, Config, Editor, BUILD_DATE, VERSION};
use tracing::{info, warn};

const USAGE: &str = "usage: curvekit <script.json> [output.svg] [--config <file>]";

struct Args {
    script: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("--config needs a file\n{}", USAGE),
            },
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(script) = positional.next() else {
        bail!("{}", USAGE);
    };
    let output = positional.next();
    if positional.next().is_some() {
        bail!("too many arguments\n{}", USAGE);
    }

    Ok(Args {
        script,
        output,
        config,
    })
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("CurveKit {} (built {})", VERSION, BUILD_DATE);

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path),
            Err(e) => {
                warn!("{}; using default settings", e);
                Config::default()
            }
        },
    };

    let events = load_script(&args.script)?;
    let mut editor = Editor::with_settings(&config.editor);
    let summary = replay(&mut editor, events);
    info!(
        "Replayed {} events ({} commits, {} rejected); path has {} nodes",
        summary.events,
        summary.commits,
        summary.rejected.len(),
        editor.path().len()
    );

    let document = editor.export_svg();
    match &args.output {
        Some(path) => svg_export::write_document(path, &document)?,
        None => print!("{}", document),
    }

    Ok(())
}

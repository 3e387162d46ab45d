use futures::executor::block_on;
use ramani::overlay::{MapOverlay, OverlayStatus, TextDocumentSource};
use ramani::{Classifier, RegionTable};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Overlay(ramani_overlay::Error),
    Json(serde_json::Error),
    MapUnavailable,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Overlay(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::MapUnavailable => write!(f, "Map unavailable: the document could not be loaded"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ramani_overlay::Error> for CliError {
    fn from(value: ramani_overlay::Error) -> Self {
        Self::Overlay(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Shapes,
    Classify,
    Render,
    Legend,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    code: Option<String>,
    pretty: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct ClassifyOut<'a> {
    code: &'a str,
    circuit: &'a str,
}

fn usage() -> &'static str {
    "ramani-cli\n\
\n\
USAGE:\n\
  ramani-cli [shapes] [--pretty] [<path>|-]\n\
  ramani-cli classify <code>\n\
  ramani-cli render [--out <path>] [<path>|-]\n\
  ramani-cli legend [--pretty]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - shapes prints the region shape bindings (code, name, circuit) as JSON.\n\
  - classify resolves one region code against the bundled Tanzania tables.\n\
  - render prints the augmented overlay SVG to stdout; use --out to write a file.\n\
  - legend prints the circuit legend (label, swatch color, flags) as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "shapes" => args.command = Command::Shapes,
            "classify" => {
                args.command = Command::Classify;
                let Some(code) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.code = Some(code.clone());
            }
            "render" => args.command = Command::Render,
            "legend" => args.command = Command::Legend,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn loaded_overlay(input: Option<&str>) -> Result<MapOverlay, CliError> {
    let text = read_input(input)?;
    let mut overlay = MapOverlay::new();
    block_on(overlay.load(&TextDocumentSource::new(text)));
    if overlay.status() != OverlayStatus::Ready {
        return Err(CliError::MapUnavailable);
    }
    Ok(overlay)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Classify => {
            let code = args.code.as_deref().unwrap_or_default();
            let classifier = Classifier::new(RegionTable::tanzania());
            let circuit = classifier.classify(code);
            write_json(
                &ClassifyOut {
                    code,
                    circuit: circuit.label(),
                },
                args.pretty,
            )
        }
        Command::Shapes => {
            let overlay = loaded_overlay(args.input.as_deref())?;
            write_json(&overlay.bindings(), args.pretty)
        }
        Command::Render => {
            let overlay = loaded_overlay(args.input.as_deref())?;
            let svg = overlay.render_svg().ok_or(CliError::MapUnavailable)?;
            write_text(&svg, args.out.as_deref())
        }
        Command::Legend => {
            let overlay = MapOverlay::new();
            write_json(&overlay.legend(), args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::MapUnavailable) => {
            eprintln!("{}", CliError::MapUnavailable);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use feaexport::{ExportOptions, ExportStatus, SUPPORTED_EXTENSIONS};
use std::path::PathBuf;

/// Export the OpenType feature code of a font source as a .fea file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input font file
    font_path: PathBuf,

    /// Folder to write the feature file into
    destination: Option<PathBuf>,

    /// Include inactive classes, prefixes and features as comments
    #[arg(short, long)]
    include_inactive: bool,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let input_extension = args
        .font_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    if !SUPPORTED_EXTENSIONS.contains(&input_extension) {
        log::error!(
            "Input extension {:?} is not in the list of supported extensions: {}",
            input_extension,
            SUPPORTED_EXTENSIONS.join(", ")
        );
        std::process::exit(1);
    }

    log::info!("Loading {}", args.font_path.display());
    let font = match feaexport::load(&args.font_path) {
        Ok(font) => font,
        Err(e) => {
            log::error!("Failed to load font: {}", e);
            std::process::exit(1);
        }
    };

    let options = ExportOptions::new().include_inactive(args.include_inactive);
    let status = ExportStatus::run(&font, args.destination.as_deref(), options);
    if status.success {
        println!("{}", status.message);
    } else {
        eprintln!("{}", status.message);
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use gallery_manifest::config::{self, ConfigOverrides};
use gallery_manifest::imaging::RustBackend;
use gallery_manifest::{logging, manifest, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(about = "Write a JSON manifest of the images in a gallery directory")]
#[command(long_about = "\
Write a JSON manifest of the images in a gallery directory

Run without arguments to scan public/gallery and write public/gallery.json.

Layouts:

  flat     [{ name, url, width, height, type, size }, ...]
  grouped  [{ name, alternates: [{ url, width, height, type, size }, ...] }, ...]

Grouping uses the filename part before the first dash:

  public/gallery/
  ├── cat-1.png      → group \"cat\"
  ├── cat-2.png      → group \"cat\"
  └── dog.png        → group \"dog\"

Images whose header cannot be read are kept with null width and height.

Run 'gallery-manifest gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file (optional; missing file means stock defaults)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Directory to scan [default: public/gallery]
    #[arg(long, global = true)]
    source: Option<String>,

    /// Manifest path [default: public/gallery.json]
    #[arg(long, global = true)]
    output: Option<String>,

    /// URL prefix for image paths [default: /gallery]
    #[arg(long, global = true)]
    url_prefix: Option<String>,

    /// Group images by the filename prefix before the first dash
    #[arg(long, global = true)]
    grouped: bool,

    /// Treat .svg files as images
    #[arg(long, global = true)]
    include_svg: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the gallery and write the manifest (default)
    Build,
    /// Scan the gallery and show what would be written, without writing
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = ConfigOverrides {
        source_dir: cli.source,
        output: cli.output,
        url_prefix: cli.url_prefix,
        grouped: cli.grouped,
        include_svg: cli.include_svg,
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.config, &overrides)?;
            let manifest = manifest::build(&site_config, &RustBackend::new())?;
            let output_path = Path::new(&site_config.output);
            manifest::write(&manifest, output_path)?;
            output::print_build_output(&manifest, output_path);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config, &overrides)?;
            println!("==> Checking {}", site_config.source_dir);
            let manifest = manifest::build(&site_config, &RustBackend::new())?;
            output::print_check_output(&manifest);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use onepager::{config, generate, output};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "onepager")]
#[command(about = "Static one-page site generator for consultant marketing sites")]
#[command(long_about = "\
Static one-page site generator for consultant marketing sites

Renders a single page (hero, brands, services, method, case studies, about,
contact) from one config file and exports it as plain static files.

Site structure:

  site/
  ├── config.toml        # Identity, contact, SEO, export settings, page copy
  └── public/            # Copied verbatim to the output root
      ├── og-image.jpg   # Header avatar + social preview
      ├── favicon.ico
      └── apple-touch-icon.png

Output:

  dist/
  ├── index.html
  ├── sitemap.xml
  ├── robots.txt
  └── ...public/ files

The SITE_URL environment variable overrides [site] url.

Run 'onepager gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site directory (config.toml + public/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and write the static site
    Build,
    /// Validate config and print the page inventory without building
    Check,
    /// Print a stock config.toml with the common options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} \u{2192} {}", cli.source.display(), cli.output.display());
            let today = chrono::Local::now().date_naive();
            let report = generate::generate(&site_config, &cli.source, &cli.output, today)?;
            output::print_build_output(&report);
            info!(year = report.year, "build complete");
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config, &cli.source);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("onepager={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

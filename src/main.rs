//! CLI entry point for tripper-press

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripper_press::content::ContentKind;

#[derive(Parser)]
#[command(name = "tripper-press")]
#[command(author = "Sean")]
#[command(version)]
#[command(about = "Static site generator for the Tripper Press blog and photo gallery", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Post,
    Photo,
}

impl From<Kind> for ContentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Post => ContentKind::Article,
            Kind::Photo => ContentKind::Photo,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new essay or photo
    New {
        /// Kind of content to create
        #[arg(short, long, value_enum, default_value = "post")]
        kind: Kind,

        /// Title of the new entry
        title: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Disable regeneration on file changes
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, photo)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tripper_press=debug,info"
    } else {
        "tripper_press=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            tripper_press::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let press = tripper_press::Press::new(&base_dir)?;
            tracing::info!("Creating new entry with title: {}", title);
            press.new_content(&title, kind.into())?;
        }

        Commands::Generate { watch } => {
            let press = tripper_press::Press::new(&base_dir)?;
            tracing::info!("Generating static files...");
            press.generate()?;
            println!("Generated successfully!");

            if watch {
                tripper_press::commands::generate::watch(&press)?;
            }
        }

        Commands::Server { port, ip, r#static } => {
            let press = tripper_press::Press::new(&base_dir)?;

            tracing::info!("Generating static files...");
            press.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            tripper_press::server::start(&press, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let press = tripper_press::Press::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            press.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let press = tripper_press::Press::new(&base_dir)?;
            tripper_press::commands::list::run(&press, &r#type)?;
        }

        Commands::Version => {
            println!("tripper-press version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

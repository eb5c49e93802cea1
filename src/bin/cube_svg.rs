//! cube-svg CLI - Render Puzzle Pictures or Serve Them Over HTTP
//!
//! Commands: render, views, colors, serve
//! JSON goes to stdout; a rejected request exits with status 2

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cube_svg::{
    catalogue, palette, render, Puzzle,
    server::{self, ServeConfig},
};

#[derive(Parser)]
#[command(name = "cube-svg")]
#[command(version, about = "cube-svg - Cube Puzzle SVG Renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one picture
    Render {
        /// Puzzle: cube or skewb
        #[arg(short, long, default_value = "cube")]
        puzzle: Puzzle,

        /// View: flat, isometric or unfolded
        #[arg(short, long)]
        view: String,

        /// Dimensions, e.g. 3x3 (flat), 3x3x3 (isometric, unfolded), 1 (skewb)
        #[arg(short, long)]
        dimensions: String,

        /// Dash-separated color codes, e.g. R-G-B-K
        #[arg(short, long)]
        colors: String,

        /// Write the SVG to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a JSON object with kind, size, digest and markup
        #[arg(long, conflicts_with = "data_uri")]
        json: bool,

        /// Print a base64 data URI
        #[arg(long)]
        data_uri: bool,
    },

    /// List supported puzzle views
    Views,

    /// List color codes
    Colors,

    /// Serve pictures over HTTP(S)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:80")]
        listen: SocketAddr,

        /// TLS certificate (PEM). If provided, key must also be provided.
        #[arg(long)]
        tls_cert: Option<PathBuf>,

        /// TLS private key (PEM). If provided, cert must also be provided.
        #[arg(long)]
        tls_key: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { puzzle, view, dimensions, colors, output, json, data_uri } => {
            let rendered = match render(puzzle, &view, &dimensions, &colors) {
                Ok(r) => r,
                Err(e) => {
                    let body = serde_json::json!({ "error": e.to_string() });
                    eprintln!("{}", body);
                    return ExitCode::from(2);
                }
            };

            if let Some(path) = output {
                if let Err(e) = rendered.save(&path) {
                    eprintln!(r#"{{"error": "Failed to write {}: {}"}}"#, path.display(), e);
                    return ExitCode::FAILURE;
                }
                println!("{}", rendered.digest);
            } else if json {
                match serde_json::to_string_pretty(&rendered) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!(r#"{{"error": "{}"}}"#, e);
                        return ExitCode::FAILURE;
                    }
                }
            } else if data_uri {
                println!("{}", rendered.data_uri());
            } else {
                println!("{}", rendered.svg);
            }
            ExitCode::SUCCESS
        }

        Commands::Views => print_json(&catalogue()),

        Commands::Colors => print_json(&palette()),

        Commands::Serve { listen, tls_cert, tls_key } => {
            match run_server(ServeConfig { listen, tls_cert, tls_key }) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("cube-svg serve: {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_server(config: ServeConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(r#"{{"error": "{}"}}"#, e);
            ExitCode::FAILURE
        }
    }
}

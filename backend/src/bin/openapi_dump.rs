//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use clap::Parser;
use profile_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// Write the profile service OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Cli {
    /// Pretty-print the JSON document.
    #[arg(long)]
    pretty: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(io::Error::other)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")
}

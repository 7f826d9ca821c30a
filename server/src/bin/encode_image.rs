//! Prints an image as a `data:` URL so it can be inlined into email HTML.

use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use domain::data_url::{encode_data_url, mime_for_path};

#[derive(Debug, Parser)]
#[command(name = "encode-image", about = "Encode an image file as a base64 data URL")]
struct Args {
    /// Image to encode
    #[arg(default_value = "public/images/logo.png")]
    path: PathBuf,

    /// Override the MIME type guessed from the file extension
    #[arg(long)]
    mime: Option<String>,
}

#[allow(clippy::print_stdout)]
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let bytes = fs::read(&args.path)
        .map_err(|e| format!("Failed to read {}: {}", args.path.display(), e))?;
    let mime = args
        .mime
        .unwrap_or_else(|| mime_for_path(&args.path).to_string());

    println!("Base64 Image Data URL:");
    println!("{}", encode_data_url(&mime, &bytes));

    Ok(())
}

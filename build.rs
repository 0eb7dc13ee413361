//! Build script for the now-playing badge.
//!
//! Copies `.env.example` from the crate root into the local data directory
//! (`spotify-badge/.env.example`), next to the `.env` the binary loads at
//! startup, so the configuration template is where users look for it.
//!
//! - Linux: `~/.local/share/spotify-badge/.env.example`
//! - macOS: `~/Library/Application Support/spotify-badge/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotify-badge/.env.example`
//!
//! A missing template only produces a cargo warning; directory or file
//! write failures fail the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotify-badge");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}

//! Build automation tasks for Coin Rush
//!
//! Usage:
//!   cargo xtask build-web       # Build the WASM bundle into dist/web
//!   cargo xtask serve           # Build, then serve dist/web locally
//!   cargo xtask package-itch    # Create zip for itch.io upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Pinned to the macroquad version in Cargo.toml
const MQ_JS_BUNDLE: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Coin Rush")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the WASM bundle for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV banner to index.html)
        #[arg(long)]
        dev: bool,
    },
    /// Build the web bundle and serve it on localhost
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::BuildWeb { dev } => build_web(dev).map(|_| ()),
        Commands::Serve { port } => serve(port),
        Commands::PackageItch => package_itch(),
    }
}

/// Repository root (parent of the xtask crate)
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Run a command and fail on a non-zero exit
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Build the WASM binary and assemble dist/web. Returns the dist path.
fn build_web(dev: bool) -> Result<PathBuf> {
    let root = project_root();
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Assembling dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release/coin-rush.wasm"),
        dist.join("coin-rush.wasm"),
    )?;
    std::fs::copy(root.join("docs/index.html"), dist.join("index.html"))?;
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    // The JS loader comes from the macroquad repo; fetch once and reuse
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        println!("Downloading {}...", MQ_JS_BUNDLE);
        run_cmd(Command::new("curl").args(["-L", "-o"]).arg(&mq_js).arg(MQ_JS_BUNDLE))?;
    }

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?
            .replace("Loading Coin Rush", "Loading Coin Rush (DEV)")
            .replace("<title>Coin Rush", "<title>[DEV] Coin Rush");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(dist)
}

/// Build and serve dist/web for local playtesting
fn serve(port: u16) -> Result<()> {
    let dist = build_web(true)?;
    println!("Serving on http://localhost:{}/", port);
    run_cmd(
        Command::new("python3")
            .current_dir(&dist)
            .args(["-m", "http.server", &port.to_string()]),
    )
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    let dist = build_web(false)?;

    let zip_path = project_root().join("dist/coin-rush-itch.zip");
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(&dist)
            .args(["-r", "../coin-rush-itch.zip", "."]),
    )?;

    println!("itch.io package ready: dist/coin-rush-itch.zip");
    Ok(())
}

//! Build automation tasks for the counter-display project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

/// The Pico 1 cross-compilation target.
const FIRMWARE_TARGET: &str = "thumbv6m-none-eabi";

/// Features for a firmware build; the `host` default is dropped.
const FIRMWARE_FEATURES: &str = "defmt,pico1,arm";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for counter-display project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build firmware, run host tests
    CheckAll,
    /// Build the firmware binary for the Pico
    Build,
    /// Build a UF2 firmware file for drag-and-drop flashing
    Uf2,
    /// Run the host-side test suite
    Test,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let succeeded = match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build => build_firmware(false),
        Commands::Uf2 => build_uf2(),
        Commands::Test => run_tests(),
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check_all() -> bool {
    println!("{}", "==> Building firmware...".cyan());
    if !build_firmware(false) {
        return false;
    }

    println!("\n{}", "==> Running host tests...".cyan());
    if !run_tests() {
        return false;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    true
}

fn build_firmware(release: bool) -> bool {
    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root()).args([
        "build",
        "--bin",
        "counter-display",
        "--target",
        FIRMWARE_TARGET,
        "--no-default-features",
        "--features",
        FIRMWARE_FEATURES,
    ]);
    if release {
        cmd.arg("--release");
    }

    let succeeded = run_command(&mut cmd);
    if succeeded {
        println!("{}", "Build successful!".green());
    }
    succeeded
}

fn build_uf2() -> bool {
    println!(
        "{}",
        format!("Building UF2 for target {FIRMWARE_TARGET}").cyan()
    );
    if !build_firmware(true) {
        return false;
    }

    // Convert to UF2 using elf2uf2-rs
    let elf_path = format!("target/{FIRMWARE_TARGET}/release/counter-display");
    let uf2_path = "counter-display.uf2";

    println!("\n{}", "Converting to UF2 format...".cyan());
    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(workspace_root())
            .args([elf_path.as_str(), uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        true
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        false
    }
}

fn run_tests() -> bool {
    run_command(
        Command::new("cargo")
            .current_dir(workspace_root())
            .args(["test"]),
    )
}

fn workspace_root() -> std::path::PathBuf {
    std::env::current_dir().expect("Failed to get current directory")
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(err) => {
            eprintln!("{}", format!("Failed to execute command: {err}").red());
            false
        }
    }
}

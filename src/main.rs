use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use icon_trim::{ContentRule, CropOptions};

#[derive(Parser)]
#[command(name = "icon-trim", about = "Inspect and crop images to their non-transparent content")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the size, colour mode, content bounding box and margins of an image.
    Analyze {
        /// Path to the image.
        #[arg(default_value = "icon.png")]
        path: PathBuf,
        /// Which pixels count as content.
        #[arg(long, value_enum, default_value = "auto")]
        content: ContentRule,
    },
    /// Crop an image to the bounding box of its content.
    Crop {
        /// Path to the image.
        #[arg(default_value = "icon.png")]
        path: PathBuf,
        /// Where to write the cropped image.  Defaults to overwriting the source image.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Which pixels count as content.
        #[arg(long, value_enum, default_value = "auto")]
        content: ContentRule,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { path, content } => match icon_trim::analyze(&path, content) {
            Ok(analysis) => print!("{}", analysis),
            Err(e) => {
                eprintln!("An error occurred: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Command::Crop {
            path,
            output,
            content,
        } => {
            let opts = CropOptions {
                source: path,
                dest: output,
                rule: content,
            };
            match icon_trim::crop(&opts) {
                Ok(outcome) => println!("{}", outcome),
                Err(e) => {
                    eprintln!("Failed to crop image: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}

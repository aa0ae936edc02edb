use clap::{Parser, Subcommand};
use std::num::NonZeroU32;

use diff_select::{LineSelection, SelectedLine, parse_click};

#[derive(Parser)]
#[command(name = "diff-select")]
#[command(about = "Replay diff line clicks and inspect the grouped selection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay clicks against one hunk and print the resulting runs
    Replay {
        /// File the hunk belongs to
        #[arg(long)]
        file: String,
        /// Zero-based hunk index within the file
        #[arg(long, default_value_t = 0)]
        hunk: u32,
        /// Sha of the diff being viewed
        #[arg(long)]
        sha: String,
        /// Click tokens (e.g. "3:-:12" or "^5:9:-")
        #[arg(required = true)]
        clicks: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            file,
            hunk,
            sha,
            clicks,
        } => {
            let mut selection = LineSelection::new();
            for token in &clicks {
                selection.toggle(&file, hunk, &sha, parse_click(token)?);
            }

            selection.quote();
            match selection.diff_selection() {
                Some(quoted) => {
                    println!(
                        "{}@{} (diff {})",
                        quoted.file_name, quoted.hunk_index, quoted.diff_sha
                    );
                    for line in &quoted.lines {
                        println!(
                            "  {} {:>4}  old {:>4}  new {:>4}",
                            run_marker(line),
                            line.selector.index,
                            side(line.selector.old_line),
                            side(line.selector.new_line),
                        );
                    }
                }
                None => println!("nothing selected"),
            }
        }
    }

    Ok(())
}

/// Marker column showing where each run opens and closes
fn run_marker(line: &SelectedLine) -> &'static str {
    match (line.is_first_of_group, line.is_last_of_group) {
        (true, true) => "*",
        (true, false) => "/",
        (false, true) => "\\",
        (false, false) => "|",
    }
}

fn side(line: Option<NonZeroU32>) -> String {
    match line {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

use camino::Utf8PathBuf;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(
    name = "itfmerge",
    version,
    about = "Merge a generated ITF file into a hand-written skeleton"
)]
struct Cli {
    /// Path to the raw ITF file
    #[arg(long, value_name = "PATH")]
    itf_path: Utf8PathBuf,

    /// Path to the skeleton file
    #[arg(long, value_name = "PATH")]
    skeleton_path: Utf8PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = itfmerge_core::cmd_combine(&cli.itf_path, &cli.skeleton_path) {
        eprintln!("{} {:#}", "✗".bright_red(), err);
        std::process::exit(1);
    }
}

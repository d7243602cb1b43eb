use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use ipfwtui::core::config;
use ipfwtui::tui;

#[derive(Parser)]
#[command(
    name = "ipfwtui",
    version,
    about = "Interactive terminal front-end for the FreeBSD ipfw firewall"
)]
struct Args {}

fn main() -> std::io::Result<()> {
    let _args = Args::parse();

    // ipfw only exists on FreeBSD; bail out early anywhere else.
    if std::env::consts::OS != "freebsd" {
        eprintln!("ipfwtui requires FreeBSD with ipfw installed.");
        std::process::exit(1);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ipfwtui: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config);

    // File logger - stderr is unusable while the TUI owns the terminal
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("ipfwtui.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "ipfwtui starting up, ipfw at {}",
        resolved.ipfw_path.display()
    );

    tui::run(resolved)
}

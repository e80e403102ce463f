mod cli;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use cli::CliFlags;

fn main() {
    disable_core_dumps();

    let flags = CliFlags::parse();

    let level = if flags.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new().filter_level(level).init();

    if let Err(e) = cli::run(flags) {
        cli::prompts::error(&format!("error: {e}"));
        std::process::exit(1);
    }
}

/// Keep passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

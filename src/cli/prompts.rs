//! Centralized warning and error messages for CLI output.

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Check if stderr is a tty
fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

fn colored(color: &str, msg: &str) -> String {
    if stderr_is_tty() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    eprintln!("{}", colored(YELLOW, msg));
}

/// Print an error message to stderr (red)
pub fn error(msg: &str) {
    eprintln!("{}", colored(RED, msg));
}

/// Print urandom unavailable warning
pub fn urandom_unavailable() {
    warn("Warning: /dev/urandom not available, using getrandom");
}

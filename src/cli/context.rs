//! CLI context - bundles flags and the entropy source choice.

use std::io::{self, Write};

use passgen::Generator;
use passgen::rand::{self, Urandom};
use thiserror::Error;
use zeroize::Zeroize;

use super::{CliFlags, prompts};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}{hint}", hint = hint(.0))]
    Generate(#[from] passgen::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self { flags }
    }

    /// Generate `--times` passwords and print them one per line.
    pub fn run(&self) -> Result<(), CliError> {
        let generator = Generator::new(&self.flags.to_config())?;
        let mut passwords = self.generate(&generator)?;

        let written = write_lines(&mut io::stdout().lock(), &passwords);
        passwords.zeroize();
        written?;
        Ok(())
    }

    fn generate(&self, generator: &Generator) -> Result<Vec<String>, passgen::Error> {
        let (times, length) = (self.flags.times, generator.length());

        if self.flags.urandom {
            if rand::is_urandom_available() {
                let mut source = Urandom::open()?;
                return generator.generate_many_from(&mut source, times, length);
            }
            prompts::urandom_unavailable();
        }

        generator.generate_many(times)
    }
}

fn hint(err: &passgen::Error) -> &'static str {
    match err {
        passgen::Error::EmptyConfiguration => " (enable a character class or pass --characters)",
        _ => "",
    }
}

/// A closed reader (`passgen | head -1`) ends output quietly.
fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    match write_each(out, lines) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_each<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn context(args: &[&str]) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
                .unwrap();
        Context::new(flags)
    }

    #[test]
    fn empty_config_is_reported() {
        let ctx = context(&[
            "--symbols=false",
            "--numbers=false",
            "--lowercase=false",
            "--uppercase=false",
        ]);
        let err = ctx.run().unwrap_err();
        assert!(matches!(
            err,
            CliError::Generate(passgen::Error::EmptyConfiguration)
        ));
    }

    #[test]
    fn generates_requested_count() {
        let ctx = context(&["-n", "4", "-l", "10", "--characters", "xyz"]);
        let generator = Generator::new(&ctx.flags.to_config()).unwrap();
        let passwords = ctx.generate(&generator).unwrap();
        assert_eq!(passwords.len(), 4);
        assert!(passwords
            .iter()
            .all(|p| p.len() == 10 && p.chars().all(|c| "xyz".contains(c))));
    }

    #[test]
    fn urandom_source_generates() {
        let ctx = context(&["-u", "-n", "2"]);
        let generator = Generator::new(&ctx.flags.to_config()).unwrap();
        let passwords = ctx.generate(&generator).unwrap();
        assert_eq!(passwords.len(), 2);
        assert!(passwords.iter().all(|p| p.chars().count() == 24));
    }

    #[test]
    fn empty_config_message_names_the_flag() {
        let err = CliError::from(passgen::Error::EmptyConfiguration);
        assert_eq!(
            err.to_string(),
            "config is empty (enable a character class or pass --characters)"
        );
        assert_eq!(passgen::Error::EmptyConfiguration.to_string(), "config is empty");
    }

    /// Accepts `budget` bytes, then behaves like a pipe whose reader exited.
    struct ClosedAfter {
        budget: usize,
        kind: io::ErrorKind,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::from(self.kind));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_ends_output_quietly() {
        let lines = vec!["abcdef".to_string(); 100];
        let mut out = ClosedAfter {
            budget: 7,
            kind: io::ErrorKind::BrokenPipe,
        };
        assert!(write_lines(&mut out, &lines).is_ok());
    }

    #[test]
    fn other_write_errors_are_reported() {
        let lines = vec!["abcdef".to_string(); 2];
        let mut out = ClosedAfter {
            budget: 0,
            kind: io::ErrorKind::PermissionDenied,
        };
        let err = write_lines(&mut out, &lines).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn writes_one_line_per_password() {
        let mut out = Vec::new();
        write_lines(&mut out, &["ab".to_string(), "cd".to_string()]).unwrap();
        assert_eq!(out, b"ab\ncd\n");
    }
}

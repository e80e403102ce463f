//! Random password generation from configurable character sets.
//!
//! ```no_run
//! use passgen::{Config, Generator};
//!
//! let config = Config {
//!     length: 16,
//!     ..Default::default()
//! };
//! let generator = Generator::new(&config)?;
//! println!("{}", generator.generate()?);
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod config;
mod error;
pub mod pass;
pub mod rand;

pub use config::Config;
pub use error::Error;
pub use pass::Generator;

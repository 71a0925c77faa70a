//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros ──▶ EnvFilter (trace_level) ──▶ fmt layer ──▶ RotatingFileWriter
//! ```
//!
//! Logs go to `~/.local/share/zellij/staff-portal/staff-portal.log`, rotated at
//! 10 MiB with three backups. Spans are logged when they close, with their
//! busy and idle times.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Size-rotating `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{env_filter, init_tracing, LOG_FILE_NAME};

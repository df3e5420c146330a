//! Structured logging to the browser console.
//!
//! `tracing` events are formatted by `tracing-subscriber`'s fmt layer and each
//! finished line is handed to the matching `console.*` method.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber. Unknown levels fall back to `info`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: &str) {
    let max_level = parse_level(level);
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(level = %max_level, "Logging initialized");
    }
}

pub fn parse_level(level: &str) -> LevelFilter {
    level
        .trim()
        .to_ascii_lowercase()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(self.level, line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&msg),
        Level::WARN => console::warn_1(&msg),
        Level::INFO => console::info_1(&msg),
        _ => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("off"), LevelFilter::OFF);
        assert_eq!(parse_level("chatty"), LevelFilter::INFO);
    }

    #[test]
    fn test_writer_buffers_until_dropped() {
        use std::io::Write;

        let mut w = ConsoleMakeWriter.make_writer();
        assert_eq!(w.level, Level::INFO);
        write!(w, "part one, ").expect("buffered");
        write!(w, "part two").expect("buffered");
        assert_eq!(String::from_utf8_lossy(&w.buf), "part one, part two");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("debug");
        init("info");
        tracing::debug!("still alive");
    }
}

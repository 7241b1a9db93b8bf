//! `tracing` output routed to the browser console.
//!
//! Each formatted event is buffered and handed to the console method that
//! matches its level once the fmt layer drops the writer.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConsoleMakeWriter;

pub(crate) struct ConsoleWriter {
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

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(&self, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if !line.is_empty() {
            self.emit(&line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub(crate) fn init(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter);

    if tracing_subscriber::registry()
        .with(level)
        .with(layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(%level, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_buffers_whole_event() {
        let mut w = ConsoleWriter::new(Level::WARN);
        write!(w, " WARN request failed").expect("write");
        writeln!(w, " status=500").expect("write");
        assert_eq!(w.line(), " WARN request failed status=500");
        assert_eq!(w.level, Level::WARN);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LevelFilter::DEBUG);
        init(LevelFilter::INFO);
        tracing::info!("still logging");
    }
}

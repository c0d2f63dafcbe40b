//! `tracing` output to the browser console.
//!
//! Each formatted event is buffered and handed to the `console` method that
//! matches its level when the writer is dropped. No timestamps: wasm has no
//! wall clock for the formatter to read.

use std::io;
use std::sync::OnceLock;

use tracing::{warn, Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, Registry};
use wasm_bindgen::JsValue;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(text.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            Level::TRACE => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

static LEVEL: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// Install the console subscriber, or move its max level if it is already
/// installed.
pub fn init(max_level: Level) {
    let filter = LevelFilter::from_level(max_level);
    if let Some(handle) = LEVEL.get() {
        if let Err(e) = handle.modify(|current| *current = filter) {
            warn!(error = %e, "could not change log level");
        }
        return;
    }

    let (level, handle) = reload::Layer::new(filter);
    let installed = tracing_subscriber::registry()
        .with(level)
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(MakeConsoleWriter),
        )
        .try_init();
    match installed {
        Ok(()) => {
            let _ = LEVEL.set(handle);
        }
        Err(e) => warn!(error = %e, "another subscriber is already installed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_init_moves_the_level() {
        init(Level::INFO);
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));

        init(Level::DEBUG);
        assert!(tracing::enabled!(Level::DEBUG));

        init(Level::WARN);
        assert!(!tracing::enabled!(Level::INFO));
        assert!(tracing::enabled!(Level::WARN));
    }
}

//! Browser Logging
//!
//! `tracing` subscriber that writes formatted events to the devtools console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and sends it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
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
        if line.is_empty() {
            return;
        }
        let msg = JsValue::from_str(line);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&msg);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&msg);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&msg);
        } else {
            web_sys::console::debug_1(&msg);
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO, buf: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { level: *meta.level(), buf: Vec::new() }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("[LOG] subscriber not installed: {}", e).into());
    }
}

//! tracing subscriber that writes formatted events to the browser console

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// buffers one formatted event, emitted on drop
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
        let line = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO, buffer: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { level: *meta.level(), buffer: Vec::new() }
    }
}

/// install the global subscriber; wasm32 has no clock, so no timestamps
pub fn init() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .try_init();
}

//! Progress indicator shown while the matched algorithms run.
//!
//! The bar lives in a process-wide slot so the log writer can route lines
//! above it. A [`SpinnerGuard`] clears it when the run ends.

use std::io;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const FRAMES: &[&str] = &["▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁"];

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Clears the spinner when dropped.
#[must_use = "the spinner stops as soon as the guard is dropped"]
pub struct SpinnerGuard(&'static ProgressBar);

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

/// Shows `message` next to a ticking spinner and the elapsed time.
pub fn start(message: &str) -> SpinnerGuard {
    let bar = SPINNER.get_or_init(|| {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(FRAMES);
        ProgressBar::new_spinner().with_style(style)
    });
    bar.set_message(message.to_string());
    bar.enable_steady_tick(TICK);
    SpinnerGuard(bar)
}

/// The spinner, while it is drawing to a terminal.
pub fn active() -> Option<&'static ProgressBar> {
    SPINNER
        .get()
        .filter(|bar| !bar.is_finished() && !bar.is_hidden())
}

/// Prints whole lines above the spinner instead of through it.
pub struct SpinnerWriter(pub &'static ProgressBar);

impl io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.println(String::from_utf8_lossy(buf).trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

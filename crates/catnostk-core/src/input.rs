//! Input acquisition: whole-file reads and deadline-bounded stream reads.

use std::io::{self, Read};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::{CatError, Result};

/// Read the whole source file as UTF-8 text.
pub fn read_source_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read source file");
    Ok(text)
}

/// Read `reader` to EOF, giving up after `timeout`.
///
/// The read runs on its own thread and hands its result back over a
/// one-slot channel. On timeout that thread is left behind: it is detached,
/// so it never holds up process exit, and its late send is discarded.
///
/// # Errors
///
/// Returns [`CatError::InputTimeout`] if EOF is not reached in time, and
/// [`CatError::Io`] if the read fails or the text is not UTF-8.
pub fn read_with_timeout<R>(mut reader: R, timeout: Duration) -> Result<String>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel::<io::Result<String>>(1);

    thread::Builder::new()
        .name("catnostk-input".to_string())
        .spawn(move || {
            let mut buf = String::new();
            let result = reader.read_to_string(&mut buf).map(|_| buf);
            // The receiver is gone if we lost the race.
            let _ = tx.send(result);
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            let text = result?;
            tracing::debug!(bytes = text.len(), "read input stream");
            Ok(text)
        }
        Err(RecvTimeoutError::Timeout) => Err(CatError::InputTimeout(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(CatError::Io(io::Error::other(
            "input reader exited without a result",
        ))),
    }
}

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::Level;

use crate::error::WmResult;

/// Where log lines go. The terminal front-end owns the screen, so it logs to
/// a file or nowhere; headless tools can use stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Sink,
}

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<Mutex<File>>),
    Stderr(io::Stderr),
    Sink,
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(file) => file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .write(buf),
            DelegatingInner::Stderr(s) => s.write(buf),
            DelegatingInner::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(file) => file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .flush(),
            DelegatingInner::Stderr(s) => s.flush(),
            DelegatingInner::Sink => Ok(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    file: Option<Arc<Mutex<File>>>,
    stderr: bool,
}

impl SubscriberMakeWriter {
    /// Open the destination once; every writer handed out shares it.
    pub fn open(target: &LogTarget) -> io::Result<Self> {
        match target {
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Self {
                    file: Some(Arc::new(Mutex::new(file))),
                    stderr: false,
                })
            }
            LogTarget::Stderr => Ok(Self {
                file: None,
                stderr: true,
            }),
            LogTarget::Sink => Ok(Self {
                file: None,
                stderr: false,
            }),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match (&self.file, self.stderr) {
            (Some(file), _) => DelegatingInner::File(Arc::clone(file)),
            (None, true) => DelegatingInner::Stderr(io::stderr()),
            (None, false) => DelegatingInner::Sink,
        };
        DelegatingWriter { inner }
    }
}

/// Install the global subscriber. Only the first call takes effect; later
/// calls still open the target, so a bad log path is reported either way.
pub fn init(target: &LogTarget, level: Level) -> WmResult<()> {
    let writer = SubscriberMakeWriter::open(target)?;
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(writer)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(!matches!(target, LogTarget::File(_)))
        .try_init();
    Ok(())
}

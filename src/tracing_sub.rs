use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{LogTarget, SessionConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Stderr(io::Stderr),
    Discard(io::Sink),
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).write(buf),
            DelegatingInner::Stderr(s) => s.write(buf),
            DelegatingInner::Discard(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).flush(),
            DelegatingInner::Stderr(s) => s.flush(),
            DelegatingInner::Discard(s) => s.flush(),
        }
    }
}

/// Hands every tracing event to the configured log target. The UI owns
/// stdout, so nothing is ever written there.
#[derive(Clone, Debug)]
pub enum SubscriberMakeWriter {
    File(Arc<File>),
    Stderr,
    Discard,
}

impl SubscriberMakeWriter {
    pub fn for_target(target: &LogTarget) -> Result<Self, LoggingError> {
        match target {
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggingError::Open {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Self::File(Arc::new(file)))
            }
            LogTarget::Stderr => Ok(Self::Stderr),
            LogTarget::Discard => Ok(Self::Discard),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match self {
            Self::File(file) => DelegatingInner::File(Arc::clone(file)),
            Self::Stderr => DelegatingInner::Stderr(io::stderr()),
            Self::Discard => DelegatingInner::Discard(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

/// Install the global subscriber for `config`. Safe to call more than once;
/// later calls leave the first subscriber in place.
pub fn init(config: &SessionConfig) -> Result<(), LoggingError> {
    let writer = SubscriberMakeWriter::for_target(&config.log_target)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}

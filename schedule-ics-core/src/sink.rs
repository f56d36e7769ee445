//! Output sinks for finished calendar documents.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::ics::CalendarDocument;

/// Receives a finished calendar document for persistence or download.
pub trait OutputSink {
    fn deliver(&mut self, document: &CalendarDocument) -> CoreResult<()>;
}

/// Writes documents into a directory under the document's filename.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Option<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink {
            dir: dir.into(),
            written: None,
        }
    }

    /// Path of the last delivered document, if any.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl OutputSink for DirectorySink {
    fn deliver(&mut self, document: &CalendarDocument) -> CoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&document.filename);
        std::fs::write(&path, document.as_bytes())?;

        tracing::debug!(path = %path.display(), mime = document.mime_type(), "wrote calendar");
        self.written = Some(path);
        Ok(())
    }
}

/// Writes documents to an arbitrary writer (stdout, a buffer, ...).
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn deliver(&mut self, document: &CalendarDocument) -> CoreResult<()> {
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

use std::io::{BufRead, ErrorKind, Read, Write};

use bytes::BytesMut;

use crate::codec::encode_uint;
use crate::error::{FrameError, Result};
use crate::index::{parse_marker, Marker};

const COPY_CHUNK_SIZE: usize = 8 * 1024;

/// Counters reported after a framing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FramerSummary {
    /// Length-prefixed messages emitted (zero-length messages included).
    pub messages: u64,
    /// Raw bytes copied to the output, prefixes excluded.
    pub bytes_copied: u64,
}

/// Re-frames a raw message stream with stop-bit varint length prefixes.
///
/// Drives a running cursor over boundary markers: the first marker (at
/// offset 0) only establishes the origin; every later marker closes the
/// range behind it, which is emitted as an encoded length immediately
/// followed by that range's raw bytes. [`Marker::EndOfData`] closes the
/// final range — unconditionally, so a terminal range of length zero
/// still emits its `0x80` prefix — and finishes the framer.
///
/// The raw stream is read strictly forward in bounded chunks; no
/// seeking, no re-reads.
pub struct BlockFramer<R, W> {
    raw: R,
    out: W,
    start: u64,
    finished: bool,
    prefix: BytesMut,
    summary: FramerSummary,
}

impl<R: Read, W: Write> BlockFramer<R, W> {
    /// Create a framer over a raw byte source and an output sink.
    pub fn new(raw: R, out: W) -> Self {
        Self {
            raw,
            out,
            start: 0,
            finished: false,
            prefix: BytesMut::with_capacity(16),
            summary: FramerSummary::default(),
        }
    }

    /// Consume index lines until the end-of-data marker, emitting one
    /// length-prefixed block per closed range. Flushes the sink.
    pub fn run<L: BufRead>(&mut self, index: L) -> Result<FramerSummary> {
        for line in index.lines() {
            let line = line?;
            if let Some(marker) = parse_marker(line.trim_end())? {
                self.apply(marker)?;
                if self.finished {
                    break;
                }
            }
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Apply a single boundary marker. No-op once the framer has seen
    /// [`Marker::EndOfData`].
    pub fn apply(&mut self, marker: Marker) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        match marker {
            // The origin marker only fixes the cursor; nothing precedes it.
            Marker::MessageStart(0) => self.start = 0,
            Marker::MessageStart(end) => self.emit(end)?,
            Marker::EndOfData(end) => {
                self.emit(end)?;
                self.finished = true;
            }
        }
        Ok(())
    }

    /// Whether the end-of-data marker has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> FramerSummary {
        self.summary
    }

    /// Consume the framer and return the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.raw, self.out)
    }

    fn emit(&mut self, end: u64) -> Result<()> {
        if end < self.start {
            return Err(FrameError::NonMonotonicOffset {
                start: self.start,
                end,
            });
        }
        let count = end - self.start;
        self.prefix.clear();
        encode_uint(count, &mut self.prefix);
        self.out.write_all(&self.prefix)?;
        self.copy_raw(count)?;
        tracing::trace!(start = self.start, end, count, "framed block");
        self.start = end;
        self.summary.messages += 1;
        self.summary.bytes_copied += count;
        Ok(())
    }

    fn copy_raw(&mut self, count: u64) -> Result<()> {
        let mut chunk = [0u8; COPY_CHUNK_SIZE];
        let mut remaining = count;
        while remaining > 0 {
            let want = remaining.min(COPY_CHUNK_SIZE as u64) as usize;
            let read = match self.raw.read(&mut chunk[..want]) {
                Ok(0) => {
                    return Err(FrameError::TruncatedInput {
                        expected: count,
                        got: count - remaining,
                    })
                }
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };
            self.out.write_all(&chunk[..read])?;
            remaining -= read as u64;
        }
        Ok(())
    }
}

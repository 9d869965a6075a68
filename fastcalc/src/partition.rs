use crate::error::{CalcError, Result};
use memchr::{memchr, memrchr};
use std::ops::Range;

/// Bytes of the following data every chunk view carries past its end.
///
/// The shortest record is `a;1.2\n`: once its name is consumed 4 bytes remain,
/// so 4 more give the 8-byte window the word parser loads.
pub const CHUNK_OVERLAP: usize = 4;

/// A newline-aligned range of the input scanned by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    /// The chunk's records followed by `CHUNK_OVERLAP` bytes of the next one.
    #[inline]
    pub fn view<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end + CHUNK_OVERLAP]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Partition {
    /// The buffer holds one record; parse it directly.
    Single,
    /// Chunks covering everything before `last`, the final record.
    Chunks { chunks: Vec<Chunk>, last: Range<usize> },
}

/// Splits `data` into at most about `workers` chunks.
///
/// Every chunk ends right after a `\n`. The final record is left out and
/// returned as `last`; its bytes are what the last chunk's overlap reads.
pub fn partition(data: &[u8], workers: usize) -> Result<Partition> {
    if data.is_empty() {
        return Err(CalcError::InvalidSize(0));
    }
    if workers == 0 {
        return Err(CalcError::InvalidWorkers(workers));
    }

    let Some(nl) = memrchr(b'\n', &data[..data.len() - 1]) else {
        return Ok(Partition::Single);
    };
    let last_start = nl + 1;
    if data.len() - last_start < CHUNK_OVERLAP {
        return Err(CalcError::malformed(last_start, "final record too short"));
    }

    // Tiny inputs get one-byte steps, i.e. one chunk per record at most.
    let chunk_size = (data.len() / workers).max(1);

    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < last_start {
        let mut end = start + chunk_size;
        if end >= last_start {
            end = last_start;
        } else {
            match memchr(b'\n', &data[end..last_start]) {
                Some(off) => end += off + 1,
                None => end = last_start,
            }
        }
        let chunk = Chunk { start, end };
        debug_assert!(!chunk.is_empty());
        chunks.push(chunk);
        start = end;
    }

    Ok(Partition::Chunks {
        chunks,
        last: last_start..data.len(),
    })
}

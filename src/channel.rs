//! Cross-thread blocking byte channel.
//!
//! A `ByteChannel` is one direction of a full-duplex byte pipe: an unbounded
//! FIFO queue with non-blocking writes and blocking reads. Two instances let
//! a protocol loop written against ordinary stdin/stdout-style streams be
//! driven by a controller on another thread, via the [`ChannelReader`] and
//! [`ChannelWriter`] adapters.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

struct State {
    buf: VecDeque<u8>,
    done: bool,
}

/// A thread-safe, unbounded, FIFO byte queue with blocking reads.
///
/// Writers never block. Readers block until a byte is available or the
/// channel has been marked done, in which case an empty channel reads as
/// end-of-stream. Intended for one producer thread and one consumer thread
/// per instance.
pub struct ByteChannel {
    state: Mutex<State>,
    readable: Condvar,
}

impl ByteChannel {
    /// Create an empty, open channel.
    #[must_use]
    pub fn new() -> Self {
        ByteChannel {
            state: Mutex::new(State {
                buf: VecDeque::new(),
                done: false,
            }),
            readable: Condvar::new(),
        }
    }

    /// Append one byte. Never blocks.
    ///
    /// Waiters are woken when the buffer goes empty -> non-empty or on a
    /// line terminator, which covers every state a blocked reader can be
    /// waiting for.
    pub fn push(&self, byte: u8) {
        let mut state = self.state.lock();
        let was_empty = state.buf.is_empty();
        state.buf.push_back(byte);
        if was_empty || byte == b'\n' {
            self.readable.notify_all();
        }
    }

    /// Append a whole slice under a single lock acquisition.
    ///
    /// Readers cannot observe a partially appended slice, so line writes
    /// built on this are atomic with respect to concurrent writers too.
    pub fn push_all(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let mut state = self.state.lock();
        let was_empty = state.buf.is_empty();
        state.buf.extend(bytes);
        if was_empty || bytes.contains(&b'\n') {
            self.readable.notify_all();
        }
    }

    /// Block until a byte is available, then return it without consuming it.
    ///
    /// Returns `None` once the channel is done and drained (end-of-stream).
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        let mut state = self.state.lock();
        while state.buf.is_empty() && !state.done {
            self.readable.wait(&mut state);
        }
        state.buf.front().copied()
    }

    /// Block until a byte is available, then consume and return it.
    ///
    /// Returns `None` once the channel is done and drained (end-of-stream).
    #[must_use]
    pub fn pop(&self) -> Option<u8> {
        let mut state = self.state.lock();
        while state.buf.is_empty() && !state.done {
            self.readable.wait(&mut state);
        }
        state.buf.pop_front()
    }

    /// Mark the channel done and wake all blocked readers.
    ///
    /// Pending bytes stay readable; once drained, reads return
    /// end-of-stream instead of blocking. Idempotent and irreversible.
    pub fn mark_done(&self) {
        let mut state = self.state.lock();
        state.done = true;
        self.readable.notify_all();
    }

    /// Whether `mark_done` has been called.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.lock().done
    }

    /// Number of bytes currently buffered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().buf.len()
    }
}

impl Default for ByteChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Readable end of a channel, for code expecting a standard input stream.
pub struct ChannelReader {
    channel: Arc<ByteChannel>,
}

impl ChannelReader {
    #[must_use]
    pub fn new(channel: Arc<ByteChannel>) -> Self {
        ChannelReader { channel }
    }
}

impl Read for ChannelReader {
    /// Blocks for the first byte, then drains whatever else is already
    /// buffered without blocking again. Returns `Ok(0)` at end-of-stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let mut state = self.channel.state.lock();
        while state.buf.is_empty() && !state.done {
            self.channel.readable.wait(&mut state);
        }
        let mut n = 0;
        while n < buf.len() {
            match state.buf.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

/// Writable end of a channel, for code expecting a standard output stream.
pub struct ChannelWriter {
    channel: Arc<ByteChannel>,
}

impl ChannelWriter {
    #[must_use]
    pub fn new(channel: Arc<ByteChannel>) -> Self {
        ChannelWriter { channel }
    }
}

impl Write for ChannelWriter {
    /// Appends the whole buffer. Never blocks, never fails.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.channel.push_all(buf);
        Ok(buf.len())
    }

    /// No-op: bytes are visible to the reader as soon as they are written.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

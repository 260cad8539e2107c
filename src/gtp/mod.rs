//! GTP host bridge.
//!
//! Wires a controller thread to an engine's protocol loop over a pair of
//! [`ByteChannel`]s: commands flow into the engine's input channel, response
//! lines flow back out of its output channel. The engine sees ordinary
//! buffered streams; the controller sees a line-level send/receive surface.

mod engine;

pub use engine::{EngineArgs, GtpEngine};

use std::io::{self, BufReader};
use std::sync::Arc;

use log::{debug, info, warn};
use once_cell::sync::Lazy;

use crate::channel::{ByteChannel, ChannelReader, ChannelWriter};

/// One full-duplex engine connection: a to-engine and a from-engine channel.
///
/// The bridge is shared freely across threads; in steady state exactly two
/// threads touch it, the engine's protocol loop and the controller.
pub struct GtpBridge {
    to_engine: Arc<ByteChannel>,
    from_engine: Arc<ByteChannel>,
}

impl GtpBridge {
    /// Create a bridge with both channels empty and open.
    #[must_use]
    pub fn new() -> Self {
        GtpBridge {
            to_engine: Arc::new(ByteChannel::new()),
            from_engine: Arc::new(ByteChannel::new()),
        }
    }

    /// Queue one command line for the engine. Fire-and-forget: never blocks.
    ///
    /// The text plus terminator is appended in a single lock acquisition, so
    /// concurrent senders cannot interleave partial lines.
    pub fn send_command(&self, command: &str) {
        debug!("-> engine: {command}");
        let mut line = Vec::with_capacity(command.len() + 1);
        line.extend_from_slice(command.as_bytes());
        line.push(b'\n');
        self.to_engine.push_all(&line);
    }

    /// Block until the engine produces a complete response line, and return
    /// it with the terminator stripped.
    ///
    /// This is the controller's sole suspension point. Returns `None` at
    /// end-of-stream, i.e. after the engine loop has exited (or
    /// [`shutdown`](Self::shutdown)) and all buffered lines are drained. A
    /// final unterminated fragment is returned as a normal line.
    #[must_use]
    pub fn recv_response_line(&self) -> Option<String> {
        let mut bytes = Vec::new();
        loop {
            match self.from_engine.pop() {
                Some(b'\n') => break,
                Some(byte) => bytes.push(byte),
                None if bytes.is_empty() => return None,
                None => break,
            }
        }
        let line = String::from_utf8_lossy(&bytes).into_owned();
        debug!("<- engine: {line}");
        Some(line)
    }

    /// The stream the engine reads commands from.
    #[must_use]
    pub fn engine_input(&self) -> ChannelReader {
        ChannelReader::new(Arc::clone(&self.to_engine))
    }

    /// The stream the engine writes responses to.
    #[must_use]
    pub fn engine_output(&self) -> ChannelWriter {
        ChannelWriter::new(Arc::clone(&self.from_engine))
    }

    /// Run the engine's protocol loop on the calling thread, reading from
    /// and writing to this bridge's channels.
    ///
    /// Blocks until the loop exits. On return the from-engine channel is
    /// marked done, so a controller blocked in
    /// [`recv_response_line`](Self::recv_response_line) observes
    /// end-of-stream rather than stalling forever.
    pub fn run_engine<E: GtpEngine + ?Sized>(
        &self,
        engine: &mut E,
        args: &EngineArgs,
    ) -> io::Result<()> {
        info!("starting {} protocol loop", engine.name());
        let mut input = BufReader::new(self.engine_input());
        let mut output = self.engine_output();
        let result = engine.run(args, &mut input, &mut output);
        self.from_engine.mark_done();
        match &result {
            Ok(()) => info!("{} protocol loop exited", engine.name()),
            Err(e) => warn!("{} protocol loop failed: {e}", engine.name()),
        }
        result
    }

    /// Mark both channels done, releasing any blocked reader on either side.
    ///
    /// Controller-initiated teardown; idempotent and irreversible.
    pub fn shutdown(&self) {
        self.to_engine.mark_done();
        self.from_engine.mark_done();
    }
}

impl Default for GtpBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide bridge for hosts running a single engine.
static BRIDGE: Lazy<GtpBridge> = Lazy::new(GtpBridge::new);

/// The process-wide bridge instance.
#[must_use]
pub fn bridge() -> &'static GtpBridge {
    &BRIDGE
}

/// [`GtpBridge::send_command`] on the process-wide bridge.
pub fn send_command(command: &str) {
    BRIDGE.send_command(command);
}

/// [`GtpBridge::recv_response_line`] on the process-wide bridge.
#[must_use]
pub fn recv_response_line() -> Option<String> {
    BRIDGE.recv_response_line()
}

/// [`GtpBridge::run_engine`] on the process-wide bridge.
pub fn run_engine<E: GtpEngine + ?Sized>(engine: &mut E, args: &EngineArgs) -> io::Result<()> {
    BRIDGE.run_engine(engine, args)
}

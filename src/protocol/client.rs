//! The blocking turn loop.
//!
//! ## States
//!
//! - **Accumulating**: lines are appended to the pending block.
//! - **Dispatching**: a line equal to `go` closed the block; it is parsed,
//!   handed to the policy, and the answer (at most one order, then `go`) is
//!   flushed before the loop returns to accumulating.
//!
//! End of input ends the session normally. A final line without a newline
//! is discarded, since the engine terminates every line it sends.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::{Order, ParseErrorMode};
use crate::policy::Policy;

use super::codec::{parse, serialize_log, serialize_order};
use super::error::ClientResult;

/// Sentinel line closing a game-state block and ending our reply.
pub const GO: &str = "go";

/// Where the turn loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Collecting lines of the pending block.
    Accumulating,
    /// A complete block was handed out and is being answered.
    Dispatching,
}

/// Splits a byte stream into game-state blocks.
#[derive(Debug)]
pub struct TurnReader<R> {
    input: R,
    block: String,
    buf: Vec<u8>,
    phase: Phase,
}

impl<R: BufRead> TurnReader<R> {
    /// Wrap an input stream.
    pub fn new(input: R) -> Self {
        Self {
            input,
            block: String::new(),
            buf: Vec::new(),
            phase: Phase::Accumulating,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read until the next `go` line and return the block before it.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_block(&mut self) -> io::Result<Option<String>> {
        self.phase = Phase::Accumulating;
        loop {
            self.buf.clear();
            let read = self.input.read_until(b'\n', &mut self.buf)?;
            if read == 0 || self.buf.last() != Some(&b'\n') {
                if !self.block.is_empty() {
                    debug!(bytes = self.block.len(), "input ended inside a block");
                }
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');
            if line == GO {
                self.phase = Phase::Dispatching;
                return Ok(Some(std::mem::take(&mut self.block)));
            }
            self.block.push_str(line);
            self.block.push('\n');
        }
    }
}

/// Line-oriented writer for the diagnostic channel.
///
/// Every call writes one line and flushes; the engine never reads it.
pub struct Diagnostics<'a> {
    sink: &'a mut dyn Write,
}

impl<'a> Diagnostics<'a> {
    /// Wrap a diagnostic sink.
    pub fn new(sink: &'a mut dyn Write) -> Self {
        Self { sink }
    }

    /// Write the space-joined `values` as one line.
    pub fn log(&mut self, values: &[&dyn std::fmt::Display]) -> io::Result<()> {
        writeln!(self.sink, "{}", serialize_log(values))?;
        self.sink.flush()
    }
}

impl std::fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

/// What happened in one dispatched turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The policy issued an order.
    Ordered(Order),
    /// The policy chose not to move.
    Passed,
    /// The block was malformed and the turn was answered with a bare `go`.
    Skipped,
}

/// Counters for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Blocks dispatched.
    pub turns: u32,
    /// Orders written.
    pub orders: u32,
    /// Malformed blocks skipped.
    pub skipped: u32,
}

/// Drives one protocol session with a policy.
pub struct GameClient {
    policy: Box<dyn Policy>,
    on_parse_error: ParseErrorMode,
}

impl GameClient {
    /// Create a client that aborts on malformed input.
    pub fn new(policy: Box<dyn Policy>) -> Self {
        Self {
            policy,
            on_parse_error: ParseErrorMode::Abort,
        }
    }

    /// Set how malformed blocks are handled.
    #[must_use]
    pub fn with_parse_error_mode(mut self, mode: ParseErrorMode) -> Self {
        self.on_parse_error = mode;
        self
    }

    /// Name of the active policy.
    #[must_use]
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Run until end of input.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        output: &mut dyn Write,
        diagnostics: &mut dyn Write,
    ) -> ClientResult<SessionSummary> {
        let mut reader = TurnReader::new(input);
        let mut summary = SessionSummary::default();
        info!(policy = self.policy_name(), "session started");

        while let Some(block) = reader.next_block()? {
            summary.turns += 1;
            match self.play_turn(&block, output, diagnostics)? {
                TurnOutcome::Ordered(_) => summary.orders += 1,
                TurnOutcome::Passed => {}
                TurnOutcome::Skipped => summary.skipped += 1,
            }
        }

        info!(
            turns = summary.turns,
            orders = summary.orders,
            skipped = summary.skipped,
            "session ended"
        );
        Ok(summary)
    }

    /// Answer one complete block.
    pub fn play_turn(
        &mut self,
        block: &str,
        output: &mut dyn Write,
        diagnostics: &mut dyn Write,
    ) -> ClientResult<TurnOutcome> {
        let state = match parse(block) {
            Ok(state) => state,
            Err(err) if self.on_parse_error == ParseErrorMode::SkipTurn => {
                warn!(error = %err, "skipping malformed turn");
                finish_turn(output)?;
                return Ok(TurnOutcome::Skipped);
            }
            Err(err) => return Err(err.into()),
        };
        debug!(planets = state.len(), "state parsed");

        let mut diag = Diagnostics::new(diagnostics);
        let order = self.policy.do_turn(&state, &mut diag)?;

        let outcome = match order {
            Some(order) => {
                debug!(%order, "issuing order");
                writeln!(output, "{}", serialize_order(&order))?;
                output.flush()?;
                TurnOutcome::Ordered(order)
            }
            None => TurnOutcome::Passed,
        };
        finish_turn(output)?;
        Ok(outcome)
    }
}

impl std::fmt::Debug for GameClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameClient")
            .field("policy", &self.policy.name())
            .field("on_parse_error", &self.on_parse_error)
            .finish()
    }
}

fn finish_turn(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{GO}")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_splits_blocks() {
        let input = "P 0 0 1 10 2\ngo\nP 1 1 2 5 1\nP 2 2 0 3 1\ngo\n";
        let mut reader = TurnReader::new(input.as_bytes());

        assert_eq!(reader.phase(), Phase::Accumulating);
        assert_eq!(reader.next_block().unwrap().unwrap(), "P 0 0 1 10 2\n");
        assert_eq!(reader.phase(), Phase::Dispatching);
        assert_eq!(
            reader.next_block().unwrap().unwrap(),
            "P 1 1 2 5 1\nP 2 2 0 3 1\n"
        );
        assert!(reader.next_block().unwrap().is_none());
        assert_eq!(reader.phase(), Phase::Accumulating);
    }

    #[test]
    fn test_reader_requires_exact_go() {
        let input = "go \nGO\ngo\n";
        let mut reader = TurnReader::new(input.as_bytes());

        assert_eq!(reader.next_block().unwrap().unwrap(), "go \nGO\n");
    }

    #[test]
    fn test_reader_accepts_crlf() {
        let mut reader = TurnReader::new("P 0 0 1 1 1\r\ngo\r\n".as_bytes());
        assert_eq!(reader.next_block().unwrap().unwrap(), "P 0 0 1 1 1\n");
    }

    #[test]
    fn test_reader_drops_unterminated_tail() {
        let mut reader = TurnReader::new("P 0 0 1 1 1\ngo".as_bytes());
        assert!(reader.next_block().unwrap().is_none());
    }

    #[test]
    fn test_reader_empty_block() {
        let mut reader = TurnReader::new("go\n".as_bytes());
        assert_eq!(reader.next_block().unwrap().unwrap(), "");
    }

    #[test]
    fn test_diagnostics_one_line_per_call() {
        let mut sink = Vec::new();
        {
            let mut diag = Diagnostics::new(&mut sink);
            diag.log(&[&"I have", &2, &"planets."]).unwrap();
            diag.log(&[&"done"]).unwrap();
        }
        assert_eq!(String::from_utf8(sink).unwrap(), "I have 2 planets.\ndone\n");
    }
}

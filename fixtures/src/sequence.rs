//! Unbounded integer sequence handed from a producer thread to its consumer.
//!
//! The channel has zero capacity: every `send` waits for a matching `recv`
//! and vice versa, so values arrive in order, exactly once, with no gaps.
//! The producer is never stopped explicitly. Once its [`Sequence`] is
//! dropped the next hand-off fails and the thread returns on its own.

use std::io::Write;
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::{debug, instrument, trace};

const PRODUCER_THREAD: &str = "sequence-producer";

/// Receiving end of a live sequence.
#[derive(Debug)]
pub struct Sequence {
    rx: Receiver<u64>,
}

impl Sequence {
    /// Block until the producer hands over the next value.
    ///
    /// Returns `None` only if the producer thread is gone, which does not
    /// happen while this handle is alive.
    pub fn recv(&self) -> Option<u64> {
        self.rx.recv().ok()
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.recv()
    }
}

/// Start a sequence at 0.
pub fn generate() -> Result<Sequence> {
    generate_from(0)
}

/// Start a sequence at `start`, spawning its producer thread.
pub fn generate_from(start: u64) -> Result<Sequence> {
    let (tx, rx) = bounded(0);
    thread::Builder::new()
        .name(PRODUCER_THREAD.to_string())
        .spawn(move || produce(&tx, start))
        .context("spawn sequence producer")?;
    debug!(start, "sequence producer started");
    Ok(Sequence { rx })
}

fn produce(tx: &Sender<u64>, start: u64) {
    let mut next = start;
    loop {
        trace!(value = next, "hand-off");
        if tx.send(next).is_err() {
            debug!(unsent = next, "consumer gone, producer exiting");
            return;
        }
        next = next.wrapping_add(1);
    }
}

/// Receive `count` values from a fresh sequence and write each on its own line.
///
/// Each line is flushed as soon as its value arrives.
#[instrument(skip(out))]
pub fn write_sequence<W: Write>(out: &mut W, count: u64) -> Result<()> {
    let sequence = generate()?;
    for _ in 0..count {
        let value = sequence.recv().context("sequence producer stopped")?;
        trace!(value, "print");
        writeln!(out, "{value}").context("write value")?;
        out.flush().context("flush output")?;
    }
    debug!(count, "consumer done");
    Ok(())
}

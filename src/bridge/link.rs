//! Duplex transports carrying newline-delimited JSON to and from the engine.
//!
//! [`ChannelLink`] connects to an engine running on another thread of this
//! process (and is what the test suite uses). [`ProcessLink`] spawns the
//! engine runtime as a child process and pipes its stdio line by line.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::mpsc;

use crate::foundation::error::{ScenelinkError, ScenelinkResult};

/// Host-to-engine half of a link.
pub trait LinkSender: Send {
    /// Ship one message line. The line must not contain a newline.
    fn send(&mut self, line: &str) -> ScenelinkResult<()>;
}

/// Engine-to-host half of a link.
pub trait LinkReceiver: Send {
    /// Block for the next message line; `None` once the link is closed.
    fn recv(&mut self) -> Option<String>;
}

/// A duplex link that can be split into its two directional halves.
pub trait EngineLink: Send {
    fn split(self) -> (Box<dyn LinkSender>, Box<dyn LinkReceiver>);
}

/// In-process link over a pair of mpsc channels.
pub struct ChannelLink {
    tx: mpsc::Sender<String>,
    rx: mpsc::Receiver<String>,
}

impl ChannelLink {
    /// Two connected endpoints; messages sent on one arrive at the other.
    pub fn pair() -> (ChannelLink, ChannelLink) {
        let (host_tx, engine_rx) = mpsc::channel();
        let (engine_tx, host_rx) = mpsc::channel();
        (
            ChannelLink {
                tx: host_tx,
                rx: host_rx,
            },
            ChannelLink {
                tx: engine_tx,
                rx: engine_rx,
            },
        )
    }

    /// Send a line from this endpoint (used by in-process engines).
    pub fn send(&self, line: impl Into<String>) -> ScenelinkResult<()> {
        self.tx
            .send(line.into())
            .map_err(|_| ScenelinkError::link("peer endpoint closed"))
    }

    /// Receive the next line at this endpoint; `None` once the peer closed.
    pub fn recv(&self) -> Option<String> {
        self.rx.recv().ok()
    }
}

struct ChannelSender(mpsc::Sender<String>);

impl LinkSender for ChannelSender {
    fn send(&mut self, line: &str) -> ScenelinkResult<()> {
        self.0
            .send(line.to_owned())
            .map_err(|_| ScenelinkError::link("peer endpoint closed"))
    }
}

struct ChannelReceiver(mpsc::Receiver<String>);

impl LinkReceiver for ChannelReceiver {
    fn recv(&mut self) -> Option<String> {
        self.0.recv().ok()
    }
}

impl EngineLink for ChannelLink {
    fn split(self) -> (Box<dyn LinkSender>, Box<dyn LinkReceiver>) {
        (
            Box::new(ChannelSender(self.tx)),
            Box::new(ChannelReceiver(self.rx)),
        )
    }
}

/// Link to an engine runtime spawned as a child process, one JSON message
/// per line on its stdin/stdout. Stderr is drained to the log.
pub struct ProcessLink {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessLink {
    /// Spawn `cmd` and wire its stdio as the engine link.
    pub fn spawn(cmd: &mut Command) -> ScenelinkResult<Self> {
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| ScenelinkError::link(format!("failed to spawn engine process: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ScenelinkError::link("failed to open engine stdin (unexpected)"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ScenelinkError::link("failed to open engine stdout (unexpected)"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| ScenelinkError::link("failed to open engine stderr (unexpected)"))?;

        std::thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                tracing::debug!(target: "scenelink::engine", "{line}");
            }
        });

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

struct ProcessSender(ChildStdin);

impl LinkSender for ProcessSender {
    fn send(&mut self, line: &str) -> ScenelinkResult<()> {
        writeln!(self.0, "{line}")
            .and_then(|_| self.0.flush())
            .map_err(|e| ScenelinkError::link(format!("engine stdin write failed: {e}")))
    }
}

struct ProcessReceiver {
    stdout: BufReader<ChildStdout>,
    child: Child,
}

impl LinkReceiver for ProcessReceiver {
    fn recv(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.stdout.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
        }
    }
}

impl Drop for ProcessReceiver {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl EngineLink for ProcessLink {
    fn split(self) -> (Box<dyn LinkSender>, Box<dyn LinkReceiver>) {
        (
            Box::new(ProcessSender(self.stdin)),
            Box::new(ProcessReceiver {
                stdout: self.stdout,
                child: self.child,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_pair_is_duplex() {
        let (host, engine) = ChannelLink::pair();
        let (mut tx, mut rx) = host.split();

        tx.send(r#"{"id":1,"method":"m","args":[]}"#).unwrap();
        assert_eq!(
            engine.recv().as_deref(),
            Some(r#"{"id":1,"method":"m","args":[]}"#)
        );

        engine.send(r#"{"id":1,"result":null}"#).unwrap();
        assert_eq!(rx.recv().as_deref(), Some(r#"{"id":1,"result":null}"#));

        drop(engine);
        assert_eq!(rx.recv(), None);
    }
}

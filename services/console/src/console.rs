//! Terminal-backed implementations of the session's I/O seams.

use anyhow::Result;
use async_trait::async_trait;
use rover_core::{
    error::InputError,
    io::{InputSource, Notifier},
};
use std::io::Write;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::warn;

/// Reads operator input line by line, writing each prompt first.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the session as ordinary text.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R, W> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl ConsoleInput<BufReader<Stdin>, Stdout> {
    /// Prompts on stdout and reads from stdin.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> InputSource for ConsoleInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .await
            .map_err(InputError::Read)?;
        self.prompt_out.flush().await.map_err(InputError::Read)?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(InputError::Read)?;
        if read == 0 {
            return Err(InputError::Closed.into());
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Writes every notification as its own line.
pub struct ConsoleNotifier<W> {
    out: W,
}

impl<W> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl ConsoleNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write notification to console");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::{
        Collaborators, Session, SessionState, io::RecordingNotifier, menu::MENU_LINES,
        mission::MarsMission, planet::Planet,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_read_line_strips_only_line_terminators() {
        let mut input = ConsoleInput::new(&b"3\r\n  5 \nflr"[..], Vec::new());

        assert_eq!(input.read_line("X position: ").await.unwrap(), "3");
        assert_eq!(input.read_line("Y position: ").await.unwrap(), "  5 ");
        assert_eq!(input.read_line("Enter commands: ").await.unwrap(), "flr");
        assert_eq!(
            String::from_utf8(input.prompt_out).unwrap(),
            "X position: Y position: Enter commands: "
        );
    }

    #[tokio::test]
    async fn test_read_line_keeps_empty_lines() {
        let mut input = ConsoleInput::new(&b"\n\n"[..], Vec::new());
        assert_eq!(input.read_line("").await.unwrap(), "");
        assert_eq!(input.read_line("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_read_line_replaces_invalid_utf8() {
        let mut input = ConsoleInput::new(&b"\xff\n\xff\xfe4\r\n"[..], Vec::new());
        assert_eq!(input.read_line("").await.unwrap(), "\u{FFFD}");
        assert_eq!(input.read_line("").await.unwrap(), "\u{FFFD}\u{FFFD}4");
    }

    #[tokio::test]
    async fn test_garbled_menu_line_redisplays_menu() {
        let planet = Planet::new("Mars", 5, 5, []).unwrap();
        let mission = Arc::new(MarsMission::new(planet));
        let input = ConsoleInput::new(&b"0\n0\n\xff\xfe\n4\n"[..], Vec::new());
        let mut session = Session::new(
            Collaborators::from_shared(mission),
            input,
            RecordingNotifier::default(),
        );

        session.run().await.unwrap();

        assert_eq!(session.state(), SessionState::Terminated);
        let menu_headers = session
            .notifier()
            .lines()
            .iter()
            .filter(|l| l.as_str() == MENU_LINES[0])
            .count();
        assert_eq!(menu_headers, 2);
    }

    #[tokio::test]
    async fn test_read_line_reports_closed_input() {
        let mut input = ConsoleInput::new(&b""[..], Vec::new());
        let err = input.read_line("Select an option: ").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Closed)
        ));
    }

    #[test]
    fn test_notifier_writes_one_line_per_call() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify("Planet information:");
        notifier.notify("");
        notifier.notify("Bye");
        assert_eq!(
            String::from_utf8(notifier.out).unwrap(),
            "Planet information:\n\nBye\n"
        );
    }
}

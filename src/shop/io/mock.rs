//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of EventStream and RenderStream traits
//! for testing without terminal dependencies.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// Mock event stream for testing
///
/// Provides pre-programmed events that can be consumed by tests.
pub struct MockEventStream {
    events: VecDeque<Event>,
    poll_always_true: bool,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            poll_always_true: true,
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
            poll_always_true: false,
        }
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(self.poll_always_true || !self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

/// Mock render stream for testing
///
/// Records all rendering commands for verification in tests.
pub struct MockRenderStream {
    commands: Vec<RenderCommand>,
    buffer: Vec<u8>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((100, 30))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            buffer: Vec::new(),
            terminal_size: size,
        }
    }

    /// Get recorded commands for verification
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    /// Get the current buffer contents as a string
    ///
    /// The buffer contains everything written through the Write impl,
    /// including ANSI escape sequences emitted by crossterm macros.
    pub fn buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer).to_string()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.commands.push(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::DisableRawMode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_should_replay_events_in_order() {
        let key_a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()));
        let key_b = Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::empty()));
        let mut stream = MockEventStream::new(vec![key_a.clone(), key_b.clone()]);

        assert!(stream.poll(Duration::from_millis(1)).unwrap());
        assert_eq!(stream.read().unwrap(), key_a);
        assert_eq!(stream.read().unwrap(), key_b);
        assert!(stream.read().is_err());
    }

    #[test]
    fn empty_mock_event_stream_should_report_no_events() {
        let mut stream = MockEventStream::empty();
        assert!(!stream.poll(Duration::from_millis(1)).unwrap());

        stream.push_event(Event::Resize(80, 24));
        assert!(stream.poll(Duration::from_millis(1)).unwrap());
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();

        stream.enter_alternate_screen().unwrap();
        stream.enable_raw_mode().unwrap();
        stream.hide_cursor().unwrap();
        stream.write_all(b"hello").unwrap();
        stream.flush().unwrap();

        assert!(stream.has_command(&RenderCommand::EnterAlternateScreen));
        assert!(stream.has_command(&RenderCommand::EnableRawMode));
        assert!(stream.has_command(&RenderCommand::HideCursor));
        assert!(stream.buffer_string().contains("hello"));
    }

    #[test]
    fn mock_render_stream_should_report_configured_size() {
        let stream = MockRenderStream::with_size((120, 40));
        assert_eq!(stream.get_size().unwrap(), (120, 40));
    }
}

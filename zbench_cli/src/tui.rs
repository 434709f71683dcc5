//! Full-screen report display that blocks until the user quits.
//!
//! Key input is read through [`KeySource`], so the quit wait does not depend
//! on where keys come from: the real terminal ([`TerminalKeys`]) or an
//! `mpsc` channel.

use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::debug;
use zbench_core::{BenchError, Report};

use crate::view::ReportView;

const FOOTER: &str = "press q or Ctrl-C to quit";

/// Input events the report screen cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `q`
    Quit,
    /// Ctrl-C
    Interrupt,
    Other,
}

impl Key {
    pub fn ends_session(self) -> bool {
        matches!(self, Key::Quit | Key::Interrupt)
    }
}

/// Blocking source of key events.
pub trait KeySource {
    /// Block until the next event. No timeout.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads key events from the controlling terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        Ok(classify(&event::read()?))
    }
}

/// Keys pushed by another part of the program. A dropped sender ends the wait
/// with an error.
impl KeySource for Receiver<Key> {
    fn next_key(&mut self) -> io::Result<Key> {
        self.recv()
            .map_err(|_| io::Error::new(io::ErrorKind::UnexpectedEof, "key channel closed"))
    }
}

/// Map a terminal event to a [`Key`]. Key releases are ignored.
pub fn classify(event: &Event) -> Key {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) if *kind != KeyEventKind::Release => match code {
            KeyCode::Char('q') => Key::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
            _ => Key::Other,
        },
        _ => Key::Other,
    }
}

/// Block until `keys` yields a quit or interrupt key. Everything else is ignored.
///
/// Runs while the alternate screen is up, so it must not log: the subscriber
/// writes to stderr, which shares the terminal.
pub fn wait_for_quit(keys: &mut dyn KeySource) -> io::Result<Key> {
    loop {
        let key = keys.next_key()?;
        if key.ends_session() {
            return Ok(key);
        }
    }
}

/// Alternate-screen report view.
///
/// `raw_mode` controls whether the process-wide terminal raw mode is toggled;
/// it is only meaningful when `out` is the real terminal.
pub struct Tui<W: Write, K: KeySource> {
    out: W,
    keys: K,
    raw_mode: bool,
}

impl Tui<io::Stdout, TerminalKeys> {
    /// The interactive terminal on stdout.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            keys: TerminalKeys,
            raw_mode: true,
        }
    }
}

impl<W: Write, K: KeySource> Tui<W, K> {
    /// A view over an arbitrary writer and key source, without raw mode.
    pub fn new(out: W, keys: K) -> Self {
        Self {
            out,
            keys,
            raw_mode: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn enter(&mut self) -> io::Result<()> {
        if self.raw_mode {
            enable_raw_mode()?;
        }
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))
    }

    fn draw(&mut self, report: &Report) -> io::Result<()> {
        let table = report.to_table();
        let mut row = 0u16;
        for line in table.lines() {
            queue!(self.out, MoveTo(0, row), Print(line))?;
            row = row.saturating_add(1);
        }
        queue!(self.out, MoveTo(0, row.saturating_add(1)), Print(FOOTER))?;
        self.out.flush()
    }

    fn leave(&mut self) -> io::Result<()> {
        let screen = execute!(self.out, Show, LeaveAlternateScreen);
        if self.raw_mode {
            disable_raw_mode()?;
        }
        screen
    }
}

impl<W: Write, K: KeySource> ReportView for Tui<W, K> {
    fn show(&mut self, report: &Report) -> Result<(), BenchError> {
        let shown = self
            .enter()
            .and_then(|()| self.draw(report))
            .and_then(|()| wait_for_quit(&mut self.keys));
        // Restore the terminal even when entering, drawing or reading failed.
        let restored = self.leave();
        let key = shown?;
        restored?;
        debug!(?key, "report closed");
        Ok(())
    }
}

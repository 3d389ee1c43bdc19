//! Raw-mode terminal session.
//!
//! `TerminalGuard` owns the raw mode + alternate screen state and undoes it
//! when dropped, so early returns and unwinding panics leave the shell usable.
//! The panic hook restores the terminal before the panic message is printed.

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io;

pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen. If entering the alternate
    /// screen fails, raw mode is already covered by the returned guard's drop.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Leave the alternate screen, show the cursor and disable raw mode.
    /// Every step runs even if an earlier one fails; the first error wins.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore().ok();
    }
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        stdout.execute(LeaveAlternateScreen).map(|_| ()),
        stdout.execute(Show).map(|_| ()),
    ])
}

/// Collapse independent cleanup results into the first failure.
pub fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

/// Restore the terminal before the default hook prints the panic.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal().ok();
        previous(info);
    }));
}

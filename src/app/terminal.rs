use crate::launch::PickerShell;
use anyhow::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

pub type PickerTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen, restoring both on panic.
pub fn setup_terminal() -> Result<PickerTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(terminal: &mut PickerTerminal) -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// The picker's terminal. Hiding it hands the screen back to the shell.
pub struct TerminalShell {
    terminal: PickerTerminal,
    hidden: bool,
}

impl TerminalShell {
    pub fn new(terminal: PickerTerminal) -> Self {
        Self {
            terminal,
            hidden: false,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut PickerTerminal {
        &mut self.terminal
    }
}

impl PickerShell for TerminalShell {
    fn hide(&mut self) -> Result<()> {
        if self.hidden {
            return Ok(());
        }
        self.hidden = true;
        restore_terminal(&mut self.terminal)
    }
}

//! App state and main loop: input handling, ticking the monitor, and drawing.

use std::io;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use minimon_core::{ticker, Monitor, MetricsProvider, Report, TICK_PERIOD};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::ui::panel::draw_panel;

pub struct App<P> {
    monitor: Monitor<P>,

    // Latest report; None until the first tick
    last_report: Option<Report>,

    // Quit flag
    should_quit: bool,
}

impl<P: MetricsProvider> App<P> {
    pub fn new(monitor: Monitor<P>) -> Self {
        Self {
            monitor,
            last_report: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut tick = ticker(TICK_PERIOD);

        terminal.draw(|f| self.draw(f))?;
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let report = self.monitor.tick();
                    debug!(tick = report.tick, status = %report.status, "tick");
                    self.last_report = Some(report);
                }
                ev = events.next() => match ev {
                    Some(Ok(Event::Key(k))) => self.handle_key(k),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
            }
            if self.should_quit {
                break;
            }

            terminal.draw(|f| self.draw(f))?;
        }

        Ok(())
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.kind != KeyEventKind::Press {
            return;
        }
        // raw mode swallows SIGINT, so Ctrl-C arrives as a key
        let ctrl_c = k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        draw_panel(f, f.area(), self.last_report.as_ref());
    }
}

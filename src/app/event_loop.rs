use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};

use crate::app::{App, Message, Model, update};
use crate::editor::Buffer;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded (before the terminal is
    /// touched), or if terminal initialization or event reading fails.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        // Load before initializing the terminal so a load error is reported
        // on a normal screen.
        let read_scope = crate::perf::scope("app.read_file");
        let buffer = Buffer::open(&self.file_path)
            .with_context(|| format!("Failed to load {}", self.file_path.display()))?;
        drop(read_scope);
        tracing::debug!(
            path = %self.file_path.display(),
            lines = buffer.line_count(),
            "buffer loaded"
        );

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - linedit requires an interactive terminal")?;
        drop(init_scope);

        // Every error past this point must still restore the terminal.
        let result = self.session(&mut terminal, buffer);

        ratatui::restore();

        result
    }

    fn session(&self, terminal: &mut DefaultTerminal, buffer: Buffer) -> Result<()> {
        let mut model = self.initial_model(terminal, buffer)?;
        Self::event_loop(terminal, &mut model)
    }

    /// Build the starting model sized to `terminal`.
    pub(super) fn initial_model<B>(&self, terminal: &Terminal<B>, buffer: Buffer) -> Result<Model>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        let size = terminal.size().context("Failed to query terminal size")?;
        crate::perf::log_event(
            "init.layout",
            format!(
                "terminal={}x{} lines={}",
                size.width,
                size.height,
                buffer.line_count()
            ),
        );

        Ok(
            Model::new(self.file_path.clone(), buffer, (size.width, size.height))
                .with_mode(self.initial_mode),
        )
    }

    /// Apply one message: pure state transition first, then side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| Self::view(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3} cursor={}:{} mode={:?}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0,
                        model.cursor.row,
                        model.cursor.col,
                        model.mode
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            // Wake up periodically only while a toast is waiting to expire.
            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))?
                && let Some(msg) = Self::handle_event(&event::read()?)
            {
                crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
                if msg == Message::Redraw {
                    terminal.clear()?;
                }
                Self::dispatch(model, msg);
                needs_render = true;
            }
        }
        Ok(())
    }
}

use color_eyre::eyre::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::{act, Action, Command},
    components::help::Help,
    config::Config,
    pages::{scene::ScenePage, Page},
    tui,
};

/// Command raised by a terminal event regardless of the page or keybindings.
fn system_command(event: &tui::Event) -> Option<Command> {
    match event {
        tui::Event::Tick => Some(Command::Tick),
        tui::Event::Render => Some(Command::Render),
        tui::Event::Resize(x, y) => Some(Command::Resize(*x, *y)),
        tui::Event::Error => Some(Command::Error("Failed to read terminal input".to_string())),
        // The input stream ended, nothing can reach the app anymore
        tui::Event::Closed => Some(Command::Quit),
        tui::Event::Key(_) | tui::Event::Mouse(_) => None,
    }
}

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
    show_help: bool,
    page: Box<dyn Page>,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let page = ScenePage::new()?;

        Ok(Self {
            tick_rate,
            frame_rate,
            should_quit: false,
            should_suspend: false,
            show_help: false,
            config,
            page: Box::new(page),
        })
    }

    fn start_tui(&self) -> Result<tui::Tui> {
        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.mouse(true);
        tui.enter()?;
        Ok(tui)
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = self.start_tui()?;

        self.page.register_keymap(&self.config.keybindings.pages)?;
        self.page.register_action_handler(action_tx.clone())?;
        self.page.register_config_handler(self.config.clone())?;
        self.page.init()?;
        log::info!("Started {} on page {}", env!("CARGO_PKG_NAME"), self.page.id());

        loop {
            if let Some(e) = tui.next().await {
                if let Some(command) = system_command(&e) {
                    action_tx.send(act!(command))?;
                } else if let tui::Event::Key(key) = e {
                    if let Some(action) = self.config.keybindings.lookup(&self.page.id(), &key) {
                        log::info!("Got action: {action:?}");
                        action_tx.send(action.clone())?;
                    }
                }
                if !self.show_help {
                    if let Some(action) = self.page.handle_events(Some(e))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                let Action { command, .. } = &action;
                if *command != Command::Tick && *command != Command::Render {
                    log::debug!("{command:?}");
                }
                match command {
                    Command::Quit => self.should_quit = true,
                    Command::Suspend => self.should_suspend = true,
                    Command::Resume => self.should_suspend = false,
                    Command::ToggleShowHelp => self.show_help = !self.show_help,
                    Command::Error(message) => log::error!("{message}"),
                    Command::Resize(w, h) => {
                        log::info!("Resized to {w}x{h}");
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui, &action_tx)?;
                    },
                    Command::Render => {
                        self.render(&mut tui, &action_tx)?;
                    },
                    _ => {},
                }
                // The scene is frozen while the help overlay is up
                if !self.show_help {
                    if let Some(action) = self.page.update(action)? {
                        action_tx.send(action)?
                    }
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(act!(Command::Resume))?;
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        log::info!("Stopped {}", env!("CARGO_PKG_NAME"));
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            let area = f.area();

            let border = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(Color::Black));
            let inner = border.inner(area);
            f.render_widget(border, area);

            if let Err(e) = self.page.draw(f, inner) {
                // The loop only stops after the receiver is dropped
                let _ = action_tx.send(act!(Command::Error(format!("Failed to draw: {:?}", e))));
            }

            if self.show_help {
                self.draw_help(f, inner);
            };
        })?;

        Ok(())
    }

    fn draw_help(&mut self, f: &mut Frame<'_>, area: Rect) {
        let page_id = self.page.id();
        let mut groups = vec![("System".to_string(), self.config.keybindings.global.clone())];
        if let Some(bindings) = self.config.keybindings.pages.get(&page_id) {
            groups.push((page_id.to_string(), bindings.clone()));
        }

        f.render_widget(Help::new(groups), area);
    }
}

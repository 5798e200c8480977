mod celebration;
mod clock;
mod driver;
mod firework;
mod gift;
mod light;
mod particle;
mod sleigh;
mod snowflake;
mod sprite;

use std::{collections::HashMap, rc::Rc};

use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use derive_builder::Builder;
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use self::{
    clock::{Clock, MonotonicClock},
    driver::Scene,
};
use super::{Page, PageId};
use crate::{
    action::{act, Action, ActionState, Command, SceneAction},
    components::canvas::PixelCanvas,
    config::PageKeyBindings,
};

/// The only page: the animated scene, advanced on every tick and blitted on
/// every render.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct ScenePage {
    #[builder(default)]
    pub action_tx: Option<UnboundedSender<Action>>,
    #[builder(default)]
    pub keymap: PageKeyBindings,
    #[builder(default)]
    scene: Scene,
    #[builder(default)]
    canvas: PixelCanvas,
    #[builder(default = "Rc::new(MonotonicClock::default())")]
    clock: Rc<dyn Clock>,
}

impl ScenePage {
    pub fn new() -> Result<Self> {
        Ok(ScenePageBuilder::default().build()?)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }
}

impl Page for ScenePage {
    fn id(&self) -> PageId {
        PageId::Scene
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Gifts always fall from the sleigh, wherever the click lands
                trace!(column = mouse.column, row = mouse.row, "Scene clicked");
                Ok(Some(act!(Command::Scene(SceneAction::DropGift))))
            },
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action.command {
            Command::Tick => self.scene.frame(self.clock.now(), &mut self.canvas),
            Command::Scene(SceneAction::DropGift) if action.state == ActionState::Start => {
                self.scene.drop_gift(self.clock.now());
            },
            _ => (),
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(&self.canvas, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::palette;

    #[derive(Debug, Default)]
    struct ManualClock(Cell<Duration>);

    impl ManualClock {
        fn set(&self, millis: u64) {
            self.0.set(Duration::from_millis(millis));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    fn page(clock: Rc<ManualClock>) -> ScenePage {
        ScenePageBuilder::default().scene(Scene::with_seed(11)).clock(clock).build().unwrap()
    }

    fn click(kind: MouseEventKind) -> MouseEvent {
        MouseEvent { kind, column: 3, row: 4, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_left_click_requests_gift() {
        let mut page = page(Rc::default());
        assert_eq!(
            page.handle_mouse_events(click(MouseEventKind::Down(MouseButton::Left))).unwrap(),
            Some(act!(Command::Scene(SceneAction::DropGift)))
        );
        assert_eq!(page.handle_mouse_events(click(MouseEventKind::Down(MouseButton::Right))).unwrap(), None);
        assert_eq!(page.handle_mouse_events(click(MouseEventKind::Moved)).unwrap(), None);
    }

    #[test]
    fn test_drop_gift_uses_clock() {
        let clock = Rc::new(ManualClock::default());
        let mut page = page(clock.clone());

        page.update(act!(Command::Scene(SceneAction::DropGift))).unwrap();
        clock.set(400);
        page.update(act!(Command::Scene(SceneAction::DropGift))).unwrap();
        assert_eq!(page.scene().gifts().len(), 1);

        clock.set(600);
        page.update(act!(Command::Scene(SceneAction::DropGift))).unwrap();
        assert_eq!(page.scene().gifts().len(), 2);

        clock.set(2000);
        page.update(act!(Command::Scene(SceneAction::DropGift), ActionState::End)).unwrap();
        assert_eq!(page.scene().gifts().len(), 2);
    }

    #[test]
    fn test_tick_paints_canvas() {
        let mut page = page(Rc::default());
        assert_eq!(page.canvas(), &PixelCanvas::default());

        page.update(act!(Command::Tick)).unwrap();
        assert_eq!(page.canvas().get(0, 118), Some(palette::SNOW));
        assert_eq!(page.scene().sleigh().x(), -19.5);
    }
}

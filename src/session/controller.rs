//! Session controller - routes taps and swipes into the state machine.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_graphics::prelude::Point;

use super::{Completion, DisplaySurface, Haptics, InputBinding, Pulse};
use crate::input::{menu_row, InputEvent, Region, Swipe, SwipeAction};
use crate::morse::{SessionState, Signal, Text};
use crate::ui::{MenuItem, Screen, View, SPECIAL_MENU};

/// Drives one text-entry session from start to finish.
///
/// The controller decides which operations are reachable: taps on the
/// editor hit the four buttons, taps on the special menu pick a row, and
/// swipes only count on the editor. Once the session ends every further
/// event is ignored.
pub struct SessionController<'a, M, D, H, B>
where
    M: RawMutex,
    D: DisplaySurface,
    H: Haptics,
    B: InputBinding,
{
    state: SessionState,
    screen: Screen,
    display: D,
    haptics: H,
    binding: B,
    completion: &'a Completion<M>,
    active: bool,
}

impl<'a, M, D, H, B> SessionController<'a, M, D, H, B>
where
    M: RawMutex,
    D: DisplaySurface,
    H: Haptics,
    B: InputBinding,
{
    /// Start a session with a fresh state and draw the editor.
    pub fn start(display: D, haptics: H, binding: B, completion: &'a Completion<M>) -> Self {
        let mut controller = Self {
            state: SessionState::new(),
            screen: Screen::Editor,
            display,
            haptics,
            binding,
            completion,
            active: true,
        };
        #[cfg(feature = "defmt")]
        defmt::info!("Session: started");
        controller.redraw();
        controller
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// `false` once the session has finished or been cancelled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Dispatch one decoded input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Tap(p) => self.tap(p),
            InputEvent::Swipe(s) => self.swipe(s),
        }
    }

    pub fn tap(&mut self, p: Point) {
        if !self.active {
            return;
        }
        match self.screen {
            Screen::Editor => self.tap_editor(p),
            Screen::SpecialMenu => self.tap_menu(p),
        }
    }

    pub fn swipe(&mut self, swipe: Swipe) {
        if !self.active || self.screen != Screen::Editor {
            return;
        }
        match swipe.action() {
            Some(SwipeAction::Finish) => self.finish(),
            Some(SwipeAction::Cancel) => self.cancel(),
            Some(SwipeAction::OpenSpecial) => {
                self.screen = Screen::SpecialMenu;
                self.redraw();
            }
            None => {}
        }
    }

    /// Flush the pending character and end the session with the text.
    pub fn finish(&mut self) {
        if !self.active {
            return;
        }
        self.state.commit();
        let text = self.state.clone().into_output();
        #[cfg(feature = "defmt")]
        defmt::info!("Session: finished with {} chars", text.len());
        self.end(Some(text));
    }

    /// End the session without a result.
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("Session: cancelled");
        self.end(None);
    }

    /// Give back the collaborators after the session is over.
    pub fn into_parts(self) -> (D, H, B) {
        (self.display, self.haptics, self.binding)
    }

    fn tap_editor(&mut self, p: Point) {
        let Some(region) = Region::hit(self.display.size(), p) else {
            return;
        };
        let mut pulse = match region {
            Region::Dot => {
                self.state.append_signal(Signal::Dot);
                Pulse::Signal
            }
            Region::Dash => {
                self.state.append_signal(Signal::Dash);
                Pulse::Signal
            }
            Region::Return => {
                self.state.pause();
                Pulse::Pause
            }
            Region::Delete => {
                self.state.delete();
                Pulse::Delete
            }
        };
        if self.state.take_output_dropped() {
            pulse = Pulse::Delete;
        }
        self.haptics.buzz(pulse);
        self.redraw();
    }

    fn tap_menu(&mut self, p: Point) {
        let Some(row) = menu_row(self.display.size(), SPECIAL_MENU.len(), p) else {
            return;
        };
        if let MenuItem::Insert(literal) = SPECIAL_MENU[row] {
            self.state.insert_literal(literal);
        }
        // Menu taps are silent unless the text is full.
        if self.state.take_output_dropped() {
            self.haptics.buzz(Pulse::Delete);
        }
        self.screen = Screen::Editor;
        self.redraw();
    }

    fn redraw(&mut self) {
        let view = View::new(self.screen, &self.state);
        self.display.render(&view);
    }

    fn end(&mut self, result: Option<Text>) {
        self.active = false;
        self.binding.release();
        self.display.clear();
        if let Err(_e) = self.completion.resolve(result) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Session: completion already resolved: {}", _e);
        }
    }
}

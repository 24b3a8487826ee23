//! Unit tests for the session controller.
//!
//! Fake collaborators record every render, pulse and release so the
//! routing and teardown rules can be checked without hardware.

use std::cell::RefCell;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_graphics::prelude::{Point, Size};

use super::*;
use crate::config::OUTPUT_CAPACITY;
use crate::error::Error;
use crate::input::{InputEvent, Swipe};
use crate::morse::Text;
use crate::ui::{Screen, View};

const SCREEN: Size = Size::new(176, 176);
const DOT: Point = Point::new(40, 40);
const DASH: Point = Point::new(130, 40);
const RET: Point = Point::new(40, 130);
const DEL: Point = Point::new(130, 130);

/// Centre of special-menu row `i` on `SCREEN`.
fn menu(i: i32) -> Point {
    let row_h = 176 / 6;
    Point::new(20, i * row_h + row_h / 2)
}

#[derive(Default)]
struct Log {
    frames: Vec<(Screen, String, String)>,
    pulses: Vec<Pulse>,
    clears: usize,
    releases: usize,
}

type Shared = Rc<RefCell<Log>>;

struct FakeDisplay(Shared);

impl DisplaySurface for FakeDisplay {
    fn size(&self) -> Size {
        SCREEN
    }

    fn render(&mut self, view: &View<'_>) {
        self.0.borrow_mut().frames.push((
            view.screen,
            view.signals.to_string(),
            view.text.to_string(),
        ));
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clears += 1;
    }
}

struct FakeHaptics(Shared);

impl Haptics for FakeHaptics {
    fn buzz(&mut self, pulse: Pulse) {
        self.0.borrow_mut().pulses.push(pulse);
    }
}

struct FakeBinding(Shared);

impl InputBinding for FakeBinding {
    fn release(&mut self) {
        self.0.borrow_mut().releases += 1;
    }
}

type Controller<'a> =
    SessionController<'a, NoopRawMutex, FakeDisplay, FakeHaptics, FakeBinding>;

fn start(completion: &Completion<NoopRawMutex>) -> (Controller<'_>, Shared) {
    let log = Shared::default();
    let controller = SessionController::start(
        FakeDisplay(log.clone()),
        FakeHaptics(log.clone()),
        FakeBinding(log.clone()),
        completion,
    );
    (controller, log)
}

fn taps(controller: &mut Controller<'_>, points: &[Point]) {
    for &p in points {
        controller.tap(p);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Editor Routing Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn start_renders_empty_editor() {
    let completion = Completion::new();
    let (controller, log) = start(&completion);
    assert!(controller.is_active());
    assert_eq!(controller.screen(), Screen::Editor);

    let log = log.borrow();
    assert_eq!(log.frames.len(), 1);
    assert_eq!(log.frames[0], (Screen::Editor, String::new(), String::new()));
}

#[test]
fn regions_drive_state_machine() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DOT, DASH]);
    assert_eq!(controller.state().signals(), ".-");

    controller.tap(RET);
    assert_eq!(controller.state().output(), "A");

    taps(&mut controller, &[DASH, DEL]);
    assert_eq!(controller.state().signals(), "");
    controller.tap(DEL);
    assert_eq!(controller.state().output(), "");

    let log = log.borrow();
    assert_eq!(
        log.pulses,
        [
            Pulse::Signal,
            Pulse::Signal,
            Pulse::Pause,
            Pulse::Signal,
            Pulse::Delete,
            Pulse::Delete
        ]
    );
    // Initial frame plus one per tap.
    assert_eq!(log.frames.len(), 7);
}

#[test]
fn frames_carry_signals_and_text() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DASH, DOT, RET, DOT]);
    let log = log.borrow();
    let last = log.frames.last().unwrap();
    assert_eq!(last, &(Screen::Editor, String::from("."), String::from("N")));
}

#[test]
fn off_screen_tap_is_ignored() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.tap(Point::new(500, 10));
    controller.tap(Point::new(-3, 10));
    assert_eq!(controller.state().signals(), "");
    assert!(log.borrow().pulses.is_empty());
    assert_eq!(log.borrow().frames.len(), 1);
}

#[test]
fn return_taps_end_words() {
    let completion = Completion::new();
    let (mut controller, _log) = start(&completion);

    taps(&mut controller, &[DOT, DOT, DOT, RET, RET, RET, DASH, RET]);
    assert_eq!(controller.state().output(), "S T");
}

#[test]
fn up_swipe_does_nothing() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.swipe(Swipe::UP);
    assert!(controller.is_active());
    assert_eq!(controller.screen(), Screen::Editor);
    assert_eq!(log.borrow().frames.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Special Menu Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn down_swipe_opens_special_menu() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.swipe(Swipe::DOWN);
    assert_eq!(controller.screen(), Screen::SpecialMenu);
    assert_eq!(log.borrow().frames.last().unwrap().0, Screen::SpecialMenu);
}

#[test]
fn menu_literal_inserts_and_returns() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DOT, DOT, RET, RET]);
    controller.swipe(Swipe::DOWN);
    controller.tap(menu(3));

    assert_eq!(controller.screen(), Screen::Editor);
    assert_eq!(controller.state().output(), "I!");
    assert_eq!(controller.state().pause_count(), 2);
    assert_eq!(log.borrow().frames.last().unwrap().0, Screen::Editor);
}

#[test]
fn each_menu_row_maps_to_its_literal() {
    let expected = [".", ",", "?", "!", "-"];
    for (row, literal) in expected.iter().enumerate() {
        let completion = Completion::new();
        let (mut controller, _log) = start(&completion);
        controller.swipe(Swipe::DOWN);
        controller.tap(menu(row as i32));
        assert_eq!(controller.state().output(), *literal);
    }
}

#[test]
fn menu_back_leaves_state_alone() {
    let completion = Completion::new();
    let (mut controller, _log) = start(&completion);

    taps(&mut controller, &[DASH, DASH]);
    let before = controller.state().clone();
    controller.swipe(Swipe::DOWN);
    controller.tap(menu(5));

    assert_eq!(controller.screen(), Screen::Editor);
    assert_eq!(controller.state(), &before);
}

#[test]
fn menu_keeps_pending_signals() {
    let completion = Completion::new();
    let (mut controller, _log) = start(&completion);

    taps(&mut controller, &[DOT, DASH]);
    controller.swipe(Swipe::DOWN);
    controller.tap(menu(1));
    assert_eq!(controller.state().signals(), ".-");
    assert_eq!(controller.state().output(), ",");
}

#[test]
fn swipes_are_ignored_in_menu() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.swipe(Swipe::DOWN);
    controller.swipe(Swipe::RIGHT);
    controller.swipe(Swipe::LEFT);
    assert!(controller.is_active());
    assert_eq!(controller.screen(), Screen::SpecialMenu);
    assert_eq!(log.borrow().releases, 0);
    assert!(!completion.is_resolved());
}

#[test]
fn menu_taps_do_not_buzz() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.swipe(Swipe::DOWN);
    controller.tap(menu(0));
    assert!(log.borrow().pulses.is_empty());
}

#[test]
fn full_text_buzzes_on_dropped_character() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    for _ in 0..OUTPUT_CAPACITY {
        controller.swipe(Swipe::DOWN);
        controller.tap(menu(0));
    }
    assert!(log.borrow().pulses.is_empty());

    controller.swipe(Swipe::DOWN);
    controller.tap(menu(4));
    assert_eq!(log.borrow().pulses, [Pulse::Delete]);

    taps(&mut controller, &[DOT, RET]);
    assert_eq!(log.borrow().pulses, [Pulse::Delete, Pulse::Signal, Pulse::Delete]);
    assert_eq!(controller.state().output().len(), OUTPUT_CAPACITY);
    assert!(controller.state().output().ends_with('.'));
}

// ═══════════════════════════════════════════════════════════════════════════
// Termination Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn finish_flushes_pending_buffer() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DOT, DOT, DOT, DOT, RET, DOT, DOT]);
    controller.swipe(Swipe::RIGHT);

    assert!(!controller.is_active());
    let result = completion.try_take().unwrap();
    assert_eq!(result.as_deref(), Some("HI"));

    let log = log.borrow();
    assert_eq!(log.releases, 1);
    assert_eq!(log.clears, 1);
}

#[test]
fn cancel_resolves_with_none() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DOT, RET]);
    controller.swipe(Swipe::LEFT);

    assert!(!controller.is_active());
    assert_eq!(completion.try_take(), Some(None));
    assert_eq!(log.borrow().releases, 1);
}

#[test]
fn double_fired_gestures_tear_down_once() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    taps(&mut controller, &[DASH, RET]);
    controller.swipe(Swipe::RIGHT);
    controller.swipe(Swipe::RIGHT);
    controller.swipe(Swipe::LEFT);
    controller.cancel();
    controller.finish();

    let log = log.borrow();
    assert_eq!(log.releases, 1);
    assert_eq!(log.clears, 1);
    assert_eq!(completion.try_take().unwrap().as_deref(), Some("T"));
    assert_eq!(completion.try_take(), None);
}

#[test]
fn events_after_end_are_ignored() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);

    controller.swipe(Swipe::LEFT);
    let frames = log.borrow().frames.len();

    controller.handle(InputEvent::Tap(DOT));
    controller.handle(InputEvent::Swipe(Swipe::DOWN));
    assert_eq!(controller.state().signals(), "");
    assert_eq!(controller.screen(), Screen::Editor);
    assert_eq!(log.borrow().frames.len(), frames);
    assert!(log.borrow().pulses.is_empty());
}

#[test]
fn into_parts_returns_collaborators() {
    let completion = Completion::new();
    let (mut controller, log) = start(&completion);
    controller.cancel();

    let (display, _haptics, _binding) = controller.into_parts();
    assert!(Rc::ptr_eq(&display.0, &log));
}

// ═══════════════════════════════════════════════════════════════════════════
// Completion Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn completion_resolves_once() {
    let completion: Completion<NoopRawMutex> = Completion::new();
    assert!(!completion.is_resolved());

    let mut text = Text::new();
    text.push_str("SOS").unwrap();
    assert_eq!(completion.resolve(Some(text)), Ok(()));
    assert!(completion.is_resolved());
    assert_eq!(completion.resolve(None), Err(Error::AlreadyResolved));

    assert_eq!(completion.try_take().unwrap().as_deref(), Some("SOS"));
}

#[test]
fn completion_wait_returns_result() {
    let completion: Completion<NoopRawMutex> = Completion::new();
    completion.resolve(None).unwrap();
    assert_eq!(embassy_futures::block_on(completion.wait()), None);
}

#[test]
fn pulse_durations() {
    assert_eq!(Pulse::Signal.duration_ms(), 30);
    assert_eq!(Pulse::Delete.duration_ms(), 50);
    assert_eq!(Pulse::Pause.duration_ms(), 20);
}

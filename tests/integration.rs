//! Integration tests for the brewdial input-to-dispatch pipeline.
//!
//! These drive the pure core exactly the way the firmware loop does: drain
//! the encoder, feed the selection state machine, arm the debouncer on edit
//! events, and poll it against a simulated millisecond clock.

use brewdial::api::{command_for, Command};
use brewdial::config::SEND_QUIET_PERIOD_MS;
use brewdial::dispatch::SendDebouncer;
use brewdial::input::encoder::{EncoderInput, QuadratureDecoder};
use brewdial::menu::{Menu, Value};
use brewdial::ui::selection::{Mode, SelectionState};

const TICK_MS: u64 = 20;

fn assert_close(got: f32, want: f32) {
    assert!((got - want).abs() < 1e-4, "got {got}, want {want}");
}

#[test]
fn knob_burst_collapses_into_one_temperature_command() {
    let mut ui = SelectionState::new(Menu::machine_default());
    let mut debouncer = SendDebouncer::new(SEND_QUIET_PERIOD_MS);
    ui.on_select(1); // Temp, 93.0

    // Three single-step edits 500 ms apart, then silence.
    let edits: [u64; 3] = [0, 500, 1000];
    let mut sent: Vec<(u64, Command)> = Vec::new();

    let mut t = 0;
    while t <= 4000 {
        if edits.contains(&t) {
            let update = ui.on_rotate(1);
            let index = update.edited.expect("editing Temp must emit an edit");
            debouncer.note_edit(index, t);
        }
        if let Some(index) = debouncer.poll(t) {
            sent.push((t, command_for(ui.menu(), index).unwrap()));
        }
        t += TICK_MS;
    }

    // Exactly one call, 2000 ms after the *last* edit, carrying the value
    // current at fire time rather than any intermediate one.
    assert_eq!(sent.len(), 1);
    let (fired_at, command) = sent[0];
    assert_eq!(fired_at, 1000 + SEND_QUIET_PERIOD_MS);
    match command {
        Command::SetTemperature(v) => assert_close(v, 93.3),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn edit_to_second_setting_supersedes_first_pending_send() {
    let mut ui = SelectionState::new(Menu::machine_default());
    let mut debouncer = SendDebouncer::new(SEND_QUIET_PERIOD_MS);

    // Toggle Power, then switch to Temp before Power's send fires.
    ui.on_select(0);
    let update = ui.on_rotate(1);
    debouncer.note_edit(update.edited.unwrap(), 0);

    ui.on_select(1);
    let update = ui.on_rotate(1);
    debouncer.note_edit(update.edited.unwrap(), 40);

    let mut sent: Vec<Command> = Vec::new();
    let mut t = 0;
    while t <= 6000 {
        if let Some(index) = debouncer.poll(t) {
            sent.push(command_for(ui.menu(), index).unwrap());
        }
        t += TICK_MS;
    }

    // One slot: the Temp edit cancelled the Power send entirely.
    assert_eq!(sent.len(), 1);
    match sent[0] {
        Command::SetTemperature(v) => assert_close(v, 93.1),
        other => panic!("unexpected command: {other:?}"),
    }
    // The Power edit itself was applied locally - only its send was lost.
    assert_eq!(ui.menu().get(0).value, Value::Bool(true));
}

#[test]
fn encoder_edges_drive_browsing_and_editing() {
    let input = EncoderInput::new();
    let mut decoder = QuadratureDecoder::new(true, true);
    let mut ui = SelectionState::new(Menu::machine_default());

    // One clockwise detent: 11 → 01 → 00 → 10 → 11 accumulates +4 steps.
    for (a, b) in [(false, true), (false, false), (true, false), (true, true)] {
        input.record_steps(decoder.on_levels(a, b));
    }
    let delta = input.read_delta();
    assert_eq!(delta, 4);
    ui.on_rotate(delta);
    assert_eq!(ui.selected_index(), 4);
    assert_eq!(input.read_delta(), 0);

    // Button press: the loop maps it to select-while-browsing.
    input.record_press();
    assert!(input.take_button_edge());
    ui.on_select(ui.selected_index());
    assert_eq!(ui.mode(), Mode::Editing);

    // Entry 4 is the read-only Timer: rotation is inert while editing it.
    let update = ui.on_rotate(2);
    assert_eq!(update.edited, None);
    assert_eq!(ui.menu().get(4).value, Value::Info("0s"));

    // Second press cancels back to browsing, selection kept.
    input.record_press();
    assert!(input.take_button_edge());
    ui.on_cancel();
    assert_eq!(ui.mode(), Mode::Browsing);
    assert_eq!(ui.selected_index(), 4);
}

#[test]
fn power_toggle_ships_after_quiet_period() {
    let mut ui = SelectionState::new(Menu::machine_default());
    let mut debouncer = SendDebouncer::new(SEND_QUIET_PERIOD_MS);

    ui.on_select(0);
    let update = ui.on_rotate(3); // any nonzero delta toggles exactly once
    debouncer.note_edit(update.edited.unwrap(), 100);

    assert_eq!(debouncer.poll(100 + SEND_QUIET_PERIOD_MS - 1), None);
    let index = debouncer.poll(100 + SEND_QUIET_PERIOD_MS).unwrap();
    assert_eq!(command_for(ui.menu(), index), Some(Command::SetPower(true)));
    // Fired once; the slot is clear until the next edit.
    assert_eq!(debouncer.poll(10_000), None);
}

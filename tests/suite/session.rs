//! End-to-end sessions: terminal events in, register state out.

use pipo_engine::{App, AppSettings, LengthPolicy, StatusKind, UiOptions};
use pipo_tui::apply_event;

use crate::common::{click, enter, key, standard_layout};

#[test]
fn keyboard_session_latches_and_resets() {
    let layout = standard_layout();
    let mut app = App::default();

    for c in ['3', '1', '0'] {
        apply_event(&mut app, &key(c), &layout);
    }
    assert_eq!(app.inputs().to_string(), "1011");
    assert_eq!(app.register().rendered_word(), "0000");

    apply_event(&mut app, &enter(), &layout);
    assert_eq!(app.register().output_bits(), [1, 0, 1, 1]);
    assert_eq!(app.register().load_count(), 1);

    apply_event(&mut app, &key('r'), &layout);
    assert_eq!(app.register().output_bits(), [0, 0, 0, 0]);
    assert_eq!(app.register().load_count(), 0);
    assert_eq!(app.inputs().to_string(), "0000");
}

#[test]
fn mouse_session_matches_keyboard_session() {
    let layout = standard_layout();
    let mut app = App::default();

    apply_event(&mut app, &click(layout.input_cells[1]), &layout);
    apply_event(&mut app, &click(layout.input_cells[2]), &layout);
    apply_event(&mut app, &click(layout.latch_button), &layout);
    apply_event(&mut app, &click(layout.latch_button), &layout);

    assert_eq!(app.register().rendered_word(), "0110");
    assert_eq!(app.register().load_count(), 2);
    let status = app.status().expect("latch status");
    assert_eq!(status.kind, StatusKind::Info);
    assert_eq!(status.message, "Latched 0110 (load #2)");
}

#[test]
fn quit_key_stops_the_session() {
    let layout = standard_layout();
    let mut app = App::new(AppSettings {
        ui: UiOptions::default(),
        length_policy: LengthPolicy::Reject,
    });
    apply_event(&mut app, &key('q'), &layout);
    assert!(app.should_quit());
}

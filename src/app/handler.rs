//! Input handling — maps key/mouse/resize/focus/timer events to state mutations.
//!
//! Every scroll input is offered to the governor before it moves the page, so
//! a damped tick never also advances by the raw delta.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::core::governor::WheelDecision;

use super::state::{AppState, Viewport};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let now = state.now_ms();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => scroll_input(state, state.wheel_step_px(), now),
        KeyCode::Up | KeyCode::Char('k') => scroll_input(state, -state.wheel_step_px(), now),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll_input(state, state.page_step_px(), now),
        KeyCode::PageUp => scroll_input(state, -state.page_step_px(), now),
        KeyCode::Home | KeyCode::Char('g') => state.jump_to(0.0, now),
        KeyCode::End | KeyCode::Char('G') => state.jump_to(f64::MAX, now),
        _ => {}
    }
}

/// Process a mouse event (wheel only; the page has no clickable targets).
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let now = state.now_ms();
    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_input(state, state.wheel_step_px(), now),
        MouseEventKind::ScrollUp => scroll_input(state, -state.wheel_step_px(), now),
        _ => {}
    }
}

/// Terminal resized: re-measure and run the same pipeline at the last offset.
pub fn handle_resize(state: &mut AppState, cols: u16, rows: u16) {
    let now = state.now_ms();
    tracing::debug!(cols, rows, "terminal resized");
    state.resize(Viewport { cols, rows }, now);
    state.status_message = Some(format!(
        "{cols}×{rows} · {} thumbnail(s) per side",
        state.thumbnails_per_side
    ));
}

/// Focus came back: resample so flags and the governor catch up with
/// anything that happened while the page was hidden.
pub fn handle_focus_gained(state: &mut AppState) {
    let now = state.now_ms();
    tracing::debug!("focus regained; resampling");
    state.resample(now);
}

/// A damping window's timer fired.
pub fn handle_damping_expired(state: &mut AppState, generation: u64) {
    let now = state.now_ms();
    if !state.stage.expire_damping(generation, now) {
        tracing::trace!(generation, "stale damping timer ignored");
    }
}

/// Route a raw scroll delta through the governor, then apply what it allows.
pub fn scroll_input(state: &mut AppState, raw_delta_px: f64, now_ms: u64) {
    state.status_message = None;
    let applied = match state.stage.intercept_wheel(raw_delta_px, now_ms) {
        WheelDecision::PassThrough => raw_delta_px,
        WheelDecision::Replace { step_px } => step_px,
    };
    state.apply_scroll(applied, now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        let config = AppConfig::default();
        let stage_config = config.stage_config().unwrap();
        let capacity = config.capacity().unwrap();
        AppState::new(config, stage_config, capacity, Viewport { cols: 120, rows: 52 })
    }

    #[test]
    fn damped_input_moves_by_step_only() {
        let mut s = state();
        s.jump_to(3350.0, 0);
        scroll_input(&mut s, 60.0, 10); // crosses 3400, passes through
        assert_eq!(s.offset_px, 3410.0);
        assert!(s.stage.governor_state().active);

        scroll_input(&mut s, 60.0, 20);
        assert_eq!(s.offset_px, 3418.0);
        scroll_input(&mut s, -60.0, 30);
        assert_eq!(s.offset_px, 3410.0);
    }

    #[test]
    fn expired_window_restores_raw_input() {
        let mut s = state();
        s.jump_to(3350.0, 0);
        scroll_input(&mut s, 60.0, 10);
        let generation = s.pending_timers[0].generation;
        assert!(s.stage.expire_damping(generation, 510));

        scroll_input(&mut s, 60.0, 600);
        assert_eq!(s.offset_px, 3470.0);
        assert!(!s.stage.governor_state().active);
    }

    #[test]
    fn focus_closes_a_window_that_ran_out_while_hidden() {
        let mut s = state();
        s.jump_to(3350.0, 0);
        scroll_input(&mut s, 60.0, 10);
        assert!(s.stage.governor_state().active);

        // Any resample past the window's end retires it without its timer.
        s.resample(900);
        assert!(!s.stage.governor_state().active);
        handle_focus_gained(&mut s);
        assert!(!s.stage.governor_state().active);
        assert_eq!(s.offset_px, 3410.0);
    }

    #[test]
    fn resize_reports_then_scroll_clears() {
        let mut s = state();
        handle_resize(&mut s, 60, 27);
        assert_eq!(
            s.status_message.as_deref(),
            Some("60×27 · 0 thumbnail(s) per side")
        );
        scroll_input(&mut s, 60.0, 10);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn retreat_then_reapproach_brakes_again() {
        let mut s = state();
        s.jump_to(3350.0, 0);
        scroll_input(&mut s, 60.0, 10);
        scroll_input(&mut s, -8.0, 20); // damped: back to 3402
        scroll_input(&mut s, -8.0, 30); // damped: 3394, retreat
        assert!(!s.stage.governor_state().active);
        scroll_input(&mut s, 60.0, 40);
        assert!(s.stage.governor_state().active);
        assert_eq!(s.pending_timers.len(), 2);
    }
}

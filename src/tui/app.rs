//! Menus and the timer event loop.

use std::time::Duration;

use tracing::info;

use crate::error::PomoError;
use crate::pomodoro::{
    break_options, presets, study_options, Flow, SessionContext, SessionController,
    TimerOption, TransitionPrompt,
};
use crate::tui::adapter::{BlockingInput, Key, TerminalAdapter};
use crate::tui::event::{command_for, is_quit_answer};
use crate::tui::menu::Menu;

/// Run the whole program on `term`: both menus, then the timer.
///
/// Returns the controller as it was when the loop ended, or None if the user
/// quit from a menu.
///
/// # Errors
///
/// Returns an error if drawing or reading input fails.
pub fn run<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    debug: bool,
    interval: Duration,
) -> Result<Option<SessionController>, PomoError> {
    let Some(context) = choose_context(term, debug)? else {
        info!("quit from menu");
        return Ok(None);
    };
    info!(study = %context.study, break_time = %context.break_time, "durations selected");

    run_timer(term, context, interval).map(Some)
}

/// Ask for the study and break lengths. None if the user quit.
///
/// # Errors
///
/// Returns an error if drawing or reading input fails.
pub fn choose_context<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    debug: bool,
) -> Result<Option<SessionContext>, PomoError> {
    let study = study_options(debug);
    let Some(study) = choose(term, "Select Study Time:", &study)? else {
        return Ok(None);
    };

    let breaks = break_options(debug);
    let Some(break_time) = choose(term, "Select Break Time:", &breaks)? else {
        return Ok(None);
    };

    Ok(Some(SessionContext::new(study.time, break_time.time)))
}

fn choose<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    prompt: &str,
    options: &[TimerOption],
) -> Result<Option<TimerOption>, PomoError> {
    let labels: Vec<String> = presets::labels(options)
        .into_iter()
        .map(str::to_string)
        .collect();
    let index = select(term, prompt, &labels, true)?;
    Ok(index.and_then(|i| options.get(i).copied()))
}

/// Show a menu until an entry is confirmed with Enter.
///
/// Returns the chosen index, or None when "Quit" is chosen or Ctrl+C is
/// pressed.
///
/// # Errors
///
/// Returns an error if drawing or reading input fails.
pub fn select<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    prompt: &str,
    options: &[String],
    allow_quit: bool,
) -> Result<Option<usize>, PomoError> {
    let mut menu = Menu::new(options.len(), allow_quit);
    let mut input = BlockingInput::acquire(term)?;

    loop {
        input
            .terminal()
            .render_menu(prompt, options, menu.selected(), allow_quit)?;

        match input.read_key()? {
            Key::Up => menu.select_previous(),
            Key::Down => menu.select_next(),
            Key::Enter => return Ok(menu.choice()),
            Key::Interrupt => return Ok(None),
            _ => {}
        }
    }
}

/// Show a transition prompt and wait for one key. False means quit.
///
/// # Errors
///
/// Returns an error if drawing or reading input fails.
pub fn confirm_transition<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    prompt: &TransitionPrompt,
) -> Result<bool, PomoError> {
    term.render_prompt(prompt.message, &prompt.detail())?;
    let mut input = BlockingInput::acquire(term)?;
    let key = input.read_key()?;
    Ok(!is_quit_answer(key))
}

/// Run the countdown until the user quits.
///
/// Each iteration takes at most one key, advances the clock by `interval`
/// while running, redraws, and waits one interval.
///
/// # Errors
///
/// Returns an error if drawing or reading input fails.
pub fn run_timer<T: TerminalAdapter + ?Sized>(
    term: &mut T,
    context: SessionContext,
    interval: Duration,
) -> Result<SessionController, PomoError> {
    let mut controller = SessionController::new(context);
    term.render(&controller.screen_state())?;

    loop {
        if let Some(command) = term.poll_key()?.and_then(command_for) {
            if controller.handle(command) == Flow::Quit {
                break;
            }
        }

        if controller.tick(interval) {
            let flow = controller
                .complete_session(|prompt| confirm_transition(&mut *term, prompt))?;
            if flow == Flow::Quit {
                break;
            }
        }

        term.render(&controller.screen_state())?;
        term.idle(interval);
    }

    info!(session = %controller.kind(), status = %controller.status(), "timer stopped");
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pomodoro::{RunState, SessionKind, SessionTime, Status};
    use crate::tui::adapter::{InputMode, MockTerminalAdapter};

    const TICK: Duration = Duration::from_micros(10_000);

    /// A mock that draws nothing and replays scripted keys.
    ///
    /// `blocking` feeds menus and prompts; `polled` feeds the loop, one entry
    /// per iteration, and reports no key once exhausted.
    fn scripted(blocking: Vec<Key>, polled: Vec<Option<Key>>) -> MockTerminalAdapter {
        let mut term = MockTerminalAdapter::new();
        let mut blocking = VecDeque::from(blocking);
        let mut polled = VecDeque::from(polled);

        term.expect_render().returning(|_| Ok(()));
        term.expect_render_menu().returning(|_, _, _, _| Ok(()));
        term.expect_render_prompt().returning(|_, _| Ok(()));
        term.expect_set_input_mode().returning(|_| Ok(()));
        term.expect_idle().returning(|_| ());
        term.expect_read_key_blocking().returning(move || {
            blocking
                .pop_front()
                .ok_or_else(|| PomoError::Terminal("script exhausted".to_string()))
        });
        term.expect_poll_key()
            .returning(move || Ok(polled.pop_front().flatten()));
        term
    }

    fn debug_context() -> SessionContext {
        SessionContext::new(SessionTime::new(0, 10), SessionTime::new(0, 5))
    }

    #[test]
    fn test_select_navigates_and_confirms() {
        let mut term = scripted(vec![Key::Down, Key::Char('x'), Key::Enter], vec![]);
        let options = vec!["a".to_string(), "b".to_string()];

        assert_eq!(select(&mut term, "Pick:", &options, true).unwrap(), Some(1));
    }

    #[test]
    fn test_select_quit_row() {
        let mut term = scripted(vec![Key::Up, Key::Enter], vec![]);
        let options = vec!["a".to_string(), "b".to_string()];

        assert_eq!(select(&mut term, "Pick:", &options, true).unwrap(), None);
    }

    #[test]
    fn test_select_highlights_current_row() {
        let mut term = MockTerminalAdapter::new();
        let mut keys = VecDeque::from([Key::Down, Key::Down, Key::Enter]);
        let highlighted = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&highlighted);

        term.expect_set_input_mode().returning(|_| Ok(()));
        term.expect_render_menu()
            .withf(|prompt, options, _, allow_quit| {
                prompt == "Select Break Time:" && options.len() == 2 && *allow_quit
            })
            .returning(move |_, _, selected, _| {
                seen.lock().unwrap().push(selected);
                Ok(())
            });
        term.expect_read_key_blocking()
            .returning(move || Ok(keys.pop_front().unwrap_or(Key::Enter)));

        let options = vec!["5:00".to_string(), "10:00".to_string()];
        let choice = select(&mut term, "Select Break Time:", &options, true).unwrap();

        assert_eq!(choice, None);
        assert_eq!(*highlighted.lock().unwrap(), [0, 1, 2]);
    }

    #[test]
    fn test_select_restores_input_mode() {
        let modes = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&modes);
        let mut term = MockTerminalAdapter::new();
        term.expect_set_input_mode().returning(move |mode| {
            recorded.lock().unwrap().push(mode);
            Ok(())
        });
        term.expect_render_menu().returning(|_, _, _, _| Ok(()));
        term.expect_read_key_blocking().returning(|| Ok(Key::Enter));

        let options = vec!["a".to_string()];
        assert_eq!(select(&mut term, "Pick:", &options, false).unwrap(), Some(0));
        assert_eq!(
            *modes.lock().unwrap(),
            [InputMode::Blocking, InputMode::NonBlocking]
        );
    }

    #[test]
    fn test_choose_context_debug_presets() {
        let keys = vec![Key::Down, Key::Down, Key::Enter, Key::Down, Key::Down, Key::Enter];
        let mut term = scripted(keys, vec![]);

        let context = choose_context(&mut term, true).unwrap().unwrap();
        assert_eq!(context, debug_context());
    }

    #[test]
    fn test_quit_at_study_menu() {
        // Study menu without debug: two presets, then Quit
        let mut term = scripted(vec![Key::Down, Key::Down, Key::Enter], vec![]);
        assert!(run(&mut term, false, TICK).unwrap().is_none());
    }

    #[test]
    fn test_quit_at_break_menu() {
        let keys = vec![Key::Enter, Key::Up, Key::Enter];
        let mut term = scripted(keys, vec![]);
        assert!(run(&mut term, false, TICK).unwrap().is_none());
    }

    #[test]
    fn test_ctrl_c_at_menu_quits() {
        let mut term = scripted(vec![Key::Interrupt], vec![]);
        assert!(choose_context(&mut term, false).unwrap().is_none());
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut term = scripted(vec![], vec![None, Some(Key::Char('q'))]);
        let controller = run_timer(&mut term, debug_context(), TICK).unwrap();
        assert_eq!(controller.run_state(), RunState::Stopped);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let polled = vec![Some(Key::Char('x')), Some(Key::Up), Some(Key::Char('q'))];
        let mut term = scripted(vec![], polled);
        let controller = run_timer(&mut term, debug_context(), TICK).unwrap();
        assert_eq!(controller.status(), Status::Stopped);
        assert_eq!(controller.clock().remaining_seconds(), 10);
    }

    #[test]
    fn test_pause_then_resume_in_loop() {
        let mut polled = vec![Some(Key::Char('s'))];
        polled.extend(std::iter::repeat(None).take(149));
        polled.push(Some(Key::Char('s')));
        polled.extend(std::iter::repeat(None).take(300));
        polled.push(Some(Key::Char('q')));

        let mut term = scripted(vec![], polled);
        let controller = run_timer(&mut term, debug_context(), TICK).unwrap();

        // Only the 150 iterations between the two presses advanced the clock
        assert_eq!(controller.run_state(), RunState::Paused);
        assert_eq!(controller.clock().remaining_seconds(), 9);
        assert_eq!(controller.clock().accumulator(), Duration::from_millis(500));
    }

    #[test]
    fn test_study_to_break_then_quit_at_prompt() {
        let mut term = scripted(vec![Key::Char('q')], vec![Some(Key::Char('s'))]);
        let controller = run_timer(&mut term, debug_context(), TICK).unwrap();

        assert_eq!(controller.kind(), SessionKind::Break);
        assert_eq!(controller.status(), Status::BreakReady);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_full_cycle_returns_to_study() {
        // Study expires on iteration 1100, the break on 1700; quit during
        // the second study session.
        let mut polled = vec![Some(Key::Char('s'))];
        polled.extend(std::iter::repeat(None).take(1748));
        polled.push(Some(Key::Char('q')));

        let blocking = vec![Key::Enter, Key::Char(' ')];
        let mut term = scripted(blocking, polled);
        let controller = run_timer(&mut term, debug_context(), TICK).unwrap();

        assert_eq!(controller.kind(), SessionKind::Study);
        assert_eq!(controller.status(), Status::Running);
        assert_eq!(controller.clock().remaining_seconds(), 10);
        assert_eq!(controller.clock().accumulator(), Duration::from_millis(490));
    }

    #[test]
    fn test_transition_prompt_is_shown_once() {
        let mut term = MockTerminalAdapter::new();
        let mut polled = VecDeque::from([Some(Key::Char('s'))]);

        term.expect_render().returning(|_| Ok(()));
        term.expect_set_input_mode().returning(|_| Ok(()));
        term.expect_idle().returning(|_| ());
        term.expect_poll_key()
            .returning(move || Ok(polled.pop_front().flatten()));
        term.expect_render_prompt()
            .withf(|message, detail| {
                message == "Study session complete! Time for a break."
                    && detail == "Break time: 00:05"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        term.expect_read_key_blocking()
            .times(1)
            .returning(|| Ok(Key::Char('q')));

        run_timer(&mut term, debug_context(), TICK).unwrap();
    }

    #[test]
    fn test_prompt_read_error_propagates() {
        let mut term = scripted(vec![], vec![Some(Key::Char('s'))]);
        assert!(run_timer(&mut term, debug_context(), TICK).is_err());
    }
}

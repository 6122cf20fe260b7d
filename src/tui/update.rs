//! State transitions: (App, Action) → Transition.
//!
//! Every button press becomes exactly one television operation. The
//! television decides whether the press does anything; this layer never
//! second-guesses it (pressing Channel 9 is passed through and ignored
//! there).

use tracing::debug;

use super::state::{Action, App, Transition};

/// Apply one action to the app.
pub fn update(app: &mut App, action: Action) -> Transition {
    match action {
        Action::Press(button) => {
            app.tv.press(button);
            app.last_button = Some(button);
            debug!(%button, state = %app.tv, "button pressed");
            Transition::Continue
        }
        Action::Quit => {
            app.should_quit = true;
            Transition::Quit
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

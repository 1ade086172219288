//! Plain-text rendering of session snapshots.

use exercise_types::{SessionSnapshot, SessionState};

const BAR_WIDTH: usize = 20;

/// One status line for `snapshot`.
pub fn status_line(frame: u64, snapshot: &SessionSnapshot) -> String {
    let headline = match snapshot.state {
        SessionState::Waiting => "shake to start".to_string(),
        SessionState::Playing => format!(
            "target {}  [{}] {:>3.0}%",
            snapshot.current_target_index + 1,
            bar(snapshot.accuracy),
            snapshot.accuracy * 100.0
        ),
        SessionState::Completed => "done".to_string(),
    };
    let shake = if snapshot.shake_feedback { " *" } else { "" };
    format!(
        "{frame:>6}  {:<9} {}/{}  score {:>5}  {headline}{shake}",
        snapshot.state.name(),
        snapshot.repetitions,
        snapshot.target_repetitions,
        snapshot.score,
    )
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_bounds() {
        assert_eq!(bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(1.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(2.0).len(), BAR_WIDTH);
    }

    #[test]
    fn waiting_line() {
        let line = status_line(7, &SessionSnapshot::initial(10));
        assert!(line.contains("waiting"));
        assert!(line.contains("0/10"));
        assert!(line.contains("shake to start"));
    }

    #[test]
    fn playing_line_shows_target() {
        let mut snapshot = SessionSnapshot::initial(10);
        snapshot.state = SessionState::Playing;
        snapshot.current_target_index = 2;
        snapshot.accuracy = 0.5;
        let line = status_line(1, &snapshot);
        assert!(line.contains("target 3"));
        assert!(line.contains("50%"));
    }
}

//! Board actions.

use anyhow::Result;
use std::time::Instant;

use crate::models::Difficulty;
use crate::tui::AppState;

/// Clicks the card under the cursor.
pub fn handle_flip(state: &mut AppState, now: Instant) -> Result<()> {
    let events = state.session.click_index(state.cursor, now);
    state.apply_events(&events, now);
    Ok(())
}

/// Switches difficulty; the current level is a no-op.
pub fn handle_select_difficulty(
    state: &mut AppState,
    difficulty: Difficulty,
    now: Instant,
) -> Result<()> {
    let events = state.session.set_difficulty(difficulty);
    state.apply_events(&events, now);
    Ok(())
}

/// Deals again at the same difficulty, keeping the score.
pub fn handle_restart(state: &mut AppState, now: Instant) -> Result<()> {
    let events = state.session.restart();
    state.apply_events(&events, now);
    Ok(())
}

/// Deals again and zeroes the score.
pub fn handle_full_reset(state: &mut AppState, now: Instant) -> Result<()> {
    let events = state.session.full_reset();
    state.apply_events(&events, now);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::game::Phase;
    use crate::tui::test_support::*;
    use crossterm::event::KeyCode;
    use std::time::{Duration, Instant};

    /// Board index of the other card with the same colour as `index`.
    fn partner(state: &crate::tui::AppState, index: usize) -> usize {
        let cards = state.session.game().cards();
        (0..cards.len())
            .find(|&j| j != index && cards[j].color.matches(&cards[index].color))
            .unwrap()
    }

    fn flip_at(state: &mut crate::tui::AppState, index: usize, now: Instant) {
        state.cursor = index;
        press(state, KeyCode::Enter, now);
    }

    #[test]
    fn test_match_scores_and_announces() {
        let mut state = state();
        let now = Instant::now();
        let other = partner(&state, 0);

        flip_at(&mut state, 0, now);
        assert_eq!(state.session.phase(), Phase::Revealing);
        flip_at(&mut state, other, now);

        assert_eq!(state.session.score(), 100);
        assert_eq!(state.session.moves(), 1);
        let name = state.session.game().cards()[0].color.name;
        assert_eq!(state.status_message, format!("It's {name} color!"));
    }

    #[test]
    fn test_mismatch_hides_after_delay() {
        let mut state = state();
        let now = Instant::now();
        let other = partner(&state, 0);
        let wrong = (1..6).find(|&j| j != other).unwrap();

        flip_at(&mut state, 0, now);
        flip_at(&mut state, wrong, now);
        assert_eq!(state.status_message, "Not a match");
        assert_eq!(state.session.phase(), Phase::Locked);

        // Locked: a third card is ignored
        flip_at(&mut state, other, now);
        assert!(!state.session.game().cards()[other].is_flipped);

        state.tick(now + Duration::from_millis(999));
        assert_eq!(state.session.phase(), Phase::Locked);
        state.tick(now + Duration::from_millis(1000));
        assert_eq!(state.session.phase(), Phase::Idle);
        assert!(state.session.game().cards().iter().all(|c| !c.is_flipped));
    }

    #[test]
    fn test_win_then_play_again_keeps_score() {
        let mut state = state();
        let mut now = Instant::now();

        for first in 0..6 {
            if state.session.game().cards()[first].is_matched {
                continue;
            }
            let second = partner(&state, first);
            flip_at(&mut state, first, now);
            flip_at(&mut state, second, now);
            now += Duration::from_millis(1000);
            state.tick(now);
        }

        assert!(state.session.is_won());
        assert!(state.celebration.is_some());
        assert_eq!(state.context(), crate::shortcuts::contexts::WON);

        press(&mut state, KeyCode::Enter, now);
        assert!(!state.session.is_won());
        assert_eq!(state.session.score(), 300);
        assert_eq!(state.session.moves(), 0);
        assert!(state.celebration.is_none());

        press(&mut state, KeyCode::Char('R'), now);
        assert_eq!(state.session.score(), 0);
    }

    #[test]
    fn test_restart_drops_pending_mismatch() {
        let mut state = state();
        let now = Instant::now();
        let other = partner(&state, 0);
        let wrong = (1..6).find(|&j| j != other).unwrap();

        flip_at(&mut state, 0, now);
        flip_at(&mut state, wrong, now);
        press(&mut state, KeyCode::Char('n'), now);

        // Reveal a card on the new deck, then let the stale deadline pass
        flip_at(&mut state, 0, now);
        state.tick(now + Duration::from_millis(1500));
        assert!(state.session.game().cards()[0].is_flipped);
        assert_eq!(state.session.phase(), crate::game::Phase::Revealing);
    }
}

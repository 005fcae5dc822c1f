//! End-to-end game scenarios through the public session API.

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use colorspeak::game::{GameEvent, Phase, Session, MATCH_POINTS};
use colorspeak::models::Difficulty;
use colorspeak::notify::Notifier;

/// Board index of the card matching `index`.
fn partner(session: &Session, index: usize) -> usize {
    let cards = session.game().cards();
    (0..cards.len())
        .find(|&j| j != index && cards[j].color.matches(&cards[index].color))
        .expect("every colour is dealt twice")
}

/// Plays every pair, resolving each before the next.
fn play_to_win(session: &mut Session, mut now: Instant) -> (Vec<GameEvent>, Instant) {
    let mut events = Vec::new();
    for first in 0..session.game().cards().len() {
        if session.game().cards()[first].is_matched {
            continue;
        }
        let second = partner(session, first);
        events.extend(session.click_index(first, now));
        events.extend(session.click_index(second, now));
        now += Duration::from_millis(1000);
        events.extend(session.tick(now));
    }
    (events, now)
}

struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

impl Notifier for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn notify(&self, event: &GameEvent) -> Result<()> {
        self.0.borrow_mut().push(event.clone());
        Ok(())
    }
}

struct Broken;

impl Notifier for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn notify(&self, _event: &GameEvent) -> Result<()> {
        anyhow::bail!("no audio device")
    }
}

#[test]
fn test_hard_game_is_won_only_after_last_pair() {
    let mut session = Session::seeded(Difficulty::Hard, 42);
    let now = Instant::now();
    assert_eq!(session.game().cards().len(), 18);

    // Every pair but the last
    let mut t = now;
    let mut found = 0;
    for first in 0..18 {
        if found == 8 {
            break;
        }
        if session.game().cards()[first].is_matched {
            continue;
        }
        let second = partner(&session, first);
        session.click_index(first, t);
        session.click_index(second, t);
        t += Duration::from_millis(1000);
        session.tick(t);
        found += 1;
        assert!(!session.is_won());
    }
    assert_eq!(session.game().pairs_found(), 8);

    let (events, _) = play_to_win(&mut session, t);
    assert!(session.is_won());
    assert_eq!(session.score(), 9 * MATCH_POINTS);
    assert_eq!(session.moves(), 9);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::Celebrate).count(),
        1
    );
    assert!(events.contains(&GameEvent::Won {
        score: 900,
        moves: 9
    }));
}

#[test]
fn test_score_survives_restart_but_not_full_reset() {
    let mut session = Session::seeded(Difficulty::Easy, 1);
    let (_, now) = play_to_win(&mut session, Instant::now());
    assert_eq!(session.score(), 300);

    session.restart();
    assert_eq!(session.score(), 300);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.phase(), Phase::Idle);

    play_to_win(&mut session, now);
    assert_eq!(session.score(), 600);

    session.full_reset();
    assert_eq!(session.score(), 0);
}

#[test]
fn test_stale_mismatch_does_not_touch_new_deck() {
    let mut session = Session::seeded(Difficulty::Easy, 9);
    let now = Instant::now();
    let other = partner(&session, 0);
    let wrong = (1..6).find(|&j| j != other).unwrap();

    session.click_index(0, now);
    session.click_index(wrong, now);
    assert_eq!(session.phase(), Phase::Locked);

    session.set_difficulty(Difficulty::Medium);
    assert_eq!(session.game().cards().len(), 12);

    session.click_index(3, now);
    let events = session.tick(now + Duration::from_secs(2));
    assert!(events.is_empty());
    assert!(session.game().cards()[3].is_flipped);
    assert_eq!(session.phase(), Phase::Revealing);
}

#[test]
fn test_selecting_current_difficulty_keeps_deck() {
    let mut session = Session::seeded(Difficulty::Medium, 5);
    let now = Instant::now();
    session.click_index(0, now);

    let events = session.set_difficulty(Difficulty::Medium);
    assert!(events.is_empty());
    assert!(session.game().cards()[0].is_flipped);
}

#[test]
fn test_notifiers_see_events_and_failures_are_contained() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::seeded(Difficulty::Easy, 11);
    session.add_notifier(Box::new(Broken));
    session.add_notifier(Box::new(Recorder(Rc::clone(&seen))));

    let (events, _) = play_to_win(&mut session, Instant::now());

    assert!(session.is_won());
    assert_eq!(*seen.borrow(), events);
    assert!(seen
        .borrow()
        .iter()
        .any(|e| matches!(e, GameEvent::Matched { .. })));
}

//! Tests for AI state components (hunter FSM, timers).

use super::bacteria::BacteriaDriver;
use super::chase::Chase;
use super::hunter::{next_hunter_mode, HunterMode, HunterSenses, HunterState};
use crate::ai::tuning::AiTuning;

fn senses(health: f32, distance: Option<f32>, thinking: bool) -> HunterSenses {
    HunterSenses {
        health,
        nearest_player_distance: distance,
        detection_range: 100.0,
        thinking,
    }
}

#[test]
fn test_hunter_state_default() {
    let state = HunterState::default();
    let tuning = AiTuning::default();

    assert_eq!(state.mode, HunterMode::Searching);
    assert_eq!(state.think_timer_ms, tuning.hunter_think_interval_ms);
    assert!(!state.is_fleeing);
    assert!(!state.can_think);
}

#[test]
fn test_low_health_flees_from_any_state_without_think() {
    for mode in [HunterMode::Searching, HunterMode::Hunting, HunterMode::Fleeing] {
        assert_eq!(next_hunter_mode(mode, &senses(2.0, None, false)), HunterMode::Fleeing);
        assert_eq!(next_hunter_mode(mode, &senses(0.5, Some(10.0), true)), HunterMode::Fleeing);
    }
}

#[test]
fn test_fleeing_is_terminal() {
    // Здоровье восстановилось: всё равно Fleeing
    let next = next_hunter_mode(HunterMode::Fleeing, &senses(10.0, Some(1.0), true));
    assert_eq!(next, HunterMode::Fleeing);
}

#[test]
fn test_searching_waits_for_think_tick() {
    let next = next_hunter_mode(HunterMode::Searching, &senses(10.0, Some(1.0), false));
    assert_eq!(next, HunterMode::Searching);
}

#[test]
fn test_detection_boundary() {
    let epsilon = 0.01;

    let inside = next_hunter_mode(HunterMode::Searching, &senses(10.0, Some(100.0 - epsilon), true));
    assert_eq!(inside, HunterMode::Hunting);

    let outside = next_hunter_mode(HunterMode::Searching, &senses(10.0, Some(100.0 + epsilon), true));
    assert_eq!(outside, HunterMode::Searching);

    // Ровно на границе: ещё не видит (строгое <)
    let edge = next_hunter_mode(HunterMode::Searching, &senses(10.0, Some(100.0), true));
    assert_eq!(edge, HunterMode::Searching);
}

#[test]
fn test_no_live_players_keeps_searching() {
    let next = next_hunter_mode(HunterMode::Searching, &senses(10.0, None, true));
    assert_eq!(next, HunterMode::Searching);
}

#[test]
fn test_hunting_stays_hunting_even_out_of_range() {
    let next = next_hunter_mode(HunterMode::Hunting, &senses(10.0, Some(10_000.0), true));
    assert_eq!(next, HunterMode::Hunting);
}

#[test]
fn test_think_timer_fires_once_per_interval() {
    let mut state = HunterState::new(100.0, 50.0);

    assert!(!state.tick_think_timer(40.0));
    assert!(!state.tick_think_timer(40.0));
    assert!(state.tick_think_timer(40.0)); // 120ms ≥ 100ms
    assert_eq!(state.think_timer_ms, 100.0);
    assert!(!state.can_think); // Флаг потреблён

    assert!(!state.tick_think_timer(99.0));
    assert!(state.tick_think_timer(1.0));
}

#[test]
fn test_bacteria_driver_shared_countdown() {
    let mut driver = BacteriaDriver::new(500.0);

    assert!(!driver.tick(200.0));
    assert!(!driver.tick(200.0));
    assert!(driver.tick(200.0));
    assert_eq!(driver.replan_timer_ms, 500.0);
}

#[test]
fn test_chase_timers_are_independent() {
    let mut chase = Chase::new(300.0, 100.0, 25.0);

    assert!(chase.tick_avoidance(100.0));
    assert_eq!(chase.avoid_timer_ms, 100.0);
    assert!(!chase.tick_heading(100.0));
    assert_eq!(chase.heading_timer_ms, 200.0);
}

use std::collections::HashSet;

use glam::Vec2;
use skyline_dash::Tuning;
use skyline_dash::sim::{
    AntagonistBehavior, GameEvent, GamePhase, GameState, Hazard, Obstacle, TickInput,
    obstacle_interval, tick,
};

/// Balance with spawning pushed out of reach, so tests place entities themselves
fn quiet_tuning() -> Tuning {
    let mut tuning = Tuning::breath_attacker();
    tuning.obstacle.min_interval = 1_000_000.0;
    tuning.antagonist.behavior = AntagonistBehavior::StationaryPeriodic {
        fire_period: 1_000_000,
        mouth_offset: 20.0,
    };
    tuning
}

fn started(tuning: Tuning, seed: u64) -> GameState {
    let mut state = GameState::new(tuning, seed).unwrap();
    state.start();
    state
}

/// A projectile sitting on the player that will not move this frame
fn park_hazard_on_player(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    state.hazards.push(Hazard {
        id,
        pos: state.player.pos + Vec2::new(5.0, 5.0),
        size: Vec2::new(10.0, 10.0),
        speed: state.speed,
        color: 0,
    });
    id
}

fn step(state: &mut GameState) {
    tick(state, &TickInput::default());
}

#[test]
fn three_hits_end_the_run_with_time_score() {
    let mut state = started(quiet_tuning(), 1);

    for hit_frame in [10u64, 80, 150] {
        while state.frame + 1 < hit_frame {
            step(&mut state);
        }
        park_hazard_on_player(&mut state);
        step(&mut state);
        assert_eq!(state.frame, hit_frame);
    }

    assert_eq!(state.phase, GamePhase::Ended);
    assert_eq!(state.lives, 0);
    assert_eq!(state.final_score(), Some(15));

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::RunEnded { final_score: 15 }));

    // Ended runs no longer tick
    step(&mut state);
    assert_eq!(state.frame, 150);
}

#[test]
fn invincibility_lasts_exactly_the_window() {
    let mut state = started(quiet_tuning(), 2);
    let window = state.tuning.invincibility_frames as u64;

    for _ in 0..9 {
        step(&mut state);
    }
    park_hazard_on_player(&mut state);
    step(&mut state);
    let hit_frame = state.frame;
    assert_eq!(state.lives, 2);

    for _ in 0..window {
        park_hazard_on_player(&mut state);
        step(&mut state);
        assert_eq!(state.lives, 2, "hit landed at frame {}", state.frame);
        assert!(state.hazards.is_empty());
    }
    assert_eq!(state.frame, hit_frame + window);

    park_hazard_on_player(&mut state);
    step(&mut state);
    assert_eq!(state.lives, 1);
}

#[test]
fn standing_in_a_building_hurts_again_after_the_window() {
    let mut state = started(quiet_tuning(), 3);
    let player = state.player.rect();
    let id = state.next_entity_id();
    // A wide building that will cover the player for many frames
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(player.left() + state.speed, player.top()),
        size: Vec2::new(600.0, 40.0),
        color: 0,
    });

    step(&mut state);
    assert_eq!(state.lives, 2);
    for _ in 0..60 {
        step(&mut state);
    }
    assert_eq!(state.lives, 2);
    step(&mut state);
    assert_eq!(state.lives, 1);
    assert!(state.obstacles.iter().any(|o| o.id == id));
}

#[test]
fn hazard_gone_on_next_read_obstacle_stays() {
    let mut state = started(quiet_tuning(), 4);
    let hazard_id = park_hazard_on_player(&mut state);
    let player = state.player.rect();
    let obstacle_id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id: obstacle_id,
        pos: Vec2::new(player.left() + state.speed, player.top()),
        size: Vec2::new(30.0, 40.0),
        color: 0,
    });

    step(&mut state);
    let snapshot = state.snapshot();
    assert!(snapshot.hazards.iter().all(|h| h.id != hazard_id));
    assert!(snapshot.obstacles.iter().any(|o| o.id == obstacle_id));
    // Only the first contact counted; the second was absorbed
    assert_eq!(snapshot.lives, 2);
}

#[test]
fn first_obstacle_waits_for_the_interval() {
    let mut state = started(Tuning::ground_pounder(), 5);
    let interval = obstacle_interval(state.speed, &state.tuning.obstacle);
    assert_eq!(interval, 95);

    let mut first_spawn = None;
    while first_spawn.is_none() && state.frame < 200 {
        step(&mut state);
        if state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::ObstacleSpawned { .. }))
        {
            first_spawn = Some(state.frame);
        }
    }
    assert_eq!(first_spawn, Some(interval));
}

#[test]
fn lives_never_rise_and_score_never_falls() {
    for seed in [1u64, 17, 256, 9001] {
        for tuning in [Tuning::ground_pounder(), Tuning::breath_attacker()] {
            let mut state = started(tuning, seed);
            let mut lives = state.lives;
            let mut score = state.score;
            let mut speed = state.speed;

            while state.phase == GamePhase::Active && state.frame < 20_000 {
                step(&mut state);
                assert!(state.lives <= lives);
                assert!(state.score >= score);
                assert!(state.speed >= speed);
                lives = state.lives;
                score = state.score;
                speed = state.speed;
            }
            // Nobody is jumping, so the run must end
            assert_eq!(state.phase, GamePhase::Ended);
            assert_eq!(state.score, (state.frame as f64 * 0.1).floor() as u64);
        }
    }
}

#[test]
fn culled_entities_never_come_back() {
    let mut state = started(Tuning::ground_pounder(), 77);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut seen = HashSet::new();
    let mut gone = HashSet::new();

    while state.phase == GamePhase::Active && state.frame < 5_000 {
        tick(&mut state, &input);
        let present: HashSet<u32> = state
            .obstacles
            .iter()
            .map(|o| o.id)
            .chain(state.hazards.iter().map(|h| h.id))
            .collect();

        for id in &seen {
            if !present.contains(id) {
                gone.insert(*id);
            }
        }
        assert!(present.is_disjoint(&gone));
        seen.extend(present);

        let width = state.tuning.viewport_width;
        for obstacle in &state.obstacles {
            assert!(obstacle.rect().right() >= 0.0);
        }
        for hazard in &state.hazards {
            let rect = hazard.rect();
            assert!(rect.right() >= 0.0 && rect.left() <= width);
        }
    }
    assert!(!gone.is_empty());
}

#[test]
fn restart_after_game_over() {
    let mut tuning = quiet_tuning();
    tuning.starting_lives = 1;
    let mut state = started(tuning, 8);
    park_hazard_on_player(&mut state);
    step(&mut state);
    assert_eq!(state.phase, GamePhase::Ended);

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    assert_eq!(state.phase, GamePhase::Active);
    assert_eq!(state.lives, 1);
    assert_eq!(state.frame, 1);
    assert!(state.hazards.is_empty());
}

#[test]
fn independent_simulations_do_not_interfere() {
    let mut a = started(Tuning::ground_pounder(), 123);
    let mut b = started(Tuning::ground_pounder(), 123);
    let mut c = started(Tuning::breath_attacker(), 5);

    for _ in 0..500 {
        step(&mut a);
        step(&mut c);
    }
    for _ in 0..500 {
        step(&mut b);
    }
    assert_eq!(a.frame, b.frame);
    assert_eq!(a.lives, b.lives);
    let ids_a: Vec<u32> = a.obstacles.iter().map(|o| o.id).collect();
    let ids_b: Vec<u32> = b.obstacles.iter().map(|o| o.id).collect();
    assert_eq!(ids_a, ids_b);
}

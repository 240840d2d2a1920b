//! Deterministic session scenarios driven through the event bus.

use std::{cell::RefCell, rc::Rc};

use tag_client::{input::Key, text::TextRenderer, Controller, View};
use tag_shared::{
    config::GameConfig,
    event::{Event, SceneChange},
    math::Vec2,
    player::{Direction, Role},
    scene::Scene,
};
use tag_tests::{init_tracing, new_game, playing_game, scenario_config};
use tokio::sync::mpsc;

fn move_event(player_id: usize, direction: Direction) -> Event {
    Event::PlayerMove {
        player_id,
        direction,
    }
}

fn distance_sq(game: &tag_engine::GameLoop) -> f32 {
    let engine = game.engine();
    let engine = engine.borrow();
    engine
        .player(0)
        .position()
        .distance_sq(engine.player(1).position())
}

#[test]
fn default_session_swaps_roles_after_one_round() {
    init_tracing();
    let (game, _) = playing_game(scenario_config());
    let engine = game.engine();
    {
        let e = engine.borrow();
        assert_eq!(e.player(0).role(), Role::Defender);
        assert_eq!(e.player(1).role(), Role::Attacker);
        assert_eq!(e.player(0).position(), Vec2::new(100.0, 300.0));
        assert_eq!(e.player(1).position(), Vec2::new(700.0, 300.0));
    }

    for _ in 0..59 {
        game.step();
    }
    assert_eq!(engine.borrow().player(0).role(), Role::Defender);
    assert_eq!(engine.borrow().round_timer(), 1);

    game.step();
    let e = engine.borrow();
    assert_eq!(e.round_timer(), 60);
    assert_eq!(e.player(0).role(), Role::Attacker);
    assert_eq!(e.player(0).speed(), e.config().attacker_speed);
    assert_eq!(e.player(1).role(), Role::Defender);
    assert_eq!(e.player(1).speed(), e.config().defender_speed);
}

#[test]
fn roles_invert_every_round_length_ticks() {
    let cfg = GameConfig {
        round_length: 25,
        ..scenario_config()
    };
    let (game, _) = playing_game(cfg);
    let engine = game.engine();

    for round in 1..=4 {
        for _ in 0..25 {
            game.step();
        }
        let expected = if round % 2 == 1 {
            Role::Attacker
        } else {
            Role::Defender
        };
        assert_eq!(engine.borrow().player(0).role(), expected, "round {round}");
        assert_eq!(engine.borrow().round_timer(), 25);
    }
}

#[test]
fn match_expiry_posts_one_times_up_and_shows_endgame() {
    let cfg = GameConfig {
        game_length: 30,
        round_length: 7,
        ..scenario_config()
    };
    let (game, recorder) = playing_game(cfg);
    let engine = game.engine();

    for _ in 0..29 {
        game.step();
    }
    assert_eq!(recorder.borrow().count(|e| *e == Event::RoundTimesUp), 0);
    assert_eq!(engine.borrow().scene(), Some(Scene::Play));

    game.step();
    assert_eq!(recorder.borrow().count(|e| *e == Event::RoundTimesUp), 1);
    assert_eq!(engine.borrow().scene(), Some(Scene::EndGame));

    for _ in 0..100 {
        game.step();
    }
    assert_eq!(recorder.borrow().count(|e| *e == Event::RoundTimesUp), 1);
    assert_eq!(engine.borrow().game_timer(), 0);
}

#[test]
fn contact_scores_for_the_defender_and_respawns_both() {
    let (game, _) = playing_game(scenario_config());
    while distance_sq(&game) > 40.0 * 40.0 {
        game.post(move_event(0, Direction::Right));
        game.post(move_event(1, Direction::Left));
    }

    game.step();

    let engine = game.engine();
    let e = engine.borrow();
    assert_eq!(e.player(0).score(), 1);
    assert_eq!(e.player(1).score(), 0);
    assert_eq!(e.player(0).position(), Vec2::new(100.0, 300.0));
    assert_eq!(e.player(1).position(), Vec2::new(700.0, 300.0));
    assert_eq!(e.player(0).role(), Role::Defender);
}

#[test]
fn contact_after_swap_credits_the_new_defender() {
    let (game, _) = playing_game(scenario_config());
    for _ in 0..60 {
        game.step();
    }
    while distance_sq(&game) > 40.0 * 40.0 {
        game.post(move_event(0, Direction::Right));
        game.post(move_event(1, Direction::Left));
    }

    game.step();

    let engine = game.engine();
    let e = engine.borrow();
    assert_eq!(e.player(0).score(), 0);
    assert_eq!(e.player(1).score(), 1);
}

#[test]
fn moves_are_clamped_to_the_arena() {
    let (game, _) = playing_game(scenario_config());
    for _ in 0..100 {
        game.post(move_event(0, Direction::Left));
        game.post(move_event(0, Direction::Up));
        game.post(move_event(1, Direction::Right));
        game.post(move_event(1, Direction::Down));
    }
    let engine = game.engine();
    let e = engine.borrow();
    assert_eq!(e.player(0).position(), Vec2::new(0.0, 0.0));
    assert_eq!(e.player(1).position(), Vec2::new(800.0, 600.0));
}

#[test]
fn popping_the_last_scene_quits_once() {
    let (game, recorder) = new_game(scenario_config());
    assert_eq!(game.engine().borrow().scene_depth(), 1);

    game.post(Event::SceneChange(SceneChange::Pop));

    assert_eq!(recorder.borrow().count(|e| *e == Event::Quit), 1);
    assert!(!game.step());
    assert_eq!(recorder.borrow().ticks(), 0);
}

#[test]
fn keyboard_drives_start_pause_and_resume() {
    let (mut game, _) = new_game(scenario_config());
    let engine = game.engine();
    let (keys, key_rx) = mpsc::channel(8);
    game.register(Rc::new(RefCell::new(Controller::new(engine.clone(), key_rx))));
    let view = Rc::new(RefCell::new(View::new(engine.clone(), TextRenderer::default())));
    game.register(view.clone());

    game.step();
    assert_eq!(view.borrow().backend().frame(), ["Press [space] to start ..."]);

    keys.try_send(Key::Space).unwrap();
    game.step();
    assert_eq!(engine.borrow().scene(), Some(Scene::Play));
    game.step();
    assert_eq!(engine.borrow().game_timer(), 3599);

    keys.try_send(Key::D).unwrap();
    keys.try_send(Key::P).unwrap();
    game.step();
    assert_eq!(engine.borrow().scene(), Some(Scene::Pause));
    assert_eq!(engine.borrow().player(0).position(), Vec2::new(102.5, 300.0));
    for _ in 0..5 {
        game.step();
    }
    assert_eq!(engine.borrow().game_timer(), 3598);
    assert_eq!(
        view.borrow().backend().frame().last().map(String::as_str),
        Some("Game Paused. Press Enter to continue")
    );

    keys.try_send(Key::Enter).unwrap();
    game.step();
    game.step();
    assert_eq!(engine.borrow().scene(), Some(Scene::Play));
    assert_eq!(engine.borrow().game_timer(), 3597);
}

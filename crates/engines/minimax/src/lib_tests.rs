use super::*;
use castellan_core::{legal_moves_for, Square, TimeControl};

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap()
}

fn pos(placement: &str) -> Position {
    Position::from_placement(placement).unwrap()
}

#[test]
fn evaluation_is_from_the_bots_side() {
    let mut p = Position::standard();
    assert_eq!(evaluate(&p, Color::White), 0);
    p.remove(sq("d8")).unwrap();
    assert_eq!(evaluate(&p, Color::White), 9);
    assert_eq!(evaluate(&p, Color::Black), -9);
    assert_eq!(piece_value(castellan_core::PieceKind::King), 100);
}

#[test]
fn bot_returns_a_legal_move() {
    let mut bot = MinimaxBot::seeded(2, 7);
    let p = Position::standard();
    let mv = bot.choose_move(&p, Color::White).unwrap();
    assert!(legal_moves_for(&p, Color::White).contains(&mv));
}

#[test]
fn bot_takes_a_hanging_queen() {
    let p = pos("4k3/8/8/3q4/8/8/8/3RK3");
    let mut bot = MinimaxBot::seeded(3, 1);
    let mv = bot.choose_move(&p, Color::White).unwrap();
    assert_eq!(mv, Move::new(p.piece_at(sq("d1")).unwrap(), sq("d5")));
}

#[test]
fn same_seed_same_choice() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    let first: Vec<Move> = (0..3)
        .map(|_| MinimaxBot::seeded(2, 42).choose_move(&p, Color::Black).unwrap())
        .collect();
    assert!(first.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn choice_always_comes_from_the_tied_set() {
    let p = Position::standard();
    let mut nodes = 0;
    let tc = castellan_core::TimeControl::new(None);
    tc.start();
    let outcome = search_root(&p, Color::White, 2, &mut nodes, &tc);
    let tied = outcome.best_moves();
    let best = outcome.best_score().unwrap();

    for seed in 0..8 {
        let mut bot = MinimaxBot::seeded(2, seed);
        let result = bot.search(&p, Color::White, SearchLimits::depth(2));
        assert!(tied.contains(&result.best_move.unwrap()));
        assert_eq!(result.score, best);
        assert!(!result.stopped);
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 0);
    }
}

#[test]
fn no_move_when_mated() {
    let p = pos("R5k1/5ppp/8/8/8/8/8/6K1");
    let mut bot = MinimaxBot::seeded(3, 0);
    let result = bot.search(&p, Color::Black, SearchLimits::depth(3));
    assert_eq!(result.best_move, None);
    assert!(bot.choose_move(&p, Color::Black).is_none());
}

#[test]
fn deadline_stops_deep_search_with_a_move() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    let mut bot = MinimaxBot::seeded(6, 3);
    let limits = SearchLimits::depth_and_time(6, Duration::from_millis(20));
    let result = bot.search(&p, Color::White, limits);
    assert!(result.stopped);
    let mv = result.best_move.unwrap();
    assert!(legal_moves_for(&p, Color::White).contains(&mv));
}

#[test]
fn stop_before_search_is_kept() {
    let tc = TimeControl::new(None);
    tc.stop();
    let limits = SearchLimits::depth(3).with_control(tc);
    let mut bot = MinimaxBot::seeded(3, 5);
    let result = bot.search(&Position::standard(), Color::White, limits);
    assert!(result.stopped);
    assert_eq!(result.nodes, 0);
    assert!(result.best_move.is_some());
}

#[test]
fn stop_from_another_thread_ends_untimed_search() {
    let tc = TimeControl::new(None);
    let limits = SearchLimits::depth(8).with_control(tc.clone());
    let handle = std::thread::spawn(move || {
        let mut bot = MinimaxBot::seeded(8, 6);
        bot.search(&Position::standard(), Color::White, limits)
    });
    std::thread::sleep(Duration::from_millis(30));
    tc.stop();

    let result = handle.join().unwrap();
    assert!(result.stopped);
    let mv = result.best_move.unwrap();
    assert!(legal_moves_for(&Position::standard(), Color::White).contains(&mv));
}

#[test]
fn config_limits() {
    let config = BotConfig::default();
    assert_eq!(config.depth, DEFAULT_DEPTH);
    assert!(config.limits().move_time.is_none());

    let timed = BotConfig {
        depth: 4,
        seed: Some(1),
        move_time_ms: Some(250),
    };
    let limits = timed.limits();
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
    assert_eq!(MinimaxBot::new(timed.clone()).config(), &timed);
}

use super::*;

fn pos(placement: &str) -> Position {
    Position::from_placement(placement).unwrap()
}

#[test]
fn random_bot_returns_legal_move() {
    let mut bot = RandomBot::new(Some(5));
    let p = Position::standard();

    let result = bot.search(&p, Color::White, SearchLimits::depth(1));

    let mv = result.best_move.unwrap();
    assert!(legal_moves_for(&p, Color::White).contains(&mv));
    assert_eq!(result.nodes, 20);
}

#[test]
fn random_bot_handles_checkmate() {
    let mut bot = RandomBot::new(Some(5));
    let p = pos("R5k1/5ppp/8/8/8/8/8/6K1");

    let result = bot.search(&p, Color::Black, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn random_bot_handles_stalemate() {
    let mut bot = RandomBot::new(Some(5));
    let p = pos("k7/8/1Q6/8/8/8/8/1K6");

    let result = bot.search(&p, Color::Black, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_bots_agree() {
    let p = Position::standard();
    let a = RandomBot::new(Some(11)).search(&p, Color::Black, SearchLimits::depth(1));
    let b = RandomBot::new(Some(11)).search(&p, Color::Black, SearchLimits::depth(1));
    assert_eq!(a.best_move, b.best_move);
}

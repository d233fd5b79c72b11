//! End-to-end checks of the public API.

use poker_trainer_core::{
    calculate_pot_odds, evaluate_decision, evaluate_hand, get_hand_notation,
    get_hand_strength_tier, is_in_opening_range, parse_cards, Action, Card, Deck, Grade,
    HandRank, HandTier, PlayerAction, Position, Scenario, TrainerError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

#[test]
fn test_royal_flush() {
    let hs = evaluate_hand(&cards("As Ks Qs Js Ts")).unwrap();
    assert_eq!(hs.rank, HandRank::RoyalFlush);
}

#[test]
fn test_full_house_tiebreakers() {
    let hs = evaluate_hand(&cards("2h 2d 2c 3s 3d")).unwrap();
    assert_eq!(hs.rank, HandRank::FullHouse);
    assert_eq!(hs.tiebreakers, vec![2, 3]);
}

#[test]
fn test_evaluate_rejects_bad_sizes() {
    assert!(matches!(
        evaluate_hand(&cards("As Ks Qs Js")),
        Err(TrainerError::InvalidHandSize { actual: 4, .. })
    ));
    assert!(matches!(
        evaluate_hand(&cards("As Ks Qs Js Ts 9s 8s 7s")),
        Err(TrainerError::InvalidHandSize { actual: 8, .. })
    ));
}

#[test]
fn test_best_of_seven_dominates_subsets() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let hand = deck.deal(7).unwrap();
        let best = evaluate_hand(&hand).unwrap();
        assert_eq!(best.tiebreakers.len(), best.rank.tiebreaker_len());

        // Every 5-card subset, dropping two cards
        for i in 0..7 {
            for j in (i + 1)..7 {
                let subset: Vec<Card> = hand
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &c)| c)
                    .collect();
                assert!(best >= evaluate_hand(&subset).unwrap());
            }
        }
    }
}

#[test]
fn test_hand_notation() {
    assert_eq!(get_hand_notation(&cards("As Ad")).unwrap(), "AA");
    assert_eq!(get_hand_notation(&cards("As Ks")).unwrap(), "AKs");
    assert_eq!(get_hand_notation(&cards("As Kh")).unwrap(), "AKo");
    assert!(get_hand_notation(&cards("As Kh Qd")).is_err());
}

#[test]
fn test_opening_ranges() {
    assert!(is_in_opening_range("AA", Position::Btn));
    assert!(!is_in_opening_range("72o", Position::Utg));
    assert_eq!(get_hand_strength_tier("72o"), HandTier::Trash);
}

#[test]
fn test_grading_scenarios() {
    let aces = Scenario::simple(Position::Btn, "As Ad", "", 1.5, 0.0).unwrap();

    let raise = evaluate_decision(&aces, Action::Raise).unwrap();
    assert_eq!(raise.grade, Grade::Excellent);
    assert_eq!(raise.best_action, Action::Raise);

    let fold = evaluate_decision(&aces, Action::Fold).unwrap();
    assert_eq!(fold.grade, Grade::Blunder);

    let trash = Scenario::simple(Position::Utg, "7h 2d", "", 1.5, 0.0).unwrap();
    let fold = evaluate_decision(&trash, Action::Fold).unwrap();
    assert_eq!(fold.grade, Grade::Excellent);
}

#[test]
fn test_pot_odds_drive_playable_hands() {
    assert_eq!(calculate_pot_odds(10.0, 0.0), 0.0);
    let odds = calculate_pot_odds(7.5, 3.0);
    assert!((odds - 0.2857).abs() < 1e-4);

    let scenario = Scenario::simple(Position::Btn, "Ks Js", "", 7.5, 3.0)
        .unwrap()
        .with_action(PlayerAction::with_amount(Position::Co, Action::Raise, 3.0));
    assert_eq!(get_hand_strength_tier("KJs"), HandTier::Playable);

    let eval = evaluate_decision(&scenario, Action::Call).unwrap();
    assert_eq!(eval.best_action, Action::Fold);
    assert_eq!(eval.grade, Grade::Inaccurate);
}

#[test]
fn test_scenario_json_round_trip() {
    let json = r#"{
        "name": "Blind defense",
        "hero_position": "BB",
        "hero_cards": ["Qh", "Qd"],
        "action_history": [
            {"position": "BTN", "action": "raise", "amount": 2.5},
            {"position": "SB", "action": "fold"}
        ],
        "pot_size": 4.0,
        "current_bet": 1.5
    }"#;
    let scenario: Scenario = serde_json::from_str(json).unwrap();
    let eval = evaluate_decision(&scenario, Action::Raise).unwrap();
    assert_eq!(eval.grade, Grade::Excellent);

    let out = serde_json::to_value(&eval).unwrap();
    assert_eq!(out["chosen_action"], "raise");
    assert_eq!(out["grade"], "Excellent");
}

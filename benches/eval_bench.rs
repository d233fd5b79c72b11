//! Benchmarks for hand evaluation and decision grading.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poker_trainer_core::{
    evaluate_hand, parse_cards, Action, DecisionEvaluator, PlayerAction, Position, Scenario,
};

fn evaluate_5_benchmark(c: &mut Criterion) {
    let cards = parse_cards("As Kd Qh Jc 9s").unwrap();
    c.bench_function("evaluate_5_cards", |b| b.iter(|| evaluate_hand(black_box(&cards))));
}

fn evaluate_7_benchmark(c: &mut Criterion) {
    let cards = parse_cards("As Ks Qs Js 2d 3c Ts").unwrap();
    c.bench_function("evaluate_7_cards", |b| b.iter(|| evaluate_hand(black_box(&cards))));
}

fn evaluate_decision_benchmark(c: &mut Criterion) {
    let evaluator = DecisionEvaluator::new();
    let opening = Scenario::simple(Position::Co, "Ah Qd", "", 1.5, 0.0).unwrap();
    let facing = Scenario::simple(Position::Btn, "8s 8d", "", 7.5, 3.0)
        .unwrap()
        .with_action(PlayerAction::with_amount(Position::Co, Action::Raise, 3.0));

    c.bench_function("evaluate_decision_opening", |b| {
        b.iter(|| evaluator.evaluate_decision(black_box(&opening), Action::Raise))
    });
    c.bench_function("evaluate_decision_facing", |b| {
        b.iter(|| evaluator.evaluate_decision(black_box(&facing), Action::Call))
    });
}

fn evaluate_batch_benchmark(c: &mut Criterion) {
    let evaluator = DecisionEvaluator::new();
    let decisions: Vec<(Scenario, Action)> = Position::ALL
        .iter()
        .flat_map(|&pos| {
            ["As Ad", "Kh Qh", "8s 8d", "7h 2d"].map(|hand| {
                let scenario = Scenario::simple(pos, hand, "", 1.5, 0.0).unwrap();
                (scenario, Action::Raise)
            })
        })
        .collect();

    c.bench_function("evaluate_batch_36", |b| {
        b.iter(|| evaluator.evaluate_batch(black_box(&decisions)))
    });
}

criterion_group!(
    benches,
    evaluate_5_benchmark,
    evaluate_7_benchmark,
    evaluate_decision_benchmark,
    evaluate_batch_benchmark
);
criterion_main!(benches);

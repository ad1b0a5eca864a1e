use criterion::{black_box, criterion_group, criterion_main, Criterion};

use color_match::core::{Difficulty, GameRng, RoundState};
use color_match::rules::GameEngine;

fn bench_generate(c: &mut Criterion) {
    for d in Difficulty::ALL {
        c.bench_function(&format!("generate_round_{}", d.label().to_lowercase()), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| RoundState::generate(black_box(d), &mut rng));
        });
    }
}

fn bench_guess(c: &mut Criterion) {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(42));

    c.bench_function("correct_guess", |b| {
        b.iter(|| {
            let target = session.round().target_index();
            engine.evaluate_guess(&mut session, black_box(target))
        });
    });
}

criterion_group!(benches, bench_generate, bench_guess);
criterion_main!(benches);

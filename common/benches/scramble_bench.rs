use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::black_white_tiles::{
    handle_move, initialize_game, GameRules, InitializeRequest, MoveRequest,
};

fn bench_initialize_large_board() {
    let rules = GameRules::default();
    let request = InitializeRequest {
        clicks: Some(i64::from(rules.max_clicks)),
        length: Some(i64::from(rules.max_dimension)),
        width: Some(i64::from(rules.max_dimension)),
        seed: None,
    };
    let mut rng = SessionRng::from_random();
    black_box(initialize_game(&request, &rules, &mut rng).ok());
}

fn bench_handle_move_round_trip(tiles: &[Vec<bool>]) {
    let request = MoveRequest::new(tiles.to_vec(), 50, 50);
    black_box(handle_move(request).ok());
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("initialize 100x100 with 10000 clicks", |b| {
        b.iter(bench_initialize_large_board)
    });

    let tiles = vec![vec![true; 100]; 100];
    c.bench_function("handle_move on 100x100", |b| {
        b.iter(|| bench_handle_move_round_trip(&tiles))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

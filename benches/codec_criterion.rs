use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use chess960_board::position::numbering::{id_to_position, position_to_id, POSITION_COUNT};
use chess960_board::render::board::render_board;
use chess960_board::utils::fen::{generate_fen, CLASSICAL_START_FEN};

fn sample_size() -> usize {
    match std::env::var("CHESS960_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 100,
        _ => 20,
    }
}

fn bench_codec(c: &mut Criterion) {
    // Correctness guard before benchmarking.
    for id in 0..i64::from(POSITION_COUNT) {
        let rank = id_to_position(id).expect("in-range id should decode");
        let back = rank.id().expect("decoded rank should encode");
        assert_eq!(i64::from(back.value()), id, "round trip broke at {id}");
    }

    let piece_strings: Vec<String> = (0..i64::from(POSITION_COUNT))
        .map(|id| {
            id_to_position(id)
                .expect("in-range id should decode")
                .piece_string()
        })
        .collect();

    let mut group = c.benchmark_group("numbering");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(sample_size());
    group.throughput(Throughput::Elements(u64::from(POSITION_COUNT)));

    group.bench_function("id_to_position_full_sweep", |b| {
        b.iter(|| {
            for id in 0..i64::from(POSITION_COUNT) {
                let rank = id_to_position(black_box(id)).expect("id should decode");
                black_box(rank);
            }
        });
    });

    group.bench_function("position_to_id_full_sweep", |b| {
        b.iter(|| {
            for text in &piece_strings {
                let id = position_to_id(black_box(text)).expect("rank should encode");
                black_box(id.value());
            }
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let classical = id_to_position(518).expect("518 should decode");
    assert_eq!(generate_fen(&classical), CLASSICAL_START_FEN);

    let mut group = c.benchmark_group("render");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(sample_size());

    group.bench_function("classical_merida", |b| {
        b.iter(|| {
            let board = render_board(black_box(CLASSICAL_START_FEN), "merida", false)
                .expect("classical board should render");
            black_box(board)
        });
    });

    group.bench_function("classical_merida_flipped", |b| {
        b.iter(|| {
            let board = render_board(black_box(CLASSICAL_START_FEN), "merida", true)
                .expect("classical board should render");
            black_box(board)
        });
    });

    group.finish();
}

criterion_group!(codec_benches, bench_codec, bench_render);
criterion_main!(codec_benches);

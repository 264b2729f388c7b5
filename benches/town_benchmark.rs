//! Benchmarks for town visits and surveys.
//!
//! Covers the encounter resolvers, a single scripted visit and a small survey.

#![allow(missing_docs)]

use std::hint::black_box;

use boomtown::game::{BrawlRolls, TreasureFlags, resolve_brawl, resolve_dig, resolve_hunt};
use boomtown::survey::{SurveyConfig, run_survey, run_town};
use boomtown::{Adventurer, GameConfig, Outfitter, SeededRolls, TownSession};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_resolvers(c: &mut Criterion) {
    let rolls = BrawlRolls {
        trouble: 0.9,
        purse: 0.4,
        victory: 0.2,
    };

    c.bench_function("resolve_brawl", |b| {
        b.iter(|| black_box(resolve_brawl(black_box(true), black_box(false), black_box(rolls))));
    });

    c.bench_function("resolve_dig", |b| {
        b.iter(|| black_box(resolve_dig(black_box(0.2), black_box(0.7))));
    });

    c.bench_function("resolve_hunt", |b| {
        b.iter(|| black_box(resolve_hunt(black_box(0.6), black_box(TreasureFlags::default()))));
    });
}

fn bench_visit(c: &mut Criterion) {
    c.bench_function("seeded_visit", |b| {
        b.iter(|| {
            let mut town: TownSession<Adventurer, Outfitter, SeededRolls> =
                TownSession::new(Outfitter::default(), 0.5, false, SeededRolls::new(black_box(42)))
                    .unwrap_or_else(|e| panic!("bad town: {e}"));
            let _ = town.arrive(Adventurer::new("Mara", 10));
            for _ in 0..10 {
                let _ = black_box(town.look_for_trouble());
                let _ = black_box(town.dig());
                let _ = black_box(town.hunt());
            }
            black_box(town.leave(false))
        });
    });

    let config = SurveyConfig::default();
    c.bench_function("run_town", |b| {
        b.iter(|| black_box(run_town(black_box(7), black_box(&config))));
    });
}

fn bench_survey(c: &mut Criterion) {
    let config = SurveyConfig {
        towns: 1_000,
        visits: 5,
        base_seed: 42,
        game: GameConfig::default(),
    };

    c.bench_function("survey_1000_towns", |b| {
        b.iter(|| black_box(run_survey(black_box(&config))));
    });
}

criterion_group!(benches, bench_resolvers, bench_visit, bench_survey);
criterion_main!(benches);

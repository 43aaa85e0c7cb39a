// Criterion benchmarks for Vigil Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vigil_algo::core::{calculate_suitability_score, filter_history, summarize_monitor, Ranker};
use vigil_algo::models::{AttentionLevel, Driver, ExperienceLevel, HistoryQuery};
use vigil_algo::Fleet;

fn create_driver(id: usize) -> Driver {
    let experience_level = match id % 3 {
        0 => ExperienceLevel::Novice,
        1 => ExperienceLevel::Intermediate,
        _ => ExperienceLevel::Expert,
    };
    let attention_level = match id % 4 {
        0 => AttentionLevel::Critical,
        1 => AttentionLevel::Moderate,
        _ => AttentionLevel::Optimal,
    };

    Driver {
        id: format!("d{}", id),
        name: format!("Driver {}", id),
        image: String::new(),
        attention_level,
        attention_score: 40.0 + (id % 60) as f64,
        fatigue_level: (id * 7 % 90) as f64,
        alertness_data: vec![],
        last_update: String::new(),
        license_number: format!("A-{:08}", id),
        vehicle_type: "camión de carga".to_string(),
        total_trips: 100 + id as u32,
        experience_level,
        years_experience: (id % 15) as u32,
        last_trip_date: "2024-01-07".to_string(),
        safety_score: 80.0,
        current_route: Some(format!("Ruta {}", id)),
        estimated_distance: Some(100.0),
        is_on_duty: id % 5 != 0,
        shift_start_time: None,
        hours_on_duty: Some((id % 11) as f64),
    }
}

fn bench_scoring(c: &mut Criterion) {
    let driver = create_driver(7);

    c.bench_function("calculate_suitability_score", |b| {
        b.iter(|| calculate_suitability_score(black_box(&driver), black_box(350.0)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::default();

    let mut group = c.benchmark_group("ranking");

    for driver_count in [10, 50, 100, 500, 1000].iter() {
        let drivers: Vec<Driver> = (0..*driver_count).map(create_driver).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", driver_count),
            driver_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&drivers), black_box(120.0), black_box(20)));
            },
        );
    }

    group.finish();
}

fn bench_dashboard_views(c: &mut Criterion) {
    let fleet = match Fleet::builtin() {
        Ok(fleet) => fleet,
        Err(e) => panic!("bundled dataset should parse: {}", e),
    };
    let query = HistoryQuery {
        search: Some("a-".to_string()),
        ..Default::default()
    };

    c.bench_function("monitor_summary_bundled_fleet", |b| {
        b.iter(|| summarize_monitor(black_box(&fleet.drivers)));
    });

    c.bench_function("history_filter_bundled_fleet", |b| {
        b.iter(|| filter_history(black_box(&fleet.history), black_box(&query)).len());
    });
}

criterion_group!(benches, bench_scoring, bench_ranking, bench_dashboard_views);

criterion_main!(benches);

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use janma_time::IshtaKala;
use janma_vedic_base::{
    D9, GrahaLongitudes, GulikaKhandas, RectificationFilter, divisional_chart, madhya_pranapada,
    nisheka, running_period, special_lagnas, sphuta_pranapada,
};

fn pranapada_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pranapada");
    group.bench_function("madhya", |b| {
        b.iter(|| madhya_pranapada(black_box(13), black_box(7)))
    });
    group.bench_function("sphuta", |b| {
        b.iter(|| sphuta_pranapada(black_box(787.0), black_box(134.0)))
    });
    group.finish();
}

fn candidate_math_bench(c: &mut Criterion) {
    let ik = IshtaKala::from_seconds(18_888.0);
    let filter = RectificationFilter::default();

    let mut group = c.benchmark_group("candidate_math");
    group.bench_function("special_lagnas", |b| {
        b.iter(|| special_lagnas(black_box(&ik), black_box(134.0), black_box(100.0)))
    });
    group.bench_function("nisheka", |b| {
        b.iter(|| nisheka(black_box(250.0), black_box(40.0), black_box(100.0)))
    });
    group.bench_function("filter_evaluate", |b| {
        b.iter(|| {
            filter.evaluate(
                black_box(135.0),
                black_box(134.2),
                black_box(300.0),
                black_box(20.0),
            )
        })
    });
    group.finish();
}

fn dasha_varga_bench(c: &mut Criterion) {
    let grahas =
        GrahaLongitudes::from_eight([10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0]);

    let mut group = c.benchmark_group("dasha_varga");
    group.bench_function("running_period_40y", |b| {
        b.iter(|| {
            running_period(
                black_box(2_451_545.0),
                black_box(2_451_545.0 + 40.0 * 365.25),
                black_box(40.0),
            )
        })
    });
    group.bench_function("d9_chart", |b| {
        b.iter(|| divisional_chart(black_box(100.0), black_box(&grahas), D9))
    });
    group.finish();
}

fn gulika_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
    let next = date.succ_opt().unwrap();
    let at = |d: NaiveDate, h, m| d.and_hms_opt(h, m, 0).unwrap();
    c.bench_function("gulika_khandas", |b| {
        b.iter(|| {
            GulikaKhandas::for_date(
                black_box(date),
                at(date, 6, 12),
                at(date, 18, 20),
                at(next, 6, 11),
            )
        })
    });
}

criterion_group!(
    benches,
    pranapada_bench,
    candidate_math_bench,
    dasha_varga_bench,
    gulika_bench
);
criterion_main!(benches);

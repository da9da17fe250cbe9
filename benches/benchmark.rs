//! Benchmarks for card_validation performance testing.
//!
//! Run with: cargo bench

use card_validation::{
    issue_date::{validate_issue_date_at, MonthYear},
    payment_system_type, validate_cvc, validate_number, validate_owner,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_13: &str = "4321432143211";
const MASTERCARD: &str = "5555555555554444";
const MASTERCARD_2SERIES: &str = "2223000048400011";
const AMEX: &str = "371449635398431";

/// Benchmark number validation per network shape
fn bench_number_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_validation");

    group.bench_function("visa_16", |b| {
        b.iter(|| validate_number(black_box(Some(VISA_16))))
    });

    group.bench_function("visa_13", |b| {
        b.iter(|| validate_number(black_box(Some(VISA_13))))
    });

    group.bench_function("mastercard", |b| {
        b.iter(|| validate_number(black_box(Some(MASTERCARD))))
    });

    group.bench_function("mastercard_2series", |b| {
        b.iter(|| validate_number(black_box(Some(MASTERCARD_2SERIES))))
    });

    group.bench_function("amex_15", |b| {
        b.iter(|| validate_number(black_box(Some(AMEX))))
    });

    group.bench_function("reject_wrong_prefix", |b| {
        b.iter(|| validate_number(black_box(Some("1111111111111111"))))
    });

    group.finish();
}

/// Benchmark classification
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("visa", |b| {
        b.iter(|| payment_system_type(black_box(VISA_16)))
    });

    group.bench_function("amex", |b| b.iter(|| payment_system_type(black_box(AMEX))));

    group.finish();
}

/// Benchmark the remaining field validators
fn bench_field_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validators");
    let now = MonthYear::new(6, 2025).expect("valid month");

    group.bench_function("owner_three_words", |b| {
        b.iter(|| validate_owner(black_box(Some("Will Smith Second"))))
    });

    group.bench_function("cvc", |b| b.iter(|| validate_cvc(black_box("123"))));

    group.bench_function("issue_date", |b| {
        b.iter(|| validate_issue_date_at(black_box(Some("06/2025")), now))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_number_validation,
    bench_classification,
    bench_field_validators
);
criterion_main!(benches);

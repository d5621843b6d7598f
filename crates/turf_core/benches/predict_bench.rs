use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turf_core::analyzer::{FingerprintTurfAnalyzer, TurfImageAnalyzer};
use turf_core::models::{
    EnvironmentalConditions, Evenness, MoistureLevel, Precipitation, SurfaceQuality,
    TurfConditions,
};
use turf_core::{predict_strategy_json, StrategyPredictor};

fn bench_predict(c: &mut Criterion) {
    let predictor = StrategyPredictor::default();
    let env = EnvironmentalConditions {
        temperature: Some(31.0),
        humidity: Some(85.0),
        wind_speed: Some(22.0),
        precipitation: Some(Precipitation::Drizzle),
        ..Default::default()
    };
    let turf = TurfConditions {
        moisture_level: Some(MoistureLevel::Wet),
        surface_quality: Some(SurfaceQuality::Fair),
        evenness: Some(Evenness::VeryUneven),
        traction_rating: Some(4),
        ..Default::default()
    };

    c.bench_function("predict", |b| {
        b.iter(|| predictor.predict(black_box(&env), black_box(&turf)))
    });
    c.bench_function("predict_traced", |b| {
        b.iter(|| predictor.predict_traced(black_box(&env), black_box(&turf)))
    });
}

fn bench_json(c: &mut Criterion) {
    let request = r#"{"environmental":{"temperature":18,"windSpeed":12},"turf":{"moistureLevel":"Dry","ballSpeedRating":8}}"#;
    c.bench_function("predict_strategy_json", |b| {
        b.iter(|| predict_strategy_json(black_box(request)))
    });
}

fn bench_detect(c: &mut Criterion) {
    let image = vec![0x5au8; 64 * 1024];
    c.bench_function("fingerprint_analyze_64k", |b| {
        b.iter(|| FingerprintTurfAnalyzer.analyze(black_box(&image)))
    });
}

criterion_group!(benches, bench_predict, bench_json, bench_detect);
criterion_main!(benches);

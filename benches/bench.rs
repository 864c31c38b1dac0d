use cloudwatch_embedded_logger::{Dimensions, JsonLogger, Logger, Metrics, Unit};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

fn criterion_benchmark(c: &mut Criterion) {
    let logger = cloudwatch_embedded_logger::Builder::new()
        .default_namespace("MyApplication")
        .with_dimension("Function", "My_Function_Name")
        .extend(JsonLogger::new(std::io::sink()));

    let metrics = Metrics::new()
        .with("four", 1.0)
        .with("score", (1, Unit::Count))
        .with("andseven", (1.5, Unit::Milliseconds))
        .with("years", 1);

    c.bench_function("build", |b| {
        let dimensions = Dimensions::new().with("Method", "Default");
        b.iter(|| cloudwatch_embedded_logger::emf::build(&metrics, &dimensions, "MyApplication").to_fields())
    });

    c.bench_function("log", |b| {
        b.iter(|| {
            logger
                .metric(metrics.clone())
                .dimensions([("Method", "Default")])
                .info((json!({"RequestId": "ABC123"}), "request"))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

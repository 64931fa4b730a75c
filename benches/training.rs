use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use titanic_survival::{
    FittedNormalizer, NormalizationMode, Passenger, Port, Predictor, Trainer, WeightVector,
};

const TITLES: [&str; 4] = ["Mr.", "Mrs.", "Miss.", "Master."];

/// Deterministic synthetic passenger list of roughly Titanic proportions.
fn synthetic_passengers(n: usize) -> Vec<Passenger> {
    (0..n)
        .map(|i| {
            let pclass = (i % 3) as u32 + 1;
            let female = i % 5 < 2;
            Passenger {
                passenger_id: i as u32 + 1,
                survived: Some(female || (pclass == 1 && i % 4 == 0)),
                pclass,
                name: format!("Passenger {}, {} Test", i, TITLES[i % TITLES.len()]),
                sex: if female { "female" } else { "male" }.to_string(),
                age: (i % 70) as f64 + 0.5,
                sib_sp: (i % 4) as u32,
                parch: (i % 3) as u32,
                ticket: format!("T{}", i),
                fare: 7.25 + (i % 50) as f64 * (4 - pclass) as f64,
                cabin: if pclass == 1 { format!("C{}", i % 100) } else { String::new() },
                embarked: match i % 7 {
                    0 => Port::Cherbourg,
                    1 => Port::Queenstown,
                    _ => Port::Southampton,
                },
            }
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let passengers = synthetic_passengers(891);

    for mode in [NormalizationMode::PerRow, NormalizationMode::Standard] {
        c.bench_with_input(
            BenchmarkId::new("fit_891_rows_200_iterations", mode),
            &mode,
            |b, &mode| {
                let trainer = Trainer::logistic(0.01)
                    .max_iterations(200)
                    .normalization(mode)
                    .verbose(false)
                    .build();

                b.iter(|| trainer.fit(black_box(&passengers)).expect("fit failed"));
            },
        );
    }
}

fn bench_predict(c: &mut Criterion) {
    let passengers = synthetic_passengers(418);
    let weights = WeightVector::new([0.1, -0.8, 2.5, -0.02, -0.3, -0.1, 0.01, 0.2, 0.6, 0.1]);
    let predictor = Predictor::new(weights, FittedNormalizer::per_row());

    c.bench_function("predict_batch_418_rows", |b| {
        b.iter(|| predictor.predict_batch(black_box(&passengers)))
    });
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);

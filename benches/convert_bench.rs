use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordy::{DEU, ENG, HIN, RUS, Wordy, ZHO};

fn bench_convert(c: &mut Criterion) {
    let langs = [
        ("en", ENG),
        ("de", DEU),
        ("ru", RUS),
        ("zh", ZHO),
        ("hi", HIN),
    ];
    for (name, lang) in langs {
        let w = Wordy::builder().lang(lang).build().unwrap();
        c.bench_function(&format!("{name}_nine_digits"), |b| {
            b.iter(|| w.convert(black_box(987_654_321u64)).unwrap())
        });
    }

    let en = Wordy::builder().lang(ENG).build().unwrap();
    let big = format!("9{}", "87654321".repeat(7));
    c.bench_function("en_fifty_seven_digits", |b| {
        b.iter(|| en.convert(black_box(big.as_str())).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use label_jump::{LabelAlphabet, PrefixTable, Span, assign_labels};

fn viewport_spans(line_count: usize) -> Vec<Span> {
    let mut text = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        text.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (label-jump benchmark line)\n"
        ));
    }
    vec![Span::new(0, text)]
}

fn bench_prefix_table(c: &mut Criterion) {
    let spans = viewport_spans(80);
    c.bench_function("prefix_table/80_lines/needle_3", |b| {
        b.iter(|| {
            let table = PrefixTable::build(black_box(&spans), black_box("the"));
            black_box(table.full_matches().len());
        })
    });
}

fn bench_keystroke(c: &mut Criterion) {
    let spans = viewport_spans(80);
    let alphabet = LabelAlphabet::default();
    c.bench_function("keystroke/80_lines/progressive_needle", |b| {
        b.iter(|| {
            for needle in ["j", "ju", "jum", "jump"] {
                let table = PrefixTable::build(&spans, black_box(needle));
                let labeling = assign_labels(&table, &alphabet);
                black_box(labeling.labeled.len());
            }
        })
    });
}

criterion_group!(benches, bench_prefix_table, bench_keystroke);
criterion_main!(benches);

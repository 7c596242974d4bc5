//! 表格生成与渲染性能基准测试
//!
//! 测试覆盖：
//! - 不同规模下的表格生成
//! - 默认规模的页面渲染
//! - 列重排与选区文本提取

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tableex_server::generators::generate;
use tableex_server::models::{BoxSelection, CellPos};
use tableex_server::renderer::TableRenderer;
use tableex_shared::config::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// 表格生成基准（不同行数）
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for rows in [16usize, 256, 4096].iter() {
        group.throughput(Throughput::Elements((*rows * DEFAULT_COLUMNS) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), rows, |b, rows| {
            b.iter(|| black_box(generate(black_box(*rows), black_box(DEFAULT_COLUMNS))))
        });
    }

    group.finish();
}

/// 默认规模页面渲染基准
fn bench_render_index(c: &mut Criterion) {
    let renderer = TableRenderer::new().unwrap();
    let table = generate(DEFAULT_ROWS, DEFAULT_COLUMNS);

    c.bench_function("render_index_default", |b| {
        b.iter(|| {
            let html = renderer.render_index(black_box(&table)).unwrap();
            black_box(html)
        })
    });
}

/// 表格操作基准
fn bench_operations(c: &mut Criterion) {
    let table = generate(DEFAULT_ROWS, DEFAULT_COLUMNS);
    let selection = BoxSelection::new(
        CellPos::new(0, 0),
        CellPos::new(DEFAULT_ROWS - 1, DEFAULT_COLUMNS - 1),
    );

    c.bench_function("move_column_default", |b| {
        b.iter(|| black_box(table.move_column(black_box(0), black_box(DEFAULT_COLUMNS - 1))))
    });

    c.bench_function("selection_text_full", |b| {
        b.iter(|| black_box(table.selection_text(black_box(&selection))))
    });
}

// 配置 criterion
criterion_group!(benches, bench_generate, bench_render_index, bench_operations);

criterion_main!(benches);

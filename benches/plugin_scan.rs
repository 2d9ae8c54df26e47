//! Plugin Scan Benchmarks
//!
//! Run with: cargo bench --bench plugin_scan

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dev::plugins::PluginRegistry;
use tempfile::TempDir;

/// Create `dirs` plugin directories holding `per_dir` files each.
fn plugin_tree(dirs: usize, per_dir: usize) -> (TempDir, Vec<PathBuf>) {
    let root = TempDir::new().unwrap();
    let mut paths = Vec::with_capacity(dirs);
    for d in 0..dirs {
        let dir = root.path().join(format!("plugins{}", d));
        fs::create_dir(&dir).unwrap();
        for p in 0..per_dir {
            fs::write(dir.join(format!("plugin{}", p)), "").unwrap();
        }
        paths.push(dir);
    }
    (root, paths)
}

fn benchmark_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for per_dir in [10, 100, 1000].iter() {
        let (_root, dirs) = plugin_tree(3, *per_dir);
        group.throughput(Throughput::Elements((*per_dir * 3) as u64));
        group.bench_with_input(format!("{}_files_x3_dirs", per_dir), &dirs, |b, dirs| {
            b.iter(|| black_box(PluginRegistry::new(dirs).list()));
        });
    }

    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let (_root, dirs) = plugin_tree(3, 100);
    let registry = PluginRegistry::new(&dirs);

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit_first_dir", |b| {
        b.iter(|| black_box(registry.resolve(black_box("plugin50"))));
    });

    group.bench_function("miss_all_dirs", |b| {
        b.iter(|| black_box(registry.resolve(black_box("missing"))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_list, benchmark_resolve);
criterion_main!(benches);

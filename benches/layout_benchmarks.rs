//! 布局与命名空间性能基准测试
//!
//! 测试类型注册、结构体编解码、命名空间加载和类型化查找的性能

use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sdl2_link::abi::{TypeRegistry, Value};
use sdl2_link::loader::{NativeBackend, NativeLibrary, SymbolAddress};
use sdl2_link::{Loader, SubLibrary};

extern "C" fn noop() {}

/// 所有符号都解析到同一个空函数
#[derive(Debug)]
struct NoopLibrary(PathBuf);

impl NativeLibrary for NoopLibrary {
    fn path(&self) -> &Path {
        &self.0
    }

    fn symbol(&self, _name: &str) -> Result<SymbolAddress, String> {
        SymbolAddress::new(noop as extern "C" fn() as *const c_void).ok_or_else(|| "null".to_string())
    }
}

#[derive(Debug)]
struct NoopBackend;

impl NativeBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn NativeLibrary>, String> {
        Ok(Arc::new(NoopLibrary(path.to_path_buf())))
    }
}

fn bench_type_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_registration");

    for library in SubLibrary::ALL {
        group.bench_with_input(BenchmarkId::new("register", library.name()), &library, |b, library| {
            b.iter(|| {
                let mut registry = TypeRegistry::new();
                library.register_types(&mut registry).unwrap();
                black_box(registry.len())
            });
        });
    }

    group.finish();
}

fn bench_marshaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshaling");

    let mut registry = TypeRegistry::new();
    SubLibrary::Core.register_types(&mut registry).unwrap();

    let rect = Value::record([
        ("x", Value::Int(10)),
        ("y", Value::Int(20)),
        ("w", Value::Int(640)),
        ("h", Value::Int(480)),
    ]);
    let rect_bytes = registry.encode("SDL_Rect", &rect).unwrap();
    let event_bytes = vec![0u8; registry.layout("SDL_Event").unwrap().size];

    group.bench_function("encode_rect", |b| {
        b.iter(|| black_box(registry.encode("SDL_Rect", black_box(&rect)).unwrap()));
    });

    group.bench_function("decode_rect", |b| {
        b.iter(|| black_box(registry.decode("SDL_Rect", black_box(&rect_bytes)).unwrap()));
    });

    group.bench_function("decode_event", |b| {
        b.iter(|| black_box(registry.decode("SDL_Event", black_box(&event_bytes)).unwrap()));
    });

    group.finish();
}

fn bench_namespace(c: &mut Criterion) {
    let mut group = c.benchmark_group("namespace");

    let loader = Loader::new()
        .with_backend(NoopBackend)
        .with_image()
        .with_ttf()
        .with_mixer()
        .with_joystick();

    group.bench_function("load_all", |b| {
        b.iter(|| black_box(loader.load().unwrap().len()));
    });

    let ns = loader.load().unwrap();

    group.bench_function("constant_lookup", |b| {
        b.iter(|| black_box(ns.constant(black_box("SDL_INIT_VIDEO"))));
    });

    group.bench_function("typed_function_lookup", |b| {
        b.iter(|| {
            black_box(
                ns.function::<unsafe extern "C" fn(*mut c_void, i32, i32, u32, u32) -> i32>(black_box(
                    "SDL_PeepEvents",
                ))
                .is_ok(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_type_registration, bench_marshaling, bench_namespace);
criterion_main!(benches);

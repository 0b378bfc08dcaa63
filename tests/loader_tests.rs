//! 加载器集成测试（模拟后端，不依赖系统中的 SDL2）

mod common;

use std::sync::Arc;
use std::thread;

use common::MockBackend;
use sdl2_link::config::{FilterConfig, FilterMode};
use sdl2_link::loader::library_file_name;
use sdl2_link::{Entry, FunctionFilter, LinkConfig, LinkError, Loader, SubLibrary};

#[test]
fn test_core_namespace_contents() {
    let ns = Loader::new().with_backend(MockBackend::new()).load().unwrap();

    // 常量
    assert_eq!(ns.constant("SDL_INIT_VIDEO"), Some(0x20));
    assert_eq!(ns.constant("SDLK_ESCAPE"), Some(27));

    // 类型布局
    assert_eq!(ns.type_layout("SDL_Rect").map(|l| l.size), Some(16));
    assert_eq!(ns.type_layout("SDL_Event").map(|l| l.size), Some(56));

    // 函数
    assert!(ns.bound_function("SDL_Init").is_ok());
    assert_eq!(ns.libraries(), &[SubLibrary::Core]);
    assert!(!ns.contains("TTF_Init"));

    let stats = ns.stats();
    assert!(stats.constants > 0 && stats.types > 0 && stats.functions > 0);
    assert_eq!(stats.constants + stats.types + stats.functions, ns.len());
}

#[test]
fn test_repeated_loads_are_independent() {
    let backend = MockBackend::new();
    let loader = Loader::new().with_backend(backend.clone()).with_ttf();

    let first = loader.load().unwrap();
    let second = loader.load().unwrap();
    assert_eq!(first.names(), second.names());

    // 每次加载都重新打开二进制
    assert_eq!(backend.opened().len(), 4);
    drop(first);
    assert!(second.contains("TTF_OpenFont"));
}

#[test]
fn test_all_sub_libraries() {
    let ns = Loader::new()
        .with_backend(MockBackend::new())
        .with_image()
        .with_ttf()
        .with_mixer()
        .with_joystick()
        .load()
        .unwrap();

    assert_eq!(ns.libraries(), &SubLibrary::ALL);
    for name in ["IMG_Load", "TTF_OpenFont", "Mix_OpenAudio", "SDL_GameControllerOpen"] {
        assert!(ns.bound_function(name).is_ok(), "{} not bound", name);
    }
    assert_eq!(ns.constant("IMG_INIT_PNG"), Some(2));
    assert_eq!(ns.constant("MIX_CHANNELS"), Some(8));
    assert_eq!(
        ns.bound_function("SDL_JoystickOpen").unwrap().library(),
        SubLibrary::Joystick
    );
}

#[test]
fn test_joystick_opens_core_binary_once() {
    let backend = MockBackend::new();
    Loader::new()
        .with_backend(backend.clone())
        .with_joystick()
        .with_mixer()
        .load()
        .unwrap();

    let opened = backend.opened();
    assert_eq!(opened.len(), 2);
    assert_eq!(opened[0].to_string_lossy(), library_file_name("SDL2"));
    assert_eq!(opened[1].to_string_lossy(), library_file_name("SDL2_mixer"));
}

#[test]
fn test_unknown_library_name() {
    let err = Loader::new().with_library_name("SDL2_net").unwrap_err();
    match err {
        LinkError::UnknownLibrary { name, available } => {
            assert_eq!(name, "SDL2_net");
            assert!(available.contains("SDL2_mixer"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_backend() {
    let err = Loader::new().with_ttf().load().unwrap_err();
    assert!(matches!(err, LinkError::MissingBackend));
}

#[test]
fn test_missing_symbol_fails_load() {
    let backend = MockBackend::new().missing("SDL_RenderGeometry");
    let err = Loader::new().with_backend(backend).load().unwrap_err();
    match err {
        LinkError::SymbolNotFound { library, symbol, reason } => {
            assert_eq!(library, "SDL2");
            assert_eq!(symbol, "SDL_RenderGeometry");
            assert!(reason.contains("undefined symbol"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_filter_skips_missing_symbol() {
    let backend = MockBackend::new().missing("SDL_RenderGeometry");
    let ns = Loader::new()
        .with_backend(backend)
        .with_filter(FunctionFilter::exclude(["SDL_RenderGeometry"]))
        .load()
        .unwrap();

    assert!(matches!(
        ns.bound_function("SDL_RenderGeometry"),
        Err(LinkError::FunctionNotBound(_))
    ));
    assert!(ns.bound_function("SDL_RenderClear").is_ok());
}

#[test]
fn test_include_filter_keeps_constants_and_types() {
    let ns = Loader::new()
        .with_backend(MockBackend::new())
        .with_filter(FunctionFilter::include(["SDL_Init", "SDL_Quit"]))
        .load()
        .unwrap();

    assert_eq!(ns.stats().functions, 2);
    assert!(ns.constant("SDL_INIT_AUDIO").is_some());
    assert!(ns.type_layout("SDL_Surface").is_some());
}

#[test]
fn test_missing_library_names_path() {
    let backend = MockBackend::new().unopenable("/nowhere/libSDL2_ttf.so");
    let err = Loader::new()
        .with_backend(backend)
        .with_library_path(SubLibrary::Ttf, "/nowhere/libSDL2_ttf.so")
        .load()
        .unwrap_err();

    match err {
        LinkError::LibraryNotFound { library, path, .. } => {
            assert_eq!(library, "SDL2_ttf");
            assert_eq!(path, "/nowhere/libSDL2_ttf.so");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_by_value_aggregates_require_capability() {
    let backend = MockBackend::new().without_by_value();

    // 核心库没有按值传递结构体的函数
    assert!(Loader::new().with_backend(backend.clone()).load().is_ok());

    let err = Loader::new().with_backend(backend.clone()).with_ttf().load().unwrap_err();
    match err {
        LinkError::UnsupportedByBackend { backend: name, symbol } => {
            assert_eq!(name, "mock");
            assert!(symbol.starts_with("TTF_Render"), "{}", symbol);
        }
        other => panic!("unexpected error: {other}"),
    }

    // 在任何打开动作之前失败
    let before = backend.opened().len();
    assert!(Loader::new().with_backend(backend.clone()).with_joystick().load().is_err());
    assert_eq!(backend.opened().len(), before);

    // 过滤掉按值传递的函数后可以加载
    let ns = Loader::new()
        .with_backend(backend)
        .with_ttf()
        .with_filter(FunctionFilter::include(["TTF_Init", "TTF_OpenFont", "SDL_Init"]))
        .load()
        .unwrap();
    assert!(ns.bound_function("TTF_OpenFont").is_ok());
}

#[test]
fn test_loader_from_config() {
    let mut config = LinkConfig::from_toml_str(
        r#"
        backend = "none"
        extensions = ["SDL2_image", "SDL2_mixer"]
        search_dir = "/opt/sdl"

        [filter]
        mode = "exclude"
        symbols = ["Mix_Init"]
        "#,
    )
    .unwrap();

    let loader = Loader::from_config(&config).unwrap();
    assert_eq!(
        loader.libraries(),
        vec![SubLibrary::Core, SubLibrary::Image, SubLibrary::Mixer]
    );
    assert!(matches!(loader.load(), Err(LinkError::MissingBackend)));

    let backend = MockBackend::new();
    let ns = loader.with_backend(backend.clone()).load().unwrap();
    assert!(ns.bound_function("Mix_Init").is_err());
    assert!(ns.bound_function("Mix_Quit").is_ok());
    assert!(backend
        .opened()
        .iter()
        .all(|path| path.starts_with("/opt/sdl")));

    config.filter = Some(FilterConfig {
        mode: FilterMode::Include,
        symbols: vec!["SDL_Init".to_string()],
    });
    config.extensions.push("SDL2_net".to_string());
    assert!(Loader::from_config(&config).is_err());
}

#[test]
fn test_namespace_shared_across_threads() {
    let ns = Arc::new(Loader::new().with_backend(MockBackend::new()).load().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ns = Arc::clone(&ns);
            thread::spawn(move || {
                ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init").is_ok()
                    && ns.constant("SDL_QUIT") == Some(0x100)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_types_registered_with_their_library() {
    let core = Loader::new().with_backend(MockBackend::new()).load().unwrap();
    assert!(core.type_layout("SDL_GameControllerButtonBind").is_none());
    assert_eq!(core.stats().types, core.registry().len());

    let ns = Loader::new()
        .with_backend(MockBackend::new())
        .with_joystick()
        .with_mixer()
        .load()
        .unwrap();
    assert!(matches!(ns.get("SDL_GameControllerButtonBind"), Some(Entry::Type(_))));
    assert!(matches!(ns.get("Mix_Chunk"), Some(Entry::Type(_))));
    assert_eq!(ns.stats().types, ns.registry().len());

    // 核心库的条目在各子库之前登记
    assert_eq!(ns.libraries(), &[SubLibrary::Core, SubLibrary::Mixer, SubLibrary::Joystick]);
}

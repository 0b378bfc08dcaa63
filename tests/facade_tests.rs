//! 便捷层集成测试：派生调用、作用域句柄、结构体读写

mod common;

use std::ffi::c_void;
use std::ptr;

use common::{set_quit_pending, take_calls, MockBackend, RW_HANDLE};
use sdl2_link::abi::Value;
use sdl2_link::sys::{Mix_Chunk, SDL_Rect, SDL_version};
use sdl2_link::{FunctionFilter, LinkError, Loader, Namespace};

fn load_all() -> Namespace {
    Loader::new()
        .with_backend(MockBackend::new())
        .with_mixer()
        .with_joystick()
        .load()
        .unwrap()
}

#[test]
fn test_quit_requested_pumps_then_peeks() {
    let ns = load_all();
    take_calls();

    assert!(!unsafe { ns.quit_requested() }.unwrap());
    assert_eq!(
        take_calls(),
        vec!["SDL_PumpEvents", "SDL_PeepEvents(0,1,0x100,0x100)"]
    );

    set_quit_pending(true);
    assert!(unsafe { ns.quit_requested() }.unwrap());
    set_quit_pending(false);
}

#[test]
fn test_load_wav_opens_read_only_stream() {
    let ns = load_all();
    take_calls();

    let spec = unsafe { ns.load_wav("boom.wav", ptr::null_mut(), ptr::null_mut(), ptr::null_mut()) }.unwrap();
    assert!(spec.is_null());
    assert_eq!(
        take_calls(),
        vec![
            "SDL_RWFromFile(boom.wav,rb)".to_string(),
            format!("SDL_LoadWAV_RW({:#x},1)", RW_HANDLE),
        ]
    );
}

#[test]
fn test_mixer_helpers_use_unlimited_ticks() {
    let ns = load_all();

    let chunk = unsafe { ns.mix_load_wav("jump.wav") }.unwrap();
    assert_eq!(chunk as usize, RW_HANDLE);

    take_calls();
    let chunk = chunk as *mut Mix_Chunk;
    assert_eq!(unsafe { ns.mix_play_channel(-1, chunk, 2) }.unwrap(), -1);
    assert_eq!(unsafe { ns.mix_fade_in_channel(3, chunk, 0, 500) }.unwrap(), 3);
    assert_eq!(
        take_calls(),
        vec!["Mix_PlayChannelTimed(-1,2,-1)", "Mix_FadeInChannelTimed(3,0,500,-1)"]
    );
}

#[test]
fn test_blit_aliases() {
    let ns = load_all();
    take_calls();

    unsafe {
        ns.blit_surface(ptr::null_mut(), ptr::null(), ptr::null_mut(), ptr::null_mut())
            .unwrap();
        ns.blit_scaled(ptr::null_mut(), ptr::null(), ptr::null_mut(), ptr::null_mut())
            .unwrap();
    }
    assert_eq!(take_calls(), vec!["SDL_UpperBlit", "SDL_UpperBlitScaled"]);
}

#[test]
fn test_game_controller_mappings_from_file() {
    let ns = load_all();
    take_calls();

    let added = unsafe { ns.game_controller_add_mappings_from_file("gamecontrollerdb.txt") }.unwrap();
    assert_eq!(added, 3);
    assert_eq!(
        take_calls(),
        vec![
            "SDL_RWFromFile(gamecontrollerdb.txt,rb)".to_string(),
            format!("SDL_GameControllerAddMappingsFromRW({:#x},1)", RW_HANDLE),
        ]
    );
}

#[test]
fn test_helper_requires_bound_functions() {
    let ns = Loader::new()
        .with_backend(MockBackend::new())
        .with_filter(FunctionFilter::exclude(["SDL_PeepEvents"]))
        .load()
        .unwrap();

    match unsafe { ns.quit_requested() } {
        Err(LinkError::FunctionNotBound(name)) => assert_eq!(name, "SDL_PeepEvents"),
        other => panic!("unexpected result: {other:?}"),
    }

    // 混音器未加载
    assert!(unsafe { ns.mix_load_wav("a.wav") }.is_err());
}

#[test]
fn test_last_error() {
    let ns = load_all();
    assert_eq!(unsafe { ns.last_error() }.unwrap().as_deref(), Some("mock failure"));
}

#[test]
fn test_native_resource_destroys_on_drop() {
    let ns = load_all();
    take_calls();

    let raw = 0xABC0 as *mut c_void;
    {
        let window = unsafe { ns.own("SDL_CreateWindow", raw, "SDL_DestroyWindow") }.unwrap();
        assert_eq!(window.as_ptr(), raw);
        assert!(take_calls().is_empty());
    }
    assert_eq!(take_calls(), vec!["SDL_DestroyWindow(0xabc0)"]);

    let window = unsafe { ns.own("SDL_CreateWindow", raw, "SDL_DestroyWindow") }.unwrap();
    assert_eq!(window.into_raw(), raw);
    assert!(take_calls().is_empty());
}

#[test]
fn test_null_handle_reports_last_error() {
    let ns = load_all();

    let err = unsafe { ns.own::<c_void>("SDL_CreateWindow", ptr::null_mut(), "SDL_DestroyWindow") }.unwrap_err();
    match err {
        LinkError::NullHandle { call, reason } => {
            assert_eq!(call, "SDL_CreateWindow");
            assert_eq!(reason, "mock failure");
        }
        other => panic!("unexpected error: {other}"),
    }

    // 析构函数必须已绑定
    let raw = 0x10 as *mut c_void;
    assert!(matches!(
        unsafe { ns.own("SDL_CreateWindow", raw, "SDL_NoSuchDestroy") },
        Err(LinkError::FunctionNotBound(_))
    ));
}

#[test]
fn test_typed_call_through_namespace() {
    let ns = load_all();

    let get_version = ns
        .function::<unsafe extern "C" fn(*mut SDL_version)>("SDL_GetVersion")
        .unwrap();
    let mut version = SDL_version { major: 0, minor: 0, patch: 0 };
    unsafe { get_version(&mut version) };
    assert_eq!((version.major, version.minor, version.patch), (2, 0, 22));

    let err = ns
        .function::<unsafe extern "C" fn(u32) -> i32>("SDL_Quit")
        .unwrap_err();
    assert!(matches!(err, LinkError::SignatureMismatch { .. }));
}

#[test]
fn test_alloc_and_read_back() {
    let ns = load_all();

    let value = Value::record([
        ("x", Value::Int(10)),
        ("y", Value::Int(-20)),
        ("w", Value::Int(300)),
        ("h", Value::Int(400)),
    ]);
    let buffer = ns.alloc("SDL_Rect", Some(&value)).unwrap();
    assert_eq!(buffer.len(), 16);

    let rect: SDL_Rect = buffer.to_struct().unwrap();
    assert_eq!((rect.x, rect.y, rect.w, rect.h), (10, -20, 300, 400));

    let decoded = unsafe { ns.to_object("SDL_Rect", buffer.as_ptr()) }.unwrap().unwrap();
    assert_eq!(decoded.get("y").and_then(Value::as_i64), Some(-20));
    assert_eq!(decoded.get("h").and_then(Value::as_i64), Some(400));

    assert!(unsafe { ns.to_object("SDL_Rect", ptr::null()) }.unwrap().is_none());
    assert!(ns.alloc("SDL_NoSuchType", None).is_err());
}

#[test]
fn test_null_handle_wins_over_unbound_destructor() {
    let ns = Loader::new()
        .with_backend(MockBackend::new())
        .with_filter(FunctionFilter::exclude(["SDL_DestroyWindow"]))
        .load()
        .unwrap();

    let err = unsafe { ns.own::<c_void>("SDL_CreateWindow", ptr::null_mut(), "SDL_DestroyWindow") }.unwrap_err();
    match err {
        LinkError::NullHandle { call, reason } => {
            assert_eq!(call, "SDL_CreateWindow");
            assert_eq!(reason, "mock failure");
        }
        other => panic!("unexpected error: {other}"),
    }
}

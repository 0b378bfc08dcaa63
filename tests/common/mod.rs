//! 测试用模拟后端
//!
//! 把声明的符号解析为本地 `extern "C"` 函数，记录调用顺序，
//! 可以配置缺失的符号、打不开的路径以及是否支持按值传递结构体。

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sdl2_link::loader::{BackendCapabilities, NativeBackend, NativeLibrary, SymbolAddress};
use sdl2_link::sys::{SDL_AudioSpec, SDL_version};

thread_local! {
    static CALLS: RefCell<Vec<String>> = RefCell::new(Vec::new());
    static QUIT_PENDING: RefCell<bool> = RefCell::new(false);
}

pub fn take_calls() -> Vec<String> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

pub fn set_quit_pending(pending: bool) {
    QUIT_PENDING.with(|q| *q.borrow_mut() = pending);
}

fn record(call: String) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

unsafe fn text(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// 模拟 RWops 句柄
pub const RW_HANDLE: usize = 0x5D1_0000;

extern "C" fn noop() {}

extern "C" fn pump_events() {
    record("SDL_PumpEvents".to_string());
}

extern "C" fn peep_events(_events: *mut c_void, n: i32, action: i32, min: u32, max: u32) -> i32 {
    record(format!("SDL_PeepEvents({},{},{:#x},{:#x})", n, action, min, max));
    QUIT_PENDING.with(|q| i32::from(*q.borrow()))
}

unsafe extern "C" fn rw_from_file(file: *const c_char, mode: *const c_char) -> *mut c_void {
    record(format!("SDL_RWFromFile({},{})", text(file), text(mode)));
    RW_HANDLE as *mut c_void
}

extern "C" fn load_wav_rw(
    rw: *mut c_void,
    freesrc: i32,
    spec: *mut SDL_AudioSpec,
    _buf: *mut *mut u8,
    _len: *mut u32,
) -> *mut SDL_AudioSpec {
    record(format!("SDL_LoadWAV_RW({:#x},{})", rw as usize, freesrc));
    spec
}

extern "C" fn upper_blit(_: *mut c_void, _: *const c_void, _: *mut c_void, _: *mut c_void) -> i32 {
    record("SDL_UpperBlit".to_string());
    0
}

extern "C" fn upper_blit_scaled(_: *mut c_void, _: *const c_void, _: *mut c_void, _: *mut c_void) -> i32 {
    record("SDL_UpperBlitScaled".to_string());
    0
}

extern "C" fn mix_load_wav_rw(rw: *mut c_void, freesrc: i32) -> *mut c_void {
    record(format!("Mix_LoadWAV_RW({:#x},{})", rw as usize, freesrc));
    rw
}

extern "C" fn mix_play_channel_timed(channel: i32, _chunk: *mut c_void, loops: i32, ticks: i32) -> i32 {
    record(format!("Mix_PlayChannelTimed({},{},{})", channel, loops, ticks));
    channel
}

extern "C" fn mix_fade_in_channel_timed(
    channel: i32,
    _chunk: *mut c_void,
    loops: i32,
    ms: i32,
    ticks: i32,
) -> i32 {
    record(format!("Mix_FadeInChannelTimed({},{},{},{})", channel, loops, ms, ticks));
    channel
}

extern "C" fn add_mappings_from_rw(rw: *mut c_void, freesrc: i32) -> i32 {
    record(format!("SDL_GameControllerAddMappingsFromRW({:#x},{})", rw as usize, freesrc));
    3
}

extern "C" fn get_error() -> *const c_char {
    b"mock failure\0".as_ptr() as *const c_char
}

extern "C" fn destroy_window(window: *mut c_void) {
    record(format!("SDL_DestroyWindow({:#x})", window as usize));
}

unsafe extern "C" fn get_version(version: *mut SDL_version) {
    *version = SDL_version {
        major: 2,
        minor: 0,
        patch: 22,
    };
}

fn mock_address(name: &str) -> *const c_void {
    match name {
        "SDL_PumpEvents" => pump_events as extern "C" fn() as *const c_void,
        "SDL_PeepEvents" => peep_events as extern "C" fn(_, _, _, _, _) -> _ as *const c_void,
        "SDL_RWFromFile" => rw_from_file as unsafe extern "C" fn(_, _) -> _ as *const c_void,
        "SDL_LoadWAV_RW" => load_wav_rw as extern "C" fn(_, _, _, _, _) -> _ as *const c_void,
        "SDL_UpperBlit" => upper_blit as extern "C" fn(_, _, _, _) -> _ as *const c_void,
        "SDL_UpperBlitScaled" => upper_blit_scaled as extern "C" fn(_, _, _, _) -> _ as *const c_void,
        "Mix_LoadWAV_RW" => mix_load_wav_rw as extern "C" fn(_, _) -> _ as *const c_void,
        "Mix_PlayChannelTimed" => mix_play_channel_timed as extern "C" fn(_, _, _, _) -> _ as *const c_void,
        "Mix_FadeInChannelTimed" => {
            mix_fade_in_channel_timed as extern "C" fn(_, _, _, _, _) -> _ as *const c_void
        }
        "SDL_GameControllerAddMappingsFromRW" => {
            add_mappings_from_rw as extern "C" fn(_, _) -> _ as *const c_void
        }
        "SDL_GetError" => get_error as extern "C" fn() -> _ as *const c_void,
        "SDL_DestroyWindow" => destroy_window as extern "C" fn(_) as *const c_void,
        "SDL_GetVersion" => get_version as unsafe extern "C" fn(_) as *const c_void,
        _ => noop as extern "C" fn() as *const c_void,
    }
}

#[derive(Debug)]
struct MockLibrary {
    path: PathBuf,
    missing: HashSet<String>,
}

impl NativeLibrary for MockLibrary {
    fn path(&self) -> &Path {
        &self.path
    }

    fn symbol(&self, name: &str) -> Result<SymbolAddress, String> {
        if self.missing.contains(name) {
            return Err(format!("undefined symbol: {}", name));
        }
        SymbolAddress::new(mock_address(name)).ok_or_else(|| "null".to_string())
    }
}

/// 模拟后端
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub missing: HashSet<String>,
    pub unopenable: HashSet<PathBuf>,
    pub no_by_value: bool,
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(mut self, symbol: &str) -> Self {
        self.missing.insert(symbol.to_string());
        self
    }

    pub fn unopenable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unopenable.insert(path.into());
        self
    }

    pub fn without_by_value(mut self) -> Self {
        self.no_by_value = true;
        self
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl NativeBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            by_value_aggregates: !self.no_by_value,
        }
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn NativeLibrary>, String> {
        if self.unopenable.contains(path) {
            return Err("No such file or directory".to_string());
        }
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_path_buf());
        }
        Ok(Arc::new(MockLibrary {
            path: path.to_path_buf(),
            missing: self.missing.clone(),
        }))
    }
}

//! SDL2 核心结构体镜像（SDL 2.0.22）

use std::os::raw::{c_char, c_int, c_void};

use super::{SDL_BlitMap, SDL_Window};

native_struct! {
    pub struct SDL_version {
        pub major: u8,
        pub minor: u8,
        pub patch: u8,
    }
}

native_struct! {
    pub struct SDL_Point {
        pub x: i32,
        pub y: i32,
    }
}

native_struct! {
    pub struct SDL_FPoint {
        pub x: f32,
        pub y: f32,
    }
}

native_struct! {
    /// 左上角为原点的矩形
    pub struct SDL_Rect {
        pub x: i32,
        pub y: i32,
        pub w: i32,
        pub h: i32,
    }
}

native_struct! {
    pub struct SDL_FRect {
        pub x: f32,
        pub y: f32,
        pub w: f32,
        pub h: f32,
    }
}

native_struct! {
    pub struct SDL_Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }
}

native_struct! {
    pub struct SDL_Palette {
        pub ncolors: i32,
        pub colors: *mut SDL_Color,
        pub version: u32,
        pub refcount: i32,
    }
}

native_struct! {
    pub struct SDL_PixelFormat {
        pub format: u32,
        pub palette: *mut SDL_Palette,
        pub BitsPerPixel: u8,
        pub BytesPerPixel: u8,
        pub padding: [u8; 2],
        pub Rmask: u32,
        pub Gmask: u32,
        pub Bmask: u32,
        pub Amask: u32,
        pub Rloss: u8,
        pub Gloss: u8,
        pub Bloss: u8,
        pub Aloss: u8,
        pub Rshift: u8,
        pub Gshift: u8,
        pub Bshift: u8,
        pub Ashift: u8,
        pub refcount: i32,
        pub next: *mut SDL_PixelFormat,
    }
}

native_struct! {
    pub struct SDL_Surface {
        /// 只读
        pub flags: u32,
        pub format: *mut SDL_PixelFormat,
        pub w: i32,
        pub h: i32,
        pub pitch: i32,
        pub pixels: *mut c_void,
        pub userdata: *mut c_void,
        pub locked: i32,
        pub list_blitmap: *mut c_void,
        pub clip_rect: SDL_Rect,
        pub map: *mut SDL_BlitMap,
        pub refcount: i32,
    }
}

native_struct! {
    pub struct SDL_DisplayMode {
        pub format: u32,
        pub w: i32,
        pub h: i32,
        pub refresh_rate: i32,
        pub driverdata: *mut c_void,
    }
}

native_struct! {
    pub struct SDL_RendererInfo {
        pub name: *const c_char,
        pub flags: u32,
        pub num_texture_formats: u32,
        pub texture_formats: [u32; 16],
        pub max_texture_width: i32,
        pub max_texture_height: i32,
    }
}

native_struct! {
    pub struct SDL_Vertex {
        pub position: SDL_FPoint,
        pub color: SDL_Color,
        pub tex_coord: SDL_FPoint,
    }
}

native_struct! {
    pub struct SDL_Finger {
        pub id: i64,
        pub x: f32,
        pub y: f32,
        pub pressure: f32,
    }
}

pub type SDL_AudioCallback = Option<unsafe extern "C" fn(*mut c_void, *mut u8, c_int)>;

native_struct! {
    pub struct SDL_AudioSpec {
        pub freq: i32,
        pub format: u16,
        pub channels: u8,
        pub silence: u8,
        pub samples: u16,
        pub padding: u16,
        pub size: u32,
        pub callback: SDL_AudioCallback,
        pub userdata: *mut c_void,
    }
}

pub type SDL_AudioFilter = Option<unsafe extern "C" fn(*mut SDL_AudioCVT, u16)>;

native_struct! {
    /// GCC 构建的 SDL 以 `packed` 声明此结构体
    pub packed struct SDL_AudioCVT {
        pub needed: i32,
        pub src_format: u16,
        pub dst_format: u16,
        pub rate_incr: f64,
        pub buf: *mut u8,
        pub len: i32,
        pub len_cvt: i32,
        pub len_mult: i32,
        pub len_ratio: f64,
        pub filters: [SDL_AudioFilter; 10],
        pub filter_index: i32,
    }
}

native_struct! {
    pub struct SDL_MessageBoxButtonData {
        pub flags: u32,
        pub buttonid: i32,
        pub text: *const c_char,
    }
}

native_struct! {
    pub struct SDL_MessageBoxColor {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }
}

native_struct! {
    pub struct SDL_MessageBoxColorScheme {
        pub colors: [SDL_MessageBoxColor; 5],
    }
}

native_struct! {
    pub struct SDL_MessageBoxData {
        pub flags: u32,
        pub window: *mut SDL_Window,
        pub title: *const c_char,
        pub message: *const c_char,
        pub numbuttons: i32,
        pub buttons: *const SDL_MessageBoxButtonData,
        pub colorScheme: *const SDL_MessageBoxColorScheme,
    }
}

native_union! {
    pub union SDL_WindowShapeParams {
        pub binarizationCutoff: u8,
        pub colorKey: SDL_Color,
    }
}

native_struct! {
    pub struct SDL_WindowShapeMode {
        pub mode: i32,
        pub parameters: SDL_WindowShapeParams,
    }
}

// ============================================================================
// SDL_RWops
// ============================================================================

pub type SDL_RWsizeFn = Option<unsafe extern "C" fn(*mut SDL_RWops) -> i64>;
pub type SDL_RWseekFn = Option<unsafe extern "C" fn(*mut SDL_RWops, i64, c_int) -> i64>;
pub type SDL_RWreadFn = Option<unsafe extern "C" fn(*mut SDL_RWops, *mut c_void, usize, usize) -> usize>;
pub type SDL_RWwriteFn =
    Option<unsafe extern "C" fn(*mut SDL_RWops, *const c_void, usize, usize) -> usize>;
pub type SDL_RWcloseFn = Option<unsafe extern "C" fn(*mut SDL_RWops) -> c_int>;

native_struct! {
    pub struct SDL_RWopsStdio {
        pub autoclose: i32,
        pub fp: *mut c_void,
    }
}

native_struct! {
    pub struct SDL_RWopsMem {
        pub base: *mut u8,
        pub here: *mut u8,
        pub stop: *mut u8,
    }
}

native_struct! {
    pub struct SDL_RWopsUnknown {
        pub data1: *mut c_void,
        pub data2: *mut c_void,
    }
}

#[cfg(windows)]
native_struct! {
    pub struct SDL_RWopsWindowsBuffer {
        pub data: *mut c_void,
        pub size: usize,
        pub left: usize,
    }
}

#[cfg(windows)]
native_struct! {
    pub struct SDL_RWopsWindowsIO {
        pub append: i32,
        pub h: *mut c_void,
        pub buffer: SDL_RWopsWindowsBuffer,
    }
}

#[cfg(windows)]
native_union! {
    pub union SDL_RWopsHidden {
        pub windowsio: SDL_RWopsWindowsIO,
        pub stdio: SDL_RWopsStdio,
        pub mem: SDL_RWopsMem,
        pub unknown: SDL_RWopsUnknown,
    }
}

#[cfg(not(windows))]
native_union! {
    pub union SDL_RWopsHidden {
        pub stdio: SDL_RWopsStdio,
        pub mem: SDL_RWopsMem,
        pub unknown: SDL_RWopsUnknown,
    }
}

native_struct! {
    /// 读写流，回调由创建它的 `SDL_RWFrom*` 填写
    pub struct SDL_RWops {
        pub size: SDL_RWsizeFn,
        pub seek: SDL_RWseekFn,
        pub read: SDL_RWreadFn,
        pub write: SDL_RWwriteFn,
        pub close: SDL_RWcloseFn,
        pub r#type: u32,
        pub hidden: SDL_RWopsHidden,
    }
}

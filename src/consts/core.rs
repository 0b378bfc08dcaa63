//! SDL2 核心常量（SDL 2.0.22）

// ============================================================================
// 头文件宏
// ============================================================================

pub const fn SDL_VERSIONNUM(major: u32, minor: u32, patch: u32) -> u32 {
    major * 1000 + minor * 100 + patch
}

pub const fn SDL_FOURCC(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

pub const fn SDL_DEFINE_PIXELFOURCC(a: u8, b: u8, c: u8, d: u8) -> u32 {
    SDL_FOURCC(a, b, c, d)
}

pub const fn SDL_DEFINE_PIXELFORMAT(kind: u32, order: u32, layout: u32, bits: u32, bytes: u32) -> u32 {
    (1 << 28) | (kind << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes
}

pub const fn SDL_PIXELFLAG(format: u32) -> u32 {
    (format >> 28) & 0x0F
}

pub const fn SDL_PIXELTYPE(format: u32) -> u32 {
    (format >> 24) & 0x0F
}

pub const fn SDL_PIXELORDER(format: u32) -> u32 {
    (format >> 20) & 0x0F
}

pub const fn SDL_PIXELLAYOUT(format: u32) -> u32 {
    (format >> 16) & 0x0F
}

pub const fn SDL_BITSPERPIXEL(format: u32) -> u32 {
    (format >> 8) & 0xFF
}

pub const fn SDL_ISPIXELFORMAT_FOURCC(format: u32) -> bool {
    format != 0 && SDL_PIXELFLAG(format) != 1
}

pub const fn SDL_BYTESPERPIXEL(format: u32) -> u32 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        if format == SDL_PIXELFORMAT_YUY2
            || format == SDL_PIXELFORMAT_UYVY
            || format == SDL_PIXELFORMAT_YVYU
        {
            2
        } else {
            1
        }
    } else {
        format & 0xFF
    }
}

pub const fn SDL_ISPIXELFORMAT_INDEXED(format: u32) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_INDEX1 | SDL_PIXELTYPE_INDEX4 | SDL_PIXELTYPE_INDEX8
        )
}

pub const fn SDL_ISPIXELFORMAT_PACKED(format: u32) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_PACKED8 | SDL_PIXELTYPE_PACKED16 | SDL_PIXELTYPE_PACKED32
        )
}

pub const fn SDL_ISPIXELFORMAT_ARRAY(format: u32) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_ARRAYU8
                | SDL_PIXELTYPE_ARRAYU16
                | SDL_PIXELTYPE_ARRAYU32
                | SDL_PIXELTYPE_ARRAYF16
                | SDL_PIXELTYPE_ARRAYF32
        )
}

pub const fn SDL_ISPIXELFORMAT_ALPHA(format: u32) -> bool {
    (SDL_ISPIXELFORMAT_PACKED(format)
        && matches!(
            SDL_PIXELORDER(format),
            SDL_PACKEDORDER_ARGB | SDL_PACKEDORDER_RGBA | SDL_PACKEDORDER_ABGR | SDL_PACKEDORDER_BGRA
        ))
        || (SDL_ISPIXELFORMAT_ARRAY(format)
            && matches!(
                SDL_PIXELORDER(format),
                SDL_ARRAYORDER_ARGB | SDL_ARRAYORDER_RGBA | SDL_ARRAYORDER_ABGR | SDL_ARRAYORDER_BGRA
            ))
}

pub const fn SDL_AUDIO_BITSIZE(format: u16) -> u16 {
    format & SDL_AUDIO_MASK_BITSIZE
}

pub const fn SDL_AUDIO_ISFLOAT(format: u16) -> bool {
    format & SDL_AUDIO_MASK_DATATYPE != 0
}

pub const fn SDL_AUDIO_ISBIGENDIAN(format: u16) -> bool {
    format & SDL_AUDIO_MASK_ENDIAN != 0
}

pub const fn SDL_AUDIO_ISSIGNED(format: u16) -> bool {
    format & SDL_AUDIO_MASK_SIGNED != 0
}

pub const fn SDL_AUDIO_ISINT(format: u16) -> bool {
    !SDL_AUDIO_ISFLOAT(format)
}

pub const fn SDL_AUDIO_ISLITTLEENDIAN(format: u16) -> bool {
    !SDL_AUDIO_ISBIGENDIAN(format)
}

pub const fn SDL_AUDIO_ISUNSIGNED(format: u16) -> bool {
    !SDL_AUDIO_ISSIGNED(format)
}

/// 鼠标按键编号转为状态掩码
pub const fn SDL_BUTTON(button: u32) -> u32 {
    1 << (button - 1)
}

/// `b` 时刻是否已到达或超过 `a`（处理32位回绕）
pub const fn SDL_TICKS_PASSED(a: u32, b: u32) -> bool {
    (b.wrapping_sub(a) as i32) <= 0
}

pub const fn SDL_WINDOWPOS_UNDEFINED_DISPLAY(display: u32) -> u32 {
    SDL_WINDOWPOS_UNDEFINED_MASK | display
}

pub const fn SDL_WINDOWPOS_CENTERED_DISPLAY(display: u32) -> u32 {
    SDL_WINDOWPOS_CENTERED_MASK | display
}

pub const fn SDL_SHAPEMODEALPHA(mode: i32) -> bool {
    matches!(
        mode,
        ShapeModeDefault | ShapeModeBinarizeAlpha | ShapeModeReverseBinarizeAlpha
    )
}

const LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

constants! {
    // SDL_version.h
    SDL_MAJOR_VERSION: u32 = 2;
    SDL_MINOR_VERSION: u32 = 0;
    SDL_PATCHLEVEL: u32 = 22;
    SDL_COMPILEDVERSION: u32 = SDL_VERSIONNUM(SDL_MAJOR_VERSION, SDL_MINOR_VERSION, SDL_PATCHLEVEL);

    // SDL.h
    SDL_INIT_TIMER: u32 = 0x0000_0001;
    SDL_INIT_AUDIO: u32 = 0x0000_0010;
    SDL_INIT_VIDEO: u32 = 0x0000_0020;
    SDL_INIT_JOYSTICK: u32 = 0x0000_0200;
    SDL_INIT_HAPTIC: u32 = 0x0000_1000;
    SDL_INIT_GAMECONTROLLER: u32 = 0x0000_2000;
    SDL_INIT_EVENTS: u32 = 0x0000_4000;
    SDL_INIT_SENSOR: u32 = 0x0000_8000;
    SDL_INIT_NOPARACHUTE: u32 = 0x0010_0000;
    SDL_INIT_EVERYTHING: u32 = SDL_INIT_TIMER
        | SDL_INIT_AUDIO
        | SDL_INIT_VIDEO
        | SDL_INIT_EVENTS
        | SDL_INIT_JOYSTICK
        | SDL_INIT_HAPTIC
        | SDL_INIT_GAMECONTROLLER
        | SDL_INIT_SENSOR;

    // SDL_stdinc.h
    SDL_FALSE: i32 = 0;
    SDL_TRUE: i32 = 1;

    // SDL_endian.h
    SDL_LIL_ENDIAN: i32 = 1234;
    SDL_BIG_ENDIAN: i32 = 4321;
    SDL_BYTEORDER: i32 = if LITTLE_ENDIAN { SDL_LIL_ENDIAN } else { SDL_BIG_ENDIAN };

    // SDL_rwops.h
    SDL_RWOPS_UNKNOWN: u32 = 0;
    SDL_RWOPS_WINFILE: u32 = 1;
    SDL_RWOPS_STDFILE: u32 = 2;
    SDL_RWOPS_JNIFILE: u32 = 3;
    SDL_RWOPS_MEMORY: u32 = 4;
    SDL_RWOPS_MEMORY_RO: u32 = 5;
    RW_SEEK_SET: i32 = 0;
    RW_SEEK_CUR: i32 = 1;
    RW_SEEK_END: i32 = 2;

    // SDL_pixels.h
    SDL_ALPHA_OPAQUE: u8 = 255;
    SDL_ALPHA_TRANSPARENT: u8 = 0;

    SDL_PIXELTYPE_UNKNOWN: u32 = 0;
    SDL_PIXELTYPE_INDEX1: u32 = 1;
    SDL_PIXELTYPE_INDEX4: u32 = 2;
    SDL_PIXELTYPE_INDEX8: u32 = 3;
    SDL_PIXELTYPE_PACKED8: u32 = 4;
    SDL_PIXELTYPE_PACKED16: u32 = 5;
    SDL_PIXELTYPE_PACKED32: u32 = 6;
    SDL_PIXELTYPE_ARRAYU8: u32 = 7;
    SDL_PIXELTYPE_ARRAYU16: u32 = 8;
    SDL_PIXELTYPE_ARRAYU32: u32 = 9;
    SDL_PIXELTYPE_ARRAYF16: u32 = 10;
    SDL_PIXELTYPE_ARRAYF32: u32 = 11;

    SDL_BITMAPORDER_NONE: u32 = 0;
    SDL_BITMAPORDER_4321: u32 = 1;
    SDL_BITMAPORDER_1234: u32 = 2;

    SDL_PACKEDORDER_NONE: u32 = 0;
    SDL_PACKEDORDER_XRGB: u32 = 1;
    SDL_PACKEDORDER_RGBX: u32 = 2;
    SDL_PACKEDORDER_ARGB: u32 = 3;
    SDL_PACKEDORDER_RGBA: u32 = 4;
    SDL_PACKEDORDER_XBGR: u32 = 5;
    SDL_PACKEDORDER_BGRX: u32 = 6;
    SDL_PACKEDORDER_ABGR: u32 = 7;
    SDL_PACKEDORDER_BGRA: u32 = 8;

    SDL_ARRAYORDER_NONE: u32 = 0;
    SDL_ARRAYORDER_RGB: u32 = 1;
    SDL_ARRAYORDER_RGBA: u32 = 2;
    SDL_ARRAYORDER_ARGB: u32 = 3;
    SDL_ARRAYORDER_BGR: u32 = 4;
    SDL_ARRAYORDER_BGRA: u32 = 5;
    SDL_ARRAYORDER_ABGR: u32 = 6;

    SDL_PACKEDLAYOUT_NONE: u32 = 0;
    SDL_PACKEDLAYOUT_332: u32 = 1;
    SDL_PACKEDLAYOUT_4444: u32 = 2;
    SDL_PACKEDLAYOUT_1555: u32 = 3;
    SDL_PACKEDLAYOUT_5551: u32 = 4;
    SDL_PACKEDLAYOUT_565: u32 = 5;
    SDL_PACKEDLAYOUT_8888: u32 = 6;
    SDL_PACKEDLAYOUT_2101010: u32 = 7;
    SDL_PACKEDLAYOUT_1010102: u32 = 8;

    SDL_PIXELFORMAT_UNKNOWN: u32 = 0;
    SDL_PIXELFORMAT_INDEX1LSB: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX1, SDL_BITMAPORDER_4321, 0, 1, 0);
    SDL_PIXELFORMAT_INDEX1MSB: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX1, SDL_BITMAPORDER_1234, 0, 1, 0);
    SDL_PIXELFORMAT_INDEX4LSB: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX4, SDL_BITMAPORDER_4321, 0, 4, 0);
    SDL_PIXELFORMAT_INDEX4MSB: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX4, SDL_BITMAPORDER_1234, 0, 4, 0);
    SDL_PIXELFORMAT_INDEX8: u32 = SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX8, 0, 0, 8, 1);
    SDL_PIXELFORMAT_RGB332: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED8, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_332, 8, 1);
    SDL_PIXELFORMAT_XRGB4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_4444, 12, 2);
    SDL_PIXELFORMAT_RGB444: u32 = SDL_PIXELFORMAT_XRGB4444;
    SDL_PIXELFORMAT_XBGR4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_4444, 12, 2);
    SDL_PIXELFORMAT_BGR444: u32 = SDL_PIXELFORMAT_XBGR4444;
    SDL_PIXELFORMAT_XRGB1555: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_1555, 15, 2);
    SDL_PIXELFORMAT_RGB555: u32 = SDL_PIXELFORMAT_XRGB1555;
    SDL_PIXELFORMAT_XBGR1555: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_1555, 15, 2);
    SDL_PIXELFORMAT_BGR555: u32 = SDL_PIXELFORMAT_XBGR1555;
    SDL_PIXELFORMAT_ARGB4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_4444, 16, 2);
    SDL_PIXELFORMAT_RGBA4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_4444, 16, 2);
    SDL_PIXELFORMAT_ABGR4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_4444, 16, 2);
    SDL_PIXELFORMAT_BGRA4444: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_4444, 16, 2);
    SDL_PIXELFORMAT_ARGB1555: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_1555, 16, 2);
    SDL_PIXELFORMAT_RGBA5551: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_5551, 16, 2);
    SDL_PIXELFORMAT_ABGR1555: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_1555, 16, 2);
    SDL_PIXELFORMAT_BGRA5551: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_5551, 16, 2);
    SDL_PIXELFORMAT_RGB565: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_565, 16, 2);
    SDL_PIXELFORMAT_BGR565: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_565, 16, 2);
    SDL_PIXELFORMAT_RGB24: u32 = SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_RGB, 0, 24, 3);
    SDL_PIXELFORMAT_BGR24: u32 = SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_BGR, 0, 24, 3);
    SDL_PIXELFORMAT_XRGB8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_8888, 24, 4);
    SDL_PIXELFORMAT_RGB888: u32 = SDL_PIXELFORMAT_XRGB8888;
    SDL_PIXELFORMAT_RGBX8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBX, SDL_PACKEDLAYOUT_8888, 24, 4);
    SDL_PIXELFORMAT_XBGR8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_XBGR, SDL_PACKEDLAYOUT_8888, 24, 4);
    SDL_PIXELFORMAT_BGR888: u32 = SDL_PIXELFORMAT_XBGR8888;
    SDL_PIXELFORMAT_BGRX8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_BGRX, SDL_PACKEDLAYOUT_8888, 24, 4);
    SDL_PIXELFORMAT_ARGB8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_8888, 32, 4);
    SDL_PIXELFORMAT_RGBA8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_8888, 32, 4);
    SDL_PIXELFORMAT_ABGR8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ABGR, SDL_PACKEDLAYOUT_8888, 32, 4);
    SDL_PIXELFORMAT_BGRA8888: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_BGRA, SDL_PACKEDLAYOUT_8888, 32, 4);
    SDL_PIXELFORMAT_ARGB2101010: u32 =
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_ARGB, SDL_PACKEDLAYOUT_2101010, 32, 4);

    SDL_PIXELFORMAT_RGBA32: u32 = if LITTLE_ENDIAN { SDL_PIXELFORMAT_ABGR8888 } else { SDL_PIXELFORMAT_RGBA8888 };
    SDL_PIXELFORMAT_ARGB32: u32 = if LITTLE_ENDIAN { SDL_PIXELFORMAT_BGRA8888 } else { SDL_PIXELFORMAT_ARGB8888 };
    SDL_PIXELFORMAT_BGRA32: u32 = if LITTLE_ENDIAN { SDL_PIXELFORMAT_ARGB8888 } else { SDL_PIXELFORMAT_BGRA8888 };
    SDL_PIXELFORMAT_ABGR32: u32 = if LITTLE_ENDIAN { SDL_PIXELFORMAT_RGBA8888 } else { SDL_PIXELFORMAT_ABGR8888 };

    SDL_PIXELFORMAT_YV12: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'V', b'1', b'2');
    SDL_PIXELFORMAT_IYUV: u32 = SDL_DEFINE_PIXELFOURCC(b'I', b'Y', b'U', b'V');
    SDL_PIXELFORMAT_YUY2: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'U', b'Y', b'2');
    SDL_PIXELFORMAT_UYVY: u32 = SDL_DEFINE_PIXELFOURCC(b'U', b'Y', b'V', b'Y');
    SDL_PIXELFORMAT_YVYU: u32 = SDL_DEFINE_PIXELFOURCC(b'Y', b'V', b'Y', b'U');
    SDL_PIXELFORMAT_NV12: u32 = SDL_DEFINE_PIXELFOURCC(b'N', b'V', b'1', b'2');
    SDL_PIXELFORMAT_NV21: u32 = SDL_DEFINE_PIXELFOURCC(b'N', b'V', b'2', b'1');
    SDL_PIXELFORMAT_EXTERNAL_OES: u32 = SDL_DEFINE_PIXELFOURCC(b'O', b'E', b'S', b' ');

    // SDL_surface.h
    SDL_SWSURFACE: u32 = 0;
    SDL_PREALLOC: u32 = 0x0000_0001;
    SDL_RLEACCEL: u32 = 0x0000_0002;
    SDL_DONTFREE: u32 = 0x0000_0004;
    SDL_SIMD_ALIGNED: u32 = 0x0000_0008;

    // SDL_events.h
    SDL_RELEASED: u8 = 0;
    SDL_PRESSED: u8 = 1;
    SDL_QUERY: i32 = -1;
    SDL_IGNORE: i32 = 0;
    SDL_DISABLE: i32 = 0;
    SDL_ENABLE: i32 = 1;

    SDL_FIRSTEVENT: u32 = 0;
    SDL_QUIT: u32 = 0x100;
    SDL_APP_TERMINATING: u32 = 0x101;
    SDL_APP_LOWMEMORY: u32 = 0x102;
    SDL_APP_WILLENTERBACKGROUND: u32 = 0x103;
    SDL_APP_DIDENTERBACKGROUND: u32 = 0x104;
    SDL_APP_WILLENTERFOREGROUND: u32 = 0x105;
    SDL_APP_DIDENTERFOREGROUND: u32 = 0x106;
    SDL_LOCALECHANGED: u32 = 0x107;
    SDL_DISPLAYEVENT: u32 = 0x150;
    SDL_WINDOWEVENT: u32 = 0x200;
    SDL_SYSWMEVENT: u32 = 0x201;
    SDL_KEYDOWN: u32 = 0x300;
    SDL_KEYUP: u32 = 0x301;
    SDL_TEXTEDITING: u32 = 0x302;
    SDL_TEXTINPUT: u32 = 0x303;
    SDL_KEYMAPCHANGED: u32 = 0x304;
    SDL_TEXTEDITING_EXT: u32 = 0x305;
    SDL_MOUSEMOTION: u32 = 0x400;
    SDL_MOUSEBUTTONDOWN: u32 = 0x401;
    SDL_MOUSEBUTTONUP: u32 = 0x402;
    SDL_MOUSEWHEEL: u32 = 0x403;
    SDL_JOYAXISMOTION: u32 = 0x600;
    SDL_JOYBALLMOTION: u32 = 0x601;
    SDL_JOYHATMOTION: u32 = 0x602;
    SDL_JOYBUTTONDOWN: u32 = 0x603;
    SDL_JOYBUTTONUP: u32 = 0x604;
    SDL_JOYDEVICEADDED: u32 = 0x605;
    SDL_JOYDEVICEREMOVED: u32 = 0x606;
    SDL_JOYBATTERYUPDATED: u32 = 0x607;
    SDL_CONTROLLERAXISMOTION: u32 = 0x650;
    SDL_CONTROLLERBUTTONDOWN: u32 = 0x651;
    SDL_CONTROLLERBUTTONUP: u32 = 0x652;
    SDL_CONTROLLERDEVICEADDED: u32 = 0x653;
    SDL_CONTROLLERDEVICEREMOVED: u32 = 0x654;
    SDL_CONTROLLERDEVICEREMAPPED: u32 = 0x655;
    SDL_CONTROLLERTOUCHPADDOWN: u32 = 0x656;
    SDL_CONTROLLERTOUCHPADMOTION: u32 = 0x657;
    SDL_CONTROLLERTOUCHPADUP: u32 = 0x658;
    SDL_CONTROLLERSENSORUPDATE: u32 = 0x659;
    SDL_FINGERDOWN: u32 = 0x700;
    SDL_FINGERUP: u32 = 0x701;
    SDL_FINGERMOTION: u32 = 0x702;
    SDL_DOLLARGESTURE: u32 = 0x800;
    SDL_DOLLARRECORD: u32 = 0x801;
    SDL_MULTIGESTURE: u32 = 0x802;
    SDL_CLIPBOARDUPDATE: u32 = 0x900;
    SDL_DROPFILE: u32 = 0x1000;
    SDL_DROPTEXT: u32 = 0x1001;
    SDL_DROPBEGIN: u32 = 0x1002;
    SDL_DROPCOMPLETE: u32 = 0x1003;
    SDL_AUDIODEVICEADDED: u32 = 0x1100;
    SDL_AUDIODEVICEREMOVED: u32 = 0x1101;
    SDL_SENSORUPDATE: u32 = 0x1200;
    SDL_RENDER_TARGETS_RESET: u32 = 0x2000;
    SDL_RENDER_DEVICE_RESET: u32 = 0x2001;
    SDL_POLLSENTINEL: u32 = 0x7F00;
    SDL_USEREVENT: u32 = 0x8000;
    SDL_LASTEVENT: u32 = 0xFFFF;

    SDL_ADDEVENT: i32 = 0;
    SDL_PEEKEVENT: i32 = 1;
    SDL_GETEVENT: i32 = 2;

    // SDL_video.h
    SDL_WINDOWPOS_UNDEFINED_MASK: u32 = 0x1FFF_0000;
    SDL_WINDOWPOS_UNDEFINED: u32 = SDL_WINDOWPOS_UNDEFINED_DISPLAY(0);
    SDL_WINDOWPOS_CENTERED_MASK: u32 = 0x2FFF_0000;
    SDL_WINDOWPOS_CENTERED: u32 = SDL_WINDOWPOS_CENTERED_DISPLAY(0);

    SDL_WINDOW_FULLSCREEN: u32 = 0x0000_0001;
    SDL_WINDOW_OPENGL: u32 = 0x0000_0002;
    SDL_WINDOW_SHOWN: u32 = 0x0000_0004;
    SDL_WINDOW_HIDDEN: u32 = 0x0000_0008;
    SDL_WINDOW_BORDERLESS: u32 = 0x0000_0010;
    SDL_WINDOW_RESIZABLE: u32 = 0x0000_0020;
    SDL_WINDOW_MINIMIZED: u32 = 0x0000_0040;
    SDL_WINDOW_MAXIMIZED: u32 = 0x0000_0080;
    SDL_WINDOW_MOUSE_GRABBED: u32 = 0x0000_0100;
    SDL_WINDOW_INPUT_FOCUS: u32 = 0x0000_0200;
    SDL_WINDOW_MOUSE_FOCUS: u32 = 0x0000_0400;
    SDL_WINDOW_FULLSCREEN_DESKTOP: u32 = SDL_WINDOW_FULLSCREEN | 0x0000_1000;
    SDL_WINDOW_FOREIGN: u32 = 0x0000_0800;
    SDL_WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
    SDL_WINDOW_MOUSE_CAPTURE: u32 = 0x0000_4000;
    SDL_WINDOW_ALWAYS_ON_TOP: u32 = 0x0000_8000;
    SDL_WINDOW_SKIP_TASKBAR: u32 = 0x0001_0000;
    SDL_WINDOW_UTILITY: u32 = 0x0002_0000;
    SDL_WINDOW_TOOLTIP: u32 = 0x0004_0000;
    SDL_WINDOW_POPUP_MENU: u32 = 0x0008_0000;
    SDL_WINDOW_KEYBOARD_GRABBED: u32 = 0x0010_0000;
    SDL_WINDOW_VULKAN: u32 = 0x1000_0000;
    SDL_WINDOW_METAL: u32 = 0x2000_0000;
    SDL_WINDOW_INPUT_GRABBED: u32 = SDL_WINDOW_MOUSE_GRABBED;

    SDL_WINDOWEVENT_NONE: u8 = 0;
    SDL_WINDOWEVENT_SHOWN: u8 = 1;
    SDL_WINDOWEVENT_HIDDEN: u8 = 2;
    SDL_WINDOWEVENT_EXPOSED: u8 = 3;
    SDL_WINDOWEVENT_MOVED: u8 = 4;
    SDL_WINDOWEVENT_RESIZED: u8 = 5;
    SDL_WINDOWEVENT_SIZE_CHANGED: u8 = 6;
    SDL_WINDOWEVENT_MINIMIZED: u8 = 7;
    SDL_WINDOWEVENT_MAXIMIZED: u8 = 8;
    SDL_WINDOWEVENT_RESTORED: u8 = 9;
    SDL_WINDOWEVENT_ENTER: u8 = 10;
    SDL_WINDOWEVENT_LEAVE: u8 = 11;
    SDL_WINDOWEVENT_FOCUS_GAINED: u8 = 12;
    SDL_WINDOWEVENT_FOCUS_LOST: u8 = 13;
    SDL_WINDOWEVENT_CLOSE: u8 = 14;
    SDL_WINDOWEVENT_TAKE_FOCUS: u8 = 15;
    SDL_WINDOWEVENT_HIT_TEST: u8 = 16;
    SDL_WINDOWEVENT_ICCPROF_CHANGED: u8 = 17;
    SDL_WINDOWEVENT_DISPLAY_CHANGED: u8 = 18;

    SDL_DISPLAYEVENT_NONE: u8 = 0;
    SDL_DISPLAYEVENT_ORIENTATION: u8 = 1;
    SDL_DISPLAYEVENT_CONNECTED: u8 = 2;
    SDL_DISPLAYEVENT_DISCONNECTED: u8 = 3;

    SDL_GL_RED_SIZE: i32 = 0;
    SDL_GL_GREEN_SIZE: i32 = 1;
    SDL_GL_BLUE_SIZE: i32 = 2;
    SDL_GL_ALPHA_SIZE: i32 = 3;
    SDL_GL_BUFFER_SIZE: i32 = 4;
    SDL_GL_DOUBLEBUFFER: i32 = 5;
    SDL_GL_DEPTH_SIZE: i32 = 6;
    SDL_GL_STENCIL_SIZE: i32 = 7;
    SDL_GL_ACCUM_RED_SIZE: i32 = 8;
    SDL_GL_ACCUM_GREEN_SIZE: i32 = 9;
    SDL_GL_ACCUM_BLUE_SIZE: i32 = 10;
    SDL_GL_ACCUM_ALPHA_SIZE: i32 = 11;
    SDL_GL_STEREO: i32 = 12;
    SDL_GL_MULTISAMPLEBUFFERS: i32 = 13;
    SDL_GL_MULTISAMPLESAMPLES: i32 = 14;
    SDL_GL_ACCELERATED_VISUAL: i32 = 15;
    SDL_GL_RETAINED_BACKING: i32 = 16;
    SDL_GL_CONTEXT_MAJOR_VERSION: i32 = 17;
    SDL_GL_CONTEXT_MINOR_VERSION: i32 = 18;
    SDL_GL_CONTEXT_EGL: i32 = 19;
    SDL_GL_CONTEXT_FLAGS: i32 = 20;
    SDL_GL_CONTEXT_PROFILE_MASK: i32 = 21;
    SDL_GL_SHARE_WITH_CURRENT_CONTEXT: i32 = 22;
    SDL_GL_FRAMEBUFFER_SRGB_CAPABLE: i32 = 23;
    SDL_GL_CONTEXT_RELEASE_BEHAVIOR: i32 = 24;
    SDL_GL_CONTEXT_RESET_NOTIFICATION: i32 = 25;
    SDL_GL_CONTEXT_NO_ERROR: i32 = 26;

    SDL_GL_CONTEXT_PROFILE_CORE: i32 = 0x0001;
    SDL_GL_CONTEXT_PROFILE_COMPATIBILITY: i32 = 0x0002;
    SDL_GL_CONTEXT_PROFILE_ES: i32 = 0x0004;

    SDL_GL_CONTEXT_DEBUG_FLAG: i32 = 0x0001;
    SDL_GL_CONTEXT_FORWARD_COMPATIBLE_FLAG: i32 = 0x0002;
    SDL_GL_CONTEXT_ROBUST_ACCESS_FLAG: i32 = 0x0004;
    SDL_GL_CONTEXT_RESET_ISOLATION_FLAG: i32 = 0x0008;

    SDL_GL_CONTEXT_RELEASE_BEHAVIOR_NONE: i32 = 0x0000;
    SDL_GL_CONTEXT_RELEASE_BEHAVIOR_FLUSH: i32 = 0x0001;

    SDL_HITTEST_NORMAL: i32 = 0;
    SDL_HITTEST_DRAGGABLE: i32 = 1;
    SDL_HITTEST_RESIZE_TOPLEFT: i32 = 2;
    SDL_HITTEST_RESIZE_TOP: i32 = 3;
    SDL_HITTEST_RESIZE_TOPRIGHT: i32 = 4;
    SDL_HITTEST_RESIZE_RIGHT: i32 = 5;
    SDL_HITTEST_RESIZE_BOTTOMRIGHT: i32 = 6;
    SDL_HITTEST_RESIZE_BOTTOM: i32 = 7;
    SDL_HITTEST_RESIZE_BOTTOMLEFT: i32 = 8;
    SDL_HITTEST_RESIZE_LEFT: i32 = 9;

    // SDL_blendmode.h
    SDL_BLENDMODE_NONE: i32 = 0x0000_0000;
    SDL_BLENDMODE_BLEND: i32 = 0x0000_0001;
    SDL_BLENDMODE_ADD: i32 = 0x0000_0002;
    SDL_BLENDMODE_MOD: i32 = 0x0000_0004;
    SDL_BLENDMODE_MUL: i32 = 0x0000_0008;
    SDL_BLENDMODE_INVALID: i32 = 0x7FFF_FFFF;

    // SDL_haptic.h
    SDL_HAPTIC_CONSTANT: u32 = 1 << 0;
    SDL_HAPTIC_SINE: u32 = 1 << 1;
    SDL_HAPTIC_LEFTRIGHT: u32 = 1 << 2;
    SDL_HAPTIC_TRIANGLE: u32 = 1 << 3;
    SDL_HAPTIC_SAWTOOTHUP: u32 = 1 << 4;
    SDL_HAPTIC_SAWTOOTHDOWN: u32 = 1 << 5;
    SDL_HAPTIC_RAMP: u32 = 1 << 6;
    SDL_HAPTIC_SPRING: u32 = 1 << 7;
    SDL_HAPTIC_DAMPER: u32 = 1 << 8;
    SDL_HAPTIC_INERTIA: u32 = 1 << 9;
    SDL_HAPTIC_FRICTION: u32 = 1 << 10;
    SDL_HAPTIC_CUSTOM: u32 = 1 << 11;
    SDL_HAPTIC_GAIN: u32 = 1 << 12;
    SDL_HAPTIC_AUTOCENTER: u32 = 1 << 13;
    SDL_HAPTIC_STATUS: u32 = 1 << 14;
    SDL_HAPTIC_PAUSE: u32 = 1 << 15;
    SDL_HAPTIC_POLAR: u8 = 0;
    SDL_HAPTIC_CARTESIAN: u8 = 1;
    SDL_HAPTIC_SPHERICAL: u8 = 2;
    SDL_HAPTIC_STEERING_AXIS: u8 = 3;
    SDL_HAPTIC_INFINITY: u32 = 4_294_967_295;

    // SDL_render.h
    SDL_RENDERER_SOFTWARE: u32 = 0x0000_0001;
    SDL_RENDERER_ACCELERATED: u32 = 0x0000_0002;
    SDL_RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
    SDL_RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

    SDL_ScaleModeNearest: i32 = 0;
    SDL_ScaleModeLinear: i32 = 1;
    SDL_ScaleModeBest: i32 = 2;

    SDL_TEXTUREACCESS_STATIC: i32 = 0;
    SDL_TEXTUREACCESS_STREAMING: i32 = 1;
    SDL_TEXTUREACCESS_TARGET: i32 = 2;

    SDL_TEXTUREMODULATE_NONE: i32 = 0x0000_0000;
    SDL_TEXTUREMODULATE_COLOR: i32 = 0x0000_0001;
    SDL_TEXTUREMODULATE_ALPHA: i32 = 0x0000_0002;

    SDL_FLIP_NONE: i32 = 0x0000_0000;
    SDL_FLIP_HORIZONTAL: i32 = 0x0000_0001;
    SDL_FLIP_VERTICAL: i32 = 0x0000_0002;

    // SDL_touch.h
    SDL_TOUCH_MOUSEID: u32 = 0xFFFF_FFFF;
    SDL_MOUSE_TOUCHID: i64 = -1;
    SDL_TOUCH_DEVICE_INVALID: i32 = -1;
    SDL_TOUCH_DEVICE_DIRECT: i32 = 0;
    SDL_TOUCH_DEVICE_INDIRECT_ABSOLUTE: i32 = 1;
    SDL_TOUCH_DEVICE_INDIRECT_RELATIVE: i32 = 2;

    // SDL_hints.h
    SDL_HINT_DEFAULT: i32 = 0;
    SDL_HINT_NORMAL: i32 = 1;
    SDL_HINT_OVERRIDE: i32 = 2;

    // SDL_mouse.h
    SDL_SYSTEM_CURSOR_ARROW: i32 = 0;
    SDL_SYSTEM_CURSOR_IBEAM: i32 = 1;
    SDL_SYSTEM_CURSOR_WAIT: i32 = 2;
    SDL_SYSTEM_CURSOR_CROSSHAIR: i32 = 3;
    SDL_SYSTEM_CURSOR_WAITARROW: i32 = 4;
    SDL_SYSTEM_CURSOR_SIZENWSE: i32 = 5;
    SDL_SYSTEM_CURSOR_SIZENESW: i32 = 6;
    SDL_SYSTEM_CURSOR_SIZEWE: i32 = 7;
    SDL_SYSTEM_CURSOR_SIZENS: i32 = 8;
    SDL_SYSTEM_CURSOR_SIZEALL: i32 = 9;
    SDL_SYSTEM_CURSOR_NO: i32 = 10;
    SDL_SYSTEM_CURSOR_HAND: i32 = 11;
    SDL_NUM_SYSTEM_CURSORS: i32 = 12;

    SDL_MOUSEWHEEL_NORMAL: u32 = 0;
    SDL_MOUSEWHEEL_FLIPPED: u32 = 1;

    SDL_BUTTON_LEFT: u32 = 1;
    SDL_BUTTON_MIDDLE: u32 = 2;
    SDL_BUTTON_RIGHT: u32 = 3;
    SDL_BUTTON_X1: u32 = 4;
    SDL_BUTTON_X2: u32 = 5;
    SDL_BUTTON_LMASK: u32 = SDL_BUTTON(SDL_BUTTON_LEFT);
    SDL_BUTTON_MMASK: u32 = SDL_BUTTON(SDL_BUTTON_MIDDLE);
    SDL_BUTTON_RMASK: u32 = SDL_BUTTON(SDL_BUTTON_RIGHT);
    SDL_BUTTON_X1MASK: u32 = SDL_BUTTON(SDL_BUTTON_X1);
    SDL_BUTTON_X2MASK: u32 = SDL_BUTTON(SDL_BUTTON_X2);

    // SDL_audio.h
    SDL_AUDIO_MASK_BITSIZE: u16 = 0xFF;
    SDL_AUDIO_MASK_DATATYPE: u16 = 1 << 8;
    SDL_AUDIO_MASK_ENDIAN: u16 = 1 << 12;
    SDL_AUDIO_MASK_SIGNED: u16 = 1 << 15;

    AUDIO_U8: u16 = 0x0008;
    AUDIO_S8: u16 = 0x8008;
    AUDIO_U16LSB: u16 = 0x0010;
    AUDIO_S16LSB: u16 = 0x8010;
    AUDIO_U16MSB: u16 = 0x1010;
    AUDIO_S16MSB: u16 = 0x9010;
    AUDIO_U16: u16 = AUDIO_U16LSB;
    AUDIO_S16: u16 = AUDIO_S16LSB;
    AUDIO_S32LSB: u16 = 0x8020;
    AUDIO_S32MSB: u16 = 0x9020;
    AUDIO_S32: u16 = AUDIO_S32LSB;
    AUDIO_F32LSB: u16 = 0x8120;
    AUDIO_F32MSB: u16 = 0x9120;
    AUDIO_F32: u16 = AUDIO_F32LSB;
    AUDIO_U16SYS: u16 = if LITTLE_ENDIAN { AUDIO_U16LSB } else { AUDIO_U16MSB };
    AUDIO_S16SYS: u16 = if LITTLE_ENDIAN { AUDIO_S16LSB } else { AUDIO_S16MSB };
    AUDIO_S32SYS: u16 = if LITTLE_ENDIAN { AUDIO_S32LSB } else { AUDIO_S32MSB };
    AUDIO_F32SYS: u16 = if LITTLE_ENDIAN { AUDIO_F32LSB } else { AUDIO_F32MSB };

    SDL_AUDIO_ALLOW_FREQUENCY_CHANGE: i32 = 0x0000_0001;
    SDL_AUDIO_ALLOW_FORMAT_CHANGE: i32 = 0x0000_0002;
    SDL_AUDIO_ALLOW_CHANNELS_CHANGE: i32 = 0x0000_0004;
    SDL_AUDIO_ALLOW_SAMPLES_CHANGE: i32 = 0x0000_0008;
    SDL_AUDIO_ALLOW_ANY_CHANGE: i32 = SDL_AUDIO_ALLOW_FREQUENCY_CHANGE
        | SDL_AUDIO_ALLOW_FORMAT_CHANGE
        | SDL_AUDIO_ALLOW_CHANNELS_CHANGE
        | SDL_AUDIO_ALLOW_SAMPLES_CHANGE;

    SDL_AUDIOCVT_MAX_FILTERS: i32 = 9;
    SDL_MIX_MAXVOLUME: i32 = 128;

    SDL_AUDIO_STOPPED: i32 = 0;
    SDL_AUDIO_PLAYING: i32 = 1;
    SDL_AUDIO_PAUSED: i32 = 2;

    // SDL_shape.h
    SDL_NONSHAPEABLE_WINDOW: i32 = -1;
    SDL_INVALID_SHAPE_ARGUMENT: i32 = -2;
    SDL_WINDOW_LACKS_SHAPE: i32 = -3;

    ShapeModeDefault: i32 = 0;
    ShapeModeBinarizeAlpha: i32 = 1;
    ShapeModeReverseBinarizeAlpha: i32 = 2;
    ShapeModeColorKey: i32 = 3;

    // SDL_messagebox.h
    SDL_MESSAGEBOX_ERROR: u32 = 0x0000_0010;
    SDL_MESSAGEBOX_WARNING: u32 = 0x0000_0020;
    SDL_MESSAGEBOX_INFORMATION: u32 = 0x0000_0040;
    SDL_MESSAGEBOX_BUTTONS_LEFT_TO_RIGHT: u32 = 0x0000_0080;
    SDL_MESSAGEBOX_BUTTONS_RIGHT_TO_LEFT: u32 = 0x0000_0100;
    SDL_MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT: u32 = 0x0000_0001;
    SDL_MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT: u32 = 0x0000_0002;
    SDL_MESSAGEBOX_COLOR_BACKGROUND: i32 = 0;
    SDL_MESSAGEBOX_COLOR_TEXT: i32 = 1;
    SDL_MESSAGEBOX_COLOR_BUTTON_BORDER: i32 = 2;
    SDL_MESSAGEBOX_COLOR_BUTTON_BACKGROUND: i32 = 3;
    SDL_MESSAGEBOX_COLOR_BUTTON_SELECTED: i32 = 4;
    SDL_MESSAGEBOX_COLOR_MAX: i32 = 5;

    // SDL_power.h
    SDL_POWERSTATE_UNKNOWN: i32 = 0;
    SDL_POWERSTATE_ON_BATTERY: i32 = 1;
    SDL_POWERSTATE_NO_BATTERY: i32 = 2;
    SDL_POWERSTATE_CHARGING: i32 = 3;
    SDL_POWERSTATE_CHARGED: i32 = 4;

    // SDL_log.h
    SDL_MAX_LOG_MESSAGE: i32 = 4096;
    SDL_LOG_CATEGORY_APPLICATION: i32 = 0;
    SDL_LOG_CATEGORY_ERROR: i32 = 1;
    SDL_LOG_CATEGORY_ASSERT: i32 = 2;
    SDL_LOG_CATEGORY_SYSTEM: i32 = 3;
    SDL_LOG_CATEGORY_AUDIO: i32 = 4;
    SDL_LOG_CATEGORY_VIDEO: i32 = 5;
    SDL_LOG_CATEGORY_RENDER: i32 = 6;
    SDL_LOG_CATEGORY_INPUT: i32 = 7;
    SDL_LOG_CATEGORY_TEST: i32 = 8;
    SDL_LOG_CATEGORY_CUSTOM: i32 = 19;
    SDL_LOG_PRIORITY_VERBOSE: i32 = 1;
    SDL_LOG_PRIORITY_DEBUG: i32 = 2;
    SDL_LOG_PRIORITY_INFO: i32 = 3;
    SDL_LOG_PRIORITY_WARN: i32 = 4;
    SDL_LOG_PRIORITY_ERROR: i32 = 5;
    SDL_LOG_PRIORITY_CRITICAL: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_byte_order() {
        assert_eq!(SDL_FOURCC(b'Y', b'V', b'1', b'2'), 0x3231_5659);
        assert_eq!(SDL_PIXELFORMAT_IYUV, 0x5655_5949);
        assert!(SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_NV12));
        assert!(!SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_UNKNOWN));
    }

    #[test]
    fn test_pixel_format_values() {
        assert_eq!(SDL_PIXELFORMAT_ARGB8888, 0x1636_2004);
        assert_eq!(SDL_PIXELFORMAT_RGB24, 0x1710_1803);
        assert_eq!(SDL_PIXELFORMAT_INDEX8, 0x1300_0801);
        assert_eq!(SDL_BITSPERPIXEL(SDL_PIXELFORMAT_RGB565), 16);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_RGB888), 4);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YUY2), 2);
        assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YV12), 1);
    }

    #[test]
    fn test_pixel_format_predicates() {
        assert!(SDL_ISPIXELFORMAT_INDEXED(SDL_PIXELFORMAT_INDEX1LSB));
        assert!(SDL_ISPIXELFORMAT_PACKED(SDL_PIXELFORMAT_ARGB8888));
        assert!(SDL_ISPIXELFORMAT_ARRAY(SDL_PIXELFORMAT_BGR24));
        assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGBA8888));
        assert!(!SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGB888));
        assert!(!SDL_ISPIXELFORMAT_PACKED(SDL_PIXELFORMAT_YUY2));
    }

    #[test]
    fn test_endian_aliases() {
        if cfg!(target_endian = "little") {
            assert_eq!(SDL_PIXELFORMAT_RGBA32, SDL_PIXELFORMAT_ABGR8888);
            assert_eq!(AUDIO_S16SYS, AUDIO_S16LSB);
        } else {
            assert_eq!(SDL_PIXELFORMAT_RGBA32, SDL_PIXELFORMAT_RGBA8888);
            assert_eq!(AUDIO_S16SYS, AUDIO_S16MSB);
        }
    }

    #[test]
    fn test_audio_format_macros() {
        assert_eq!(SDL_AUDIO_BITSIZE(AUDIO_S16LSB), 16);
        assert!(SDL_AUDIO_ISSIGNED(AUDIO_S16LSB));
        assert!(SDL_AUDIO_ISUNSIGNED(AUDIO_U8));
        assert!(SDL_AUDIO_ISFLOAT(AUDIO_F32MSB));
        assert!(SDL_AUDIO_ISBIGENDIAN(AUDIO_F32MSB));
        assert!(SDL_AUDIO_ISLITTLEENDIAN(AUDIO_S32LSB));
        assert!(SDL_AUDIO_ISINT(AUDIO_S32LSB));
    }

    #[test]
    fn test_misc_macros() {
        assert_eq!(SDL_BUTTON_RMASK, 4);
        assert_eq!(SDL_INIT_EVERYTHING, 0xF231);
        assert_eq!(SDL_WINDOW_FULLSCREEN_DESKTOP, 0x1001);
        assert_eq!(SDL_WINDOWPOS_CENTERED_DISPLAY(1), 0x2FFF_0001);
        assert!(SDL_TICKS_PASSED(100, 50));
        assert!(!SDL_TICKS_PASSED(50, 100));
        assert!(SDL_TICKS_PASSED(5, u32::MAX - 5));
        assert!(SDL_SHAPEMODEALPHA(ShapeModeBinarizeAlpha));
        assert!(!SDL_SHAPEMODEALPHA(ShapeModeColorKey));
        assert_eq!(SDL_COMPILEDVERSION, 2022);
    }
}

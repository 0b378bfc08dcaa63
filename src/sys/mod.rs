//! SDL 结构体/联合体的 Rust 镜像
//!
//! 字段名与 C 头文件一致（关键字字段使用原始标识符，如 `r#type`）。
//! 镜像由编译器计算布局，注册表据此校验自身的布局计算。
//!
//! - `core` - 矩形、像素、表面、音频、RWops、消息框、窗口形状
//! - `events` - 事件结构体与 `SDL_Event`
//! - `haptic` - 力反馈效果
//! - `joystick` - 摇杆 GUID 与按键绑定
//! - `mixer` - `Mix_Chunk`

#![allow(non_camel_case_types, non_snake_case)]

#[macro_use]
mod macros;

pub mod core;
pub mod events;
pub mod haptic;
pub mod joystick;
pub mod mixer;

pub use self::core::*;
pub use self::events::*;
pub use self::haptic::*;
pub use self::joystick::*;
pub use self::mixer::*;

use crate::abi::{layout_mismatches, TypeRegistry};
use crate::core::error::MarshalResult;

opaque! {
    SDL_Window,
    SDL_Renderer,
    SDL_Texture,
    SDL_Cursor,
    SDL_Haptic,
    SDL_Joystick,
    SDL_GameController,
    SDL_BlitMap,
    TTF_Font,
    Mix_Music,
}

/// 声明一组镜像类型：注册函数按列出顺序注册（被引用的类型在前），
/// 校验函数逐个比对布局
macro_rules! mirror_group {
    ($register:ident, $check:ident => [$($(#[$attr:meta])* $ty:ty),* $(,)?]) => {
        pub fn $register(registry: &mut TypeRegistry) -> MarshalResult<()> {
            $($(#[$attr])* registry.register_native::<$ty>()?;)*
            Ok(())
        }

        pub fn $check(registry: &TypeRegistry) -> MarshalResult<Vec<String>> {
            let mut problems = Vec::new();
            $($(#[$attr])* problems.extend(layout_mismatches::<$ty>(registry)?);)*
            Ok(problems)
        }
    };
}

mirror_group!(register_core_types, check_core_layouts => [
    SDL_version,
    SDL_Point,
    SDL_FPoint,
    SDL_Rect,
    SDL_FRect,
    SDL_Color,
    SDL_Palette,
    SDL_PixelFormat,
    SDL_Surface,
    SDL_DisplayMode,
    SDL_RendererInfo,
    SDL_Vertex,
    SDL_Finger,
    SDL_AudioSpec,
    SDL_AudioCVT,
    SDL_MessageBoxButtonData,
    SDL_MessageBoxColor,
    SDL_MessageBoxColorScheme,
    SDL_MessageBoxData,
    SDL_WindowShapeParams,
    SDL_WindowShapeMode,
    SDL_RWopsStdio,
    SDL_RWopsMem,
    SDL_RWopsUnknown,
    #[cfg(windows)]
    SDL_RWopsWindowsBuffer,
    #[cfg(windows)]
    SDL_RWopsWindowsIO,
    SDL_RWopsHidden,
    SDL_RWops,
    SDL_HapticDirection,
    SDL_HapticConstant,
    SDL_HapticPeriodic,
    SDL_HapticCondition,
    SDL_HapticRamp,
    SDL_HapticLeftRight,
    SDL_HapticCustom,
    SDL_HapticEffect,
    SDL_CommonEvent,
    SDL_DisplayEvent,
    SDL_WindowEvent,
    SDL_Keysym,
    SDL_KeyboardEvent,
    SDL_TextEditingEvent,
    SDL_TextEditingExtEvent,
    SDL_TextInputEvent,
    SDL_MouseMotionEvent,
    SDL_MouseButtonEvent,
    SDL_MouseWheelEvent,
    SDL_JoyAxisEvent,
    SDL_JoyBallEvent,
    SDL_JoyHatEvent,
    SDL_JoyButtonEvent,
    SDL_JoyDeviceEvent,
    SDL_ControllerAxisEvent,
    SDL_ControllerButtonEvent,
    SDL_ControllerDeviceEvent,
    SDL_ControllerTouchpadEvent,
    SDL_ControllerSensorEvent,
    SDL_AudioDeviceEvent,
    SDL_SensorEvent,
    SDL_QuitEvent,
    SDL_OSEvent,
    SDL_UserEvent,
    SDL_SysWMEvent,
    SDL_TouchFingerEvent,
    SDL_MultiGestureEvent,
    SDL_DollarGestureEvent,
    SDL_DropEvent,
    SDL_Event,
]);

mirror_group!(register_joystick_types, check_joystick_layouts => [
    SDL_JoystickGUID,
    SDL_GameControllerButtonBindHat,
    SDL_GameControllerButtonBindValue,
    SDL_GameControllerButtonBind,
]);

mirror_group!(register_mixer_types, check_mixer_layouts => [
    Mix_Chunk,
]);

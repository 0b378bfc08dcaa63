//! 事件结构体与 `SDL_Event` 联合体
//!
//! `SDL_Event` 固定为56字节，以 `padding` 成员保证。

use std::os::raw::{c_char, c_void};

native_struct! {
    pub struct SDL_CommonEvent {
        pub r#type: u32,
        pub timestamp: u32,
    }
}

native_struct! {
    pub struct SDL_DisplayEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub display: u32,
        pub event: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub data1: i32,
    }
}

native_struct! {
    pub struct SDL_WindowEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub event: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub data1: i32,
        pub data2: i32,
    }
}

native_struct! {
    pub struct SDL_Keysym {
        pub scancode: i32,
        pub sym: i32,
        pub r#mod: u16,
        pub unused: u32,
    }
}

native_struct! {
    pub struct SDL_KeyboardEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub state: u8,
        pub repeat: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub keysym: SDL_Keysym,
    }
}

native_struct! {
    pub struct SDL_TextEditingEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub text: [c_char; 32],
        pub start: i32,
        pub length: i32,
    }
}

native_struct! {
    /// `text` 由 SDL 分配，需调用 `SDL_free`
    pub struct SDL_TextEditingExtEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub text: *mut c_char,
        pub start: i32,
        pub length: i32,
    }
}

native_struct! {
    pub struct SDL_TextInputEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub text: [c_char; 32],
    }
}

native_struct! {
    pub struct SDL_MouseMotionEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub which: u32,
        pub state: u32,
        pub x: i32,
        pub y: i32,
        pub xrel: i32,
        pub yrel: i32,
    }
}

native_struct! {
    pub struct SDL_MouseButtonEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub which: u32,
        pub button: u8,
        pub state: u8,
        pub clicks: u8,
        pub padding1: u8,
        pub x: i32,
        pub y: i32,
    }
}

native_struct! {
    pub struct SDL_MouseWheelEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub which: u32,
        pub x: i32,
        pub y: i32,
        pub direction: u32,
        pub preciseX: f32,
        pub preciseY: f32,
    }
}

native_struct! {
    pub struct SDL_JoyAxisEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub axis: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub value: i16,
        pub padding4: u16,
    }
}

native_struct! {
    pub struct SDL_JoyBallEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub ball: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub xrel: i16,
        pub yrel: i16,
    }
}

native_struct! {
    pub struct SDL_JoyHatEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub hat: u8,
        pub value: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

native_struct! {
    pub struct SDL_JoyButtonEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub button: u8,
        pub state: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

native_struct! {
    pub struct SDL_JoyDeviceEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
    }
}

native_struct! {
    pub struct SDL_ControllerAxisEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub axis: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub value: i16,
        pub padding4: u16,
    }
}

native_struct! {
    pub struct SDL_ControllerButtonEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub button: u8,
        pub state: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

native_struct! {
    pub struct SDL_ControllerDeviceEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
    }
}

native_struct! {
    pub struct SDL_ControllerTouchpadEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub touchpad: i32,
        pub finger: i32,
        pub x: f32,
        pub y: f32,
        pub pressure: f32,
    }
}

native_struct! {
    pub struct SDL_ControllerSensorEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub sensor: i32,
        pub data: [f32; 3],
    }
}

native_struct! {
    pub struct SDL_AudioDeviceEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: u32,
        pub iscapture: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
    }
}

native_struct! {
    pub struct SDL_SensorEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub which: i32,
        pub data: [f32; 6],
    }
}

native_struct! {
    pub struct SDL_QuitEvent {
        pub r#type: u32,
        pub timestamp: u32,
    }
}

native_struct! {
    pub struct SDL_OSEvent {
        pub r#type: u32,
        pub timestamp: u32,
    }
}

native_struct! {
    pub struct SDL_UserEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub windowID: u32,
        pub code: i32,
        pub data1: *mut c_void,
        pub data2: *mut c_void,
    }
}

native_struct! {
    pub struct SDL_SysWMEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub msg: *mut c_void,
    }
}

native_struct! {
    pub struct SDL_TouchFingerEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub touchId: i64,
        pub fingerId: i64,
        pub x: f32,
        pub y: f32,
        pub dx: f32,
        pub dy: f32,
        pub pressure: f32,
        pub windowID: u32,
    }
}

native_struct! {
    pub struct SDL_MultiGestureEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub touchId: i64,
        pub dTheta: f32,
        pub dDist: f32,
        pub x: f32,
        pub y: f32,
        pub numFingers: u16,
        pub padding: u16,
    }
}

native_struct! {
    pub struct SDL_DollarGestureEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub touchId: i64,
        pub gestureId: i64,
        pub numFingers: u32,
        pub error: f32,
        pub x: f32,
        pub y: f32,
    }
}

native_struct! {
    /// `file` 由 SDL 分配，需调用 `SDL_free`
    pub struct SDL_DropEvent {
        pub r#type: u32,
        pub timestamp: u32,
        pub file: *mut c_char,
        pub windowID: u32,
    }
}

native_union! {
    pub union SDL_Event {
        pub r#type: u32,
        pub common: SDL_CommonEvent,
        pub display: SDL_DisplayEvent,
        pub window: SDL_WindowEvent,
        pub key: SDL_KeyboardEvent,
        pub edit: SDL_TextEditingEvent,
        pub editExt: SDL_TextEditingExtEvent,
        pub text: SDL_TextInputEvent,
        pub motion: SDL_MouseMotionEvent,
        pub button: SDL_MouseButtonEvent,
        pub wheel: SDL_MouseWheelEvent,
        pub jaxis: SDL_JoyAxisEvent,
        pub jball: SDL_JoyBallEvent,
        pub jhat: SDL_JoyHatEvent,
        pub jbutton: SDL_JoyButtonEvent,
        pub jdevice: SDL_JoyDeviceEvent,
        pub caxis: SDL_ControllerAxisEvent,
        pub cbutton: SDL_ControllerButtonEvent,
        pub cdevice: SDL_ControllerDeviceEvent,
        pub ctouchpad: SDL_ControllerTouchpadEvent,
        pub csensor: SDL_ControllerSensorEvent,
        pub adevice: SDL_AudioDeviceEvent,
        pub sensor: SDL_SensorEvent,
        pub quit: SDL_QuitEvent,
        pub user: SDL_UserEvent,
        pub syswm: SDL_SysWMEvent,
        pub tfinger: SDL_TouchFingerEvent,
        pub mgesture: SDL_MultiGestureEvent,
        pub dgesture: SDL_DollarGestureEvent,
        pub drop: SDL_DropEvent,
        pub padding: [u8; 56],
    }
}

const _: () = assert!(std::mem::size_of::<SDL_Event>() == 56);

impl SDL_Event {
    /// 事件类型，任何成员都以此开头
    pub fn event_type(&self) -> u32 {
        // SAFETY: 所有成员的第一个字段都是 u32 类型
        unsafe { self.r#type }
    }
}

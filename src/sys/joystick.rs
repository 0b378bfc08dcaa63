//! 摇杆 GUID 与游戏控制器按键绑定

native_struct! {
    pub struct SDL_JoystickGUID {
        pub data: [u8; 16],
    }
}

native_struct! {
    pub struct SDL_GameControllerButtonBindHat {
        pub hat: i32,
        pub hat_mask: i32,
    }
}

native_union! {
    pub union SDL_GameControllerButtonBindValue {
        pub button: i32,
        pub axis: i32,
        pub hat: SDL_GameControllerButtonBindHat,
    }
}

native_struct! {
    pub struct SDL_GameControllerButtonBind {
        /// `SDL_GameControllerBindType`
        pub bindType: i32,
        pub value: SDL_GameControllerButtonBindValue,
    }
}

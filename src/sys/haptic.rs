//! 力反馈效果结构体

native_struct! {
    pub struct SDL_HapticDirection {
        pub r#type: u8,
        pub dir: [i32; 3],
    }
}

native_struct! {
    pub struct SDL_HapticConstant {
        pub r#type: u16,
        pub direction: SDL_HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub level: i16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

native_struct! {
    pub struct SDL_HapticPeriodic {
        pub r#type: u16,
        pub direction: SDL_HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub period: u16,
        pub magnitude: i16,
        pub offset: i16,
        pub phase: u16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

native_struct! {
    pub struct SDL_HapticCondition {
        pub r#type: u16,
        pub direction: SDL_HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub right_sat: [u16; 3],
        pub left_sat: [u16; 3],
        pub right_coeff: [i16; 3],
        pub left_coeff: [i16; 3],
        pub deadband: [u16; 3],
        pub center: [i16; 3],
    }
}

native_struct! {
    pub struct SDL_HapticRamp {
        pub r#type: u16,
        pub direction: SDL_HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub start: i16,
        pub end: i16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

native_struct! {
    pub struct SDL_HapticLeftRight {
        pub r#type: u16,
        pub length: u32,
        pub large_magnitude: u16,
        pub small_magnitude: u16,
    }
}

native_struct! {
    pub struct SDL_HapticCustom {
        pub r#type: u16,
        pub direction: SDL_HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub channels: u8,
        pub period: u16,
        pub samples: u16,
        pub data: *mut u16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

native_union! {
    /// `type` 决定哪个成员有效
    pub union SDL_HapticEffect {
        pub r#type: u16,
        pub constant: SDL_HapticConstant,
        pub periodic: SDL_HapticPeriodic,
        pub condition: SDL_HapticCondition,
        pub ramp: SDL_HapticRamp,
        pub leftright: SDL_HapticLeftRight,
        pub custom: SDL_HapticCustom,
    }
}

//! 摇杆与游戏控制器常量

constants! {
    SDL_JOYSTICK_AXIS_MAX: i32 = 32767;
    SDL_JOYSTICK_AXIS_MIN: i32 = -32768;

    SDL_HAT_CENTERED: u8 = 0x00;
    SDL_HAT_UP: u8 = 0x01;
    SDL_HAT_RIGHT: u8 = 0x02;
    SDL_HAT_DOWN: u8 = 0x04;
    SDL_HAT_LEFT: u8 = 0x08;
    SDL_HAT_RIGHTUP: u8 = SDL_HAT_RIGHT | SDL_HAT_UP;
    SDL_HAT_RIGHTDOWN: u8 = SDL_HAT_RIGHT | SDL_HAT_DOWN;
    SDL_HAT_LEFTUP: u8 = SDL_HAT_LEFT | SDL_HAT_UP;
    SDL_HAT_LEFTDOWN: u8 = SDL_HAT_LEFT | SDL_HAT_DOWN;

    SDL_JOYSTICK_TYPE_UNKNOWN: i32 = 0;
    SDL_JOYSTICK_TYPE_GAMECONTROLLER: i32 = 1;
    SDL_JOYSTICK_TYPE_WHEEL: i32 = 2;
    SDL_JOYSTICK_TYPE_ARCADE_STICK: i32 = 3;
    SDL_JOYSTICK_TYPE_FLIGHT_STICK: i32 = 4;
    SDL_JOYSTICK_TYPE_DANCE_PAD: i32 = 5;
    SDL_JOYSTICK_TYPE_GUITAR: i32 = 6;
    SDL_JOYSTICK_TYPE_DRUM_KIT: i32 = 7;
    SDL_JOYSTICK_TYPE_ARCADE_PAD: i32 = 8;
    SDL_JOYSTICK_TYPE_THROTTLE: i32 = 9;

    SDL_JOYSTICK_POWER_UNKNOWN: i32 = -1;
    SDL_JOYSTICK_POWER_EMPTY: i32 = 0;
    SDL_JOYSTICK_POWER_LOW: i32 = 1;
    SDL_JOYSTICK_POWER_MEDIUM: i32 = 2;
    SDL_JOYSTICK_POWER_FULL: i32 = 3;
    SDL_JOYSTICK_POWER_WIRED: i32 = 4;
    SDL_JOYSTICK_POWER_MAX: i32 = 5;

    SDL_CONTROLLER_BINDTYPE_NONE: i32 = 0;
    SDL_CONTROLLER_BINDTYPE_BUTTON: i32 = 1;
    SDL_CONTROLLER_BINDTYPE_AXIS: i32 = 2;
    SDL_CONTROLLER_BINDTYPE_HAT: i32 = 3;

    SDL_CONTROLLER_AXIS_INVALID: i32 = -1;
    SDL_CONTROLLER_AXIS_LEFTX: i32 = 0;
    SDL_CONTROLLER_AXIS_LEFTY: i32 = 1;
    SDL_CONTROLLER_AXIS_RIGHTX: i32 = 2;
    SDL_CONTROLLER_AXIS_RIGHTY: i32 = 3;
    SDL_CONTROLLER_AXIS_TRIGGERLEFT: i32 = 4;
    SDL_CONTROLLER_AXIS_TRIGGERRIGHT: i32 = 5;
    SDL_CONTROLLER_AXIS_MAX: i32 = 6;

    SDL_CONTROLLER_BUTTON_INVALID: i32 = -1;
    SDL_CONTROLLER_BUTTON_A: i32 = 0;
    SDL_CONTROLLER_BUTTON_B: i32 = 1;
    SDL_CONTROLLER_BUTTON_X: i32 = 2;
    SDL_CONTROLLER_BUTTON_Y: i32 = 3;
    SDL_CONTROLLER_BUTTON_BACK: i32 = 4;
    SDL_CONTROLLER_BUTTON_GUIDE: i32 = 5;
    SDL_CONTROLLER_BUTTON_START: i32 = 6;
    SDL_CONTROLLER_BUTTON_LEFTSTICK: i32 = 7;
    SDL_CONTROLLER_BUTTON_RIGHTSTICK: i32 = 8;
    SDL_CONTROLLER_BUTTON_LEFTSHOULDER: i32 = 9;
    SDL_CONTROLLER_BUTTON_RIGHTSHOULDER: i32 = 10;
    SDL_CONTROLLER_BUTTON_DPAD_UP: i32 = 11;
    SDL_CONTROLLER_BUTTON_DPAD_DOWN: i32 = 12;
    SDL_CONTROLLER_BUTTON_DPAD_LEFT: i32 = 13;
    SDL_CONTROLLER_BUTTON_DPAD_RIGHT: i32 = 14;
    SDL_CONTROLLER_BUTTON_MISC1: i32 = 15;
    SDL_CONTROLLER_BUTTON_PADDLE1: i32 = 16;
    SDL_CONTROLLER_BUTTON_PADDLE2: i32 = 17;
    SDL_CONTROLLER_BUTTON_PADDLE3: i32 = 18;
    SDL_CONTROLLER_BUTTON_PADDLE4: i32 = 19;
    SDL_CONTROLLER_BUTTON_TOUCHPAD: i32 = 20;
    SDL_CONTROLLER_BUTTON_MAX: i32 = 21;
}

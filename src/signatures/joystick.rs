//! 摇杆与游戏控制器函数签名
//!
//! 这些符号位于 SDL2 核心库中。GUID 与按键绑定按值传递。

use crate::signatures::NativeType::*;

const GUID: crate::signatures::NativeType = Aggregate("SDL_JoystickGUID");
const BIND: crate::signatures::NativeType = Aggregate("SDL_GameControllerButtonBind");

signatures! {
    pub static FUNCTIONS = {
        // SDL_joystick.h
        SDL_LockJoysticks() -> Void;
        SDL_UnlockJoysticks() -> Void;
        SDL_NumJoysticks() -> I32;
        SDL_JoystickNameForIndex(I32) -> CStr;
        SDL_JoystickGetDeviceGUID(I32) -> GUID;
        SDL_JoystickGetDeviceInstanceID(I32) -> I32;
        SDL_JoystickOpen(I32) -> Ptr;
        SDL_JoystickFromInstanceID(I32) -> Ptr;
        SDL_JoystickName(Ptr) -> CStr;
        SDL_JoystickGetGUID(Ptr) -> GUID;
        SDL_JoystickGetGUIDString(GUID, Ptr, I32) -> Void;
        SDL_JoystickGetGUIDFromString(CStr) -> GUID;
        SDL_JoystickGetAttached(Ptr) -> I32;
        SDL_JoystickInstanceID(Ptr) -> I32;
        SDL_JoystickNumAxes(Ptr) -> I32;
        SDL_JoystickNumBalls(Ptr) -> I32;
        SDL_JoystickNumHats(Ptr) -> I32;
        SDL_JoystickNumButtons(Ptr) -> I32;
        SDL_JoystickUpdate() -> Void;
        SDL_JoystickEventState(I32) -> I32;
        SDL_JoystickGetAxis(Ptr, I32) -> I16;
        SDL_JoystickGetHat(Ptr, I32) -> U8;
        SDL_JoystickGetBall(Ptr, I32, Ptr, Ptr) -> I32;
        SDL_JoystickGetButton(Ptr, I32) -> U8;
        SDL_JoystickRumble(Ptr, U16, U16, U32) -> I32;
        SDL_JoystickCurrentPowerLevel(Ptr) -> I32;
        SDL_JoystickClose(Ptr) -> Void;

        // SDL_gamecontroller.h
        SDL_GameControllerAddMappingsFromRW(Ptr, I32) -> I32;
        SDL_GameControllerAddMapping(CStr) -> I32;
        SDL_GameControllerNumMappings() -> I32;
        SDL_GameControllerMappingForIndex(I32) -> CStr;
        SDL_GameControllerMappingForGUID(GUID) -> CStr;
        SDL_GameControllerMapping(Ptr) -> CStr;
        SDL_IsGameController(I32) -> I32;
        SDL_GameControllerNameForIndex(I32) -> CStr;
        SDL_GameControllerOpen(I32) -> Ptr;
        SDL_GameControllerFromInstanceID(I32) -> Ptr;
        SDL_GameControllerName(Ptr) -> CStr;
        SDL_GameControllerGetAttached(Ptr) -> I32;
        SDL_GameControllerGetJoystick(Ptr) -> Ptr;
        SDL_GameControllerEventState(I32) -> I32;
        SDL_GameControllerUpdate() -> Void;
        SDL_GameControllerGetAxisFromString(CStr) -> I32;
        SDL_GameControllerGetStringForAxis(I32) -> CStr;
        SDL_GameControllerGetBindForAxis(Ptr, I32) -> BIND;
        SDL_GameControllerGetAxis(Ptr, I32) -> I16;
        SDL_GameControllerGetButtonFromString(CStr) -> I32;
        SDL_GameControllerGetStringForButton(I32) -> CStr;
        SDL_GameControllerGetBindForButton(Ptr, I32) -> BIND;
        SDL_GameControllerGetButton(Ptr, I32) -> U8;
        SDL_GameControllerRumble(Ptr, U16, U16, U32) -> I32;
        SDL_GameControllerClose(Ptr) -> Void;
    }
}

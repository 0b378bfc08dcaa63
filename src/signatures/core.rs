//! SDL2 核心库函数签名（SDL 2.0.22）
//!
//! 枚举类型按 `int` 声明，`SDL_bool` 同样为 `int`。

use crate::signatures::NativeType::*;

signatures! {
    pub static FUNCTIONS = {
        // SDL.h
        SDL_Init(U32) -> I32;
        SDL_InitSubSystem(U32) -> I32;
        SDL_QuitSubSystem(U32) -> Void;
        SDL_WasInit(U32) -> U32;
        SDL_Quit() -> Void;

        // SDL_stdinc.h
        SDL_malloc(Usize) -> Ptr;
        SDL_free(Ptr) -> Void;

        // SDL_version.h
        SDL_GetVersion(Ptr) -> Void;
        SDL_GetRevision() -> CStr;
        SDL_GetRevisionNumber() -> I32;

        // SDL_error.h
        SDL_GetError() -> CStr;
        SDL_GetErrorMsg(Ptr, I32) -> CStr;
        SDL_ClearError() -> Void;

        // SDL_platform.h
        SDL_GetPlatform() -> CStr;

        // SDL_rwops.h
        SDL_RWFromFile(CStr, CStr) -> Ptr;
        SDL_RWFromFP(Ptr, I32) -> Ptr;
        SDL_RWFromMem(Ptr, I32) -> Ptr;
        SDL_RWFromConstMem(Ptr, I32) -> Ptr;
        SDL_AllocRW() -> Ptr;
        SDL_FreeRW(Ptr) -> Void;
        SDL_RWsize(Ptr) -> I64;
        SDL_RWseek(Ptr, I64, I32) -> I64;
        SDL_RWtell(Ptr) -> I64;
        SDL_RWread(Ptr, Ptr, Usize, Usize) -> Usize;
        SDL_RWwrite(Ptr, Ptr, Usize, Usize) -> Usize;
        SDL_RWclose(Ptr) -> I32;
        SDL_LoadFile_RW(Ptr, Ptr, I32) -> Ptr;
        SDL_LoadFile(CStr, Ptr) -> Ptr;
        SDL_ReadU8(Ptr) -> U8;
        SDL_ReadLE16(Ptr) -> U16;
        SDL_ReadBE16(Ptr) -> U16;
        SDL_ReadLE32(Ptr) -> U32;
        SDL_ReadBE32(Ptr) -> U32;
        SDL_ReadLE64(Ptr) -> U64;
        SDL_ReadBE64(Ptr) -> U64;
        SDL_WriteU8(Ptr, U8) -> Usize;
        SDL_WriteLE16(Ptr, U16) -> Usize;
        SDL_WriteBE16(Ptr, U16) -> Usize;
        SDL_WriteLE32(Ptr, U32) -> Usize;
        SDL_WriteBE32(Ptr, U32) -> Usize;
        SDL_WriteLE64(Ptr, U64) -> Usize;
        SDL_WriteBE64(Ptr, U64) -> Usize;

        // SDL_rect.h
        SDL_HasIntersection(Ptr, Ptr) -> I32;
        SDL_IntersectRect(Ptr, Ptr, Ptr) -> I32;
        SDL_UnionRect(Ptr, Ptr, Ptr) -> Void;
        SDL_EnclosePoints(Ptr, I32, Ptr, Ptr) -> I32;
        SDL_IntersectRectAndLine(Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_HasIntersectionF(Ptr, Ptr) -> I32;
        SDL_IntersectFRect(Ptr, Ptr, Ptr) -> I32;
        SDL_UnionFRect(Ptr, Ptr, Ptr) -> Void;
        SDL_EncloseFPoints(Ptr, I32, Ptr, Ptr) -> I32;
        SDL_IntersectFRectAndLine(Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;

        // SDL_pixels.h
        SDL_GetPixelFormatName(U32) -> CStr;
        SDL_PixelFormatEnumToMasks(U32, Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_MasksToPixelFormatEnum(I32, U32, U32, U32, U32) -> U32;
        SDL_AllocFormat(U32) -> Ptr;
        SDL_FreeFormat(Ptr) -> Void;
        SDL_AllocPalette(I32) -> Ptr;
        SDL_SetPixelFormatPalette(Ptr, Ptr) -> I32;
        SDL_SetPaletteColors(Ptr, Ptr, I32, I32) -> I32;
        SDL_FreePalette(Ptr) -> Void;
        SDL_MapRGB(Ptr, U8, U8, U8) -> U32;
        SDL_MapRGBA(Ptr, U8, U8, U8, U8) -> U32;
        SDL_GetRGB(U32, Ptr, Ptr, Ptr, Ptr) -> Void;
        SDL_GetRGBA(U32, Ptr, Ptr, Ptr, Ptr, Ptr) -> Void;
        SDL_CalculateGammaRamp(F32, Ptr) -> Void;

        // SDL_surface.h
        SDL_CreateRGBSurface(U32, I32, I32, I32, U32, U32, U32, U32) -> Ptr;
        SDL_CreateRGBSurfaceWithFormat(U32, I32, I32, I32, U32) -> Ptr;
        SDL_CreateRGBSurfaceFrom(Ptr, I32, I32, I32, I32, U32, U32, U32, U32) -> Ptr;
        SDL_CreateRGBSurfaceWithFormatFrom(Ptr, I32, I32, I32, I32, U32) -> Ptr;
        SDL_FreeSurface(Ptr) -> Void;
        SDL_SetSurfacePalette(Ptr, Ptr) -> I32;
        SDL_LockSurface(Ptr) -> I32;
        SDL_UnlockSurface(Ptr) -> Void;
        SDL_LoadBMP_RW(Ptr, I32) -> Ptr;
        SDL_SaveBMP_RW(Ptr, Ptr, I32) -> I32;
        SDL_SetSurfaceRLE(Ptr, I32) -> I32;
        SDL_HasSurfaceRLE(Ptr) -> I32;
        SDL_SetColorKey(Ptr, I32, U32) -> I32;
        SDL_HasColorKey(Ptr) -> I32;
        SDL_GetColorKey(Ptr, Ptr) -> I32;
        SDL_SetSurfaceColorMod(Ptr, U8, U8, U8) -> I32;
        SDL_GetSurfaceColorMod(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetSurfaceAlphaMod(Ptr, U8) -> I32;
        SDL_GetSurfaceAlphaMod(Ptr, Ptr) -> I32;
        SDL_SetSurfaceBlendMode(Ptr, I32) -> I32;
        SDL_GetSurfaceBlendMode(Ptr, Ptr) -> I32;
        SDL_SetClipRect(Ptr, Ptr) -> I32;
        SDL_GetClipRect(Ptr, Ptr) -> Void;
        SDL_DuplicateSurface(Ptr) -> Ptr;
        SDL_ConvertSurface(Ptr, Ptr, U32) -> Ptr;
        SDL_ConvertSurfaceFormat(Ptr, U32, U32) -> Ptr;
        SDL_ConvertPixels(I32, I32, U32, Ptr, I32, U32, Ptr, I32) -> I32;
        SDL_FillRect(Ptr, Ptr, U32) -> I32;
        SDL_FillRects(Ptr, Ptr, I32, U32) -> I32;
        SDL_UpperBlit(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_LowerBlit(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SoftStretch(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_UpperBlitScaled(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_LowerBlitScaled(Ptr, Ptr, Ptr, Ptr) -> I32;

        // SDL_events.h
        SDL_PumpEvents() -> Void;
        SDL_PeepEvents(Ptr, I32, I32, U32, U32) -> I32;
        SDL_HasEvent(U32) -> I32;
        SDL_HasEvents(U32, U32) -> I32;
        SDL_FlushEvent(U32) -> Void;
        SDL_FlushEvents(U32, U32) -> Void;
        SDL_PollEvent(Ptr) -> I32;
        SDL_WaitEvent(Ptr) -> I32;
        SDL_WaitEventTimeout(Ptr, I32) -> I32;
        SDL_PushEvent(Ptr) -> I32;
        SDL_SetEventFilter(FnPtr, Ptr) -> Void;
        SDL_GetEventFilter(Ptr, Ptr) -> I32;
        SDL_AddEventWatch(FnPtr, Ptr) -> Void;
        SDL_DelEventWatch(FnPtr, Ptr) -> Void;
        SDL_FilterEvents(FnPtr, Ptr) -> Void;
        SDL_EventState(U32, I32) -> U8;
        SDL_RegisterEvents(I32) -> U32;

        // SDL_video.h
        SDL_GetNumVideoDrivers() -> I32;
        SDL_GetVideoDriver(I32) -> CStr;
        SDL_VideoInit(CStr) -> I32;
        SDL_VideoQuit() -> Void;
        SDL_GetCurrentVideoDriver() -> CStr;
        SDL_GetNumVideoDisplays() -> I32;
        SDL_GetDisplayName(I32) -> CStr;
        SDL_GetDisplayBounds(I32, Ptr) -> I32;
        SDL_GetDisplayUsableBounds(I32, Ptr) -> I32;
        SDL_GetDisplayDPI(I32, Ptr, Ptr, Ptr) -> I32;
        SDL_GetNumDisplayModes(I32) -> I32;
        SDL_GetDisplayMode(I32, I32, Ptr) -> I32;
        SDL_GetDesktopDisplayMode(I32, Ptr) -> I32;
        SDL_GetCurrentDisplayMode(I32, Ptr) -> I32;
        SDL_GetClosestDisplayMode(I32, Ptr, Ptr) -> Ptr;
        SDL_GetWindowDisplayIndex(Ptr) -> I32;
        SDL_SetWindowDisplayMode(Ptr, Ptr) -> I32;
        SDL_GetWindowDisplayMode(Ptr, Ptr) -> I32;
        SDL_GetWindowPixelFormat(Ptr) -> U32;
        SDL_CreateWindow(CStr, I32, I32, I32, I32, U32) -> Ptr;
        SDL_CreateWindowFrom(Ptr) -> Ptr;
        SDL_GetWindowID(Ptr) -> U32;
        SDL_GetWindowFromID(U32) -> Ptr;
        SDL_GetWindowFlags(Ptr) -> U32;
        SDL_SetWindowTitle(Ptr, CStr) -> Void;
        SDL_GetWindowTitle(Ptr) -> CStr;
        SDL_SetWindowIcon(Ptr, Ptr) -> Void;
        SDL_SetWindowData(Ptr, CStr, Ptr) -> Ptr;
        SDL_GetWindowData(Ptr, CStr) -> Ptr;
        SDL_SetWindowPosition(Ptr, I32, I32) -> Void;
        SDL_GetWindowPosition(Ptr, Ptr, Ptr) -> Void;
        SDL_SetWindowSize(Ptr, I32, I32) -> Void;
        SDL_GetWindowSize(Ptr, Ptr, Ptr) -> Void;
        SDL_GetWindowBordersSize(Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetWindowMinimumSize(Ptr, I32, I32) -> Void;
        SDL_GetWindowMinimumSize(Ptr, Ptr, Ptr) -> Void;
        SDL_SetWindowMaximumSize(Ptr, I32, I32) -> Void;
        SDL_GetWindowMaximumSize(Ptr, Ptr, Ptr) -> Void;
        SDL_SetWindowBordered(Ptr, I32) -> Void;
        SDL_SetWindowResizable(Ptr, I32) -> Void;
        SDL_SetWindowAlwaysOnTop(Ptr, I32) -> Void;
        SDL_ShowWindow(Ptr) -> Void;
        SDL_HideWindow(Ptr) -> Void;
        SDL_RaiseWindow(Ptr) -> Void;
        SDL_MaximizeWindow(Ptr) -> Void;
        SDL_MinimizeWindow(Ptr) -> Void;
        SDL_RestoreWindow(Ptr) -> Void;
        SDL_SetWindowFullscreen(Ptr, U32) -> I32;
        SDL_GetWindowSurface(Ptr) -> Ptr;
        SDL_UpdateWindowSurface(Ptr) -> I32;
        SDL_UpdateWindowSurfaceRects(Ptr, Ptr, I32) -> I32;
        SDL_SetWindowGrab(Ptr, I32) -> Void;
        SDL_GetWindowGrab(Ptr) -> I32;
        SDL_SetWindowKeyboardGrab(Ptr, I32) -> Void;
        SDL_SetWindowMouseGrab(Ptr, I32) -> Void;
        SDL_GetGrabbedWindow() -> Ptr;
        SDL_SetWindowBrightness(Ptr, F32) -> I32;
        SDL_GetWindowBrightness(Ptr) -> F32;
        SDL_SetWindowOpacity(Ptr, F32) -> I32;
        SDL_GetWindowOpacity(Ptr, Ptr) -> I32;
        SDL_SetWindowGammaRamp(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_GetWindowGammaRamp(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetWindowHitTest(Ptr, FnPtr, Ptr) -> I32;
        SDL_DestroyWindow(Ptr) -> Void;
        SDL_IsScreenSaverEnabled() -> I32;
        SDL_EnableScreenSaver() -> Void;
        SDL_DisableScreenSaver() -> Void;
        SDL_GL_LoadLibrary(CStr) -> I32;
        SDL_GL_GetProcAddress(CStr) -> Ptr;
        SDL_GL_UnloadLibrary() -> Void;
        SDL_GL_ExtensionSupported(CStr) -> I32;
        SDL_GL_ResetAttributes() -> Void;
        SDL_GL_SetAttribute(I32, I32) -> I32;
        SDL_GL_GetAttribute(I32, Ptr) -> I32;
        SDL_GL_CreateContext(Ptr) -> Ptr;
        SDL_GL_MakeCurrent(Ptr, Ptr) -> I32;
        SDL_GL_GetCurrentWindow() -> Ptr;
        SDL_GL_GetCurrentContext() -> Ptr;
        SDL_GL_GetDrawableSize(Ptr, Ptr, Ptr) -> Void;
        SDL_GL_SetSwapInterval(I32) -> I32;
        SDL_GL_GetSwapInterval() -> I32;
        SDL_GL_SwapWindow(Ptr) -> Void;
        SDL_GL_DeleteContext(Ptr) -> Void;

        // SDL_mouse.h
        SDL_GetMouseFocus() -> Ptr;
        SDL_GetMouseState(Ptr, Ptr) -> U32;
        SDL_GetGlobalMouseState(Ptr, Ptr) -> U32;
        SDL_GetRelativeMouseState(Ptr, Ptr) -> U32;
        SDL_WarpMouseInWindow(Ptr, I32, I32) -> Void;
        SDL_WarpMouseGlobal(I32, I32) -> I32;
        SDL_SetRelativeMouseMode(I32) -> I32;
        SDL_CaptureMouse(I32) -> I32;
        SDL_GetRelativeMouseMode() -> I32;
        SDL_CreateCursor(Ptr, Ptr, I32, I32, I32, I32) -> Ptr;
        SDL_CreateColorCursor(Ptr, I32, I32) -> Ptr;
        SDL_CreateSystemCursor(I32) -> Ptr;
        SDL_SetCursor(Ptr) -> Void;
        SDL_GetCursor() -> Ptr;
        SDL_GetDefaultCursor() -> Ptr;
        SDL_FreeCursor(Ptr) -> Void;
        SDL_ShowCursor(I32) -> I32;

        // SDL_haptic.h
        SDL_NumHaptics() -> I32;
        SDL_HapticName(I32) -> CStr;
        SDL_HapticOpen(I32) -> Ptr;
        SDL_HapticOpened(I32) -> I32;
        SDL_HapticIndex(Ptr) -> I32;
        SDL_MouseIsHaptic() -> I32;
        SDL_HapticOpenFromMouse() -> Ptr;
        SDL_JoystickIsHaptic(Ptr) -> I32;
        SDL_HapticOpenFromJoystick(Ptr) -> Ptr;
        SDL_HapticClose(Ptr) -> Void;
        SDL_HapticNumEffects(Ptr) -> I32;
        SDL_HapticNumEffectsPlaying(Ptr) -> I32;
        SDL_HapticQuery(Ptr) -> U32;
        SDL_HapticNumAxes(Ptr) -> I32;
        SDL_HapticEffectSupported(Ptr, Ptr) -> I32;
        SDL_HapticNewEffect(Ptr, Ptr) -> I32;
        SDL_HapticUpdateEffect(Ptr, I32, Ptr) -> I32;
        SDL_HapticRunEffect(Ptr, I32, U32) -> I32;
        SDL_HapticStopEffect(Ptr, I32) -> I32;
        SDL_HapticDestroyEffect(Ptr, I32) -> Void;
        SDL_HapticGetEffectStatus(Ptr, I32) -> I32;
        SDL_HapticSetGain(Ptr, I32) -> I32;
        SDL_HapticSetAutocenter(Ptr, I32) -> I32;
        SDL_HapticPause(Ptr) -> I32;
        SDL_HapticUnpause(Ptr) -> I32;
        SDL_HapticStopAll(Ptr) -> I32;
        SDL_HapticRumbleSupported(Ptr) -> I32;
        SDL_HapticRumbleInit(Ptr) -> I32;
        SDL_HapticRumblePlay(Ptr, F32, U32) -> I32;
        SDL_HapticRumbleStop(Ptr) -> I32;

        // SDL_render.h
        SDL_GetNumRenderDrivers() -> I32;
        SDL_GetRenderDriverInfo(I32, Ptr) -> I32;
        SDL_CreateWindowAndRenderer(I32, I32, U32, Ptr, Ptr) -> I32;
        SDL_CreateRenderer(Ptr, I32, U32) -> Ptr;
        SDL_CreateSoftwareRenderer(Ptr) -> Ptr;
        SDL_GetRenderer(Ptr) -> Ptr;
        SDL_GetRendererInfo(Ptr, Ptr) -> I32;
        SDL_GetRendererOutputSize(Ptr, Ptr, Ptr) -> I32;
        SDL_CreateTexture(Ptr, U32, I32, I32, I32) -> Ptr;
        SDL_CreateTextureFromSurface(Ptr, Ptr) -> Ptr;
        SDL_QueryTexture(Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetTextureColorMod(Ptr, U8, U8, U8) -> I32;
        SDL_GetTextureColorMod(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetTextureAlphaMod(Ptr, U8) -> I32;
        SDL_GetTextureAlphaMod(Ptr, Ptr) -> I32;
        SDL_SetTextureBlendMode(Ptr, I32) -> I32;
        SDL_GetTextureBlendMode(Ptr, Ptr) -> I32;
        SDL_UpdateTexture(Ptr, Ptr, Ptr, I32) -> I32;
        SDL_UpdateYUVTexture(Ptr, Ptr, Ptr, I32, Ptr, I32, Ptr, I32) -> I32;
        SDL_LockTexture(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_UnlockTexture(Ptr) -> Void;
        SDL_RenderTargetSupported(Ptr) -> I32;
        SDL_SetRenderTarget(Ptr, Ptr) -> I32;
        SDL_GetRenderTarget(Ptr) -> Ptr;
        SDL_RenderSetLogicalSize(Ptr, I32, I32) -> I32;
        SDL_RenderGetLogicalSize(Ptr, Ptr, Ptr) -> Void;
        SDL_RenderSetIntegerScale(Ptr, I32) -> I32;
        SDL_RenderSetViewport(Ptr, Ptr) -> I32;
        SDL_RenderGetViewport(Ptr, Ptr) -> Void;
        SDL_RenderSetClipRect(Ptr, Ptr) -> I32;
        SDL_RenderGetClipRect(Ptr, Ptr) -> Void;
        SDL_RenderIsClipEnabled(Ptr) -> I32;
        SDL_RenderSetScale(Ptr, F32, F32) -> I32;
        SDL_RenderGetScale(Ptr, Ptr, Ptr) -> Void;
        SDL_SetRenderDrawColor(Ptr, U8, U8, U8, U8) -> I32;
        SDL_GetRenderDrawColor(Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_SetRenderDrawBlendMode(Ptr, I32) -> I32;
        SDL_GetRenderDrawBlendMode(Ptr, Ptr) -> I32;
        SDL_RenderClear(Ptr) -> I32;
        SDL_RenderDrawPoint(Ptr, I32, I32) -> I32;
        SDL_RenderDrawPoints(Ptr, Ptr, I32) -> I32;
        SDL_RenderDrawLine(Ptr, I32, I32, I32, I32) -> I32;
        SDL_RenderDrawLines(Ptr, Ptr, I32) -> I32;
        SDL_RenderDrawRect(Ptr, Ptr) -> I32;
        SDL_RenderDrawRects(Ptr, Ptr, I32) -> I32;
        SDL_RenderFillRect(Ptr, Ptr) -> I32;
        SDL_RenderFillRects(Ptr, Ptr, I32) -> I32;
        SDL_RenderCopy(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_RenderCopyEx(Ptr, Ptr, Ptr, Ptr, F64, Ptr, I32) -> I32;
        SDL_RenderDrawPointF(Ptr, F32, F32) -> I32;
        SDL_RenderDrawLineF(Ptr, F32, F32, F32, F32) -> I32;
        SDL_RenderDrawRectF(Ptr, Ptr) -> I32;
        SDL_RenderFillRectF(Ptr, Ptr) -> I32;
        SDL_RenderCopyF(Ptr, Ptr, Ptr, Ptr) -> I32;
        SDL_RenderCopyExF(Ptr, Ptr, Ptr, Ptr, F64, Ptr, I32) -> I32;
        SDL_RenderGeometry(Ptr, Ptr, Ptr, I32, Ptr, I32) -> I32;
        SDL_RenderReadPixels(Ptr, Ptr, U32, Ptr, I32) -> I32;
        SDL_RenderPresent(Ptr) -> Void;
        SDL_RenderSetVSync(Ptr, I32) -> I32;
        SDL_DestroyTexture(Ptr) -> Void;
        SDL_DestroyRenderer(Ptr) -> Void;
        SDL_GL_BindTexture(Ptr, Ptr, Ptr) -> I32;
        SDL_GL_UnbindTexture(Ptr) -> I32;

        // SDL_clipboard.h
        SDL_SetClipboardText(CStr) -> I32;
        SDL_GetClipboardText() -> CStr;
        SDL_HasClipboardText() -> I32;

        // SDL_gesture.h
        SDL_RecordGesture(I64) -> I32;
        SDL_SaveAllDollarTemplates(Ptr) -> I32;
        SDL_SaveDollarTemplate(I64, Ptr) -> I32;
        SDL_LoadDollarTemplates(I64, Ptr) -> I32;

        // SDL_touch.h
        SDL_GetNumTouchDevices() -> I32;
        SDL_GetTouchDevice(I32) -> I64;
        SDL_GetTouchDeviceType(I64) -> I32;
        SDL_GetNumTouchFingers(I64) -> I32;
        SDL_GetTouchFinger(I64, I32) -> Ptr;

        // SDL_hints.h
        SDL_SetHintWithPriority(CStr, CStr, I32) -> I32;
        SDL_SetHint(CStr, CStr) -> I32;
        SDL_GetHint(CStr) -> CStr;
        SDL_GetHintBoolean(CStr, I32) -> I32;
        SDL_AddHintCallback(CStr, FnPtr, Ptr) -> Void;
        SDL_DelHintCallback(CStr, FnPtr, Ptr) -> Void;
        SDL_ClearHints() -> Void;

        // SDL_timer.h
        SDL_GetTicks() -> U32;
        SDL_GetTicks64() -> U64;
        SDL_GetPerformanceCounter() -> U64;
        SDL_GetPerformanceFrequency() -> U64;
        SDL_Delay(U32) -> Void;
        SDL_AddTimer(U32, FnPtr, Ptr) -> I32;
        SDL_RemoveTimer(I32) -> I32;

        // SDL_keyboard.h
        SDL_GetKeyboardFocus() -> Ptr;
        SDL_GetKeyboardState(Ptr) -> Ptr;
        SDL_GetModState() -> I32;
        SDL_SetModState(I32) -> Void;
        SDL_GetKeyFromScancode(I32) -> I32;
        SDL_GetScancodeFromKey(I32) -> I32;
        SDL_GetScancodeName(I32) -> CStr;
        SDL_GetScancodeFromName(CStr) -> I32;
        SDL_GetKeyName(I32) -> CStr;
        SDL_GetKeyFromName(CStr) -> I32;
        SDL_StartTextInput() -> Void;
        SDL_IsTextInputActive() -> I32;
        SDL_StopTextInput() -> Void;
        SDL_SetTextInputRect(Ptr) -> Void;
        SDL_HasScreenKeyboardSupport() -> I32;
        SDL_IsScreenKeyboardShown(Ptr) -> I32;

        // SDL_audio.h
        SDL_GetNumAudioDrivers() -> I32;
        SDL_GetAudioDriver(I32) -> CStr;
        SDL_AudioInit(CStr) -> I32;
        SDL_AudioQuit() -> Void;
        SDL_GetCurrentAudioDriver() -> CStr;
        SDL_OpenAudio(Ptr, Ptr) -> I32;
        SDL_GetNumAudioDevices(I32) -> I32;
        SDL_GetAudioDeviceName(I32, I32) -> CStr;
        SDL_OpenAudioDevice(CStr, I32, Ptr, Ptr, I32) -> U32;
        SDL_GetAudioStatus() -> I32;
        SDL_GetAudioDeviceStatus(U32) -> I32;
        SDL_PauseAudio(I32) -> Void;
        SDL_PauseAudioDevice(U32, I32) -> Void;
        SDL_LoadWAV_RW(Ptr, I32, Ptr, Ptr, Ptr) -> Ptr;
        SDL_FreeWAV(Ptr) -> Void;
        SDL_BuildAudioCVT(Ptr, U16, U8, I32, U16, U8, I32) -> I32;
        SDL_ConvertAudio(Ptr) -> I32;
        SDL_MixAudio(Ptr, Ptr, U32, I32) -> Void;
        SDL_MixAudioFormat(Ptr, Ptr, U16, U32, I32) -> Void;
        SDL_QueueAudio(U32, Ptr, U32) -> I32;
        SDL_DequeueAudio(U32, Ptr, U32) -> U32;
        SDL_GetQueuedAudioSize(U32) -> U32;
        SDL_ClearQueuedAudio(U32) -> Void;
        SDL_LockAudio() -> Void;
        SDL_LockAudioDevice(U32) -> Void;
        SDL_UnlockAudio() -> Void;
        SDL_UnlockAudioDevice(U32) -> Void;
        SDL_CloseAudio() -> Void;
        SDL_CloseAudioDevice(U32) -> Void;

        // SDL_shape.h
        SDL_CreateShapedWindow(CStr, U32, U32, U32, U32, U32) -> Ptr;
        SDL_IsShapedWindow(Ptr) -> I32;
        SDL_SetWindowShape(Ptr, Ptr, Ptr) -> I32;
        SDL_GetShapedWindowMode(Ptr, Ptr) -> I32;

        // SDL_log.h
        SDL_LogSetAllPriority(I32) -> Void;
        SDL_LogSetPriority(I32, I32) -> Void;
        SDL_LogGetPriority(I32) -> I32;
        SDL_LogResetPriorities() -> Void;
        SDL_LogGetOutputFunction(Ptr, Ptr) -> Void;
        SDL_LogSetOutputFunction(FnPtr, Ptr) -> Void;

        // SDL_cpuinfo.h
        SDL_GetCPUCount() -> I32;
        SDL_GetCPUCacheLineSize() -> I32;
        SDL_HasSSE() -> I32;
        SDL_HasSSE2() -> I32;
        SDL_HasAVX() -> I32;
        SDL_HasAVX2() -> I32;
        SDL_HasNEON() -> I32;
        SDL_GetSystemRAM() -> I32;
        SDL_SIMDGetAlignment() -> Usize;

        // SDL_filesystem.h
        SDL_GetBasePath() -> CStr;
        SDL_GetPrefPath(CStr, CStr) -> CStr;

        // SDL_power.h
        SDL_GetPowerInfo(Ptr, Ptr) -> I32;

        // SDL_messagebox.h
        SDL_ShowMessageBox(Ptr, Ptr) -> I32;
        SDL_ShowSimpleMessageBox(U32, CStr, CStr, Ptr) -> I32;
    }
}

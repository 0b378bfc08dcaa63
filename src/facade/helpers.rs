//! 头文件中以宏定义、基于导出函数组合而成的调用
//!
//! 所需的导出函数未绑定时（例如被过滤掉）返回 `FunctionNotBound`。
//! 这些调用都会进入原生代码，因此都是 `unsafe` 的：
//! 调用方需保证对应子系统已初始化、指针参数有效。

use std::ffi::c_void;
use std::os::raw::c_char;

use super::cstring::{from_c_string, to_c_string};
use crate::consts::core::{SDL_PEEKEVENT, SDL_QUIT};
use crate::core::error::LinkResult;
use crate::namespace::Namespace;
use crate::sys::{Mix_Chunk, SDL_AudioSpec, SDL_Rect, SDL_Surface};

type RWFromFile = unsafe extern "C" fn(*const c_char, *const c_char) -> *mut c_void;
type Blit = unsafe extern "C" fn(*mut SDL_Surface, *const SDL_Rect, *mut SDL_Surface, *mut SDL_Rect) -> i32;

impl Namespace {
    unsafe fn open_read(&self, file: &str) -> LinkResult<*mut c_void> {
        let rw_from_file = self.function::<RWFromFile>("SDL_RWFromFile")?;
        let file = to_c_string(file)?;
        Ok(rw_from_file(file.as_ptr(), b"rb\0".as_ptr() as *const c_char))
    }

    /// `SDL_GetError`，没有错误时返回 `None`
    ///
    /// # Safety
    ///
    /// 核心库已加载即可调用，不要求已初始化。
    pub unsafe fn last_error(&self) -> LinkResult<Option<String>> {
        let get_error = self.function::<unsafe extern "C" fn() -> *const c_char>("SDL_GetError")?;
        Ok(from_c_string(get_error()).filter(|message| !message.is_empty()))
    }

    /// `SDL_QuitRequested`：泵送事件后查看队列中是否有退出事件
    ///
    /// # Safety
    ///
    /// 事件子系统已初始化，且在初始化视频的线程上调用。
    pub unsafe fn quit_requested(&self) -> LinkResult<bool> {
        let pump = self.function::<unsafe extern "C" fn()>("SDL_PumpEvents")?;
        let peep = self.function::<unsafe extern "C" fn(*mut c_void, i32, i32, u32, u32) -> i32>(
            "SDL_PeepEvents",
        )?;
        pump();
        Ok(peep(std::ptr::null_mut(), 0, SDL_PEEKEVENT, SDL_QUIT, SDL_QUIT) > 0)
    }

    /// `SDL_LoadWAV`：以只读方式打开文件并交给 `SDL_LoadWAV_RW`（自动关闭）
    ///
    /// # Safety
    ///
    /// 输出指针有效；成功时 `*audio_buf` 需用 `SDL_FreeWAV` 释放。
    pub unsafe fn load_wav(
        &self,
        file: &str,
        spec: *mut SDL_AudioSpec,
        audio_buf: *mut *mut u8,
        audio_len: *mut u32,
    ) -> LinkResult<*mut SDL_AudioSpec> {
        let load = self.function::<
            unsafe extern "C" fn(*mut c_void, i32, *mut SDL_AudioSpec, *mut *mut u8, *mut u32) -> *mut SDL_AudioSpec,
        >("SDL_LoadWAV_RW")?;
        let rw = self.open_read(file)?;
        Ok(load(rw, 1, spec, audio_buf, audio_len))
    }

    /// `SDL_BlitSurface`，即 `SDL_UpperBlit`
    ///
    /// # Safety
    ///
    /// 表面指针有效，矩形指针为空或有效。
    pub unsafe fn blit_surface(
        &self,
        src: *mut SDL_Surface,
        src_rect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dst_rect: *mut SDL_Rect,
    ) -> LinkResult<i32> {
        let blit = self.function::<Blit>("SDL_UpperBlit")?;
        Ok(blit(src, src_rect, dst, dst_rect))
    }

    /// `SDL_BlitScaled`，即 `SDL_UpperBlitScaled`
    ///
    /// # Safety
    ///
    /// 同 [`Namespace::blit_surface`]。
    pub unsafe fn blit_scaled(
        &self,
        src: *mut SDL_Surface,
        src_rect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dst_rect: *mut SDL_Rect,
    ) -> LinkResult<i32> {
        let blit = self.function::<Blit>("SDL_UpperBlitScaled")?;
        Ok(blit(src, src_rect, dst, dst_rect))
    }

    /// `Mix_LoadWAV`
    ///
    /// # Safety
    ///
    /// 混音器已通过 `Mix_OpenAudio` 打开。
    pub unsafe fn mix_load_wav(&self, file: &str) -> LinkResult<*mut Mix_Chunk> {
        let load = self.function::<unsafe extern "C" fn(*mut c_void, i32) -> *mut Mix_Chunk>("Mix_LoadWAV_RW")?;
        let rw = self.open_read(file)?;
        Ok(load(rw, 1))
    }

    /// `Mix_PlayChannel`：不限时播放
    ///
    /// # Safety
    ///
    /// `chunk` 有效且混音器已打开。
    pub unsafe fn mix_play_channel(&self, channel: i32, chunk: *mut Mix_Chunk, loops: i32) -> LinkResult<i32> {
        let play = self
            .function::<unsafe extern "C" fn(i32, *mut Mix_Chunk, i32, i32) -> i32>("Mix_PlayChannelTimed")?;
        Ok(play(channel, chunk, loops, -1))
    }

    /// `Mix_FadeInChannel`：不限时淡入播放
    ///
    /// # Safety
    ///
    /// `chunk` 有效且混音器已打开。
    pub unsafe fn mix_fade_in_channel(
        &self,
        channel: i32,
        chunk: *mut Mix_Chunk,
        loops: i32,
        ms: i32,
    ) -> LinkResult<i32> {
        let fade = self.function::<unsafe extern "C" fn(i32, *mut Mix_Chunk, i32, i32, i32) -> i32>(
            "Mix_FadeInChannelTimed",
        )?;
        Ok(fade(channel, chunk, loops, ms, -1))
    }

    /// `SDL_GameControllerAddMappingsFromFile`，返回新增映射数，失败为 -1
    ///
    /// # Safety
    ///
    /// 游戏控制器子系统已初始化。
    pub unsafe fn game_controller_add_mappings_from_file(&self, file: &str) -> LinkResult<i32> {
        let add = self.function::<unsafe extern "C" fn(*mut c_void, i32) -> i32>(
            "SDL_GameControllerAddMappingsFromRW",
        )?;
        let rw = self.open_read(file)?;
        Ok(add(rw, 1))
    }
}

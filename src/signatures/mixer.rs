//! SDL2_mixer 函数签名

use crate::signatures::NativeType::*;

signatures! {
    pub static FUNCTIONS = {
        Mix_Linked_Version() -> Ptr;
        Mix_Init(I32) -> I32;
        Mix_Quit() -> Void;
        Mix_OpenAudio(I32, U16, I32, I32) -> I32;
        Mix_OpenAudioDevice(I32, U16, I32, I32, CStr, I32) -> I32;
        Mix_AllocateChannels(I32) -> I32;
        Mix_QuerySpec(Ptr, Ptr, Ptr) -> I32;
        Mix_LoadWAV_RW(Ptr, I32) -> Ptr;
        Mix_LoadMUS(CStr) -> Ptr;
        Mix_LoadMUS_RW(Ptr, I32) -> Ptr;
        Mix_LoadMUSType_RW(Ptr, I32, I32) -> Ptr;
        Mix_QuickLoad_WAV(Ptr) -> Ptr;
        Mix_QuickLoad_RAW(Ptr, U32) -> Ptr;
        Mix_FreeChunk(Ptr) -> Void;
        Mix_FreeMusic(Ptr) -> Void;
        Mix_GetNumChunkDecoders() -> I32;
        Mix_GetChunkDecoder(I32) -> CStr;
        Mix_HasChunkDecoder(CStr) -> I32;
        Mix_GetNumMusicDecoders() -> I32;
        Mix_GetMusicDecoder(I32) -> CStr;
        Mix_GetMusicType(Ptr) -> I32;
        Mix_SetPostMix(FnPtr, Ptr) -> Void;
        Mix_HookMusic(FnPtr, Ptr) -> Void;
        Mix_HookMusicFinished(FnPtr) -> Void;
        Mix_GetMusicHookData() -> Ptr;
        Mix_ChannelFinished(FnPtr) -> Void;
        Mix_RegisterEffect(I32, FnPtr, FnPtr, Ptr) -> I32;
        Mix_UnregisterEffect(I32, FnPtr) -> I32;
        Mix_UnregisterAllEffects(I32) -> I32;
        Mix_SetPanning(I32, U8, U8) -> I32;
        Mix_SetPosition(I32, I16, U8) -> I32;
        Mix_SetDistance(I32, U8) -> I32;
        Mix_SetReverseStereo(I32, I32) -> I32;
        Mix_ReserveChannels(I32) -> I32;
        Mix_GroupChannel(I32, I32) -> I32;
        Mix_GroupChannels(I32, I32, I32) -> I32;
        Mix_GroupAvailable(I32) -> I32;
        Mix_GroupCount(I32) -> I32;
        Mix_GroupOldest(I32) -> I32;
        Mix_GroupNewer(I32) -> I32;
        Mix_PlayChannelTimed(I32, Ptr, I32, I32) -> I32;
        Mix_PlayMusic(Ptr, I32) -> I32;
        Mix_FadeInMusic(Ptr, I32, I32) -> I32;
        Mix_FadeInMusicPos(Ptr, I32, I32, F64) -> I32;
        Mix_FadeInChannelTimed(I32, Ptr, I32, I32, I32) -> I32;
        Mix_Volume(I32, I32) -> I32;
        Mix_VolumeChunk(Ptr, I32) -> I32;
        Mix_VolumeMusic(I32) -> I32;
        Mix_HaltChannel(I32) -> I32;
        Mix_HaltGroup(I32) -> I32;
        Mix_HaltMusic() -> I32;
        Mix_ExpireChannel(I32, I32) -> I32;
        Mix_FadeOutChannel(I32, I32) -> I32;
        Mix_FadeOutGroup(I32, I32) -> I32;
        Mix_FadeOutMusic(I32) -> I32;
        Mix_FadingMusic() -> I32;
        Mix_FadingChannel(I32) -> I32;
        Mix_Pause(I32) -> Void;
        Mix_Resume(I32) -> Void;
        Mix_Paused(I32) -> I32;
        Mix_PauseMusic() -> Void;
        Mix_ResumeMusic() -> Void;
        Mix_RewindMusic() -> Void;
        Mix_PausedMusic() -> I32;
        Mix_SetMusicPosition(F64) -> I32;
        Mix_Playing(I32) -> I32;
        Mix_PlayingMusic() -> I32;
        Mix_SetMusicCMD(CStr) -> I32;
        Mix_SetSynchroValue(I32) -> I32;
        Mix_GetSynchroValue() -> I32;
        Mix_SetSoundFonts(CStr) -> I32;
        Mix_GetSoundFonts() -> CStr;
        Mix_EachSoundFont(FnPtr, Ptr) -> I32;
        Mix_GetChunk(I32) -> Ptr;
        Mix_CloseAudio() -> Void;
    }
}

//! SDL2_mixer 常量

use super::core::AUDIO_S16SYS;

constants! {
    SDL_MIXER_MAJOR_VERSION: u32 = 2;
    SDL_MIXER_MINOR_VERSION: u32 = 0;
    SDL_MIXER_PATCHLEVEL: u32 = 4;

    MIX_INIT_FLAC: i32 = 0x0000_0001;
    MIX_INIT_MOD: i32 = 0x0000_0002;
    MIX_INIT_MP3: i32 = 0x0000_0008;
    MIX_INIT_OGG: i32 = 0x0000_0010;
    MIX_INIT_MID: i32 = 0x0000_0020;
    MIX_INIT_OPUS: i32 = 0x0000_0040;

    MIX_CHANNELS: i32 = 8;
    MIX_DEFAULT_FREQUENCY: i32 = 22050;
    MIX_DEFAULT_FORMAT: u16 = AUDIO_S16SYS;
    MIX_DEFAULT_CHANNELS: i32 = 2;
    MIX_MAX_VOLUME: i32 = 128;
    MIX_CHANNEL_POST: i32 = -2;

    MIX_NO_FADING: i32 = 0;
    MIX_FADING_OUT: i32 = 1;
    MIX_FADING_IN: i32 = 2;

    MUS_NONE: i32 = 0;
    MUS_CMD: i32 = 1;
    MUS_WAV: i32 = 2;
    MUS_MOD: i32 = 3;
    MUS_MID: i32 = 4;
    MUS_OGG: i32 = 5;
    MUS_MP3: i32 = 6;
    MUS_MP3_MAD_UNUSED: i32 = 7;
    MUS_FLAC: i32 = 8;
    MUS_MODPLUG_UNUSED: i32 = 9;
    MUS_OPUS: i32 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_follows_host_endianness() {
        assert_eq!(MIX_DEFAULT_FORMAT, super::super::core::AUDIO_S16SYS);
        assert_eq!(MIX_MAX_VOLUME, super::super::core::SDL_MIX_MAXVOLUME);
    }
}

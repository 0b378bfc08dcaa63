//! SDL2_ttf 常量

constants! {
    SDL_TTF_MAJOR_VERSION: u32 = 2;
    SDL_TTF_MINOR_VERSION: u32 = 0;
    SDL_TTF_PATCHLEVEL: u32 = 15;

    UNICODE_BOM_NATIVE: u16 = 0xFEFF;
    UNICODE_BOM_SWAPPED: u16 = 0xFFFE;

    TTF_STYLE_NORMAL: i32 = 0x00;
    TTF_STYLE_BOLD: i32 = 0x01;
    TTF_STYLE_ITALIC: i32 = 0x02;
    TTF_STYLE_UNDERLINE: i32 = 0x04;
    TTF_STYLE_STRIKETHROUGH: i32 = 0x08;

    TTF_HINTING_NORMAL: i32 = 0;
    TTF_HINTING_LIGHT: i32 = 1;
    TTF_HINTING_MONO: i32 = 2;
    TTF_HINTING_NONE: i32 = 3;
}

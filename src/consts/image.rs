//! SDL2_image 常量

constants! {
    SDL_IMAGE_MAJOR_VERSION: u32 = 2;
    SDL_IMAGE_MINOR_VERSION: u32 = 0;
    SDL_IMAGE_PATCHLEVEL: u32 = 5;

    IMG_INIT_JPG: i32 = 0x0000_0001;
    IMG_INIT_PNG: i32 = 0x0000_0002;
    IMG_INIT_TIF: i32 = 0x0000_0004;
    IMG_INIT_WEBP: i32 = 0x0000_0008;
}

//! 文字渲染示例
//!
//! 用法：cargo run --example render_text -- <字体路径> [文字]

use std::os::raw::c_char;

use sdl2_link::config::LoggingConfig;
use sdl2_link::consts::core::{
    SDL_INIT_VIDEO, SDL_QUIT, SDL_RENDERER_ACCELERATED, SDL_WINDOWPOS_CENTERED, SDL_WINDOW_SHOWN,
};
use sdl2_link::core::init_logging;
use sdl2_link::facade::{deref_struct, to_c_string};
use sdl2_link::sys::{
    SDL_Color, SDL_Event, SDL_Rect, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window, TTF_Font,
};
use sdl2_link::{LibloadingBackend, Loader};

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let font_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: render_text <font> [text]"))?;
    let text = args.next().unwrap_or_else(|| "Hello, SDL2!".to_string());

    let ns = Loader::new().with_backend(LibloadingBackend).with_ttf().load()?;

    let init = ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init")?;
    let ttf_init = ns.function::<unsafe extern "C" fn() -> i32>("TTF_Init")?;
    let open_font = ns.function::<unsafe extern "C" fn(*const c_char, i32) -> *mut TTF_Font>("TTF_OpenFont")?;
    let render_utf8 = ns.function::<
        unsafe extern "C" fn(*mut TTF_Font, *const c_char, SDL_Color) -> *mut SDL_Surface,
    >("TTF_RenderUTF8_Blended")?;
    let create_window = ns.function::<
        unsafe extern "C" fn(*const c_char, i32, i32, i32, i32, u32) -> *mut SDL_Window,
    >("SDL_CreateWindow")?;
    let create_renderer =
        ns.function::<unsafe extern "C" fn(*mut SDL_Window, i32, u32) -> *mut SDL_Renderer>("SDL_CreateRenderer")?;
    let create_texture = ns.function::<
        unsafe extern "C" fn(*mut SDL_Renderer, *mut SDL_Surface) -> *mut SDL_Texture,
    >("SDL_CreateTextureFromSurface")?;
    let render_copy = ns.function::<
        unsafe extern "C" fn(*mut SDL_Renderer, *mut SDL_Texture, *const SDL_Rect, *const SDL_Rect) -> i32,
    >("SDL_RenderCopy")?;
    let set_draw_color =
        ns.function::<unsafe extern "C" fn(*mut SDL_Renderer, u8, u8, u8, u8) -> i32>("SDL_SetRenderDrawColor")?;
    let clear = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer) -> i32>("SDL_RenderClear")?;
    let present = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer)>("SDL_RenderPresent")?;
    let poll_event = ns.function::<unsafe extern "C" fn(*mut SDL_Event) -> i32>("SDL_PollEvent")?;
    let delay = ns.function::<unsafe extern "C" fn(u32)>("SDL_Delay")?;
    let ttf_quit = ns.function::<unsafe extern "C" fn()>("TTF_Quit")?;
    let quit = ns.function::<unsafe extern "C" fn()>("SDL_Quit")?;

    unsafe {
        if init(SDL_INIT_VIDEO) != 0 || ttf_init() != 0 {
            anyhow::bail!("initialization failed: {:?}", ns.last_error()?);
        }

        let title = to_c_string("sdl2_link text")?;
        let window = ns.own(
            "SDL_CreateWindow",
            create_window(
                title.as_ptr(),
                SDL_WINDOWPOS_CENTERED as i32,
                SDL_WINDOWPOS_CENTERED as i32,
                640,
                200,
                SDL_WINDOW_SHOWN,
            ),
            "SDL_DestroyWindow",
        )?;
        let renderer = ns.own(
            "SDL_CreateRenderer",
            create_renderer(window.as_ptr(), -1, SDL_RENDERER_ACCELERATED),
            "SDL_DestroyRenderer",
        )?;

        let file = to_c_string(&font_path)?;
        let font = ns.own("TTF_OpenFont", open_font(file.as_ptr(), 48), "TTF_CloseFont")?;

        // SDL_Color 按值传递
        let white = SDL_Color { r: 255, g: 255, b: 255, a: 255 };
        let message = to_c_string(&text)?;
        let surface = ns.own(
            "TTF_RenderUTF8_Blended",
            render_utf8(font.as_ptr(), message.as_ptr(), white),
            "SDL_FreeSurface",
        )?;
        let target = deref_struct(surface.as_ptr())
            .map(|s| SDL_Rect { x: 20, y: 60, w: s.w, h: s.h })
            .unwrap_or(SDL_Rect { x: 20, y: 60, w: 0, h: 0 });
        let texture = ns.own(
            "SDL_CreateTextureFromSurface",
            create_texture(renderer.as_ptr(), surface.as_ptr()),
            "SDL_DestroyTexture",
        )?;
        drop(surface);

        let mut event: SDL_Event = bytemuck::Zeroable::zeroed();
        'running: loop {
            while poll_event(&mut event) != 0 {
                if event.event_type() == SDL_QUIT {
                    break 'running;
                }
            }
            set_draw_color(renderer.as_ptr(), 24, 24, 32, 255);
            clear(renderer.as_ptr());
            render_copy(renderer.as_ptr(), texture.as_ptr(), std::ptr::null(), &target);
            present(renderer.as_ptr());
            delay(16);
        }

        drop(texture);
        drop(font);
        drop(renderer);
        drop(window);
        ttf_quit();
        quit();
    }

    Ok(())
}

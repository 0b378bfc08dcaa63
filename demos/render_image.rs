//! 图片渲染示例
//!
//! 用法：cargo run --example render_image -- <图片路径>

use std::os::raw::c_char;

use sdl2_link::config::LoggingConfig;
use sdl2_link::consts::core::{
    SDL_INIT_VIDEO, SDL_QUIT, SDL_RENDERER_ACCELERATED, SDL_WINDOWPOS_CENTERED, SDL_WINDOW_SHOWN,
};
use sdl2_link::consts::image::IMG_INIT_PNG;
use sdl2_link::core::init_logging;
use sdl2_link::facade::{deref_struct, to_c_string};
use sdl2_link::sys::{SDL_Event, SDL_Rect, SDL_Renderer, SDL_Surface, SDL_Texture, SDL_Window};
use sdl2_link::{LibloadingBackend, Loader};

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::default());

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: render_image <image>"))?;

    let ns = Loader::new().with_backend(LibloadingBackend).with_image().load()?;

    let init = ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init")?;
    let img_init = ns.function::<unsafe extern "C" fn(i32) -> i32>("IMG_Init")?;
    let img_load = ns.function::<unsafe extern "C" fn(*const c_char) -> *mut SDL_Surface>("IMG_Load")?;
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
    let clear = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer) -> i32>("SDL_RenderClear")?;
    let present = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer)>("SDL_RenderPresent")?;
    let poll_event = ns.function::<unsafe extern "C" fn(*mut SDL_Event) -> i32>("SDL_PollEvent")?;
    let delay = ns.function::<unsafe extern "C" fn(u32)>("SDL_Delay")?;
    let quit = ns.function::<unsafe extern "C" fn()>("SDL_Quit")?;

    unsafe {
        if init(SDL_INIT_VIDEO) != 0 {
            anyhow::bail!("SDL_Init failed: {:?}", ns.last_error()?);
        }
        img_init(IMG_INIT_PNG);

        let file = to_c_string(&path)?;
        let surface = ns.own("IMG_Load", img_load(file.as_ptr()), "SDL_FreeSurface")?;
        let (width, height) = deref_struct(surface.as_ptr())
            .map(|s| (s.w, s.h))
            .unwrap_or((640, 480));

        let title = to_c_string(&path)?;
        let window = ns.own(
            "SDL_CreateWindow",
            create_window(
                title.as_ptr(),
                SDL_WINDOWPOS_CENTERED as i32,
                SDL_WINDOWPOS_CENTERED as i32,
                width,
                height,
                SDL_WINDOW_SHOWN,
            ),
            "SDL_DestroyWindow",
        )?;
        let renderer = ns.own(
            "SDL_CreateRenderer",
            create_renderer(window.as_ptr(), -1, SDL_RENDERER_ACCELERATED),
            "SDL_DestroyRenderer",
        )?;
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
            clear(renderer.as_ptr());
            render_copy(renderer.as_ptr(), texture.as_ptr(), std::ptr::null(), std::ptr::null());
            present(renderer.as_ptr());
            delay(16);
        }

        drop(texture);
        drop(renderer);
        drop(window);
        quit();
    }

    Ok(())
}

//! 基础窗口示例
//!
//! 打开一个窗口，循环清屏，直到关闭窗口或按下 Esc。

use std::os::raw::c_char;

use sdl2_link::config::LoggingConfig;
use sdl2_link::consts::core::{
    SDL_INIT_VIDEO, SDL_KEYDOWN, SDL_QUIT, SDL_RENDERER_ACCELERATED, SDL_WINDOWPOS_CENTERED,
    SDL_WINDOW_SHOWN,
};
use sdl2_link::consts::keyboard::SDLK_ESCAPE;
use sdl2_link::core::init_logging;
use sdl2_link::facade::to_c_string;
use sdl2_link::sys::{SDL_Event, SDL_Renderer, SDL_Window};
use sdl2_link::{LibloadingBackend, Loader};

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::default());

    let ns = Loader::new().with_backend(LibloadingBackend).load()?;

    let init = ns.function::<unsafe extern "C" fn(u32) -> i32>("SDL_Init")?;
    let quit = ns.function::<unsafe extern "C" fn()>("SDL_Quit")?;
    let create_window = ns.function::<
        unsafe extern "C" fn(*const c_char, i32, i32, i32, i32, u32) -> *mut SDL_Window,
    >("SDL_CreateWindow")?;
    let create_renderer =
        ns.function::<unsafe extern "C" fn(*mut SDL_Window, i32, u32) -> *mut SDL_Renderer>("SDL_CreateRenderer")?;
    let set_draw_color =
        ns.function::<unsafe extern "C" fn(*mut SDL_Renderer, u8, u8, u8, u8) -> i32>("SDL_SetRenderDrawColor")?;
    let clear = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer) -> i32>("SDL_RenderClear")?;
    let present = ns.function::<unsafe extern "C" fn(*mut SDL_Renderer)>("SDL_RenderPresent")?;
    let poll_event = ns.function::<unsafe extern "C" fn(*mut SDL_Event) -> i32>("SDL_PollEvent")?;
    let delay = ns.function::<unsafe extern "C" fn(u32)>("SDL_Delay")?;

    if unsafe { init(SDL_INIT_VIDEO) } != 0 {
        anyhow::bail!("SDL_Init failed: {:?}", unsafe { ns.last_error() }?);
    }

    let title = to_c_string("sdl2_link basic window")?;
    unsafe {
        let window = ns.own(
            "SDL_CreateWindow",
            create_window(
                title.as_ptr(),
                SDL_WINDOWPOS_CENTERED as i32,
                SDL_WINDOWPOS_CENTERED as i32,
                800,
                600,
                SDL_WINDOW_SHOWN,
            ),
            "SDL_DestroyWindow",
        )?;
        let renderer = ns.own(
            "SDL_CreateRenderer",
            create_renderer(window.as_ptr(), -1, SDL_RENDERER_ACCELERATED),
            "SDL_DestroyRenderer",
        )?;

        let mut event: SDL_Event = bytemuck::Zeroable::zeroed();
        let mut frame: u32 = 0;
        'running: loop {
            while poll_event(&mut event) != 0 {
                match event.event_type() {
                    SDL_QUIT => break 'running,
                    SDL_KEYDOWN if event.key.keysym.sym == SDLK_ESCAPE => break 'running,
                    _ => {}
                }
            }

            let shade = (frame % 256) as u8;
            set_draw_color(renderer.as_ptr(), shade, 64, 255 - shade, 255);
            clear(renderer.as_ptr());
            present(renderer.as_ptr());

            frame = frame.wrapping_add(1);
            delay(16);
        }

        // 先销毁渲染器再销毁窗口
        drop(renderer);
        drop(window);
        quit();
    }

    Ok(())
}

//! SDL2 demo: a rotating cube rendered entirely on the CPU.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use scanrast::math::mat4::Mat4;
use scanrast::math::vec3::Vec3;
use scanrast::mesh::{CUBE_INDICES, CUBE_VERTICES};
use scanrast::{DrawStyle, FrameBuffer, Renderer, Viewport};

const WINDOW_WIDTH: u32 = 512;
const WINDOW_HEIGHT: u32 = 512;

// Colors in ARGB8888 format
const COLOR_BACKGROUND: u32 = 0xFF101010;
const COLOR_FILL: u32 = 0xFF335577;
const COLOR_WIRE: u32 = 0xFF446688;

fn process_input(event_pump: &mut sdl2::EventPump) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => return false,
            _ => {}
        }
    }
    true
}

fn buffer_as_bytes(buffer: &[u32]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(buffer.as_ptr() as *const u8, buffer.len() * 4) }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("scanrast", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, WINDOW_WIDTH, WINDOW_HEIGHT)
        .map_err(|e| e.to_string())?;

    let viewport = Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let renderer = Renderer::new(viewport);
    let mut pixels = vec![COLOR_BACKGROUND; (WINDOW_WIDTH * WINDOW_HEIGHT) as usize];

    let mut event_pump = sdl_context.event_pump()?;
    let mut angle = 0.0f32;

    let mut rotation = Mat4::new();
    let mut translation = Mat4::new();
    let mut projection = Mat4::new();
    projection.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);

    while process_input(&mut event_pump) {
        angle += 0.01;
        rotation.rotate(angle, angle * 0.7, angle * 0.4);
        translation.translate(Vec3::new(0.0, 0.0, -5.0));

        let mut fb = FrameBuffer::new_packed(&mut pixels, WINDOW_WIDTH, WINDOW_HEIGHT);
        fb.clear(COLOR_BACKGROUND);
        renderer.draw(
            &mut fb,
            &[rotation, translation, projection],
            &CUBE_VERTICES,
            &CUBE_INDICES,
            DrawStyle {
                fill: COLOR_FILL,
                wireframe: Some(COLOR_WIRE),
            },
        );

        texture
            .update(None, buffer_as_bytes(&pixels), (WINDOW_WIDTH * 4) as usize)
            .map_err(|e| e.to_string())?;

        canvas.clear();
        canvas.copy(
            &texture,
            None,
            Some(Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)),
        )?;
        canvas.present();
    }

    Ok(())
}

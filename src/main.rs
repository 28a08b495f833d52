use broadside::{coords, render, FrameInput, Game, PIXEL_HEIGHT, PIXEL_WIDTH};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Broadside".to_owned(),
        window_width: PIXEL_WIDTH as i32,
        window_height: PIXEL_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    broadside::init_logging();
    let mut game = Game::new();
    loop {
        let (mx, my) = mouse_position();
        let input = FrameInput {
            cursor: coords::cursor_to_canvas(mx, my, screen_width(), screen_height()),
            fire: is_mouse_button_released(MouseButton::Left),
        };
        game.update(get_frame_time() * 1000.0, input);
        render::draw(&game);
        next_frame().await;
    }
}

//! Neon Hockey entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use neon_hockey::consts::SIM_DT;
    use neon_hockey::renderer::CanvasScene;
    use neon_hockey::sim::GameSession;
    use neon_hockey::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        scene: CanvasScene,
        last_time: f64,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Hockey starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Full-viewport canvas, sized once at load
        let width = window.inner_width()?.as_f64().unwrap_or(1280.0);
        let height = window.inner_height()?.as_f64().unwrap_or(720.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(width as f32, height as f32, tuning.clone(), seed);
        let scene = CanvasScene::new(&canvas, seed.rotate_left(17), tuning.flicker_chance)?;

        log::info!("Game initialized {}x{} with seed {}", width, height, seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            scene,
            last_time: 0.0,
        }));

        setup_pointer_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Neon Hockey running!");
        Ok(())
    }

    fn event_point(event: &PointerEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down - spawn an actuator under the touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.session.pointer_down(event.pointer_id(), event_point(&event));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - drive the matching anchor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                g.session.pointer_move(event.pointer_id(), event_point(&event));
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Up/cancel/out/leave all end the touch the same way
        for kind in ["pointerup", "pointercancel", "pointerout", "pointerleave"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                g.session.pointer_up(event.pointer_id());
            });
            let _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            let Game { session, scene, .. } = &mut *g;
            session.advance(dt);
            scene.draw(session, time);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("Startup failed: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Hockey (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable game");

    demo_rally();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Stage a quick headless rally so the native binary demonstrates the loop
#[cfg(not(target_arch = "wasm32"))]
fn demo_rally() {
    use glam::Vec2;
    use neon_hockey::sim::GameSession;
    use neon_hockey::tuning::Tuning;

    let mut session = GameSession::new(1280.0, 720.0, Tuning::default(), 42);

    // One scripted touch dragging a pusher across the right half
    session.pointer_down(1, Vec2::new(1000.0, 360.0));
    session.pointer_move(1, Vec2::new(800.0, 360.0));

    // Shove the puck toward the left goal mouth from center court
    session.world.set_puck_position(Vec2::new(640.0, 360.0));
    session.world.set_puck_velocity(Vec2::new(-2500.0, 0.0));
    for _ in 0..600 {
        session.step_once();
    }
    session.pointer_up(1);

    println!(
        "score after rally: {} : {}",
        session.score.left, session.score.right
    );
}

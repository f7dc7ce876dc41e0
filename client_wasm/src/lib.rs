//! Browser client for Paddle Duel
//!
//! Canvas 2D drawing plus the animation-frame loop. The draw list and pointer
//! mapping are plain Rust and build on any target; the DOM glue only on wasm32.

pub mod input;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::start;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{run_frame, Config, LatestPointer, Session};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use crate::input::pointer_surface_y;
    use crate::renderer::CanvasRenderer;

    struct App {
        session: Session,
        pointer: LatestPointer,
        renderer: CanvasRenderer,
    }

    impl App {
        fn frame(&mut self) {
            match run_frame(&mut self.session, &mut self.pointer, &mut self.renderer) {
                Ok(events) => {
                    if let Some(scorer) = events.scorer() {
                        let score = self.session.score;
                        log::info!("{:?} scores, {}-{}", scorer, score.left, score.right);
                    }
                }
                Err(err) => {
                    log::error!("frame {} render failed: {}", self.session.frame(), err);
                }
            }
        }
    }

    /// Attach a game to the canvas with id `canvas_id` and start the loop
    #[wasm_bindgen]
    pub fn start(canvas_id: &str) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second start() on the same page finds the logger already set
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        log::info!(
            "Paddle Duel starting on #{} ({}x{})",
            canvas_id,
            canvas.width(),
            canvas.height()
        );

        let config = Config::for_surface(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let session = Session::with_config(config, seed)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let app = Rc::new(RefCell::new(App {
            session,
            pointer: LatestPointer::new(),
            renderer: CanvasRenderer::new(ctx),
        }));

        // Mouse move: map client coordinates onto the surface
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut app = app.borrow_mut();
                let surface_height = app.session.surface.height;
                let y = pointer_surface_y(
                    event.client_y() as f64,
                    rect.top(),
                    rect.height(),
                    surface_height,
                );
                app.pointer.push(y);
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        request_animation_frame(app);
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("window gone, stopping loop");
            return;
        };
        let callback = Closure::once_into_js(move |_time: f64| game_loop(app));
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

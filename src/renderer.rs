use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use three_d::*;

use crate::animate::{camera_position_for_scroll, ScrollTracker};
use crate::config::SceneConfig;
use crate::log;
use crate::scene::Scene;

/// Builds the window, camera and scene, then hands a per-frame mutation
/// closure to the library's render loop.
pub async fn main(config: SceneConfig) {
    let window = Window::new(WindowSettings {
        title: "scrollspace".to_string(),
        ..Default::default()
    })
    .expect("renderer::main(): failed to create window");
    let context = window.gl();

    let target = vec3(0.0, 0.0, 0.0);
    let up = vec3(0.0, 1.0, 0.0);
    let mut camera = Camera::new_perspective(
        window.viewport(),
        config.camera.position.into(),
        target,
        up,
        degrees(config.camera.fov_degrees),
        config.camera.z_near,
        config.camera.z_far,
    );
    let mut control = OrbitControl::new(target, 1.0, config.camera.z_far / 2.0);

    let mut scene = Scene::load(&context, &config).await;
    log!("renderer::main(): scene loaded.");

    let scroll = ScrollOffset::attach();
    let mut tracker = ScrollTracker::new();
    let coefficients = config.camera.scroll_coefficients;

    window.render_loop(move |mut frame_input| {
        camera.set_viewport(frame_input.viewport);
        control.handle_events(&mut camera, &mut frame_input.events);

        scene.step();
        if let Some(offset) = tracker.update(scroll.get()) {
            scene.on_scroll();
            camera.set_view(camera_position_for_scroll(offset, coefficients), target, up);
        }

        frame_input
            .screen()
            .clear(ClearState::color_and_depth(0.0, 0.0, 0.0, 1.0, 1.0))
            .render(&camera, scene.objects(), &scene.lights());

        FrameOutput::default()
    });
}

/// Shared page scroll offset, written by the browser's `scroll` event and
/// read once per frame. Native targets have no page to scroll, so the offset
/// stays at zero there.
struct ScrollOffset {
    offset: Rc<Cell<f32>>,
}

impl ScrollOffset {
    fn attach() -> Self {
        let offset = Rc::new(Cell::new(0.0));

        #[cfg(target_arch = "wasm32")]
        {
            let cell = Rc::clone(&offset);
            let callback = Closure::wrap(Box::new(move || {
                cell.set(crate::utils::page_scroll_top());
            }) as Box<dyn FnMut()>);

            if let Some(window) = web_sys::window() {
                window.set_onscroll(Some(callback.as_ref().unchecked_ref()));
                callback.forget(); // lives as long as the page
            } else {
                log!("ScrollOffset::attach(): WARNING: no window object.");
            }
        }

        Self { offset }
    }

    fn get(&self) -> f32 {
        self.offset.get()
    }
}

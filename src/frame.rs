use crate::scene::SharedJewelbox;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub jewelbox: SharedJewelbox,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(jewelbox: SharedJewelbox) -> Self {
        Self {
            jewelbox,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        // Handlers hold the borrow only briefly; skip the frame rather than
        // panic. The elapsed time carries over to the next frame.
        let Ok(mut jb) = self.jewelbox.try_borrow_mut() else {
            log::debug!("[frame] coordinator busy, skipping tick");
            return;
        };
        let now = Instant::now();
        jb.tick(now - self.last_instant);
        self.last_instant = now;
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}

use crate::frame::Clock;
use crate::input;
use cursor_core::{PointerTrailEngine, RawInput, Subscriptions, WINDOW_EVENTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

#[derive(Clone)]
pub struct InputWiring {
    pub engine: Rc<RefCell<PointerTrailEngine>>,
    pub clock: Clock,
}

/// Window listeners owned by one cursor mount. Handlers are kept alive here
/// rather than forgotten so they can be removed on teardown.
pub struct ListenerSet {
    window: web::Window,
    subs: Subscriptions<Handler>,
}

impl ListenerSet {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            subs: Subscriptions::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subs.is_empty()
    }

    pub fn attach(&mut self, w: &InputWiring) -> anyhow::Result<()> {
        for name in WINDOW_EVENTS {
            if self.subs.is_attached(name) {
                continue;
            }
            let handler = make_handler(name, w.clone());
            self.window
                .add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", name, e))?;
            self.subs.attach(name, handler);
        }
        log::debug!("[events] {} window listeners attached", self.subs.len());
        Ok(())
    }

    pub fn detach(&mut self) {
        let mut removed = 0;
        for (name, handler) in self.subs.detach_all() {
            _ = self
                .window
                .remove_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
            removed += 1;
        }
        if removed > 0 {
            log::debug!("[events] {} window listeners removed", removed);
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach();
    }
}

fn make_handler(name: &'static str, w: InputWiring) -> Handler {
    Closure::wrap(Box::new(move |ev: web::Event| {
        let now = w.clock.now_ms();
        let mut engine = w.engine.borrow_mut();
        match name {
            "mousemove" => {
                if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                    let p = input::mouse_point(m);
                    _ = engine.handle(&RawInput::MouseMove { x: p.x, y: p.y }, now);
                }
            }
            "touchmove" => {
                if let Some(t) = ev.dyn_ref::<web::TouchEvent>() {
                    let touches = input::touch_points(&t.touches());
                    _ = engine.handle(&RawInput::TouchMove { touches: &touches }, now);
                }
            }
            "mousedown" => {
                _ = engine.handle(&RawInput::MouseDown, now);
            }
            "touchstart" => {
                _ = engine.handle(&RawInput::TouchStart, now);
            }
            "mouseup" => {
                _ = engine.handle(&RawInput::MouseUp, now);
            }
            "touchend" => {
                _ = engine.handle(&RawInput::TouchEnd, now);
            }
            "mouseover" => {
                _ = engine.handle(&input::hover_sample(&ev), now);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>)
}

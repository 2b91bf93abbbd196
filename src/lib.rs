#![cfg(target_arch = "wasm32")]
use cursor_core::PointerTrailEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod input;
mod render;

thread_local! {
    // cursor mounted by `start` when the page provides #cyber-cursor
    static AUTO_MOUNT: RefCell<Option<CyberCursor>> = RefCell::new(None);
}

fn js_error(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}

/// One cursor overlay attached to a mount element.
#[wasm_bindgen]
pub struct CyberCursor {
    engine: Rc<RefCell<PointerTrailEngine>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    listeners: events::ListenerSet,
    frame_loop: Option<frame::FrameLoop>,
    clock: frame::Clock,
}

impl CyberCursor {
    fn mount(mount_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let mount = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", mount_id))?;

        let params = config::params_from_attrs(|name| mount.get_attribute(name))?;
        let engine = Rc::new(RefCell::new(PointerTrailEngine::new(
            params,
            rand::random::<u64>(),
        )?));
        let clock = frame::Clock::new();
        let renderer = render::DomRenderer::new(&document, &mount)?;
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine: engine.clone(),
            renderer,
            clock,
        }));
        log::info!("[cursor] mounted on #{}", mount_id);

        Ok(Self {
            engine,
            frame_ctx,
            listeners: events::ListenerSet::new(window),
            frame_loop: None,
            clock,
        })
    }

    fn try_activate(&mut self) -> anyhow::Result<()> {
        self.engine.borrow_mut().activate(self.clock.now_ms());
        self.listeners.attach(&events::InputWiring {
            engine: self.engine.clone(),
            clock: self.clock,
        })?;
        if self.frame_loop.is_none() {
            self.frame_loop = Some(frame::start_loop(self.frame_ctx.clone()));
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl CyberCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(mount_id: &str) -> Result<CyberCursor, JsValue> {
        Self::mount(mount_id).map_err(js_error)
    }

    /// Attaches window listeners and starts the frame loop. Repeated calls are no-ops.
    pub fn activate(&mut self) -> Result<(), JsValue> {
        self.try_activate().map_err(|e| {
            // leave nothing half-attached
            self.deactivate();
            js_error(e)
        })
    }

    /// Removes listeners, stops the frame loop and cancels pending timers.
    /// Safe to call when already inactive.
    pub fn deactivate(&mut self) {
        self.listeners.detach();
        if let Some(mut lp) = self.frame_loop.take() {
            lp.stop();
        }
        self.engine.borrow_mut().deactivate();
        self.frame_ctx.borrow_mut().renderer.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.engine.borrow().is_active() && self.listeners.is_attached()
    }
}

impl Drop for CyberCursor {
    fn drop(&mut self) {
        self.deactivate();
        self.frame_ctx.borrow_mut().renderer.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cyber-cursor starting");

    if dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::MOUNT_ID))
        .is_none()
    {
        log::debug!("no #{} element, waiting for manual mount", constants::MOUNT_ID);
        return Ok(());
    }

    let mut cursor = CyberCursor::new(constants::MOUNT_ID)?;
    cursor.activate()?;
    AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(cursor));
    Ok(())
}

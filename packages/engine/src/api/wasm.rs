//! `TumbleStage` - wires the real page to an [`ActivationDriver`]
//!
//! ```js
//! const stage = new TumbleStage();          // or new TumbleStage('{"restitution":0.8}')
//! stage.start();                            // listeners + requestAnimationFrame loop
//!
//! // or, with an external ticker / smooth scroller:
//! stage.attach();
//! ticker.add((t) => stage.tick(t * 1000));
//! scroller.on("scroll", () => stage.on_scroll());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::activation::ActivationDriver;
use crate::domain::Config;
use crate::simulation::{PerfStats, SimulationSession};

type Driver = ActivationDriver<HtmlElement>;

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn viewport_height(window: &Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

fn client_pos(event: &Event) -> Option<(f32, f32)> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| (e.client_x() as f32, e.client_y() as f32))
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
pub struct TumbleStage {
    driver: Rc<RefCell<Driver>>,
    listeners: Vec<Listener>,
    frame_loop: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl TumbleStage {
    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    fn attach_container(&mut self, idx: usize, container: &HtmlElement) -> Result<(), JsValue> {
        let target: &EventTarget = container.as_ref();
        let (capture_wheel, context_menu) = {
            let driver = self.driver.borrow();
            let config = driver.session().config();
            (config.capture_wheel, config.context_menu)
        };

        let d = self.driver.clone();
        self.listen(target, "mousedown", move |e| {
            if let Some((x, y)) = client_pos(&e) {
                d.borrow_mut().pointer_down(idx, x, y);
            }
        })?;

        let d = self.driver.clone();
        self.listen(target, "mousemove", move |e| {
            if let Some((x, y)) = client_pos(&e) {
                d.borrow_mut().pointer_move(idx, x, y);
            }
        })?;

        let d = self.driver.clone();
        self.listen(target, "mouseup", move |_| d.borrow_mut().pointer_up(idx))?;

        // safe release when the pointer leaves the container
        let d = self.driver.clone();
        self.listen(target, "mouseleave", move |_| d.borrow_mut().pointer_leave(idx))?;

        if !context_menu {
            self.listen(target, "contextmenu", |e| e.prevent_default())?;
        }
        // without capture the page keeps native wheel scrolling
        if capture_wheel {
            self.listen(target, "wheel", |e| e.prevent_default())?;
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl TumbleStage {
    /// Discover `section` blocks that contain an `.object-container`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<TumbleStage, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => Config::default(),
        };

        let body = document()?
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let mut driver = ActivationDriver::new(SimulationSession::new(config));
        let found = driver.discover(&body);
        if found == 0 {
            engine_warn!("no section with an object container found");
        } else {
            engine_log!("{} physics section(s) registered", found);
        }

        Ok(Self {
            driver: Rc::new(RefCell::new(driver)),
            listeners: Vec::new(),
            frame_loop: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            running: Rc::new(Cell::new(false)),
        })
    }

    /// Register pointer, scroll and resize listeners. Frames must be driven
    /// by the host through `tick`.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        let window = window()?;
        let document = document()?;

        let containers: Vec<HtmlElement> = {
            let driver = self.driver.borrow();
            (0..driver.section_count())
                .filter_map(|i| driver.container(i).cloned())
                .collect()
        };
        for (idx, container) in containers.iter().enumerate() {
            self.attach_container(idx, container)?;
        }

        // safe release for pointer-up anywhere on the page
        let d = self.driver.clone();
        self.listen(document.as_ref(), "mouseup", move |_| d.borrow_mut().release_pointer())?;

        let d = self.driver.clone();
        let w = window.clone();
        self.listen(window.as_ref(), "scroll", move |_| {
            d.borrow_mut().on_scroll(viewport_height(&w));
        })?;

        let d = self.driver.clone();
        self.listen(window.as_ref(), "resize", move |_| d.borrow_mut().on_resize())?;

        // sections already on screen at load
        self.on_scroll();
        Ok(())
    }

    /// `attach` plus a self-driven `requestAnimationFrame` loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.attach()?;
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);

        let window = window()?;
        let driver = self.driver.clone();
        let running = self.running.clone();
        let frame_id = self.frame_id.clone();
        let handle = self.frame_loop.clone();
        let w = window.clone();

        *self.frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |t: f64| {
            if !running.get() {
                return;
            }
            driver.borrow_mut().frame(t);
            if let Some(cb) = handle.borrow().as_ref() {
                frame_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = self.frame_loop.borrow().as_ref() {
            self.frame_id
                .set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }
        Ok(())
    }

    /// Drive one frame from an external ticker (milliseconds).
    pub fn tick(&self, time_ms: f64) -> bool {
        self.driver.borrow_mut().frame(time_ms)
    }

    /// Forwarded scroll notification from an external smooth scroller.
    pub fn on_scroll(&self) {
        if let Ok(window) = window() {
            self.driver.borrow_mut().on_scroll(viewport_height(&window));
        }
    }

    pub fn on_resize(&self) {
        self.driver.borrow_mut().on_resize();
    }

    /// Stop the loop, remove every listener and drop the world.
    pub fn destroy(&mut self) {
        self.running.set(false);
        if let (Some(id), Ok(window)) = (self.frame_id.take(), window()) {
            window.cancel_animation_frame(id).ok();
        }
        self.frame_loop.borrow_mut().take();

        for listener in self.listeners.drain(..) {
            listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())
                .ok();
        }
        self.driver.borrow_mut().shutdown();
    }

    #[wasm_bindgen(getter)]
    pub fn is_live(&self) -> bool {
        self.driver.borrow().session().is_live()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.driver.borrow().session().world().map_or(0, |w| w.body_count())
    }

    #[wasm_bindgen(getter)]
    pub fn dynamic_body_count(&self) -> usize {
        self.driver.borrow().session().binding_count()
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.driver.borrow_mut().session_mut().enable_perf_metrics(enabled);
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.driver.borrow().session().perf_stats()
    }

    pub fn config_json(&self) -> String {
        self.driver.borrow().session().config().to_json()
    }
}

//! Browser host (feature `web`).
//!
//! Binds a `GameController` to a page with this structure:
//!
//! ```html
//! <p id="tries"></p>
//! <div id="game-container">
//!   <div class="card"></div>  <!-- one per card -->
//! </div>
//! ```
//!
//! One click listener sits on the container. Faces are shown through the
//! card's `background-image`, matched cards get `data-correct="true"`, and
//! the mismatch hide runs on `setTimeout`.
//!
//! ```js
//! import init, { start } from "./memory_match.js";
//! await init();
//! const game = start("game-container", "tries");
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node, Window};

use crate::board::SlotId;
use crate::controller::{child_position, ClickTarget, GameController};
use crate::core::{GameConfig, MemoryError, Result as GameResult};
use crate::display::DisplayLayer;
use crate::timer::{Scheduler, TimerId};

type WebController = GameController<DomDisplay, BrowserScheduler>;

/// Callback that hands a fired timer back to the controller.
pub type TimerSink = Rc<dyn Fn(TimerId)>;

/// Display backed by the card container and the tries element.
pub struct DomDisplay {
    container: Element,
    tries: Element,
}

impl DomDisplay {
    pub fn new(container: Element, tries: Element) -> Self {
        Self { container, tries }
    }

    fn card(&self, slot: SlotId) -> Option<HtmlElement> {
        let index = u32::try_from(slot.index()).ok()?;
        self.container.children().item(index)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_background(&self, slot: SlotId, value: &str) {
        let Some(card) = self.card(slot) else {
            tracing::warn!(%slot, "no card element for slot");
            return;
        };
        if let Err(err) = card.style().set_property("background-image", value) {
            tracing::warn!(%slot, ?err, "failed to set background");
        }
    }
}

impl DisplayLayer for DomDisplay {
    fn show_face(&mut self, slot: SlotId, asset_path: &str) {
        self.set_background(slot, &format!("url({asset_path})"));
    }

    fn hide_face(&mut self, slot: SlotId) {
        self.set_background(slot, "");
    }

    fn mark_matched(&mut self, slot: SlotId) {
        let Some(card) = self.card(slot) else {
            return;
        };
        if let Err(err) = card.set_attribute("data-correct", "true") {
            tracing::warn!(%slot, ?err, "failed to mark card");
        }
    }

    fn render_tries(&mut self, text: &str) {
        self.tries.set_text_content(Some(text));
    }
}

/// An armed `setTimeout` and the callback it will run.
///
/// The callback is freed when this is dropped, so it must outlive the
/// browser handle.
struct PendingTimeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Scheduler backed by `window.setTimeout`.
pub struct BrowserScheduler {
    window: Window,
    next_id: u64,
    pending: FxHashMap<TimerId, PendingTimeout>,
    sink: Option<TimerSink>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: 0,
            pending: FxHashMap::default(),
            sink: None,
        }
    }

    /// Set where fired timers are delivered. Scheduling fails until a sink
    /// is set.
    pub fn set_sink(&mut self, sink: TimerSink) {
        self.sink = Some(sink);
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u64) -> GameResult<TimerId> {
        let Some(sink) = self.sink.clone() else {
            return Err(MemoryError::Schedule("no timer sink set".into()));
        };

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let callback: Closure<dyn FnMut()> = Closure::once(move || sink(id));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
            .map_err(|err| MemoryError::Schedule(format!("setTimeout failed: {err:?}")))?;

        self.pending.insert(
            id,
            PendingTimeout {
                handle,
                _callback: callback,
            },
        );
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(timeout) = self.pending.remove(&id) {
            self.window.clear_timeout_with_handle(timeout.handle);
        }
    }

    // Runs inside the callback; wasm-bindgen defers the free until it returns
    fn complete(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

fn click_target(container: &Element, event: &Event) -> ClickTarget {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::Background;
    };
    let node: &Node = target.as_ref();
    let children = container.children();
    let position = child_position(
        (0..children.length()).map(|index| children.item(index)),
        |child| child.as_ref().is_some_and(|c| c.is_same_node(Some(node))),
    );
    ClickTarget::from_class_name(&target.class_name(), position)
}

fn deliver(game: &Weak<RefCell<WebController>>, id: TimerId) {
    let Some(game) = game.upgrade() else {
        return;
    };
    match game.try_borrow_mut() {
        Ok(mut controller) => {
            controller.on_timer(id);
        }
        Err(_) => tracing::warn!(timer = %id, "controller busy, timer dropped"),
    };
}

fn js_error(err: MemoryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Running game handle returned to JavaScript.
#[wasm_bindgen]
pub struct WebGame {
    inner: Rc<RefCell<WebController>>,
}

#[wasm_bindgen]
impl WebGame {
    /// Completed turns so far.
    pub fn tries(&self) -> u32 {
        self.inner.borrow().tries()
    }

    /// Whether every pair has been found.
    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.inner.borrow().is_complete()
    }
}

/// Shuffle the stock deck and attach to the page.
#[wasm_bindgen]
pub fn start(container_id: &str, tries_id: &str) -> Result<WebGame, JsValue> {
    start_with_config(GameConfig::default(), container_id, tries_id)
}

/// Attach a game with a custom configuration.
pub fn start_with_config(
    config: GameConfig,
    container_id: &str,
    tries_id: &str,
) -> Result<WebGame, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let container = element(&document, container_id)?;
    let tries = element(&document, tries_id)?;

    let card_elements = usize::try_from(container.children().length()).unwrap_or(usize::MAX);
    config.check_layout(card_elements).map_err(js_error)?;

    let display = DomDisplay::new(container.clone(), tries);
    let scheduler = BrowserScheduler::new(window);
    let controller = GameController::new(config, display, scheduler).map_err(js_error)?;
    let inner = Rc::new(RefCell::new(controller));

    let weak = Rc::downgrade(&inner);
    inner
        .borrow_mut()
        .scheduler_mut()
        .set_sink(Rc::new(move |id| deliver(&weak, id)));

    let weak = Rc::downgrade(&inner);
    let listener_container = container.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(game) = weak.upgrade() else {
            return;
        };
        let target = click_target(&listener_container, &event);
        let Ok(mut controller) = game.try_borrow_mut() else {
            return;
        };
        if let Err(err) = controller.handle_click(target) {
            tracing::warn!(%err, "click rejected");
        }
    });
    container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_click.forget();

    Ok(WebGame { inner })
}

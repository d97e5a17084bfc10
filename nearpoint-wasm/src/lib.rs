use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering::*;

// Last known pointer position in canvas-local CSS pixels. Written by the
// pointer event handlers, read by the frame callback. Both run on the same
// event loop so a handler never observes a half-written update.
static MOUSE_X: AtomicI32 = AtomicI32::new(0);
static MOUSE_Y: AtomicI32 = AtomicI32::new(0);

fn get_mouse() -> (i32, i32) {
  (MOUSE_X.load(Relaxed), MOUSE_Y.load(Relaxed))
}

fn set_mouse(x: i32, y: i32) {
  MOUSE_X.store(x, Relaxed);
  MOUSE_Y.store(y, Relaxed);
}

pub mod playground {
  use nearpoint::data::{Point, Polygon};

  use gloo_events::EventListener;
  use wasm_bindgen::{JsCast, UnwrapThrowExt};

  pub type Num = f64;

  pub fn upd_mouse(event: &web_sys::MouseEvent) {
    // Offset coordinates are already relative to the canvas.
    super::set_mouse(event.offset_x(), event.offset_y())
  }

  pub fn upd_touch(event: &web_sys::TouchEvent) {
    if let Some(touch) = event.touches().get(0) {
      let rect = canvas().get_bounding_client_rect();
      super::set_mouse(
        touch.client_x() - rect.left() as i32,
        touch.client_y() - rect.top() as i32,
      )
    }
  }

  pub fn document() -> web_sys::Document {
    web_sys::window()
      .expect_throw("no window")
      .document()
      .expect_throw("no document")
  }

  pub fn canvas() -> web_sys::HtmlCanvasElement {
    document()
      .get_element_by_id("canvas")
      .expect_throw("no element with id 'canvas'")
      .dyn_into::<web_sys::HtmlCanvasElement>()
      .expect_throw("element 'canvas' is not a canvas")
  }

  pub fn context() -> web_sys::CanvasRenderingContext2d {
    canvas()
      .get_context("2d")
      .ok()
      .flatten()
      .expect_throw("canvas 2d context not available")
      .dyn_into::<web_sys::CanvasRenderingContext2d>()
      .unwrap_throw()
  }

  pub fn clear_screen() {
    let canvas = canvas();
    context().clear_rect(0., 0., canvas.width().into(), canvas.height().into());
  }

  pub fn mouse_position() -> (Num, Num) {
    let (x, y) = super::get_mouse();
    (x.into(), y.into())
  }

  pub fn set_stroke_style(style: &str) {
    context().set_stroke_style_str(style)
  }

  pub fn set_fill_style(style: &str) {
    context().set_fill_style_str(style)
  }

  pub fn set_line_width(width: f64) {
    context().set_line_width(width)
  }

  /// Stroke the polygon's outline as a closed path.
  pub fn stroke_polygon(poly: &Polygon<Num>) {
    let context = context();

    context.begin_path();
    let mut iter = poly.iter();
    if let Some(origin) = iter.next() {
      context.move_to(*origin.x_coord(), *origin.y_coord());
      for pt in iter {
        context.line_to(*pt.x_coord(), *pt.y_coord());
      }
    }
    context.close_path();
    context.stroke();
  }

  /// Fill a small circular marker centered on `pt`.
  pub fn fill_dot(pt: &Point<Num, 2>, radius: f64) {
    let context = context();

    context.begin_path();
    context
      .arc(
        *pt.x_coord(),
        *pt.y_coord(),
        radius,
        0.0,
        std::f64::consts::PI * 2.,
      )
      .unwrap_throw();
    context.fill();
  }

  pub fn on_mousemove<F>(callback: F)
  where
    F: Fn(&web_sys::MouseEvent) + 'static,
  {
    let canvas = canvas();
    let listener = EventListener::new(&canvas, "mousemove", move |event| {
      let event = event.dyn_ref::<web_sys::MouseEvent>().unwrap_throw();
      callback(event)
    });
    listener.forget();
  }

  pub fn on_touchmove<F>(callback: F)
  where
    F: Fn(&web_sys::TouchEvent) + 'static,
  {
    let canvas = canvas();
    let listener = EventListener::new(&canvas, "touchmove", move |event| {
      let event = event.dyn_ref::<web_sys::TouchEvent>().unwrap_throw();
      callback(event)
    });
    listener.forget();
  }
}

pub mod runner {
  use super::playground::*;
  use gloo_render::{request_animation_frame, AnimationFrame};
  use std::cell::RefCell;

  thread_local! {
    static FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
  }

  /// Wire up pointer tracking and start the frame loop. Runs until the
  /// page is torn down; there is no stop condition.
  pub fn run(draw: fn()) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    on_mousemove(upd_mouse);
    on_touchmove(upd_touch);

    tick(draw);
  }

  // Draw one frame and queue the next. Dropping an AnimationFrame handle
  // cancels its callback, so the pending handle is parked in a
  // thread-local until the next frame replaces it.
  fn tick(draw: fn()) {
    clear_screen();
    draw();

    let handle = request_animation_frame(move |_timestamp| tick(draw));
    FRAME.with(|frame| *frame.borrow_mut() = Some(handle));
  }
}

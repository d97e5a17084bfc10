use nearpoint_wasm::playground::*;
use wasm_bindgen::prelude::*;

use nearpoint::algorithms::closest_boundary_point;
use nearpoint::data::{Point, Polygon};
use once_cell::sync::Lazy;

// Layout positions.
const ROW1_Y: Num = 150.;
const ROW2_Y: Num = 380.;
const COL_LEFT: Num = 200.;
const COL_RIGHT: Num = 520.;

const STROKE_WIDTH: f64 = 2.;
const DOT_RADIUS: f64 = 5.;

// Built once at startup; draw order is fixed.
static SCENE: Lazy<Vec<Polygon<Num>>> = Lazy::new(|| {
  vec![
    Polygon::regular_upright(COL_LEFT, ROW1_Y, 90., 3).unwrap(),
    Polygon::rectangle_from_center(COL_RIGHT, ROW1_Y, 160., 160.),
    Polygon::chevron(COL_LEFT, ROW2_Y, 180., 160., 70.),
    Polygon::regular_upright(COL_RIGHT, ROW2_Y, 80., 5).unwrap(),
  ]
});

fn demo() {
  let (mx, my) = mouse_position();
  let mouse = Point::new([mx, my]);

  set_stroke_style("#fff");
  set_line_width(STROKE_WIDTH);
  set_fill_style("#fff");

  for poly in SCENE.iter() {
    stroke_polygon(poly);
    fill_dot(&closest_boundary_point(poly, &mouse), DOT_RADIUS);
  }
}

#[wasm_bindgen(start)]
pub fn run() {
  nearpoint_wasm::runner::run(demo);
}

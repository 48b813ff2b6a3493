use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::{Point, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct InputState {
    pub pointer: Point,
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub hovering: bool,
    pub touch: bool,
}

/// Host-written input shared with every effect. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct Inputs {
    state: Rc<Cell<InputState>>,
}

impl Inputs {
    /// The pointer starts at the viewport centre.
    pub fn new(viewport: Viewport, touch: bool) -> Self {
        Self {
            state: Rc::new(Cell::new(InputState {
                pointer: viewport.center(),
                scroll_y: 0.0,
                viewport,
                hovering: false,
                touch,
            })),
        }
    }

    pub fn get(&self) -> InputState {
        self.state.get()
    }

    fn update(&self, f: impl FnOnce(&mut InputState)) {
        let mut s = self.state.get();
        f(&mut s);
        self.state.set(s);
    }

    pub fn pointer_moved(&self, pointer: Point) {
        self.update(|s| s.pointer = pointer);
    }

    pub fn scrolled(&self, scroll_y: f64) {
        self.update(|s| s.scroll_y = scroll_y.max(0.0));
    }

    pub fn resized(&self, viewport: Viewport) {
        self.update(|s| s.viewport = viewport);
    }

    /// Pointer entered or left an interactive element.
    pub fn set_hovering(&self, hovering: bool) {
        self.update(|s| s.hovering = hovering);
    }
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;

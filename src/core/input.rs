// Platform-neutral input events and a small publish/subscribe bus.
//
// The web frontend translates DOM events into `InputEvent`s and publishes
// them; the scene subscribes as an `InputListener`. Tests drive listeners
// directly without a browser.

use super::constants::{ORIENTATION_BETA_BASELINE, ORIENTATION_GAIN, POINTER_GAIN};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in client (CSS) pixels.
    PointerMove { x: f32, y: f32 },
    /// Primary touch position plus the number of active touches.
    TouchMove { x: f32, y: f32, touches: u32 },
    /// Device tilt in degrees; either angle may be unavailable.
    Orientation { beta: Option<f32>, gamma: Option<f32> },
    /// Window size in CSS pixels.
    Resize { width: f32, height: f32 },
}

pub trait InputListener {
    fn on_input(&mut self, event: &InputEvent);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Pointer target from a client position: offset from the viewport center.
#[inline]
pub fn pointer_target(viewport: &Viewport, x: f32, y: f32) -> Vec2 {
    (Vec2::new(x, y) - viewport.half()) * POINTER_GAIN
}

/// Pointer target from device tilt, if the device reports both angles.
#[inline]
pub fn orientation_target(beta: Option<f32>, gamma: Option<f32>) -> Option<Vec2> {
    let (beta, gamma) = (beta?, gamma?);
    Some(Vec2::new(
        gamma * ORIENTATION_GAIN,
        (beta - ORIENTATION_BETA_BASELINE) * ORIENTATION_GAIN,
    ))
}

/// Multi-touch gestures are left to the browser.
#[inline]
pub fn is_single_touch(touches: u32) -> bool {
    touches == 1
}

#[derive(Default)]
pub struct InputBus {
    listeners: Vec<Rc<RefCell<dyn InputListener>>>,
}

impl InputBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn InputListener>>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn publish(&self, event: &InputEvent) {
        for l in &self.listeners {
            l.borrow_mut().on_input(event);
        }
    }
}

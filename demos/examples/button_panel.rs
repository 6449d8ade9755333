// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A column of buttons built on a frame tree, driven by a scripted event stream.
//!
//! This example shows how to:
//! - compose a `Button` out of a plain frame and a `MouseLeft` callback,
//! - feed normalized events into the root and use the "consumed" result to decide whether
//!   the application should also record raw key state.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p trellis_demos --example button_panel`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use trellis_frame::{FrameId, FrameTree};
use trellis_input::{InputError, InputState, OperationParam, VirtualKey};

/// A frame that consumes left-button presses and reports them to the application.
#[derive(Debug)]
struct Button {
    frame: FrameId,
    text: String,
}

impl Button {
    fn new(
        tree: &mut FrameTree,
        parent: FrameId,
        rect: Rect,
        text: &str,
        mut on_press: impl FnMut(&str) + 'static,
    ) -> Result<Self, InputError> {
        let frame = tree.insert(Some(parent), rect);
        let label = text.to_owned();
        tree.connect_input(frame, VirtualKey::MouseLeft, move |param| {
            if param.is_press() {
                on_press(&label);
                true
            } else {
                false
            }
        })?;
        Ok(Self {
            frame,
            text: text.to_owned(),
        })
    }
}

/// Raw key state the application keeps for input no frame consumed.
#[derive(Debug, Default)]
struct Model {
    keys: HashMap<VirtualKey, bool>,
    mouse: Point,
}

impl Model {
    fn operate(&mut self, param: &OperationParam) {
        if param.code == VirtualKey::MouseMove {
            if let Some(pos) = param.position {
                self.mouse = pos;
            }
            return;
        }
        self.keys.insert(param.code, param.is_press());
    }
}

fn main() -> Result<(), InputError> {
    env_logger::init();

    let mut tree = FrameTree::new();
    let root = tree.insert(None, Rect::from_origin_size(Point::ZERO, Size::new(640.0, 480.0)));

    let pressed: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut buttons = Vec::new();
    for i in 0..4 {
        let rect = Rect::from_origin_size((10.0, 50.0 + f64::from(i) * 45.0), (130.0, 40.0));
        let sink = pressed.clone();
        let button = Button::new(&mut tree, root, rect, &format!("Button {i}"), move |text| {
            log::info!("{text} pressed");
            sink.borrow_mut().push(text.to_owned());
        })?;
        buttons.push(button);
    }

    // Escape anywhere is handled by the root; it has no geometry requirement for keys.
    tree.connect_input(root, VirtualKey::Escape, |p| {
        if p.is_press() {
            log::info!("escape");
        }
        p.is_press()
    })?;

    let at = |code, state, x, y| OperationParam::pointer(code, state, Point::new(x, y));
    let script = [
        at(VirtualKey::MouseMove, InputState::Press, 20.0, 60.0),
        at(VirtualKey::MouseLeft, InputState::Press, 20.0, 60.0),
        at(VirtualKey::MouseLeft, InputState::Release, 20.0, 60.0),
        // Exactly on the bottom edge of "Button 2".
        at(VirtualKey::MouseLeft, InputState::Press, 140.0, 180.0),
        // Between buttons: nobody takes it.
        at(VirtualKey::MouseLeft, InputState::Press, 300.0, 300.0),
        OperationParam::new(VirtualKey::Escape, InputState::Press),
        OperationParam::new(VirtualKey::S, InputState::Press),
    ];

    let mut model = Model::default();
    for param in &script {
        let consumed = tree.process_input(root, param);
        if !consumed {
            model.operate(param);
        }
        println!(
            "{:?} {:?} at {:?} -> {}",
            param.code,
            param.state,
            param.position,
            if consumed { "consumed" } else { "unhandled" }
        );
    }

    for button in &buttons {
        println!("{} is {:?}", button.text, tree.rect(button.frame));
    }
    println!("pressed: {:?}", pressed.borrow());
    println!("mouse: {:?}, raw keys: {:?}", model.mouse, model.keys);
    Ok(())
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

type Handler<Arguments> = Box<dyn FnMut(&Arguments)>;

/// A list of handlers that are all invoked when the signal is emitted.
///
/// Handlers may connect further handlers while being invoked; those only see
/// the next emission.
pub struct Signal<Arguments: ?Sized> {
    handlers: RefCell<Vec<Handler<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Signal<Arguments> {
    fn default() -> Self {
        Self { handlers: Default::default() }
    }
}

impl<Arguments: ?Sized> Signal<Arguments> {
    pub fn connect(&self, handler: impl FnMut(&Arguments) + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn emit(&self, arguments: &Arguments) {
        let mut handlers = self.handlers.take();

        for handler in handlers.iter_mut() {
            handler(arguments);
        }

        let mut current = self.handlers.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

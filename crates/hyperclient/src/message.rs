//! # Forwarded Calls
//!
//! This module defines the message that travels from a [`HalClient`](crate::HalClient)
//! to its entry resource when a call is forwarded.

use serde_json::Value;
use std::fmt;

/// Optional trailing callback passed through to the resource untouched.
///
/// The resource decides whether, and how often, to call it.
pub type Block = Box<dyn FnMut(Value) -> Value + Send>;

/// A single forwarded call: method name, positional arguments and an optional block.
///
/// # Dynamic Dispatch
/// A HAL resource only learns which relations it exposes after it has been
/// fetched, so the set of callable names is not known at compile time. Instead
/// of a static interface the client carries the call as data and asks the
/// resource whether it [`responds_to`](crate::Resource::responds_to) it first.
pub struct Invocation {
    pub method: String,
    pub args: Vec<Value>,
    pub block: Option<Block>,
}

impl Invocation {
    pub fn new(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            args,
            block: None,
        }
    }

    pub fn with_block<F>(mut self, block: F) -> Self
    where
        F: FnMut(Value) -> Value + Send + 'static,
    {
        self.block = Some(Box::new(block));
        self
    }

    pub fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Calls the block if present, otherwise returns `value` unchanged.
    pub fn yield_value(&mut self, value: Value) -> Value {
        match self.block.as_mut() {
            Some(block) => block(value),
            None => value,
        }
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("method", &self.method)
            .field("args", &self.args)
            .field("block", &self.block.as_ref().map(|_| "<block>"))
            .finish()
    }
}

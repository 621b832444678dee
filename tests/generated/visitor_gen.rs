// Code generated by astv v0.1.0 for module `astv::dispatch_behavior`. DO NOT EDIT.

#![allow(dead_code)]
use super::handlers_gen::*;
/// Whether traversal should descend into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Descend into the node's children.
    Continue,
    /// Skip the node's children.
    Stop,
}
impl Continuation {
    pub fn should_descend(self) -> bool {
        matches!(self, Continuation::Continue)
    }
}
impl ::core::convert::From<bool> for Continuation {
    fn from(descend: bool) -> Self {
        if descend { Continuation::Continue } else { Continuation::Stop }
    }
}
/// A handler shared between several `Visitor` slots.
///
/// Clones point at the same handler, so a value implementing several handler traits can be registered
/// once per trait and inspected after the walk.
pub struct Shared<T>(::std::rc::Rc<::std::cell::RefCell<T>>);
impl<T> Shared<T> {
    pub fn new(handler: T) -> Self {
        Shared(::std::rc::Rc::new(::std::cell::RefCell::new(handler)))
    }
    pub fn borrow(&self) -> ::std::cell::Ref<'_, T> {
        self.0.borrow()
    }
    pub fn borrow_mut(&self) -> ::std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}
impl<T> ::core::clone::Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(::std::rc::Rc::clone(&self.0))
    }
}
impl<T: IdentHandler> IdentHandler for Shared<T> {
    fn ident(&mut self, node: &super::ast::Ident) -> bool {
        <T as IdentHandler>::ident(&mut *self.0.borrow_mut(), node)
    }
}
impl<T: CallExprHandler> CallExprHandler for Shared<T> {
    fn call_expr(&mut self, node: &super::ast::CallExpr) -> bool {
        <T as CallExprHandler>::call_expr(&mut *self.0.borrow_mut(), node)
    }
}
impl<T: DefaultHandler> DefaultHandler for Shared<T> {
    fn handle(&mut self, node: Node<'_>) -> bool {
        <T as DefaultHandler>::handle(&mut *self.0.borrow_mut(), node)
    }
}
/// Routes nodes to the registered handlers.
///
/// Holds at most one handler per node kind plus a catch-all. A node without a kind-specific handler goes
/// to the catch-all; with no catch-all either, traversal continues.
#[derive(Default)]
pub struct Visitor<'h> {
    h_ident: Option<Box<dyn IdentHandler + 'h>>,
    h_call_expr: Option<Box<dyn CallExprHandler + 'h>>,
    h_default: Option<Box<dyn DefaultHandler + 'h>>,
}
impl<'h> Visitor<'h> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Register the `Ident` handler, replacing any previous one.
    pub fn on_ident(&mut self, handler: impl IdentHandler + 'h) -> &mut Self {
        self.h_ident = Some(Box::new(handler));
        self
    }
    /// Register the `CallExpr` handler, replacing any previous one.
    pub fn on_call_expr(&mut self, handler: impl CallExprHandler + 'h) -> &mut Self {
        self.h_call_expr = Some(Box::new(handler));
        self
    }
    /// Register the catch-all handler, replacing any previous one.
    pub fn on_default(&mut self, handler: impl DefaultHandler + 'h) -> &mut Self {
        self.h_default = Some(Box::new(handler));
        self
    }
    /// Whether `visit` would hand `node` to a handler.
    pub fn has_handler_for(&self, node: Node<'_>) -> bool {
        let specific = match node {
            Node::Ident(_) => self.h_ident.is_some(),
            Node::CallExpr(_) => self.h_call_expr.is_some(),
            Node::Other(_) => false,
        };
        specific || self.h_default.is_some()
    }
    /// Dispatch `node` and report whether to descend into its children.
    pub fn visit(&mut self, node: Node<'_>) -> Continuation {
        match node {
            Node::Ident(n) => {
                if let Some(h) = self.h_ident.as_deref_mut() {
                    return Continuation::from(h.ident(n));
                }
            }
            Node::CallExpr(n) => {
                if let Some(h) = self.h_call_expr.as_deref_mut() {
                    return Continuation::from(h.call_expr(n));
                }
            }
            Node::Other(_) => {}
        }
        match self.h_default.as_deref_mut() {
            Some(h) => Continuation::from(h.handle(node)),
            None => Continuation::Continue,
        }
    }
}

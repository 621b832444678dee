// Code generated by astv v0.1.0 for module `astv::dispatch_behavior`. DO NOT EDIT.

#![allow(dead_code)]
/// A syntax-tree node handed to `Visitor::visit`.
///
/// Nodes whose kind has no variant of its own travel as `Other`.
#[derive(Clone, Copy)]
pub enum Node<'ast> {
    Ident(&'ast super::ast::Ident),
    CallExpr(&'ast super::ast::CallExpr),
    Other(&'ast dyn ::std::any::Any),
}
impl<'ast> Node<'ast> {
    /// Kind name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Ident(_) => "Ident",
            Node::CallExpr(_) => "CallExpr",
            Node::Other(_) => "Other",
        }
    }
}
impl<'ast> ::core::convert::From<&'ast super::ast::Ident> for Node<'ast> {
    fn from(node: &'ast super::ast::Ident) -> Self {
        Node::Ident(node)
    }
}
impl<'ast> ::core::convert::From<&'ast super::ast::CallExpr> for Node<'ast> {
    fn from(node: &'ast super::ast::CallExpr) -> Self {
        Node::CallExpr(node)
    }
}
/// Handles `Ident` nodes.
pub trait IdentHandler {
    /// Return `false` to skip the node's children.
    fn ident(&mut self, node: &super::ast::Ident) -> bool;
}
impl<F> IdentHandler for F
where
    F: FnMut(&super::ast::Ident) -> bool,
{
    fn ident(&mut self, node: &super::ast::Ident) -> bool {
        self(node)
    }
}
/// Handles `CallExpr` nodes.
pub trait CallExprHandler {
    /// Return `false` to skip the node's children.
    fn call_expr(&mut self, node: &super::ast::CallExpr) -> bool;
}
impl<F> CallExprHandler for F
where
    F: FnMut(&super::ast::CallExpr) -> bool,
{
    fn call_expr(&mut self, node: &super::ast::CallExpr) -> bool {
        self(node)
    }
}
/// Handles nodes that have no kind-specific handler registered.
pub trait DefaultHandler {
    /// Return `false` to skip the node's children.
    fn handle(&mut self, node: Node<'_>) -> bool;
}
impl<F> DefaultHandler for F
where
    F: FnMut(Node<'_>) -> bool,
{
    fn handle(&mut self, node: Node<'_>) -> bool {
        self(node)
    }
}

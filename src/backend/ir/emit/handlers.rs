//! Emit the handlers artifact: the `Node` sum type and one handler trait per node kind.
//!
//! For every kind `K` the artifact contains:
//!
//! - a `Node::K(&'ast <ast>::K)` variant and a `From<&'ast <ast>::K>` impl,
//! - `pub trait KHandler { fn k(&mut self, node: &<ast>::K) -> bool; }`,
//! - a blanket impl so any `FnMut(&<ast>::K) -> bool` closure is a `KHandler`.
//!
//! After the per-kind contracts comes exactly one catch-all, `DefaultHandler::handle(Node<'_>) -> bool`.
//! Returning `true` from any handler means "descend into this node's children", `false` prunes the subtree.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use astv_core::conventions::{DEFAULT_HANDLER_METHOD, DEFAULT_HANDLER_TRAIT, OTHER_VARIANT};

use super::super::KindIr;
use super::{IrEmitter, ident};

impl<'a> IrEmitter<'a> {
    /// Emit the complete handlers artifact (unformatted).
    #[tracing::instrument(skip_all, fields(kind_count = self.ir.kinds.len()))]
    pub fn emit_handlers(&self) -> TokenStream {
        let node_enum = self.emit_node_enum();
        let node_kind = self.emit_node_kind_fn();
        let from_impls = self.ir.kinds.iter().map(|k| self.emit_node_from(k));
        let contracts = self.ir.kinds.iter().map(|k| self.emit_contract(k));
        let default_contract = self.emit_default_contract();

        quote! {
            #![allow(dead_code)]

            #node_enum
            #node_kind
            #(#from_impls)*
            #(#contracts)*
            #default_contract
        }
    }

    fn emit_node_enum(&self) -> TokenStream {
        let variants = self.ir.kinds.iter().map(|k| {
            let variant = ident(&k.name);
            let ty = self.node_type(k);
            quote! { #variant(&'ast #ty), }
        });
        let other = ident(OTHER_VARIANT);

        quote! {
            /// A syntax-tree node handed to `Visitor::visit`.
            ///
            /// Nodes whose kind has no variant of its own travel as `Other`.
            #[derive(Clone, Copy)]
            pub enum Node<'ast> {
                #(#variants)*
                #other(&'ast dyn ::std::any::Any),
            }
        }
    }

    fn emit_node_kind_fn(&self) -> TokenStream {
        let arms = self.ir.kinds.iter().map(|k| {
            let variant = ident(&k.name);
            let label = Literal::string(&k.name);
            quote! { Node::#variant(_) => #label, }
        });
        let other = ident(OTHER_VARIANT);
        let other_label = Literal::string(OTHER_VARIANT);

        quote! {
            impl<'ast> Node<'ast> {
                /// Kind name of this node.
                pub fn kind(&self) -> &'static str {
                    match self {
                        #(#arms)*
                        Node::#other(_) => #other_label,
                    }
                }
            }
        }
    }

    fn emit_node_from(&self, kind: &KindIr) -> TokenStream {
        let variant = ident(&kind.name);
        let ty = self.node_type(kind);

        quote! {
            impl<'ast> ::core::convert::From<&'ast #ty> for Node<'ast> {
                fn from(node: &'ast #ty) -> Self {
                    Node::#variant(node)
                }
            }
        }
    }

    fn emit_contract(&self, kind: &KindIr) -> TokenStream {
        let trait_name = ident(&kind.handler_trait);
        let method = ident(&kind.method);
        let ty = self.node_type(kind);
        let doc = format!(" Handles `{}` nodes.", kind.name);

        quote! {
            #[doc = #doc]
            pub trait #trait_name {
                /// Return `false` to skip the node's children.
                fn #method(&mut self, node: &#ty) -> bool;
            }

            impl<F> #trait_name for F
            where
                F: FnMut(&#ty) -> bool,
            {
                fn #method(&mut self, node: &#ty) -> bool {
                    self(node)
                }
            }
        }
    }

    fn emit_default_contract(&self) -> TokenStream {
        let trait_name = ident(DEFAULT_HANDLER_TRAIT);
        let method = ident(DEFAULT_HANDLER_METHOD);

        quote! {
            /// Handles nodes that have no kind-specific handler registered.
            pub trait #trait_name {
                /// Return `false` to skip the node's children.
                fn #method(&mut self, node: Node<'_>) -> bool;
            }

            impl<F> #trait_name for F
            where
                F: FnMut(Node<'_>) -> bool,
            {
                fn #method(&mut self, node: Node<'_>) -> bool {
                    self(node)
                }
            }
        }
    }
}

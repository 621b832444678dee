//! Emit the visitor artifact: `Continuation`, `Shared`, and the `Visitor` dispatcher.
//!
//! `Visitor<'h>` holds one optional boxed handler per node kind (`h_<kind>`) plus the catch-all `h_default`.
//! Handlers are registered explicitly, one `on_<kind>` call per trait; the last registration wins. `visit` matches
//! on the node's variant, calls the kind-specific handler if one is registered, otherwise the catch-all, and
//! otherwise continues.
//!
//! ## Notes
//! - The artifact reaches the handler traits through `use super::handlers_gen::*;`, so both files must be declared
//!   as sibling modules of the destination crate.
//! - `Shared<T>` lets one value that implements several handler traits occupy several slots at once.

use proc_macro2::TokenStream;
use quote::quote;

use astv_core::conventions::{
    DEFAULT_HANDLER_METHOD, DEFAULT_HANDLER_TRAIT, DEFAULT_REGISTER_FN, DEFAULT_SLOT, HANDLERS_MODULE,
    OTHER_VARIANT,
};

use super::super::KindIr;
use super::{IrEmitter, ident};

impl<'a> IrEmitter<'a> {
    /// Emit the complete visitor artifact (unformatted).
    #[tracing::instrument(skip_all, fields(slot_count = self.ir.slot_count()))]
    pub fn emit_visitor(&self) -> TokenStream {
        let handlers_mod = ident(HANDLERS_MODULE);
        let continuation = self.emit_continuation();
        let shared = self.emit_shared();
        let visitor = self.emit_visitor_struct();
        let visitor_impl = self.emit_visitor_impl();

        quote! {
            #![allow(dead_code)]

            use super::#handlers_mod::*;

            #continuation
            #shared
            #visitor
            #visitor_impl
        }
    }

    fn emit_continuation(&self) -> TokenStream {
        quote! {
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
        }
    }

    fn emit_shared(&self) -> TokenStream {
        let impls = self.ir.kinds.iter().map(|k| self.emit_shared_impl(k));
        let default_trait = ident(DEFAULT_HANDLER_TRAIT);
        let default_method = ident(DEFAULT_HANDLER_METHOD);

        quote! {
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

            #(#impls)*

            impl<T: #default_trait> #default_trait for Shared<T> {
                fn #default_method(&mut self, node: Node<'_>) -> bool {
                    <T as #default_trait>::#default_method(&mut *self.0.borrow_mut(), node)
                }
            }
        }
    }

    fn emit_shared_impl(&self, kind: &KindIr) -> TokenStream {
        let trait_name = ident(&kind.handler_trait);
        let method = ident(&kind.method);
        let ty = self.node_type(kind);

        quote! {
            impl<T: #trait_name> #trait_name for Shared<T> {
                fn #method(&mut self, node: &#ty) -> bool {
                    <T as #trait_name>::#method(&mut *self.0.borrow_mut(), node)
                }
            }
        }
    }

    fn emit_visitor_struct(&self) -> TokenStream {
        let slots = self.ir.kinds.iter().map(|k| {
            let slot = ident(&k.slot);
            let trait_name = ident(&k.handler_trait);
            quote! { #slot: Option<Box<dyn #trait_name + 'h>>, }
        });
        let default_slot = ident(DEFAULT_SLOT);
        let default_trait = ident(DEFAULT_HANDLER_TRAIT);

        quote! {
            /// Routes nodes to the registered handlers.
            ///
            /// Holds at most one handler per node kind plus a catch-all. A node without a kind-specific handler goes
            /// to the catch-all; with no catch-all either, traversal continues.
            #[derive(Default)]
            pub struct Visitor<'h> {
                #(#slots)*
                #default_slot: Option<Box<dyn #default_trait + 'h>>,
            }
        }
    }

    fn emit_visitor_impl(&self) -> TokenStream {
        let registrations = self.ir.kinds.iter().map(|k| {
            let register_fn = ident(&k.register_fn);
            let slot = ident(&k.slot);
            let trait_name = ident(&k.handler_trait);
            let doc = format!(" Register the `{}` handler, replacing any previous one.", k.name);
            quote! {
                #[doc = #doc]
                pub fn #register_fn(&mut self, handler: impl #trait_name + 'h) -> &mut Self {
                    self.#slot = Some(Box::new(handler));
                    self
                }
            }
        });
        let presence_arms = self.ir.kinds.iter().map(|k| {
            let variant = ident(&k.name);
            let slot = ident(&k.slot);
            quote! { Node::#variant(_) => self.#slot.is_some(), }
        });
        let dispatch_arms = self.ir.kinds.iter().map(|k| {
            let variant = ident(&k.name);
            let slot = ident(&k.slot);
            let method = ident(&k.method);
            quote! {
                Node::#variant(n) => {
                    if let Some(h) = self.#slot.as_deref_mut() {
                        return Continuation::from(h.#method(n));
                    }
                }
            }
        });
        let other = ident(OTHER_VARIANT);
        let default_register_fn = ident(DEFAULT_REGISTER_FN);
        let default_slot = ident(DEFAULT_SLOT);
        let default_trait = ident(DEFAULT_HANDLER_TRAIT);
        let default_method = ident(DEFAULT_HANDLER_METHOD);

        quote! {
            impl<'h> Visitor<'h> {
                pub fn new() -> Self {
                    Self::default()
                }

                #(#registrations)*

                /// Register the catch-all handler, replacing any previous one.
                pub fn #default_register_fn(&mut self, handler: impl #default_trait + 'h) -> &mut Self {
                    self.#default_slot = Some(Box::new(handler));
                    self
                }

                /// Whether `visit` would hand `node` to a handler.
                pub fn has_handler_for(&self, node: Node<'_>) -> bool {
                    let specific = match node {
                        #(#presence_arms)*
                        Node::#other(_) => false,
                    };
                    specific || self.#default_slot.is_some()
                }

                /// Dispatch `node` and report whether to descend into its children.
                pub fn visit(&mut self, node: Node<'_>) -> Continuation {
                    match node {
                        #(#dispatch_arms)*
                        Node::#other(_) => {}
                    }
                    match self.#default_slot.as_deref_mut() {
                        Some(h) => Continuation::from(h.#default_method(node)),
                        None => Continuation::Continue,
                    }
                }
            }
        }
    }
}

//! Golden snapshot tests for codegen
//!
//! These tests generate both artifacts for small catalogs and compare an item outline (kinds, names, members)
//! against stored snapshots. This ensures changes to the generated API surface are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use astv::backend::VisitorCodegen;
use astv_core::catalog::Catalog;
use proc_macro2::TokenStream;

fn generate(kinds: &[&str]) -> (syn::File, syn::File) {
    let artifacts = VisitorCodegen::from_catalog(&Catalog::explicit(kinds.iter().copied()), "sample", "syn")
        .expect("generation failed");
    (parse(artifacts.handlers.tokens), parse(artifacts.visitor.tokens))
}

fn parse(tokens: TokenStream) -> syn::File {
    syn::parse2(tokens).expect("generated code does not parse")
}

fn last_ident(path: &syn::Path) -> String {
    path.segments.last().map(|s| s.ident.to_string()).unwrap_or_default()
}

fn self_type(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(p) => last_ident(&p.path),
        _ => "?".to_string(),
    }
}

fn braced(members: Vec<String>) -> String {
    if members.is_empty() {
        String::new()
    } else {
        format!(" {{ {} }}", members.join(", "))
    }
}

/// One line per top-level item.
fn outline(file: &syn::File) -> String {
    let mut lines = Vec::new();
    for item in &file.items {
        let line = match item {
            syn::Item::Use(_) => "use".to_string(),
            syn::Item::Enum(e) => format!(
                "enum {}{}",
                e.ident,
                braced(e.variants.iter().map(|v| v.ident.to_string()).collect())
            ),
            syn::Item::Struct(s) => {
                let fields = match &s.fields {
                    syn::Fields::Named(named) => named
                        .named
                        .iter()
                        .filter_map(|f| f.ident.as_ref().map(|i| i.to_string()))
                        .collect(),
                    _ => Vec::new(),
                };
                format!("struct {}{}", s.ident, braced(fields))
            }
            syn::Item::Trait(t) => {
                let methods = t
                    .items
                    .iter()
                    .filter_map(|i| match i {
                        syn::TraitItem::Fn(f) => Some(format!("fn {}", f.sig.ident)),
                        _ => None,
                    })
                    .collect();
                format!("trait {}{}", t.ident, braced(methods))
            }
            syn::Item::Impl(i) => {
                let methods = i
                    .items
                    .iter()
                    .filter_map(|i| match i {
                        syn::ImplItem::Fn(f) => Some(format!("fn {}", f.sig.ident)),
                        _ => None,
                    })
                    .collect();
                let head = match &i.trait_ {
                    Some((_, path, _)) => format!("impl {} for {}", last_ident(path), self_type(&i.self_ty)),
                    None => format!("impl {}", self_type(&i.self_ty)),
                };
                format!("{}{}", head, braced(methods))
            }
            other => panic!("unexpected item in generated code: {}", quote::quote!(#other)),
        };
        lines.push(line);
    }
    lines.join("\n")
}

#[test]
fn test_handlers_outline() {
    let (handlers, _) = generate(&["Ident", "CallExpr", "Type"]);
    insta::assert_snapshot!("handlers_ident_call_type", outline(&handlers));
}

#[test]
fn test_visitor_outline() {
    let (_, visitor) = generate(&["Ident", "CallExpr", "Type"]);
    insta::assert_snapshot!("visitor_ident_call_type", outline(&visitor));
}

#[test]
fn test_visitor_outline_empty_catalog() {
    let (_, visitor) = generate(&[]);
    insta::assert_snapshot!("visitor_empty_catalog", outline(&visitor));
}

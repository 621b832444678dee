//! Property-based tests for the generator
//!
//! These tests use proptest to verify structural invariants of the generated code across many randomly generated
//! catalogs, catching edge cases that hand-written tests might miss.

use astv::backend::VisitorCodegen;
use astv::backend::ir::CatalogLowering;
use astv_core::catalog::Catalog;
use proptest::prelude::*;

/// Distinct UpperCamel kind names.
fn catalog_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z][a-z0-9]{1,8}", 0..12).prop_map(|set| set.into_iter().collect())
}

fn count_traits(file: &syn::File) -> Vec<&syn::ItemTrait> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Trait(t) => Some(t),
            _ => None,
        })
        .collect()
}

fn visitor_fields(file: &syn::File) -> Option<usize> {
    file.items.iter().find_map(|item| match item {
        syn::Item::Struct(s) if s.ident == "Visitor" => Some(s.fields.len()),
        _ => None,
    })
}

proptest! {
    /// Property: one handler trait per kind plus the catch-all, each with exactly one method.
    #[test]
    fn one_contract_per_kind(kinds in catalog_strategy()) {
        let catalog = Catalog::explicit(kinds.clone());
        let lowered = CatalogLowering::new("m", "syn").lower(&catalog);
        // Random names can still be keywords-in-disguise or reserved; those are covered elsewhere.
        prop_assume!(lowered.is_ok());

        let artifacts = VisitorCodegen::from_catalog(&catalog, "m", "syn").expect("generation");
        let handlers: syn::File = syn::parse2(artifacts.handlers.tokens).expect("handlers parse");
        let traits = count_traits(&handlers);
        prop_assert_eq!(traits.len(), kinds.len() + 1);
        for t in traits {
            prop_assert_eq!(t.items.len(), 1);
        }
    }

    /// Property: the visitor has one slot per kind plus the catch-all slot.
    #[test]
    fn one_slot_per_kind(kinds in catalog_strategy()) {
        let catalog = Catalog::explicit(kinds.clone());
        prop_assume!(CatalogLowering::new("m", "syn").lower(&catalog).is_ok());

        let artifacts = VisitorCodegen::from_catalog(&catalog, "m", "syn").expect("generation");
        let visitor: syn::File = syn::parse2(artifacts.visitor.tokens).expect("visitor parses");
        prop_assert_eq!(visitor_fields(&visitor), Some(kinds.len() + 1));
    }

    /// Property: identical inputs produce byte-identical unformatted text.
    #[test]
    fn generation_is_deterministic(kinds in catalog_strategy(), module in "[a-z][a-z_]{0,10}") {
        let catalog = Catalog::explicit(kinds);
        prop_assume!(CatalogLowering::new(module.as_str(), "syn").lower(&catalog).is_ok());

        let first = VisitorCodegen::from_catalog(&catalog, &module, "syn").expect("generation");
        let second = VisitorCodegen::from_catalog(&catalog, &module, "syn").expect("generation");
        prop_assert_eq!(first.handlers.source(), second.handlers.source());
        prop_assert_eq!(first.visitor.source(), second.visitor.source());
        prop_assert_eq!(first.handlers.header, second.handlers.header);
    }
}

//! Node-kind catalog: the single source of truth for which contracts and dispatch cases get generated.
//!
//! A catalog is an ordered list of node-kind names. It comes either from the built-in table below or from a
//! caller-supplied list (usually the `--ast` flag). Order only affects emission order in the generated text.
//!
//! ## Notes
//! - Resolution never validates: a caller-supplied list is taken as-is, duplicates and empty entries included.
//!   The `astv` crate rejects malformed lists when lowering the catalog.
//! - The built-in table tracks the public syntax-tree types of `syn` 2.x with the `full` feature. Bump
//!   [`BUILTIN_CATALOG_VERSION`] whenever the table changes.

/// Version of the built-in catalog table.
pub const BUILTIN_CATALOG_VERSION: &str = "syn-2.0";

/// Built-in node kinds, in emission order.
pub const BUILTIN_NODE_KINDS: &[&str] = &[
    "Abi",
    "AngleBracketedGenericArguments",
    "Arm",
    "AssocConst",
    "AssocType",
    "Attribute",
    "BareFnArg",
    "BareVariadic",
    "BinOp",
    "Block",
    "BoundLifetimes",
    "ConstParam",
    "Constraint",
    "Expr",
    "ExprArray",
    "ExprAssign",
    "ExprAsync",
    "ExprAwait",
    "ExprBinary",
    "ExprBlock",
    "ExprBreak",
    "ExprCall",
    "ExprCast",
    "ExprClosure",
    "ExprConst",
    "ExprContinue",
    "ExprField",
    "ExprForLoop",
    "ExprGroup",
    "ExprIf",
    "ExprIndex",
    "ExprInfer",
    "ExprLet",
    "ExprLit",
    "ExprLoop",
    "ExprMacro",
    "ExprMatch",
    "ExprMethodCall",
    "ExprParen",
    "ExprPath",
    "ExprRange",
    "ExprReference",
    "ExprRepeat",
    "ExprReturn",
    "ExprStruct",
    "ExprTry",
    "ExprTryBlock",
    "ExprTuple",
    "ExprUnary",
    "ExprUnsafe",
    "ExprWhile",
    "ExprYield",
    "Field",
    "FieldPat",
    "FieldValue",
    "Fields",
    "FieldsNamed",
    "FieldsUnnamed",
    "File",
    "FnArg",
    "ForeignItem",
    "ForeignItemFn",
    "ForeignItemMacro",
    "ForeignItemStatic",
    "ForeignItemType",
    "GenericArgument",
    "GenericParam",
    "Generics",
    "Ident",
    "ImplItem",
    "ImplItemConst",
    "ImplItemFn",
    "ImplItemMacro",
    "ImplItemType",
    "Index",
    "Item",
    "ItemConst",
    "ItemEnum",
    "ItemExternCrate",
    "ItemFn",
    "ItemForeignMod",
    "ItemImpl",
    "ItemMacro",
    "ItemMod",
    "ItemStatic",
    "ItemStruct",
    "ItemTrait",
    "ItemTraitAlias",
    "ItemType",
    "ItemUnion",
    "ItemUse",
    "Label",
    "Lifetime",
    "LifetimeParam",
    "Lit",
    "LitBool",
    "LitByte",
    "LitByteStr",
    "LitChar",
    "LitFloat",
    "LitInt",
    "LitStr",
    "Local",
    "LocalInit",
    "Macro",
    "Member",
    "Meta",
    "MetaList",
    "MetaNameValue",
    "ParenthesizedGenericArguments",
    "Pat",
    "PatIdent",
    "PatOr",
    "PatParen",
    "PatReference",
    "PatRest",
    "PatSlice",
    "PatStruct",
    "PatTuple",
    "PatTupleStruct",
    "PatType",
    "PatWild",
    "Path",
    "PathArguments",
    "PathSegment",
    "QSelf",
    "Receiver",
    "ReturnType",
    "Signature",
    "Stmt",
    "StmtMacro",
    "TraitBound",
    "TraitItem",
    "TraitItemConst",
    "TraitItemFn",
    "TraitItemMacro",
    "TraitItemType",
    "Type",
    "TypeArray",
    "TypeBareFn",
    "TypeGroup",
    "TypeImplTrait",
    "TypeInfer",
    "TypeMacro",
    "TypeNever",
    "TypeParam",
    "TypeParamBound",
    "TypeParen",
    "TypePath",
    "TypePtr",
    "TypeReference",
    "TypeSlice",
    "TypeTraitObject",
    "TypeTuple",
    "UnOp",
    "UseGlob",
    "UseGroup",
    "UseName",
    "UsePath",
    "UseRename",
    "UseTree",
    "Variadic",
    "Variant",
    "VisRestricted",
    "Visibility",
    "WhereClause",
    "WherePredicate",
];

/// Where a catalog's entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in [`BUILTIN_NODE_KINDS`] table.
    Builtin,
    /// A caller-supplied list.
    Explicit,
}

/// An ordered list of node-kind names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kinds: Vec<String>,
    source: CatalogSource,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            kinds: BUILTIN_NODE_KINDS.iter().map(|k| (*k).to_string()).collect(),
            source: CatalogSource::Builtin,
        }
    }

    /// A caller-supplied catalog, taken exactly as given (an empty list stays empty).
    pub fn explicit<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
            source: CatalogSource::Explicit,
        }
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}

/// Resolve the catalog for a generation run.
///
/// A non-empty `explicit` list is used verbatim, in order. An empty list selects the built-in catalog.
///
/// ## Examples
/// ```rust
/// use astv_core::catalog::resolve_catalog;
///
/// let explicit = vec!["Ident".to_string(), "CallExpr".to_string()];
/// assert_eq!(resolve_catalog(&explicit).kinds(), &explicit[..]);
/// assert!(resolve_catalog(&[]).len() > 100);
/// ```
pub fn resolve_catalog(explicit: &[String]) -> Catalog {
    if explicit.is_empty() {
        Catalog::builtin()
    } else {
        Catalog::explicit(explicit.iter().cloned())
    }
}

/// Split a comma-separated kind list.
///
/// Whitespace around each entry is trimmed. Empty entries are kept (as empty strings) so that validation can report
/// them with their position; an input that is empty or only whitespace yields an empty list.
pub fn parse_kind_list(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(|entry| entry.trim().to_string()).collect()
}

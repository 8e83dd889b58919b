//! Facet registry
//!
//! Static, read-only catalog of the three search facets:
//!
//! - **Methods** - the cooking appliance, which contributes the query prefix
//! - **Categories** - the diet type, which owns an ordered subcategory list
//! - **Subcategories** - the dish or ingredient term appended to the prefix
//!
//! Lookups are over fixed, compile-time lists. A miss means a stale or
//! mistyped id reached the registry; callers decide whether to fall back
//! (the coordinator) or report it (the CLI).

use serde::Serialize;

/// Query prefix used when the active method id does not resolve
pub const FALLBACK_PREFIX: &str = "Indian Recipe";

/// Method selected at startup
pub const DEFAULT_METHOD_ID: &str = "instantpot";

/// Category selected at startup
pub const DEFAULT_CATEGORY_ID: &str = "veg";

/// A cooking method (appliance) facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Method {
    pub id: &'static str,
    pub label: &'static str,
    /// Text placed in front of every facet-derived query
    pub query_prefix: &'static str,
}

/// A subcategory (dish or ingredient) facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subcategory {
    /// Display name shown on the pill
    pub name: &'static str,
    /// Search term appended to the method prefix
    pub term: &'static str,
}

/// A cuisine category facet with its ordered subcategories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    /// Empty for the "no filter" category
    pub subcategories: &'static [Subcategory],
}

impl Category {
    /// Term of the first subcategory, or `""` when the category has none
    #[must_use]
    pub fn first_term(&self) -> &'static str {
        self.subcategories.first().map_or("", |sub| sub.term)
    }

    /// Whether `term` is a valid subcategory term for this category
    ///
    /// The empty term is valid only for a category without subcategories.
    #[must_use]
    pub fn accepts_term(&self, term: &str) -> bool {
        if self.subcategories.is_empty() {
            term.is_empty()
        } else {
            self.subcategories.iter().any(|sub| sub.term == term)
        }
    }

    /// Resolve a subcategory by its term or display name (case-insensitive)
    #[must_use]
    pub fn find_subcategory(&self, name_or_term: &str) -> Option<&'static Subcategory> {
        let needle = name_or_term.trim();
        self.subcategories.iter().find(|sub| {
            sub.term.eq_ignore_ascii_case(needle) || sub.name.eq_ignore_ascii_case(needle)
        })
    }
}

static METHODS: [Method; 3] = [
    Method {
        id: "instantpot",
        label: "Instant Pot",
        query_prefix: "Instant Pot",
    },
    Method {
        id: "airfryer",
        label: "Air Fryer",
        query_prefix: "Air Fryer",
    },
    Method {
        id: "traditional",
        label: "Traditional",
        query_prefix: "Indian Recipe",
    },
];

static CATEGORIES: [Category; 5] = [
    Category {
        id: "all",
        label: "All Recipes",
        subcategories: &[],
    },
    Category {
        id: "veg",
        label: "Vegetarian",
        subcategories: &[
            Subcategory { name: "Paneer", term: "Paneer" },
            Subcategory { name: "Dal (Lentils)", term: "Dal" },
            Subcategory { name: "Sabzi (Dry Veg)", term: "Sabzi" },
            Subcategory { name: "Rice / Biryani", term: "Veg Biryani" },
            Subcategory { name: "Indian Breads", term: "Naan Roti Paratha" },
            Subcategory { name: "Breakfast (Nashta)", term: "Indian Breakfast" },
        ],
    },
    Category {
        id: "nonveg",
        label: "Non-Vegetarian",
        subcategories: &[
            Subcategory { name: "Chicken", term: "Chicken Curry" },
            Subcategory { name: "Mutton / Lamb", term: "Mutton Curry" },
            Subcategory { name: "Fish / Seafood", term: "Fish Curry" },
            Subcategory { name: "Egg", term: "Egg Curry" },
            Subcategory { name: "Keema", term: "Keema Recipe" },
            Subcategory { name: "Biryani", term: "Chicken Biryani" },
        ],
    },
    Category {
        id: "snacks",
        label: "Snacks (Chaat)",
        subcategories: &[
            Subcategory { name: "Fried Snacks", term: "Samosa Pakora" },
            Subcategory { name: "Street Chaat", term: "Pani Puri Chaat" },
            Subcategory { name: "Tandoori Starters", term: "Tandoori Tikka" },
            Subcategory { name: "Indo-Chinese", term: "Manchurian Noodles" },
        ],
    },
    Category {
        id: "dessert",
        label: "Desserts",
        subcategories: &[
            Subcategory { name: "Hot Sweets", term: "Gulab Jamun Halwa" },
            Subcategory { name: "Cold Sweets", term: "Kulfi Rasmalai" },
        ],
    },
];

/// All cooking methods, in display order
#[must_use]
pub fn methods() -> &'static [Method] {
    &METHODS
}

/// All categories, in display order
#[must_use]
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a method by id
#[must_use]
pub fn find_method(id: &str) -> Option<&'static Method> {
    METHODS.iter().find(|method| method.id == id)
}

/// Look up a category by id
#[must_use]
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Comma-separated list of method ids, for error messages
#[must_use]
pub fn method_ids() -> String {
    METHODS.iter().map(|m| m.id).collect::<Vec<_>>().join(", ")
}

/// Comma-separated list of category ids, for error messages
#[must_use]
pub fn category_ids() -> String {
    CATEGORIES.iter().map(|c| c.id).collect::<Vec<_>>().join(", ")
}

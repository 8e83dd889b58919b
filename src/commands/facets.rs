//! Facets command - list cooking methods, categories and dishes

use crate::{config::KhanaConfig, facets, output};

/// Execute the facets command
///
/// The configured startup method and category are marked with `*`. Quiet
/// mode prints bare ids, one per line.
pub fn execute(config: &KhanaConfig, quiet: bool) {
    if quiet {
        for method in facets::methods() {
            println!("{}", method.id);
        }
        for category in facets::categories() {
            println!("{}", category.id);
        }
        return;
    }

    println!("Cooking methods:");
    for method in facets::methods() {
        println!("{}", output::method_line(method, method.id == config.default_method));
    }

    println!("\nCategories:");
    for category in facets::categories() {
        println!(
            "{}",
            output::category_block(category, category.id == config.default_category)
        );
    }
}

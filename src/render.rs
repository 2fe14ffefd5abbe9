//! Plain-text rendering used by the command-line front end.

use crate::model::{Cocktail, ImageSize};
use crate::resolver::{extract_ingredient_lines, SearchOutcome};

/// Full recipe card for a single cocktail
pub fn render_details(cocktail: &Cocktail) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", cocktail.name));
    out.push_str(&format!("{}\n", "=".repeat(cocktail.name.chars().count())));

    for (label, value) in [
        ("Category", &cocktail.category),
        ("Glass", &cocktail.glass),
        ("Type", &cocktail.alcoholic_type),
    ] {
        if let Some(value) = value {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
    if !cocktail.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", cocktail.tags.join(", ")));
    }

    let lines: Vec<String> = extract_ingredient_lines(cocktail)
        .map(|line| format!("  - {}\n", line))
        .collect();
    if !lines.is_empty() {
        out.push_str("\nIngredients:\n");
        out.push_str(&lines.concat());
    }

    if let Some(instructions) = &cocktail.instructions {
        out.push_str(&format!("\nInstructions:\n{}\n", instructions));
    }

    out.push_str(&format!(
        "\nImage: {}\n",
        cocktail.image_url(ImageSize::Medium)
    ));
    out
}

/// Numbered result list; each entry carries the id needed for `lookup`
pub fn render_list(cocktails: &[Cocktail]) -> String {
    let mut out = String::from("Search Results\n");
    for (i, cocktail) in cocktails.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} [{}] {}\n",
            i + 1,
            cocktail.name,
            cocktail.id,
            cocktail.image_url(ImageSize::Preview)
        ));
    }
    out
}

/// Text for any outcome. Failures and empty results yield `Err` with the
/// user-facing message.
pub fn render_outcome(outcome: &SearchOutcome) -> Result<String, String> {
    match outcome {
        SearchOutcome::Single(cocktail) => Ok(render_details(cocktail)),
        SearchOutcome::Many(cocktails) => Ok(render_list(cocktails)),
        SearchOutcome::Empty => Err(crate::FailureReason::NoResultsFound.to_string()),
        SearchOutcome::Failed(reason) => Err(reason.to_string()),
    }
}

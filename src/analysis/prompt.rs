/// Builds the fixed analysis prompt for one ingredient.
pub fn build_prompt(ingredient_name: &str) -> String {
    format!(
        r#"
Analyze the skincare ingredient: "{ingredient_name}"

Provide your analysis in a JSON object with the following schema:
- "purpose": A brief description of the ingredient's function.
- "safety_rating": A rating which must be one of "Safe", "Caution", or "Avoid".
- "notes": A single, concise sentence explaining potential risks or considerations.
"#
    )
    .trim()
    .to_string()
}

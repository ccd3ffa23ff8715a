use shared::tool::ToolInfo;

use crate::controller::PromptTool;

#[derive(Debug, Clone, Default)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub dietary_restrictions: Vec<String>,
    pub cooking_time: String,
    pub skill_level: String,
    pub servings: u32,
}

#[derive(Debug, Default)]
pub struct RecipeGenerator;

impl PromptTool for RecipeGenerator {
    type Request = RecipeRequest;

    const INFO: ToolInfo = ToolInfo {
        id: "recipe",
        name: "Recipe Generator",
        description: "Create unique recipes with detailed instructions",
        route: "recipe",
    };

    fn validate(&self, r: &RecipeRequest) -> Result<(), String> {
        if r.ingredients.is_empty() {
            return Err("Please enter at least one main ingredient".to_string());
        }
        Ok(())
    }

    fn build_prompt(&self, r: &RecipeRequest) -> String {
        format!(
            r#"As a professional chef, create a unique and detailed recipe with the following requirements:

Main Ingredients: {ingredients}
Cuisine Type: {cuisine}
Dietary Restrictions: {dietary}
Cooking Time: {cooking_time}
Skill Level: {skill_level}
Servings: {servings}

Please provide:
1. Recipe Title
2. Brief Description
3. Preparation Time & Cooking Time
4. Complete Ingredients List with Measurements
5. Step-by-Step Instructions
6. Nutritional Information (approximate)
7. Chef's Tips and Variations
8. Storage and Reheating Instructions

Additional Requirements:
- Make the recipe easy to follow
- Include cooking techniques explanation
- Suggest possible ingredient substitutions
- Add presentation tips
- Include any special equipment needed

Format the response with clear sections and proper markdown."#,
            ingredients = r.ingredients.join(", "),
            cuisine = r.cuisine,
            dietary = r.dietary_restrictions.join(", "),
            cooking_time = r.cooking_time,
            skill_level = r.skill_level,
            servings = r.servings,
        )
    }
}

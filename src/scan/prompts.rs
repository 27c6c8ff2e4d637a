//! Fixed instruction prompts for the two scan operations. The JSON shapes
//! requested here must stay in sync with the dto types.

pub const NUTRITION_SYSTEM: &str = r#"You are a nutrition expert AI. Analyze the food image and return ONLY valid JSON with this exact structure:
{
  "foodName": "descriptive name of the dish",
  "calories": number,
  "protein": number (grams),
  "carbs": number (grams),
  "fats": number (grams),
  "fiber": number (grams),
  "servingSize": "estimated serving size",
  "confidence": number (1-100),
  "breakdown": [
    {"name": "ingredient", "percentage": number, "calories": number}
  ]
}"#;

pub const NUTRITION_INSTRUCTION: &str = "Analyze this food image and provide detailed nutrition information. Be as accurate as possible with calorie and macro estimates.";

pub const NUTRITION_MAX_TOKENS: u32 = 1000;

pub const IDENTIFY_SYSTEM: &str = r#"You are a food identification expert. Analyze the food image and provide:
1. The most accurate dish name (be specific - include cuisine type if relevant)
2. Alternative names or variations of the dish
3. Main ingredients visible
4. Estimated serving size

Respond in JSON format:
{
  "dishName": "Primary dish name",
  "alternativeNames": ["name1", "name2"],
  "mainIngredients": ["ingredient1", "ingredient2"],
  "servingSize": "estimated portion size",
  "confidence": "confidence level (high/medium/low)"
}"#;

pub const IDENTIFY_INSTRUCTION: &str = "Identify this food dish and provide detailed information about it.";

pub const IDENTIFY_MAX_TOKENS: u32 = 500;

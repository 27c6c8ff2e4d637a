use anyhow::Context;
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

use super::dto::{DishConfidence, DishInfo, NutritionAnalysis};
use super::{extract, prompts};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::RecordStore;
use crate::vision::VisionPrompt;

/// Best-effort dish naming. Upstream and configuration failures are fatal;
/// an unparseable reply is not, it degrades to a synthetic result built from
/// the raw text.
pub async fn identify_dish(state: &AppState, image_data: &str) -> Result<DishInfo> {
    let vision = state
        .vision
        .as_ref()
        .ok_or(AppError::Configuration("OpenAI API key"))?;

    let text = vision
        .complete(VisionPrompt {
            system: prompts::IDENTIFY_SYSTEM,
            instruction: prompts::IDENTIFY_INSTRUCTION,
            image_url: image_data,
            max_tokens: prompts::IDENTIFY_MAX_TOKENS,
        })
        .await?;

    Ok(parse_dish_info(&text))
}

pub(crate) fn parse_dish_info(text: &str) -> DishInfo {
    match serde_json::from_str::<DishInfo>(text) {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, "dish reply was not the requested JSON, degrading to raw text");
            let first_line = extract::first_line(text);
            DishInfo {
                dish_name: if first_line.is_empty() {
                    "Unknown Dish".into()
                } else {
                    first_line.to_string()
                },
                alternative_names: Vec::new(),
                main_ingredients: Vec::new(),
                serving_size: "Medium portion".into(),
                confidence: DishConfidence::Medium,
                raw_response: Some(text.to_string()),
            }
        }
    }
}

/// Calorie/macro estimate. Unlike identification this hard-fails when the
/// reply cannot be parsed. When a user id was supplied and the store is
/// configured, the result is also persisted; that insert is best-effort and
/// never changes the response.
pub async fn analyze_food(
    state: &AppState,
    image_data: &str,
    user_id: Option<&str>,
) -> Result<NutritionAnalysis> {
    let vision = state
        .vision
        .as_ref()
        .ok_or(AppError::Configuration("OpenAI API key"))?;

    if image_data.is_empty() {
        return Err(AppError::Input("No image data provided"));
    }

    let text = vision
        .complete(VisionPrompt {
            system: prompts::NUTRITION_SYSTEM,
            instruction: prompts::NUTRITION_INSTRUCTION,
            image_url: image_data,
            max_tokens: prompts::NUTRITION_MAX_TOKENS,
        })
        .await?;

    let analysis = parse_nutrition(&text)?;

    if let (Some(user_id), Some(store)) = (user_id, state.store.as_ref()) {
        match persist_food_log(store.as_ref(), user_id, image_data, &analysis).await {
            Ok(()) => info!(%user_id, food = %analysis.food_name, "food log saved"),
            Err(e) => warn!(error = %e, %user_id, "failed to persist food log"),
        }
    }

    Ok(analysis)
}

pub(crate) fn parse_nutrition(text: &str) -> Result<NutritionAnalysis> {
    let block = extract::json_block(text).ok_or(AppError::Parse)?;
    serde_json::from_str(block).map_err(|e| {
        warn!(error = %e, "extracted block did not decode as a nutrition object");
        AppError::Parse
    })
}

async fn persist_food_log(
    store: &dyn RecordStore,
    user_id: &str,
    image_data: &str,
    analysis: &NutritionAnalysis,
) -> anyhow::Result<()> {
    let created_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format created_at")?;

    let row = json!({
        "user_id": user_id,
        "image_url": extract::truncate_image_ref(image_data),
        "food_name": analysis.food_name,
        "calories": analysis.calories,
        "protein": analysis.protein,
        "carbs": analysis.carbs,
        "fats": analysis.fats,
        "fiber": analysis.fiber,
        "serving_size": analysis.serving_size,
        "confidence": analysis.confidence,
        "breakdown": analysis.breakdown,
        "created_at": created_at,
    });

    store.insert("food_logs", row).await
}

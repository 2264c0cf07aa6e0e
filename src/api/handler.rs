use super::error::ApiErrorCode;
use crate::application_port::{
    AdventurePatch, AdventureService, InteractionService, NewAdventure,
};
use crate::domain_model::{AdventureId, InteractionKind, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::{self, reject};

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub async fn health() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&HealthResponse { status: "ok" }))
}

pub async fn add_interaction(
    adventure_id: AdventureId,
    kind: InteractionKind,
    user_id: UserId,
    interaction_service: Arc<dyn InteractionService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    interaction_service
        .add(kind, user_id, adventure_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ToggleResponse { success: true }))
}

pub async fn remove_interaction(
    adventure_id: AdventureId,
    kind: InteractionKind,
    user_id: UserId,
    interaction_service: Arc<dyn InteractionService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    interaction_service
        .remove(kind, user_id, adventure_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ToggleResponse { success: true }))
}

pub async fn list_interactions(
    user_id: UserId,
    interaction_service: Arc<dyn InteractionService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let interactions = interaction_service
        .list(user_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&interactions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdventureRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdventureRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}

pub async fn create_adventure(
    user_id: UserId,
    body: CreateAdventureRequest,
    adventure_service: Arc<dyn AdventureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let adventure = adventure_service
        .create(
            user_id,
            NewAdventure {
                title: body.title,
                description: body.description,
                is_published: body.is_published,
            },
        )
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&adventure))
}

pub async fn fetch_adventure(
    adventure_id: AdventureId,
    user_id: UserId,
    adventure_service: Arc<dyn AdventureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let adventure = adventure_service
        .fetch(user_id, adventure_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&adventure))
}

pub async fn list_adventures(
    user_id: UserId,
    adventure_service: Arc<dyn AdventureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let adventures = adventure_service
        .list_by_author(user_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&adventures))
}

pub async fn update_adventure(
    adventure_id: AdventureId,
    user_id: UserId,
    body: UpdateAdventureRequest,
    adventure_service: Arc<dyn AdventureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let adventure = adventure_service
        .update(
            user_id,
            adventure_id,
            AdventurePatch {
                title: body.title,
                description: body.description,
                is_published: body.is_published,
            },
        )
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&adventure))
}

pub async fn delete_adventure(
    adventure_id: AdventureId,
    user_id: UserId,
    adventure_service: Arc<dyn AdventureService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    adventure_service
        .delete(user_id, adventure_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ToggleResponse { success: true }))
}

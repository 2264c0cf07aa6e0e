use super::error::ApiErrorCode;
use super::handler;
use crate::application_port::AuthService;
use crate::domain_model::{AdventureId, InteractionKind, UserId};
use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, reject};

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let health = warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .and_then(handler::health);

    // "interactions" is matched before the :adventureId/:kind pair so the
    // aggregate read never parses as a toggle.
    let list_interactions = warp::get()
        .and(warp::path("players"))
        .and(warp::path("adventures"))
        .and(warp::path("interactions"))
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.interaction_service.clone()))
        .and_then(handler::list_interactions);

    let add_interaction = warp::post()
        .and(warp::path("players"))
        .and(warp::path("adventures"))
        .and(warp::path::param::<AdventureId>())
        .and(warp::path::param::<InteractionKind>())
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.interaction_service.clone()))
        .and_then(handler::add_interaction);

    let remove_interaction = warp::delete()
        .and(warp::path("players"))
        .and(warp::path("adventures"))
        .and(warp::path::param::<AdventureId>())
        .and(warp::path::param::<InteractionKind>())
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.interaction_service.clone()))
        .and_then(handler::remove_interaction);

    let list_adventures = warp::get()
        .and(warp::path("creators"))
        .and(warp::path("adventures"))
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.adventure_service.clone()))
        .and_then(handler::list_adventures);

    let create_adventure = warp::post()
        .and(warp::path("creators"))
        .and(warp::path("adventures"))
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(warp::body::json())
        .and(with(server.adventure_service.clone()))
        .and_then(handler::create_adventure);

    let fetch_adventure = warp::get()
        .and(warp::path("creators"))
        .and(warp::path("adventures"))
        .and(warp::path::param::<AdventureId>())
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.adventure_service.clone()))
        .and_then(handler::fetch_adventure);

    let update_adventure = warp::put()
        .and(warp::path("creators"))
        .and(warp::path("adventures"))
        .and(warp::path::param::<AdventureId>())
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(warp::body::json())
        .and(with(server.adventure_service.clone()))
        .and_then(handler::update_adventure);

    let delete_adventure = warp::delete()
        .and(warp::path("creators"))
        .and(warp::path("adventures"))
        .and(warp::path::param::<AdventureId>())
        .and(warp::path::end())
        .and(with_authentication(server.auth_service.clone()))
        .and(with(server.adventure_service.clone()))
        .and_then(handler::delete_adventure);

    // The SPA is served from its own origin, so every route answers
    // cross-origin requests and preflight OPTIONS.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(["authorization", "content-type"])
        .allow_methods(["GET", "POST", "PUT", "DELETE"]);

    health
        .or(list_interactions)
        .or(add_interaction)
        .or(remove_interaction)
        .or(list_adventures)
        .or(create_adventure)
        .or(fetch_adventure)
        .or(update_adventure)
        .or(delete_adventure)
        .with(cors)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}

/// Resolves the authenticated local user before anything else runs; an
/// unauthenticated request is rejected with 401 and never reaches a handler
/// or the store.
fn with_authentication(
    auth_service: Arc<dyn AuthService>,
) -> impl Filter<Extract = (UserId,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("authorization").and_then(
        move |header: Option<String>| {
            let auth_service = auth_service.clone();
            async move {
                let token = header
                    .as_deref()
                    .and_then(|h| h.strip_prefix("Bearer "))
                    .ok_or_else(|| reject::custom(ApiErrorCode::Unauthorized))?;
                let user_id = auth_service
                    .authenticate(token)
                    .await
                    .map_err(ApiErrorCode::from)
                    .map_err(reject::custom)?;
                Ok::<UserId, warp::Rejection>(user_id)
            }
        },
    )
}

//! Mover administration endpoints

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fleet::{ItemStore, MissionLogStore, MoverStore};
use shared::{Mover, MoverId, MoverPatch, NewMover};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// POST /api/movers
pub async fn create_mover<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    payload: Result<Json<NewMover>, JsonRejection>,
) -> WebServerResult<(StatusCode, Json<Mover>)>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Json(request) = payload?;
    let mover = server.fleet.movers().register(request).await?;
    Ok((StatusCode::CREATED, Json(mover)))
}

/// GET /api/movers
pub async fn list_movers<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
) -> WebServerResult<Json<Vec<Mover>>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    Ok(Json(server.fleet.movers().list().await?))
}

/// GET /api/movers/:id
pub async fn get_mover<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<MoverId>, PathRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    Ok(Json(server.fleet.movers().get(id).await?))
}

/// PUT /api/movers/:id
pub async fn update_mover<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<MoverId>, PathRejection>,
    payload: Result<Json<MoverPatch>, JsonRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(server.fleet.movers().update(id, patch).await?))
}

/// DELETE /api/movers/:id
pub async fn delete_mover<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<MoverId>, PathRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    Ok(Json(server.fleet.movers().delete(id).await?))
}

//! Item catalog endpoints

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fleet::{ItemStore, MissionLogStore, MoverStore};
use shared::{Item, ItemId, ItemPatch, NewItem};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// POST /api/items
pub async fn create_item<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> WebServerResult<(StatusCode, Json<Item>)>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Json(request) = payload?;
    let item = server.fleet.items().register(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items
pub async fn list_items<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
) -> WebServerResult<Json<Vec<Item>>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    Ok(Json(server.fleet.items().list().await?))
}

/// GET /api/items/:id
pub async fn get_item<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> WebServerResult<Json<Item>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    Ok(Json(server.fleet.items().get(id).await?))
}

/// PUT /api/items/:id
pub async fn update_item<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<ItemId>, PathRejection>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> WebServerResult<Json<Item>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(server.fleet.items().update(id, patch).await?))
}

/// DELETE /api/items/:id
pub async fn delete_item<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> WebServerResult<Json<Item>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Path(id) = id?;
    Ok(Json(server.fleet.items().delete(id).await?))
}

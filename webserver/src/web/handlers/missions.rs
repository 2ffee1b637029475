//! Mission lifecycle endpoints

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use fleet::{ItemStore, MissionLogStore, MoverStore};
use shared::{LoadRequest, LogQuery, MissionLogEntry, MissionRequest, Mover};

use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// POST /api/missions/load
pub async fn load<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    payload: Result<Json<LoadRequest>, JsonRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Json(request) = payload?;
    let mover = server.fleet.load(request.mover_id, &request.item_ids).await?;
    Ok(Json(mover))
}

/// POST /api/missions/start
pub async fn start<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    payload: Result<Json<MissionRequest>, JsonRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Json(request) = payload?;
    Ok(Json(server.fleet.start_mission(request.mover_id).await?))
}

/// POST /api/missions/end
pub async fn end<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    payload: Result<Json<MissionRequest>, JsonRejection>,
) -> WebServerResult<Json<Mover>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Json(request) = payload?;
    Ok(Json(server.fleet.end_mission(request.mover_id).await?))
}

/// GET /api/missions/mostActive
pub async fn most_active<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
) -> WebServerResult<Json<Vec<Mover>>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    Ok(Json(server.fleet.most_active().await?))
}

/// GET /api/missions/log?moverId=
pub async fn log<M, I, L>(
    State(server): State<WebServer<M, I, L>>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> WebServerResult<Json<Vec<MissionLogEntry>>>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    let Query(query) = query?;
    Ok(Json(server.fleet.mission_logs(query.mover_id).await?))
}

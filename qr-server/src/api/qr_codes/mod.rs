//! Table QR Code API 模块
//!
//! | 路径 | 方法 | 权限 |
//! |------|------|------|
//! | /api/qrcodes/{restaurant_id} | GET | qrcodes:read |
//! | /api/qrcodes/code/{id} | GET | qrcodes:read |
//! | /api/qrcodes/code/{id}/image | GET | qrcodes:read |
//! | /api/qrcodes | POST | qrcodes:manage |
//! | /api/qrcodes/{id} | DELETE | qrcodes:manage |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::permissions::{QR_CODES_MANAGE, QR_CODES_READ};
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/qrcodes", routes())
}

fn routes() -> Router<ServerState> {
    // GET 与 DELETE 共用 "/{id}"：GET 时该段是 restaurant_id
    let read_routes = Router::new()
        .route("/{id}", get(handler::list_by_restaurant))
        .route("/code/{id}", get(handler::get_by_id))
        .route("/code/{id}/image", get(handler::image))
        .layer(middleware::from_fn(require_permission(QR_CODES_READ)));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_permission(QR_CODES_MANAGE)));

    read_routes.merge(manage_routes)
}

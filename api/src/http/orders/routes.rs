use utoipa_axum::{router::OpenApiRouter, routes};

use crate::http::{
    orders::handlers::{
        __path_create_order, __path_delete_order, __path_get_order, create_order, delete_order,
        get_order,
    },
    server::AppState,
};

pub fn order_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_order))
        .routes(routes!(get_order))
        .routes(routes!(delete_order))
}

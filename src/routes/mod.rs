//! 路由配置模块

use crate::handlers;
use crate::middleware::JwtAuth;
use actix_web::web;

/// 配置所有路由
///
/// 静态路径须注册在 `{id}` 路径之前。
pub fn configure(cfg: &mut web::ServiceConfig, jwt_auth: JwtAuth) {
    cfg
        // 健康检查路由（公开）
        .service(
            web::scope("/health")
                .route("", web::get().to(handlers::health))
                .route("/detailed", web::get().to(handlers::health_detailed))
                .route("/ready", web::get().to(handlers::ready))
                .route("/live", web::get().to(handlers::live)),
        )
        .service(
            web::scope("/api/v1")
                // 认证路由
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(handlers::login))
                        .route("/register", web::post().to(handlers::register))
                        .route("/refresh", web::post().to(handlers::refresh_token))
                        .service(
                            web::scope("")
                                .wrap(jwt_auth.clone())
                                .route("/me", web::get().to(handlers::me))
                                .route("/logout", web::post().to(handlers::logout)),
                        ),
                )
                // 电网地图（公开）
                .service(
                    web::scope("/grid-map")
                        .route("", web::get().to(handlers::grid_map))
                        .route("/facilities", web::get().to(handlers::grid_facilities))
                        .route("/lines", web::get().to(handlers::grid_lines))
                        .route("/statistics", web::get().to(handlers::grid_statistics)),
                )
                // 用户管理（个人资料以外仅管理员）
                .service(
                    web::scope("/users")
                        .wrap(jwt_auth.clone())
                        .route("", web::get().to(handlers::list_users))
                        .route("", web::post().to(handlers::create_user))
                        .route("/profile", web::get().to(handlers::get_profile))
                        .route("/profile", web::put().to(handlers::update_profile))
                        .route("/statistics", web::get().to(handlers::user_statistics))
                        .route("/{id}", web::get().to(handlers::get_user))
                        .route("/{id}", web::put().to(handlers::update_user))
                        .route("/{id}", web::delete().to(handlers::delete_user))
                        .route("/{id}/login-history", web::get().to(handlers::login_history)),
                )
                // 基础目录
                .service(
                    web::scope("/categories")
                        .wrap(jwt_auth.clone())
                        .route("/device-types", web::get().to(handlers::list_device_types))
                        .route("/device-types", web::post().to(handlers::create_device_type))
                        .route("/device-types/{id}", web::put().to(handlers::update_device_type))
                        .route("/device-types/{id}", web::delete().to(handlers::delete_device_type))
                        .route("/manufacturers", web::get().to(handlers::list_manufacturers))
                        .route("/manufacturers", web::post().to(handlers::create_manufacturer))
                        .route("/manufacturers/{id}", web::put().to(handlers::update_manufacturer))
                        .route("/manufacturers/{id}", web::delete().to(handlers::delete_manufacturer))
                        .route("/stations", web::get().to(handlers::list_stations))
                        .route("/stations", web::post().to(handlers::create_station))
                        .route("/alert-levels", web::get().to(handlers::list_alert_levels))
                        .route("/alert-levels", web::post().to(handlers::create_alert_level))
                        .route("/alert-statuses", web::get().to(handlers::list_alert_statuses))
                        .route("/alert-statuses", web::post().to(handlers::create_alert_status)),
                )
                .service(
                    web::scope("/system")
                        .wrap(jwt_auth.clone())
                        .route("/configs", web::get().to(handlers::list_system_configs)),
                )
                // 设备
                .service(
                    web::scope("/devices")
                        .wrap(jwt_auth.clone())
                        .route("", web::get().to(handlers::list_devices))
                        .route("", web::post().to(handlers::create_device))
                        .route("/statistics", web::get().to(handlers::device_statistics))
                        .route("/{id}", web::get().to(handlers::get_device))
                        .route("/{id}", web::put().to(handlers::update_device))
                        .route("/{id}", web::delete().to(handlers::delete_device))
                        .route("/{id}/data", web::get().to(handlers::get_device_data))
                        .route("/{id}/data/history", web::get().to(handlers::get_device_history))
                        .route("/{id}/maintenance", web::get().to(handlers::get_device_maintenance)),
                )
                // 预警
                .service(
                    web::scope("/alerts")
                        .wrap(jwt_auth.clone())
                        .route("", web::get().to(handlers::list_alerts))
                        .route("", web::post().to(handlers::create_alert))
                        .route("/statistics", web::get().to(handlers::alert_statistics))
                        .route("/unresolved", web::get().to(handlers::unresolved_alerts))
                        .route("/critical", web::get().to(handlers::critical_alerts))
                        .route("/{id}", web::get().to(handlers::get_alert))
                        .route("/{id}", web::put().to(handlers::update_alert))
                        .route("/{id}", web::delete().to(handlers::delete_alert))
                        .route("/{id}/resolve", web::put().to(handlers::resolve_alert)),
                )
                // 仪表盘
                .service(
                    web::scope("/dashboard")
                        .wrap(jwt_auth)
                        .route("/overview", web::get().to(handlers::dashboard_overview))
                        .route("/statistics", web::get().to(handlers::dashboard_statistics))
                        .route("/alerts/summary", web::get().to(handlers::dashboard_alert_summary)),
                ),
        );
}

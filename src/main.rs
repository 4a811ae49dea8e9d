//! PowerGrid - 电网设备管理后端服务

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use powergrid::{
    config::{CorsSettings, LoggingSettings, Settings},
    db::PostgresPool,
    fake_data::FakeDataService,
    handlers::OptionalPool,
    middleware::{JwtAuth, RequestLogger},
    repositories::{
        CategoryRepository, CategoryStore, DemoSeeder, SeedData, UserRepository, UserStore,
    },
    routes,
    security::{JwtManager, Secrets},
    services::{
        AlertService, AuthService, CategoryService, DashboardService, DeviceService,
        GridMapService, UserService,
    },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("配置加载失败")?;
    init_tracing(&settings.logging);

    info!("⚡ PowerGrid 服务启动中...");

    Secrets::init().context("密钥初始化失败")?;
    let secrets = Secrets::get()?;
    info!("✅ 密钥初始化完成");

    let pg_pool = connect_database(&settings, secrets).await;

    let jwt_manager = Arc::new(JwtManager::new(&settings).context("JWT 初始化失败")?);
    let fake_data = Arc::new(FakeDataService::new(settings.fake_data.seed));
    info!(mode = fake_data.mode(), "✅ 演示数据生成器就绪");

    if settings.database.seed_demo_data {
        if let Some(pool) = &pg_pool {
            seed_database(pool, &fake_data, secrets).await;
        }
    }

    // 初始化仓库
    let user_store: Option<Arc<dyn UserStore>> = pg_pool
        .as_ref()
        .map(|pool| Arc::new(UserRepository::new((**pool).clone())) as Arc<dyn UserStore>);
    let category_store: Option<Arc<dyn CategoryStore>> = pg_pool
        .as_ref()
        .map(|pool| Arc::new(CategoryRepository::new((**pool).clone())) as Arc<dyn CategoryStore>);

    // 初始化服务
    let auth_service = Arc::new(AuthService::new(
        jwt_manager.clone(),
        user_store.clone(),
        fake_data.clone(),
        secrets.demo_password().cloned(),
    ));
    let user_service = Arc::new(UserService::new(user_store, fake_data.clone()));
    let category_service = Arc::new(CategoryService::new(category_store, fake_data.clone()));
    let device_service = Arc::new(DeviceService::new(fake_data.clone()));
    let alert_service = Arc::new(AlertService::new(fake_data.clone()));
    let dashboard_service = Arc::new(DashboardService::new(fake_data.clone()));
    let grid_map_service = Arc::new(GridMapService::new());

    let server_addr = settings.server_addr();
    let workers = settings.worker_count();
    let cors_settings = settings.cors.clone();

    info!("🚀 服务启动在 http://{}", server_addr);
    info!("📊 工作线程数: {}", workers);

    HttpServer::new(move || {
        let jwt_auth = JwtAuth::new(jwt_manager.clone());

        App::new()
            // 全局中间件
            .wrap(build_cors(&cors_settings))
            .wrap(RequestLogger::new())
            .wrap(middleware::Compress::default())
            // 注入服务
            .app_data(web::Data::new(pg_pool.clone()))
            .app_data(web::Data::new(fake_data.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(category_service.clone()))
            .app_data(web::Data::new(device_service.clone()))
            .app_data(web::Data::new(alert_service.clone()))
            .app_data(web::Data::new(dashboard_service.clone()))
            .app_data(web::Data::new(grid_map_service.clone()))
            .configure(|cfg| routes::configure(cfg, jwt_auth))
    })
    .workers(workers)
    .bind(&server_addr)
    .with_context(|| format!("无法绑定地址 {}", server_addr))?
    .run()
    .await?;

    Ok(())
}

/// 连接数据库；未配置或连接失败时以纯演示数据模式运行
async fn connect_database(settings: &Settings, secrets: &Secrets) -> OptionalPool {
    let Some(database_url) = secrets.database_url() else {
        info!("未配置 DATABASE_URL，以演示数据模式运行");
        return None;
    };

    let pool = match PostgresPool::new(&settings.database, database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            warn!(error = %e, "数据库连接失败，以演示数据模式运行");
            return None;
        }
    };

    if settings.database.run_migrations {
        if let Err(e) = pool.run_migrations().await {
            warn!(error = %e, "数据库迁移失败");
        }
    }

    info!("✅ 数据库连接成功");
    Some(Arc::new(pool))
}

/// 向空表写入初始数据，失败只记录日志
async fn seed_database(pool: &PostgresPool, fake_data: &FakeDataService, secrets: &Secrets) {
    if secrets.demo_password().is_none() {
        warn!("未配置 DEMO_PASSWORD，只写入目录数据，不创建演示用户");
    }

    let result = match SeedData::build(fake_data, secrets.demo_password()) {
        Ok(data) => DemoSeeder::new(pool.clone()).seed(&data).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) if summary.total() == 0 => info!("数据库已有数据，跳过初始化"),
        Ok(summary) => info!(rows = summary.total(), "✅ 初始数据写入完成"),
        Err(e) => warn!(error = %e, "初始数据写入失败"),
    }
}

/// 配置 CORS，`*` 表示允许任意来源
fn build_cors(settings: &CorsSettings) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec!["Authorization", "Content-Type", "X-Request-ID"])
        .expose_headers(vec!["X-Data-Source", "X-Request-ID"])
        .max_age(settings.max_age_seconds);

    if settings.allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    settings
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// 初始化日志系统
fn init_tracing(logging: &LoggingSettings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

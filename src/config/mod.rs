//! 配置管理模块

mod settings;

pub use settings::{
	Settings,
	ServerSettings,
	DatabaseSettings,
	JwtSettings,
	LoggingSettings,
	CorsSettings,
	FakeDataSettings,
};

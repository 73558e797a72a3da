//! 认证模块：密码哈希、JWT、请求认证中间件

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::JwtService;
pub use middleware::AuthContext;

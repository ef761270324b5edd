pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{OrdersRepositories, OrdersService, create_repositories};
pub use domain::common::services::Service;
pub use domain::common::{DomainError, ErrorCode, ErrorKind, ValidationErrors};
pub use infrastructure::health::repositories::postgres::PostgresHealthRepository;
pub use infrastructure::order::repositories::postgres::PostgresOrderRepository;

pub mod api_error;
pub mod app_state;
pub mod envelope;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod status;

pub use api_error::ApiError;
pub use app_state::AppState;
pub use envelope::ErrorEnvelope;
pub use response::Response;

mod queries;
mod responses;

pub use queries::ApiQuery;
pub use responses::ApiResponse;

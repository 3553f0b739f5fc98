//! App Configuration
//!
//! The service base URL is a deployment concern; everything under it is
//! versioned under /api/v1 by the backend.

pub const API_BASE_URL: &str = "https://taskboard-services.example.com/api/v1";

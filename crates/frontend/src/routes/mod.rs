pub mod category;
pub mod home;
pub mod meal;
pub mod routes;

pub use routes::AppRoutes;

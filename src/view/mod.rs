pub mod users_renderer;

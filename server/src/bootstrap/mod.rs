pub mod router;
pub mod state;

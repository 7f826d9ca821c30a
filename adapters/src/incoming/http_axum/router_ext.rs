use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

use crate::incoming::http_axum::middleware::{
    catch_panic::panic_response, request_id::request_id_middleware,
};

pub trait RouterExt<State> {
    fn with_request_id(self) -> Self;
    fn with_panic_guard(self) -> Self;
    /// Panic guard inside the request id layer, so panic responses are tagged too.
    fn with_request_guards(self) -> Self;
}

impl<State> RouterExt<State> for Router<State>
where
    State: Clone + Send + Sync + 'static,
{
    fn with_request_id(self) -> Self {
        self.layer(middleware::from_fn(request_id_middleware))
    }

    fn with_panic_guard(self) -> Self {
        self.layer(CatchPanicLayer::custom(panic_response))
    }

    fn with_request_guards(self) -> Self {
        self.with_panic_guard().with_request_id()
    }
}

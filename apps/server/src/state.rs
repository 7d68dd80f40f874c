use shortforge_core::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Upstream,
}

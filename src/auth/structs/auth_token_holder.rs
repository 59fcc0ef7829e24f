use arc_swap::ArcSwap;

pub struct AuthTokenHolder {
    pub(crate) token: ArcSwap<String>,
}

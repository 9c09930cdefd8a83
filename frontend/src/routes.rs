use yew_router::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

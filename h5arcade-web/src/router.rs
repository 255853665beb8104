use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game")]
    Game,
    #[at("/game/random")]
    Daily,
    #[at("/game/direct/gpv")]
    DailyRedirect,
    #[at("/play")]
    Play,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Daily.to_path(), "/game/random");
        assert_eq!(Route::DailyRedirect.to_path(), "/game/direct/gpv");
        assert_eq!(Route::Privacy.to_path(), "/privacy-policy");
    }

    #[test]
    fn recognised_paths_round_trip() {
        assert_eq!(Route::recognize("/game"), Some(Route::Game));
        assert_eq!(Route::recognize("/game/random"), Some(Route::Daily));
        assert_eq!(Route::recognize("/play"), Some(Route::Play));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope/nothing"), Some(Route::NotFound));
    }
}

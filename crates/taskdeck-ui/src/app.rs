use yew::{Callback, Html, classes, function_component, html, use_state};
use yew_router::prelude::{BrowserRouter, Link, Redirect, Routable, Switch};

use crate::board::BoardPage;
use crate::login::LoginPage;

const THEME_STORAGE_KEY: &str = "taskdeck.theme";

#[derive(Clone, Copy, PartialEq)]
enum ThemeMode {
    Day,
    Night,
}

impl ThemeMode {
    fn as_class(self) -> &'static str {
        match self {
            Self::Day => "theme-day",
            Self::Night => "theme-night",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    fn storage_value(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::Day => "Night",
            Self::Night => "Day",
        }
    }
}

fn load_theme_mode() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    match stored.as_deref() {
        Some("night") => ThemeMode::Night,
        _ => ThemeMode::Day,
    }
}

fn save_theme_mode(theme: ThemeMode) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/board")]
    Board,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Board => html! { <BoardPage /> },
        Route::NotFound => html! {
            <div class="notfound">
                <div class="status-line">{ "404 - Page Not Found" }</div>
                <Link<Route> to={Route::Login}>{ "Back to login" }</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(load_theme_mode);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).next();
            save_theme_mode(next);
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <div class={classes!("app", (*theme).as_class())}>
                <div class="topbar">
                    <div class="brand">{ "Taskdeck" }</div>
                    <button class="btn" onclick={on_toggle_theme}>{ (*theme).toggle_label() }</button>
                </div>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

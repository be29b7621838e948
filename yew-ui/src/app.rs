/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! App root: context providers and the route switch.

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{DisplayNameCtx, SettingsCtx};
use crate::pages::call::CallPage;
use crate::pages::dashboard::Dashboard;
use crate::pages::join::JoinMeeting;
use crate::pages::settings::SettingsPage;
use crate::routing::Route;
use crate::settings::UserSettings;

pub fn switch(route: Route) -> Html {
    info!("Navigating to {route}");
    match route {
        Route::Home | Route::Dashboard => html! { <Dashboard /> },
        Route::Join => html! { <JoinMeeting /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Call { id } => html! { <CallPage key={id.clone()} id={id.clone()} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let display_name: DisplayNameCtx = use_state(|| None);
    let settings: SettingsCtx = use_state(UserSettings::default);

    html! {
        <ContextProvider<DisplayNameCtx> context={display_name}>
            <ContextProvider<SettingsCtx> context={settings}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<SettingsCtx>>
        </ContextProvider<DisplayNameCtx>>
    }
}

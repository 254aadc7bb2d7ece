use chrono::{Datelike, Local};
use leptos::{either::EitherOf3, prelude::*};
use leptos_use::{
    use_geolocation, use_interval_fn, use_timeout_fn, use_window_size, UseGeolocationReturn,
    UseTimeoutFnReturn, UseWindowSizeReturn,
};

use crate::system::SystemSnapshot;
use crate::weather::{
    simulate_report, Season, WeatherError, WeatherReport, WeatherState, WEATHER_DELAY_MS,
};

const CLOCK_TICK_MS: u64 = 1000;

/// Drives the weather state machine from the geolocation signals: a
/// position starts the simulated fetch, an error resolves the display to
/// its unavailable string. Guarded transitions absorb duplicate or late
/// callbacks; the fetch timer is cancelled if the footer unmounts.
fn use_weather() -> ReadSignal<WeatherState> {
    let (state, set_state) = signal(WeatherState::default());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |report: WeatherReport| {
            set_state.update(|s| {
                if let Err(err) = s.report_ready(report) {
                    log::debug!("stale weather report dropped: {err}");
                }
            });
        },
        WEATHER_DELAY_MS,
    );
    on_cleanup(move || stop());

    let UseGeolocationReturn { coords, error, .. } = use_geolocation();

    Effect::new(move |_| {
        set_state.update(|s| {
            if let Err(err) = s.request_position() {
                log::debug!("weather provider already started: {err}");
            }
        });
    });

    Effect::new(move |_| {
        if error.get().is_some() {
            set_state.update(|s| {
                if let Err(err) = s.position_failed(WeatherError::PositionDenied) {
                    log::debug!("late geolocation failure ignored: {err}");
                }
            });
        } else if coords.get().is_some() {
            let mut acquired = false;
            set_state.update(|s| acquired = s.position_acquired().is_ok());
            if acquired {
                let mut rng = fastrand::Rng::new();
                start(simulate_report(Season::current(), &mut rng));
            }
        }
    });

    state
}

#[component]
pub fn Footer() -> impl IntoView {
    let (now, set_now) = signal(Local::now());
    let _clock = use_interval_fn(move || set_now.set(Local::now()), CLOCK_TICK_MS);

    let weather = use_weather();

    let (system, set_system) = signal(None::<SystemSnapshot>);
    Effect::new(move |_| {
        let user_agent = window().navigator().user_agent().unwrap_or_default();
        set_system.set(Some(SystemSnapshot::from_user_agent(&user_agent)));
    });

    let UseWindowSizeReturn { width, height } = use_window_size();
    let screen_size = move || format!("{}x{}", width.get() as u32, height.get() as u32);

    // build.rs stamps BUILD_TIME as RFC 3339; the date part is enough here
    let built_on = env!("BUILD_TIME").split('T').next().unwrap_or_default();

    view! {
        <footer class="w-full px-4 py-8 mt-20">
            <div class="container mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    <div class="flex flex-col items-center md:items-start space-y-2">
                        <div class="flex items-center space-x-2 text-sm text-soft mb-1">
                            <span>"🕒"</span>
                            <span>"Date & Time"</span>
                        </div>
                        <p class="text-xl font-medium">
                            {move || now.get().format("%A, %e %B %Y").to_string()}
                        </p>
                        <p class="text-2xl font-light">
                            {move || now.get().format("%H:%M:%S").to_string()}
                        </p>
                    </div>

                    <div class="flex flex-col items-center space-y-2">
                        <div class="flex items-center space-x-2 text-sm text-soft mb-1">
                            <span>"☁"</span>
                            <span>"Current Location & Weather"</span>
                        </div>
                        {move || match weather.get() {
                            WeatherState::Idle
                            | WeatherState::AwaitingPosition
                            | WeatherState::AwaitingReport => {
                                EitherOf3::A(
                                    view! {
                                        <p class="text-xl font-medium">"Loading weather data..."</p>
                                    },
                                )
                            }
                            WeatherState::Errored(_) => {
                                EitherOf3::B(
                                    view! {
                                        <p class="text-xl font-medium">"Weather data unavailable"</p>
                                    },
                                )
                            }
                            WeatherState::Populated(report) => {
                                EitherOf3::C(
                                    view! {
                                        <div class="flex items-center space-x-2">
                                            <span>"📍"</span>
                                            <span class="text-xl font-medium">{report.location}</span>
                                        </div>
                                        <p class="text-2xl font-light">
                                            {format!("{}°C, {}", report.temperature, report.condition)}
                                        </p>
                                    },
                                )
                            }
                        }}
                    </div>

                    <div class="flex flex-col items-center md:items-end space-y-2">
                        <div class="flex items-center space-x-2 text-sm text-soft mb-1">
                            <span>"💻"</span>
                            <span>"System Info"</span>
                        </div>
                        <p class="text-xl font-medium">
                            {move || {
                                system
                                    .get()
                                    .map_or_else(
                                        || "Loading...".to_string(),
                                        |s| format!("{} / {}", s.operating_system, s.browser),
                                    )
                            }}
                        </p>
                        <p class="text-sm text-soft">
                            {move || {
                                system
                                    .get()
                                    .map_or_else(
                                        String::new,
                                        |s| format!("IP {} · Screen {}", s.ip_address, screen_size()),
                                    )
                            }}
                        </p>
                        <div class="flex flex-col md:flex-row items-center space-y-2 md:space-y-0 md:space-x-4 mt-2">
                            <a href="tel:+441234567890" class="flex items-center space-x-2 accent-hover">
                                <span>"📞"</span>
                                <span>"Call"</span>
                            </a>
                            <a
                                href="mailto:rajanchand48@gmail.com"
                                class="flex items-center space-x-2 accent-hover"
                            >
                                <span>"✉"</span>
                                <span>"Email"</span>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="border-t divider pt-6 mt-6">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-soft text-sm mb-4 md:mb-0">
                            {move || {
                                format!("© {} Rajan Prakash Chand. All rights reserved.", now.get().year())
                            }}
                        </p>
                        <p class="text-soft text-sm">
                            "Thank you for visiting my portfolio. I look forward to connecting with you!"
                        </p>
                    </div>
                    <p class="text-soft text-xs text-center mt-4">{format!("Site built {built_on}")}</p>
                </div>
            </div>
        </footer>
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Thin bar along the top edge tracking how far down the page the reader is.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        let scroll_y = win.scroll_y().unwrap_or(0.0);
                        let viewport = win
                            .inner_height()
                            .ok()
                            .and_then(|v| v.as_f64())
                            .unwrap_or(0.0);
                        let page = win
                            .document()
                            .and_then(|d| d.document_element())
                            .map(|el| el.scroll_height() as f64)
                            .unwrap_or(0.0);
                        let scrollable = page - viewport;
                        let fraction = if scrollable > 0.0 {
                            (scroll_y / scrollable).clamp(0.0, 1.0)
                        } else {
                            0.0
                        };
                        progress.set(fraction);
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="progress-track">
            <style>
            {r#".progress-track {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                height: 3px;
                z-index: 70;
                background: transparent;
            }
            .progress-fill {
                height: 100%;
                background: linear-gradient(90deg, #03e9f4, #7928ca);
                transition: width 0.1s linear;
            }"#}
            </style>
            <div
                class="progress-fill"
                style={format!("width: {:.2}%;", *progress * 100.0)}
            />
        </div>
    }
}

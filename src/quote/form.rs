use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::quote::delivery::{self, LeadRequest, SubmitState, SERVICES};
use crate::quote::scroll_lock::ScrollLock;

const SUCCESS_NOTICE: &str = "Request sent! We'll get back to you within 24 hours.";
const ERROR_NOTICE: &str =
    "Something went wrong sending your request. Try again, or reach us directly on WhatsApp below.";

/// How long the success notice stays up before the form closes itself.
const CLOSE_DELAY_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct QuoteFormProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(QuoteForm)]
pub fn quote_form(props: &QuoteFormProps) -> Html {
    let request = use_state(LeadRequest::default);
    let state = use_state(|| SubmitState::Idle);
    let notice = use_state(|| None::<String>);

    // Background stays put while the modal is up.
    use_effect_with_deps(
        move |show: &bool| {
            let lock = show.then(ScrollLock::acquire);
            move || drop(lock)
        },
        props.show,
    );

    // Every exit path funnels through here so the next open starts clean.
    let close = {
        let request = request.clone();
        let state = state.clone();
        let notice = notice.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            request.set(LeadRequest::default());
            state.set(SubmitState::Idle);
            notice.set(None);
            on_close.emit(());
        })
    };

    let on_name = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.name = input.value();
            request.set(next);
        })
    };

    let on_email = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.email = input.value();
            request.set(next);
        })
    };

    let on_phone = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.phone = input.value();
            request.set(next);
        })
    };

    let on_company = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.company = input.value();
            request.set(next);
        })
    };

    let on_service = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.service = select.value();
            request.set(next);
        })
    };

    let on_message = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.message = area.value();
            request.set(next);
        })
    };

    let on_submit = {
        let request = request.clone();
        let state = state.clone();
        let notice = notice.clone();
        let close = close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_submitting() {
                return;
            }
            state.set(state.begin());
            notice.set(None);

            let snapshot = (*request).clone();
            let request = request.clone();
            let state = state.clone();
            let notice = notice.clone();
            let close = close.clone();
            spawn_local(async move {
                match delivery::submit_primary(&snapshot).await {
                    Ok(_) => {
                        state.set(SubmitState::Submitting.resolve(true));
                        notice.set(Some(SUCCESS_NOTICE.to_string()));
                        request.set(LeadRequest::default());
                        TimeoutFuture::new(CLOSE_DELAY_MS).await;
                        close.emit(());
                    }
                    Err(err) => {
                        log!(format!("quote delivery failed: {err}"));
                        state.set(SubmitState::Submitting.resolve(false));
                        notice.set(Some(ERROR_NOTICE.to_string()));
                        // The snapshot stays in `request` untouched so the
                        // user can retry or fall back without retyping.
                    }
                }
            });
        })
    };

    // Always available, not just after a failure.
    let on_fallback = {
        let request = request.clone();
        let close = close.clone();
        Callback::from(move |_: MouseEvent| {
            delivery::submit_fallback(&request);
            close.emit(());
        })
    };

    let on_close_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    if !props.show {
        return html! {};
    }

    let notice_class = match *state {
        SubmitState::Success => "form-notice success",
        SubmitState::Error => "form-notice error",
        _ => "form-notice",
    };

    html! {
        <div class="quote-overlay">
            <style>
            {r#".quote-overlay {
                position: fixed;
                inset: 0;
                z-index: 100;
                background: rgba(8, 14, 28, 0.85);
                backdrop-filter: blur(6px);
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1.5rem;
                animation: quote-fade-in 0.3s ease;
            }
            @keyframes quote-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .quote-container {
                position: relative;
                width: 100%;
                max-width: 480px;
                max-height: 90vh;
                overflow-y: auto;
                background: #0d1426;
                border: 1px solid rgba(3, 233, 244, 0.2);
                border-radius: 16px;
                padding: 2.5rem 2rem;
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                animation: quote-rise 0.3s ease;
            }
            @keyframes quote-rise {
                from { transform: translateY(20px); opacity: 0; }
                to { transform: translateY(0); opacity: 1; }
            }
            .quote-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                background: none;
                color: #9ca3af;
                font-size: 1.5rem;
                line-height: 1;
            }
            .quote-close:hover {
                color: #fff;
            }
            .quote-title {
                text-align: center;
                font-size: 1.5rem;
                font-weight: 700;
                margin-bottom: 1.5rem;
            }
            .form-input {
                width: 100%;
                margin-bottom: 1rem;
                padding: 0.75rem 1rem;
                background: rgba(255, 255, 255, 0.05);
                border: 1px solid rgba(255, 255, 255, 0.15);
                border-radius: 8px;
                color: #fff;
                font-size: 0.95rem;
                font-family: inherit;
            }
            .form-input:focus {
                outline: none;
                border-color: #03e9f4;
            }
            .form-input option {
                background: #0d1426;
            }
            .form-submit {
                width: 100%;
                padding: 0.85rem;
                font-size: 1.05rem;
                font-weight: 500;
            }
            .form-submit:disabled {
                opacity: 0.6;
                cursor: wait;
            }
            .form-fallback {
                width: 100%;
                margin-top: 0.75rem;
                padding: 0.75rem;
                background: none;
                border: 1px solid #25d366;
                border-radius: 999px;
                color: #25d366;
                font-size: 0.95rem;
            }
            .form-fallback:hover {
                background: rgba(37, 211, 102, 0.1);
            }
            .form-notice {
                margin-top: 1rem;
                padding: 0.75rem 1rem;
                border-radius: 8px;
                font-size: 0.9rem;
                text-align: center;
            }
            .form-notice.success {
                background: rgba(37, 211, 102, 0.15);
                color: #25d366;
            }
            .form-notice.error {
                background: rgba(255, 82, 82, 0.15);
                color: #ff8a80;
            }"#}
            </style>
            <div class="quote-container">
                <button class="quote-close" onclick={on_close_click}>{"✕"}</button>
                <h3 class="quote-title"><span class="gradient-text">{"Get a Quote"}</span></h3>
                <form onsubmit={on_submit}>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Your Name *"
                        required={true}
                        value={request.name.clone()}
                        oninput={on_name}
                    />
                    <input
                        type="email"
                        class="form-input"
                        placeholder="Your Email *"
                        required={true}
                        value={request.email.clone()}
                        oninput={on_email}
                    />
                    <input
                        type="tel"
                        class="form-input"
                        placeholder="Phone Number"
                        value={request.phone.clone()}
                        oninput={on_phone}
                    />
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Company Name"
                        value={request.company.clone()}
                        oninput={on_company}
                    />
                    <select
                        class="form-input"
                        required={true}
                        onchange={on_service}
                    >
                        <option value="" disabled={true} selected={request.service.is_empty()}>
                            {"Select Service *"}
                        </option>
                        {
                            SERVICES.iter().map(|(value, label)| html! {
                                <option
                                    value={*value}
                                    selected={request.service == *value}
                                >
                                    {*label}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <textarea
                        class="form-input"
                        placeholder="Tell us about your project *"
                        rows="4"
                        required={true}
                        value={request.message.clone()}
                        oninput={on_message}
                    />
                    <button
                        type="submit"
                        class="gradient-btn form-submit"
                        disabled={state.is_submitting()}
                    >
                        { if state.is_submitting() { "Sending..." } else { "Submit Request" } }
                    </button>
                </form>
                <button class="form-fallback" onclick={on_fallback}>
                    {"Or send it on WhatsApp"}
                </button>
                {
                    notice.as_ref().map(|text| html! {
                        <div class={notice_class}>{text.clone()}</div>
                    }).unwrap_or_default()
                }
            </div>
        </div>
    }
}

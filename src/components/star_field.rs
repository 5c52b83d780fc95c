use web_sys::js_sys::Math;
use yew::prelude::*;

const STAR_COUNT: usize = 150;

struct Star {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
}

/// Decorative layer of twinkling dots behind the whole page. Positions are
/// rolled once on mount and kept for the component's lifetime.
#[function_component(StarField)]
pub fn star_field() -> Html {
    let stars = use_state(|| {
        (0..STAR_COUNT)
            .map(|_| Star {
                left: Math::random() * 100.0,
                top: Math::random() * 300.0,
                size: Math::random() * 1.5 + 0.5,
                delay: Math::random() * 5.0,
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="star-field">
            <style>
            {r#".star-field {
                position: fixed;
                inset: 0;
                height: 300vh;
                z-index: 0;
                overflow: hidden;
                pointer-events: none;
            }
            .star {
                position: absolute;
                border-radius: 50%;
                background: #00bcd4;
                opacity: 0.3;
                animation: twinkle 5s ease-in-out infinite;
            }
            @keyframes twinkle {
                0%, 100% { opacity: 0.1; }
                50% { opacity: 0.5; }
            }"#}
            </style>
            {
                stars.iter().map(|star| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}vh; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s;",
                        star.left, star.top, star.size, star.size, star.delay,
                    );
                    html! { <div class="star" style={style} /> }
                }).collect::<Html>()
            }
        </div>
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const ADVANCE_DELAY_MS: u32 = 5_000;

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Rajesh Kumar",
        "CEO",
        "TechStart Solutions",
        "Pix2Pixel transformed our brand completely. Their network solutions and \
         creative design helped us scale from a startup to industry leader.",
    ),
    (
        "Priya Sharma",
        "Marketing Director",
        "Digital Innovations",
        "Outstanding service! Their social media management increased our engagement \
         by 300%. Highly professional team.",
    ),
    (
        "Amit Patel",
        "Founder",
        "EcoTech India",
        "Their IT security solutions saved our business from potential threats. \
         Excellent technical expertise and support.",
    ),
    (
        "Sneha Gupta",
        "Brand Manager",
        "Fashion Forward",
        "Creative brilliance at its best! Our brand identity and marketing campaigns \
         exceeded all expectations.",
    ),
    (
        "Vikram Singh",
        "Operations Head",
        "LogiFlow Systems",
        "Network infrastructure setup was seamless. Zero downtime and excellent \
         performance. Truly professional service.",
    ),
    (
        "Kavya Reddy",
        "Digital Head",
        "HealthCare Plus",
        "Their video production quality is exceptional. Our promotional videos went \
         viral and brought tremendous growth.",
    ),
];

/// One quote at a time, auto-advancing until the reader takes the wheel.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);
    let auto_play = use_state(|| true);

    {
        let active_setter = active.clone();
        use_effect_with_deps(
            move |(index, playing): &(usize, bool)| {
                let timeout = playing.then(|| {
                    let next = (index + 1) % TESTIMONIALS.len();
                    Timeout::new(ADVANCE_DELAY_MS, move || active_setter.set(next))
                });
                move || drop(timeout)
            },
            (*active, *auto_play),
        );
    }

    let go_prev = {
        let active = active.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| {
            auto_play.set(false);
            active.set((*active + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
        })
    };

    let go_next = {
        let active = active.clone();
        let auto_play = auto_play.clone();
        Callback::from(move |_: MouseEvent| {
            auto_play.set(false);
            active.set((*active + 1) % TESTIMONIALS.len());
        })
    };

    let (name, role, company, quote) = TESTIMONIALS[*active];

    html! {
        <section id="testimonials" class="testimonials">
            <style>
            {r#".testimonials {
                position: relative;
                padding: 4rem 0;
                background: #080e1c;
            }
            .quote-card {
                max-width: 44rem;
                margin: 2rem auto 0;
                padding: 2.5rem 2rem;
                text-align: center;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(3, 233, 244, 0.15);
                border-radius: 16px;
            }
            .quote-stars {
                color: #fbbf24;
                letter-spacing: 0.2rem;
                margin-bottom: 1.25rem;
            }
            .quote-text {
                font-size: 1.05rem;
                color: #e5e7eb;
                line-height: 1.7;
                margin-bottom: 1.5rem;
            }
            .quote-author {
                font-weight: 700;
                color: #fff;
            }
            .quote-role {
                color: #03e9f4;
                font-size: 0.85rem;
            }
            .carousel-controls {
                display: flex;
                justify-content: center;
                align-items: center;
                gap: 1.25rem;
                margin-top: 1.5rem;
            }
            .carousel-arrow {
                width: 2.4rem;
                height: 2.4rem;
                border-radius: 50%;
                background: rgba(255, 255, 255, 0.06);
                color: #fff;
                font-size: 1rem;
            }
            .carousel-arrow:hover {
                background: rgba(3, 233, 244, 0.2);
            }
            .carousel-dots {
                display: flex;
                gap: 0.5rem;
            }
            .carousel-dot {
                width: 0.55rem;
                height: 0.55rem;
                padding: 0;
                border-radius: 50%;
                background: rgba(255, 255, 255, 0.2);
            }
            .carousel-dot.active {
                background: #03e9f4;
            }"#}
            </style>
            <div class="container">
                <h2 class="section-heading"><span class="gradient-text">{"What Our Clients Say"}</span></h2>
                <div class="quote-card">
                    <div class="quote-stars">{"★★★★★"}</div>
                    <p class="quote-text">{format!("\u{201C}{quote}\u{201D}")}</p>
                    <div class="quote-author">{name}</div>
                    <div class="quote-role">{format!("{role}, {company}")}</div>
                </div>
                <div class="carousel-controls">
                    <button class="carousel-arrow" onclick={go_prev}>{"‹"}</button>
                    <div class="carousel-dots">
                        {
                            (0..TESTIMONIALS.len()).map(|index| {
                                let class = if index == *active {
                                    "carousel-dot active"
                                } else {
                                    "carousel-dot"
                                };
                                let onclick = {
                                    let active = active.clone();
                                    let auto_play = auto_play.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        auto_play.set(false);
                                        active.set(index);
                                    })
                                };
                                html! { <button {class} {onclick} /> }
                            }).collect::<Html>()
                        }
                    </div>
                    <button class="carousel-arrow" onclick={go_next}>{"›"}</button>
                </div>
            </div>
        </section>
    }
}

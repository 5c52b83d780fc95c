use gloo_timers::callback::Timeout;
use yew::prelude::*;

const STATS: &[(u32, &str, &str)] = &[
    (70, "+", "Clients"),
    (60, "+", "Successful Projects"),
    (10, "+", "Professionals"),
    (5, "+", "Years Of Experience"),
];

#[derive(Properties, PartialEq)]
struct CounterProps {
    end: u32,
    suffix: AttrValue,
}

/// Counts up to `end` in small timed steps once mounted.
#[function_component(AnimatedCounter)]
fn animated_counter(props: &CounterProps) -> Html {
    let count = use_state(|| 0u32);

    {
        let count_effect = count.clone();
        let end = props.end;
        use_effect_with_deps(
            move |current: &u32| {
                let current = *current;
                if current < end {
                    let step = (end / 40).max(1);
                    let next = (current + step).min(end);
                    let timeout = Timeout::new(40, move || count_effect.set(next));
                    timeout.forget();
                }
                || ()
            },
            *count,
        );
    }

    html! {
        <div class="stat-number">{format!("{}{}", *count, props.suffix)}</div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
            {r#".about {
                position: relative;
                padding: 4rem 0;
                background: #080e1c;
            }
            .about-intro {
                text-align: center;
                max-width: 52rem;
                margin: 0 auto 3rem;
            }
            .about-intro p {
                color: #d1d5db;
                font-size: 1rem;
                line-height: 1.7;
            }
            .stats-grid {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 1.5rem;
                max-width: 52rem;
                margin: 0 auto 4rem;
            }
            .stat-card {
                text-align: center;
                padding: 1.5rem 1rem;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(3, 233, 244, 0.15);
                border-radius: 12px;
            }
            .stat-number {
                font-size: 2rem;
                font-weight: 700;
                color: #03e9f4;
                margin-bottom: 0.5rem;
            }
            .stat-label {
                color: #9ca3af;
                font-size: 0.9rem;
            }
            .about-pillars {
                display: grid;
                grid-template-columns: 1fr;
                gap: 1.5rem;
                max-width: 52rem;
                margin: 0 auto;
            }
            .pillar-card {
                padding: 2rem;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(255, 255, 255, 0.08);
                border-radius: 12px;
                transition: border-color 0.3s ease;
            }
            .pillar-card:hover {
                border-color: rgba(3, 233, 244, 0.4);
            }
            .pillar-card h3 {
                color: #03e9f4;
                margin-bottom: 0.75rem;
                font-size: 1.2rem;
            }
            .pillar-card p {
                color: #d1d5db;
                font-size: 0.95rem;
                line-height: 1.6;
            }
            @media (min-width: 768px) {
                .stats-grid {
                    grid-template-columns: repeat(4, 1fr);
                }
                .about-pillars {
                    grid-template-columns: repeat(2, 1fr);
                }
            }"#}
            </style>
            <div class="container">
                <div class="about-intro">
                    <h2 class="section-heading"><span class="gradient-text">{"Stand Out in the Crowd"}</span></h2>
                    <p>
                        {"Powering brands with stories and security. From the first sketch of \
                          a logo to the last firewall rule, we bring creative and technical \
                          teams together so your business looks sharp and stays safe."}
                    </p>
                </div>
                <div class="stats-grid">
                    {
                        STATS.iter().map(|(end, suffix, label)| html! {
                            <div class="stat-card">
                                <AnimatedCounter end={*end} suffix={*suffix} />
                                <div class="stat-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <h2 class="section-heading"><span class="gradient-text">{"Why Pix2Pixel?"}</span></h2>
                <div class="about-pillars">
                    <div class="pillar-card">
                        <h3>{"Network Solutions"}</h3>
                        <p>
                            {"Infrastructure that just works. We design, deploy and monitor \
                              networks so your team never has to think about them."}
                        </p>
                    </div>
                    <div class="pillar-card">
                        <h3>{"Digital Content"}</h3>
                        <p>
                            {"Stories worth sharing. Design, video and social content built \
                              around what makes your brand yours."}
                        </p>
                    </div>
                    <div class="pillar-card">
                        <h3>{"One Partner"}</h3>
                        <p>
                            {"Creative and IT under one roof, so campaigns and systems are \
                              planned together instead of patched together."}
                        </p>
                    </div>
                    <div class="pillar-card">
                        <h3>{"Built Around You"}</h3>
                        <p>
                            {"Every engagement starts with your goals, and we stay on after \
                              launch to keep things growing."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

const SERVICE_CARDS: &[(&str, &str, &str)] = &[
    (
        "🎨",
        "Graphic Design",
        "Our designers craft everything from logos to complete visual identities, \
         ensuring your brand not only looks great but also communicates effectively.",
    ),
    (
        "📈",
        "Marketing",
        "Our marketing experts develop comprehensive strategies that drive engagement, \
         enhance your brand presence and deliver measurable results.",
    ),
    (
        "📱",
        "Social Media Management",
        "Our brand strategists ensure that all our creative efforts align with your \
         business goals, making every solution we provide both effective and sustainable.",
    ),
    (
        "🌐",
        "Network Solutions",
        "Our networking specialists optimize and secure your digital infrastructure, \
         ensuring seamless connectivity and robust protection.",
    ),
    (
        "🛡️",
        "IT Security",
        "Protecting your business from digital threats with comprehensive security \
         solutions and monitoring systems.",
    ),
    (
        "🎬",
        "Video Production",
        "Creating compelling video content that captivates your audience and tells \
         your brand story effectively.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_get_quote: Callback<()>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let open_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(()))
    };

    html! {
        <section id="services" class="services">
            <style>
            {r#".services {
                position: relative;
                padding: 4rem 0;
                background: #0a101f;
            }
            .services-intro {
                text-align: center;
                max-width: 48rem;
                margin: 0 auto 3rem;
            }
            .services-intro p {
                color: #9ca3af;
                line-height: 1.7;
            }
            .services-grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 1.5rem;
                margin-bottom: 3rem;
            }
            .service-card {
                padding: 2rem;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(255, 255, 255, 0.08);
                border-radius: 12px;
                transition: transform 0.3s ease, border-color 0.3s ease;
            }
            .service-card:hover {
                transform: translateY(-4px);
                border-color: rgba(0, 188, 212, 0.4);
            }
            .service-icon {
                font-size: 1.6rem;
                width: 3.2rem;
                height: 3.2rem;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 188, 212, 0.1);
                border-radius: 50%;
                margin-bottom: 1rem;
            }
            .service-card h3 {
                font-size: 1.1rem;
                margin-bottom: 0.75rem;
                color: #fff;
            }
            .service-card p {
                color: #9ca3af;
                font-size: 0.9rem;
                line-height: 1.6;
            }
            .services-cta {
                text-align: center;
            }
            .services-cta button {
                padding: 0.85rem 2rem;
                font-size: 1rem;
            }
            @media (min-width: 768px) {
                .services-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (min-width: 1024px) {
                .services-grid {
                    grid-template-columns: repeat(3, 1fr);
                }
            }"#}
            </style>
            <div class="container">
                <div class="services-intro">
                    <h2 class="section-heading"><span class="gradient-text">{"Our Services"}</span></h2>
                    <p>
                        {"Everything a growing brand needs, from the pixels people see to \
                          the infrastructure they never do."}
                    </p>
                </div>
                <div class="services-grid">
                    {
                        SERVICE_CARDS.iter().map(|(icon, title, description)| html! {
                            <div class="service-card">
                                <div class="service-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="services-cta">
                    <button class="blue-gradient-btn" onclick={open_quote}>
                        {"Get Started Today"}
                    </button>
                </div>
            </div>
        </section>
    }
}

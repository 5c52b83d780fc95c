use yew::prelude::*;

use crate::quote::delivery;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_get_quote: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(()))
    };

    let open_whatsapp = Callback::from(|_: MouseEvent| {
        delivery::open_external(&delivery::contact_link());
    });

    html! {
        <section id="home" class="hero">
            <style>
            {r#".hero {
                position: relative;
                min-height: 100vh;
                padding: 7rem 0 3rem;
                display: flex;
                align-items: center;
                overflow: hidden;
                background: #080e1c;
            }
            .hero-orb {
                position: absolute;
                width: 24rem;
                height: 24rem;
                border-radius: 50%;
                filter: blur(100px);
                animation: orb-pulse 4s ease-in-out infinite;
            }
            .hero-orb.cyan {
                top: 25%;
                right: 25%;
                background: rgba(3, 233, 244, 0.1);
            }
            .hero-orb.violet {
                bottom: 25%;
                left: 25%;
                background: rgba(121, 40, 202, 0.1);
                animation-delay: 2s;
            }
            @keyframes orb-pulse {
                0%, 100% { transform: scale(1); opacity: 0.3; }
                50% { transform: scale(1.2); opacity: 0.6; }
            }
            .hero-inner {
                position: relative;
                z-index: 10;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 3rem;
            }
            .hero-copy {
                text-align: center;
                max-width: 40rem;
            }
            .hero-copy h1 {
                font-size: 2.5rem;
                line-height: 1.15;
                margin-bottom: 1.5rem;
                animation: hero-enter 1s ease both;
            }
            .hero-copy p {
                font-size: 1.15rem;
                color: #d1d5db;
                line-height: 1.6;
                margin-bottom: 2rem;
                animation: hero-enter 1s ease 0.3s both;
            }
            @keyframes hero-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .hero-buttons {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                align-items: center;
                animation: hero-enter 1s ease 0.6s both;
            }
            .hero-cta {
                padding: 0.9rem 2rem;
                font-size: 1.1rem;
            }
            .hero-whatsapp {
                padding: 0.9rem 2rem;
                font-size: 1.1rem;
                background: none;
                border: 1px solid #03e9f4;
                border-radius: 999px;
                color: #03e9f4;
                transition: background 0.2s ease;
            }
            .hero-whatsapp:hover {
                background: rgba(3, 233, 244, 0.1);
            }
            .hero-visual {
                width: 100%;
                max-width: 34rem;
            }
            .hero-visual img {
                width: 100%;
                border-radius: 12px;
                box-shadow: 0 20px 50px rgba(0, 0, 0, 0.5);
            }
            @media (min-width: 1024px) {
                .hero-inner {
                    flex-direction: row;
                    justify-content: space-between;
                }
                .hero-copy {
                    text-align: left;
                }
                .hero-copy h1 {
                    font-size: 3.75rem;
                }
                .hero-buttons {
                    flex-direction: row;
                }
            }"#}
            </style>
            <div class="hero-orb cyan"></div>
            <div class="hero-orb violet"></div>
            <div class="container hero-inner">
                <div class="hero-copy">
                    <h1>
                        {"We Don't Just Edit."}<br />
                        <span class="gradient-text">{"We Brand"}</span>
                    </h1>
                    <p>
                        {"In a world where digital presence is everything, Pix2Pixel offers \
                          more than just services — we create lasting connections between \
                          your brand and its audience."}
                    </p>
                    <div class="hero-buttons">
                        <button class="gradient-btn hero-cta" onclick={open_quote}>
                            {"Get Started →"}
                        </button>
                        <button class="hero-whatsapp" onclick={open_whatsapp}>
                            {"Connect on WhatsApp"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <img
                        src="https://images.pexels.com/photos/8102680/pexels-photo-8102680.jpeg"
                        alt="Digital Marketing"
                    />
                </div>
            </div>
        </section>
    }
}

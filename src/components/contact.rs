use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_get_quote: Callback<()>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let open_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(()))
    };

    html! {
        <section id="contact" class="contact">
            <style>
            {r#".contact {
                position: relative;
                padding: 4rem 0;
                background: #0a101f;
            }
            .contact-lead {
                text-align: center;
                max-width: 48rem;
                margin: 0 auto 3rem;
                color: #9ca3af;
                line-height: 1.7;
            }
            .contact-grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 2rem;
                max-width: 64rem;
                margin: 0 auto;
            }
            .contact-card {
                padding: 2rem;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(255, 255, 255, 0.08);
                border-radius: 12px;
            }
            .contact-card h3 {
                margin-bottom: 1.5rem;
                font-size: 1.3rem;
            }
            .contact-row {
                display: flex;
                gap: 0.75rem;
                margin-bottom: 1.25rem;
            }
            .contact-row-icon {
                color: #00bcd4;
            }
            .contact-row h4 {
                font-size: 0.95rem;
                margin-bottom: 0.25rem;
            }
            .contact-row p {
                color: #9ca3af;
                font-size: 0.85rem;
            }
            .contact-cta {
                display: flex;
                flex-direction: column;
                justify-content: center;
            }
            .contact-cta h3 {
                font-size: 1.3rem;
                margin-bottom: 1rem;
            }
            .contact-cta p {
                color: #9ca3af;
                line-height: 1.7;
                margin-bottom: 1.5rem;
            }
            .contact-cta button {
                align-self: flex-start;
                padding: 0.9rem 2rem;
                font-size: 1rem;
            }
            @media (min-width: 1024px) {
                .contact-grid {
                    grid-template-columns: 1fr 1fr;
                }
            }"#}
            </style>
            <div class="container">
                <h2 class="section-heading"><span class="gradient-text">{"Let's Connect"}</span></h2>
                <p class="contact-lead">
                    {"Ready to elevate your brand? Get in touch with us today and let's \
                      start creating something amazing together."}
                </p>
                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-row">
                            <span class="contact-row-icon">{"📍"}</span>
                            <div>
                                <h4>{"Address"}</h4>
                                <p>{"Tedhi Puliya, Lucknow, Uttar Pradesh"}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-row-icon">{"✉️"}</span>
                            <div>
                                <h4>{"Email"}</h4>
                                <p>{config::QUOTE_INBOX}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-row-icon">{"📞"}</span>
                            <div>
                                <h4>{"Phone"}</h4>
                                <p>{"+91 9918096894"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-cta">
                        <h3>{"Ready to Get Started?"}</h3>
                        <p>
                            {"Fill out our quick form and we'll get back to you within 24 \
                              hours to discuss your project needs and how we can help bring \
                              your vision to life."}
                        </p>
                        <button class="blue-gradient-btn" onclick={open_quote}>
                            {"Get a Quote"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

use web_sys::js_sys;
use yew::prelude::*;

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#process", "Process"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <style>
            {r#".footer {
                background: #0a101f;
                border-top: 1px solid #1f2937;
                padding: 2.5rem 0 1.5rem;
            }
            .footer-top {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 1.5rem;
                margin-bottom: 1.5rem;
            }
            .footer-brand {
                text-align: center;
            }
            .footer-brand a {
                font-size: 1.4rem;
                font-weight: 700;
            }
            .footer-brand p {
                color: #9ca3af;
                margin-top: 0.4rem;
                font-size: 0.9rem;
            }
            .footer-links {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 1rem 1.75rem;
            }
            .footer-links a {
                color: #d1d5db;
                font-size: 0.9rem;
                transition: color 0.2s ease;
            }
            .footer-links a:hover {
                color: #03e9f4;
            }
            .footer-bottom {
                border-top: 1px solid #1f2937;
                padding-top: 1.5rem;
                text-align: center;
                color: #9ca3af;
                font-size: 0.8rem;
            }
            @media (min-width: 768px) {
                .footer-top {
                    flex-direction: row;
                    justify-content: space-between;
                }
                .footer-brand {
                    text-align: left;
                }
            }"#}
            </style>
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <a href="#"><span class="gradient-text">{"PIX2PIXEL"}</span></a>
                        <p>{"Strategize, Secure, Succeed"}</p>
                    </div>
                    <div class="footer-links">
                        {
                            FOOTER_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href}>{*label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {year} Pix2Pixel. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}

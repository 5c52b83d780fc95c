use yew::prelude::*;

use crate::quote::delivery;

#[function_component(OurStory)]
pub fn our_story() -> Html {
    let open_whatsapp = Callback::from(|_: MouseEvent| {
        delivery::open_external(&delivery::contact_link());
    });

    html! {
        <section class="story">
            <style>
            {r#".story {
                position: relative;
                padding: 4rem 0;
                background: #0a101f;
            }
            .story-grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 2.5rem;
                align-items: center;
                max-width: 64rem;
                margin: 2rem auto 0;
            }
            .story-visual img {
                width: 100%;
                border-radius: 12px;
                border: 1px solid rgba(3, 233, 244, 0.3);
            }
            .story-copy p {
                color: #d1d5db;
                line-height: 1.7;
                margin-bottom: 1.25rem;
            }
            .story-copy button {
                padding: 0.85rem 2rem;
                font-size: 1rem;
                background: none;
                border: 1px solid #25d366;
                border-radius: 999px;
                color: #25d366;
                transition: background 0.2s ease;
            }
            .story-copy button:hover {
                background: rgba(37, 211, 102, 0.1);
            }
            @media (min-width: 1024px) {
                .story-grid {
                    grid-template-columns: 1fr 1fr;
                }
            }"#}
            </style>
            <div class="container">
                <h2 class="section-heading"><span class="gradient-text">{"Our Story"}</span></h2>
                <div class="story-grid">
                    <div class="story-visual">
                        <img
                            src="https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg"
                            alt="The Pix2Pixel team at work"
                        />
                    </div>
                    <div class="story-copy">
                        <p>
                            {"Pix2Pixel started with two teams that rarely sit in the same \
                              room: designers who obsess over stories, and engineers who \
                              obsess over uptime. We put them at one table in Lucknow and \
                              built a studio where a brand's look and its infrastructure \
                              are designed together."}
                        </p>
                        <p>
                            {"Today we partner with startups and established businesses \
                              across India, handling everything from first logo to full \
                              network rollout. The easiest way to find out if we fit? \
                              Say hello."}
                        </p>
                        <button onclick={open_whatsapp}>{"Chat With Us"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

const STEPS: &[(&str, &str, &str, &str)] = &[
    (
        "💡",
        "Consultation",
        "We dive deep into your brand, your dreams, and your goals.",
        "Understanding your vision and requirements",
    ),
    (
        "🎯",
        "Strategize",
        "We craft a custom game plan, blending tech strength with creative magic.",
        "Tailored strategies for your success",
    ),
    (
        "⚡",
        "Create & Secure",
        "We build, edit, secure, and story tell — making sure every detail shines.",
        "Implementation with latest technology",
    ),
    (
        "🛠️",
        "Grow Together",
        "We stick around, fine-tuning and supporting you as your business evolves.",
        "Continuous support and maintenance",
    ),
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <style>
            {r#".process {
                position: relative;
                padding: 4rem 0;
                background: #080e1c;
                overflow: hidden;
            }
            .process-grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 1.5rem;
                margin-top: 3rem;
            }
            .process-step {
                position: relative;
                padding: 2rem;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(255, 255, 255, 0.08);
                border-radius: 12px;
            }
            .step-index {
                position: absolute;
                top: 1.25rem;
                right: 1.5rem;
                font-size: 2.2rem;
                font-weight: 700;
                color: rgba(3, 233, 244, 0.15);
            }
            .step-icon {
                font-size: 1.8rem;
                margin-bottom: 1rem;
            }
            .process-step h3 {
                font-size: 1.15rem;
                margin-bottom: 0.75rem;
            }
            .process-step p {
                color: #d1d5db;
                font-size: 0.95rem;
                line-height: 1.6;
                margin-bottom: 0.75rem;
            }
            .step-detail {
                color: #03e9f4;
                font-size: 0.85rem;
            }
            @media (min-width: 768px) {
                .process-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (min-width: 1024px) {
                .process-grid {
                    grid-template-columns: repeat(4, 1fr);
                }
            }"#}
            </style>
            <div class="container">
                <h2 class="section-heading"><span class="gradient-text">{"How We Work"}</span></h2>
                <div class="process-grid">
                    {
                        STEPS.iter().enumerate().map(|(index, (icon, title, description, detail))| html! {
                            <div class="process-step">
                                <div class="step-index">{format!("{:02}", index + 1)}</div>
                                <div class="step-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                                <div class="step-detail">{*detail}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

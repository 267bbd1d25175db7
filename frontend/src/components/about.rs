use yew::prelude::*;

use crate::components::effects::{LineDesign, StarField};

const EYE_IMAGE: &str = "/assets/eye.svg";

static STEPS: [(&str, &str, &str); 4] = [
    (
        "/assets/codebase.svg",
        "Upload Your Codebase",
        "Drag and drop your entire project folder or connect your repository in seconds. Our smart indexing ensures every file, dependency, and relationship is mapped for instant understanding.",
    ),
    (
        "/assets/structure.svg",
        "Ask Anything, Anytime",
        "Interact naturally with your AI assistant. Whether you need help implementing a feature, understanding code, or debugging, just ask. No need to reference specific files or lines.",
    ),
    (
        "/assets/context.svg",
        "Contextual Answers",
        "Receive detailed answers, code suggestions, and explanations that consider your entire codebase. AI understands cross-file relationships and dependencies for truly holistic support.",
    ),
    (
        "/assets/iterate.svg",
        "Iterate and Collaborate",
        "Refine your queries, explore alternative solutions, and collaborate with the AI to accelerate your workflow. Get instant feedback and iterate until you're satisfied.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about" data-name="About">
            <div class="about-lines">
                <LineDesign lines={12} />
            </div>
            <div class="about-heading">
                <h2>{"How It Works: From "}</h2>
                <div class="about-heading-row">
                    <span class="muted">{"Upload To"}</span>
                    <img src={EYE_IMAGE} alt="Eye" width="60" height="30" />
                    <span>{"Insight"}</span>
                </div>
            </div>
            <div class="about-stars top"><StarField /></div>
            <div class="about-steps">
                { for STEPS.iter().map(|(image, title, body)| html! {
                    <div class="about-step">
                        <img src={*image} alt={*title} loading="lazy" />
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </div>
            <div class="about-stars bottom"><StarField /></div>
            <style>{r#"
                .about {
                    position: relative;
                    padding: 5rem 1rem;
                    color: #ffffff;
                    overflow: hidden;
                }
                .about-lines {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    opacity: 0.5;
                }
                .about-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .about-heading h2 {
                    font-size: 3rem;
                    font-weight: 400;
                    margin: 0;
                }
                .about-heading-row {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    font-size: 3rem;
                }
                .about-stars {
                    position: absolute;
                    left: 0;
                    right: 0;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                }
                .about-stars.top { top: 8rem; }
                .about-stars.bottom { bottom: 0; }
                .about-steps {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .about-step {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .about-step img {
                    max-width: 300px;
                    width: 100%;
                }
                .about-step p {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .about-steps { grid-template-columns: 1fr; }
                    .about-heading h2, .about-heading-row { font-size: 2rem; }
                }
            "#}</style>
        </section>
    }
}

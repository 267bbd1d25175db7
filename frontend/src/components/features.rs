use yew::prelude::*;

use crate::components::effects::{LineDesign, People};

struct Feature {
    title: &'static str,
    body: &'static str,
    image: Option<(&'static str, &'static str)>,
}

static FEATURES: [Feature; 4] = [
    Feature {
        title: "Architecture Insights",
        body: "Instantly visualize and understand your project's structure. Get high-level overviews, dependency graphs, and clear explanations of how everything fits together.",
        image: Some(("/assets/architecture.svg", "Architecture Diagram")),
    },
    Feature {
        title: "Full-Project Understanding",
        body: "Install and let our AI understand your entire codebase and every file, dependency, and relationship.",
        image: None,
    },
    Feature {
        title: "Context-Aware Code Generation",
        body: "Reviews your code changes and get suggestions with full awareness of your project's context.",
        image: Some(("/assets/brain.svg", "AI Brain")),
    },
    Feature {
        title: "Cross-File Debugging",
        body: "Debug complex issues that span multiple files and modules. Our AI traces bugs and logic across your whole project, saving you hours of manual searching.",
        image: Some(("/assets/spider.svg", "Debug Spider")),
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features">
            <div class="features-heading">
                <h1>{"Seamless AI"}</h1>
                <h1 class="accent">{"Collaboration"}</h1>
                <div class="features-subheading">
                    <span class="muted">{"for"}</span>
                    <People />
                    <span>{"Developers"}</span>
                </div>
            </div>
            <div class="features-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <div class="feature-visual">
                            {
                                match feature.image {
                                    Some((src, alt)) => html! { <img src={src} alt={alt} loading="lazy" /> },
                                    None => html! { <LineDesign /> },
                                }
                            }
                        </div>
                        <h3>{feature.title}</h3>
                        <p>{feature.body}</p>
                    </div>
                }) }
            </div>
            <style>{r#"
                .features {
                    padding: 5rem 1rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .features-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                    color: #ffffff;
                }
                .features-heading h1 {
                    font-size: 3rem;
                    font-weight: 400;
                    margin: 0;
                }
                .features-heading .accent {
                    background: linear-gradient(to right, #006F91 5%, #0BB6C0 20%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .features-subheading {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    font-size: 2rem;
                }
                .muted { color: #999999; }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .feature-card {
                    border-radius: 2rem;
                    padding: 2rem;
                    background: linear-gradient(to bottom, rgba(5,111,111,0.4), rgba(8,52,64,0.1));
                    border: 6px solid #022324;
                    color: #ffffff;
                }
                .feature-visual {
                    display: flex;
                    justify-content: center;
                    min-height: 160px;
                }
                .feature-visual img {
                    max-width: 300px;
                    width: 100%;
                }
                .feature-card p {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::asset_on_disk;

    #[test]
    fn feature_images_are_bundled() {
        for feature in FEATURES.iter() {
            if let Some((src, _)) = feature.image {
                assert!(asset_on_disk(src), "image for {:?} missing: {}", feature.title, src);
            }
        }
    }
}

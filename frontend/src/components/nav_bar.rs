use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::effects::{Arrow, Rocket, Star};
use crate::install_link::{load_installation_link, CallToAction, InstallationLink, MountGuard};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let installation_link = use_state(InstallationLink::default);

    // Fetch the install link once per mount; results arriving after unmount are dropped
    {
        let installation_link = installation_link.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::mounted();
                load_installation_link(
                    guard.clone(),
                    Callback::from(move |link: InstallationLink| installation_link.set(link)),
                );
                move || guard.unmount()
            },
            (),
        );
    }

    let cta = CallToAction::from(&*installation_link);
    let on_click = {
        let inert = cta.inert;
        Callback::from(move |e: MouseEvent| {
            if inert {
                e.prevent_default();
            }
        })
    };

    html! {
        <div class="hero-nav">
            <div class="hero-gradient"></div>
            <div class="hero-nav-content">
                <div class="hero-badge">
                    <span>{"AI code review that understands your whole project"}</span>
                </div>
                <div class="hero-heading">
                    <h1 class="hero-heading-top">{"Transform How You"}</h1>
                    <div class="hero-heading-bottom">
                        <span class="muted">{"Build"}</span>
                        <Rocket />
                        <span>{"Software"}</span>
                    </div>
                </div>
                <p class="hero-tagline">
                    {"Seamlessly explore, debug, and Empower your development"}<br/>
                    {"with AI that understands your entire project."}
                </p>
                <div class="hero-cta-row">
                    <div class="hero-cta-rule left"></div>
                    <a
                        href={cta.href.clone()}
                        target={cta.target}
                        rel={cta.rel}
                        class={cta.class}
                        aria-disabled={cta.inert.to_string()}
                        tabindex={if cta.inert { "-1" } else { "0" }}
                        onclick={on_click}
                    >
                        <button class="start-now" disabled={cta.inert}>
                            <Star />
                            <span>{"Start Now"}</span>
                            <Arrow />
                        </button>
                    </a>
                    <div class="hero-cta-rule right"></div>
                </div>
            </div>
            <div class="hero-columns">
                { for (0..11).map(|i| html! {
                    <div class={classes!("hero-column", if i == 5 { "bright" } else { "" })}></div>
                }) }
            </div>
            <style>{NAV_CSS}</style>
        </div>
    }
}

const NAV_CSS: &str = r#"
    .hero-nav {
        position: relative;
        width: 100%;
        min-height: 100vh;
        overflow: hidden;
    }
    .hero-gradient {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 50% 20%, rgba(6, 142, 142, 0.35), transparent 60%);
    }
    .hero-nav-content {
        position: relative;
        z-index: 10;
        padding-top: 9rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
        padding-left: 1rem;
        padding-right: 1rem;
    }
    .hero-badge {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
        color: #ddd;
        margin-bottom: 2rem;
    }
    .hero-heading {
        text-align: center;
        margin-bottom: 2.5rem;
        font-family: 'Montserrat', sans-serif;
    }
    .hero-heading-top {
        font-size: 3.75rem;
        font-weight: 400;
        background: linear-gradient(to right, #ffffff 50%, #999999 75%);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-heading-bottom {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        margin-top: 1rem;
        font-size: 3.75rem;
        color: #ffffff;
    }
    .hero-heading-bottom .muted {
        color: #999999;
    }
    .hero-tagline {
        color: #ffffff;
        font-size: 1.125rem;
        text-align: center;
        max-width: 42rem;
        margin-bottom: 3rem;
    }
    .hero-cta-row {
        position: relative;
        margin-top: 5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        max-width: 56rem;
    }
    .hero-cta-rule {
        position: absolute;
        top: 50%;
        width: 30%;
        height: 1px;
    }
    .hero-cta-rule.left {
        left: 0;
        background: linear-gradient(to right, transparent, #ffffff);
    }
    .hero-cta-rule.right {
        right: 0;
        background: linear-gradient(to left, transparent, #ffffff);
    }
    .pointer-events-none {
        pointer-events: none;
    }
    .start-now {
        padding: 1rem 0.75rem;
        background: #ffffff;
        border: none;
        border-radius: 1.5rem;
        box-shadow: inset 0 12px 8px 0 rgba(174, 203, 192, 1);
        display: flex;
        align-items: center;
        gap: 1.5rem;
        cursor: pointer;
        font-size: 1.125rem;
        font-weight: 500;
        transition: transform 0.3s;
    }
    .start-now:hover:not(:disabled) {
        transform: scale(1.05);
    }
    .start-now:disabled {
        opacity: 0.6;
        cursor: default;
    }
    .hero-columns {
        position: absolute;
        bottom: 0;
        left: 0;
        width: 100%;
        display: flex;
        justify-content: center;
        align-items: flex-end;
        gap: 40px;
        z-index: 0;
    }
    .hero-column {
        width: 4.5rem;
        height: 1000px;
        background: linear-gradient(to bottom, rgba(153, 100, 100, 0.04) 20%, rgba(0, 0, 0, 0.01));
        backdrop-filter: blur(65px);
    }
    .hero-column.bright {
        background: linear-gradient(to bottom, rgba(153, 153, 153, 0.06) 20%, rgba(0, 0, 0, 0.01));
    }
    @media (max-width: 768px) {
        .hero-heading-top,
        .hero-heading-bottom {
            font-size: 1.875rem;
        }
    }
"#;

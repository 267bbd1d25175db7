use web_sys::MouseEvent;
use yew::prelude::*;

use crate::faq::{ExpandedFaqSet, FAQ_ENTRIES};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))} onclick={props.on_toggle.clone()}>
            <div class="faq-item-background"></div>
            <div class="faq-item-body">
                <div class="faq-question">
                    <p>{props.question}</p>
                    <span class="toggle-icon" aria-hidden="true">{"+"}</span>
                </div>
                if props.is_open {
                    <div class="faq-answer">
                        <div class="faq-divider"></div>
                        <p>{props.answer}</p>
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let expanded = use_state(ExpandedFaqSet::new);

    html! {
        <section class="faq">
            <div class="faq-inner">
                <div class="faq-heading">
                    <div class="faq-pill"><p>{"FAQs"}</p></div>
                    <div class="faq-title">{"Need Help?"}</div>
                    <div class="faq-title accent">{"Start Here"}</div>
                </div>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let expanded = expanded.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                expanded.set(expanded.toggled(index));
                            })
                        };
                        html! {
                            <FaqItem
                                key={index}
                                question={entry.question}
                                answer={entry.answer}
                                is_open={expanded.is_expanded(index)}
                                on_toggle={on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
            <style>{FAQ_CSS}</style>
        </section>
    }
}

const FAQ_CSS: &str = r#"
    .faq {
        position: relative;
        width: 100%;
        min-height: 100vh;
        background: #000000;
        padding: 5rem 1rem;
    }
    .faq-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .faq-heading {
        margin-bottom: 4rem;
    }
    .faq-pill {
        width: fit-content;
        padding: 1rem 2.5rem;
        border-radius: 26px;
        background: linear-gradient(to bottom, #068e8e 10%, rgba(8, 52, 64, 0.25) 90%);
        color: #ffffff;
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .faq-pill p {
        margin: 0;
    }
    .faq-title {
        color: #ffffff;
        font-size: 3rem;
    }
    .faq-title.accent {
        background: linear-gradient(to right, #006F91 5%, #0BB6C0 20%);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .faq-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .faq-item {
        position: relative;
        cursor: pointer;
        transition: transform 0.2s;
    }
    .faq-item:hover {
        transform: scale(1.01);
    }
    .faq-item-background {
        position: absolute;
        inset: 0;
        border-radius: 2rem;
        border: 6px solid #022324;
        background: linear-gradient(to bottom, #056f6f66, #0834401a);
    }
    .faq-item-body {
        position: relative;
        padding: 2rem 6rem;
    }
    .faq-question {
        display: flex;
        align-items: center;
        justify-content: space-between;
        color: #ffffff;
        font-size: 1.875rem;
    }
    .faq-question p {
        margin: 0;
        padding-right: 1rem;
    }
    .toggle-icon {
        font-size: 2.25rem;
        font-weight: 300;
        transition: transform 0.3s;
    }
    .faq-item.open .toggle-icon {
        transform: rotate(45deg);
    }
    .faq-answer {
        padding-top: 2rem;
        animation: faq-open 0.4s ease-in-out;
    }
    .faq-divider {
        width: 100%;
        height: 1px;
        margin-bottom: 2rem;
        background: linear-gradient(to right, transparent, #056f6f, transparent);
    }
    .faq-answer p {
        color: #d1d5db;
        font-size: 1.5rem;
        line-height: 1.6;
    }
    @keyframes faq-open {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 768px) {
        .faq-item-body { padding: 1.5rem 1rem; }
        .faq-question { font-size: 1rem; }
        .faq-answer p { font-size: 0.875rem; }
        .faq-title { font-size: 1.875rem; }
    }
"#;

use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{"codeboss"}</p>
                <p class="footer-tagline">{"AI code review that understands your entire project."}</p>
                <div class="footer-links">
                    <a href="#features">{"Features"}</a>
                    {" | "}
                    <a href="#how-it-works">{"How it works"}</a>
                    {" | "}
                    <a href="#faq">{"FAQ"}</a>
                </div>
            </div>
            <style>{r#"
                .site-footer {
                    padding: 3rem 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: #000000;
                    color: #999999;
                    text-align: center;
                }
                .footer-brand {
                    color: #ffffff;
                    font-size: 1.5rem;
                }
                .footer-links a {
                    color: #0BB6C0;
                    text-decoration: none;
                }
            "#}</style>
        </footer>
    }
}

use yew::prelude::*;

use crate::components::{
    about::About, faq_section::Faq, features::Features, footer::Footer,
    image_section::ImageSection, nav_bar::NavBar,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    html! {
        <div class="landing-page">
            <NavBar />
            <ImageSection />
            <div id="features"><Features /></div>
            <div id="how-it-works"><About /></div>
            <div id="faq"><Faq /></div>
            <Footer />
            <style>{r#"
                body {
                    margin: 0;
                    background: #000000;
                    font-family: 'Montserrat', sans-serif;
                }
                .landing-page {
                    overflow-x: hidden;
                }
            "#}</style>
        </div>
    }
}

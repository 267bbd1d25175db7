use yew::prelude::*;

use crate::components::effects::{LineDesign, Shade};

const PREVIEW_IMAGE: &str = "/assets/image.svg";

#[function_component(ImageSection)]
pub fn image_section() -> Html {
    html! {
        <section class="image-section">
            <div class="image-section-side left">
                <LineDesign lines={9} />
                <Shade />
            </div>
            <div class="image-section-side right">
                <LineDesign lines={9} />
                <Shade mirrored=true />
            </div>
            <div class="image-frame">
                <div class="image-frame-top"></div>
                <div class="image-frame-fade"></div>
                <div class="image-frame-glow"></div>
                <img src={PREVIEW_IMAGE} alt="Product preview" loading="lazy" />
            </div>
            <style>{r#"
                .image-section {
                    position: relative;
                    display: flex;
                    justify-content: center;
                    padding: 4rem 1rem;
                    overflow: hidden;
                }
                .image-section-side {
                    position: absolute;
                    top: 0;
                    opacity: 0.8;
                }
                .image-section-side.left { left: 0; }
                .image-section-side.right { right: 0; }
                .image-frame {
                    position: relative;
                    max-width: 1000px;
                    width: 100%;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .image-frame img {
                    width: 100%;
                    display: block;
                }
                .image-frame-top {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(153,153,153,0.08) 80%, rgba(0,0,0,1) 80%);
                }
                .image-frame-fade {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    background: linear-gradient(to bottom, rgba(0,0,0,0) 60%, rgba(0,0,0,0.9) 90%, rgba(0,0,0,1) 100%);
                }
                .image-frame-glow {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: linear-gradient(to right, rgba(0,32,29,0) 10%, rgba(2,242,242,1) 30%, rgba(2,242,242,1) 70%, rgba(0,32,29,0) 90%);
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
    fn preview_image_is_bundled() {
        assert!(asset_on_disk(PREVIEW_IMAGE), "{} is missing", PREVIEW_IMAGE);
    }
}

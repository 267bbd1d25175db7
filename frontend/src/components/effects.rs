//! Decorative inline SVG graphics. Purely presentational.
use yew::prelude::*;

#[function_component(Rocket)]
pub fn rocket() -> Html {
    html! {
        <svg class="icon-rocket" width="48" height="48" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M12 2c3.5 2 5.5 5.6 5.5 9.5L15 16H9l-2.5-4.5C6.5 7.6 8.5 4 12 2z" stroke="#ffffff" stroke-width="1.2" />
            <circle cx="12" cy="9" r="2" fill="#0BB6C0" />
            <path d="M9 16l-2 4 3-1.5M15 16l2 4-3-1.5" stroke="#999999" stroke-width="1.2" />
        </svg>
    }
}

#[function_component(Star)]
pub fn star() -> Html {
    html! {
        <svg width="22" height="22" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <path d="M12 1l2.6 8.4H23l-6.8 5 2.6 8.4L12 17.8l-6.8 5 2.6-8.4L1 9.4h8.4z" fill="#068e8e" />
        </svg>
    }
}

#[function_component(Arrow)]
pub fn arrow() -> Html {
    html! {
        <svg width="22" height="22" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path d="M4 12h15M13 6l6 6-6 6" stroke="#000000" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[function_component(People)]
pub fn people() -> Html {
    html! {
        <svg width="48" height="48" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="8" cy="8" r="3" stroke="#ffffff" />
            <circle cx="16" cy="8" r="3" stroke="#0BB6C0" />
            <path d="M2 20c0-3.3 2.7-6 6-6s6 2.7 6 6M10 20c0-3.3 2.7-6 6-6s6 2.7 6 6" stroke="#999999" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShadeProps {
    #[prop_or(false)]
    pub mirrored: bool,
}

/// Blurred cyan wedge framing the showcase image.
#[function_component(Shade)]
pub fn shade(props: &ShadeProps) -> Html {
    let (filter_id, path) = if props.mirrored {
        ("shade-blur-right", "M565.6 547.5L439.5 121.2L121.4 563.7L565.6 547.5Z")
    } else {
        ("shade-blur-left", "M-163.3 571.4L3.4 121L316.3 547.4L-163.3 571.4Z")
    };
    html! {
        <svg class="shade" width="437" height="693" viewBox="0 0 437 693" fill="none" xmlns="http://www.w3.org/2000/svg">
            <g filter={format!("url(#{})", filter_id)}>
                <path d={path} fill="#00FFFF" fill-opacity="0.5" />
            </g>
            <defs>
                <filter id={filter_id} x="-284" y="0" width="721" height="692" filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">
                    <feFlood flood-opacity="0" result="BackgroundImageFix" />
                    <feBlend mode="normal" in="SourceGraphic" in2="BackgroundImageFix" result="shape" />
                    <feGaussianBlur stdDeviation="60.35" />
                </filter>
            </defs>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineDesignProps {
    #[prop_or(6)]
    pub lines: usize,
}

/// Fan of thin gradient strokes used behind feature cards.
#[function_component(LineDesign)]
pub fn line_design(props: &LineDesignProps) -> Html {
    html! {
        <svg class="line-design" width="300" height="160" viewBox="0 0 300 160" fill="none" xmlns="http://www.w3.org/2000/svg">
            <defs>
                <linearGradient id="line-design-gradient" x1="0" y1="0" x2="300" y2="0" gradientUnits="userSpaceOnUse">
                    <stop offset="0" stop-color="#02F2F2" stop-opacity="0" />
                    <stop offset="0.5" stop-color="#02F2F2" />
                    <stop offset="1" stop-color="#02F2F2" stop-opacity="0" />
                </linearGradient>
            </defs>
            { for (0..props.lines).map(|i| {
                let y = 20 + i * 120 / props.lines.max(1);
                html! {
                    <path
                        d={format!("M0 {} C100 {} 200 {} 300 {}", y, 80, 80, y)}
                        stroke="url(#line-design-gradient)"
                        stroke-width="0.8"
                    />
                }
            }) }
        </svg>
    }
}

#[function_component(StarField)]
pub fn star_field() -> Html {
    static STARS: [(u32, u32, f32); 8] = [
        (12, 30, 1.2), (80, 12, 0.8), (140, 60, 1.5), (210, 24, 0.9),
        (260, 80, 1.1), (40, 110, 0.7), (180, 130, 1.3), (290, 140, 0.8),
    ];
    html! {
        <svg class="star-field" width="300" height="160" viewBox="0 0 300 160" xmlns="http://www.w3.org/2000/svg">
            { for STARS.iter().map(|(x, y, r)| html! {
                <circle cx={x.to_string()} cy={y.to_string()} r={r.to_string()} fill="#ffffff" fill-opacity="0.7" />
            }) }
        </svg>
    }
}

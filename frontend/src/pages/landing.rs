use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::{Icon, IconKind};
use crate::components::pricing_tabs::PricingTabs;
use crate::content::{
    CATEGORIES, COMMUNITY_IMAGE, FEATURED_STORIES, HERO_IMAGE, OPEN_BOOK_IMAGE, RESOURCES,
    TESTIMONIALS, WRITING_IMAGE,
};
use crate::hooks::{use_entrance, use_scroll};
use crate::motion::{HeroParallax, RevealDirection};

#[function_component(Hero)]
fn hero() -> Html {
    let scroll = use_scroll();
    let entered = use_entrance(16);
    let parallax = HeroParallax::from_progress(scroll.progress);

    html! {
        <section class="hero">
            <div class="hero-background" style={parallax.style()}>
                <img src={HERO_IMAGE} alt="Ocean waves" />
            </div>
            <div class="container hero-inner">
                <div class={classes!("hero-content", entered.then(|| "entered"))}>
                    <h1 class="hero-title">{"Dive into OceanInk"}</h1>
                    <p class="hero-subtitle">{"Where Words Flow Like Waves"}</p>
                    <div class="hero-cta-group">
                        <button class="btn btn-lg btn-dark">{"Start Your Journey"}</button>
                        <button class="btn btn-lg btn-outline">{"Explore Stories"}</button>
                    </div>
                </div>
            </div>
            <div class="hero-scroll-hint">
                <Icon kind={IconKind::ChevronDown} />
            </div>
        </section>
    }
}

fn featured_stories() -> Html {
    html! {
        <div class="page-section">
            <div class="container">
                <h2 class="section-title">{"Featured Stories"}</h2>
                <div class="grid grid-3">
                    { for FEATURED_STORIES.iter().map(|story| html! {
                        <div class="card story-card">
                            <div class="story-image">
                                <img src={story.image} alt={story.title} loading="lazy" />
                                <div class="story-overlay">
                                    <button class="btn btn-outline-light">{"Read More"}</button>
                                </div>
                            </div>
                            <div class="card-content">
                                <h3 class="card-title">{ story.title }</h3>
                                <p class="muted">{ story.excerpt }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn split_feature(
    title: &'static str,
    body: &'static str,
    cta: &'static str,
    image: &'static str,
    alt: &'static str,
    image_first: bool,
) -> Html {
    let text = html! {
        <div class="split-text">
            <h2 class="split-title">{ title }</h2>
            <p class="lead">{ body }</p>
            <button class={classes!("btn", "btn-lg", if image_first { "btn-light" } else { "btn-dark" })}>
                { cta }
            </button>
        </div>
    };
    let picture = html! {
        <div class={classes!("split-image", image_first.then(|| "tilt-right"))}>
            <div class="split-image-backdrop"></div>
            <img src={image} {alt} width="500" height="300" loading="lazy" />
        </div>
    };

    html! {
        <div class={classes!("page-section", if image_first { "section-dark" } else { "section-muted" })}>
            <div class="container split">
                if image_first {
                    { picture }
                    { text }
                } else {
                    { text }
                    { picture }
                }
            </div>
        </div>
    }
}

fn categories() -> Html {
    html! {
        <div class="page-section">
            <div class="container">
                <h2 class="section-title">{"Explore Categories"}</h2>
                <div class="grid grid-2">
                    { for CATEGORIES.iter().map(|category| html! {
                        <div class="card category-card">
                            <div class="card-content category-body">
                                <Icon kind={category.icon} class="category-icon" />
                                <div>
                                    <h3 class="category-name">{ category.name }</h3>
                                    <p class="muted">{ category.description }</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn resources() -> Html {
    html! {
        <div class="page-section">
            <div class="container">
                <h2 class="section-title">{"Writing Resources"}</h2>
                <div class="grid grid-3">
                    { for RESOURCES.iter().map(|resource| html! {
                        <div class="card resource-card">
                            <div class="card-header">
                                <Icon kind={resource.icon} class="resource-icon" />
                                <h3 class="card-title">{ resource.title }</h3>
                            </div>
                            <div class="card-content">
                                <p>{ resource.description }</p>
                            </div>
                            <div class="card-footer centered">
                                <button class="btn btn-outline">{"Learn More"}</button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn testimonials() -> Html {
    html! {
        <div class="page-section">
            <div class="container">
                <h2 class="section-title">{"Success Stories"}</h2>
                <div class="grid grid-2">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div class="card testimonial-card">
                            <div class="testimonial-photo">
                                <img src={testimonial.image} alt={testimonial.name} width="300" height="400" loading="lazy" />
                            </div>
                            <div class="card-content testimonial-body">
                                <h3 class="category-name">{ testimonial.name }</h3>
                                <p class="muted">{ testimonial.story }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

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
        <main class="landing-page">
            <Hero />

            <AnimatedSection>
                { featured_stories() }
            </AnimatedSection>

            <AnimatedSection direction={RevealDirection::Left}>
                { split_feature(
                    "Be the Voice of Your Generation",
                    "Share your unique perspective and inspire others with your words. Join our community of passionate writers and make your mark on the world.",
                    "Start Writing Today",
                    WRITING_IMAGE,
                    "Writing",
                    false,
                ) }
            </AnimatedSection>

            <AnimatedSection>
                { categories() }
            </AnimatedSection>

            <AnimatedSection direction={RevealDirection::Right}>
                { split_feature(
                    "Join Our Thriving Community",
                    "Connect with like-minded writers, receive feedback on your work, and participate in writing challenges to hone your skills.",
                    "Explore Community",
                    COMMUNITY_IMAGE,
                    "Community",
                    true,
                ) }
            </AnimatedSection>

            <AnimatedSection>
                { resources() }
            </AnimatedSection>

            <AnimatedSection direction={RevealDirection::Left}>
                <div class="page-section section-muted">
                    <div class="container">
                        <h2 class="section-title">{"Subscription Packages"}</h2>
                        <PricingTabs />
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection direction={RevealDirection::Right}>
                { testimonials() }
            </AnimatedSection>

            <AnimatedSection>
                <div class="page-section section-muted">
                    <div class="container narrow centered-text">
                        <h2 class="section-title">{"Start Your Writing Journey Today"}</h2>
                        <p class="lead">
                            {"Join MONOBLOG and unlock your full potential as a writer. Whether you are a beginner or a seasoned author, we have the tools and community to help you succeed."}
                        </p>
                        <div class="cta-row">
                            <button class="btn btn-lg btn-dark">{"Sign Up Now"}</button>
                            <button class="btn btn-lg btn-outline">{"Learn More"}</button>
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <section class="closing">
                <div class="closing-background">
                    <img src={OPEN_BOOK_IMAGE} alt="Open book" loading="lazy" />
                    <div class="closing-shade"></div>
                </div>
                <div class="container narrow centered-text closing-content">
                    <h2 class="closing-title">{"Your Story Awaits"}</h2>
                    <p class="lead">{"Every great journey begins with a single word. Start yours today."}</p>
                    <button class="btn btn-lg btn-light">
                        {"Begin Your Journey"}
                        <Icon kind={IconKind::ArrowRight} class="btn-icon" />
                    </button>
                </div>
            </section>

            <style>
                {r#"
                    .landing-page {
                        padding-top: 4rem;
                        overflow-x: hidden;
                    }

                    .container {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .container.narrow {
                        max-width: 42rem;
                    }

                    .centered-text {
                        text-align: center;
                    }

                    .page-section {
                        padding: 5rem 0;
                    }

                    .section-muted {
                        background: #f3f4f6;
                    }

                    .section-dark {
                        background: #000000;
                        color: #ffffff;
                    }

                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 3rem;
                    }

                    .lead {
                        font-size: 1.25rem;
                        margin: 0 0 1.5rem;
                    }

                    .muted {
                        color: #4b5563;
                        margin: 0;
                    }

                    .grid {
                        display: grid;
                        gap: 2rem;
                    }

                    .grid-2 {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .grid-3 {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .card {
                        background: #ffffff;
                        color: #0f172a;
                        border: 1px solid #e2e8f0;
                        border-radius: 8px;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        overflow: hidden;
                    }

                    .card-header {
                        padding: 1.5rem 1.5rem 0.75rem;
                    }

                    .card-content {
                        padding: 1.5rem;
                    }

                    .card-footer {
                        display: flex;
                        padding: 0 1.5rem 1.5rem;
                    }

                    .card-footer.centered {
                        justify-content: center;
                    }

                    .card-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 6px;
                        border: 1px solid transparent;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .btn-lg {
                        padding: 0.75rem 2rem;
                    }

                    .btn-block {
                        width: 100%;
                    }

                    .btn-dark {
                        background: #000000;
                        color: #ffffff;
                    }

                    .btn-dark:hover {
                        background: #1f2937;
                    }

                    .btn-light {
                        background: #ffffff;
                        color: #000000;
                    }

                    .btn-light:hover {
                        background: #e5e7eb;
                    }

                    .btn-outline {
                        background: #ffffff;
                        color: #000000;
                        border-color: #e2e8f0;
                    }

                    .btn-outline:hover {
                        background: #f1f5f9;
                    }

                    .btn-outline-light {
                        background: transparent;
                        color: #ffffff;
                        border-color: #ffffff;
                    }

                    .btn-outline-light:hover {
                        background: #ffffff;
                        color: #000000;
                    }

                    .btn-icon {
                        width: 20px;
                        height: 20px;
                    }

                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: opacity, transform;
                    }

                    .hero-background img,
                    .closing-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                    }

                    .hero-content {
                        text-align: center;
                        color: #ffffff;
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }

                    .hero-content.entered {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                        text-shadow: 0 4px 8px rgba(0, 0, 0, 0.4);
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                        margin: 0 0 2rem;
                        text-shadow: 0 2px 4px rgba(0, 0, 0, 0.4);
                    }

                    .hero-cta-group,
                    .cta-row {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        margin-left: -16px;
                        color: #ffffff;
                        animation: bounceHint 1.5s ease-in-out infinite;
                    }

                    .hero-scroll-hint .icon {
                        width: 32px;
                        height: 32px;
                    }

                    @keyframes bounceHint {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }

                    .story-card {
                        cursor: pointer;
                    }

                    .story-image {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }

                    .story-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s ease;
                    }

                    .story-card:hover .story-image img {
                        transform: scale(1.1);
                    }

                    .story-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.4);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .story-card:hover .story-overlay {
                        opacity: 1;
                    }

                    .split {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .split > * {
                        flex: 1;
                    }

                    .split-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }

                    .split-image {
                        position: relative;
                    }

                    .split-image img {
                        position: relative;
                        z-index: 10;
                        max-width: 100%;
                        height: auto;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    }

                    .split-image-backdrop {
                        position: absolute;
                        inset: 0;
                        background: #bfdbfe;
                        border-radius: 8px;
                        transform: rotate(-6deg);
                    }

                    .split-image.tilt-right .split-image-backdrop {
                        background: #3b82f6;
                        transform: rotate(6deg);
                    }

                    .category-card {
                        cursor: pointer;
                    }

                    .category-body {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }

                    .category-icon {
                        width: 48px;
                        height: 48px;
                        color: #4b5563;
                        flex-shrink: 0;
                    }

                    .category-name {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .resource-card {
                        text-align: center;
                    }

                    .resource-icon {
                        display: block;
                        width: 48px;
                        height: 48px;
                        margin: 0 auto 1rem;
                        color: #3b82f6;
                    }

                    .testimonial-card {
                        display: flex;
                    }

                    .testimonial-photo {
                        flex: 0 0 33.333%;
                    }

                    .testimonial-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .testimonial-body {
                        flex: 1;
                    }

                    .closing {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }

                    .closing-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .closing-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }

                    .closing-content {
                        position: relative;
                        z-index: 10;
                        color: #ffffff;
                    }

                    .closing-title {
                        font-size: 3rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }

                    @media (max-width: 768px) {
                        .grid-2,
                        .grid-3 {
                            grid-template-columns: 1fr;
                        }

                        .hero-title {
                            font-size: 3rem;
                        }

                        .hero-subtitle {
                            font-size: 1.25rem;
                        }

                        .split,
                        .testimonial-card {
                            flex-direction: column;
                        }

                        .split-image {
                            width: 100%;
                        }

                        .cta-row {
                            flex-direction: column;
                            align-items: center;
                        }

                        .closing-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

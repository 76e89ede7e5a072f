//! Portfolio Frontend App
//!
//! Router shell: the public landing page, the login page and the
//! dashboard pages, with the session store provided app-wide.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use reactive_stores::Store;

use crate::components::{
    About, Contact, CustomCursor, Dashboard, Experience, Footer, Header, Hero, Login,
    ProgressBar, Projects, UpdateProject,
};
use crate::session::SessionState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session seeded from localStorage; guards and the header read it.
    provide_context(Store::new(SessionState::load()));

    view! {
        <div class="min-h-screen overflow-x-hidden bg-black">
            <Router>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=Portfolio />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/dashboard") view=Dashboard />
                    <Route path=path!("/dashboard/update/:id") view=UpdateProject />
                </Routes>
            </Router>
        </div>
    }
}

/// The public landing page. Dashboard routes guard themselves; everything
/// here renders for anonymous visitors.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <SeoMeta />
        <Header />
        <Hero />
        <CustomCursor />
        <About />
        <Projects />
        <Experience />
        <Contact />
        <Footer />
        <ProgressBar />
    }
}

/// Head metadata for the landing page. The header owns the document
/// title once section tracking starts.
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Jefta Supraja - Full Stack Dev" />

        <Meta name="description" content="Full Stack Developer Portfolio" />
        <Meta name="keywords" content="full stack developer, web developer, portfolio, react, node.js" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://3d-portfolio-spline.vercel.app/" />
        <Meta property="og:title" content="Jefta Supraja - Full Stack Dev" />
        <Meta property="og:description" content="Full Stack Developer Portfolio" />
        <Meta property="og:image" content="/og-image.jpg" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Jefta Supraja - Full Stack Dev" />
        <Meta name="twitter:description" content="Full Stack Developer Portfolio" />
        <Meta name="twitter:image" content="/og-image.jpg" />
    }
}

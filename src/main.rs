use log::{info, Level};
use yew::prelude::*;

mod config;
mod quote {
    pub mod delivery;
    pub mod form;
    pub mod scroll_lock;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod our_story;
    pub mod process;
    pub mod progress_bar;
    pub mod services;
    pub mod star_field;
    pub mod testimonials;
    pub mod whatsapp_button;
}

use components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar,
    our_story::OurStory, process::Process, progress_bar::ProgressBar, services::Services,
    star_field::StarField, testimonials::Testimonials, whatsapp_button::WhatsAppButton,
};
use quote::form::QuoteForm;

#[function_component]
fn App() -> Html {
    let show_quote_form = use_state(|| false);

    let open_quote_form = {
        let show_quote_form = show_quote_form.clone();
        Callback::from(move |_: ()| show_quote_form.set(true))
    };

    let close_quote_form = {
        let show_quote_form = show_quote_form.clone();
        Callback::from(move |_: ()| show_quote_form.set(false))
    };

    html! {
        <div class="site">
            <ProgressBar />
            <StarField />
            <Navbar on_get_quote={open_quote_form.clone()} />
            <main>
                <Hero on_get_quote={open_quote_form.clone()} />
                <About />
                <Services on_get_quote={open_quote_form.clone()} />
                <Process />
                <OurStory />
                <Testimonials />
                <Contact on_get_quote={open_quote_form} />
            </main>
            <Footer />
            <WhatsAppButton />
            <QuoteForm show={*show_quote_form} on_close={close_quote_form} />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

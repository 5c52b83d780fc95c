use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::quote::scroll_lock::ScrollLock;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#process", "Process"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_get_quote: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    // The overlay menu holds the same scroll lock as the quote modal.
    let menu_lock = use_mut_ref(|| None::<ScrollLock>);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(y) = win.scroll_y() {
                            scrolled.set(y > 50.0);
                        }
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let menu_lock = menu_lock.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = !*menu_open;
            *menu_lock.borrow_mut() = opening.then(ScrollLock::acquire);
            menu_open.set(opening);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let menu_lock = menu_lock.clone();
        Callback::from(move |_: MouseEvent| {
            menu_lock.borrow_mut().take();
            menu_open.set(false);
        })
    };

    let open_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(()))
    };

    let open_quote_from_menu = {
        let on_get_quote = props.on_get_quote.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            on_get_quote.emit(());
        })
    };

    let header_class = if *scrolled {
        "top-nav scrolled"
    } else {
        "top-nav"
    };
    let menu_class = if *menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <header class={header_class}>
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                padding: 1rem 0;
                background: transparent;
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(8, 14, 28, 0.95);
                backdrop-filter: blur(10px);
                box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
            }
            .nav-row {
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-brand {
                font-size: 1.5rem;
                font-weight: 700;
                z-index: 60;
            }
            .nav-links {
                display: none;
                align-items: center;
                gap: 1.5rem;
            }
            .nav-links a {
                font-size: 0.9rem;
                color: #fff;
                transition: color 0.2s ease;
            }
            .nav-links a:hover {
                color: #03e9f4;
            }
            .nav-quote-btn {
                padding: 0.5rem 1.2rem;
                font-size: 0.9rem;
            }
            .burger {
                display: block;
                background: none;
                color: #fff;
                font-size: 1.5rem;
                z-index: 60;
            }
            .mobile-menu {
                position: fixed;
                inset: 0;
                z-index: 55;
                background: rgba(8, 14, 28, 0.98);
                backdrop-filter: blur(12px);
                display: flex;
                flex-direction: column;
                justify-content: center;
                align-items: center;
                gap: 2rem;
                transform: translateX(100%);
                transition: transform 0.3s ease-in-out;
            }
            .mobile-menu.open {
                transform: translateX(0);
            }
            .mobile-menu a {
                font-size: 1.4rem;
                color: #fff;
            }
            .mobile-menu a:hover {
                color: #03e9f4;
            }
            .mobile-quote-btn {
                padding: 0.85rem 2rem;
                font-size: 1.1rem;
            }
            @media (min-width: 1024px) {
                .nav-links {
                    display: flex;
                }
                .burger,
                .mobile-menu {
                    display: none;
                }
            }"#}
            </style>
            <div class="container nav-row">
                <a href="#" class="nav-brand"><span class="gradient-text">{"PIX2PIXEL"}</span></a>
                <nav class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{*label}</a>
                        }).collect::<Html>()
                    }
                    <button class="blue-gradient-btn nav-quote-btn" onclick={open_quote}>
                        {"Get a Quote"}
                    </button>
                </nav>
                <button class="burger" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={menu_class}>
                {
                    NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }).collect::<Html>()
                }
                <button class="blue-gradient-btn mobile-quote-btn" onclick={open_quote_from_menu}>
                    {"Get a Quote"}
                </button>
            </div>
        </header>
    }
}

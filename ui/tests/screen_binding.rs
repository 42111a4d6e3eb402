//! Mounts the shell's viewport in a headless `VirtualDom` and checks that
//! screen lifetimes follow the navigator.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;

use ui::components::{use_shell_context, ShellContext, Viewport};
use ui::core::config::FlowConfig;
use ui::core::flow::Screen;
use ui::i18n;

/// Hands the shell context out of the dom so the test can drive it.
#[derive(Clone, Default)]
struct ShellSlot(Rc<RefCell<Option<ShellContext>>>);

impl PartialEq for ShellSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ShellSlot {
    fn get(&self) -> ShellContext {
        self.0.borrow().expect("shell mounted")
    }
}

#[component]
fn Harness(config: FlowConfig, slot: ShellSlot) -> Element {
    let shell = use_shell_context(config);
    use_hook(move || *slot.0.borrow_mut() = Some(shell));
    rsx! { Viewport {} }
}

fn mount(initial_screen: Screen) -> (VirtualDom, ShellContext) {
    let slot = ShellSlot::default();
    let config = FlowConfig {
        initial_screen,
        ..FlowConfig::default()
    };
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            config,
            slot: slot.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, slot.get())
}

#[tokio::test]
async fn leaving_splash_cancels_its_timer() {
    let (mut dom, shell) = mount(Screen::Splash);
    let pending = dom.in_runtime(|| shell.flow.pending());
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].target(), Screen::GetStarted);

    dom.in_runtime(|| shell.flow.navigate(Screen::GetStarted));
    dom.render_immediate_to_vec();

    assert_eq!(dom.in_runtime(|| shell.flow.current()), Screen::GetStarted);
    assert!(dom.in_runtime(|| shell.flow.pending()).is_empty());
}

#[tokio::test]
async fn same_screen_navigation_remounts() {
    let (mut dom, shell) = mount(Screen::Splash);
    let first = dom.in_runtime(|| shell.flow.pending());
    assert_eq!(first.len(), 1);

    dom.in_runtime(|| shell.flow.navigate(Screen::Splash));
    dom.render_immediate_to_vec();

    let second = dom.in_runtime(|| shell.flow.pending());
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].owner().screen(), Screen::Splash);
    assert_ne!(second[0].owner().instance(), first[0].owner().instance());
}

#[tokio::test]
async fn language_switch_rerenders_the_screen() {
    i18n::init();
    i18n::set_language("en-US").unwrap();
    let (mut dom, shell) = mount(Screen::Email);
    assert!(dioxus_ssr::render(&dom).contains("Enter your email"));

    i18n::set_language("es-ES").unwrap();
    dom.in_runtime(|| {
        let mut language = shell.language;
        language.set("es-ES".to_string());
    });
    dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);

    i18n::set_language("en-US").unwrap();
    assert!(html.contains("Introduce tu correo"), "{html}");
}

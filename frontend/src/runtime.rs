//! Glue between the coordinator and the live page: feeds it signals and
//! carries out the effects it answers with.

use crate::config::LandingConfig;
use crate::core::analytics::AnalyticsSink;
use crate::core::back_to_top::{BackToTopView, VisibilityToggle};
use crate::core::coordinator::{LandingCoordinator, PageLayout};
use crate::core::dispatcher::{forward_tracking, Effect, Signal};
use crate::core::navbar::NavbarState;
use crate::core::parallax::translate_y;
use crate::dom::layout::REVEALED_CLASS;
use crate::dom::viewport::DomViewport;
use crate::dom::{self, widgets};
use crate::error::FrontendError;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// The part of the coordinator's output that Yew renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub navbar: NavbarState,
    pub active_link: Option<String>,
    pub back_to_top: BackToTopView,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            navbar: NavbarState::default(),
            active_link: None,
            back_to_top: VisibilityToggle::Hidden.into(),
        }
    }
}

pub enum PageAction {
    Navbar(NavbarState),
    ActiveLink(Option<String>),
    BackToTop(BackToTopView),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::Navbar(navbar) => next.navbar = navbar,
            PageAction::ActiveLink(link) => next.active_link = link,
            PageAction::BackToTop(view) => next.back_to_top = view,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub struct PageRuntime {
    coordinator: RefCell<LandingCoordinator>,
    viewport: DomViewport,
    sink: Box<dyn AnalyticsSink>,
    state: UseReducerDispatcher<PageState>,
}

impl PageRuntime {
    pub fn new(
        config: &LandingConfig,
        layout: PageLayout,
        sink: Box<dyn AnalyticsSink>,
        state: UseReducerDispatcher<PageState>,
    ) -> Result<Rc<Self>, FrontendError> {
        let viewport = DomViewport::new(dom::window()?, dom::document()?);
        Ok(Rc::new(Self {
            coordinator: RefCell::new(LandingCoordinator::new(config, layout)),
            viewport,
            sink,
            state,
        }))
    }

    /// Feeds the current scroll offset in as a tick.
    pub fn tick(self: &Rc<Self>) {
        use crate::core::viewport::ViewportProbe;

        let offset = self.viewport.current_offset();
        self.dispatch(Signal::Scroll { offset });
    }

    pub fn dispatch(self: &Rc<Self>, signal: Signal) {
        // released before applying, since timers may re-enter
        let effects = self
            .coordinator
            .borrow_mut()
            .handle(&signal, dom::now_ms(), &self.viewport);

        for effect in &effects {
            if let Err(e) = self.apply(effect) {
                log::warn!("could not apply {:?}: {}", effect, e);
            }
        }
        forward_tracking(&effects, self.sink.as_ref());
    }

    fn apply(self: &Rc<Self>, effect: &Effect) -> Result<(), FrontendError> {
        match effect {
            Effect::Navbar(navbar) => self.state.dispatch(PageAction::Navbar(*navbar)),
            Effect::ActiveLink(link) => self.state.dispatch(PageAction::ActiveLink(link.clone())),
            Effect::BackToTop(view) => self.state.dispatch(PageAction::BackToTop(*view)),
            Effect::Parallax { key, translate_y: px } => {
                let element: HtmlElement = dom::element_by_id(key)?.unchecked_into();
                element.style().set_property("transform", &translate_y(*px))?;
            }
            Effect::Reveal { key } => {
                dom::element_by_id(key)?.class_list().add_1(REVEALED_CLASS)?;
            }
            Effect::ScheduleTimer { token, delay_ms } => {
                let runtime = Rc::downgrade(self);
                let token = token.clone();
                Timeout::new(*delay_ms, move || {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.dispatch(Signal::Timer(token));
                    }
                })
                .forget();
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                dom::window()?.scroll_to_with_scroll_to_options(&options);
            }
            Effect::CollapseMenu => widgets::collapse_navbar()?,
            Effect::Track(_) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navbar::{NavbarAppearance, NavbarVisibility};

    #[test]
    fn equal_actions_keep_the_same_state() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::ActiveLink(None));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn actions_replace_their_slice_only() {
        let state = Rc::new(PageState::default());
        let scrolled = NavbarState {
            appearance: NavbarAppearance::Scrolled,
            visibility: NavbarVisibility::Hidden,
        };
        let next = state
            .reduce(PageAction::Navbar(scrolled))
            .reduce(PageAction::ActiveLink(Some("services".into())));
        assert_eq!(next.navbar, scrolled);
        assert_eq!(next.active_link.as_deref(), Some("services"));
        assert!(!next.back_to_top.displayed);
    }
}

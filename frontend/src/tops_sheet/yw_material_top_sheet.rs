//! Slide-down sheet used for modal prompts.
//!
//! The sheet is always mounted; visibility is driven by the `show` class,
//! toggled shortly after the call so the CSS transition runs.

use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";
const TOGGLE_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, false);
}

fn toggle_later(top_sheet_ref: NodeRef, show: bool) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOGGLE_DELAY_MS).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    });
}

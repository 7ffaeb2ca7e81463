//! Update function for the grading rubric form.
//!
//! Elm-style: receives the component state, the `Context`, and a `Msg`,
//! applies it to the `RubricManager`, and returns whether to re-render.
//! User feedback goes through toasts; deletion goes through the
//! confirmation top sheet instead of a blocking browser dialog.

use rubric_common::DeleteOutcome;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{scroll_to_top, show_toast};
use super::messages::Msg;
use super::state::RubricManagerComponent;

pub fn update(
    component: &mut RubricManagerComponent,
    _ctx: &Context<RubricManagerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::NewForm => {
            component.manager.reset();
            true
        }
        Msg::SetField(field, value) => {
            component.manager.set_field(field, value);
            true
        }
        Msg::SetScore(index, value) => match component.manager.set_score(index, value) {
            Ok(()) => true,
            Err(err) => {
                gloo_console::error!(err.to_string());
                false
            }
        },
        Msg::Save => {
            match component.manager.save() {
                Ok(_) => show_toast("Rubric saved!"),
                Err(err) => show_toast(&err.to_string()),
            }
            true
        }
        Msg::Load(id) => {
            if component.manager.load(id).is_some() {
                scroll_to_top();
                true
            } else {
                show_toast("That rubric is no longer saved.");
                false
            }
        }
        Msg::RequestDelete(id) => match component.manager.request_delete(id) {
            Some(request) => {
                component.pending_delete = Some(request);
                open_top_sheet(component.confirm_dialog_ref.clone());
                true
            }
            None => false,
        },
        Msg::ConfirmDelete => {
            if let Some(request) = component.pending_delete.take() {
                if let DeleteOutcome::Deleted(rubric) =
                    component.manager.resolve_delete(request, true)
                {
                    show_toast(&format!("Deleted the rubric for {}.", rubric.student_name.trim()));
                }
            }
            close_top_sheet(component.confirm_dialog_ref.clone());
            true
        }
        Msg::CancelDelete => {
            if let Some(request) = component.pending_delete.take() {
                component.manager.resolve_delete(request, false);
            }
            close_top_sheet(component.confirm_dialog_ref.clone());
            true
        }
    }
}

use crate::components::rubric::{Msg, RubricManagerComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use yew::html::Scope;
use yew::prelude::*;

/// Confirmation sheet for the pending deletion, if any.
pub fn confirm_delete_dialog(
    component: &RubricManagerComponent,
    link: &Scope<RubricManagerComponent>,
) -> Html {
    html! {
        <YwMaterialTopSheet node_ref={component.confirm_dialog_ref.clone()}>
            <div class="sheet-backdrop">
                <div class="sheet-panel">
                    {
                        if let Some(request) = &component.pending_delete {
                            html! {
                                <>
                                    <p class="sheet-message">{ request.prompt() }</p>
                                    <div class="sheet-actions">
                                        <button class="btn btn-gray" onclick={link.callback(|_| Msg::CancelDelete)}>
                                            { "Cancel" }
                                        </button>
                                        <button class="btn btn-red" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                                            <i class="material-icons">{ "delete" }</i>
                                            { "Delete" }
                                        </button>
                                    </div>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

//! View rendering for the grading rubric form.
//!
//! Two cards: the editor (header buttons, student info, criteria table with
//! the running total) and, once anything is saved, the saved rubric list.
//! The delete confirmation sheet is always mounted and shown on demand.

use rubric_common::{Rubric, RubricField};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::confirm_delete_dialog;
use super::helpers::format_points;
use super::messages::Msg;
use super::state::RubricManagerComponent;

pub fn view(component: &RubricManagerComponent, ctx: &Context<RubricManagerComponent>) -> Html {
    let link = ctx.link();
    let current = component.manager.current();

    html! {
        <div class="rubric-root">
            <div class="rubric-card">
                { build_header(&ctx.props().title, link) }
                { build_info_fields(current, link) }
                { build_criteria_table(current, link) }
            </div>
            { build_saved_list(component.manager.rubrics(), link) }
            { confirm_delete_dialog(component, link) }
        </div>
    }
}

fn build_header(title: &AttrValue, link: &Scope<RubricManagerComponent>) -> Html {
    html! {
        <div class="rubric-header">
            <h1>{ title.clone() }</h1>
            <div class="header-actions">
                { icon_button("add", "New form", "btn-green", link.callback(|_| Msg::NewForm)) }
                { icon_button("save", "Save", "btn-blue", link.callback(|_| Msg::Save)) }
            </div>
        </div>
    }
}

fn build_info_fields(rubric: &Rubric, link: &Scope<RubricManagerComponent>) -> Html {
    html! {
        <div class="info-grid">
            { info_input("Student name", RubricField::StudentName, rubric, "text", "Enter name", link) }
            { info_input("Grade", RubricField::Grade, rubric, "text", "Enter grade", link) }
            { info_input("Date", RubricField::Date, rubric, "date", "", link) }
        </div>
    }
}

fn info_input(
    label: &'static str,
    field: RubricField,
    rubric: &Rubric,
    input_type: &'static str,
    placeholder: &'static str,
    link: &Scope<RubricManagerComponent>,
) -> Html {
    html! {
        <div>
            <label class="field-label">{ label }</label>
            <input
                type={input_type}
                class="field-input"
                value={rubric.field(field).to_string()}
                placeholder={placeholder}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })}
            />
        </div>
    }
}

fn build_criteria_table(rubric: &Rubric, link: &Scope<RubricManagerComponent>) -> Html {
    let rows = rubric
        .criteria
        .iter()
        .enumerate()
        .map(|(index, criterion)| {
            let score_class = classes!(
                "score-input",
                (!criterion.is_in_range()).then_some("out-of-range")
            );
            html! {
                <tr key={index}>
                    <td class="criterion-name">{ criterion.name.clone() }</td>
                    <td class="band">{ criterion.excellent.clone() }</td>
                    <td class="band">{ criterion.satisfactory.clone() }</td>
                    <td class="band">{ criterion.needs_improvement.clone() }</td>
                    <td class="center strong">{ format!("{} pts", criterion.max_points) }</td>
                    <td>
                        <input
                            type="number"
                            min="0"
                            max={criterion.max_points.to_string()}
                            class={score_class}
                            value={criterion.score.clone()}
                            placeholder="Score"
                            oninput={link.callback(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetScore(index, input.value())
                            })}
                        />
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="table-wrap">
            <table class="rubric-table">
                <thead>
                    <tr>
                        <th class="col-name">{ "Criterion" }</th>
                        <th>{ "Excellent (A)" }</th>
                        <th>{ "Satisfactory (B)" }</th>
                        <th>{ "Needs Improvement (C)" }</th>
                        <th class="col-points">{ "Points" }</th>
                        <th class="col-points">{ "Score" }</th>
                    </tr>
                </thead>
                <tbody>
                    { rows }
                    <tr class="total-row">
                        <td colspan="4" class="right">{ "Total" }</td>
                        <td class="center">{ format!("{} pts", rubric.max_total()) }</td>
                        <td class="center total-value">{ format!("{} pts", format_points(rubric.total())) }</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

fn build_saved_list(rubrics: &[Rubric], link: &Scope<RubricManagerComponent>) -> Html {
    if rubrics.is_empty() {
        return html! {};
    }

    html! {
        <div class="rubric-card">
            <h2 class="saved-title">
                <i class="material-icons">{ "description" }</i>
                { format!("Saved rubrics ({})", rubrics.len()) }
            </h2>
            <div class="saved-list">
                { for rubrics.iter().map(|rubric| saved_entry(rubric, link)) }
            </div>
        </div>
    }
}

fn saved_entry(rubric: &Rubric, link: &Scope<RubricManagerComponent>) -> Html {
    let id = rubric.id;
    html! {
        <div key={id.to_string()} class="saved-entry">
            <div class="saved-info">
                <h3>{ rubric.student_name.clone() }</h3>
                <div class="saved-meta">
                    { format!(
                        "Grade: {} | Date: {} | Total: {}/{}",
                        rubric.grade,
                        rubric.date,
                        format_points(rubric.total()),
                        rubric.max_total()
                    ) }
                </div>
            </div>
            <div class="saved-actions">
                <button class="btn btn-blue" onclick={link.callback(move |_| Msg::Load(id))}>
                    { "Load" }
                </button>
                { icon_button("delete", "Delete", "btn-red", link.callback(move |_| Msg::RequestDelete(id))) }
            </div>
        </div>
    }
}

/// Renders a button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, color: &'static str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class={classes!("btn", color)} onclick={on_click}>
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}

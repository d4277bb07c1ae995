// File: src/select.rs
// Purpose: Render choice sets as HTML <select> elements

use maud::{html, Markup};

use crate::choices::Choices;

/// Render a `<select>` for `choices`, marking `selected` as chosen.
///
/// The empty (`None`) option renders with `value=""` so submitting it comes
/// back as a blank field.
pub fn render_select(name: &str, choices: &Choices, selected: Option<i64>) -> Markup {
    html! {
        select name=(name) id=(name) {
            @for choice in choices {
                @let value = choice.value.map(|v| v.to_string()).unwrap_or_default();
                option value=(value) selected[choice.value == selected] { (choice.label) }
            }
        }
    }
}

use campus_business::{ROLE_OPTIONS, STATUS_OPTIONS, SearchFilters, option_label};
use campus_states::StateCtx;
use egui::{ComboBox, Key, TextEdit, Ui};

const QUERY_WIDTH: f32 = 240.0;

/// Query text, role and status selectors, and the Search button.
///
/// Returns `true` when a search was requested (button or Enter in the text input).
pub fn search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> bool {
    let filters = state_ctx.state_mut::<SearchFilters>();

    let query = ui.add(
        TextEdit::singleline(&mut filters.query)
            .hint_text("Search by name or email")
            .desired_width(QUERY_WIDTH),
    );
    let submitted = query.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    filter_combo(ui, "role_filter", &mut filters.role, ROLE_OPTIONS);
    filter_combo(ui, "status_filter", &mut filters.status, STATUS_OPTIONS);

    let clicked = ui.button("🔍 Search").clicked();

    submitted || clicked
}

fn filter_combo(ui: &mut Ui, id: &str, value: &mut String, options: &[(&str, &str)]) {
    let selected = option_label(options, value).to_owned();
    ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (option, label) in options {
                ui.selectable_value(value, (*option).to_owned(), *label);
            }
        });
}

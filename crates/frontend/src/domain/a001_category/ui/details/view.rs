use super::view_model::CategoryDetailsViewModel;
use crate::app::Services;
use crate::shared::components::media_picker::MediaPicker;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    editing: Option<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let vm = CategoryDetailsViewModel::new(editing);
    let saving = Signal::derive(move || vm.submit.with(|s| s.saving));

    view! {
        <div class="details-container category-details">
            {move || vm.submit.get().error.map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name *"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.draft.with(|d| d.name.clone())
                        on:input=move |ev| vm.draft.update(|d| d.name = event_target_value(&ev))
                        placeholder="Category name"
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.draft.with(|d| d.description.clone())
                        on:input=move |ev| vm.draft.update(|d| d.description = event_target_value(&ev))
                        rows="3"
                        disabled=move || saving.get()
                    />
                </div>

                <MediaPicker
                    label="Cover image"
                    slots=Signal::derive(move || vm.cover_slots())
                    notice=Signal::derive(move || vm.cover_notice())
                    on_select=Callback::new(move |files| vm.select_cover(files))
                    on_remove=Callback::new(move |index| vm.remove_cover(index))
                    disabled=saving
                />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let store = services.categories.clone();
                        move |_| vm.save_command(store.clone(), on_saved)
                    }
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {move || match (saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Saving...",
                        (false, true) => "Save",
                        (false, false) => "Create",
                    }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
